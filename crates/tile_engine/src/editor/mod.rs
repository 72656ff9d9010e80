pub mod undo_stack;
pub use undo_stack::{EditAction, TileChange, UndoLog, UndoState};

mod edit_operations;

mod selection_operations;
pub use selection_operations::{Selection, SelectionCell};

pub mod tools;
pub use tools::{SelectionCommand, ShapeStyle, Tool};

use crate::{Cell, Position, Result, TileError, TileMap, TileRef};
use tools::ShapeDraw;

/// Highlight request for the cursor/selection sink: a cell-aligned
/// rectangle the rendering collaborator outlines.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CursorRect {
    pub pos: Position,
    pub width: i32,
    pub height: i32,
}

/// One editing session over a tile map.
///
/// Owns the grid, the transaction log, the selection buffer and the
/// transient tool state. Single-writer and synchronous: every pointer
/// event is handled to completion before the next one.
pub struct EditState {
    map: TileMap,
    undo_log: UndoLog,

    current_layer: String,
    brush: Option<TileRef>,

    tool: Tool,
    pub(crate) selection: Selection,
    pub(crate) shape: ShapeDraw,
    pub(crate) is_drawing: bool,
    pub(crate) last_paint: Position,

    cursor: Option<CursorRect>,
}

impl EditState {
    /// Wrap an existing map. The first layer becomes current.
    pub fn from_map(map: TileMap) -> Self {
        let current_layer = map.layers().first().map(|l| l.id.clone()).unwrap_or_default();
        Self {
            map,
            undo_log: UndoLog::new(),
            current_layer,
            brush: None,
            tool: Tool::default(),
            selection: Selection::default(),
            shape: ShapeDraw::default(),
            is_drawing: false,
            last_paint: Position::default(),
            cursor: None,
        }
    }

    /// Create a session with the stock ground/objects/overlay layers.
    pub fn new(width: i32, height: i32, tile_size: i32) -> Result<Self> {
        let mut map = TileMap::new(width, height, tile_size)?;
        map.add_layer("ground", "Ground");
        map.add_layer("objects", "Objects");
        map.add_layer("overlay", "Overlay");
        Ok(Self::from_map(map))
    }

    pub fn map(&self) -> &TileMap {
        &self.map
    }

    pub fn map_mut(&mut self) -> &mut TileMap {
        &mut self.map
    }

    /// Replace the map wholesale (the import path). History, selection
    /// and transient tool state do not survive a replacement.
    pub fn replace_map(&mut self, map: TileMap) {
        self.current_layer = map.layers().first().map(|l| l.id.clone()).unwrap_or_default();
        self.map = map;
        self.undo_log.clear();
        self.selection = Selection::default();
        self.shape = ShapeDraw::default();
        self.is_drawing = false;
        self.cursor = None;
    }

    pub fn current_layer(&self) -> &str {
        &self.current_layer
    }

    pub fn set_current_layer(&mut self, id: &str) -> Result<()> {
        if !self.map.has_layer(id) {
            return Err(TileError::layer_not_found(id));
        }
        self.current_layer = id.to_string();
        Ok(())
    }

    /// The tile stamped by paint, fill and shape operations. `None`
    /// makes every such operation a silent no-op.
    pub fn brush(&self) -> Option<&TileRef> {
        self.brush.as_ref()
    }

    pub fn set_brush(&mut self, brush: Option<TileRef>) {
        self.brush = brush;
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn undo_log(&self) -> &UndoLog {
        &self.undo_log
    }

    pub(crate) fn undo_log_mut(&mut self) -> &mut UndoLog {
        &mut self.undo_log
    }

    // =========================================================================
    // Cursor highlight sink
    // =========================================================================

    pub fn cursor(&self) -> Option<CursorRect> {
        self.cursor
    }

    pub fn show_cursor(&mut self, pos: Position, width: i32, height: i32) {
        self.cursor = Some(CursorRect { pos, width, height });
    }

    pub fn clear_cursor(&mut self) {
        self.cursor = None;
    }

    // =========================================================================
    // Recorded writes
    // =========================================================================

    /// Write a cell on the current layer and record the change into
    /// the open action. Out-of-bounds writes are silent no-ops and
    /// record nothing.
    pub(crate) fn write_cell(&mut self, x: i32, y: i32, cell: Cell) -> bool {
        let layer_id = self.current_layer.clone();
        let Some(old) = self.map.set_tile(&layer_id, x, y, cell.clone()) else {
            return false;
        };
        self.undo_log.record_change(TileChange {
            layer_id,
            x,
            y,
            old,
            new: cell,
        });
        true
    }
}

impl UndoState for EditState {
    fn can_undo(&self) -> bool {
        self.undo_log.can_undo()
    }

    fn undo(&mut self) -> Result<()> {
        self.undo_log.undo(&mut self.map);
        Ok(())
    }

    fn can_redo(&self) -> bool {
        self.undo_log.can_redo()
    }

    fn redo(&mut self) -> Result<()> {
        self.undo_log.redo(&mut self.map);
        Ok(())
    }
}
