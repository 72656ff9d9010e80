use crate::{Position, TileRef};

use super::EditState;

/// One captured cell of a selection, relative to the region origin.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectionCell {
    pub rel: Position,
    pub tile: TileRef,
}

/// Rectangular selection region plus optional captured content.
///
/// Until content is copied the selection is only a region marker (for
/// size preview and delete); with content it becomes a paintable
/// stamp. The region grows from its anchor toward the pointer, never
/// moving the anchor.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Selection {
    pub active: bool,
    pub start: Position,
    pub width: i32,
    pub height: i32,
    pub content: Option<Vec<SelectionCell>>,
}

impl Selection {
    pub fn has_content(&self) -> bool {
        self.content.is_some()
    }
}

impl EditState {
    /// Open a 1x1 region anchored at `pos`, discarding any previous
    /// content.
    pub fn begin_selection(&mut self, pos: Position) {
        self.selection = Selection {
            active: true,
            start: pos,
            width: 1,
            height: 1,
            content: None,
        };
        self.show_cursor(pos, 1, 1);
    }

    /// Grow or shrink the open region from the anchor toward `pos`.
    /// No-op once content has been captured.
    pub fn resize_selection(&mut self, pos: Position) {
        if !self.selection.active || self.selection.has_content() {
            return;
        }
        self.selection.width = (pos.x - self.selection.start.x + 1).max(1);
        self.selection.height = (pos.y - self.selection.start.y + 1).max(1);

        let (start, width, height) = (self.selection.start, self.selection.width, self.selection.height);
        self.show_cursor(start, width, height);
    }

    /// Snapshot every non-empty cell of the region into the selection
    /// content. Cells outside the grid are skipped.
    pub fn copy_selection(&mut self) {
        if !self.selection.active {
            return;
        }
        let Selection { start, width, height, .. } = self.selection;

        let mut content = Vec::new();
        for y in 0..height {
            for x in 0..width {
                if let Some(tile) = self.map().get_tile(self.current_layer(), start.x + x, start.y + y) {
                    content.push(SelectionCell {
                        rel: Position::new(x, y),
                        tile,
                    });
                }
            }
        }
        self.selection.content = Some(content);
    }

    /// Mirror the captured content around the region's vertical axis.
    /// A pure rebuild of the content list; no-op without content.
    pub fn flip_selection_horizontal(&mut self) {
        if !self.selection.active {
            return;
        }
        let width = self.selection.width;
        let Some(content) = self.selection.content.take() else {
            return;
        };

        let flipped = content
            .into_iter()
            .map(|cell| SelectionCell {
                rel: cell.rel.with_x(width - 1 - cell.rel.x),
                tile: cell.tile,
            })
            .collect();
        self.selection.content = Some(flipped);
    }

    /// Stamp the captured content at `target` as one transaction.
    /// Entries landing outside the grid are skipped; no-op without
    /// content.
    pub fn place_selection(&mut self, target: Position) {
        let Some(content) = self.selection.content.clone() else {
            return;
        };

        self.undo_log_mut().begin_action();
        for cell in content {
            let pos = target + cell.rel;
            if self.map().is_in_bounds(pos.x, pos.y) {
                self.write_cell(pos.x, pos.y, Some(cell.tile));
            }
        }
        self.undo_log_mut().end_action();
    }

    /// Clear every cell of the region (content snapshot or not) as one
    /// transaction, then deactivate the selection.
    pub fn delete_selection(&mut self) {
        if !self.selection.active {
            return;
        }
        let Selection { start, width, height, .. } = self.selection;

        self.undo_log_mut().begin_action();
        for y in 0..height {
            for x in 0..width {
                self.write_cell(start.x + x, start.y + y, None);
            }
        }
        self.undo_log_mut().end_action();

        self.selection.active = false;
        self.clear_cursor();
    }
}
