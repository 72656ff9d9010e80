use std::collections::HashMap;

use crate::{Cell, Result, TileError, TileRef};

/// A named, independently visible layer of tiles.
///
/// Tiles are stored sparsely, keyed by cell index `y * width + x`;
/// absence means the cell is empty. The map owns the dimensions, so a
/// layer never carries its own width/height.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    pub id: String,
    pub name: String,
    pub visible: bool,
    pub(crate) tiles: HashMap<usize, TileRef>,
}

impl Layer {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            visible: true,
            tiles: HashMap::new(),
        }
    }

    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}

/// A cell write, queued for the rendering collaborator.
#[derive(Debug, Clone, PartialEq)]
pub struct CellUpdate {
    pub layer_id: String,
    pub x: i32,
    pub y: i32,
    pub cell: Cell,
}

/// The tile grid: dimensions plus an ordered list of layers.
///
/// `set_tile` is the only path by which tile content changes; every
/// applied write is also queued as a [`CellUpdate`] so a renderer can
/// poll for redraws via [`TileMap::take_cell_updates`].
#[derive(Debug)]
pub struct TileMap {
    width: i32,
    height: i32,
    tile_size: i32,
    layers: Vec<Layer>,
    cell_updates: Vec<CellUpdate>,
}

impl TileMap {
    /// Create an empty map. Dimensions must be positive.
    pub fn new(width: i32, height: i32, tile_size: i32) -> Result<Self> {
        if width <= 0 || height <= 0 || tile_size <= 0 {
            return Err(TileError::InvalidMapSize { width, height, tile_size });
        }
        Ok(Self {
            width,
            height,
            tile_size,
            layers: Vec::new(),
            cell_updates: Vec::new(),
        })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn tile_size(&self) -> i32 {
        self.tile_size
    }

    pub fn is_in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width && y >= 0 && y < self.height
    }

    fn cell_index(&self, x: i32, y: i32) -> usize {
        (y * self.width + x) as usize
    }

    /// Replace the map dimensions.
    ///
    /// All layers survive but their tile content is reset; the import
    /// path is the one that preserves content across a size change.
    pub fn resize(&mut self, width: i32, height: i32, tile_size: i32) -> Result<()> {
        if width <= 0 || height <= 0 || tile_size <= 0 {
            return Err(TileError::InvalidMapSize { width, height, tile_size });
        }
        self.width = width;
        self.height = height;
        self.tile_size = tile_size;
        for layer in &mut self.layers {
            layer.tiles.clear();
        }
        self.cell_updates.clear();
        Ok(())
    }

    // =========================================================================
    // Layers
    // =========================================================================

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn layer(&self, id: &str) -> Option<&Layer> {
        self.layers.iter().find(|l| l.id == id)
    }

    fn layer_mut(&mut self, id: &str) -> Option<&mut Layer> {
        self.layers.iter_mut().find(|l| l.id == id)
    }

    pub fn has_layer(&self, id: &str) -> bool {
        self.layer(id).is_some()
    }

    /// Add a layer at the top of the stack. No-op if the id exists.
    pub fn add_layer(&mut self, id: impl Into<String>, name: impl Into<String>) -> &mut Layer {
        let id = id.into();
        if let Some(idx) = self.layers.iter().position(|l| l.id == id) {
            return &mut self.layers[idx];
        }
        self.layers.push(Layer::new(id, name));
        self.layers.last_mut().unwrap()
    }

    /// Remove a layer. Refused while it is the last one.
    pub fn remove_layer(&mut self, id: &str) -> Result<Layer> {
        let Some(idx) = self.layers.iter().position(|l| l.id == id) else {
            return Err(TileError::layer_not_found(id));
        };
        if self.layers.len() <= 1 {
            log::debug!("refusing to remove last layer '{id}'");
            return Err(TileError::LastLayer);
        }
        Ok(self.layers.remove(idx))
    }

    pub fn set_layer_visible(&mut self, id: &str, visible: bool) -> Result<()> {
        let Some(layer) = self.layer_mut(id) else {
            return Err(TileError::layer_not_found(id));
        };
        layer.visible = visible;
        Ok(())
    }

    // =========================================================================
    // Cells
    // =========================================================================

    /// Write a cell. Returns `Some(previous)` when applied, `None` when
    /// the coordinate is out of bounds or the layer is unknown (silent
    /// no-op, nothing is queued for the renderer).
    pub fn set_tile(&mut self, layer_id: &str, x: i32, y: i32, cell: Cell) -> Option<Cell> {
        if !self.is_in_bounds(x, y) {
            return None;
        }
        let index = self.cell_index(x, y);
        let update = CellUpdate {
            layer_id: layer_id.to_string(),
            x,
            y,
            cell: cell.clone(),
        };
        let layer = self.layer_mut(layer_id)?;
        let old = match cell {
            Some(tile) => layer.tiles.insert(index, tile),
            None => layer.tiles.remove(&index),
        };
        self.cell_updates.push(update);
        Some(old)
    }

    /// Bounds-checked read; out of bounds or unknown layer reads empty.
    pub fn get_tile(&self, layer_id: &str, x: i32, y: i32) -> Cell {
        if !self.is_in_bounds(x, y) {
            return None;
        }
        let layer = self.layer(layer_id)?;
        layer.tiles.get(&self.cell_index(x, y)).cloned()
    }

    /// Drain the cell writes queued since the last call. The rendering
    /// collaborator polls this after each edit.
    pub fn take_cell_updates(&mut self) -> Vec<CellUpdate> {
        std::mem::take(&mut self.cell_updates)
    }

    /// Enumerate the non-empty cells of one layer in row-major order.
    pub fn cells<'a>(&'a self, layer: &'a Layer) -> impl Iterator<Item = (i32, i32, &'a TileRef)> + 'a {
        let width = self.width;
        let height = self.height;
        (0..height).flat_map(move |y| {
            (0..width).filter_map(move |x| {
                let index = (y * width + x) as usize;
                layer.tiles.get(&index).map(|tile| (x, y, tile))
            })
        })
    }
}
