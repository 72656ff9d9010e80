//! Map import/export
//!
//! The transfer shape keys layers by id and lists only non-empty cells
//! in row-major order:
//!
//! ```json
//! {
//!   "width": 20, "height": 15, "tileSize": 32,
//!   "layers": {
//!     "ground": {
//!       "name": "Ground", "visible": true,
//!       "tiles": [{ "x": 0, "y": 0, "sourceId": "...",
//!                   "sx": 0, "sy": 0, "sWidth": 32, "sHeight": 32 }]
//!     }
//!   }
//! }
//! ```
//!
//! Tile images are external resources; import resolves each `sourceId`
//! against the embedding application's [`ResourceProvider`] and drops
//! tiles it cannot resolve without failing the rest of the import.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{Result, TileMap, TileRef};

/// Lookup seam for the external tile-image resources.
pub trait ResourceProvider {
    fn contains(&self, source_id: &str) -> bool;
}

/// Provider backed by a plain list of known source ids.
impl ResourceProvider for Vec<String> {
    fn contains(&self, source_id: &str) -> bool {
        self.iter().any(|id| id == source_id)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapFile {
    pub width: i32,
    pub height: i32,
    pub tile_size: i32,
    pub layers: BTreeMap<String, LayerFile>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayerFile {
    pub name: String,
    #[serde(default = "default_visible")]
    pub visible: bool,
    pub tiles: Vec<TileEntry>,
}

fn default_visible() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TileEntry {
    pub x: i32,
    pub y: i32,
    pub source_id: String,
    pub sx: u32,
    pub sy: u32,
    pub s_width: u32,
    pub s_height: u32,
}

/// Snapshot a map into the transfer shape, enumerating only non-empty
/// cells, row-major per layer.
pub fn export_map(map: &TileMap) -> MapFile {
    let mut layers = BTreeMap::new();
    for layer in map.layers() {
        let tiles = map
            .cells(layer)
            .map(|(x, y, tile)| TileEntry {
                x,
                y,
                source_id: tile.source_id.clone(),
                sx: tile.sx,
                sy: tile.sy,
                s_width: tile.s_width,
                s_height: tile.s_height,
            })
            .collect();
        layers.insert(
            layer.id.clone(),
            LayerFile {
                name: layer.name.clone(),
                visible: layer.visible,
                tiles,
            },
        );
    }
    MapFile {
        width: map.width(),
        height: map.height(),
        tile_size: map.tile_size(),
        layers,
    }
}

/// Rebuild a map from the transfer shape.
///
/// Layers are recreated as listed; tiles whose `sourceId` the provider
/// cannot resolve are skipped, as are entries outside the grid. Both
/// are partial-failure cases, not fatal ones.
///
/// # Errors
///
/// Fails only on an invalid map size.
pub fn import_map(data: &MapFile, resources: &dyn ResourceProvider) -> Result<TileMap> {
    let mut map = TileMap::new(data.width, data.height, data.tile_size)?;

    for (layer_id, layer_data) in &data.layers {
        let name = if layer_data.name.is_empty() { layer_id } else { &layer_data.name };
        map.add_layer(layer_id.clone(), name.clone()).visible = layer_data.visible;

        for entry in &layer_data.tiles {
            if !resources.contains(&entry.source_id) {
                log::debug!("skipping tile at ({}, {}): unresolved source '{}'", entry.x, entry.y, entry.source_id);
                continue;
            }
            let tile = TileRef::new(entry.source_id.clone(), entry.sx, entry.sy, entry.s_width, entry.s_height);
            map.set_tile(layer_id, entry.x, entry.y, Some(tile));
        }
    }

    // Import writes are not edits; do not leave them queued for the
    // renderer, which repaints wholesale after an import.
    map.take_cell_updates();
    Ok(map)
}

/// Serialize a map to the JSON transfer shape.
///
/// # Errors
///
/// Propagates serializer failures.
pub fn to_json(map: &TileMap) -> Result<String> {
    Ok(serde_json::to_string_pretty(&export_map(map))?)
}

/// Parse the JSON transfer shape and rebuild a map from it.
///
/// # Errors
///
/// Fails on malformed JSON or an invalid map size.
pub fn from_json(json: &str, resources: &dyn ResourceProvider) -> Result<TileMap> {
    let data: MapFile = serde_json::from_str(json)?;
    import_map(&data, resources)
}
