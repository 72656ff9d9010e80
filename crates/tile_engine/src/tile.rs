use serde::{Deserialize, Serialize};

/// Reference to a rectangular region of an external tile-image resource.
///
/// The engine never decodes images; `source_id` is an opaque key resolved
/// by the embedding application's resource provider. TileRefs are
/// immutable value objects: equality is structural over all five fields,
/// and `Clone` yields an independent snapshot (the record is flat, so
/// there is nothing to alias).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TileRef {
    pub source_id: String,
    pub sx: u32,
    pub sy: u32,
    pub s_width: u32,
    pub s_height: u32,
}

impl TileRef {
    pub fn new(source_id: impl Into<String>, sx: u32, sy: u32, s_width: u32, s_height: u32) -> Self {
        Self {
            source_id: source_id.into(),
            sx,
            sy,
            s_width,
            s_height,
        }
    }
}

/// One grid cell: a tile reference or empty.
pub type Cell = Option<TileRef>;

/// Structural tile equality with empty handled on both sides.
pub fn same_tile(a: &Cell, b: &Cell) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}
