//! Unified error types for tile_engine

use thiserror::Error;

/// Main error type for tile_engine operations
#[derive(Debug, Error)]
pub enum TileError {
    #[error("Layer '{id}' not found")]
    LayerNotFound { id: String },

    #[error("Cannot remove the last remaining layer")]
    LastLayer,

    #[error("Invalid map size {width}x{height} (tile size {tile_size})")]
    InvalidMapSize { width: i32, height: i32, tile_size: i32 },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for tile_engine operations
pub type Result<T> = std::result::Result<T, TileError>;

impl TileError {
    pub fn layer_not_found(id: impl Into<String>) -> Self {
        Self::LayerNotFound { id: id.into() }
    }
}
