#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::missing_errors_doc
)]

//! Tile-grid editing engine: a multi-layer 2D tile map, geometric
//! editing operations driven by pointer gestures, and a transaction
//! log that makes every compound edit atomically undoable.
//!
//! Rendering, viewports and image decoding live outside the engine;
//! it only queues cell updates and cursor-highlight requests for a
//! rendering collaborator to poll.

mod error;
pub use error::*;

mod position;
pub use position::*;

mod tile;
pub use tile::*;

mod map;
pub use map::*;

pub mod paint;

pub mod editor;
pub use editor::*;

pub mod formats;
