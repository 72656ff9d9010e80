//! Flood fill
//!
//! 4-directional connected-component replacement bounded by structural
//! tile equality.

use std::collections::HashSet;

use crate::{editor::EditState, same_tile, Cell, Position, TileRef};

/// One flood-fill traversal over the current layer.
///
/// The traversal is stack-based and fully synchronous; the visited set
/// guarantees each cell is processed at most once, so it terminates on
/// any finite grid regardless of the target region's shape.
pub struct FillOperation {
    base: Cell,
    replacement: TileRef,
    visited: HashSet<Position>,
}

impl FillOperation {
    /// `base` is the cell value at the click point; only cells that
    /// structurally equal it are replaced.
    pub fn new(base: Cell, replacement: TileRef) -> Self {
        Self {
            base,
            replacement,
            visited: HashSet::new(),
        }
    }

    /// Fill starting at `pos`, writing one cell (and recording one
    /// change) per visited cell that matches the base value.
    ///
    /// The caller is responsible for the transaction bracket and for
    /// the no-op guard when the base already equals the replacement.
    pub fn fill(&mut self, state: &mut EditState, pos: Position) {
        let mut pos_stack = vec![pos];

        while let Some(pos) = pos_stack.pop() {
            if !state.map().is_in_bounds(pos.x, pos.y) || !self.visited.insert(pos) {
                continue;
            }

            let cur = state.map().get_tile(state.current_layer(), pos.x, pos.y);
            if !same_tile(&cur, &self.base) {
                continue;
            }

            state.write_cell(pos.x, pos.y, Some(self.replacement.clone()));

            pos_stack.push(pos + Position::new(-1, 0));
            pos_stack.push(pos + Position::new(1, 0));
            pos_stack.push(pos + Position::new(0, -1));
            pos_stack.push(pos + Position::new(0, 1));
        }
    }
}
