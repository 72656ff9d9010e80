//! Transaction log for tile edits
//!
//! Groups individual cell writes into atomic, reversible actions.
//! Every code path that writes more than one cell for a user gesture
//! brackets the writes in a single `begin_action`/`end_action` pair so
//! undo and redo treat the gesture as one unit.

use serde::{Deserialize, Serialize};

use crate::{Cell, Result, TileMap};

/// Undo/redo surface of an editing session.
pub trait UndoState {
    fn can_undo(&self) -> bool;

    /// Reverse the most recent action.
    ///
    /// # Errors
    ///
    /// Propagates failures from the grid mutation path.
    fn undo(&mut self) -> Result<()>;

    fn can_redo(&self) -> bool;

    /// Replay the most recently undone action.
    ///
    /// # Errors
    ///
    /// Propagates failures from the grid mutation path.
    fn redo(&mut self) -> Result<()>;
}

/// A single-cell before/after record within an action.
///
/// `old` and `new` are independent snapshots; they never alias a live
/// grid cell.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TileChange {
    pub layer_id: String,
    pub x: i32,
    pub y: i32,
    pub old: Cell,
    pub new: Cell,
}

/// An atomic, reversible group of changes bounded by
/// `begin_action`/`end_action`. Never pushed empty, never mutated once
/// on a stack.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EditAction {
    pub changes: Vec<TileChange>,
}

impl EditAction {
    pub fn len(&self) -> usize {
        self.changes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }
}

/// The undo/redo stacks plus the currently recording action.
///
/// The log never reaches for the grid through ambient state; `undo`
/// and `redo` receive the map they mutate, so an apply can never be
/// reported as done without the map actually having been written.
#[derive(Debug, Default)]
pub struct UndoLog {
    undo_stack: Vec<EditAction>,
    redo_stack: Vec<EditAction>,
    current: Option<EditAction>,
}

impl UndoLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start recording a new action. Nested calls are flattened into
    /// the single open action, which is what lets compound gestures
    /// (a line stroke of many point edits) undo as one unit.
    pub fn begin_action(&mut self) {
        if self.current.is_none() {
            self.current = Some(EditAction::default());
        }
    }

    pub fn is_recording(&self) -> bool {
        self.current.is_some()
    }

    /// Record one cell change. No-op while no action is open.
    pub fn record_change(&mut self, change: TileChange) {
        if let Some(action) = &mut self.current {
            action.changes.push(change);
        } else {
            log::debug!("change at ({}, {}) recorded outside an action", change.x, change.y);
        }
    }

    /// Finish recording. An action with at least one change is pushed
    /// onto the undo stack and clears the redo stack; an empty bracket
    /// is discarded.
    pub fn end_action(&mut self) {
        if let Some(action) = self.current.take() {
            if !action.is_empty() {
                self.undo_stack.push(action);
                self.redo_stack.clear();
            }
        }
    }

    /// Reverse the top undo action against `map`.
    ///
    /// Changes are applied in reverse order so that multiple changes
    /// targeting the same cell unwind correctly; the action then moves
    /// to the redo stack with its per-change (old, new) pairs intact.
    pub fn undo(&mut self, map: &mut TileMap) -> bool {
        let Some(action) = self.undo_stack.pop() else {
            return false;
        };
        for change in action.changes.iter().rev() {
            map.set_tile(&change.layer_id, change.x, change.y, change.old.clone());
        }
        self.redo_stack.push(action);
        true
    }

    /// Replay the top redo action against `map`, applying each
    /// change's `new` value in forward order.
    pub fn redo(&mut self, map: &mut TileMap) -> bool {
        let Some(action) = self.redo_stack.pop() else {
            return false;
        };
        for change in &action.changes {
            map.set_tile(&change.layer_id, change.x, change.y, change.new.clone());
        }
        self.undo_stack.push(action);
        true
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_len(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }

    /// The most recently committed action, if any.
    pub fn last_action(&self) -> Option<&EditAction> {
        self.undo_stack.last()
    }

    /// Drop all history. Used when the map is replaced wholesale
    /// (import), which is not a cell-level action.
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
        self.current = None;
    }
}
