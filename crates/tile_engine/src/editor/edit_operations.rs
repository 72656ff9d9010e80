use crate::{
    paint::{line_points, FillOperation},
    same_tile, Position,
};

use super::EditState;

impl EditState {
    /// Paint one cell with the brush as its own transaction. Silent
    /// no-op without a brush or out of bounds.
    pub fn paint_tile(&mut self, pos: Position) {
        let Some(brush) = self.brush().cloned() else {
            return;
        };
        self.undo_log_mut().begin_action();
        self.write_cell(pos.x, pos.y, Some(brush));
        self.undo_log_mut().end_action();
    }

    /// Erase one cell as its own transaction.
    pub fn erase_tile(&mut self, pos: Position) {
        self.undo_log_mut().begin_action();
        self.write_cell(pos.x, pos.y, None);
        self.undo_log_mut().end_action();
    }

    /// Paint a straight Bresenham segment with the brush. Runs inside
    /// whatever action is currently open, so a drag of many segments
    /// stays one undoable unit.
    pub(crate) fn paint_segment(&mut self, from: Position, to: Position) {
        let Some(brush) = self.brush().cloned() else {
            return;
        };
        for point in line_points(from, to) {
            self.write_cell(point.x, point.y, Some(brush.clone()));
        }
    }

    /// Flood-fill the connected region at `pos` with the brush as one
    /// transaction.
    ///
    /// When the clicked cell already structurally equals the brush the
    /// whole operation is a no-op: nothing is written, no action is
    /// pushed.
    pub fn flood_fill(&mut self, pos: Position) {
        let Some(brush) = self.brush().cloned() else {
            return;
        };
        if !self.map().is_in_bounds(pos.x, pos.y) {
            return;
        }
        let base = self.map().get_tile(self.current_layer(), pos.x, pos.y);
        if same_tile(&base, &Some(brush.clone())) {
            return;
        }

        self.undo_log_mut().begin_action();
        FillOperation::new(base, brush).fill(self, pos);
        self.undo_log_mut().end_action();
    }

    /// Write every cell of the rectangle spanned by two corners with
    /// the brush, as one transaction.
    pub fn fill_rectangle(&mut self, a: Position, b: Position) {
        let Some(brush) = self.brush().cloned() else {
            return;
        };
        let start = a.min(b);
        let end = a.max(b);

        self.undo_log_mut().begin_action();
        for y in start.y..=end.y {
            for x in start.x..=end.x {
                self.write_cell(x, y, Some(brush.clone()));
            }
        }
        self.undo_log_mut().end_action();
    }

    /// Write only the border cells of the rectangle spanned by two
    /// corners: top and bottom rows fully, side columns without the
    /// corner cells already drawn.
    pub fn outline_rectangle(&mut self, a: Position, b: Position) {
        let Some(brush) = self.brush().cloned() else {
            return;
        };
        let start = a.min(b);
        let end = a.max(b);

        self.undo_log_mut().begin_action();
        for x in start.x..=end.x {
            self.write_cell(x, start.y, Some(brush.clone()));
            if end.y > start.y {
                self.write_cell(x, end.y, Some(brush.clone()));
            }
        }
        for y in start.y + 1..end.y {
            self.write_cell(start.x, y, Some(brush.clone()));
            if end.x > start.x {
                self.write_cell(end.x, y, Some(brush.clone()));
            }
        }
        self.undo_log_mut().end_action();
    }
}
