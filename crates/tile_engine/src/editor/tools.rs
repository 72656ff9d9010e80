//! Tool definitions and the pointer-event state machine
//!
//! Tools are a closed enum; each pointer event dispatches on the
//! current tool and drives the grid, the selection buffer and the
//! transaction log. Mutation only ever happens through recorded
//! writes, so every gesture lands on the undo stack as one action.

use crate::Position;

use super::EditState;

/// Available editing tools
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Tool {
    /// Rectangle selection and stamping
    Select,
    /// Freehand tile painting
    #[default]
    Pencil,
    /// Flood fill area
    Fill,
    /// Rectangle drawing (filled or outline)
    Shape,
}

impl Tool {
    pub fn name(&self) -> &'static str {
        match self {
            Tool::Select => "Select",
            Tool::Pencil => "Pencil",
            Tool::Fill => "Fill",
            Tool::Shape => "Shape",
        }
    }

    /// Check if this tool needs drag tracking
    pub fn needs_drag(&self) -> bool {
        matches!(self, Tool::Select | Tool::Pencil | Tool::Shape)
    }
}

/// Rectangle style committed by the shape tool
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ShapeStyle {
    #[default]
    Filled,
    Outline,
}

/// Live state of a shape drag: anchor plus current endpoint.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ShapeDraw {
    pub active: bool,
    pub start: Position,
    pub end: Position,
    pub style: ShapeStyle,
}

/// Commands offered on a secondary click over an active selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionCommand {
    Copy,
    Delete,
    FlipHorizontal,
    /// Only offered while the selection carries content; switches the
    /// tool back to select so the stamp can be placed.
    Paste,
}

impl EditState {
    /// Switch tools. A stroke still in progress is committed as-is,
    /// then the in-progress selection and shape state and the cursor
    /// highlight are cleared; committed history is untouched.
    pub fn set_tool(&mut self, tool: Tool) {
        if self.is_drawing {
            self.undo_log_mut().end_action();
        }
        self.tool = tool;
        self.selection.active = false;
        self.shape.active = false;
        self.is_drawing = false;
        self.clear_cursor();
    }

    pub fn set_shape_style(&mut self, style: ShapeStyle) {
        self.shape.style = style;
    }

    /// Primary button pressed at a tile coordinate.
    pub fn pointer_down(&mut self, pos: Position) {
        if !self.map().is_in_bounds(pos.x, pos.y) {
            return;
        }

        match self.tool() {
            Tool::Select => {
                if self.selection.active && self.selection.has_content() {
                    self.place_selection(pos);
                } else {
                    self.begin_selection(pos);
                }
            }
            Tool::Pencil => {
                if self.brush().is_none() {
                    return;
                }
                self.is_drawing = true;
                self.last_paint = pos;
                // One transaction per continuous drag; closed on
                // pointer_up.
                self.undo_log_mut().begin_action();
                let brush = self.brush().cloned();
                self.write_cell(pos.x, pos.y, brush);
            }
            Tool::Fill => self.flood_fill(pos),
            Tool::Shape => {
                self.shape.active = true;
                self.shape.start = pos;
                self.shape.end = pos;
                self.preview_shape();
            }
        }
    }

    /// Pointer moved to a tile coordinate (primary button may be held).
    pub fn pointer_moved(&mut self, pos: Position) {
        if !self.map().is_in_bounds(pos.x, pos.y) {
            self.clear_cursor();
            return;
        }

        match self.tool() {
            Tool::Select => {
                if self.selection.active && !self.selection.has_content() {
                    self.resize_selection(pos);
                } else {
                    self.show_cursor(pos, 1, 1);
                }
            }
            Tool::Pencil => {
                if self.is_drawing {
                    if pos != self.last_paint {
                        let last = self.last_paint;
                        self.paint_segment(last, pos);
                        self.last_paint = pos;
                    }
                } else {
                    self.show_brush_cursor(pos);
                }
            }
            Tool::Fill => self.show_cursor(pos, 1, 1),
            Tool::Shape => {
                if self.shape.active {
                    self.shape.end = pos;
                    self.preview_shape();
                } else {
                    self.show_cursor(pos, 1, 1);
                }
            }
        }
    }

    /// Primary button released.
    pub fn pointer_up(&mut self) {
        if self.is_drawing {
            self.is_drawing = false;
            self.undo_log_mut().end_action();
        }

        if self.shape.active && self.tool() == Tool::Shape {
            self.commit_shape();
        }
    }

    /// Secondary button pressed. Over an active selection this yields
    /// the command menu; under the pencil it erases one cell as its
    /// own transaction.
    pub fn secondary_down(&mut self, pos: Position) -> Vec<SelectionCommand> {
        if !self.map().is_in_bounds(pos.x, pos.y) {
            return Vec::new();
        }

        match self.tool() {
            Tool::Select => {
                if self.selection.active {
                    let mut commands = vec![SelectionCommand::Copy, SelectionCommand::Delete, SelectionCommand::FlipHorizontal];
                    if self.selection.has_content() {
                        commands.push(SelectionCommand::Paste);
                    }
                    return commands;
                }
            }
            Tool::Pencil => self.erase_tile(pos),
            Tool::Fill | Tool::Shape => {}
        }
        Vec::new()
    }

    /// Run one of the commands surfaced by [`EditState::secondary_down`].
    pub fn apply_selection_command(&mut self, command: SelectionCommand) {
        match command {
            SelectionCommand::Copy => self.copy_selection(),
            SelectionCommand::Delete => self.delete_selection(),
            SelectionCommand::FlipHorizontal => self.flip_selection_horizontal(),
            SelectionCommand::Paste => {
                // Stay on the select tool without dropping the stamp;
                // the next primary click places it.
                self.tool = Tool::Select;
            }
        }
    }

    fn show_brush_cursor(&mut self, pos: Position) {
        let tile_size = self.map().tile_size();
        if let Some(brush) = self.brush() {
            let width = (brush.s_width as i32 / tile_size).max(1);
            let height = (brush.s_height as i32 / tile_size).max(1);
            self.show_cursor(pos, width, height);
        } else {
            self.show_cursor(pos, 1, 1);
        }
    }

    fn preview_shape(&mut self) {
        let start = self.shape.start.min(self.shape.end);
        let end = self.shape.start.max(self.shape.end);
        self.show_cursor(start, end.x - start.x + 1, end.y - start.y + 1);
    }

    fn commit_shape(&mut self) {
        let ShapeDraw { start, end, style, .. } = self.shape;

        if self.brush().is_some() {
            match style {
                ShapeStyle::Filled => self.fill_rectangle(start, end),
                ShapeStyle::Outline => self.outline_rectangle(start, end),
            }
        }

        self.shape.active = false;
        self.clear_cursor();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{TileRef, UndoState};

    fn test_state() -> EditState {
        let mut state = EditState::new(8, 8, 16).unwrap();
        state.set_brush(Some(TileRef::new("grass", 0, 0, 16, 16)));
        state
    }

    #[test]
    fn test_set_tool_clears_transient_state() {
        let mut state = test_state();
        state.set_tool(Tool::Select);
        state.pointer_down(Position::new(1, 1));
        assert!(state.selection().active);

        state.set_tool(Tool::Pencil);
        assert!(!state.selection().active);
        assert!(state.cursor().is_none());
    }

    #[test]
    fn test_set_tool_keeps_history() {
        let mut state = test_state();
        state.paint_tile(Position::new(0, 0));
        assert!(state.can_undo());

        state.set_tool(Tool::Fill);
        assert!(state.can_undo());
    }

    #[test]
    fn test_pencil_without_brush_is_noop() {
        let mut state = test_state();
        state.set_brush(None);
        state.pointer_down(Position::new(2, 2));
        state.pointer_up();
        assert!(!state.can_undo());
        assert_eq!(state.map().get_tile("ground", 2, 2), None);
    }

    #[test]
    fn test_out_of_bounds_down_is_noop() {
        let mut state = test_state();
        state.pointer_down(Position::new(8, 0));
        state.pointer_up();
        assert!(!state.can_undo());
    }

    #[test]
    fn test_secondary_menu_without_content() {
        let mut state = test_state();
        state.set_tool(Tool::Select);
        state.pointer_down(Position::new(0, 0));
        let commands = state.secondary_down(Position::new(0, 0));
        assert_eq!(
            commands,
            vec![SelectionCommand::Copy, SelectionCommand::Delete, SelectionCommand::FlipHorizontal]
        );
    }

    #[test]
    fn test_secondary_menu_with_content() {
        let mut state = test_state();
        state.paint_tile(Position::new(0, 0));
        state.set_tool(Tool::Select);
        state.pointer_down(Position::new(0, 0));
        state.copy_selection();
        let commands = state.secondary_down(Position::new(0, 0));
        assert!(commands.contains(&SelectionCommand::Paste));
    }

    #[test]
    fn test_shape_preview_does_not_mutate() {
        let mut state = test_state();
        state.set_tool(Tool::Shape);
        state.pointer_down(Position::new(1, 1));
        state.pointer_moved(Position::new(4, 4));
        assert_eq!(state.map().get_tile("ground", 2, 2), None);
        assert!(!state.can_undo());
        assert!(state.cursor().is_some());
    }
}
