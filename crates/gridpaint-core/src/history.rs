//! Undo/redo history of executed commands.

use crate::canvas::Canvas;
use crate::commands::Command;

/// Two stacks of executed commands.
///
/// Every command lives in exactly one stack. Executing a new command forks
/// history: the redo stack is discarded.
#[derive(Debug, Default)]
pub struct UndoManager {
    undo_stack: Vec<Command>,
    redo_stack: Vec<Command>,
    /// Oldest undo entries are dropped beyond this many.
    limit: Option<usize>,
}

impl UndoManager {
    /// Create an empty history with no size limit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty history keeping at most `limit` undo entries.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            limit: Some(limit),
            ..Self::default()
        }
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Execute a command and record it for undo.
    pub fn execute_action(&mut self, mut command: Command, canvas: &mut Canvas) {
        log::debug!("Execute {} {}", command.description(), command.shape_id());
        command.execute(canvas);
        self.undo_stack.push(command);
        self.redo_stack.clear();

        if let Some(limit) = self.limit {
            let excess = self.undo_stack.len().saturating_sub(limit);
            self.undo_stack.drain(..excess);
        }
    }

    /// Undo the last command.
    /// Returns true if undo was performed, false if nothing to undo.
    pub fn undo(&mut self, canvas: &mut Canvas) -> bool {
        let Some(mut command) = self.undo_stack.pop() else {
            return false;
        };
        log::debug!("Undo {} {}", command.description(), command.shape_id());
        command.undo(canvas);
        self.redo_stack.push(command);
        true
    }

    /// Redo the last undone command.
    /// Returns true if redo was performed, false if nothing to redo.
    pub fn redo(&mut self, canvas: &mut Canvas) -> bool {
        let Some(mut command) = self.redo_stack.pop() else {
            return false;
        };
        log::debug!("Redo {} {}", command.description(), command.shape_id());
        command.execute(canvas);
        self.undo_stack.push(command);
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

    /// Forget all history. The canvas is left as it is.
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::Pixel;
    use crate::color::Color;
    use crate::shapes::{Cell, Line, Point, Shape};

    fn snapshot(canvas: &Canvas) -> Vec<Vec<Pixel>> {
        canvas.rows().map(<[Pixel]>::to_vec).collect()
    }

    fn point(x: i32, y: i32) -> Shape {
        Shape::Point(Point::new(Cell::new(x, y)))
    }

    #[test]
    fn test_empty_history() {
        let mut canvas = Canvas::new(5, 5);
        let mut history = UndoManager::new();
        assert_eq!(history.limit(), None);
        assert!(!history.can_undo());
        assert!(!history.can_redo());
        assert!(!history.undo(&mut canvas));
        assert!(!history.redo(&mut canvas));
    }

    #[test]
    fn test_undo_redo_cycle() {
        let mut canvas = Canvas::new(10, 5);
        let mut history = UndoManager::new();
        let shape = Shape::Line(Line::new(Cell::new(0, 0), Cell::new(5, 0)));
        let id = shape.id();

        history.execute_action(Command::add(shape), &mut canvas);
        let drawn = snapshot(&canvas);

        assert!(history.undo(&mut canvas));
        assert!(canvas.is_empty());
        assert_eq!(history.undo_len(), 0);
        assert_eq!(history.redo_len(), 1);

        assert!(history.redo(&mut canvas));
        assert!(canvas.contains_shape(id));
        assert_eq!(snapshot(&canvas), drawn);
    }

    #[test]
    fn test_execute_clears_redo() {
        let mut canvas = Canvas::new(5, 5);
        let mut history = UndoManager::new();

        history.execute_action(Command::add(point(1, 1)), &mut canvas);
        history.undo(&mut canvas);
        assert!(history.can_redo());

        history.execute_action(Command::add(point(2, 2)), &mut canvas);
        assert!(!history.can_redo());
        assert!(!history.redo(&mut canvas));
    }

    #[test]
    fn test_oscillation_is_stable() {
        let mut canvas = Canvas::new(8, 8);
        let mut history = UndoManager::new();
        let shape = point(3, 3);
        let id = shape.id();
        history.execute_action(Command::add(shape), &mut canvas);
        history.execute_action(Command::fill(id, '@', Color::Green), &mut canvas);
        history.execute_action(Command::move_shape(id, 1, 2), &mut canvas);
        let top = snapshot(&canvas);

        for _ in 0..5 {
            assert!(history.undo(&mut canvas));
            assert!(history.redo(&mut canvas));
            assert_eq!(snapshot(&canvas), top);
        }
    }

    #[test]
    fn test_redo_of_remove_matches_execute() {
        let mut canvas = Canvas::new(8, 8);
        let mut history = UndoManager::new();
        let below = Shape::Line(Line::new(Cell::new(0, 3), Cell::new(7, 3)));
        let above = point(3, 3);
        let below_id = below.id();
        history.execute_action(Command::add(below), &mut canvas);
        history.execute_action(Command::add(above), &mut canvas);

        history.execute_action(Command::remove(below_id), &mut canvas);
        let removed = snapshot(&canvas);

        for _ in 0..3 {
            assert!(history.undo(&mut canvas));
            assert!(canvas.contains_shape(below_id));
            assert!(history.redo(&mut canvas));
            assert_eq!(snapshot(&canvas), removed);
        }
    }

    #[test]
    fn test_limit_drops_oldest() {
        let mut canvas = Canvas::new(5, 5);
        let mut history = UndoManager::with_limit(2);
        for x in 0..4 {
            history.execute_action(Command::add(point(x, 0)), &mut canvas);
        }
        assert_eq!(history.limit(), Some(2));
        assert_eq!(history.undo_len(), 2);

        while history.undo(&mut canvas) {}
        // The two oldest adds can no longer be undone.
        assert_eq!(canvas.len(), 2);
    }

    #[test]
    fn test_clear() {
        let mut canvas = Canvas::new(5, 5);
        let mut history = UndoManager::new();
        history.execute_action(Command::add(point(0, 0)), &mut canvas);
        history.execute_action(Command::add(point(1, 0)), &mut canvas);
        history.undo(&mut canvas);

        history.clear();
        assert!(!history.can_undo());
        assert!(!history.can_redo());
        assert_eq!(canvas.len(), 1);
    }
}
