//! Reversible edits of a canvas.

use crate::canvas::Canvas;
use crate::color::Color;
use crate::shapes::{Shape, ShapeId, ShapeStyle};

/// Glyph used by fill when none is chosen.
pub const DEFAULT_FILL_SYMBOL: char = '+';

/// A reversible mutation of a canvas's shape list.
///
/// Commands refer to shapes by id and receive the canvas on every call, so a
/// command stays valid however the list changes around it. While its shape is
/// off the canvas (an undone add, an executed remove) the command owns it.
/// Every `execute` and `undo` ends with a full redraw.
#[derive(Debug, Clone)]
pub enum Command {
    /// Append a shape.
    Add {
        shape_id: ShapeId,
        /// The shape while it is not on the canvas.
        detached: Option<Shape>,
    },
    /// Remove a shape, restoring it at its old paint position on undo.
    Remove {
        shape_id: ShapeId,
        /// Paint position and shape while removed.
        detached: Option<(usize, Shape)>,
    },
    /// Translate a shape.
    Move { shape_id: ShapeId, dx: i32, dy: i32 },
    /// Replace a shape's glyph and color.
    Fill {
        shape_id: ShapeId,
        style: ShapeStyle,
        /// Style the shape had before the last execute.
        previous: Option<ShapeStyle>,
    },
}

impl Command {
    pub fn add(shape: Shape) -> Self {
        Command::Add {
            shape_id: shape.id(),
            detached: Some(shape),
        }
    }

    pub fn remove(shape_id: ShapeId) -> Self {
        Command::Remove {
            shape_id,
            detached: None,
        }
    }

    pub fn move_shape(shape_id: ShapeId, dx: i32, dy: i32) -> Self {
        Command::Move { shape_id, dx, dy }
    }

    pub fn fill(shape_id: ShapeId, symbol: char, color: Color) -> Self {
        Command::Fill {
            shape_id,
            style: ShapeStyle::new(symbol, color),
            previous: None,
        }
    }

    /// Id of the shape this command edits.
    pub fn shape_id(&self) -> ShapeId {
        match self {
            Command::Add { shape_id, .. }
            | Command::Remove { shape_id, .. }
            | Command::Move { shape_id, .. }
            | Command::Fill { shape_id, .. } => *shape_id,
        }
    }

    /// Short label for logs.
    pub fn description(&self) -> &'static str {
        match self {
            Command::Add { .. } => "add shape",
            Command::Remove { .. } => "remove shape",
            Command::Move { .. } => "move shape",
            Command::Fill { .. } => "fill shape",
        }
    }

    /// Apply the edit.
    pub fn execute(&mut self, canvas: &mut Canvas) {
        match self {
            Command::Add { detached, .. } => {
                if let Some(shape) = detached.take() {
                    canvas.add_shape(shape);
                }
            }
            Command::Remove { shape_id, detached } => {
                *detached = canvas.take_shape(*shape_id);
            }
            Command::Move { shape_id, dx, dy } => {
                if let Some(shape) = canvas.get_shape_mut(*shape_id) {
                    shape.translate(*dx, *dy);
                }
            }
            Command::Fill {
                shape_id,
                style,
                previous,
            } => {
                if let Some(shape) = canvas.get_shape_mut(*shape_id) {
                    *previous = Some(std::mem::replace(shape.style_mut(), *style));
                }
            }
        }
        canvas.redraw_all_shapes();
    }

    /// Revert the edit made by the last `execute`.
    pub fn undo(&mut self, canvas: &mut Canvas) {
        match self {
            Command::Add { shape_id, detached } => {
                if let Some(shape) = canvas.remove_shape(*shape_id) {
                    *detached = Some(shape);
                }
            }
            Command::Remove { detached, .. } => {
                if let Some((index, shape)) = detached.take() {
                    canvas.insert_shape_at(index, shape);
                }
            }
            Command::Move { shape_id, dx, dy } => {
                if let Some(shape) = canvas.get_shape_mut(*shape_id) {
                    shape.translate(-*dx, -*dy);
                }
            }
            Command::Fill {
                shape_id, previous, ..
            } => {
                if let (Some(shape), Some(old)) = (canvas.get_shape_mut(*shape_id), previous.take()) {
                    *shape.style_mut() = old;
                }
            }
        }
        canvas.redraw_all_shapes();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::Pixel;
    use crate::shapes::{Cell, Line, Point, Rectangle};

    fn snapshot(canvas: &Canvas) -> Vec<Vec<Pixel>> {
        canvas.rows().map(<[Pixel]>::to_vec).collect()
    }

    fn canvas_with_line() -> (Canvas, ShapeId) {
        let mut canvas = Canvas::new(10, 6);
        let id = canvas.add_shape(Shape::Line(Line::new(Cell::new(0, 0), Cell::new(5, 0))));
        canvas.redraw_all_shapes();
        (canvas, id)
    }

    #[test]
    fn test_add_execute_undo() {
        let mut canvas = Canvas::new(5, 5);
        let point = Point::new(Cell::new(1, 1));
        let id = point.id;
        let mut cmd = Command::add(Shape::Point(point));

        cmd.execute(&mut canvas);
        assert!(canvas.contains_shape(id));
        assert_eq!(canvas.get_pixel(1, 1).unwrap().symbol, '*');

        cmd.undo(&mut canvas);
        assert!(canvas.is_empty());
        assert_eq!(canvas.get_pixel(1, 1).unwrap(), canvas.background());

        cmd.execute(&mut canvas);
        assert!(canvas.contains_shape(id));
    }

    #[test]
    fn test_remove_restores_paint_position() {
        let mut canvas = Canvas::new(5, 5);
        let a = canvas.add_shape(Shape::Point(Point::new(Cell::new(2, 2))));
        let b = canvas.add_shape(Shape::Point(Point::new(Cell::new(2, 2)).with_style(ShapeStyle::new('b', Color::Blue))));
        canvas.redraw_all_shapes();
        let before = snapshot(&canvas);

        let mut cmd = Command::remove(a);
        cmd.execute(&mut canvas);
        assert_eq!(canvas.shape_ids(), &[b]);

        cmd.undo(&mut canvas);
        assert_eq!(canvas.shape_ids(), &[a, b]);
        assert_eq!(snapshot(&canvas), before);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let (mut canvas, _) = canvas_with_line();
        let before = snapshot(&canvas);
        let mut cmd = Command::remove(uuid::Uuid::new_v4());

        cmd.execute(&mut canvas);
        cmd.undo(&mut canvas);
        assert_eq!(canvas.len(), 1);
        assert_eq!(snapshot(&canvas), before);
    }

    #[test]
    fn test_move_and_back() {
        let (mut canvas, id) = canvas_with_line();
        let before = snapshot(&canvas);
        let mut cmd = Command::move_shape(id, 2, 3);

        cmd.execute(&mut canvas);
        assert_eq!(canvas.get_pixel(2, 3).unwrap().symbol, '*');
        assert_eq!(canvas.get_pixel(0, 0).unwrap(), canvas.background());

        cmd.undo(&mut canvas);
        assert_eq!(snapshot(&canvas), before);
    }

    #[test]
    fn test_move_off_grid_is_permitted() {
        let (mut canvas, id) = canvas_with_line();
        let mut cmd = Command::move_shape(id, 0, -4);
        cmd.execute(&mut canvas);

        assert!(canvas.rows().flatten().all(|p| *p == canvas.background()));
        assert_eq!(canvas.shape_at(Cell::new(3, -4)), Some(id));

        cmd.undo(&mut canvas);
        assert_eq!(canvas.get_pixel(3, 0).unwrap().symbol, '*');
    }

    #[test]
    fn test_fill_border_only() {
        let mut canvas = Canvas::new(8, 8);
        let id = canvas.add_shape(Shape::Rectangle(Rectangle::new(Cell::new(1, 1), Cell::new(5, 5))));
        canvas.redraw_all_shapes();

        let mut cmd = Command::fill(id, DEFAULT_FILL_SYMBOL, Color::Magenta);
        cmd.execute(&mut canvas);
        assert_eq!(canvas.get_pixel(1, 3).unwrap(), Pixel::new('+', Color::Magenta));
        assert_eq!(canvas.get_pixel(3, 3).unwrap(), canvas.background());

        cmd.undo(&mut canvas);
        assert_eq!(canvas.get_pixel(1, 3).unwrap(), Pixel::new('#', Color::White));
    }

    #[test]
    fn test_fill_redo_remembers_latest_style() {
        let (mut canvas, id) = canvas_with_line();
        let mut cmd = Command::fill(id, 'x', Color::Red);

        cmd.execute(&mut canvas);
        cmd.undo(&mut canvas);
        cmd.execute(&mut canvas);
        assert_eq!(canvas.get_pixel(0, 0).unwrap(), Pixel::new('x', Color::Red));
        cmd.undo(&mut canvas);
        assert_eq!(canvas.get_pixel(0, 0).unwrap(), Pixel::new('*', Color::White));
    }

    #[test]
    fn test_shape_id_and_description() {
        let id = uuid::Uuid::new_v4();
        let cmd = Command::move_shape(id, 1, 1);
        assert_eq!(cmd.shape_id(), id);
        assert_eq!(cmd.description(), "move shape");
    }
}
