//! Shape definitions for the character grid.

mod ellipse;
mod line;
mod point;
mod raster;
mod rectangle;
mod triangle;

pub use ellipse::Ellipse;
pub use line::Line;
pub use point::Point;
pub use rectangle::Rectangle;
pub use triangle::Triangle;

use crate::color::Color;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Default glyph for new shapes.
pub const DEFAULT_SYMBOL: char = '*';

/// Largest coordinate or radius magnitude a shape rasterizes with. Geometry
/// past it occupies no cells, which keeps the integer rasterizers free of
/// overflow.
pub const MAX_COORDINATE: i32 = 1 << 14;

/// One addressable grid position.
///
/// Coordinates are signed: a moved shape may sit partly or fully off the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// This cell offset by (dx, dy).
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

impl From<(i32, i32)> for Cell {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// Glyph and color a shape paints its cells with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShapeStyle {
    pub symbol: char,
    #[serde(default)]
    pub color: Color,
}

impl ShapeStyle {
    pub fn new(symbol: char, color: Color) -> Self {
        Self { symbol, color }
    }
}

impl Default for ShapeStyle {
    fn default() -> Self {
        Self::new(DEFAULT_SYMBOL, Color::default())
    }
}

/// Unique identifier for shapes.
pub type ShapeId = Uuid;

/// Common trait for all shapes.
pub trait ShapeTrait {
    /// Get the unique identifier.
    fn id(&self) -> ShapeId;

    /// Cells covered by the current geometry, recomputed on every call.
    fn occupied_cells(&self) -> Vec<Cell>;

    /// Check if a cell is one of the occupied cells.
    fn contains_point(&self, cell: Cell) -> bool {
        self.occupied_cells().contains(&cell)
    }

    /// Offset every geometric field. No clamping to the grid.
    fn translate(&mut self, dx: i32, dy: i32);

    /// Get the style.
    fn style(&self) -> &ShapeStyle;

    /// Get mutable style.
    fn style_mut(&mut self) -> &mut ShapeStyle;
}

/// Enum wrapper for all shape types (for storage and dispatch).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Point(Point),
    Line(Line),
    Rectangle(Rectangle),
    Ellipse(Ellipse),
    Triangle(Triangle),
}

impl Shape {
    pub fn id(&self) -> ShapeId {
        match self {
            Shape::Point(s) => s.id(),
            Shape::Line(s) => s.id(),
            Shape::Rectangle(s) => s.id(),
            Shape::Ellipse(s) => s.id(),
            Shape::Triangle(s) => s.id(),
        }
    }

    pub fn occupied_cells(&self) -> Vec<Cell> {
        match self {
            Shape::Point(s) => s.occupied_cells(),
            Shape::Line(s) => s.occupied_cells(),
            Shape::Rectangle(s) => s.occupied_cells(),
            Shape::Ellipse(s) => s.occupied_cells(),
            Shape::Triangle(s) => s.occupied_cells(),
        }
    }

    pub fn contains_point(&self, cell: Cell) -> bool {
        match self {
            Shape::Point(s) => s.contains_point(cell),
            Shape::Line(s) => s.contains_point(cell),
            Shape::Rectangle(s) => s.contains_point(cell),
            Shape::Ellipse(s) => s.contains_point(cell),
            Shape::Triangle(s) => s.contains_point(cell),
        }
    }

    pub fn translate(&mut self, dx: i32, dy: i32) {
        match self {
            Shape::Point(s) => s.translate(dx, dy),
            Shape::Line(s) => s.translate(dx, dy),
            Shape::Rectangle(s) => s.translate(dx, dy),
            Shape::Ellipse(s) => s.translate(dx, dy),
            Shape::Triangle(s) => s.translate(dx, dy),
        }
    }

    pub fn style(&self) -> &ShapeStyle {
        match self {
            Shape::Point(s) => s.style(),
            Shape::Line(s) => s.style(),
            Shape::Rectangle(s) => s.style(),
            Shape::Ellipse(s) => s.style(),
            Shape::Triangle(s) => s.style(),
        }
    }

    pub fn style_mut(&mut self) -> &mut ShapeStyle {
        match self {
            Shape::Point(s) => s.style_mut(),
            Shape::Line(s) => s.style_mut(),
            Shape::Rectangle(s) => s.style_mut(),
            Shape::Ellipse(s) => s.style_mut(),
            Shape::Triangle(s) => s.style_mut(),
        }
    }

    pub fn symbol(&self) -> char {
        self.style().symbol
    }

    pub fn color(&self) -> Color {
        self.style().color
    }

    /// Short variant name for logs and status lines.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Shape::Point(_) => "point",
            Shape::Line(_) => "line",
            Shape::Rectangle(_) => "rectangle",
            Shape::Ellipse(_) => "ellipse",
            Shape::Triangle(_) => "triangle",
        }
    }

    /// Regenerate the shape's ID with a new unique identifier.
    /// Used when loaded shapes collide with ids already on a canvas.
    pub fn regenerate_id(&mut self) {
        let new_id = Uuid::new_v4();
        match self {
            Shape::Point(s) => s.id = new_id,
            Shape::Line(s) => s.id = new_id,
            Shape::Rectangle(s) => s.id = new_id,
            Shape::Ellipse(s) => s.id = new_id,
            Shape::Triangle(s) => s.id = new_id,
        }
    }
}

impl From<Point> for Shape {
    fn from(s: Point) -> Self {
        Shape::Point(s)
    }
}

impl From<Line> for Shape {
    fn from(s: Line) -> Self {
        Shape::Line(s)
    }
}

impl From<Rectangle> for Shape {
    fn from(s: Rectangle) -> Self {
        Shape::Rectangle(s)
    }
}

impl From<Ellipse> for Shape {
    fn from(s: Ellipse) -> Self {
        Shape::Ellipse(s)
    }
}

impl From<Triangle> for Shape {
    fn from(s: Triangle) -> Self {
        Shape::Triangle(s)
    }
}
