//! Line shape.

use super::raster::line_cells;
use super::{Cell, ShapeId, ShapeStyle, ShapeTrait};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A straight segment between two cells.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub(crate) id: ShapeId,
    /// Start point.
    pub start: Cell,
    /// End point.
    pub end: Cell,
    /// Style properties.
    pub style: ShapeStyle,
}

impl Line {
    /// Create a new line.
    pub fn new(start: Cell, end: Cell) -> Self {
        Self {
            id: Uuid::new_v4(),
            start,
            end,
            style: ShapeStyle::default(),
        }
    }

    pub fn with_style(mut self, style: ShapeStyle) -> Self {
        self.style = style;
        self
    }

    /// Number of cells the line covers.
    pub fn cell_len(&self) -> usize {
        let dx = (i64::from(self.end.x) - i64::from(self.start.x)).unsigned_abs();
        let dy = (i64::from(self.end.y) - i64::from(self.start.y)).unsigned_abs();
        dx.max(dy) as usize + 1
    }
}

impl ShapeTrait for Line {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn occupied_cells(&self) -> Vec<Cell> {
        line_cells(self.start, self.end)
    }

    fn translate(&mut self, dx: i32, dy: i32) {
        self.start = self.start.offset(dx, dy);
        self.end = self.end.offset(dx, dy);
    }

    fn style(&self) -> &ShapeStyle {
        &self.style
    }

    fn style_mut(&mut self) -> &mut ShapeStyle {
        &mut self.style
    }
}
