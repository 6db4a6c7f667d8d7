//! Triangle shape.

use super::raster::{dedup, line_cells};
use super::{Cell, ShapeId, ShapeStyle, ShapeTrait};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Outline of a triangle: three segments between its vertices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    pub(crate) id: ShapeId,
    pub a: Cell,
    pub b: Cell,
    pub c: Cell,
    /// Style properties.
    pub style: ShapeStyle,
}

impl Triangle {
    /// Create a new triangle.
    pub fn new(a: Cell, b: Cell, c: Cell) -> Self {
        Self {
            id: Uuid::new_v4(),
            a,
            b,
            c,
            style: ShapeStyle::default(),
        }
    }

    pub fn with_style(mut self, style: ShapeStyle) -> Self {
        self.style = style;
        self
    }

    pub fn vertices(&self) -> [Cell; 3] {
        [self.a, self.b, self.c]
    }
}

impl ShapeTrait for Triangle {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn occupied_cells(&self) -> Vec<Cell> {
        let mut cells = line_cells(self.a, self.b);
        cells.extend(line_cells(self.b, self.c));
        cells.extend(line_cells(self.c, self.a));
        dedup(cells)
    }

    fn translate(&mut self, dx: i32, dy: i32) {
        self.a = self.a.offset(dx, dy);
        self.b = self.b.offset(dx, dy);
        self.c = self.c.offset(dx, dy);
    }

    fn style(&self) -> &ShapeStyle {
        &self.style
    }

    fn style_mut(&mut self) -> &mut ShapeStyle {
        &mut self.style
    }
}
