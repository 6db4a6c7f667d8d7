//! Point shape.

use super::{Cell, ShapeId, ShapeStyle, ShapeTrait};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single-cell shape. Also used for ephemeral canvas markers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub(crate) id: ShapeId,
    /// The occupied cell.
    pub position: Cell,
    /// Style properties.
    pub style: ShapeStyle,
}

impl Point {
    /// Create a new point.
    pub fn new(position: Cell) -> Self {
        Self {
            id: Uuid::new_v4(),
            position,
            style: ShapeStyle::default(),
        }
    }

    /// Set the style, builder style.
    pub fn with_style(mut self, style: ShapeStyle) -> Self {
        self.style = style;
        self
    }
}

impl ShapeTrait for Point {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn occupied_cells(&self) -> Vec<Cell> {
        vec![self.position]
    }

    fn contains_point(&self, cell: Cell) -> bool {
        self.position == cell
    }

    fn translate(&mut self, dx: i32, dy: i32) {
        self.position = self.position.offset(dx, dy);
    }

    fn style(&self) -> &ShapeStyle {
        &self.style
    }

    fn style_mut(&mut self) -> &mut ShapeStyle {
        &mut self.style
    }
}
