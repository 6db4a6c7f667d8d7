//! Ellipse shape.

use super::raster::ellipse_cells;
use super::{Cell, ShapeId, ShapeStyle, ShapeTrait};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Outline of an axis-aligned ellipse.
///
/// Radius limits are enforced by [`crate::factory::ShapeFactory`], not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ellipse {
    pub(crate) id: ShapeId,
    /// Center point.
    pub center: Cell,
    /// Horizontal radius.
    pub radius_x: i32,
    /// Vertical radius.
    pub radius_y: i32,
    /// Style properties.
    pub style: ShapeStyle,
}

impl Ellipse {
    /// Create a new ellipse.
    pub fn new(center: Cell, radius_x: i32, radius_y: i32) -> Self {
        Self {
            id: Uuid::new_v4(),
            center,
            radius_x,
            radius_y,
            style: ShapeStyle::default(),
        }
    }

    /// Create a circle.
    pub fn circle(center: Cell, radius: i32) -> Self {
        Self::new(center, radius, radius)
    }

    pub fn with_style(mut self, style: ShapeStyle) -> Self {
        self.style = style;
        self
    }
}

impl ShapeTrait for Ellipse {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn occupied_cells(&self) -> Vec<Cell> {
        ellipse_cells(self.center, self.radius_x, self.radius_y)
    }

    fn translate(&mut self, dx: i32, dy: i32) {
        self.center = self.center.offset(dx, dy);
    }

    fn style(&self) -> &ShapeStyle {
        &self.style
    }

    fn style_mut(&mut self) -> &mut ShapeStyle {
        &mut self.style
    }
}
