//! Validated construction of shapes from raw integer parameters.

use crate::canvas::Canvas;
use crate::color::Color;
use crate::shapes::{
    Cell, Ellipse, Line, MAX_COORDINATE, Point, Rectangle, Shape, ShapeStyle, Triangle,
};
use thiserror::Error;

/// Parameter validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Coordinate ({x}, {y}) is outside the {width}x{height} canvas")]
    CoordinateOutOfRange {
        x: i32,
        y: i32,
        width: usize,
        height: usize,
    },
    #[error("Radius {radius} along {axis} must be between 1 and {max}")]
    RadiusOutOfRange { axis: char, radius: i32, max: i32 },
    #[error("Coordinate {value} exceeds the limit of {limit}")]
    GeometryOutOfRange { value: i32, limit: i32 },
}

/// Builds shapes for a canvas of a given size, rejecting parameters that
/// would not fit on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeFactory {
    width: usize,
    height: usize,
}

impl ShapeFactory {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    pub fn for_canvas(canvas: &Canvas) -> Self {
        Self::new(canvas.width(), canvas.height())
    }

    pub fn create_point(&self, x: i32, y: i32, symbol: char, color: Color) -> Result<Shape, ValidationError> {
        let position = self.cell(x, y)?;
        Ok(Point::new(position).with_style(ShapeStyle::new(symbol, color)).into())
    }

    pub fn create_line(
        &self,
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        symbol: char,
        color: Color,
    ) -> Result<Shape, ValidationError> {
        let start = self.cell(x1, y1)?;
        let end = self.cell(x2, y2)?;
        Ok(Line::new(start, end).with_style(ShapeStyle::new(symbol, color)).into())
    }

    /// Corners may be given in any order.
    pub fn create_rectangle(
        &self,
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        symbol: char,
        color: Color,
    ) -> Result<Shape, ValidationError> {
        let a = self.cell(x1, y1)?;
        let b = self.cell(x2, y2)?;
        Ok(Rectangle::new(a, b).with_style(ShapeStyle::new(symbol, color)).into())
    }

    /// The whole ellipse must fit: each radius is at least 1 and no larger
    /// than the distance from the center to either edge, nor half the
    /// dimension minus one.
    pub fn create_ellipse(
        &self,
        cx: i32,
        cy: i32,
        radius_x: i32,
        radius_y: i32,
        symbol: char,
        color: Color,
    ) -> Result<Shape, ValidationError> {
        let center = self.cell(cx, cy)?;
        check_radius('x', radius_x, cx, self.width)?;
        check_radius('y', radius_y, cy, self.height)?;
        Ok(Ellipse::new(center, radius_x, radius_y)
            .with_style(ShapeStyle::new(symbol, color))
            .into())
    }

    #[allow(clippy::too_many_arguments)]
    pub fn create_triangle(
        &self,
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        x3: i32,
        y3: i32,
        symbol: char,
        color: Color,
    ) -> Result<Shape, ValidationError> {
        let a = self.cell(x1, y1)?;
        let b = self.cell(x2, y2)?;
        let c = self.cell(x3, y3)?;
        Ok(Triangle::new(a, b, c).with_style(ShapeStyle::new(symbol, color)).into())
    }

    fn cell(&self, x: i32, y: i32) -> Result<Cell, ValidationError> {
        let inside = |v: i32, limit: usize| usize::try_from(v).is_ok_and(|v| v < limit);
        if inside(x, self.width) && inside(y, self.height) {
            Ok(Cell::new(x, y))
        } else {
            Err(ValidationError::CoordinateOutOfRange {
                x,
                y,
                width: self.width,
                height: self.height,
            })
        }
    }
}

/// Check geometry that did not come through a factory, such as a loaded
/// drawing. Shapes may sit off the canvas but every coordinate must be within
/// [`MAX_COORDINATE`] and radii must not be negative.
pub fn validate_geometry(shape: &Shape) -> Result<(), ValidationError> {
    let (cells, radii) = match shape {
        Shape::Point(p) => (vec![p.position], None),
        Shape::Line(l) => (vec![l.start, l.end], None),
        Shape::Rectangle(r) => (vec![r.corner_a, r.corner_b], None),
        Shape::Ellipse(e) => (vec![e.center], Some((e.radius_x, e.radius_y))),
        Shape::Triangle(t) => (t.vertices().to_vec(), None),
    };

    let values = cells.iter().flat_map(|c| [c.x, c.y]);
    let radii_values = radii.into_iter().flat_map(|(rx, ry)| [rx, ry]);
    if let Some(value) = values.chain(radii_values).find(|v| v.unsigned_abs() > MAX_COORDINATE as u32) {
        return Err(ValidationError::GeometryOutOfRange {
            value,
            limit: MAX_COORDINATE,
        });
    }

    if let Some((rx, ry)) = radii {
        for (axis, radius) in [('x', rx), ('y', ry)] {
            if radius < 0 {
                return Err(ValidationError::RadiusOutOfRange {
                    axis,
                    radius,
                    max: MAX_COORDINATE,
                });
            }
        }
    }
    Ok(())
}

fn check_radius(axis: char, radius: i32, center: i32, extent: usize) -> Result<(), ValidationError> {
    let extent = i32::try_from(extent).unwrap_or(i32::MAX);
    let max = center.min(extent - 1 - center).min(extent / 2 - 1);
    if (1..=max).contains(&radius) {
        Ok(())
    } else {
        Err(ValidationError::RadiusOutOfRange { axis, radius, max })
    }
}
