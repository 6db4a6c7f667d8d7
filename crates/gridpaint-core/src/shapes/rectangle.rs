//! Rectangle shape.

use super::raster::in_range;
use super::{Cell, ShapeId, ShapeStyle, ShapeTrait};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Glyph the factory gives rectangles when none is chosen.
pub const DEFAULT_RECTANGLE_SYMBOL: char = '#';

/// An outlined rectangle spanned by two opposite corners, in any order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    pub(crate) id: ShapeId,
    /// First corner.
    pub corner_a: Cell,
    /// Opposite corner.
    pub corner_b: Cell,
    /// Style properties.
    pub style: ShapeStyle,
}

impl Rectangle {
    /// Create a new rectangle from two opposite corners.
    pub fn new(corner_a: Cell, corner_b: Cell) -> Self {
        Self {
            id: Uuid::new_v4(),
            corner_a,
            corner_b,
            style: ShapeStyle::new(DEFAULT_RECTANGLE_SYMBOL, Default::default()),
        }
    }

    pub fn with_style(mut self, style: ShapeStyle) -> Self {
        self.style = style;
        self
    }

    /// Normalized (top-left, bottom-right) corners.
    pub fn normalized(&self) -> (Cell, Cell) {
        let min = Cell::new(
            self.corner_a.x.min(self.corner_b.x),
            self.corner_a.y.min(self.corner_b.y),
        );
        let max = Cell::new(
            self.corner_a.x.max(self.corner_b.x),
            self.corner_a.y.max(self.corner_b.y),
        );
        (min, max)
    }
}

impl ShapeTrait for Rectangle {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn occupied_cells(&self) -> Vec<Cell> {
        let (min, max) = self.normalized();
        if !in_range(min) || !in_range(max) {
            return Vec::new();
        }
        let mut cells = Vec::new();

        for x in min.x..=max.x {
            cells.push(Cell::new(x, min.y));
            if max.y != min.y {
                cells.push(Cell::new(x, max.y));
            }
        }
        for y in min.y + 1..max.y {
            cells.push(Cell::new(min.x, y));
            if max.x != min.x {
                cells.push(Cell::new(max.x, y));
            }
        }
        cells
    }

    fn contains_point(&self, cell: Cell) -> bool {
        let (min, max) = self.normalized();
        let inside = (min.x..=max.x).contains(&cell.x) && (min.y..=max.y).contains(&cell.y);
        inside && (cell.x == min.x || cell.x == max.x || cell.y == min.y || cell.y == max.y)
    }

    fn translate(&mut self, dx: i32, dy: i32) {
        self.corner_a = self.corner_a.offset(dx, dy);
        self.corner_b = self.corner_b.offset(dx, dy);
    }

    fn style(&self) -> &ShapeStyle {
        &self.style
    }

    fn style_mut(&mut self) -> &mut ShapeStyle {
        &mut self.style
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corner_past_limit_occupies_nothing() {
        let rect = Rectangle::new(Cell::new(0, 0), Cell::new(3, i32::MAX));
        assert!(rect.occupied_cells().is_empty());
    }

    #[test]
    fn test_border_only() {
        let rect = Rectangle::new(Cell::new(0, 0), Cell::new(4, 3));
        let cells = rect.occupied_cells();
        // 2 * 5 horizontal + 2 * 2 vertical
        assert_eq!(cells.len(), 14);
        assert!(rect.contains_point(Cell::new(0, 0)));
        assert!(rect.contains_point(Cell::new(4, 2)));
        assert!(!rect.contains_point(Cell::new(2, 1)));
        assert!(!rect.contains_point(Cell::new(5, 0)));
    }

    #[test]
    fn test_corner_order_irrelevant() {
        let a = Rectangle::new(Cell::new(6, 5), Cell::new(1, 1));
        let b = Rectangle::new(Cell::new(1, 1), Cell::new(6, 5));
        let mut ca = a.occupied_cells();
        let mut cb = b.occupied_cells();
        ca.sort();
        cb.sort();
        assert_eq!(ca, cb);
    }

    #[test]
    fn test_degenerate_rectangles_have_no_duplicates() {
        let row = Rectangle::new(Cell::new(2, 3), Cell::new(6, 3));
        assert_eq!(row.occupied_cells().len(), 5);

        let column = Rectangle::new(Cell::new(2, 1), Cell::new(2, 4));
        assert_eq!(column.occupied_cells().len(), 4);

        let single = Rectangle::new(Cell::new(2, 2), Cell::new(2, 2));
        assert_eq!(single.occupied_cells(), vec![Cell::new(2, 2)]);
    }

    #[test]
    fn test_contains_point_agrees_with_cells() {
        let rect = Rectangle::new(Cell::new(3, 1), Cell::new(0, 4));
        for x in -1..6 {
            for y in -1..7 {
                let cell = Cell::new(x, y);
                assert_eq!(rect.contains_point(cell), rect.occupied_cells().contains(&cell));
            }
        }
    }

    #[test]
    fn test_default_symbol() {
        let rect = Rectangle::new(Cell::new(0, 0), Cell::new(1, 1));
        assert_eq!(rect.style.symbol, DEFAULT_RECTANGLE_SYMBOL);
    }
}
