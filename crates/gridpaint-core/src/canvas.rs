//! Canvas: the ordered shape list and the character grid derived from it.

use crate::color::Color;
use crate::config::CanvasConfig;
use crate::shapes::{Cell, Point, Shape, ShapeId, ShapeStyle};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Glyph of ephemeral markers.
pub const MARKER_SYMBOL: char = '*';
/// Color of ephemeral markers.
pub const MARKER_COLOR: Color = Color::Red;

/// Canvas errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CanvasError {
    #[error("Cell ({x}, {y}) is outside the {width}x{height} canvas")]
    OutOfBounds {
        x: i32,
        y: i32,
        width: usize,
        height: usize,
    },
}

/// One rendered grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pixel {
    pub symbol: char,
    pub color: Color,
}

impl Pixel {
    pub fn new(symbol: char, color: Color) -> Self {
        Self { symbol, color }
    }

    /// Pixel of an uncovered cell.
    pub fn background(symbol: char) -> Self {
        Self::new(symbol, Color::White)
    }
}

impl From<ShapeStyle> for Pixel {
    fn from(style: ShapeStyle) -> Self {
        Self::new(style.symbol, style.color)
    }
}

/// A fixed-size character canvas.
///
/// Shapes are stored by id with a separate paint order (back to front), so
/// commands can hold ids instead of references. The pixel grid is a cache
/// rebuilt from the shapes by [`Canvas::redraw_all_shapes`].
#[derive(Debug, Clone)]
pub struct Canvas {
    width: usize,
    height: usize,
    background: Pixel,
    shapes: HashMap<ShapeId, Shape>,
    /// Paint order of shapes (back to front).
    z_order: Vec<ShapeId>,
    /// Row-major grid, `width * height` cells.
    grid: Vec<Pixel>,
}

impl Canvas {
    /// Create an empty canvas with a blank background.
    pub fn new(width: usize, height: usize) -> Self {
        Self::with_background(width, height, ' ')
    }

    /// Create an empty canvas whose uncovered cells show `symbol`.
    pub fn with_background(width: usize, height: usize, symbol: char) -> Self {
        let background = Pixel::background(symbol);
        Self {
            width,
            height,
            background,
            shapes: HashMap::new(),
            z_order: Vec::new(),
            grid: vec![background; width * height],
        }
    }

    /// Create a canvas sized and styled from configuration.
    pub fn from_config(config: &CanvasConfig) -> Self {
        Self::with_background(config.width, config.height, config.background)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// The pixel uncovered cells render as.
    pub fn background(&self) -> Pixel {
        self.background
    }

    /// Whether a cell lies on the grid.
    pub fn in_bounds(&self, cell: Cell) -> bool {
        self.index_of(cell).is_some()
    }

    fn index_of(&self, cell: Cell) -> Option<usize> {
        let x = usize::try_from(cell.x).ok()?;
        let y = usize::try_from(cell.y).ok()?;
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }

    /// Append a shape on top of the paint order. Does not redraw.
    pub fn add_shape(&mut self, shape: Shape) -> ShapeId {
        let id = shape.id();
        if self.shapes.insert(id, shape).is_some() {
            // Same id added twice: keep a single entry in the paint order.
            self.z_order.retain(|&shape_id| shape_id != id);
        }
        self.z_order.push(id);
        id
    }

    /// Insert a shape at a paint position (clamped to the list length). Does not redraw.
    pub fn insert_shape_at(&mut self, index: usize, shape: Shape) {
        let id = shape.id();
        if self.shapes.insert(id, shape).is_some() {
            self.z_order.retain(|&shape_id| shape_id != id);
        }
        let index = index.min(self.z_order.len());
        self.z_order.insert(index, id);
    }

    /// Remove a shape. Absent ids are a no-op. Does not redraw.
    pub fn remove_shape(&mut self, id: ShapeId) -> Option<Shape> {
        self.take_shape(id).map(|(_, shape)| shape)
    }

    /// Remove a shape and report the paint position it held.
    pub fn take_shape(&mut self, id: ShapeId) -> Option<(usize, Shape)> {
        let index = self.z_order.iter().position(|&shape_id| shape_id == id)?;
        self.z_order.remove(index);
        self.shapes.remove(&id).map(|shape| (index, shape))
    }

    /// Append loaded shapes, giving fresh ids to any that collide with shapes
    /// already on the canvas. Does not redraw.
    pub fn extend_shapes(&mut self, shapes: impl IntoIterator<Item = Shape>) -> Vec<ShapeId> {
        shapes
            .into_iter()
            .map(|mut shape| {
                if self.shapes.contains_key(&shape.id()) {
                    log::warn!("Shape id {} already on canvas, assigning a new id", shape.id());
                    shape.regenerate_id();
                }
                self.add_shape(shape)
            })
            .collect()
    }

    /// Remove every shape. Does not redraw.
    pub fn clear(&mut self) {
        self.shapes.clear();
        self.z_order.clear();
    }

    /// Get a shape by ID.
    pub fn get_shape(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.get(&id)
    }

    /// Get a mutable reference to a shape by ID.
    pub fn get_shape_mut(&mut self, id: ShapeId) -> Option<&mut Shape> {
        self.shapes.get_mut(&id)
    }

    pub fn contains_shape(&self, id: ShapeId) -> bool {
        self.shapes.contains_key(&id)
    }

    /// Shapes in paint order (back to front).
    pub fn shapes(&self) -> impl Iterator<Item = &Shape> {
        self.z_order.iter().filter_map(|id| self.shapes.get(id))
    }

    /// Shape ids in paint order (back to front).
    pub fn shape_ids(&self) -> &[ShapeId] {
        &self.z_order
    }

    pub fn is_empty(&self) -> bool {
        self.z_order.is_empty()
    }

    pub fn len(&self) -> usize {
        self.z_order.len()
    }

    /// First shape in paint order occupying the cell.
    pub fn shape_at(&self, cell: Cell) -> Option<ShapeId> {
        self.shapes()
            .find(|shape| shape.contains_point(cell))
            .map(Shape::id)
    }

    /// All shapes occupying the cell, front to back.
    pub fn shapes_at(&self, cell: Cell) -> Vec<ShapeId> {
        self.z_order
            .iter()
            .rev()
            .filter(|id| {
                self.shapes
                    .get(*id)
                    .is_some_and(|shape| shape.contains_point(cell))
            })
            .copied()
            .collect()
    }

    /// Read a cell of the rendered grid.
    pub fn get_pixel(&self, x: i32, y: i32) -> Result<Pixel, CanvasError> {
        self.index_of(Cell::new(x, y))
            .map(|index| self.grid[index])
            .ok_or(CanvasError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            })
    }

    /// Rendered grid, one slice per row, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Pixel]> {
        // chunks() rejects a zero chunk size.
        self.grid.chunks(self.width.max(1))
    }

    /// Rebuild the whole grid from the shapes, in paint order.
    ///
    /// Later shapes overwrite earlier ones cell by cell; cells off the grid are
    /// skipped.
    pub fn redraw_all_shapes(&mut self) {
        self.grid.fill(self.background);

        let mut painted = 0usize;
        for id in &self.z_order {
            let Some(shape) = self.shapes.get(id) else {
                continue;
            };
            let pixel = Pixel::from(*shape.style());
            for cell in shape.occupied_cells() {
                if let Some(index) = self.index_of(cell) {
                    self.grid[index] = pixel;
                    painted += 1;
                }
            }
        }
        log::debug!(
            "Redrew {} shapes ({} cells painted)",
            self.z_order.len(),
            painted
        );
    }

    /// Place an ephemeral marker point directly on the canvas, outside the
    /// undo history, and redraw.
    pub fn place_marker(&mut self, cell: Cell) -> ShapeId {
        let marker = Point::new(cell).with_style(ShapeStyle::new(MARKER_SYMBOL, MARKER_COLOR));
        let id = self.add_shape(Shape::Point(marker));
        self.redraw_all_shapes();
        id
    }

    /// Remove markers placed by [`Canvas::place_marker`] and redraw.
    pub fn clear_markers(&mut self, ids: &[ShapeId]) {
        for &id in ids {
            self.remove_shape(id);
        }
        self.redraw_all_shapes();
    }
}
