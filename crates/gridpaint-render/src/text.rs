//! In-memory surface.

use crate::renderer::{RenderResult, Surface};
use gridpaint_core::canvas::Pixel;

/// Keeps painted cells in memory. Used by tests and for plain-text export.
#[derive(Debug, Clone)]
pub struct TextSurface {
    width: usize,
    height: usize,
    cells: Vec<Pixel>,
}

impl TextSurface {
    /// Create a surface of blank cells.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Pixel::background(' '); width * height],
        }
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<Pixel> {
        (x < self.width && y < self.height).then(|| self.cells[y * self.width + x])
    }

    /// Glyphs row by row, colors dropped.
    pub fn to_string_lines(&self) -> Vec<String> {
        self.cells
            .chunks(self.width.max(1))
            .take(self.height)
            .map(|row| row.iter().map(|p| p.symbol).collect())
            .collect()
    }
}

impl Surface for TextSurface {
    fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    fn put_cell(&mut self, x: usize, y: usize, pixel: Pixel) {
        if x < self.width && y < self.height {
            self.cells[y * self.width + x] = pixel;
        }
    }

    fn flush(&mut self) -> RenderResult<()> {
        Ok(())
    }
}
