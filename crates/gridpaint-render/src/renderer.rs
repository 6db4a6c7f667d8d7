//! Surface trait and the canvas painter.

use gridpaint_core::canvas::{Canvas, Pixel};
use gridpaint_core::color::Color;
use gridpaint_core::shapes::Cell;
use thiserror::Error;

/// Glyph drawn at the cursor cell.
pub const CURSOR_SYMBOL: char = '_';
/// Color of the cursor glyph.
pub const CURSOR_COLOR: Color = Color::Yellow;

const FRAME_CORNER: char = '+';
const FRAME_HORIZONTAL: char = '-';
const FRAME_VERTICAL: char = '|';

/// Renderer errors.
#[derive(Debug, Error)]
pub enum RendererError {
    #[error("Surface is {actual_width}x{actual_height}, frame needs {width}x{height}")]
    SurfaceTooSmall {
        width: usize,
        height: usize,
        actual_width: usize,
        actual_height: usize,
    },
    #[error("Surface error: {0}")]
    Surface(#[from] std::io::Error),
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RendererError>;

/// A rectangular grid of colored character cells.
pub trait Surface {
    /// Size in cells as (width, height).
    fn size(&self) -> (usize, usize);

    /// Set one cell. Cells outside the surface are ignored.
    fn put_cell(&mut self, x: usize, y: usize, pixel: Pixel);

    /// Present everything put since the last flush.
    fn flush(&mut self) -> RenderResult<()>;
}

/// Context for a single frame.
#[derive(Debug, Clone)]
pub struct RenderContext<'a> {
    /// The canvas to paint.
    pub canvas: &'a Canvas,
    /// Draw a one-cell border around the canvas.
    pub frame: bool,
    /// Canvas cell that shows the cursor glyph.
    pub cursor: Option<Cell>,
    /// Color of the border.
    pub frame_color: Color,
}

impl<'a> RenderContext<'a> {
    /// Create a new render context.
    pub fn new(canvas: &'a Canvas) -> Self {
        Self {
            canvas,
            frame: true,
            cursor: None,
            frame_color: Color::White,
        }
    }

    /// Enable or disable the border.
    pub fn with_frame(mut self, frame: bool) -> Self {
        self.frame = frame;
        self
    }

    /// Set the cursor cell.
    pub fn with_cursor(mut self, cursor: Option<Cell>) -> Self {
        self.cursor = cursor;
        self
    }

    /// Set the border color.
    pub fn with_frame_color(mut self, color: Color) -> Self {
        self.frame_color = color;
        self
    }

    /// Offset of canvas cell (0, 0) on the surface.
    fn origin(&self) -> usize {
        usize::from(self.frame)
    }

    /// Surface size needed for this frame.
    pub fn required_size(&self) -> (usize, usize) {
        let border = 2 * self.origin();
        (self.canvas.width() + border, self.canvas.height() + border)
    }
}

/// Paints canvases onto surfaces.
#[derive(Debug, Default)]
pub struct GridRenderer {
    frames: u64,
}

impl GridRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of frames painted so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Paint a full frame and flush the surface.
    pub fn render(&mut self, ctx: &RenderContext, surface: &mut dyn Surface) -> RenderResult<()> {
        let (width, height) = ctx.required_size();
        let (actual_width, actual_height) = surface.size();
        if actual_width < width || actual_height < height {
            return Err(RendererError::SurfaceTooSmall {
                width,
                height,
                actual_width,
                actual_height,
            });
        }

        if ctx.frame {
            draw_frame(surface, width, height, ctx.frame_color);
        }

        let origin = ctx.origin();
        for (y, row) in ctx.canvas.rows().enumerate() {
            for (x, pixel) in row.iter().enumerate() {
                surface.put_cell(x + origin, y + origin, *pixel);
            }
        }

        if let Some(cursor) = ctx.cursor.filter(|&c| ctx.canvas.in_bounds(c)) {
            surface.put_cell(
                cursor.x as usize + origin,
                cursor.y as usize + origin,
                Pixel::new(CURSOR_SYMBOL, CURSOR_COLOR),
            );
        }

        surface.flush()?;
        self.frames += 1;
        log::debug!("Rendered frame {} ({}x{})", self.frames, width, height);
        Ok(())
    }
}

fn draw_frame(surface: &mut dyn Surface, width: usize, height: usize, color: Color) {
    let (right, bottom) = (width - 1, height - 1);
    for x in 0..width {
        let symbol = if x == 0 || x == right { FRAME_CORNER } else { FRAME_HORIZONTAL };
        surface.put_cell(x, 0, Pixel::new(symbol, color));
        surface.put_cell(x, bottom, Pixel::new(symbol, color));
    }
    for y in 1..bottom {
        surface.put_cell(0, y, Pixel::new(FRAME_VERTICAL, color));
        surface.put_cell(right, y, Pixel::new(FRAME_VERTICAL, color));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TextSurface;
    use gridpaint_core::shapes::{Line, Shape};

    fn canvas_with_line() -> Canvas {
        let mut canvas = Canvas::new(4, 2);
        canvas.add_shape(Shape::Line(Line::new(Cell::new(0, 0), Cell::new(2, 0))));
        canvas.redraw_all_shapes();
        canvas
    }

    #[test]
    fn test_render_with_frame() {
        let canvas = canvas_with_line();
        let mut surface = TextSurface::new(6, 4);
        GridRenderer::new()
            .render(&RenderContext::new(&canvas), &mut surface)
            .unwrap();

        assert_eq!(surface.to_string_lines(), vec!["+----+", "|*** |", "|    |", "+----+"]);
    }

    #[test]
    fn test_render_without_frame() {
        let canvas = canvas_with_line();
        let mut surface = TextSurface::new(4, 2);
        let ctx = RenderContext::new(&canvas).with_frame(false);
        GridRenderer::new().render(&ctx, &mut surface).unwrap();

        assert_eq!(surface.to_string_lines(), vec!["*** ", "    "]);
    }

    #[test]
    fn test_cursor_overlays_canvas() {
        let canvas = canvas_with_line();
        let mut surface = TextSurface::new(6, 4);
        let ctx = RenderContext::new(&canvas).with_cursor(Some(Cell::new(1, 0)));
        GridRenderer::new().render(&ctx, &mut surface).unwrap();

        assert_eq!(surface.pixel(2, 1), Some(Pixel::new(CURSOR_SYMBOL, CURSOR_COLOR)));
        // The canvas itself is untouched.
        assert_eq!(canvas.get_pixel(1, 0).unwrap().symbol, '*');
    }

    #[test]
    fn test_cursor_off_canvas_is_ignored() {
        let canvas = canvas_with_line();
        let mut surface = TextSurface::new(6, 4);
        let ctx = RenderContext::new(&canvas).with_cursor(Some(Cell::new(9, 9)));
        GridRenderer::new().render(&ctx, &mut surface).unwrap();
        assert!(!surface.to_string_lines().concat().contains(CURSOR_SYMBOL));
    }

    #[test]
    fn test_surface_too_small() {
        let canvas = canvas_with_line();
        let mut surface = TextSurface::new(4, 2);
        let mut renderer = GridRenderer::new();
        let result = renderer.render(&RenderContext::new(&canvas), &mut surface);

        assert!(matches!(result, Err(RendererError::SurfaceTooSmall { width: 6, height: 4, .. })));
        assert_eq!(renderer.frames(), 0);
    }
}
