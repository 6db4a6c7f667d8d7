//! Terminal surface using ANSI SGR color escapes.

use crate::renderer::{RenderResult, Surface};
use gridpaint_core::canvas::Pixel;
use gridpaint_core::color::Color;
use std::io::Write;

const RESET: &str = "\x1b[0m";
const HOME: &str = "\x1b[H";

/// Buffers a frame and writes it to `W` on flush.
///
/// Color escapes are only emitted when the color changes along a row, and
/// every row ends with a reset.
pub struct AnsiSurface<W: Write> {
    writer: W,
    width: usize,
    height: usize,
    cells: Vec<Pixel>,
    home: bool,
}

impl<W: Write> AnsiSurface<W> {
    pub fn new(writer: W, width: usize, height: usize) -> Self {
        Self {
            writer,
            width,
            height,
            cells: vec![Pixel::background(' '); width * height],
            home: false,
        }
    }

    /// Move the terminal cursor home before each frame, so frames overwrite
    /// each other instead of scrolling.
    pub fn with_cursor_home(mut self, home: bool) -> Self {
        self.home = home;
        self
    }

    /// Consume the surface and return the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn encode(&self) -> String {
        let mut out = String::with_capacity(self.cells.len() * 2 + self.height * 8);
        if self.home {
            out.push_str(HOME);
        }
        for row in self.cells.chunks(self.width.max(1)).take(self.height) {
            let mut current: Option<Color> = None;
            for pixel in row {
                if current != Some(pixel.color) {
                    out.push_str(&format!("\x1b[{}m", pixel.color.ansi_code()));
                    current = Some(pixel.color);
                }
                out.push(pixel.symbol);
            }
            out.push_str(RESET);
            out.push('\n');
        }
        out
    }
}

impl<W: Write> Surface for AnsiSurface<W> {
    fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    fn put_cell(&mut self, x: usize, y: usize, pixel: Pixel) {
        if x < self.width && y < self.height {
            self.cells[y * self.width + x] = pixel;
        }
    }

    fn flush(&mut self) -> RenderResult<()> {
        let frame = self.encode();
        self.writer.write_all(frame.as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flush_writes_colored_rows() {
        let mut surface = AnsiSurface::new(Vec::new(), 3, 1);
        surface.put_cell(0, 0, Pixel::new('a', Color::Red));
        surface.put_cell(1, 0, Pixel::new('b', Color::Red));
        surface.flush().unwrap();

        let out = String::from_utf8(surface.into_inner()).unwrap();
        let red = format!("\x1b[{}m", Color::Red.ansi_code());
        let white = format!("\x1b[{}m", Color::White.ansi_code());
        assert_eq!(out, format!("{red}ab{white} {RESET}\n"));
    }

    #[test]
    fn test_cursor_home_prefix() {
        let mut surface = AnsiSurface::new(Vec::new(), 1, 1).with_cursor_home(true);
        surface.flush().unwrap();
        let out = String::from_utf8(surface.into_inner()).unwrap();
        assert!(out.starts_with(HOME));
    }
}
