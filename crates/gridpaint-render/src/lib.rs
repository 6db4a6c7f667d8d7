//! GridPaint Render Library
//!
//! Cell surface abstraction and painters for GridPaint canvases.
//! `AnsiSurface` writes colored frames to a terminal; `TextSurface` keeps
//! them in memory.

mod ansi;
mod renderer;
mod text;

pub use ansi::AnsiSurface;
pub use renderer::{
    CURSOR_COLOR, CURSOR_SYMBOL, GridRenderer, RenderContext, RenderResult, RendererError, Surface,
};
pub use text::TextSurface;
