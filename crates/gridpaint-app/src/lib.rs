//! GridPaint application shell.
//!
//! Wires configuration, the canvas, undo history and storage together and
//! paints the result to a terminal.

use gridpaint_core::{
    Canvas, CanvasConfig, Command, ConfigError, ShapeFactory, ShapeStore, StorageError, UndoManager,
};
use gridpaint_render::{AnsiSurface, GridRenderer, RenderContext, RendererError};
use std::io::Write;
use thiserror::Error;

/// Application errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Render(#[from] RendererError),
}

/// One drawing session.
pub struct App {
    canvas: Canvas,
    history: UndoManager,
    factory: ShapeFactory,
    renderer: GridRenderer,
}

impl App {
    pub fn new(config: &CanvasConfig) -> Self {
        let canvas = Canvas::from_config(config);
        let history = match config.history_limit {
            Some(limit) => UndoManager::with_limit(limit),
            None => UndoManager::new(),
        };
        let factory = ShapeFactory::for_canvas(&canvas);
        Self {
            canvas,
            history,
            factory,
            renderer: GridRenderer::new(),
        }
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn factory(&self) -> &ShapeFactory {
        &self.factory
    }

    /// Run a command through the undo history.
    pub fn execute(&mut self, command: Command) {
        self.history.execute_action(command, &mut self.canvas);
    }

    pub fn undo(&mut self) -> bool {
        self.history.undo(&mut self.canvas)
    }

    pub fn redo(&mut self) -> bool {
        self.history.redo(&mut self.canvas)
    }

    /// Append a saved drawing. Loading is not recorded in the undo history.
    pub fn load_drawing(&mut self, store: &dyn ShapeStore, name: &str) -> Result<usize, AppError> {
        Ok(self.canvas.load_from(store, name)?)
    }

    pub fn save_drawing(&self, store: &dyn ShapeStore, name: &str) -> Result<(), AppError> {
        Ok(self.canvas.save_to(store, name)?)
    }

    /// Paint the framed canvas once to `out`.
    pub fn paint<W: Write>(&mut self, out: W) -> Result<(), AppError> {
        let ctx = RenderContext::new(&self.canvas);
        let (width, height) = ctx.required_size();
        let mut surface = AnsiSurface::new(out, width, height);
        self.renderer.render(&ctx, &mut surface)?;
        Ok(())
    }
}

/// Entry point: `gridpaint [DRAWING]`.
pub fn run(drawing: Option<&str>) -> Result<(), AppError> {
    let config = CanvasConfig::from_env_or_default();
    log::info!("Canvas {}x{}", config.width, config.height);

    let mut app = App::new(&config);
    if let Some(name) = drawing {
        let storage = config.open_storage()?;
        log::info!("Using drawings in {}", storage.base_path().display());
        app.load_drawing(&storage, name)?;
    }

    app.paint(std::io::stdout().lock())
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridpaint_core::{Color, MemoryStorage};

    fn small_config() -> CanvasConfig {
        CanvasConfig {
            width: 5,
            height: 3,
            history_limit: Some(10),
            ..CanvasConfig::default()
        }
    }

    #[test]
    fn test_session_edit_and_undo() {
        let mut app = App::new(&small_config());
        let shape = app.factory().create_line(0, 1, 4, 1, '=', Color::Blue).unwrap();
        app.execute(Command::add(shape));
        assert_eq!(app.canvas().get_pixel(2, 1).unwrap().symbol, '=');

        assert!(app.undo());
        assert!(app.canvas().is_empty());
        assert!(app.redo());
        assert_eq!(app.canvas().len(), 1);
    }

    #[test]
    fn test_load_and_paint() {
        let store = MemoryStorage::new();
        let mut source = App::new(&small_config());
        let point = source.factory().create_point(2, 1, '@', Color::Red).unwrap();
        source.execute(Command::add(point));
        source.save_drawing(&store, "dot").unwrap();

        let mut app = App::new(&small_config());
        assert_eq!(app.load_drawing(&store, "dot").unwrap(), 1);

        let mut out = Vec::new();
        app.paint(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 5);
        assert!(text.contains('@'));
    }

    #[test]
    fn test_missing_drawing() {
        let store = MemoryStorage::new();
        let mut app = App::new(&small_config());
        assert!(matches!(
            app.load_drawing(&store, "nope"),
            Err(AppError::Storage(StorageError::NotFound(_)))
        ));
    }
}
