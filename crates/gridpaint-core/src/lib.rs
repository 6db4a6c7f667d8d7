//! GridPaint Core Library
//!
//! Shapes, the character canvas, reversible commands with undo/redo history,
//! validated shape construction and drawing persistence.

pub mod canvas;
pub mod color;
pub mod commands;
pub mod config;
pub mod factory;
pub mod history;
pub mod shapes;
pub mod storage;

pub use canvas::{Canvas, CanvasError, Pixel};
pub use color::{Color, ColorParseError};
pub use commands::Command;
pub use config::{CanvasConfig, ConfigError};
pub use factory::{ShapeFactory, ValidationError, validate_geometry};
pub use history::UndoManager;
pub use shapes::{Cell, Shape, ShapeId, ShapeStyle, ShapeTrait};
pub use storage::{FileStorage, MemoryStorage, ShapeStore, StorageError, StorageResult};
