//! Storage abstraction for saved drawings.

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use crate::canvas::Canvas;
use crate::factory::validate_geometry;
use crate::shapes::Shape;
use thiserror::Error;

/// Storage errors.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Drawing not found: {0}")]
    NotFound(String),
    #[error("Invalid drawing name: {0:?}")]
    InvalidName(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("IO error: {0}")]
    Io(String),
    #[error("Storage error: {0}")]
    Other(String),
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Trait for drawing storage backends.
///
/// A drawing is the shape list of a canvas, in paint order, under a name.
pub trait ShapeStore: Send + Sync {
    /// Save a drawing, replacing any drawing of the same name.
    fn save(&self, name: &str, shapes: &[Shape]) -> StorageResult<()>;

    /// Load a drawing.
    fn load(&self, name: &str) -> StorageResult<Vec<Shape>>;

    /// Delete a drawing. Deleting a missing drawing succeeds.
    fn delete(&self, name: &str) -> StorageResult<()>;

    /// List all drawing names.
    fn list(&self) -> StorageResult<Vec<String>>;

    /// Check if a drawing exists.
    fn exists(&self, name: &str) -> StorageResult<bool>;
}

/// Serialize shapes to pretty JSON, one externally tagged entry per shape.
pub fn shapes_to_json(shapes: &[Shape]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(shapes)
}

/// Parse shapes written by [`shapes_to_json`].
pub fn shapes_from_json(json: &str) -> Result<Vec<Shape>, serde_json::Error> {
    serde_json::from_str(json)
}

impl Canvas {
    /// Save the shape list under `name`.
    pub fn save_to(&self, store: &dyn ShapeStore, name: &str) -> StorageResult<()> {
        let shapes: Vec<Shape> = self.shapes().cloned().collect();
        store.save(name, &shapes)?;
        log::info!("Saved {} shapes to {}", shapes.len(), name);
        Ok(())
    }

    /// Append the shapes saved under `name` and redraw.
    /// Returns the number of shapes loaded. A drawing with any shape outside
    /// the coordinate limit is rejected whole and the canvas is left as it is.
    pub fn load_from(&mut self, store: &dyn ShapeStore, name: &str) -> StorageResult<usize> {
        let shapes = store
            .load(name)
            .and_then(|shapes| {
                for shape in &shapes {
                    validate_geometry(shape).map_err(|e| {
                        StorageError::Serialization(format!("Invalid {} in {}: {}", shape.kind_name(), name, e))
                    })?;
                }
                Ok(shapes)
            })
            .map_err(|e| {
                log::error!("Failed to load {}: {}", name, e);
                e
            })?;
        let loaded = self.extend_shapes(shapes).len();
        self.redraw_all_shapes();
        log::info!("Loaded {} shapes from {}", loaded, name);
        Ok(loaded)
    }
}
