//! In-memory storage implementation.

use super::{ShapeStore, StorageError, StorageResult};
use crate::shapes::Shape;
use std::collections::HashMap;
use std::sync::RwLock;

/// In-memory storage for testing and ephemeral use.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    drawings: RwLock<HashMap<String, Vec<Shape>>>,
}

impl MemoryStorage {
    /// Create a new empty memory storage.
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_error(e: impl std::fmt::Display) -> StorageError {
    StorageError::Other(format!("Lock error: {}", e))
}

impl ShapeStore for MemoryStorage {
    fn save(&self, name: &str, shapes: &[Shape]) -> StorageResult<()> {
        let mut drawings = self.drawings.write().map_err(lock_error)?;
        drawings.insert(name.to_string(), shapes.to_vec());
        Ok(())
    }

    fn load(&self, name: &str) -> StorageResult<Vec<Shape>> {
        let drawings = self.drawings.read().map_err(lock_error)?;
        drawings
            .get(name)
            .cloned()
            .ok_or_else(|| StorageError::NotFound(name.to_string()))
    }

    fn delete(&self, name: &str) -> StorageResult<()> {
        let mut drawings = self.drawings.write().map_err(lock_error)?;
        drawings.remove(name);
        Ok(())
    }

    fn list(&self) -> StorageResult<Vec<String>> {
        let drawings = self.drawings.read().map_err(lock_error)?;
        let mut names: Vec<String> = drawings.keys().cloned().collect();
        names.sort();
        Ok(names)
    }

    fn exists(&self, name: &str) -> StorageResult<bool> {
        let drawings = self.drawings.read().map_err(lock_error)?;
        Ok(drawings.contains_key(name))
    }
}
