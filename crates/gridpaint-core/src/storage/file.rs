//! File-based storage: one JSON file per drawing.

use super::{ShapeStore, StorageError, StorageResult, shapes_from_json, shapes_to_json};
use crate::shapes::Shape;
use std::fs;
use std::path::{Path, PathBuf};

const EXTENSION: &str = "json";

/// File-based storage.
///
/// Stores drawings as pretty JSON files in a directory. A name with or
/// without the `.json` suffix refers to the same file.
#[derive(Debug, Clone)]
pub struct FileStorage {
    /// Base directory for drawing files.
    base_path: PathBuf,
}

impl FileStorage {
    /// Create a new file storage with the given base directory.
    ///
    /// Creates the directory if it doesn't exist.
    pub fn new(base_path: impl Into<PathBuf>) -> StorageResult<Self> {
        let base_path = base_path.into();
        if !base_path.exists() {
            fs::create_dir_all(&base_path).map_err(|e| {
                StorageError::Io(format!("Failed to create storage directory: {}", e))
            })?;
        }
        Ok(Self { base_path })
    }

    /// Create file storage in the default location.
    ///
    /// On Unix: `~/.local/share/gridpaint/drawings/`
    /// On Windows: `%LOCALAPPDATA%\gridpaint\drawings\`
    pub fn default_location() -> StorageResult<Self> {
        Self::new(Self::default_dir()?)
    }

    /// Directory used by [`FileStorage::default_location`].
    pub fn default_dir() -> StorageResult<PathBuf> {
        let base = dirs::data_local_dir()
            .or_else(dirs::home_dir)
            .ok_or_else(|| StorageError::Io("Could not determine home directory".to_string()))?;
        Ok(base.join("gridpaint").join("drawings"))
    }

    /// Get the base path.
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Get the file path for a drawing name.
    ///
    /// Names are limited to alphanumerics, `-` and `_` so that distinct names
    /// never share a file.
    fn drawing_path(&self, name: &str) -> StorageResult<PathBuf> {
        let stem = name.strip_suffix(".json").unwrap_or(name);
        let valid = !stem.is_empty()
            && stem
                .chars()
                .all(|c| c.is_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(StorageError::InvalidName(name.to_string()));
        }
        Ok(self.base_path.join(format!("{}.{}", stem, EXTENSION)))
    }
}

impl ShapeStore for FileStorage {
    fn save(&self, name: &str, shapes: &[Shape]) -> StorageResult<()> {
        let path = self.drawing_path(name)?;
        let json = shapes_to_json(shapes).map_err(|e| StorageError::Serialization(e.to_string()))?;
        fs::write(&path, json)
            .map_err(|e| StorageError::Io(format!("Failed to write {}: {}", path.display(), e)))
    }

    fn load(&self, name: &str) -> StorageResult<Vec<Shape>> {
        let path = self.drawing_path(name)?;
        if !path.exists() {
            return Err(StorageError::NotFound(name.to_string()));
        }

        let json = fs::read_to_string(&path)
            .map_err(|e| StorageError::Io(format!("Failed to read {}: {}", path.display(), e)))?;
        shapes_from_json(&json).map_err(|e| {
            StorageError::Serialization(format!("Failed to parse {}: {}", path.display(), e))
        })
    }

    fn delete(&self, name: &str) -> StorageResult<()> {
        let path = self.drawing_path(name)?;
        if path.exists() {
            fs::remove_file(&path).map_err(|e| {
                StorageError::Io(format!("Failed to delete {}: {}", path.display(), e))
            })?;
        }
        Ok(())
    }

    fn list(&self) -> StorageResult<Vec<String>> {
        if !self.base_path.exists() {
            return Ok(vec![]);
        }

        let entries = fs::read_dir(&self.base_path)
            .map_err(|e| StorageError::Io(format!("Failed to read directory: {}", e)))?;

        let mut names: Vec<String> = entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| path.extension().is_some_and(|ext| ext == EXTENSION))
            .filter_map(|path| path.file_stem()?.to_str().map(str::to_string))
            .collect();
        names.sort();
        Ok(names)
    }

    fn exists(&self, name: &str) -> StorageResult<bool> {
        Ok(self.drawing_path(name)?.exists())
    }
}
