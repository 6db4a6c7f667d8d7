//! Canvas configuration.

use crate::storage::{FileStorage, StorageResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable naming a JSON config file.
pub const CONFIG_ENV_VAR: &str = "GRIDPAINT_CONFIG";

/// Default canvas width in cells.
pub const DEFAULT_WIDTH: usize = 80;
/// Default canvas height in cells.
pub const DEFAULT_HEIGHT: usize = 24;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Settings for a drawing session. Every field has a default, so a config
/// file only needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    /// Canvas width in cells.
    pub width: usize,
    /// Canvas height in cells.
    pub height: usize,
    /// Glyph shown in uncovered cells.
    pub background: char,
    /// Maximum number of undo entries (None = unlimited).
    pub history_limit: Option<usize>,
    /// Directory for saved drawings (None = platform data dir).
    pub storage_dir: Option<PathBuf>,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            background: ' ',
            history_limit: None,
            storage_dir: None,
        }
    }
}

impl CanvasConfig {
    /// Read a config from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse a config from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load the file named by `GRIDPAINT_CONFIG`, or fall back to defaults.
    pub fn from_env_or_default() -> Self {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => Self::load(&path).unwrap_or_else(|e| {
                log::warn!("{}; using default configuration", e);
                Self::default()
            }),
            None => Self::default(),
        }
    }

    /// Open file storage in `storage_dir`, or in the platform data dir when unset.
    pub fn open_storage(&self) -> StorageResult<FileStorage> {
        match &self.storage_dir {
            Some(dir) => FileStorage::new(dir.clone()),
            None => FileStorage::default_location(),
        }
    }
}
