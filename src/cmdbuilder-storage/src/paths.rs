//! OS-aware path detection for command builder storage.
//!
//! - **Windows**: `%APPDATA%\CommandBuilder\`
//! - **macOS**: `~/Library/Application Support/CommandBuilder/`
//! - **Linux**: `~/.local/share/CommandBuilder/` (data), `~/.config/CommandBuilder/` (config)
//!
//! `CMDBUILDER_DATA_DIR` and `CMDBUILDER_CONFIG_DIR` override the detected
//! locations.

use std::path::PathBuf;
use tracing::debug;

use crate::error::{Result, StorageError};

/// Application name used for storage directories.
pub const APP_NAME: &str = "CommandBuilder";

/// Subdirectory holding one JSON document per storage key.
pub const STORE_DIR: &str = "store";

/// Configuration file name.
pub const CONFIG_FILE: &str = "config.toml";

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "CMDBUILDER_DATA_DIR";

/// Environment variable overriding the config directory.
pub const CONFIG_DIR_ENV: &str = "CMDBUILDER_CONFIG_DIR";

/// Storage paths container.
#[derive(Debug, Clone)]
pub struct StoragePaths {
    /// Root data directory (platform-specific).
    pub data_dir: PathBuf,
    /// Key-value documents.
    pub store_dir: PathBuf,
}

impl StoragePaths {
    /// Create StoragePaths with automatic OS detection.
    pub fn new() -> Result<Self> {
        let data_dir = data_dir()?;
        Ok(Self::from_root(data_dir))
    }

    /// Create StoragePaths from a custom root directory.
    pub fn from_root(data_dir: PathBuf) -> Self {
        Self {
            store_dir: data_dir.join(STORE_DIR),
            data_dir,
        }
    }

    /// Path of the document stored under `key`.
    pub fn item_path(&self, key: &str) -> PathBuf {
        self.store_dir.join(format!("{key}.json"))
    }
}

/// Get the data directory based on the current OS.
pub fn data_dir() -> Result<PathBuf> {
    if let Some(path) = env_override(DATA_DIR_ENV) {
        return Ok(path);
    }

    let base = dirs::data_dir().ok_or(StorageError::HomeDirNotFound)?;
    Ok(base.join(APP_NAME))
}

/// Get the config directory based on the current OS.
pub fn config_dir() -> Result<PathBuf> {
    if let Some(path) = env_override(CONFIG_DIR_ENV) {
        return Ok(path);
    }

    let base = dirs::config_dir().ok_or(StorageError::HomeDirNotFound)?;
    Ok(base.join(APP_NAME))
}

/// Default location of the configuration file.
pub fn config_file() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE))
}

fn env_override(var: &str) -> Option<PathBuf> {
    match std::env::var(var) {
        Ok(val) if !val.is_empty() => {
            let path = PathBuf::from(val);
            debug!(var, path = %path.display(), "Using directory override");
            Some(path)
        }
        _ => None,
    }
}
