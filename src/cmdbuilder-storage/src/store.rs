//! Local key-value store.
//!
//! Each key maps to one JSON document under the store directory. Values are
//! read and written whole; the last writer wins.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::error::{Result, StorageError};
use crate::paths::StoragePaths;

/// Key holding the saved command list.
pub const COMMANDS_KEY: &str = "minecraftCommands";

/// Key holding the dark mode preference.
pub const DARK_MODE_KEY: &str = "darkMode";

static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// File-backed key-value store.
#[derive(Debug, Clone)]
pub struct LocalStore {
    paths: StoragePaths,
}

impl LocalStore {
    /// Create a store with automatic path detection.
    pub fn new() -> Result<Self> {
        Ok(Self {
            paths: StoragePaths::new()?,
        })
    }

    /// Create a store with custom paths.
    pub fn with_paths(paths: StoragePaths) -> Self {
        Self { paths }
    }

    /// Get the underlying paths.
    pub fn paths(&self) -> &StoragePaths {
        &self.paths
    }

    /// Raw value stored under `key`, if any.
    pub fn get_item(&self, key: &str) -> Result<Option<String>> {
        let path = self.item_path(key)?;
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(&path)?))
    }

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// The value is written to a temporary file, synced, then renamed over
    /// the target. Each call uses its own temporary file, so concurrent
    /// writers to the same key do not clobber each other's staging file.
    pub fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let path = self.item_path(key)?;
        let parent: &Path = path
            .parent()
            .ok_or_else(|| StorageError::InvalidPath(path.clone()))?;
        fs::create_dir_all(parent)?;

        let temp = parent.join(temp_file_name(key));
        if let Err(e) = write_and_rename(&temp, &path, value) {
            let _ = fs::remove_file(&temp);
            return Err(e);
        }

        #[cfg(unix)]
        sync_dir(parent);

        debug!(key, bytes = value.len(), "Stored item");
        Ok(())
    }

    /// Remove the value under `key`. Returns whether a value existed.
    pub fn remove_item(&self, key: &str) -> Result<bool> {
        let path = self.item_path(key)?;
        if !path.exists() {
            return Ok(false);
        }
        fs::remove_file(&path)?;
        debug!(key, "Removed item");
        Ok(true)
    }

    /// Deserialize the JSON value under `key`.
    ///
    /// A value that fails to parse is logged and treated as absent.
    pub fn get_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let Some(raw) = self.get_item(key)? else {
            return Ok(None);
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                warn!(key, error = %e, "Failed to parse stored value");
                Ok(None)
            }
        }
    }

    /// Serialize `value` as JSON under `key`.
    pub fn set_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<()> {
        let raw = serde_json::to_string(value)?;
        self.set_item(key, &raw)
    }

    fn item_path(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(self.paths.item_path(key))
    }
}

/// `.{key}.json.{nanos}.{pid}.{seq}.tmp`, unique per process and call.
fn temp_file_name(key: &str) -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0);
    let seq = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
    format!(".{key}.json.{nanos}.{}.{seq}.tmp", std::process::id())
}

fn write_and_rename(temp: &Path, target: &Path, value: &str) -> Result<()> {
    {
        let mut file = OpenOptions::new()
            .create_new(true)
            .write(true)
            .open(temp)?;
        file.write_all(value.as_bytes())?;
        file.flush()?;
        file.sync_all()?;
    }
    fs::rename(temp, target)?;
    Ok(())
}

#[cfg(unix)]
fn sync_dir(dir: &Path) {
    if let Ok(handle) = fs::File::open(dir) {
        let _ = handle.sync_all();
    }
}
