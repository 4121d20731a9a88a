//! Error types for cmdbuilder-storage.

use std::path::PathBuf;
use thiserror::Error;

/// Storage error types.
#[derive(Debug, Error)]
pub enum StorageError {
    /// IO error during file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Saved command not found.
    #[error("Saved command not found: {0}")]
    CommandNotFound(String),

    /// Storage key that cannot be used as a file name.
    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    /// Path without a parent directory.
    #[error("Invalid path: {0}")]
    InvalidPath(PathBuf),

    /// Home directory not found.
    #[error("Could not determine home/data directory")]
    HomeDirNotFound,
}

/// Result type for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;
