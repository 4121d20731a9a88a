//! User configuration (`config.toml`).
//!
//! ```toml
//! [generator]
//! dialect = "javascript"
//!
//! [logging]
//! level = "debug"
//!
//! [appearance]
//! prefer_dark = true
//!
//! [storage]
//! data_dir = "/path/to/data"
//! ```
//!
//! A missing file means defaults. `CMDBUILDER_CONFIG` (or `--config`)
//! points at a different file.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use cmdbuilder_core::Dialect;
use cmdbuilder_storage::paths::DATA_DIR_ENV;
use cmdbuilder_storage::{LocalStore, StoragePaths};

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "CMDBUILDER_CONFIG";

/// Parsed configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub generator: GeneratorConfig,
    pub logging: LoggingConfig,
    pub appearance: AppearanceConfig,
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Dialect used when `--dialect` is not given.
    pub dialect: Dialect,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level used when no flag or environment variable sets one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppearanceConfig {
    /// Stands in for the system dark mode preference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefer_dark: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Data directory used when `CMDBUILDER_DATA_DIR` is not set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
}

impl Config {
    /// Resolve the config file path: explicit path first, then the platform default.
    pub fn resolve_path(explicit: Option<&Path>) -> Result<PathBuf> {
        match explicit {
            Some(path) => Ok(path.to_path_buf()),
            None => cmdbuilder_storage::config_file().context("Failed to locate config directory"),
        }
    }

    /// Load the config at `path`. A missing file yields defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Render as TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }

    /// Open the local store, honoring the data directory override order:
    /// `CMDBUILDER_DATA_DIR`, then `[storage] data_dir`, then the platform default.
    pub fn open_store(&self) -> Result<LocalStore> {
        let env_set = std::env::var(DATA_DIR_ENV).is_ok_and(|v| !v.is_empty());
        if !env_set && let Some(dir) = &self.storage.data_dir {
            return Ok(LocalStore::with_paths(StoragePaths::from_root(dir.clone())));
        }
        LocalStore::new().context("Failed to locate data directory")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_is_default() {
        let dir = tempdir().unwrap();
        let config = Config::load(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.generator.dialect, Dialect::TypeScript);
    }

    #[test]
    fn test_parse_all_sections() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[generator]
dialect = "javascript"

[logging]
level = "debug"

[appearance]
prefer_dark = true

[storage]
data_dir = "/tmp/cmdbuilder"
"#,
        )
        .unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.generator.dialect, Dialect::JavaScript);
        assert_eq!(config.logging.level.as_deref(), Some("debug"));
        assert_eq!(config.appearance.prefer_dark, Some(true));
        assert_eq!(
            config.storage.data_dir,
            Some(PathBuf::from("/tmp/cmdbuilder"))
        );
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[appearance]\nprefer_dark = false\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.generator.dialect, Dialect::TypeScript);
        assert_eq!(config.appearance.prefer_dark, Some(false));
    }

    #[test]
    fn test_invalid_file_reports_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[generator]\ndialect = \"cobol\"\n").unwrap();

        let err = Config::load(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_toml_output_round_trips() {
        let mut config = Config::default();
        config.generator.dialect = Dialect::JavaScript;
        config.logging.level = Some("warn".to_string());

        let text = config.to_toml().unwrap();
        let parsed: Config = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    #[serial]
    fn test_store_prefers_env_over_config() {
        let env_dir = tempdir().unwrap();
        let config_dir = tempdir().unwrap();
        let mut config = Config::default();
        config.storage.data_dir = Some(config_dir.path().to_path_buf());

        // SAFETY: serialized with the other tests touching the environment
        unsafe { std::env::remove_var(DATA_DIR_ENV) };
        let store = config.open_store().unwrap();
        assert_eq!(store.paths().data_dir, config_dir.path());

        unsafe { std::env::set_var(DATA_DIR_ENV, env_dir.path()) };
        let store = config.open_store().unwrap();
        unsafe { std::env::remove_var(DATA_DIR_ENV) };
        assert_eq!(store.paths().data_dir, env_dir.path());
    }
}
