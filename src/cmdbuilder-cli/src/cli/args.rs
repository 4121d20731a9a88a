//! Command-line argument structures.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::CONFIG_ENV;
use crate::config_cmd::ConfigCli;
use crate::generate_cmd::GenerateCli;
use crate::new_cmd::NewCli;
use crate::saved_cmd::SavedCli;
use crate::theme_cmd::ThemeCli;

/// Environment variable selecting the log level.
pub const LOG_LEVEL_ENV: &str = "CMDBUILDER_LOG_LEVEL";

/// Log verbosity level for CLI output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum LogLevel {
    /// Only show errors
    Error,
    /// Show warnings and errors (default)
    #[default]
    Warn,
    /// Show informational messages, warnings, and errors
    Info,
    /// Show debug messages and above
    Debug,
    /// Show all messages including trace-level details
    Trace,
}

impl LogLevel {
    /// Convert to tracing filter string.
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }

    /// Parse from string (case-insensitive).
    pub fn from_str_loose(s: &str) -> Option<LogLevel> {
        match s.trim().to_lowercase().as_str() {
            "error" => Some(LogLevel::Error),
            "warn" | "warning" => Some(LogLevel::Warn),
            "info" => Some(LogLevel::Info),
            "debug" => Some(LogLevel::Debug),
            "trace" => Some(LogLevel::Trace),
            _ => None,
        }
    }
}

/// Command builder - generate custom command registration scripts
#[derive(Debug, Parser)]
#[command(name = "cmdbuilder")]
#[command(author, version)]
#[command(about = "Generate @minecraft/server custom command registration scripts", long_about = None)]
pub struct Cli {
    /// Enable verbose output (same as --log-level debug)
    #[arg(long = "verbose", short = 'v', global = true)]
    pub verbose: bool,

    /// Enable trace output (same as --log-level trace)
    #[arg(long = "trace", global = true, conflicts_with = "verbose")]
    pub trace: bool,

    /// Log level
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevel>,

    /// Path to config.toml
    #[arg(long = "config", env = CONFIG_ENV, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Render a command JSON file as a registration script
    #[command(visible_alias = "gen")]
    Generate(GenerateCli),

    /// Describe a new command from flags
    New(NewCli),

    /// Manage saved commands
    Saved(SavedCli),

    /// Show or change the dark mode preference
    Theme(ThemeCli),

    /// Show configuration
    Config(ConfigCli),
}

impl Cli {
    /// Build the tracing filter.
    ///
    /// Precedence: `--trace`, `--verbose`, `--log-level`, then
    /// `CMDBUILDER_LOG_LEVEL`, then `RUST_LOG` (used verbatim), then the
    /// configured level, then [`LogLevel::Warn`].
    pub fn log_filter(&self, configured: Option<&str>) -> String {
        let flag_level = if self.trace {
            Some(LogLevel::Trace)
        } else if self.verbose {
            Some(LogLevel::Debug)
        } else {
            self.log_level
        };
        if let Some(level) = flag_level {
            return level.as_filter_str().to_string();
        }

        if let Some(level) = std::env::var(LOG_LEVEL_ENV)
            .ok()
            .and_then(|v| LogLevel::from_str_loose(&v))
        {
            return level.as_filter_str().to_string();
        }

        if let Ok(directives) = std::env::var("RUST_LOG")
            && !directives.trim().is_empty()
        {
            return directives;
        }

        configured
            .and_then(LogLevel::from_str_loose)
            .unwrap_or_default()
            .as_filter_str()
            .to_string()
    }
}
