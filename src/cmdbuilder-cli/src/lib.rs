//! Command builder CLI library module.
//!
//! # Module Organization
//!
//! - `cli/` - CLI argument parsing and command dispatch
//! - `utils/` - Shared utilities (clipboard, input files)
//! - Command modules - Individual CLI commands (`*_cmd.rs`)
//! - `config` - `config.toml` loading
//! - `styled_output` - Themed terminal output formatting

pub mod cli;
pub mod config;
pub mod styled_output;
pub mod utils;

pub mod config_cmd;
pub mod generate_cmd;
pub mod new_cmd;
pub mod saved_cmd;
pub mod theme_cmd;
