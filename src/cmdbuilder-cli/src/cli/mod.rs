//! CLI argument parsing and command dispatch.
//!
//! # Module Structure
//!
//! - `args` - Command-line argument structures
//! - `handlers` - Shared context and subcommand dispatch

pub mod args;
pub mod handlers;

// Re-export main types
pub use args::{Cli, Commands, LOG_LEVEL_ENV, LogLevel};
pub use handlers::{AppContext, dispatch_command};
