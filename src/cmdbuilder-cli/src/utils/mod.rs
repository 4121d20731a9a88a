//! Shared utilities for the command builder CLI.
//!
//! - Clipboard operations
//! - Reading command files (or stdin)

pub mod clipboard;
pub mod input;

pub use clipboard::copy_to_clipboard;
pub use input::{STDIN_MARKER, parse_command, read_command, read_input};
