//! Command builder storage - local, OS-aware persistence.
//!
//! Stores data under the platform data directory:
//!
//! - **Windows**: `%APPDATA%\CommandBuilder\`
//! - **macOS**: `~/Library/Application Support/CommandBuilder/`
//! - **Linux**: `~/.local/share/CommandBuilder/`
//!
//! # Features
//!
//! - A small key-value store with one JSON document per key
//! - The saved command list (`minecraftCommands`)
//! - The dark mode preference (`darkMode`) behind an explicit context object
//!
//! # Usage
//!
//! ```rust,no_run
//! use cmdbuilder_core::Command;
//! use cmdbuilder_storage::{LocalStore, SavedCommandStore, ThemeContext};
//!
//! fn main() -> cmdbuilder_storage::Result<()> {
//!     let store = LocalStore::new()?;
//!
//!     let saved = SavedCommandStore::new(store.clone());
//!     let record = saved.save(Command::new("example:heal", "Heals a player"))?;
//!     println!("Saved as {}", record.id);
//!
//!     let mut theme = ThemeContext::init(store, false)?;
//!     theme.toggle()?;
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod paths;
pub mod saved;
pub mod store;
pub mod theme;

// Re-export main types at crate root
pub use error::{Result, StorageError};
pub use paths::{StoragePaths, config_dir, config_file, data_dir};
pub use saved::{SavedCommand, SavedCommandStore};
pub use store::{COMMANDS_KEY, DARK_MODE_KEY, LocalStore};
pub use theme::{PreferenceSource, Theme, ThemeContext};
