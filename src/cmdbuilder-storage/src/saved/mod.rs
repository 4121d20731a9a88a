//! Saved command list.
//!
//! The list lives under a single store key and is rewritten in full on
//! every change.
//!
//! - [`types`] - the [`SavedCommand`] record
//! - [`storage`] - list operations (save, update, remove, lookup)

mod storage;
#[cfg(test)]
mod tests;
mod types;

pub use storage::SavedCommandStore;
pub use types::{SavedCommand, UNTITLED};
