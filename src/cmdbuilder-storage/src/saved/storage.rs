//! Saved command list operations.

use chrono::Utc;
use tracing::{debug, info};

use cmdbuilder_core::Command;

use super::types::SavedCommand;
use crate::error::{Result, StorageError};
use crate::store::{COMMANDS_KEY, LocalStore};

/// Saved command list backed by a [`LocalStore`].
#[derive(Debug, Clone)]
pub struct SavedCommandStore {
    store: LocalStore,
}

impl SavedCommandStore {
    pub fn new(store: LocalStore) -> Self {
        Self { store }
    }

    /// Get the underlying store.
    pub fn store(&self) -> &LocalStore {
        &self.store
    }

    /// Load the full list, in save order.
    ///
    /// A missing or unreadable list yields an empty one.
    pub fn load(&self) -> Result<Vec<SavedCommand>> {
        let commands: Vec<SavedCommand> = self.store.get_json(COMMANDS_KEY)?.unwrap_or_default();
        debug!(count = commands.len(), "Loaded saved commands");
        Ok(commands)
    }

    /// Alias for [`load`](Self::load).
    pub fn list(&self) -> Result<Vec<SavedCommand>> {
        self.load()
    }

    /// Get a saved command by ID.
    pub fn get(&self, id: &str) -> Result<SavedCommand> {
        self.list()?
            .into_iter()
            .find(|c| c.id == id)
            .ok_or_else(|| StorageError::CommandNotFound(id.to_string()))
    }

    /// Append `command` to the list under a fresh ID.
    pub fn save(&self, command: Command) -> Result<SavedCommand> {
        let mut commands = self.load()?;
        let id = next_id(&commands, Utc::now().timestamp_millis());
        let saved = SavedCommand::with_id(id, command);

        commands.push(saved.clone());
        self.store.set_json(COMMANDS_KEY, &commands)?;

        info!(id = %saved.id, name = %saved.command.name, "Command saved");
        Ok(saved)
    }

    /// Replace the command stored under `id`, keeping its position.
    pub fn update(&self, id: &str, command: Command) -> Result<SavedCommand> {
        let mut commands = self.load()?;
        let slot = commands
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| StorageError::CommandNotFound(id.to_string()))?;
        slot.command = command;
        let updated = slot.clone();

        self.store.set_json(COMMANDS_KEY, &commands)?;

        info!(id = %id, "Command updated");
        Ok(updated)
    }

    /// Remove the command stored under `id`. Returns whether it existed.
    pub fn remove(&self, id: &str) -> Result<bool> {
        let mut commands = self.load()?;
        let before = commands.len();
        commands.retain(|c| c.id != id);

        if commands.len() == before {
            debug!(id = %id, "No saved command to remove");
            return Ok(false);
        }

        self.store.set_json(COMMANDS_KEY, &commands)?;
        info!(id = %id, "Command removed");
        Ok(true)
    }
}

/// Millisecond timestamp ID, bumped past any ID already in use.
pub(crate) fn next_id(existing: &[SavedCommand], now_millis: i64) -> String {
    let mut candidate = now_millis;
    while existing.iter().any(|c| c.id == candidate.to_string()) {
        candidate += 1;
    }
    candidate.to_string()
}
