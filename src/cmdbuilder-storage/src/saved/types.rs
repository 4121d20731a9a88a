//! Saved command record.

use chrono::{TimeZone, Utc};
use serde::{Deserialize, Serialize};

use cmdbuilder_core::Command;

/// Title shown for a saved command without a name.
pub const UNTITLED: &str = "Untitled Command";

/// A command persisted in the saved list, tagged with its identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedCommand {
    /// Identifier generated at save time (Unix milliseconds as a string).
    pub id: String,
    /// The saved command.
    #[serde(flatten)]
    pub command: Command,
}

impl SavedCommand {
    /// Create a record with a specific ID.
    pub fn with_id(id: impl Into<String>, command: Command) -> Self {
        Self {
            id: id.into(),
            command,
        }
    }

    /// Display title: the command name, or a placeholder.
    pub fn title(&self) -> &str {
        if self.command.name.is_empty() {
            UNTITLED
        } else {
            &self.command.name
        }
    }

    /// Time the record was first saved, when the ID is a timestamp.
    pub fn saved_at(&self) -> Option<chrono::DateTime<Utc>> {
        let millis = self.id.parse::<i64>().ok()?;
        Utc.timestamp_millis_opt(millis).single()
    }
}
