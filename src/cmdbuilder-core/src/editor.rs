//! Editing state for a single command.
//!
//! The [`CommandEditor`] is the only writer of the command it owns. Every
//! edit builds a complete replacement value and swaps it in, so a rejected
//! edit leaves the current command untouched.

use thiserror::Error;
use tracing::{debug, warn};

use crate::codegen::{Dialect, generate};
use crate::model::{Command, EnumDefinition, MAX_PARAMETERS, Parameter, ParameterList, PermissionLevel};

/// Errors that can occur when editing a command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    /// Parameter name is blank.
    #[error("Parameter name cannot be empty")]
    EmptyName,

    /// Target parameter list is full.
    #[error("Cannot add more than {max} {list} parameters")]
    TooManyParameters { list: ParameterList, max: usize },

    /// Enum name or values are blank.
    #[error("Enum requires a name and at least one value")]
    EmptyEnum,

    /// Index does not refer to an existing entry.
    #[error("No {what} at index {index} (have {len})")]
    IndexOutOfRange {
        what: &'static str,
        index: usize,
        len: usize,
    },
}

/// Enum being added or edited, with values as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnumDraft {
    pub name: String,
    /// Comma separated values.
    pub values: String,
}

impl EnumDraft {
    pub fn new(name: impl Into<String>, values: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: values.into(),
        }
    }

    /// Draft pre-filled from an existing definition, for editing.
    pub fn from_definition(def: &EnumDefinition) -> Self {
        Self {
            name: def.name.clone(),
            values: def.values.join(", "),
        }
    }

    /// Split, trim and drop empty values.
    pub fn parsed_values(&self) -> Vec<String> {
        self.values
            .split(',')
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// Owner of the command being edited.
#[derive(Debug, Clone, Default)]
pub struct CommandEditor {
    command: Command,
    revision: u64,
}

impl CommandEditor {
    /// Create an editor holding a blank command.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current command.
    pub fn command(&self) -> &Command {
        &self.command
    }

    /// Take the current command, consuming the editor.
    pub fn into_command(self) -> Command {
        self.command
    }

    /// Number of accepted edits so far.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Render the current command.
    pub fn preview(&self, dialect: Dialect) -> String {
        generate(&self.command, dialect)
    }

    /// Replace the whole command, e.g. when loading a saved one.
    pub fn replace(&mut self, command: Command) {
        self.commit(command);
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        let name = name.into();
        self.update(|cmd| cmd.name = name);
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        let description = description.into();
        self.update(|cmd| cmd.description = description);
    }

    pub fn set_permission_level(&mut self, level: PermissionLevel) {
        self.update(|cmd| cmd.permission_level = level);
    }

    pub fn set_cheats_required(&mut self, required: bool) {
        self.update(|cmd| cmd.cheats_required = required);
    }

    /// Append a parameter to `list`.
    ///
    /// The enum reference is dropped from non-enum parameters and the
    /// default value from mandatory ones.
    pub fn add_parameter(&mut self, draft: Parameter, list: ParameterList) -> Result<(), EditError> {
        if draft.name.trim().is_empty() {
            return Err(EditError::EmptyName);
        }

        let len = self.command.parameters(list).len();
        if len >= MAX_PARAMETERS {
            warn!(list = %list, len, "Rejected parameter: list is full");
            return Err(EditError::TooManyParameters {
                list,
                max: MAX_PARAMETERS,
            });
        }

        let mut param = draft;
        if !param.param_type.is_enum() {
            param.enum_name = None;
        }
        if list == ParameterList::Mandatory {
            param.default_value = None;
        }

        debug!(list = %list, name = %param.name, kind = %param.param_type, "Adding parameter");
        self.update(|cmd| cmd.parameters_mut(list).push(param));
        Ok(())
    }

    /// Remove the parameter at `index` from `list`.
    pub fn remove_parameter(&mut self, index: usize, list: ParameterList) -> Result<Parameter, EditError> {
        let len = self.command.parameters(list).len();
        if index >= len {
            return Err(EditError::IndexOutOfRange {
                what: "parameter",
                index,
                len,
            });
        }

        let mut next = self.command.clone();
        let removed = next.parameters_mut(list).remove(index);
        self.commit(next);
        Ok(removed)
    }

    /// Add a new enum, or replace the one at `index`.
    pub fn upsert_enum(&mut self, draft: &EnumDraft, index: Option<usize>) -> Result<(), EditError> {
        let values = draft.parsed_values();
        if draft.name.trim().is_empty() || values.is_empty() {
            return Err(EditError::EmptyEnum);
        }

        let len = self.command.enums.len();
        if let Some(index) = index
            && index >= len
        {
            return Err(EditError::IndexOutOfRange {
                what: "enum",
                index,
                len,
            });
        }

        let definition = EnumDefinition {
            name: draft.name.clone(),
            values,
        };
        debug!(name = %definition.name, values = definition.values.len(), "Saving enum");

        self.update(|cmd| match index {
            Some(index) => cmd.enums[index] = definition,
            None => cmd.enums.push(definition),
        });
        Ok(())
    }

    /// Remove the enum at `index`.
    pub fn remove_enum(&mut self, index: usize) -> Result<EnumDefinition, EditError> {
        let len = self.command.enums.len();
        if index >= len {
            return Err(EditError::IndexOutOfRange {
                what: "enum",
                index,
                len,
            });
        }

        let mut next = self.command.clone();
        let removed = next.enums.remove(index);
        self.commit(next);
        Ok(removed)
    }

    fn update(&mut self, edit: impl FnOnce(&mut Command)) {
        let mut next = self.command.clone();
        edit(&mut next);
        self.commit(next);
    }

    fn commit(&mut self, next: Command) {
        self.command = next;
        self.revision += 1;
    }
}
