//! Command builder core.
//!
//! This crate holds the model of a custom game command, the editor that
//! owns it while it is being described, and the generator that renders it
//! as a registration script for the `@minecraft/server` API.
//!
//! # Dialects
//!
//! Two output dialects are supported:
//!
//! - [`Dialect::TypeScript`] - annotated handler signature and command object
//! - [`Dialect::JavaScript`] - the same script without annotations
//!
//! # Usage
//!
//! ```rust
//! use cmdbuilder_core::{CommandEditor, Dialect, EnumDraft, ParamType, Parameter, ParameterList};
//!
//! let mut editor = CommandEditor::new();
//! editor.set_name("example:tp");
//! editor.set_description("Teleport to a dimension");
//! editor.upsert_enum(&EnumDraft::new("example:dim", "overworld, nether"), None)?;
//! editor.add_parameter(Parameter::enumeration("dimension", "example:dim"), ParameterList::Mandatory)?;
//! editor.add_parameter(Parameter::new("target", ParamType::PlayerSelector), ParameterList::Optional)?;
//!
//! let code = editor.preview(Dialect::TypeScript);
//! assert!(code.contains("registerEnum(\"example:dim\", dimEnum)"));
//! # Ok::<(), cmdbuilder_core::EditError>(())
//! ```

pub mod codegen;
mod editor;
mod model;

pub use codegen::{Dialect, generate, unique_parameter_names};
pub use editor::{CommandEditor, EditError, EnumDraft};
pub use model::{
    Command, EnumDefinition, MAX_PARAMETERS, ParamType, Parameter, ParameterList, PermissionLevel,
};

/// Re-export common types for convenience.
pub mod prelude {
    pub use crate::{
        Command, CommandEditor, Dialect, EditError, EnumDefinition, EnumDraft, ParamType,
        Parameter, ParameterList, PermissionLevel, generate,
    };
}
