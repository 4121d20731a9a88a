//! Code generation for custom command registration snippets.
//!
//! [`generate`] turns a [`Command`] into a complete `@minecraft/server`
//! script that registers the command's enums and the command itself, and
//! declares a handler whose arguments mirror the command's parameters.
//!
//! ```rust
//! use cmdbuilder_core::{Command, Dialect, ParamType, Parameter, generate};
//!
//! let mut cmd = Command::new("example:heal", "Heals a player");
//! cmd.mandatory_parameters.push(Parameter::new("target", ParamType::PlayerSelector));
//!
//! let code = generate(&cmd, Dialect::TypeScript);
//! assert!(code.contains("function healHandler(origin: CustomCommandOrigin, target: Entity[])"));
//! ```
//!
//! Generation is a pure function of its inputs and never fails. Missing
//! names and descriptions fall back to fixed placeholder literals.

mod emit;
mod naming;
pub mod templates;
mod types;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::model::Command;
use templates::{
    DialectProfile, FALLBACK_COMMAND_NAME, FALLBACK_DESCRIPTION, JAVASCRIPT_PROFILE,
    SNIPPET_TEMPLATE, TYPESCRIPT_PROFILE,
};

pub use emit::{escape_double_quoted, escape_single_quoted};
pub use naming::{
    CommandIdentifiers, UniqueNames, command_identifiers, enum_identifier, sanitize_identifier,
    unique_parameter_names,
};
pub use types::typescript_type;

/// Output dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// Typed output with explicit annotations.
    #[default]
    #[cfg_attr(feature = "cli", value(name = "typescript", alias = "ts"))]
    TypeScript,
    /// Untyped output.
    #[cfg_attr(feature = "cli", value(name = "javascript", alias = "js"))]
    JavaScript,
}

impl Dialect {
    pub fn as_str(self) -> &'static str {
        match self {
            Dialect::TypeScript => "typescript",
            Dialect::JavaScript => "javascript",
        }
    }

    pub fn profile(self) -> &'static DialectProfile {
        match self {
            Dialect::TypeScript => &TYPESCRIPT_PROFILE,
            Dialect::JavaScript => &JAVASCRIPT_PROFILE,
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dialect {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "typescript" | "ts" => Ok(Dialect::TypeScript),
            "javascript" | "js" => Ok(Dialect::JavaScript),
            other => Err(format!("unknown dialect: {other}")),
        }
    }
}

/// Render the registration snippet for `command` in `dialect`.
pub fn generate(command: &Command, dialect: Dialect) -> String {
    let profile = dialect.profile();
    let ids = command_identifiers(&command.name);
    let names = unique_parameter_names(command);

    let command_name = if command.name.is_empty() {
        FALLBACK_COMMAND_NAME.to_string()
    } else {
        escape_double_quoted(&command.name)
    };
    let description = if command.description.is_empty() {
        FALLBACK_DESCRIPTION.to_string()
    } else {
        escape_double_quoted(&command.description)
    };

    let enum_registrations = emit::enum_registrations(&command.enums);
    let parameter_definitions = emit::parameter_definitions(
        &command.mandatory_parameters,
        &command.optional_parameters,
        profile,
    );
    let parameter_signature = emit::parameter_signature(command.all_parameters(), &names, profile);
    let parameter_logs = emit::parameter_logs(command.all_parameters(), &names);
    let cheats_required = command.cheats_required.to_string();

    trace!(
        dialect = %dialect,
        command = %command.name,
        parameters = names.len(),
        enums = command.enums.len(),
        "Rendering command snippet"
    );

    templates::render(
        SNIPPET_TEMPLATE,
        &[
            ("imports", profile.imports),
            ("init_annotation", profile.init_annotation),
            ("enum_registrations", &enum_registrations),
            ("command_var", &ids.command_var),
            ("command_annotation", profile.command_annotation),
            ("command_name", &command_name),
            ("description", &description),
            ("permission_level", command.permission_level.api_name()),
            ("cheats_required", &cheats_required),
            ("parameter_definitions", &parameter_definitions),
            ("handler", &ids.handler),
            ("origin_annotation", profile.origin_annotation),
            ("parameter_signature", &parameter_signature),
            ("return_annotation", profile.return_annotation),
            ("parameter_logs", &parameter_logs),
        ],
    )
}
