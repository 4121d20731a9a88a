//! Identifier derivation for generated code.

use std::collections::HashSet;

use super::templates::{FALLBACK_COMMAND_VAR, FALLBACK_HANDLER, FALLBACK_PARAMETER};
use crate::model::Command;

/// Identifiers derived from a command name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandIdentifiers {
    /// Variable holding the command object, e.g. `healCmd`.
    pub command_var: String,
    /// Handler function name, e.g. `healHandler`.
    pub handler: String,
}

/// Derive the command variable and handler names.
///
/// The base is the segment after the first `:` in `name`, up to the next
/// `:`, passed through [`sanitize_identifier`]. A name without a separator,
/// or with an empty segment, uses the fallback identifiers.
pub fn command_identifiers(name: &str) -> CommandIdentifiers {
    match name.split(':').nth(1).filter(|base| !base.is_empty()) {
        Some(base) => {
            let base = sanitize_identifier(base);
            CommandIdentifiers {
                command_var: format!("{base}Cmd"),
                handler: format!("{base}Handler"),
            }
        }
        None => CommandIdentifiers {
            command_var: FALLBACK_COMMAND_VAR.to_string(),
            handler: FALLBACK_HANDLER.to_string(),
        },
    }
}

/// Local identifier for an enum's value array (without the `Enum` suffix).
///
/// Takes the text after the last `:` and passes it through
/// [`sanitize_identifier`].
pub fn enum_identifier(enum_name: &str) -> String {
    let local = enum_name.rsplit(':').next().unwrap_or(enum_name);
    sanitize_identifier(local)
}

/// Make `raw` usable as a script identifier.
///
/// Every character outside `[A-Za-z0-9_]` becomes `_`, one for one, and a
/// leading digit gets a `_` prefix.
pub fn sanitize_identifier(raw: &str) -> String {
    let mut ident: String = raw
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect();
    if ident.starts_with(|c: char| c.is_ascii_digit()) {
        ident.insert(0, '_');
    }
    ident
}

/// Hands out identifiers that are unique within one generation pass.
#[derive(Debug, Default)]
pub struct UniqueNames {
    used: HashSet<String>,
}

impl UniqueNames {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim `base`, or `base` plus the smallest free suffix starting at 1.
    pub fn claim(&mut self, base: &str) -> String {
        if self.used.insert(base.to_string()) {
            return base.to_string();
        }

        let mut counter = 1u32;
        loop {
            let candidate = format!("{base}{counter}");
            if self.used.insert(candidate.clone()) {
                return candidate;
            }
            counter += 1;
        }
    }
}

/// Unique handler argument names for every parameter.
///
/// Mandatory parameters come first, then optional ones. Names are trimmed
/// and sanitized; an empty name falls back to `param`.
pub fn unique_parameter_names(command: &Command) -> Vec<String> {
    let mut names = UniqueNames::new();
    command
        .all_parameters()
        .map(|param| {
            let trimmed = param.name.trim();
            let base = if trimmed.is_empty() {
                FALLBACK_PARAMETER.to_string()
            } else {
                sanitize_identifier(trimmed)
            };
            names.claim(&base)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ParamType, Parameter};

    fn command_with(mandatory: &[&str], optional: &[&str]) -> Command {
        let mut cmd = Command::new("example:test", "");
        cmd.mandatory_parameters = mandatory
            .iter()
            .map(|n| Parameter::new(*n, ParamType::String))
            .collect();
        cmd.optional_parameters = optional
            .iter()
            .map(|n| Parameter::new(*n, ParamType::String))
            .collect();
        cmd
    }

    #[test]
    fn test_command_identifiers() {
        let ids = command_identifiers("example:heal");
        assert_eq!(ids.command_var, "healCmd");
        assert_eq!(ids.handler, "healHandler");
    }

    #[test]
    fn test_command_identifiers_uses_second_segment() {
        let ids = command_identifiers("a:b:c");
        assert_eq!(ids.command_var, "bCmd");
    }

    #[test]
    fn test_command_identifiers_fallbacks() {
        for name in ["", "heal", "example:"] {
            let ids = command_identifiers(name);
            assert_eq!(ids.command_var, "myCmd", "name = {name:?}");
            assert_eq!(ids.handler, "commandHandler", "name = {name:?}");
        }
    }

    #[test]
    fn test_command_identifiers_are_sanitized() {
        let ids = command_identifiers("ns:my-cmd");
        assert_eq!(ids.command_var, "my_cmdCmd");
        assert_eq!(ids.handler, "my_cmdHandler");

        assert_eq!(command_identifiers("ns:2fast").handler, "_2fastHandler");
    }

    #[test]
    fn test_sanitize_identifier() {
        assert_eq!(sanitize_identifier("max hp"), "max_hp");
        assert_eq!(sanitize_identifier("ok_name1"), "ok_name1");
        assert_eq!(sanitize_identifier("9lives"), "_9lives");
        assert_eq!(sanitize_identifier("é"), "_");
    }

    #[test]
    fn test_enum_identifier_sanitizes() {
        assert_eq!(enum_identifier("ns:weird name!"), "weird_name_");
        assert_eq!(enum_identifier("example:dim"), "dim");
        assert_eq!(enum_identifier("a:b:c-d"), "c_d");
        assert_eq!(enum_identifier("plain"), "plain");
    }

    #[test]
    fn test_duplicate_names_get_suffixes() {
        let cmd = command_with(&["amount", "amount"], &[]);
        assert_eq!(unique_parameter_names(&cmd), vec!["amount", "amount1"]);
    }

    #[test]
    fn test_suffix_skips_taken_names() {
        let cmd = command_with(&["x", "x1", "x"], &["x"]);
        assert_eq!(unique_parameter_names(&cmd), vec!["x", "x1", "x2", "x3"]);
    }

    #[test]
    fn test_blank_names_fall_back() {
        let cmd = command_with(&["  ", ""], &[" target "]);
        assert_eq!(unique_parameter_names(&cmd), vec!["param", "param1", "target"]);
    }

    #[test]
    fn test_parameter_names_are_sanitized() {
        let cmd = command_with(&["max hp", "max_hp"], &["3d"]);
        assert_eq!(unique_parameter_names(&cmd), vec!["max_hp", "max_hp1", "_3d"]);
    }

    #[test]
    fn test_names_are_unique_and_ordered() {
        let cmd = command_with(&["a", "b", "a", "a1"], &["b", "a"]);
        let names = unique_parameter_names(&cmd);

        let distinct: HashSet<_> = names.iter().collect();
        assert_eq!(distinct.len(), cmd.parameter_count());
        assert_eq!(names, vec!["a", "b", "a1", "a11", "b1", "a2"]);
    }
}
