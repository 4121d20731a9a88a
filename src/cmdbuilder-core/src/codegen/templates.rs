//! Snippet templates for the two output dialects.
//!
//! Placeholders are written as `{name}` and filled by [`render`] in a single
//! pass, so substituted text is never rescanned for placeholders.

/// Registration snippet shared by both dialects.
///
/// The per-dialect annotations are empty strings in the untyped dialect.
pub const SNIPPET_TEMPLATE: &str = r#"{imports}

system.beforeEvents.startup.subscribe((init{init_annotation}) => {
{enum_registrations}

  const {command_var}{command_annotation} = {
    name: "{command_name}",
    description: "{description}",
    permissionLevel: CommandPermissionLevel.{permission_level},
    cheatsRequired: {cheats_required}{parameter_definitions}
  };

  init.customCommandRegistry.registerCommand({command_var}, {handler});
});

function {handler}(origin{origin_annotation}{parameter_signature}){return_annotation} {
{parameter_logs}
  return { status: CustomCommandStatus.Success };
}"#;

/// Placeholder used when a command has no enums.
pub const NO_ENUMS_COMMENT: &str = "  // No enums defined";

/// Placeholder used when a command has no parameters.
pub const NO_PARAMETERS_COMMENT: &str = "  // No parameters to log";

/// Fallback registration name for an unnamed command.
pub const FALLBACK_COMMAND_NAME: &str = "namespace:command";

/// Fallback description for an undescribed command.
pub const FALLBACK_DESCRIPTION: &str = "My custom command";

/// Fallback variable name for the command object.
pub const FALLBACK_COMMAND_VAR: &str = "myCmd";

/// Fallback handler function name.
pub const FALLBACK_HANDLER: &str = "commandHandler";

/// Fallback base name for an unnamed parameter.
pub const FALLBACK_PARAMETER: &str = "param";

/// Dialect-specific pieces of the snippet.
#[derive(Debug, Clone, Copy)]
pub struct DialectProfile {
    /// Import block at the top of the file.
    pub imports: &'static str,
    /// Annotation on the startup callback argument.
    pub init_annotation: &'static str,
    /// Annotation on the command object.
    pub command_annotation: &'static str,
    /// Annotation on the handler's origin argument.
    pub origin_annotation: &'static str,
    /// Annotation on the handler's return type.
    pub return_annotation: &'static str,
    /// Whether parameter signatures carry type annotations.
    pub typed_parameters: bool,
    /// Whether `enumName` precedes `name` in parameter objects.
    pub enum_name_first: bool,
}

pub const TYPESCRIPT_PROFILE: DialectProfile = DialectProfile {
    imports: r#"import {
  system,
  StartupEvent,
  CommandPermissionLevel,
  CustomCommand,
  CustomCommandParamType,
  CustomCommandOrigin,
  CustomCommandStatus,
  CustomCommandResult,
} from "@minecraft/server";"#,
    init_annotation: ": StartupEvent",
    command_annotation: ": CustomCommand",
    origin_annotation: ": CustomCommandOrigin",
    return_annotation: ": CustomCommandResult",
    typed_parameters: true,
    enum_name_first: true,
};

pub const JAVASCRIPT_PROFILE: DialectProfile = DialectProfile {
    imports: r#"import {
  system,
  CommandPermissionLevel,
  CustomCommandParamType,
  CustomCommandStatus
} from "@minecraft/server";"#,
    init_annotation: "",
    command_annotation: "",
    origin_annotation: "",
    return_annotation: "",
    typed_parameters: false,
    enum_name_first: false,
};

/// Fill `{name}` placeholders in `template` from `values`.
///
/// Braces that do not enclose a known placeholder are copied through.
pub fn render(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len() * 2);
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        let key_len = after
            .find(|c: char| !(c.is_ascii_lowercase() || c == '_'))
            .unwrap_or(after.len());
        let key = &after[..key_len];
        let closed = after[key_len..].starts_with('}');

        match values.iter().find(|(name, _)| *name == key) {
            Some((_, value)) if closed && !key.is_empty() => {
                out.push_str(value);
                rest = &after[key_len + 1..];
            }
            _ => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_known_placeholders() {
        let out = render("a {x} b {y}", &[("x", "1"), ("y", "2")]);
        assert_eq!(out, "a 1 b 2");
    }

    #[test]
    fn test_render_keeps_literal_braces() {
        let out = render("return { status: {s} };", &[("s", "ok")]);
        assert_eq!(out, "return { status: ok };");
    }

    #[test]
    fn test_render_does_not_rescan_values() {
        let out = render("{a}{b}", &[("a", "{b}"), ("b", "x")]);
        assert_eq!(out, "{b}x");
    }

    #[test]
    fn test_render_unknown_placeholder() {
        let out = render("{missing} {", &[]);
        assert_eq!(out, "{missing} {");
    }

    #[test]
    fn test_profiles_differ_in_annotations() {
        assert!(TYPESCRIPT_PROFILE.typed_parameters);
        assert!(!JAVASCRIPT_PROFILE.typed_parameters);
        assert!(TYPESCRIPT_PROFILE.imports.contains("StartupEvent"));
        assert!(!JAVASCRIPT_PROFILE.imports.contains("StartupEvent"));
    }
}
