//! Emission of the variable parts of a snippet.

use super::naming::{UniqueNames, enum_identifier};
use super::templates::{DialectProfile, NO_ENUMS_COMMENT, NO_PARAMETERS_COMMENT};
use super::types::typescript_type;
use crate::model::{EnumDefinition, Parameter, ParameterList};

const FIELD_INDENT: &str = "        ";

/// Escape `value` for use inside a double-quoted literal.
pub fn escape_double_quoted(value: &str) -> String {
    escape(value, '"')
}

/// Escape `value` for use inside a single-quoted literal.
pub fn escape_single_quoted(value: &str) -> String {
    escape(value, '\'')
}

fn escape(value: &str, quote: char) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out
}

/// `registerEnum` calls for every enum, in declaration order.
///
/// Enums whose names sanitize to the same identifier get numbered locals.
pub fn enum_registrations(enums: &[EnumDefinition]) -> String {
    if enums.is_empty() {
        return NO_ENUMS_COMMENT.to_string();
    }

    let mut locals = UniqueNames::new();
    enums
        .iter()
        .map(|def| {
            let local = format!("{}Enum", locals.claim(&enum_identifier(&def.name)));
            let values = serde_json::Value::from(def.values.clone()).to_string();
            format!(
                "  const {local} = {values};\n  init.customCommandRegistry.registerEnum(\"{}\", {local});",
                escape_double_quoted(&def.name)
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// The `mandatoryParameters` / `optionalParameters` fields of the command
/// object, each preceded by `,\n`. Empty lists are left out.
pub fn parameter_definitions(
    mandatory: &[Parameter],
    optional: &[Parameter],
    profile: &DialectProfile,
) -> String {
    let mut out = String::new();

    for (list, params) in [
        (ParameterList::Mandatory, mandatory),
        (ParameterList::Optional, optional),
    ] {
        if params.is_empty() {
            continue;
        }

        let entries = params
            .iter()
            .map(|param| parameter_entry(param, list, profile))
            .collect::<Vec<_>>()
            .join(",\n      ");

        out.push_str(&format!(
            ",\n    {}: [\n      {entries}\n    ]",
            list_field(list)
        ));
    }

    out
}

fn list_field(list: ParameterList) -> &'static str {
    match list {
        ParameterList::Mandatory => "mandatoryParameters",
        ParameterList::Optional => "optionalParameters",
    }
}

/// One parameter object literal. Absent fields are omitted entirely.
fn parameter_entry(param: &Parameter, list: ParameterList, profile: &DialectProfile) -> String {
    let enum_name = param.enum_reference().map(escape_double_quoted);
    let mut entry = format!(
        "{{\n{FIELD_INDENT}type: CustomCommandParamType.{},",
        param.param_type.tag()
    );

    if profile.enum_name_first
        && let Some(enum_name) = &enum_name
    {
        entry.push_str(&format!("\n{FIELD_INDENT}enumName: \"{enum_name}\","));
    }

    entry.push_str(&format!(
        "\n{FIELD_INDENT}name: \"{}\"",
        escape_double_quoted(&param.name)
    ));

    if !profile.enum_name_first
        && let Some(enum_name) = &enum_name
    {
        entry.push_str(&format!(",\n{FIELD_INDENT}enumName: \"{enum_name}\""));
    }

    if let Some(description) = param.description() {
        entry.push_str(&format!(
            ",\n{FIELD_INDENT}description: \"{}\"",
            escape_double_quoted(description)
        ));
    }

    if list == ParameterList::Optional
        && let Some(default) = param.default_value()
    {
        entry.push_str(&format!(
            ",\n{FIELD_INDENT}defaultValue: \"{}\"",
            escape_double_quoted(default)
        ));
    }

    entry.push_str("\n      }");
    entry
}

/// Handler arguments after `origin`, each preceded by `, `.
pub fn parameter_signature<'a>(
    params: impl Iterator<Item = &'a Parameter>,
    names: &[String],
    profile: &DialectProfile,
) -> String {
    params
        .zip(names)
        .map(|(param, name)| {
            if profile.typed_parameters {
                format!(", {name}: {}", typescript_type(&param.param_type))
            } else {
                format!(", {name}")
            }
        })
        .collect()
}

/// One `console.log` line per parameter.
pub fn parameter_logs<'a>(params: impl Iterator<Item = &'a Parameter>, names: &[String]) -> String {
    let lines: Vec<String> = params
        .zip(names)
        .map(|(param, name)| {
            format!(
                "  console.log('Parameter {}:', {name});",
                escape_single_quoted(&param.name)
            )
        })
        .collect();

    if lines.is_empty() {
        NO_PARAMETERS_COMMENT.to_string()
    } else {
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codegen::templates::{JAVASCRIPT_PROFILE, TYPESCRIPT_PROFILE};
    use crate::model::ParamType;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_escape() {
        assert_eq!(escape_double_quoted(r#"say "hi"\"#), r#"say \"hi\"\\"#);
        assert_eq!(escape_double_quoted("it's"), "it's");
        assert_eq!(escape_single_quoted("it's"), r"it\'s");
        assert_eq!(escape_double_quoted("a\nb"), r"a\nb");
    }

    #[test]
    fn test_enum_registrations_empty() {
        assert_eq!(enum_registrations(&[]), "  // No enums defined");
    }

    #[test]
    fn test_enum_registrations() {
        let enums = vec![
            EnumDefinition::new("example:dim", ["overworld", "nether"]),
            EnumDefinition::new("ns:weird name!", ["a", "a"]),
        ];

        let expected = concat!(
            "  const dimEnum = [\"overworld\",\"nether\"];\n",
            "  init.customCommandRegistry.registerEnum(\"example:dim\", dimEnum);\n",
            "\n",
            "  const weird_name_Enum = [\"a\",\"a\"];\n",
            "  init.customCommandRegistry.registerEnum(\"ns:weird name!\", weird_name_Enum);",
        );
        assert_eq!(enum_registrations(&enums), expected);
    }

    #[test]
    fn test_colliding_enum_identifiers_are_numbered() {
        let enums = vec![
            EnumDefinition::new("a:x y", ["1"]),
            EnumDefinition::new("b:x_y", ["2"]),
        ];

        let expected = concat!(
            "  const x_yEnum = [\"1\"];\n",
            "  init.customCommandRegistry.registerEnum(\"a:x y\", x_yEnum);\n",
            "\n",
            "  const x_y1Enum = [\"2\"];\n",
            "  init.customCommandRegistry.registerEnum(\"b:x_y\", x_y1Enum);",
        );
        assert_eq!(enum_registrations(&enums), expected);
    }

    #[test]
    fn test_parameter_definitions_skip_empty_lists() {
        assert_eq!(parameter_definitions(&[], &[], &TYPESCRIPT_PROFILE), "");
    }

    #[test]
    fn test_optional_entry_fields() {
        let optional = vec![
            Parameter::new("amount", ParamType::Integer)
                .with_description("How much")
                .with_default("5"),
        ];

        let expected = concat!(
            ",\n    optionalParameters: [\n",
            "      {\n",
            "        type: CustomCommandParamType.Integer,\n",
            "        name: \"amount\",\n",
            "        description: \"How much\",\n",
            "        defaultValue: \"5\"\n",
            "      }\n",
            "    ]",
        );
        assert_eq!(
            parameter_definitions(&[], &optional, &JAVASCRIPT_PROFILE),
            expected
        );
    }

    #[test]
    fn test_mandatory_entry_ignores_default() {
        let mandatory = vec![Parameter::new("amount", ParamType::Integer).with_default("5")];
        let out = parameter_definitions(&mandatory, &[], &TYPESCRIPT_PROFILE);

        assert!(out.contains("mandatoryParameters"));
        assert!(!out.contains("defaultValue"));
        assert!(!out.contains("description"));
    }

    #[test]
    fn test_enum_name_position_per_dialect() {
        let params = vec![Parameter::enumeration("dim", "example:dim")];

        let typed = parameter_definitions(&params, &[], &TYPESCRIPT_PROFILE);
        assert!(typed.contains(concat!(
            "type: CustomCommandParamType.Enum,\n",
            "        enumName: \"example:dim\",\n",
            "        name: \"dim\"\n"
        )));

        let untyped = parameter_definitions(&params, &[], &JAVASCRIPT_PROFILE);
        assert!(untyped.contains(concat!(
            "type: CustomCommandParamType.Enum,\n",
            "        name: \"dim\",\n",
            "        enumName: \"example:dim\"\n"
        )));
    }

    #[test]
    fn test_signature_and_logs() {
        let params = vec![
            Parameter::new("target", ParamType::PlayerSelector),
            Parameter::new("target", ParamType::Location),
        ];
        let names = vec!["target".to_string(), "target1".to_string()];

        assert_eq!(
            parameter_signature(params.iter(), &names, &TYPESCRIPT_PROFILE),
            ", target: Entity[], target1: Vector3"
        );
        assert_eq!(
            parameter_signature(params.iter(), &names, &JAVASCRIPT_PROFILE),
            ", target, target1"
        );
        assert_eq!(
            parameter_logs(params.iter(), &names),
            "  console.log('Parameter target:', target);\n  console.log('Parameter target:', target1);"
        );
    }

    #[test]
    fn test_logs_empty() {
        assert_eq!(parameter_logs(std::iter::empty(), &[]), "  // No parameters to log");
    }
}
