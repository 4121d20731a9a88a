//! New command: describe a command from flags.
//!
//! Everything goes through [`CommandEditor`], so the parameter cap and the
//! enum reference rules apply exactly as they would to a saved command.

use anyhow::{Context, Result, bail};
use clap::Parser;

use cmdbuilder_core::{
    Command, CommandEditor, Dialect, EnumDraft, ParamType, Parameter, ParameterList,
    PermissionLevel,
};
use cmdbuilder_storage::SavedCommandStore;

use crate::cli::AppContext;
use crate::generate_cmd;
use crate::styled_output::{print_info, print_success};

/// New CLI command.
#[derive(Debug, Parser)]
pub struct NewCli {
    /// Command name (`namespace:command`)
    #[arg(long, short = 'n')]
    pub name: Option<String>,

    /// Command description
    #[arg(long, short = 'd')]
    pub description: Option<String>,

    /// Permission level: 0-4 or Any, GameDirectors, Admin, Host, Owner
    #[arg(long, short = 'p', value_parser = parse_permission)]
    pub permission: Option<PermissionLevel>,

    /// Do not require cheats
    #[arg(long)]
    pub no_cheats: bool,

    /// Enum definition: `name=value1,value2`
    #[arg(long = "enum", short = 'e', value_name = "NAME=VALUES")]
    pub enums: Vec<String>,

    /// Mandatory parameter: `name:Type[:enumName]`
    #[arg(long = "param", short = 'm', value_name = "SPEC")]
    pub mandatory: Vec<String>,

    /// Optional parameter: `name:Type[:enumName][=default]`
    #[arg(long = "optional", short = 'O', value_name = "SPEC")]
    pub optional: Vec<String>,

    /// Add the command to the saved list
    #[arg(long)]
    pub save: bool,

    /// Print generated code in this dialect instead of JSON
    #[arg(long, value_enum, value_name = "DIALECT")]
    pub code: Option<Dialect>,
}

impl NewCli {
    /// Run the new command.
    pub fn run(self, ctx: &AppContext) -> Result<()> {
        let save = self.save;
        let code = self.code;
        let command = self.build()?;

        if save {
            let saved = SavedCommandStore::new(ctx.store.clone()).save(command.clone())?;
            print_success(&format!("Saved '{}' as {}", saved.title(), saved.id));
        }

        match code {
            Some(dialect) => generate_cmd::emit(&command, dialect, None, false),
            None if save => Ok(()),
            None => {
                println!("{}", serde_json::to_string_pretty(&command)?);
                Ok(())
            }
        }
    }

    /// Build the command described by the flags.
    pub fn build(self) -> Result<Command> {
        let mut editor = CommandEditor::new();

        if let Some(name) = self.name {
            editor.set_name(name);
        }
        if let Some(description) = self.description {
            editor.set_description(description);
        }
        if let Some(level) = self.permission {
            editor.set_permission_level(level);
        }
        editor.set_cheats_required(!self.no_cheats);

        for spec in &self.enums {
            let draft = parse_enum(spec)?;
            editor
                .upsert_enum(&draft, None)
                .with_context(|| format!("Invalid enum '{spec}'"))?;
        }

        for (specs, list) in [
            (&self.mandatory, ParameterList::Mandatory),
            (&self.optional, ParameterList::Optional),
        ] {
            for spec in specs {
                let param = parse_parameter(spec)?;
                editor
                    .add_parameter(param, list)
                    .with_context(|| format!("Cannot add {list} parameter '{spec}'"))?;
            }
        }

        let command = editor.into_command();
        for param in command.all_parameters() {
            if let Some(enum_name) = param.enum_reference()
                && command.find_enum(enum_name).is_none()
            {
                note_unknown_enum(&param.name, enum_name);
            }
        }
        Ok(command)
    }
}

fn note_unknown_enum(param: &str, enum_name: &str) {
    print_info(&format!(
        "Parameter '{param}' references enum '{enum_name}', which this command does not define"
    ));
}

fn parse_permission(s: &str) -> Result<PermissionLevel, String> {
    let trimmed = s.trim();
    if let Ok(level) = trimmed.parse::<u64>() {
        return PermissionLevel::from_level(level)
            .ok_or_else(|| format!("permission level must be 0-4, got {level}"));
    }
    PermissionLevel::ALL
        .iter()
        .copied()
        .find(|p| p.api_name().eq_ignore_ascii_case(trimmed))
        .ok_or_else(|| format!("unknown permission level: {trimmed}"))
}

/// Parse `name=value1,value2`.
fn parse_enum(spec: &str) -> Result<EnumDraft> {
    let Some((name, values)) = spec.split_once('=') else {
        bail!("Enum '{spec}' must look like name=value1,value2");
    };
    Ok(EnumDraft::new(name.trim(), values))
}

/// Parse `name:Type[:enumName][=default]`.
fn parse_parameter(spec: &str) -> Result<Parameter> {
    let (body, default) = match spec.split_once('=') {
        Some((body, default)) => (body, Some(default)),
        None => (spec, None),
    };

    let mut parts = body.splitn(3, ':');
    let name = parts.next().unwrap_or_default().trim();
    let Some(tag) = parts.next().map(str::trim).filter(|t| !t.is_empty()) else {
        bail!("Parameter '{spec}' must look like name:Type[:enumName]");
    };
    let enum_name = parts.next().map(str::trim).filter(|e| !e.is_empty());

    let param_type = ParamType::KNOWN
        .iter()
        .find(|t| t.tag().eq_ignore_ascii_case(tag))
        .cloned()
        .unwrap_or_else(|| {
            tracing::warn!(tag, "Unknown parameter type, keeping it as given");
            ParamType::from_tag(tag)
        });

    let mut param = Parameter::new(name, param_type);
    param.enum_name = enum_name.map(str::to_string);
    if let Some(default) = default {
        param = param.with_default(default);
    }
    Ok(param)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> NewCli {
        let mut full = vec!["new"];
        full.extend_from_slice(args);
        NewCli::try_parse_from(full).unwrap()
    }

    #[test]
    fn test_parse_parameter_forms() {
        let p = parse_parameter("target:PlayerSelector").unwrap();
        assert_eq!(p.name, "target");
        assert_eq!(p.param_type, ParamType::PlayerSelector);

        let p = parse_parameter("dim:enum:example:dim").unwrap();
        assert_eq!(p.param_type, ParamType::Enum);
        assert_eq!(p.enum_name.as_deref(), Some("example:dim"));

        let p = parse_parameter("amount:Integer=5").unwrap();
        assert_eq!(p.default_value(), Some("5"));

        let p = parse_parameter("x:Mystery").unwrap();
        assert_eq!(p.param_type, ParamType::Other("Mystery".to_string()));

        assert!(parse_parameter("lonely").is_err());
    }

    #[test]
    fn test_parse_permission() {
        assert_eq!(parse_permission("2"), Ok(PermissionLevel::Admin));
        assert_eq!(parse_permission("owner"), Ok(PermissionLevel::Owner));
        assert!(parse_permission("7").is_err());
        assert!(parse_permission("root").is_err());
    }

    #[test]
    fn test_build_command() {
        let command = cli(&[
            "--name",
            "example:tp",
            "--permission",
            "Admin",
            "--no-cheats",
            "--enum",
            "example:dim=overworld, nether,",
            "--param",
            "dim:Enum:example:dim",
            "--optional",
            "target:PlayerSelector:ignored",
        ])
        .build()
        .unwrap();

        assert_eq!(command.name, "example:tp");
        assert_eq!(command.permission_level, PermissionLevel::Admin);
        assert!(!command.cheats_required);
        assert_eq!(command.enums[0].values, vec!["overworld", "nether"]);
        assert_eq!(
            command.mandatory_parameters[0].enum_name.as_deref(),
            Some("example:dim")
        );
        // Non-enum parameters drop stray enum references.
        assert_eq!(command.optional_parameters[0].enum_name, None);
    }

    #[test]
    fn test_build_defaults() {
        let command = cli(&[]).build().unwrap();
        assert_eq!(command.permission_level, PermissionLevel::GameDirectors);
        assert!(command.cheats_required);
    }

    #[test]
    fn test_build_rejects_ninth_parameter() {
        let specs: Vec<String> = (0..9).map(|i| format!("p{i}:String")).collect();
        let mut args = Vec::new();
        for spec in &specs {
            args.push("--param");
            args.push(spec.as_str());
        }

        let err = cli(&args).build().unwrap_err();
        assert!(format!("{err:#}").contains("p8:String"));
    }

    #[test]
    fn test_build_rejects_empty_name() {
        assert!(cli(&["--param", ":String"]).build().is_err());
    }
}
