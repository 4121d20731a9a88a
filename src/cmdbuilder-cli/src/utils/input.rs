//! Reading command descriptions from files or stdin.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};

use cmdbuilder_core::Command;

/// Input argument meaning "read from stdin".
pub const STDIN_MARKER: &str = "-";

/// Read the whole input named by `source`, or stdin for [`STDIN_MARKER`].
pub fn read_input(source: &str) -> Result<String> {
    if source == STDIN_MARKER {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read from stdin")?;
        return Ok(buf);
    }

    let path = Path::new(source);
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

/// Parse a command from JSON.
///
/// Accepts a bare command or a saved record; the `id` of a record is ignored.
pub fn parse_command(json: &str, source: &str) -> Result<Command> {
    serde_json::from_str(json)
        .with_context(|| format!("Failed to parse command JSON from {source}"))
}

/// Read and parse the command named by `source`.
pub fn read_command(source: &str) -> Result<Command> {
    let json = read_input(source)?;
    parse_command(&json, source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_read_command_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("heal.json");
        std::fs::write(
            &path,
            r#"{"name": "example:heal", "description": "Heals", "permissionLevel": "2"}"#,
        )
        .unwrap();

        let cmd = read_command(path.to_str().unwrap()).unwrap();
        assert_eq!(cmd.name, "example:heal");
        assert!(cmd.cheats_required);
        assert!(cmd.mandatory_parameters.is_empty());
    }

    #[test]
    fn test_saved_record_is_accepted() {
        let cmd = parse_command(
            r#"{"id": "1700000000000", "name": "a:b", "description": ""}"#,
            "record",
        )
        .unwrap();
        assert_eq!(cmd.name, "a:b");
    }

    #[test]
    fn test_parse_error_names_source() {
        let err = parse_command("{", "broken.json").unwrap_err();
        assert!(err.to_string().contains("broken.json"));
    }

    #[test]
    fn test_missing_file() {
        let err = read_input("/definitely/not/here.json").unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }
}
