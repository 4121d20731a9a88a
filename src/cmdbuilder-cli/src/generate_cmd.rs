//! Generate command: render a command JSON file as a registration script.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use cmdbuilder_core::{Command, Dialect, generate};

use crate::cli::AppContext;
use crate::styled_output::{print_error, print_success};
use crate::utils::{copy_to_clipboard, read_command};

/// Generate CLI command.
#[derive(Debug, Parser)]
pub struct GenerateCli {
    /// Command JSON file, or `-` for stdin
    pub input: String,

    /// Output dialect (defaults to `[generator] dialect`)
    #[arg(long, short = 'd', value_enum)]
    pub dialect: Option<Dialect>,

    /// Also copy the generated code to the clipboard
    #[arg(long, short = 'c')]
    pub copy: bool,

    /// Write the code to a file instead of stdout
    #[arg(long, short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,
}

impl GenerateCli {
    /// Run the generate command.
    pub fn run(self, ctx: &AppContext) -> Result<()> {
        let command = read_command(&self.input)?;
        let dialect = self.dialect.unwrap_or(ctx.config.generator.dialect);
        emit(&command, dialect, self.output.as_deref(), self.copy)
    }
}

/// Render `command` and deliver it to a file or stdout, and optionally the clipboard.
///
/// A clipboard failure is reported but does not fail the command.
pub(crate) fn emit(
    command: &Command,
    dialect: Dialect,
    output: Option<&Path>,
    copy: bool,
) -> Result<()> {
    let code = generate(command, dialect);

    match output {
        Some(path) => {
            std::fs::write(path, format!("{code}\n"))
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!(path = %path.display(), %dialect, "Wrote generated code");
            print_success(&format!("Wrote {}", path.display()));
        }
        None => println!("{code}"),
    }

    if copy {
        match copy_to_clipboard(&code) {
            Ok(()) => print_success("Code copied to clipboard!"),
            Err(e) => {
                tracing::warn!(error = %e, "Clipboard copy failed");
                print_error(&format!("Failed to copy code: {e:#}"));
            }
        }
    }

    Ok(())
}
