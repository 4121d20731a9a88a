//! Saved command management.
//!
//! - List saved commands
//! - Show one as generated code
//! - Add, update and remove entries

use anyhow::{Result, bail};
use clap::Parser;

use cmdbuilder_core::Dialect;
use cmdbuilder_storage::{SavedCommand, SavedCommandStore, StorageError};

use crate::cli::AppContext;
use crate::generate_cmd;
use crate::styled_output::{print_info, print_success};
use crate::utils::read_command;

/// Saved CLI command.
#[derive(Debug, Parser)]
pub struct SavedCli {
    #[command(subcommand)]
    pub subcommand: SavedSubcommand,
}

/// Saved subcommands.
#[derive(Debug, clap::Subcommand)]
pub enum SavedSubcommand {
    /// List saved commands
    #[command(visible_alias = "ls")]
    List(SavedListArgs),

    /// Show the generated code of a saved command
    #[command(visible_alias = "info")]
    Show(SavedShowArgs),

    /// Save a command from a JSON file
    Add(SavedAddArgs),

    /// Replace a saved command with a JSON file
    Update(SavedUpdateArgs),

    /// Remove a saved command
    #[command(visible_aliases = ["rm", "delete"])]
    Remove(SavedRemoveArgs),
}

/// Arguments for saved list command.
#[derive(Debug, Parser)]
pub struct SavedListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for saved show command.
#[derive(Debug, Parser)]
pub struct SavedShowArgs {
    /// Saved command ID
    pub id: String,

    /// Output dialect (defaults to `[generator] dialect`)
    #[arg(long, short = 'd', value_enum)]
    pub dialect: Option<Dialect>,

    /// Print the stored JSON instead of code
    #[arg(long)]
    pub json: bool,

    /// Also copy the generated code to the clipboard
    #[arg(long, short = 'c')]
    pub copy: bool,
}

/// Arguments for saved add command.
#[derive(Debug, Parser)]
pub struct SavedAddArgs {
    /// Command JSON file, or `-` for stdin
    pub file: String,
}

/// Arguments for saved update command.
#[derive(Debug, Parser)]
pub struct SavedUpdateArgs {
    /// Saved command ID
    pub id: String,

    /// Command JSON file, or `-` for stdin
    pub file: String,
}

/// Arguments for saved remove command.
#[derive(Debug, Parser)]
pub struct SavedRemoveArgs {
    /// Saved command ID
    pub id: String,
}

impl SavedCli {
    /// Run the saved command.
    pub fn run(self, ctx: &AppContext) -> Result<()> {
        let store = SavedCommandStore::new(ctx.store.clone());
        match self.subcommand {
            SavedSubcommand::List(args) => run_list(&store, args),
            SavedSubcommand::Show(args) => run_show(&store, ctx, args),
            SavedSubcommand::Add(args) => run_add(&store, args),
            SavedSubcommand::Update(args) => run_update(&store, args),
            SavedSubcommand::Remove(args) => run_remove(&store, args),
        }
    }
}

fn run_list(store: &SavedCommandStore, args: SavedListArgs) -> Result<()> {
    let commands = store.list()?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&commands)?);
        return Ok(());
    }

    if commands.is_empty() {
        println!("No saved commands.");
        println!("\nUse 'cmdbuilder saved add <file>' or 'cmdbuilder new --save' to save one.");
        return Ok(());
    }

    println!("Saved Commands:");
    println!("{}", "-".repeat(60));
    for saved in &commands {
        println!("  {}  {}", saved.id, saved.title());
        println!("      {}", summary(saved));
    }
    println!("\nTotal: {} command(s)", commands.len());
    Ok(())
}

/// One-line description of a saved record.
fn summary(saved: &SavedCommand) -> String {
    let cmd = &saved.command;
    let mut line = format!(
        "{} | {} param(s) | {} enum(s)",
        cmd.permission_level.label(),
        cmd.parameter_count(),
        cmd.enums.len()
    );
    if let Some(at) = saved.saved_at() {
        line.push_str(&format!(" | saved {}", at.format("%Y-%m-%d %H:%M")));
    }
    line
}

fn run_show(store: &SavedCommandStore, ctx: &AppContext, args: SavedShowArgs) -> Result<()> {
    let saved = lookup(store, &args.id)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&saved)?);
        return Ok(());
    }

    let dialect = args.dialect.unwrap_or(ctx.config.generator.dialect);
    generate_cmd::emit(&saved.command, dialect, None, args.copy)
}

fn run_add(store: &SavedCommandStore, args: SavedAddArgs) -> Result<()> {
    let command = read_command(&args.file)?;
    let saved = store.save(command)?;
    print_success(&format!("Saved '{}' as {}", saved.title(), saved.id));
    println!("{}", saved.id);
    Ok(())
}

fn run_update(store: &SavedCommandStore, args: SavedUpdateArgs) -> Result<()> {
    let command = read_command(&args.file)?;
    match store.update(&args.id, command) {
        Ok(saved) => {
            print_success(&format!("Updated '{}' ({})", saved.title(), saved.id));
            Ok(())
        }
        Err(StorageError::CommandNotFound(id)) => bail!("Saved command '{}' does not exist.", id),
        Err(e) => Err(e.into()),
    }
}

fn run_remove(store: &SavedCommandStore, args: SavedRemoveArgs) -> Result<()> {
    if !store.remove(&args.id)? {
        bail!("Saved command '{}' does not exist.", args.id);
    }
    print_info(&format!("Removed saved command {}", args.id));
    Ok(())
}

fn lookup(store: &SavedCommandStore, id: &str) -> Result<SavedCommand> {
    match store.get(id) {
        Ok(saved) => Ok(saved),
        Err(StorageError::CommandNotFound(_)) => bail!("Saved command '{}' does not exist.", id),
        Err(e) => Err(e.into()),
    }
}
