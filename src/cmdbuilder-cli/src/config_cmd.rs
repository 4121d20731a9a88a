//! Config command: show where configuration and data live.

use anyhow::Result;
use clap::Parser;

use crate::cli::AppContext;

/// Config CLI command.
#[derive(Debug, Parser)]
pub struct ConfigCli {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Config actions.
#[derive(Debug, Clone, Copy, clap::Subcommand)]
pub enum ConfigAction {
    /// Print the config file path
    Path,
    /// Print the effective configuration as TOML
    Show,
    /// Print the data directory
    DataDir,
}

impl ConfigCli {
    /// Run the config command.
    pub fn run(self, ctx: &AppContext) -> Result<()> {
        match self.action {
            ConfigAction::Path => println!("{}", ctx.config_path.display()),
            ConfigAction::Show => {
                if !ctx.config_path.exists() {
                    println!("# {} not found, showing defaults", ctx.config_path.display());
                }
                print!("{}", ctx.config.to_toml()?);
            }
            ConfigAction::DataDir => println!("{}", ctx.store.paths().data_dir.display()),
        }
        Ok(())
    }
}
