//! Command dispatch and the context shared by handlers.

use std::path::PathBuf;

use anyhow::Result;
use tracing::debug;

use cmdbuilder_storage::{LocalStore, ThemeContext};

use super::args::{Cli, Commands};
use crate::config::Config;
use crate::styled_output;

/// State shared by every subcommand.
#[derive(Debug)]
pub struct AppContext {
    pub config: Config,
    pub config_path: PathBuf,
    pub store: LocalStore,
}

impl AppContext {
    /// Resolve and load the config, then open the store it points at.
    pub fn load(cli: &Cli) -> Result<Self> {
        let config_path = Config::resolve_path(cli.config.as_deref())?;
        let config = Config::load(&config_path)?;
        let store = config.open_store()?;
        Ok(Self {
            config,
            config_path,
            store,
        })
    }

    /// System dark mode preference: `[appearance] prefer_dark`, else the terminal background.
    pub fn system_prefers_dark(&self) -> bool {
        self.config
            .appearance
            .prefer_dark
            .unwrap_or_else(styled_output::terminal_prefers_dark)
    }

    /// Theme context over this store.
    pub fn theme(&self) -> Result<ThemeContext> {
        Ok(ThemeContext::init(
            self.store.clone(),
            self.system_prefers_dark(),
        )?)
    }
}

/// Dispatch a CLI command to its handler.
pub fn dispatch_command(cli: Cli, ctx: AppContext) -> Result<()> {
    let theme = ctx.theme()?;
    styled_output::set_theme(theme.theme());
    debug!(
        config = %ctx.config_path.display(),
        data_dir = %ctx.store.paths().data_dir.display(),
        theme = %theme.theme(),
        "Dispatching command"
    );

    match cli.command {
        Commands::Generate(generate_cli) => generate_cli.run(&ctx),
        Commands::New(new_cli) => new_cli.run(&ctx),
        Commands::Saved(saved_cli) => saved_cli.run(&ctx),
        Commands::Theme(theme_cli) => theme_cli.run(&ctx, theme),
        Commands::Config(config_cli) => config_cli.run(&ctx),
    }
}
