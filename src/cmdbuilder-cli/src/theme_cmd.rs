//! Theme command: show or change the dark mode preference.

use anyhow::Result;
use clap::Parser;

use cmdbuilder_storage::{PreferenceSource, ThemeContext};

use crate::cli::AppContext;
use crate::styled_output::print_success;

/// Theme CLI command.
#[derive(Debug, Parser)]
pub struct ThemeCli {
    #[command(subcommand)]
    pub action: Option<ThemeAction>,
}

/// Theme actions. Without one, the current theme is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::Subcommand)]
pub enum ThemeAction {
    /// Show the current theme
    Show,
    /// Switch to dark mode
    Dark,
    /// Switch to light mode
    Light,
    /// Flip between dark and light
    Toggle,
    /// Forget the stored choice and follow the system preference
    System,
}

impl ThemeCli {
    /// Run the theme command.
    pub fn run(self, ctx: &AppContext, mut theme: ThemeContext) -> Result<()> {
        match self.action.unwrap_or(ThemeAction::Show) {
            ThemeAction::Show => {}
            ThemeAction::Dark => theme.set_dark_mode(true)?,
            ThemeAction::Light => theme.set_dark_mode(false)?,
            ThemeAction::Toggle => {
                theme.toggle()?;
            }
            ThemeAction::System => theme.reset(ctx.system_prefers_dark())?,
        }

        if self.action.is_some_and(|a| a != ThemeAction::Show) {
            print_success("Theme preference saved");
        }
        println!("{}", describe(&theme));
        Ok(())
    }
}

fn describe(theme: &ThemeContext) -> String {
    let source = match theme.source() {
        PreferenceSource::Stored => "saved",
        PreferenceSource::System => "system",
    };
    format!(
        "{} (editor theme: {}, {})",
        theme.theme(),
        theme.editor_theme(),
        source
    )
}
