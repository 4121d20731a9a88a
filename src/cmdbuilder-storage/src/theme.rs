//! Dark mode preference.
//!
//! [`ThemeContext`] is created once at startup, handed to whatever renders
//! output, and changed only through [`ThemeContext::set_dark_mode`] or
//! [`ThemeContext::toggle`], which persist the new value.

use std::fmt;

use tracing::{debug, info};

use crate::error::Result;
use crate::store::{DARK_MODE_KEY, LocalStore};

/// Color scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Code view theme matching this scheme.
    pub fn editor_theme(self) -> &'static str {
        match self {
            Theme::Light => "default",
            Theme::Dark => "material",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where the current preference came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreferenceSource {
    /// Explicitly chosen and persisted.
    Stored,
    /// No stored choice; following the system preference.
    System,
}

/// Dark mode preference with an explicit lifecycle.
#[derive(Debug, Clone)]
pub struct ThemeContext {
    store: LocalStore,
    dark: bool,
    source: PreferenceSource,
}

impl ThemeContext {
    /// Read the stored preference, falling back to `system_prefers_dark`.
    pub fn init(store: LocalStore, system_prefers_dark: bool) -> Result<Self> {
        let (dark, source) = match store.get_json::<bool>(DARK_MODE_KEY)? {
            Some(dark) => (dark, PreferenceSource::Stored),
            None => (system_prefers_dark, PreferenceSource::System),
        };
        debug!(dark, ?source, "Theme preference initialized");
        Ok(Self {
            store,
            dark,
            source,
        })
    }

    pub fn is_dark(&self) -> bool {
        self.dark
    }

    pub fn theme(&self) -> Theme {
        if self.dark { Theme::Dark } else { Theme::Light }
    }

    pub fn editor_theme(&self) -> &'static str {
        self.theme().editor_theme()
    }

    pub fn source(&self) -> PreferenceSource {
        self.source
    }

    /// Set and persist the preference.
    pub fn set_dark_mode(&mut self, dark: bool) -> Result<()> {
        self.store.set_json(DARK_MODE_KEY, &dark)?;
        self.dark = dark;
        self.source = PreferenceSource::Stored;
        info!(theme = %self.theme(), "Theme preference saved");
        Ok(())
    }

    /// Flip and persist the preference. Returns the new value.
    pub fn toggle(&mut self) -> Result<bool> {
        self.set_dark_mode(!self.dark)?;
        Ok(self.dark)
    }

    /// Forget the stored choice and follow `system_prefers_dark` again.
    pub fn reset(&mut self, system_prefers_dark: bool) -> Result<()> {
        self.store.remove_item(DARK_MODE_KEY)?;
        self.dark = system_prefers_dark;
        self.source = PreferenceSource::System;
        info!(theme = %self.theme(), "Theme preference reset");
        Ok(())
    }
}
