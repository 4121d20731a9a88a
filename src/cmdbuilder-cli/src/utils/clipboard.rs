//! Clipboard operations for the command builder CLI.

use anyhow::{Context, Result};

/// Copy text to the system clipboard.
///
/// Fails when no clipboard is available (for example a headless session).
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = arboard::Clipboard::new().context("Clipboard unavailable")?;
    clipboard
        .set_text(text.to_owned())
        .context("Failed to write to clipboard")?;
    tracing::debug!("Copied {} chars to clipboard", text.len());
    Ok(())
}
