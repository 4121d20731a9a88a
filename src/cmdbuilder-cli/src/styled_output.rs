//! Styled CLI output following the theme preference.
//!
//! Status messages go to stderr so generated code on stdout stays clean.
//! Colors are used only on a terminal and are disabled by `NO_COLOR`.
//!
//! The palette follows the [`Theme`] installed with [`set_theme`] at
//! startup. Before that, the terminal background is guessed from
//! `COLORFGBG`.

use std::io::{IsTerminal, Write};
use std::sync::OnceLock;

use cmdbuilder_storage::Theme;

static ACTIVE_THEME: OnceLock<Theme> = OnceLock::new();

/// Install the theme used for styled output. Only the first call has effect.
pub fn set_theme(theme: Theme) {
    let _ = ACTIVE_THEME.set(theme);
}

fn active_theme() -> Theme {
    ACTIVE_THEME.get().copied().unwrap_or_else(|| {
        if terminal_prefers_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    })
}

/// Guess whether the terminal has a dark background.
///
/// `COLORFGBG` has the form `fg;bg`; a background of 7 or more is light.
/// Defaults to dark when unknown.
pub fn terminal_prefers_dark() -> bool {
    if let Ok(colorfgbg) = std::env::var("COLORFGBG")
        && let Some(bg_str) = colorfgbg.split(';').next_back()
        && let Ok(bg_num) = bg_str.parse::<u8>()
    {
        return bg_num < 7;
    }
    true
}

fn colors_disabled() -> bool {
    std::env::var("NO_COLOR")
        .map(|v| !v.is_empty() && v != "0" && v.to_lowercase() != "false")
        .unwrap_or(false)
}

struct Palette {
    success: &'static str,
    error: &'static str,
    info: &'static str,
}

const RESET: &str = "\x1b[0m";

const LIGHT: Palette = Palette {
    success: "\x1b[38;2;0;150;125m",
    error: "\x1b[38;2;217;61;61m",
    info: "\x1b[38;2;0;100;160m",
};

const DARK: Palette = Palette {
    success: "\x1b[38;2;0;245;212m",
    error: "\x1b[38;2;255;107;107m",
    info: "\x1b[38;2;72;202;228m",
};

/// Message type for styled output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    Success,
    Error,
    Info,
}

impl MessageType {
    fn icon(self) -> &'static str {
        match self {
            MessageType::Success => "[OK]",
            MessageType::Error => "[ERROR]",
            MessageType::Info => "[INFO]",
        }
    }

    fn color(self, theme: Theme) -> &'static str {
        let palette = match theme {
            Theme::Light => &LIGHT,
            Theme::Dark => &DARK,
        };
        match self {
            MessageType::Success => palette.success,
            MessageType::Error => palette.error,
            MessageType::Info => palette.info,
        }
    }
}

/// Format a message, with or without color codes.
pub fn format_message(msg_type: MessageType, message: &str, colored: bool) -> String {
    if colored {
        format!(
            "{}{} {}{}",
            msg_type.color(active_theme()),
            msg_type.icon(),
            message,
            RESET
        )
    } else {
        format!("{} {}", msg_type.icon(), message)
    }
}

fn print_styled(msg_type: MessageType, message: &str) {
    let colored = !colors_disabled() && std::io::stderr().is_terminal();
    let _ = writeln!(
        std::io::stderr(),
        "{}",
        format_message(msg_type, message, colored)
    );
}

/// Print a success message to stderr.
pub fn print_success(message: &str) {
    print_styled(MessageType::Success, message);
}

/// Print an error message to stderr.
pub fn print_error(message: &str) {
    print_styled(MessageType::Error, message);
}

/// Print an info message to stderr.
pub fn print_info(message: &str) {
    print_styled(MessageType::Info, message);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_format() {
        assert_eq!(
            format_message(MessageType::Success, "Code copied to clipboard!", false),
            "[OK] Code copied to clipboard!"
        );
        assert_eq!(
            format_message(MessageType::Error, "Failed to copy code", false),
            "[ERROR] Failed to copy code"
        );
    }

    #[test]
    fn test_colored_format_resets() {
        let text = format_message(MessageType::Info, "hello", true);
        assert!(text.starts_with("\x1b[38;2;"));
        assert!(text.ends_with(RESET));
        assert!(text.contains("[INFO] hello"));
    }

    #[test]
    fn test_palettes_differ() {
        assert_ne!(
            MessageType::Success.color(Theme::Dark),
            MessageType::Success.color(Theme::Light)
        );
    }
}
