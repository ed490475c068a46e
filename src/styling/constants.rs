use anstyle::{AnsiColor, Color, Style};

/// Error messages
pub const ERROR_EMOJI: &str = "❌";

/// Problems that did not stop the command
pub const WARNING_EMOJI: &str = "🟡";

/// Hints and suggestions
pub const HINT_EMOJI: &str = "💡";

/// Dimmed text (log prefixes, secondary details)
pub const DIM: Style = Style::new().dimmed();

/// Emphasis for paths and program names inside messages
pub const BOLD: Style = Style::new().bold();

/// Warnings and errors in log output
pub const ERROR: Style = Style::new().fg_color(Some(Color::Ansi(AnsiColor::Red)));
