//! Width measurement and gutter formatting
//!
//! Everything that needs to know how many terminal cells a string occupies goes
//! through [`visible_width`], which ignores CSI escape sequences.

use anstyle::{AnsiColor, Color, Style};
use once_cell::sync::Lazy;
use regex::Regex;
use unicode_width::UnicodeWidthStr;

/// Default terminal width fallback if detection fails
pub const DEFAULT_TERMINAL_WIDTH: usize = 80;

/// Control sequence introducer: `ESC [`, parameters (digits and `;`), one final letter.
static CSI_SEQUENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\x1b\[[0-9;]*[A-Za-z]").expect("CSI pattern is a valid regex")
});

/// Remove CSI escape sequences, leaving only the text a terminal would draw.
pub fn strip_escapes(s: &str) -> std::borrow::Cow<'_, str> {
    CSI_SEQUENCE.replace_all(s, "")
}

/// Visual width of a string, ignoring escape sequences.
///
/// This is a terminal cell count, not a character count: CJK and emoji take
/// two cells, combining marks none, so wide names still line up in columns.
///
/// The input is never modified; stripping happens on a temporary copy used only
/// for measurement.
pub fn visible_width(s: &str) -> usize {
    strip_escapes(s).width()
}

/// Get terminal width, defaulting to 80 if detection fails
///
/// Checks COLUMNS environment variable first (for testing and scripts),
/// then falls back to actual terminal size detection.
pub fn terminal_width() -> usize {
    if let Ok(cols) = std::env::var("COLUMNS")
        && let Ok(width) = cols.parse::<usize>()
        && width > 0
    {
        return width;
    }

    terminal_size::terminal_size()
        .map(|(terminal_size::Width(w), _)| w as usize)
        .unwrap_or(DEFAULT_TERMINAL_WIDTH)
}

/// Quote text in a gutter (a single space with background color) on each line.
///
/// Used for what the listing program writes to stderr. Lines are kept as the
/// program wrote them; ls messages are one path and one reason per line.
pub fn format_with_gutter(content: &str) -> String {
    let gutter = Style::new().bg_color(Some(Color::Ansi(AnsiColor::Black)));
    content
        .lines()
        .map(|line| format!("{gutter} {gutter:#}  {line}\n"))
        .collect()
}
