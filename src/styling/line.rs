//! Composable output lines with escape-aware width calculation
//!
//! Segments may carry their own embedded color sequences (as `ls --color`
//! produces them); widths are always measured on the visible text.

use super::format::visible_width;

/// A line composed of pre-styled text segments
#[derive(Clone, Debug, Default)]
pub struct StyledLine {
    pub segments: Vec<String>,
}

impl StyledLine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a segment verbatim, escape sequences included
    pub fn push_raw(&mut self, text: impl Into<String>) {
        self.segments.push(text.into());
    }

    /// Pad with spaces to reach a specific visible width
    pub fn pad_to(&mut self, target_width: usize) {
        let current_width = self.width();
        if current_width < target_width {
            self.push_raw(" ".repeat(target_width - current_width));
        }
    }

    /// Returns the total visual width
    pub fn width(&self) -> usize {
        self.segments.iter().map(|s| visible_width(s)).sum()
    }

    /// Renders the line with every escape sequence intact
    pub fn render(&self) -> String {
        self.segments.concat()
    }
}
