use super::entry::FormattedEntry;
use super::layout::{ColumnSplit, GUTTER, LayoutDecision};
use crate::styling::StyledLine;

/// Render entries as a block of newline-terminated rows.
///
/// Entries are emitted verbatim, escape sequences included; nothing is
/// wrapped or truncated. An empty slice renders as an empty string.
pub fn render(entries: &[FormattedEntry], decision: LayoutDecision) -> String {
    if entries.is_empty() {
        return String::new();
    }

    match decision {
        LayoutDecision::SingleColumn => render_single(entries),
        LayoutDecision::TwoColumns(split) => render_two(entries, split),
    }
}

fn render_single(entries: &[FormattedEntry]) -> String {
    let mut out = String::new();
    for entry in entries {
        out.push_str(entry.as_str());
        out.push('\n');
    }
    out
}

/// Left entry, then enough spaces that every right entry starts at
/// `max_left + GUTTER`, then the right entry (if the row has one).
fn render_two(entries: &[FormattedEntry], split: ColumnSplit) -> String {
    let mut out = String::new();
    for (i, left) in entries.iter().take(split.rows).enumerate() {
        let mut line = StyledLine::new();
        line.push_raw(left.as_str());
        line.pad_to(split.max_left + GUTTER);
        if let Some(right) = entries.get(i + split.rows) {
            line.push_raw(right.as_str());
        }
        out.push_str(&line.render());
        out.push('\n');
    }
    out
}
