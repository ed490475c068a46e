//! Adaptive formatting of long-format directory listings.
//!
//! Raw `ls -l` output flows through three stages:
//!
//! 1. [`entry`]: each line becomes a [`FormattedEntry`] (`size  date time  name`),
//!    or is dropped if it is the `total` header.
//! 2. [`layout`]: the complete list is measured against the terminal width and a
//!    [`LayoutDecision`] is made: one column, or two columns split by position.
//! 3. [`render`]: the entries are written out in that layout, padded by visible
//!    width so colored names line up.
//!
//! The whole listing has to be buffered before anything is written, because the
//! layout depends on the entry count and the widest entry in each half.
//! Ordering is never changed; directories-first grouping comes from `ls`.

pub mod entry;
pub mod layout;
pub mod render;

pub use entry::{FormattedEntry, ParsedLine, RawFields, SIZE_WIDTH, is_total_header, parse_line};
pub use layout::{ColumnSplit, GUTTER, LayoutDecision, MIN_TWO_COLUMN_WIDTH, decide};
pub use render::render;

/// Parse every line of a raw listing, dropping the `total` header.
pub fn parse_listing(raw: &str) -> Vec<FormattedEntry> {
    raw.lines()
        .filter_map(|line| match parse_line(line) {
            ParsedLine::Entry(entry) => Some(entry),
            ParsedLine::Skip => None,
        })
        .collect()
}

/// Format a raw listing for a terminal of the given width.
pub fn format_listing(raw: &str, terminal_width: usize) -> String {
    let entries = parse_listing(raw);
    let decision = decide(&entries, terminal_width);
    render(&entries, decision)
}
