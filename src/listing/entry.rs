//! Parsing of `ls -l` lines into display entries.
//!
//! Input lines follow the GNU long format with `--time-style=long-iso`:
//!
//! ```text
//! drwxr-xr-x  2 alice staff 4.0K 2024-01-01 10:00 docs
//! lrwxrwxrwx  1 alice staff   11 2024-01-02 09:30 latest -> releases/v2
//! ```
//!
//! Permissions, link count, owner and group are dropped. The size is
//! right-aligned, the timestamp kept, and the name (everything after the
//! seventh field) copied verbatim so embedded colors, spaces and symlink
//! targets survive.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::styling::visible_width;

/// Display width of the right-aligned size field.
pub const SIZE_WIDTH: usize = 8;

/// `total 24`, `total 1.5K`, `total 0`: the block summary ls prints first.
static TOTAL_HEADER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^total\s+[0-9]+(?:[.,][0-9]+)?[KMGTP]?$").expect("total pattern is a valid regex")
});

/// The fixed leading fields of a long-format line, plus the name remainder.
///
/// Only size, date, time and name reach the formatted entry. The other four
/// are kept so a caller holding a `RawFields` sees the whole line, split.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawFields<'a> {
    pub permissions: &'a str,
    pub links: &'a str,
    pub owner: &'a str,
    pub group: &'a str,
    pub size: &'a str,
    pub date: &'a str,
    pub time: &'a str,
    /// Remainder of the line with leading whitespace trimmed, byte-for-byte.
    pub name: &'a str,
}

impl<'a> RawFields<'a> {
    /// Split a line into seven whitespace-delimited fields and the name.
    ///
    /// Returns `None` when the line has fewer than seven fields.
    pub fn split(line: &'a str) -> Option<Self> {
        let mut rest = line;
        let mut fields = [""; 7];

        for field in &mut fields {
            rest = rest.trim_start();
            let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
            if end == 0 {
                return None;
            }
            *field = &rest[..end];
            rest = &rest[end..];
        }

        let [permissions, links, owner, group, size, date, time] = fields;
        Some(Self {
            permissions,
            links,
            owner,
            group,
            size,
            date,
            time,
            name: rest.trim_start(),
        })
    }
}

/// One rendered listing row: `    SIZE  DATE TIME  NAME`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedEntry(String);

impl FormattedEntry {
    pub fn from_fields(fields: &RawFields<'_>) -> Self {
        Self(format!(
            "{:>width$}  {} {}  {}",
            fields.size,
            fields.date,
            fields.time,
            fields.name,
            width = SIZE_WIDTH
        ))
    }

    /// Wrap a line that could not be split into fields, unchanged.
    pub fn passthrough(line: &str) -> Self {
        Self(line.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Width on screen, escape sequences excluded.
    pub fn visible_width(&self) -> usize {
        visible_width(&self.0)
    }
}

impl fmt::Display for FormattedEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedLine {
    Entry(FormattedEntry),
    /// The `total` header; not an entry.
    Skip,
}

/// Whether `line` is the aggregate `total` header.
pub fn is_total_header(line: &str) -> bool {
    TOTAL_HEADER.is_match(line.trim())
}

/// Convert one raw listing line.
///
/// Lines with fewer than seven fields are passed through unchanged; this is a
/// best-effort fallback, not an error.
pub fn parse_line(raw: &str) -> ParsedLine {
    if is_total_header(raw) {
        log::debug!("Skipping header line: {raw}");
        return ParsedLine::Skip;
    }

    match RawFields::split(raw) {
        Some(fields) => ParsedLine::Entry(FormattedEntry::from_fields(&fields)),
        None => {
            log::debug!("Passing through line with too few fields: {raw:?}");
            ParsedLine::Entry(FormattedEntry::passthrough(raw))
        }
    }
}
