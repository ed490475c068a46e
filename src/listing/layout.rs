use super::entry::FormattedEntry;

/// Spaces between the left and right column.
pub const GUTTER: usize = 4;

/// Two columns are only attempted on terminals at least this wide.
pub const MIN_TWO_COLUMN_WIDTH: usize = 100;

/// Geometry of a two-column layout.
///
/// The left column holds the first `rows` entries, the right column the rest,
/// so the left column is never shorter than the right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSplit {
    pub rows: usize,
    pub max_left: usize,
    pub max_right: usize,
}

impl ColumnSplit {
    /// Split `entries` positionally and measure both halves.
    pub fn measure(entries: &[FormattedEntry]) -> Self {
        let rows = entries.len().div_ceil(2);
        let (left, right) = entries.split_at(rows);
        Self {
            rows,
            max_left: max_visible_width(left),
            max_right: max_visible_width(right),
        }
    }

    /// Total visible width of the widest possible row.
    pub fn total_width(&self) -> usize {
        self.max_left + GUTTER + self.max_right
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutDecision {
    SingleColumn,
    TwoColumns(ColumnSplit),
}

fn max_visible_width(entries: &[FormattedEntry]) -> usize {
    entries
        .iter()
        .map(FormattedEntry::visible_width)
        .max()
        .unwrap_or(0)
}

/// Choose between one and two columns.
///
/// Narrow terminals always get one column. On wide terminals the entries are
/// split in half by position and two columns are used only when the widest
/// left entry, the gutter and the widest right entry fit strictly inside the
/// terminal. Long names (symlink targets, deep paths) therefore fall back to a
/// single column even on very wide terminals.
pub fn decide(entries: &[FormattedEntry], terminal_width: usize) -> LayoutDecision {
    if entries.is_empty() || terminal_width < MIN_TWO_COLUMN_WIDTH {
        log::debug!(
            "Single column: {} entries, terminal width {terminal_width}",
            entries.len()
        );
        return LayoutDecision::SingleColumn;
    }

    let split = ColumnSplit::measure(entries);
    if split.total_width() < terminal_width {
        log::debug!(
            "Two columns: {} rows, widths {}+{GUTTER}+{} < {terminal_width}",
            split.rows,
            split.max_left,
            split.max_right
        );
        LayoutDecision::TwoColumns(split)
    } else {
        log::debug!(
            "Single column: widths {}+{GUTTER}+{} do not fit {terminal_width}",
            split.max_left,
            split.max_right
        );
        LayoutDecision::SingleColumn
    }
}
