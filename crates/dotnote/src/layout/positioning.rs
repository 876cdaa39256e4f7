//! Column bookkeeping for the layout resolver.
//!
//! The grid is filled strictly left to right, so positioning reduces to a
//! cursor that hands out columns and reserves gaps.

use dotnote_core::geometry::ColumnRange;

/// The next free column on the grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColumnCursor {
    next: usize,
}

impl ColumnCursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// The column the next dot would occupy.
    pub fn position(&self) -> usize {
        self.next
    }

    /// Take one column for a dot and return it.
    pub fn take(&mut self) -> usize {
        let column = self.next;
        self.next = self.next.saturating_add(1);
        column
    }

    /// Reserve `columns` empty columns and return the reserved range.
    pub fn skip(&mut self, columns: usize) -> ColumnRange {
        let start = self.next;
        self.next = self.next.saturating_add(columns);
        ColumnRange::new(start, self.next)
    }
}

/// The column in the middle of a gap.
///
/// Rounds towards the right for gaps of even width; an empty gap yields its
/// start column.
///
/// # Examples
///
/// ```
/// # use dotnote::geometry::ColumnRange;
/// # use dotnote::layout::positioning::midpoint;
/// assert_eq!(midpoint(ColumnRange::new(4, 7)), 5);
/// assert_eq!(midpoint(ColumnRange::new(4, 4)), 4);
/// ```
pub fn midpoint(gap: ColumnRange) -> usize {
    gap.start() + gap.width() / 2
}
