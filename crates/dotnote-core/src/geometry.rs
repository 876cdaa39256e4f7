//! Abstract grid geometry for layouts.
//!
//! Layouts do not carry pixel coordinates. Every dot sits on an integer grid
//! and renderers choose how large a grid cell is.
//!
//! ```text
//!   column 0 ──────────► +column
//!   depth 0   (top-level)
//!   depth 1   (inside one group)
//!   depth 2   ...
//! ```
//!
//! - **Column**: horizontal slot, increasing left to right in textual order.
//! - **Depth**: number of groups enclosing the slot.

use std::ops::Range;

use serde::Serialize;

/// A position on the layout grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct GridPoint {
    column: usize,
    depth: usize,
}

impl GridPoint {
    /// Creates a new grid point
    pub fn new(column: usize, depth: usize) -> Self {
        Self { column, depth }
    }

    /// Returns the column of the point
    pub fn column(self) -> usize {
        self.column
    }

    /// Returns the nesting depth of the point
    pub fn depth(self) -> usize {
        self.depth
    }
}

/// A half-open run of columns `start..end`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct ColumnRange {
    start: usize,
    end: usize,
}

impl ColumnRange {
    /// Creates a column range.
    ///
    /// # Panics
    ///
    /// Panics if `end < start`.
    pub fn new(start: usize, end: usize) -> Self {
        assert!(end >= start, "column range end {end} before start {start}");
        Self { start, end }
    }

    pub fn start(self) -> usize {
        self.start
    }

    pub fn end(self) -> usize {
        self.end
    }

    /// Number of columns covered.
    pub fn width(self) -> usize {
        self.end - self.start
    }

    /// Returns `true` if `column` lies within the range.
    pub fn contains(self, column: usize) -> bool {
        (self.start..self.end).contains(&column)
    }

    /// Returns `true` if `other` lies entirely within this range.
    pub fn encloses(self, other: ColumnRange) -> bool {
        self.start <= other.start && other.end <= self.end
    }
}

impl From<ColumnRange> for Range<usize> {
    fn from(range: ColumnRange) -> Self {
        range.start..range.end
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_grid_point_accessors() {
        let point = GridPoint::new(4, 2);
        assert_eq!(point.column(), 4);
        assert_eq!(point.depth(), 2);
        assert_eq!(GridPoint::default(), GridPoint::new(0, 0));
    }

    #[test]
    fn test_column_range_contains() {
        let range = ColumnRange::new(2, 5);
        assert_eq!(range.width(), 3);
        assert!(!range.contains(1));
        assert!(range.contains(2));
        assert!(range.contains(4));
        assert!(!range.contains(5));
        assert_eq!(Range::from(range), 2..5);
    }

    #[test]
    #[should_panic(expected = "column range end 1 before start 3")]
    fn test_column_range_rejects_inverted() {
        ColumnRange::new(3, 1);
    }

    proptest! {
        #[test]
        fn range_encloses_itself(start in 0usize..1000, width in 0usize..1000) {
            let range = ColumnRange::new(start, start + width);
            prop_assert!(range.encloses(range));
            prop_assert_eq!(range.width(), width);
        }
    }
}
