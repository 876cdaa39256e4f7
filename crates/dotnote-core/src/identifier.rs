//! Identifiers for layout output.
//!
//! Identifiers are dense indices handed out in textual (pre-order) order by
//! the layout resolver, so the same notation always yields the same ids.

use std::fmt;

use serde::Serialize;

/// Identifies one group boundary in a layout.
///
/// # Examples
///
/// ```
/// use dotnote_core::identifier::GroupId;
///
/// let id = GroupId::new(3);
/// assert_eq!(id.index(), 3);
/// assert_eq!(id.to_string(), "g3");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct GroupId(usize);

impl GroupId {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "g{}", self.0)
    }
}

/// Identifies one dot in a layout; equal to its draw-order index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ElementId(usize);

impl ElementId {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_order_by_index() {
        assert!(GroupId::new(1) < GroupId::new(2));
        assert!(ElementId::new(0) < ElementId::new(7));
        assert_eq!(ElementId::new(7).to_string(), "e7");
    }
}
