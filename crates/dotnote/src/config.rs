//! Configuration types for dot notation parsing and layout.
//!
//! This module provides configuration structures that control how notation
//! is parsed and how the layout resolver places dots on the grid. All types
//! implement [`serde::Deserialize`] for loading from external sources; every
//! field falls back to its default when missing.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining parser and layout settings.
//! - [`ParserSection`] - Limits applied while parsing.
//! - [`LayoutConfig`] - Grid spacing, element budget and the [`NegativePolicy`].
//!
//! # Example
//!
//! ```
//! # use dotnote::config::{AppConfig, NegativePolicy};
//! let config = AppConfig::default();
//! assert_eq!(config.layout().union_gap(), 3);
//! assert_eq!(config.layout().negative_counts(), NegativePolicy::Mark);
//! ```

use serde::Deserialize;

use dotnote_parser::{DEFAULT_MAX_DEPTH, ParserConfig};

/// Default columns inserted for a `Space` separator.
pub const DEFAULT_SPACE_GAP: usize = 1;
/// Default columns inserted for a `Plus` separator.
pub const DEFAULT_UNION_GAP: usize = 3;
/// Default columns added on each side of a group.
pub const DEFAULT_GROUP_PADDING: usize = 1;
/// Default columns reserved for a zero-count cluster.
pub const DEFAULT_ZERO_WIDTH: usize = 1;
/// Default limit on the number of dots in one layout.
pub const DEFAULT_MAX_ELEMENTS: usize = 100_000;

/// Top-level application configuration combining parser and layout settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AppConfig {
    /// Parser configuration section.
    #[serde(default)]
    parser: ParserSection,

    /// Layout configuration section.
    #[serde(default)]
    layout: LayoutConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified parser and layout configurations.
    ///
    /// # Arguments
    ///
    /// * `parser` - Parser limits.
    /// * `layout` - Layout resolver settings.
    pub fn new(parser: ParserSection, layout: LayoutConfig) -> Self {
        Self { parser, layout }
    }

    /// Returns the parser configuration.
    pub fn parser(&self) -> &ParserSection {
        &self.parser
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }
}

/// The `[parser]` section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ParserSection {
    /// Deepest group nesting accepted by the parser.
    max_depth: usize,
}

impl ParserSection {
    pub fn new(max_depth: usize) -> Self {
        Self { max_depth }
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Converts the section into the parser's own configuration type.
    pub fn parser_config(&self) -> ParserConfig {
        ParserConfig::new(self.max_depth)
    }
}

impl Default for ParserSection {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DEPTH)
    }
}

/// How the layout resolver treats negative counts, negative magnitudes and
/// `-` group signs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NegativePolicy {
    /// Accept them and record the sign on every element and group.
    #[default]
    Mark,
    /// Fail with [`LayoutError::NegativeMagnitudeUnsupported`](crate::LayoutError::NegativeMagnitudeUnsupported).
    Reject,
}

/// The `[layout]` section.
///
/// All distances are in grid columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Columns between two terms joined by whitespace.
    space_gap: usize,

    /// Columns between two terms joined by `+`; the union marker sits in the
    /// middle of this gap.
    union_gap: usize,

    /// Columns on each side of a group's contents.
    group_padding: usize,

    /// Columns occupied by a cluster with a zero count.
    zero_width: usize,

    /// Largest number of dots a single layout may hold.
    max_elements: usize,

    /// Treatment of negative counts and negated groups.
    negative_counts: NegativePolicy,
}

impl LayoutConfig {
    pub fn space_gap(&self) -> usize {
        self.space_gap
    }

    pub fn union_gap(&self) -> usize {
        self.union_gap
    }

    pub fn group_padding(&self) -> usize {
        self.group_padding
    }

    pub fn zero_width(&self) -> usize {
        self.zero_width
    }

    pub fn max_elements(&self) -> usize {
        self.max_elements
    }

    pub fn negative_counts(&self) -> NegativePolicy {
        self.negative_counts
    }

    /// Set the gap used for a `Space` separator
    pub fn with_space_gap(mut self, columns: usize) -> Self {
        self.space_gap = columns;
        self
    }

    /// Set the gap used for a `Plus` separator
    pub fn with_union_gap(mut self, columns: usize) -> Self {
        self.union_gap = columns;
        self
    }

    /// Set the padding on each side of a group
    pub fn with_group_padding(mut self, columns: usize) -> Self {
        self.group_padding = columns;
        self
    }

    /// Set the width reserved for a zero-count cluster
    pub fn with_zero_width(mut self, columns: usize) -> Self {
        self.zero_width = columns;
        self
    }

    /// Set the element budget
    pub fn with_max_elements(mut self, limit: usize) -> Self {
        self.max_elements = limit;
        self
    }

    /// Set the policy for negative counts
    pub fn with_negative_counts(mut self, policy: NegativePolicy) -> Self {
        self.negative_counts = policy;
        self
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            space_gap: DEFAULT_SPACE_GAP,
            union_gap: DEFAULT_UNION_GAP,
            group_padding: DEFAULT_GROUP_PADDING,
            zero_width: DEFAULT_ZERO_WIDTH,
            max_elements: DEFAULT_MAX_ELEMENTS,
            negative_counts: NegativePolicy::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.parser().max_depth(), DEFAULT_MAX_DEPTH);
        assert_eq!(config.layout().space_gap(), 1);
        assert_eq!(config.layout().group_padding(), 1);
        assert_eq!(config.layout().zero_width(), 1);
        assert_eq!(config.layout().max_elements(), 100_000);
    }

    #[test]
    fn test_builder_methods() {
        let layout = LayoutConfig::default()
            .with_space_gap(0)
            .with_union_gap(5)
            .with_negative_counts(NegativePolicy::Reject);
        assert_eq!(layout.space_gap(), 0);
        assert_eq!(layout.union_gap(), 5);
        assert_eq!(layout.negative_counts(), NegativePolicy::Reject);
        assert_eq!(layout.group_padding(), DEFAULT_GROUP_PADDING);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: AppConfig = serde_json::from_str(
            r#"{ "layout": { "union_gap": 5, "negative_counts": "reject" } }"#,
        )
        .unwrap();
        assert_eq!(config.layout().union_gap(), 5);
        assert_eq!(config.layout().negative_counts(), NegativePolicy::Reject);
        assert_eq!(config.layout().space_gap(), DEFAULT_SPACE_GAP);
        assert_eq!(config.parser(), &ParserSection::default());
    }

    #[test]
    fn test_parser_section_converts() {
        let section = ParserSection::new(8);
        assert_eq!(section.parser_config().max_depth(), 8);
    }
}
