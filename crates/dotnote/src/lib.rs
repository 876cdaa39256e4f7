//! Dotnote - A compact notation for grouped, signed dot clusters.
//!
//! Parsing and layout for dot notation: a line such as `(3• 2★)+-(1○)` is
//! parsed into a syntax tree and resolved into dots placed on an abstract
//! grid, ready for an external renderer.

pub mod config;
pub mod export;
pub mod layout;

mod error;

pub use dotnote_core::{ast, geometry, identifier, span, symbol};
pub use dotnote_parser::error as diagnostic;

pub use error::{DotNoteError, LayoutError};

use log::{debug, info, trace};

use ast::SignedGroupSequence;
use config::AppConfig;
use layout::{Layout, Resolver};

/// Entry point for parsing and laying out dot notation.
///
/// This provides an API for processing notation through the parsing and
/// layout stages.
///
/// # Examples
///
/// ```rust
/// use dotnote::{DotNotation, config::AppConfig};
///
/// let source = "(3• 2★)+-(1○)";
///
/// // With custom config
/// let config = AppConfig::default();
/// let notation = DotNotation::new(config);
///
/// // Parse source to a syntax tree
/// let tree = notation.parse(source)
///     .expect("Failed to parse");
///
/// // Resolve the tree to a layout
/// let layout = notation.resolve(&tree)
///     .expect("Failed to resolve");
/// assert_eq!(layout.elements().len(), 6);
///
/// // Or use default config
/// let notation = DotNotation::default();
/// ```
#[derive(Debug, Clone, Default)]
pub struct DotNotation {
    config: AppConfig,
}

impl DotNotation {
    /// Create a new instance with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration including parser and layout settings
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration in use.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Parse notation into a syntax tree.
    ///
    /// # Arguments
    ///
    /// * `source` - Notation text
    ///
    /// # Errors
    ///
    /// Returns [`DotNoteError::Parse`] for lexical or syntax errors.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dotnote::DotNotation;
    ///
    /// let tree = DotNotation::default().parse("(1• 2★)")
    ///     .expect("Failed to parse notation");
    /// assert_eq!(tree.groups().count(), 1);
    /// ```
    pub fn parse(&self, source: &str) -> Result<SignedGroupSequence, DotNoteError> {
        info!(source_len = source.len(); "Parsing notation");

        let tree = dotnote_parser::parse(source, self.config.parser().parser_config())
            .map_err(|err| DotNoteError::new_parse_error(err, source))?;

        debug!("Notation parsed successfully");
        trace!(tree:?; "Parsed notation");

        Ok(tree)
    }

    /// Resolve a syntax tree into a layout.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError`] when the tree cannot be laid out under the
    /// configured policy.
    pub fn resolve(&self, tree: &SignedGroupSequence) -> Result<Layout, LayoutError> {
        info!("Resolving layout");
        Resolver::new(*self.config.layout()).resolve(tree)
    }

    /// Parse notation and resolve it into a layout in one step.
    ///
    /// # Errors
    ///
    /// Returns [`DotNoteError::Parse`] or [`DotNoteError::Layout`]; both
    /// carry `source`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dotnote::DotNotation;
    ///
    /// let layout = DotNotation::default().layout("3•").expect("Failed to lay out");
    /// assert_eq!(layout.elements().len(), 3);
    /// ```
    pub fn layout(&self, source: &str) -> Result<Layout, DotNoteError> {
        let tree = self.parse(source)?;
        let layout = self
            .resolve(&tree)
            .map_err(|err| DotNoteError::new_layout_error(err, source))?;

        info!(elements_count = layout.elements().len(); "Layout complete");
        Ok(layout)
    }

    /// Re-serialize notation in canonical form.
    ///
    /// Whitespace runs become single spaces, whitespace next to a parenthesis
    /// or around `+` is dropped.
    ///
    /// # Errors
    ///
    /// Returns [`DotNoteError::Parse`] for malformed input.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dotnote::DotNotation;
    ///
    /// let canonical = DotNotation::default().canonicalize(" ( 1•   +  2★ ) ").unwrap();
    /// assert_eq!(canonical, "(1•+2★)");
    /// ```
    pub fn canonicalize(&self, source: &str) -> Result<String, DotNoteError> {
        let tree = self.parse(source)?;
        Ok(tree.to_string())
    }
}
