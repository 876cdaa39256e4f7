//! # Dotnote Parser
//!
//! Tokenizer and parser for dot notation. This crate turns a line of text
//! such as `(3• 2★)+-(1○)` into the syntax tree defined in
//! [`dotnote_core::ast`].
//!
//! ## Usage
//!
//! ```
//! # use dotnote_parser::{parse, ParserConfig, error::ParseError};
//!
//! fn main() -> Result<(), ParseError> {
//!     let tree = parse("(3• 2★)+-(1○)", ParserConfig::default())?;
//!     assert_eq!(tree.groups().count(), 2);
//!     assert_eq!(tree.dot_count(), 6);
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod lexer;
pub mod parser;
pub mod tokens;

pub use dotnote_core::span::{Span, Spanned};
pub use parser::{DEFAULT_MAX_DEPTH, ParserConfig};

use log::{debug, trace};

use dotnote_core::ast::SignedGroupSequence;

use error::ParseError;

/// Parse dot notation into a syntax tree.
///
/// The pipeline has two steps:
///
/// 1. **Tokenize** - Classify every glyph; all lexical errors are reported
///    together
/// 2. **Parse** - Build the syntax tree; the first syntax error stops the
///    parse
///
/// # Errors
///
/// Returns a [`ParseError`] holding one diagnostic per lexical error, or a
/// single syntax diagnostic.
///
/// # Example
///
/// ```
/// # use dotnote_parser::{parse, ParserConfig, error::ErrorCode};
///
/// let err = parse("(1•", ParserConfig::default()).unwrap_err();
/// assert_eq!(err.code(), Some(ErrorCode::E101));
/// assert_eq!(err.offset(), Some(0));
/// ```
pub fn parse(source: &str, config: ParserConfig) -> Result<SignedGroupSequence, ParseError> {
    // Step 1: Tokenize
    let tokens = lexer::tokenize(source)?;
    debug!(tokens_count = tokens.len(); "Tokenized notation");
    trace!(tokens:?; "Tokens");

    // Step 2: Parse
    let tree = parser::build_sequence(&tokens, &config)?;
    debug!(
        terms_count = tree.body().len(),
        dots_count = tree.dot_count();
        "Parsed notation"
    );

    Ok(tree)
}
