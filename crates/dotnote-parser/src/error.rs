//! Diagnostics for the dot notation tokenizer and parser.
//!
//! Every failure is a [`Diagnostic`] carrying an [`ErrorCode`], a primary
//! [`Label`] pointing at the offending input and optional help text. The
//! tokenizer can report several diagnostics in one pass, so the public entry
//! points return them bundled in a [`ParseError`].
//!
//! # Example
//!
//! ```
//! # use dotnote_parser::error::{Diagnostic, ErrorCode, Phase};
//! # use dotnote_parser::Span;
//!
//! let diag = Diagnostic::error("unbalanced parentheses")
//!     .with_code(ErrorCode::E101)
//!     .with_label(Span::new(0..1), "this `(` is never closed")
//!     .with_help("add a closing `)`");
//!
//! assert_eq!(diag.offset(), Some(0));
//! assert_eq!(diag.code().map(ErrorCode::phase), Some(Phase::Syntax));
//! ```

mod collector;
mod diagnostic;
mod error_code;
mod label;
mod parse_error;

pub(crate) use collector::DiagnosticCollector;

pub use diagnostic::Diagnostic;
pub use error_code::{ErrorCode, Phase};
pub use label::Label;
pub use parse_error::ParseError;
