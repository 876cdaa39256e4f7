//! Error types for dot notation operations.
//!
//! This module provides the main error type [`DotNoteError`] which wraps
//! the error conditions that can occur while reading, parsing, laying out and
//! exporting notation, and [`LayoutError`] for layouts the active policy
//! cannot produce.

use std::io;

use thiserror::Error;

use dotnote_core::span::Span;
use dotnote_parser::error::ParseError;

/// The main error type for dot notation operations.
///
/// # Diagnostic Variants
///
/// The `Parse` and `Layout` variants carry the source text alongside the
/// error, so callers can render the offending span without keeping the input
/// around themselves.
#[derive(Debug, Error)]
pub enum DotNoteError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Parse { err: ParseError, src: String },

    #[error("{err}")]
    Layout { err: LayoutError, src: String },

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error + Send + Sync>),
}

impl DotNoteError {
    /// Create a new `Parse` error with the associated source code.
    pub fn new_parse_error(err: ParseError, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }

    /// Create a new `Layout` error with the associated source code.
    pub fn new_layout_error(err: LayoutError, src: impl Into<String>) -> Self {
        Self::Layout {
            err,
            src: src.into(),
        }
    }
}

/// A syntax tree that cannot be laid out under the active configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("negative counts are not supported by the `reject` policy")]
    NegativeMagnitudeUnsupported { span: Span },

    #[error("notation expands to {count} dots, more than the limit of {limit}")]
    TooManyElements { count: u64, limit: usize, span: Span },
}

impl LayoutError {
    /// Span of the term that caused the error.
    pub fn span(&self) -> Span {
        match self {
            LayoutError::NegativeMagnitudeUnsupported { span }
            | LayoutError::TooManyElements { span, .. } => *span,
        }
    }

    /// Short text shown next to the offending span.
    pub fn label(&self) -> &'static str {
        match self {
            LayoutError::NegativeMagnitudeUnsupported { .. } => "negative count",
            LayoutError::TooManyElements { .. } => "element limit exceeded here",
        }
    }

    /// A suggestion for fixing the error.
    pub fn help(&self) -> &'static str {
        match self {
            LayoutError::NegativeMagnitudeUnsupported { .. } => {
                "set `negative_counts = \"mark\"` in the `[layout]` configuration section"
            }
            LayoutError::TooManyElements { .. } => {
                "raise `max_elements` in the `[layout]` configuration section"
            }
        }
    }
}
