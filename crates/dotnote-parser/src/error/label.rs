//! Labeled source spans for diagnostic messages.

use dotnote_core::span::Span;

/// A message attached to a span of the notation source.
///
/// A diagnostic has one primary label marking the offending input, and may
/// add secondary labels for context:
///
/// ```text
/// error[E102]: missing separator before this term
///  --> 1:5
///   |
/// 1 | 1•2★
///   | ── ─ missing separator
///   | │
///   | previous term ends here
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    span: Span,
    message: String,
    is_primary: bool,
}

impl Label {
    /// Create a new primary label.
    pub fn primary(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
            is_primary: true,
        }
    }

    /// Create a new secondary label.
    pub fn secondary(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
            is_primary: false,
        }
    }

    /// Get the span this label applies to.
    pub fn span(&self) -> Span {
        self.span
    }

    /// Get the label message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Check if this is a primary label.
    pub fn is_primary(&self) -> bool {
        self.is_primary
    }
}
