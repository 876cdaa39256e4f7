//! Collector for accumulating diagnostics during a pass.
//!
//! The tokenizer keeps going after a bad glyph so that every lexical problem
//! in the input is reported at once.

use crate::error::{Diagnostic, ParseError};

/// Accumulates diagnostics and converts them into a result at the end of a
/// pass.
#[derive(Debug, Default)]
pub struct DiagnosticCollector {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollector {
    /// Create a new empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit a diagnostic to this collector.
    pub fn emit(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Finish collection and return a result.
    ///
    /// Returns `Err(ParseError)` with every diagnostic if any was emitted.
    pub fn finish(self) -> Result<(), ParseError> {
        if self.diagnostics.is_empty() {
            Ok(())
        } else {
            Err(ParseError::new(self.diagnostics))
        }
    }
}

#[cfg(test)]
mod tests {
    use dotnote_core::span::Span;

    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_collector_new_finish_ok() {
        let collector = DiagnosticCollector::new();
        assert!(collector.finish().is_ok());
    }

    #[test]
    fn test_collector_keeps_every_diagnostic() {
        let mut collector = DiagnosticCollector::new();
        collector.emit(
            Diagnostic::error("unclassifiable glyph")
                .with_code(ErrorCode::E001)
                .with_label(Span::new(1..3), "here"),
        );
        collector.emit(Diagnostic::error("malformed integer").with_code(ErrorCode::E002));

        let err = collector.finish().unwrap_err();
        assert_eq!(err.diagnostics().len(), 2);
        assert_eq!(err.diagnostics()[0].message(), "unclassifiable glyph");
        assert_eq!(err.diagnostics()[1].code(), Some(ErrorCode::E002));
    }
}
