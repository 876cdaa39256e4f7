//! Error codes for dot notation diagnostics.
//!
//! Codes are grouped by the phase that reports them:
//! - `E0xx` - Tokenizer errors
//! - `E1xx` - Parser errors

use std::fmt;

/// The phase of the pipeline that reported a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// The tokenizer rejected a glyph or an integer literal.
    Lex,
    /// The token stream does not follow the grammar.
    Syntax,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Lex => write!(f, "lexical"),
            Phase::Syntax => write!(f, "syntax"),
        }
    }
}

/// Error codes for categorizing diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // Tokenizer Errors (E0xx)
    // =========================================================================
    /// Unclassifiable glyph.
    ///
    /// A control character, combining mark, zero-width modifier or non-ASCII
    /// numeral was found. None of these can label a dot.
    E001,

    /// Malformed integer.
    ///
    /// An integer literal starts with `0` but has more digits, as in `01•`.
    E002,

    /// Integer out of range.
    ///
    /// An integer literal does not fit in a signed 64-bit count.
    E003,

    // =========================================================================
    // Parser Errors (E1xx)
    // =========================================================================
    /// Unexpected token.
    ///
    /// A token appeared where the grammar does not allow it, for example a
    /// count with no symbol (`3`) or a symbol with no count (`•`).
    E100,

    /// Unbalanced parentheses.
    ///
    /// A `(` was never closed, or a `)` has no matching `(`.
    E101,

    /// Missing separator.
    ///
    /// Two clusters follow each other without whitespace or `+` between
    /// them, as in `1•2★`.
    E102,

    /// Trailing input.
    ///
    /// Input remained after the last complete term.
    E103,

    /// Nesting too deep.
    ///
    /// Groups are nested deeper than the configured limit.
    E104,
}

impl ErrorCode {
    /// Returns the code as a string (e.g., "E001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E001 => "E001",
            ErrorCode::E002 => "E002",
            ErrorCode::E003 => "E003",
            ErrorCode::E100 => "E100",
            ErrorCode::E101 => "E101",
            ErrorCode::E102 => "E102",
            ErrorCode::E103 => "E103",
            ErrorCode::E104 => "E104",
        }
    }

    /// Returns a short description of what this error code means.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E001 => "unclassifiable glyph",
            ErrorCode::E002 => "malformed integer",
            ErrorCode::E003 => "integer out of range",
            ErrorCode::E100 => "unexpected token",
            ErrorCode::E101 => "unbalanced parentheses",
            ErrorCode::E102 => "missing separator",
            ErrorCode::E103 => "trailing input",
            ErrorCode::E104 => "nesting too deep",
        }
    }

    /// Returns the phase that reports this code.
    pub fn phase(self) -> Phase {
        match self {
            ErrorCode::E001 | ErrorCode::E002 | ErrorCode::E003 => Phase::Lex,
            ErrorCode::E100
            | ErrorCode::E101
            | ErrorCode::E102
            | ErrorCode::E103
            | ErrorCode::E104 => Phase::Syntax,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_display() {
        assert_eq!(ErrorCode::E001.to_string(), "E001");
        assert_eq!(ErrorCode::E104.to_string(), "E104");
    }

    #[test]
    fn test_error_code_description() {
        assert_eq!(ErrorCode::E002.description(), "malformed integer");
        assert_eq!(ErrorCode::E101.description(), "unbalanced parentheses");
    }

    #[test]
    fn test_error_code_phase() {
        assert_eq!(ErrorCode::E002.phase(), Phase::Lex);
        assert_eq!(ErrorCode::E003.phase(), Phase::Lex);
        assert_eq!(ErrorCode::E100.phase(), Phase::Syntax);
        assert_eq!(ErrorCode::E103.phase(), Phase::Syntax);
        assert_eq!(Phase::Lex.to_string(), "lexical");
    }
}
