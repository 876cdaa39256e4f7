use std::fmt;

use dotnote_core::{span::Span, symbol::Symbol};

/// Token types for dot notation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// An unsigned decimal literal, at most `i64::MAX`.
    Integer(u64),
    Symbol(Symbol),

    // Signs; the parser decides whether `+` is a sign or a separator
    Plus,  // +
    Minus, // -

    // Punctuation
    LeftParen,  // (
    RightParen, // )

    /// A run of whitespace.
    Whitespace,
}

impl Token {
    /// Returns `true` for tokens that carry no meaning on their own.
    pub fn is_whitespace(&self) -> bool {
        matches!(self, Token::Whitespace)
    }
}

/// A token with position information for winnow integration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionedToken {
    pub token: Token,
    pub span: Span,
}

impl PositionedToken {
    pub fn new(token: Token, span: Span) -> Self {
        Self { token, span }
    }
}

impl std::ops::Deref for PositionedToken {
    type Target = Token;

    fn deref(&self) -> &Self::Target {
        &self.token
    }
}

impl From<(Token, Span)> for PositionedToken {
    fn from((token, span): (Token, Span)) -> Self {
        Self::new(token, span)
    }
}

impl fmt::Display for PositionedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.token.fmt(f)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Integer(n) => write!(f, "{n}"),
            Token::Symbol(symbol) => write!(f, "{symbol}"),
            Token::Plus => write!(f, "+"),
            Token::Minus => write!(f, "-"),
            Token::LeftParen => write!(f, "("),
            Token::RightParen => write!(f, ")"),
            Token::Whitespace => write!(f, " "),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_display() {
        assert_eq!(Token::Integer(12).to_string(), "12");
        assert_eq!(Token::Symbol(Symbol::new('★').unwrap()).to_string(), "★");
        assert_eq!(Token::RightParen.to_string(), ")");
        assert!(Token::Whitespace.is_whitespace());
    }
}
