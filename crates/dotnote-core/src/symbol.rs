//! Glyph classification and the [`Symbol`] type.
//!
//! Dot notation only needs to tell a handful of glyph classes apart: ASCII
//! digits, the two sign characters, parentheses, whitespace, and everything
//! else that can stand for a dot. Classification is deliberately minimal; it
//! does not attempt grapheme segmentation.
//!
//! A glyph is a [`Symbol`] when it is none of the structural classes and is
//! also not a control character, a combining mark or zero-width format
//! character, or a non-ASCII numeric character. Those remaining glyphs are
//! [`GlyphClass::Unclassifiable`] and rejected by the lexer.

use std::fmt;

use serde::Serialize;
use thiserror::Error;
use unicode_normalization::char::is_combining_mark;

/// The lexical class of a single `char`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GlyphClass {
    /// ASCII digit `0`-`9`.
    Digit,
    /// `+` or `-`.
    Sign,
    /// `(` or `)`.
    Paren,
    /// Any Unicode whitespace.
    Whitespace,
    /// A glyph that may label a dot.
    Symbol,
    /// A glyph that has no meaning in the notation.
    Unclassifiable,
}

/// Classify a glyph.
///
/// # Examples
///
/// ```
/// use dotnote_core::symbol::{GlyphClass, classify};
///
/// assert_eq!(classify('7'), GlyphClass::Digit);
/// assert_eq!(classify('•'), GlyphClass::Symbol);
/// assert_eq!(classify('\u{0301}'), GlyphClass::Unclassifiable);
/// ```
pub fn classify(glyph: char) -> GlyphClass {
    match glyph {
        '0'..='9' => GlyphClass::Digit,
        '+' | '-' => GlyphClass::Sign,
        '(' | ')' => GlyphClass::Paren,
        c if c.is_whitespace() => GlyphClass::Whitespace,
        c if c.is_control() || is_zero_width_modifier(c) || c.is_numeric() => {
            GlyphClass::Unclassifiable
        }
        _ => GlyphClass::Symbol,
    }
}

/// Returns `true` for glyphs that only modify their neighbour.
///
/// Covers every combining mark (general categories Mn, Mc and Me, which
/// include the variation selectors) and the zero-width format characters
/// U+200B-U+200F, U+2060-U+2064 and U+FEFF.
pub fn is_zero_width_modifier(glyph: char) -> bool {
    is_combining_mark(glyph)
        || matches!(glyph, '\u{200B}'..='\u{200F}' | '\u{2060}'..='\u{2064}' | '\u{FEFF}')
}

/// Why a glyph cannot be used as a [`Symbol`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SymbolError {
    #[error("`{0}` is reserved by the notation and cannot label a dot")]
    Reserved(char),

    #[error("whitespace cannot label a dot")]
    Whitespace(char),

    #[error("U+{:04X} cannot be classified as a symbol", codepoint(.0))]
    Unclassifiable(char),
}

fn codepoint(glyph: &char) -> u32 {
    u32::from(*glyph)
}

/// A single glyph labelling a dot cluster.
///
/// Equality is by codepoint.
///
/// # Examples
///
/// ```
/// use dotnote_core::symbol::Symbol;
///
/// let dot = Symbol::new('•').unwrap();
/// assert_eq!(dot.glyph(), '•');
/// assert!(Symbol::new('3').is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Symbol(char);

impl Symbol {
    /// Creates a symbol, rejecting any glyph not classified as
    /// [`GlyphClass::Symbol`].
    pub fn new(glyph: char) -> Result<Self, SymbolError> {
        match classify(glyph) {
            GlyphClass::Symbol => Ok(Self(glyph)),
            GlyphClass::Whitespace => Err(SymbolError::Whitespace(glyph)),
            GlyphClass::Digit | GlyphClass::Sign | GlyphClass::Paren => {
                Err(SymbolError::Reserved(glyph))
            }
            GlyphClass::Unclassifiable => Err(SymbolError::Unclassifiable(glyph)),
        }
    }

    /// Returns the glyph.
    pub fn glyph(self) -> char {
        self.0
    }
}

impl TryFrom<char> for Symbol {
    type Error = SymbolError;

    fn try_from(glyph: char) -> Result<Self, Self::Error> {
        Self::new(glyph)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_classify_structural_glyphs() {
        for digit in '0'..='9' {
            assert_eq!(classify(digit), GlyphClass::Digit);
        }
        assert_eq!(classify('+'), GlyphClass::Sign);
        assert_eq!(classify('-'), GlyphClass::Sign);
        assert_eq!(classify('('), GlyphClass::Paren);
        assert_eq!(classify(')'), GlyphClass::Paren);
        assert_eq!(classify(' '), GlyphClass::Whitespace);
        assert_eq!(classify('\t'), GlyphClass::Whitespace);
        assert_eq!(classify('\u{3000}'), GlyphClass::Whitespace);
    }

    #[test]
    fn test_classify_symbols() {
        for glyph in ['•', '★', 'x', 'A', '■', '○', '*', '[', '😀', 'λ'] {
            assert_eq!(classify(glyph), GlyphClass::Symbol, "glyph {glyph:?}");
        }
    }

    #[test]
    fn test_classify_unclassifiable() {
        // Combining acute accent, zero-width joiner, variation selector,
        // control character and non-ASCII digits.
        for glyph in ['\u{0301}', '\u{200D}', '\u{FE0F}', '\u{0007}', '٣', '²'] {
            assert_eq!(
                classify(glyph),
                GlyphClass::Unclassifiable,
                "glyph {glyph:?}"
            );
        }
    }

    #[test]
    fn test_classify_non_latin_combining_marks() {
        // Hebrew sheva, Arabic fathatan, Devanagari nukta, Thai mai ek,
        // Devanagari visarga (spacing) and an enclosing circle.
        for glyph in [
            '\u{05B0}', '\u{064B}', '\u{093C}', '\u{0E48}', '\u{0903}', '\u{20DD}',
        ] {
            assert_eq!(
                classify(glyph),
                GlyphClass::Unclassifiable,
                "glyph {glyph:?}"
            );
        }
    }

    #[test]
    fn test_classify_zero_width_format_characters() {
        for glyph in ['\u{200B}', '\u{200E}', '\u{200F}', '\u{2060}', '\u{2064}', '\u{FEFF}'] {
            assert!(is_zero_width_modifier(glyph), "glyph {glyph:?}");
            assert_eq!(
                classify(glyph),
                GlyphClass::Unclassifiable,
                "glyph {glyph:?}"
            );
        }
        assert!(!is_zero_width_modifier('•'));
        assert!(!is_zero_width_modifier('\u{2065}'));
    }

    #[test]
    fn test_symbol_new_errors() {
        assert_eq!(Symbol::new('-'), Err(SymbolError::Reserved('-')));
        assert_eq!(Symbol::new('4'), Err(SymbolError::Reserved('4')));
        assert_eq!(Symbol::new(' '), Err(SymbolError::Whitespace(' ')));
        assert_eq!(
            Symbol::new('\u{0301}'),
            Err(SymbolError::Unclassifiable('\u{0301}'))
        );
    }

    #[test]
    fn test_symbol_error_display() {
        assert_eq!(
            SymbolError::Unclassifiable('\u{0301}').to_string(),
            "U+0301 cannot be classified as a symbol"
        );
    }

    #[test]
    fn test_symbol_display_and_equality() {
        let a = Symbol::try_from('★').unwrap();
        let b = Symbol::new('★').unwrap();
        assert_eq!(a, b);
        assert_eq!(a.to_string(), "★");
    }

    proptest! {
        #[test]
        fn symbol_new_agrees_with_classify(glyph in any::<char>()) {
            let is_symbol = classify(glyph) == GlyphClass::Symbol;
            prop_assert_eq!(Symbol::new(glyph).is_ok(), is_symbol);
        }
    }
}
