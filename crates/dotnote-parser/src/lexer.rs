//! Lexical analyzer for dot notation.
//!
//! The lexer converts source text into a stream of [`Token`]s. Every glyph is
//! classified with [`dotnote_core::symbol::classify`]; runs of digits become
//! integers and runs of whitespace collapse into one token.
//!
//! The public entry point is [`tokenize`], which keeps going after an error
//! and reports every lexical problem in a single pass.

use winnow::{
    Parser as _,
    combinator::alt,
    error::{ContextError, ErrMode},
    stream::{LocatingSlice, Location, Stream},
    token::{any, take_while},
};

use dotnote_core::{span::Span, symbol::Symbol};

use crate::{
    error::{Diagnostic, DiagnosticCollector, ErrorCode, ParseError},
    tokens::{PositionedToken, Token},
};

/// Diagnostic information pushed onto winnow errors as context.
#[derive(Debug, Clone, PartialEq, Eq)]
struct LexerDiagnostic {
    code: ErrorCode,
    message: String,
    help: Option<&'static str>,
    /// The error span covers from `start` to the error position.
    start: usize,
}

type Input<'a> = LocatingSlice<&'a str>;
type IResult<O> = std::result::Result<O, ErrMode<ContextError<LexerDiagnostic>>>;

/// Build a Cut error carrying `diagnostic`.
fn cut_diagnostic(diagnostic: LexerDiagnostic) -> ErrMode<ContextError<LexerDiagnostic>> {
    let mut e = ContextError::new();
    e.push(diagnostic);
    ErrMode::Cut(e)
}

/// Parse a decimal integer literal.
///
/// `0` alone is fine; any other literal starting with `0` is malformed. The
/// value must fit in an `i64` so that the parser can negate it.
fn integer(input: &mut Input<'_>) -> IResult<Token> {
    let start = input.current_token_start();
    let digits: &str = take_while(1.., |c: char| c.is_ascii_digit()).parse_next(input)?;

    if digits.len() > 1 && digits.starts_with('0') {
        return Err(cut_diagnostic(LexerDiagnostic {
            code: ErrorCode::E002,
            message: format!("malformed integer `{digits}`"),
            help: Some("counts are written without leading zeros"),
            start,
        }));
    }

    match digits.parse::<i64>() {
        Ok(value) => Ok(Token::Integer(value.unsigned_abs())),
        Err(_) => Err(cut_diagnostic(LexerDiagnostic {
            code: ErrorCode::E003,
            message: format!("integer `{digits}` is out of range"),
            help: Some("a count must fit in a signed 64-bit integer"),
            start,
        })),
    }
}

/// Parse a run of whitespace.
fn whitespace(input: &mut Input<'_>) -> IResult<Token> {
    take_while(1.., |c: char| c.is_whitespace())
        .value(Token::Whitespace)
        .parse_next(input)
}

/// Parse signs and parentheses.
fn single_char_token(input: &mut Input<'_>) -> IResult<Token> {
    alt((
        '+'.value(Token::Plus),
        '-'.value(Token::Minus),
        '('.value(Token::LeftParen),
        ')'.value(Token::RightParen),
    ))
    .parse_next(input)
}

/// Parse a symbol glyph.
///
/// Tried last, so any glyph reaching this point is either a symbol or
/// unclassifiable.
fn symbol(input: &mut Input<'_>) -> IResult<Token> {
    let start = input.current_token_start();
    let glyph: char = any.parse_next(input)?;

    match Symbol::new(glyph) {
        Ok(symbol) => Ok(Token::Symbol(symbol)),
        Err(err) => Err(cut_diagnostic(LexerDiagnostic {
            code: ErrorCode::E001,
            message: err.to_string(),
            help: Some("combining marks, control characters and non-ASCII numerals cannot label a dot"),
            start,
        })),
    }
}

/// Parse a single token with position tracking
fn positioned_token(input: &mut Input<'_>) -> IResult<PositionedToken> {
    let start_pos = input.current_token_start();

    let token = alt((integer, whitespace, single_char_token, symbol)).parse_next(input)?;

    let end_pos = input.current_token_start();
    Ok(PositionedToken::new(token, Span::new(start_pos..end_pos)))
}

/// Lexer that accumulates tokens and diagnostics during tokenization.
struct Lexer {
    tokens: Vec<PositionedToken>,
    diagnostics: DiagnosticCollector,
}

impl Lexer {
    fn new() -> Self {
        Self {
            tokens: Vec::new(),
            diagnostics: DiagnosticCollector::new(),
        }
    }

    /// Tokenize the input, collecting tokens and errors.
    fn tokenize(&mut self, mut input: Input<'_>) {
        while !input.is_empty() {
            let token_start = input.current_token_start();
            match positioned_token(&mut input) {
                Ok(token) => {
                    self.tokens.push(token);
                }
                Err(e) => {
                    let error_pos = input.current_token_start();
                    self.diagnostics.emit(Self::convert_err_mode(e, error_pos));

                    // Failing rules consume the offending text; only skip a
                    // glyph when nothing was consumed at all.
                    if error_pos == token_start && !input.is_empty() {
                        input.next_token();
                    }
                }
            }
        }
    }

    /// Finish lexing and return tokens or collected errors.
    fn finish(self) -> Result<Vec<PositionedToken>, ParseError> {
        self.diagnostics.finish().map(|()| self.tokens)
    }

    /// Convert an ErrMode and error position to a Diagnostic.
    ///
    /// Falls back to E001 when no diagnostic context is attached.
    fn convert_err_mode(
        err: ErrMode<ContextError<LexerDiagnostic>>,
        error_pos: usize,
    ) -> Diagnostic {
        let context_error = match err {
            ErrMode::Backtrack(ctx) | ErrMode::Cut(ctx) => ctx,
            ErrMode::Incomplete(_) => ContextError::new(),
        };

        if let Some(LexerDiagnostic {
            code,
            message,
            help,
            start,
        }) = context_error.context().next()
        {
            let span = Span::new(*start..error_pos);

            let mut diag = Diagnostic::error(message.as_str())
                .with_code(*code)
                .with_label(span, code.description());
            if let Some(h) = help {
                diag = diag.with_help(*h);
            }
            return diag;
        }

        let span = Span::new(error_pos..error_pos.saturating_add(1));
        Diagnostic::error("unexpected character")
            .with_code(ErrorCode::E001)
            .with_label(span, ErrorCode::E001.description())
    }
}

/// Tokenize dot notation, collecting every lexical error.
///
/// # Returns
///
/// - `Ok(tokens)` - All input was tokenized
/// - `Err(ParseError)` - One or more errors occurred; contains all diagnostics
pub fn tokenize(input: &str) -> Result<Vec<PositionedToken>, ParseError> {
    let mut lexer = Lexer::new();
    lexer.tokenize(LocatingSlice::new(input));
    lexer.finish()
}


#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::{any, *};

    use super::*;

    // ===================
    // Strategies
    // ===================

    /// Strategy for generating notation-like text from valid glyphs only.
    fn valid_text_strategy() -> impl Strategy<Value = String> {
        proptest::collection::vec(
            prop_oneof![
                (1u32..100000).prop_map(|n| n.to_string()),
                Just("0".to_string()),
                Just("+".to_string()),
                Just("-".to_string()),
                Just("(".to_string()),
                Just(")".to_string()),
                Just(" ".to_string()),
                proptest::sample::select(vec!['•', '★', '○', 'x', '■', '😀'])
                    .prop_map(String::from),
            ],
            0..40,
        )
        .prop_map(|parts| parts.concat())
    }

    // ===================
    // Property Test Functions
    // ===================

    /// Text built from valid glyphs always tokenizes.
    ///
    /// Adjacent digit chunks can merge into a literal with a leading zero,
    /// which is the one lexical error such text can contain.
    fn check_valid_text_tokenizes(text: &str) -> Result<(), TestCaseError> {
        match tokenize(text) {
            Ok(tokens) => {
                let covered: usize = tokens.iter().map(|token| token.span.len()).sum();
                prop_assert_eq!(covered, text.len());
            }
            Err(err) => {
                for diag in err.diagnostics() {
                    prop_assert!(
                        matches!(diag.code(), Some(ErrorCode::E002) | Some(ErrorCode::E003)),
                        "unexpected diagnostic {diag} for `{text}`"
                    );
                }
            }
        }
        Ok(())
    }

    /// Token spans are contiguous and ordered.
    fn check_spans_are_contiguous(text: &str) -> Result<(), TestCaseError> {
        if let Ok(tokens) = tokenize(text) {
            let mut offset = 0;
            for token in &tokens {
                prop_assert_eq!(token.span.start(), offset);
                offset = token.span.end();
            }
            prop_assert_eq!(offset, text.len());
        }
        Ok(())
    }

    /// The lexer never panics and always terminates on arbitrary input.
    fn check_arbitrary_input_terminates(text: &str) -> Result<(), TestCaseError> {
        let _ = tokenize(text);
        Ok(())
    }

    // ===================
    // Proptest Wrappers
    // ===================

    proptest! {
        #[test]
        fn valid_text_tokenizes(text in valid_text_strategy()) {
            check_valid_text_tokenizes(&text)?;
        }

        #[test]
        fn spans_are_contiguous(text in valid_text_strategy()) {
            check_spans_are_contiguous(&text)?;
        }

        #[test]
        fn arbitrary_input_terminates(text in any::<String>()) {
            check_arbitrary_input_terminates(&text)?;
        }
    }
}
