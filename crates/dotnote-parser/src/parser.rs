//! Parser for dot notation tokens.
//!
//! This module turns the token stream from the [`lexer`](super::lexer) into
//! the syntax tree defined in [`dotnote_core::ast`]. The public entry point
//! is [`build_sequence`].
//!
//! Grammar, as parsed here:
//!
//! ```text
//! sequence     := ws* (term (separator term)*)? ws*
//! separator    := ws* "+" ws*          union
//!               | ws+                  space, unless a parenthesis touches it
//!               | ε                    only when a parenthesis touches the boundary
//! term         := dot_cluster | signed_group
//! dot_cluster  := ("-" natural | integer) symbol
//! signed_group := sign? ("-"? integer)? "(" sequence ")"
//! ```
//!
//! A `+` that follows a term is always a separator; a sign is only read at
//! the start of a term.

use winnow::{
    Parser as _,
    combinator::{opt, peek, repeat},
    error::{ContextError, ErrMode},
    stream::{Stream, TokenSlice},
    token::any,
};

use dotnote_core::{
    ast::{
        DotCluster, DotClusterSequence, Entry, Group, Separator, Sign, SignedGroup,
        SignedGroupSequence, Term,
    },
    span::{Span, Spanned},
    symbol::Symbol,
};

use crate::{
    error::{Diagnostic, ErrorCode},
    tokens::{PositionedToken, Token},
};

/// Default limit on group nesting.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Configuration for the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserConfig {
    max_depth: usize,
}

impl ParserConfig {
    /// Create a parser configuration.
    ///
    /// # Arguments
    ///
    /// * `max_depth` - Deepest group nesting accepted; deeper input fails
    ///   with [`ErrorCode::E104`]
    pub fn new(max_depth: usize) -> Self {
        Self { max_depth }
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DEPTH)
    }
}

/// Context type for parser errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Context {
    /// Description of what went wrong
    Label(&'static str),
    /// Remaining token count (`eof_offset()`) at error start position
    ///
    /// Used to calculate start_offset as: `tokens.len() - start_offset_value`
    StartOffset(usize),
    /// Error code to report; E100 when absent
    Code(ErrorCode),
    /// Suggestion shown under the diagnostic
    Help(&'static str),
    /// Related input shown as a secondary label
    Related(Span, &'static str),
}

type Input<'src> = DotTokenSlice<'src>;
type IResult<O> = std::result::Result<O, ErrMode<ContextError<Context>>>;
/// Type alias for winnow TokenSlice with our positioned tokens
type DotTokenSlice<'src> = TokenSlice<'src, PositionedToken>;

fn cut_err<'src, O, F>(input: &mut Input<'src>, f: F) -> IResult<O>
where
    F: FnOnce(&mut Input<'src>) -> IResult<O>,
{
    let start_remaining = input.eof_offset();

    match f(input) {
        Ok(o) => Ok(o),
        Err(ErrMode::Backtrack(mut e)) | Err(ErrMode::Cut(mut e)) => {
            e.push(Context::StartOffset(start_remaining));
            Err(ErrMode::Cut(e))
        }
        Err(e) => Err(e),
    }
}

/// Build a Cut error; the enclosing `cut_err` supplies the start offset.
fn syntax_error(
    code: ErrorCode,
    label: &'static str,
    help: Option<&'static str>,
) -> ErrMode<ContextError<Context>> {
    let mut e = ContextError::new();
    e.push(Context::Code(code));
    e.push(Context::Label(label));
    if let Some(help) = help {
        e.push(Context::Help(help));
    }
    ErrMode::Cut(e)
}

/// Build a Cut error starting at a specific StartOffset value.
fn syntax_error_from_offset(
    start_offset: usize,
    code: ErrorCode,
    label: &'static str,
    help: Option<&'static str>,
) -> ErrMode<ContextError<Context>> {
    let mut e = ContextError::new();
    e.push(Context::StartOffset(start_offset));
    e.push(Context::Code(code));
    e.push(Context::Label(label));
    if let Some(help) = help {
        e.push(Context::Help(help));
    }
    ErrMode::Cut(e)
}

/// Attach a secondary label to a Cut or Backtrack error.
fn push_related(err: &mut ErrMode<ContextError<Context>>, span: Span, label: &'static str) {
    if let ErrMode::Backtrack(e) | ErrMode::Cut(e) = err {
        e.push(Context::Related(span, label));
    }
}

fn backtrack() -> ErrMode<ContextError<Context>> {
    ErrMode::Backtrack(ContextError::new())
}

/// Look at the next token without consuming it.
fn peek_token(input: &mut Input<'_>) -> IResult<Option<PositionedToken>> {
    let token: Option<&PositionedToken> = opt(peek(any)).parse_next(input)?;
    Ok(token.copied())
}

/// Parse one whitespace token
fn whitespace(input: &mut Input<'_>) -> IResult<Span> {
    any.verify_map(|token: &PositionedToken| token.is_whitespace().then_some(token.span))
        .parse_next(input)
}

/// Parse zero or more whitespace tokens
fn ws0(input: &mut Input<'_>) -> IResult<()> {
    repeat(0.., whitespace).parse_next(input)
}

fn plus(input: &mut Input<'_>) -> IResult<Span> {
    any.verify_map(|token: &PositionedToken| {
        matches!(token.token, Token::Plus).then_some(token.span)
    })
    .parse_next(input)
}

fn minus(input: &mut Input<'_>) -> IResult<Span> {
    any.verify_map(|token: &PositionedToken| {
        matches!(token.token, Token::Minus).then_some(token.span)
    })
    .parse_next(input)
}

fn sign(input: &mut Input<'_>) -> IResult<Spanned<Sign>> {
    any.verify_map(|token: &PositionedToken| match token.token {
        Token::Plus => Some(Spanned::new(Sign::Plus, token.span)),
        Token::Minus => Some(Spanned::new(Sign::Minus, token.span)),
        _ => None,
    })
    .parse_next(input)
}

/// Parse an integer literal as a non-negative `i64`.
fn integer(input: &mut Input<'_>) -> IResult<Spanned<i64>> {
    any.verify_map(|token: &PositionedToken| match token.token {
        Token::Integer(value) => i64::try_from(value)
            .ok()
            .map(|value| Spanned::new(value, token.span)),
        _ => None,
    })
    .parse_next(input)
}

fn symbol(input: &mut Input<'_>) -> IResult<Spanned<Symbol>> {
    any.verify_map(|token: &PositionedToken| match token.token {
        Token::Symbol(symbol) => Some(Spanned::new(symbol, token.span)),
        _ => None,
    })
    .parse_next(input)
}

fn left_paren(input: &mut Input<'_>) -> IResult<Span> {
    any.verify_map(|token: &PositionedToken| {
        matches!(token.token, Token::LeftParen).then_some(token.span)
    })
    .parse_next(input)
}

fn right_paren(input: &mut Input<'_>) -> IResult<Span> {
    any.verify_map(|token: &PositionedToken| {
        matches!(token.token, Token::RightParen).then_some(token.span)
    })
    .parse_next(input)
}

/// Parse the separator following a term.
///
/// Returns `None` when no `+` follows and whitespace (if any) runs up to a
/// `)` or the end of input. Whether a space next to a parenthesis is
/// significant is decided by [`sequence`].
fn separator(input: &mut Input<'_>) -> IResult<Option<Spanned<Separator>>> {
    let leading = opt(whitespace).parse_next(input)?;

    if let Some(plus_span) = opt(plus).parse_next(input)? {
        let trailing = opt(whitespace).parse_next(input)?;
        let span = [leading, trailing]
            .into_iter()
            .flatten()
            .fold(plus_span, |acc, span| acc.union(span));
        return Ok(Some(Spanned::new(Separator::Plus, span)));
    }

    match (leading, peek_token(input)?) {
        (Some(span), Some(next)) if next.token != Token::RightParen => {
            Ok(Some(Spanned::new(Separator::Space, span)))
        }
        _ => Ok(None),
    }
}

/// Build a dot cluster from the prefix read before its symbol.
fn dot_cluster(
    sign: Option<Sign>,
    negated: bool,
    count: Option<i64>,
    symbol: Symbol,
) -> IResult<DotCluster> {
    match (sign, negated, count) {
        (_, _, None) => Err(syntax_error(
            ErrorCode::E100,
            "expected a count before the symbol",
            Some("write `1•` for a single dot"),
        )),
        (None, false, Some(count)) => Ok(DotCluster::new(count, symbol)),
        (Some(Sign::Minus), false, Some(0)) => Err(syntax_error(
            ErrorCode::E100,
            "a negative count cannot be zero",
            Some("write `0` without a sign"),
        )),
        (Some(Sign::Minus), false, Some(count)) => Ok(DotCluster::new(-count, symbol)),
        (Some(Sign::Plus), false, Some(_)) => Err(syntax_error(
            ErrorCode::E100,
            "a cluster count cannot carry a `+` sign",
            Some("write the count without a sign"),
        )),
        (_, true, Some(_)) => Err(syntax_error(
            ErrorCode::E100,
            "a cluster count takes at most one sign",
            None,
        )),
    }
}

/// Parse a dot cluster or a signed group.
///
/// Backtracks when the next token cannot start a term. Once a term has
/// started, every failure is a Cut error spanning the term.
fn term(input: &mut Input<'_>, config: &ParserConfig, depth: usize) -> IResult<Spanned<Term>> {
    let Some(first) = peek_token(input)? else {
        return Err(backtrack());
    };
    if !matches!(
        first.token,
        Token::Integer(_) | Token::Plus | Token::Minus | Token::LeftParen
    ) {
        return Err(backtrack());
    }

    cut_err(input, |input| {
        let sign = opt(sign).parse_next(input)?;
        let negation = match sign {
            Some(_) => opt(minus).parse_next(input)?,
            None => None,
        };
        let count = opt(integer).parse_next(input)?;

        match peek_token(input)?.map(|token| token.token) {
            Some(Token::Symbol(_)) => {
                let symbol = symbol.parse_next(input)?;
                let cluster = dot_cluster(
                    sign.map(Spanned::into_inner),
                    negation.is_some(),
                    count.map(Spanned::into_inner),
                    symbol.into_inner(),
                )?;
                Ok(Spanned::new(
                    Term::Cluster(cluster),
                    first.span.union(symbol.span()),
                ))
            }
            Some(Token::LeftParen) => {
                let magnitude = match (negation, count) {
                    (Some(_), None) => {
                        return Err(syntax_error(
                            ErrorCode::E100,
                            "expected a count after `-`",
                            Some("write `--3(…)` to negate a magnitude"),
                        ));
                    }
                    (Some(minus_span), Some(count)) => {
                        Some(Spanned::new(-*count.inner(), minus_span.union(count.span())))
                    }
                    (None, count) => count,
                };
                let group = group(input, config, depth)?;
                let span = first.span.union(group.span());
                Ok(Spanned::new(
                    Term::Group(SignedGroup::new(sign, magnitude, group)),
                    span,
                ))
            }
            _ if count.is_some() => Err(syntax_error(
                ErrorCode::E100,
                "expected a symbol or `(` after the count",
                Some("write `3•` for three dots or `3(…)` for a scaled group"),
            )),
            _ => Err(syntax_error(
                ErrorCode::E100,
                "expected a count or `(` after the sign",
                None,
            )),
        }
    })
}

/// Parse a parenthesized group whose body sits at `depth + 1`.
fn group(input: &mut Input<'_>, config: &ParserConfig, depth: usize) -> IResult<Spanned<Group>> {
    let start = input.eof_offset();
    let open = left_paren.parse_next(input)?;

    if depth >= config.max_depth() {
        return Err(syntax_error_from_offset(
            start,
            ErrorCode::E104,
            "groups are nested too deeply",
            Some("raise `max_depth` in the `[parser]` configuration section"),
        ));
    }

    let body = sequence(input, config, depth + 1)?;

    match peek_token(input)?.map(|token| token.token) {
        Some(Token::RightParen) => {
            let close = right_paren.parse_next(input)?;
            Ok(Spanned::new(Group::new(body), open.union(close)))
        }
        None => Err(syntax_error_from_offset(
            start,
            ErrorCode::E101,
            "this group is never closed",
            Some("add a closing `)`"),
        )),
        Some(_) => {
            let mut err = syntax_error_from_offset(
                input.eof_offset(),
                ErrorCode::E100,
                "expected `)` to close the group",
                None,
            );
            push_related(&mut err, open, "group opened here");
            Err(err)
        }
    }
}

/// Parse a possibly empty sequence of terms.
///
/// Stops before a `)`, at the end of input, or before a token that cannot
/// continue the sequence; the caller decides whether that token is an error.
fn sequence(
    input: &mut Input<'_>,
    config: &ParserConfig,
    depth: usize,
) -> IResult<DotClusterSequence> {
    ws0.parse_next(input)?;

    let Some(first) = opt(|input: &mut Input<'_>| term(input, config, depth)).parse_next(input)?
    else {
        return Ok(DotClusterSequence::default());
    };

    let mut terms = vec![first];
    let mut separators = Vec::new();

    loop {
        let previous_closes = terms.last().is_some_and(|term| term.ends_with_paren());
        let separator = separator.parse_next(input)?;
        let next_opens = matches!(
            peek_token(input)?.map(|token| token.token),
            Some(Token::LeftParen)
        );

        // Whitespace touching a parenthesis is insignificant.
        let separator = match separator {
            Some(space) if *space.inner() == Separator::Space && (previous_closes || next_opens) => {
                None
            }
            separator => separator,
        };

        let next = match separator {
            Some(_) => match opt(|input: &mut Input<'_>| term(input, config, depth))
                .parse_next(input)?
            {
                Some(next) => next,
                None => {
                    return Err(syntax_error_from_offset(
                        input.eof_offset(),
                        ErrorCode::E100,
                        "expected a term after the separator",
                        None,
                    ));
                }
            },
            None => match peek_token(input)?.map(|token| token.token) {
                Some(Token::LeftParen) => term(input, config, depth)?,
                Some(Token::Integer(_) | Token::Minus) if previous_closes => {
                    term(input, config, depth)?
                }
                Some(Token::Integer(_) | Token::Minus) => {
                    let mut err = syntax_error_from_offset(
                        input.eof_offset(),
                        ErrorCode::E102,
                        "missing separator before this term",
                        Some("separate clusters with whitespace (`1• 2★`) or `+` (`1•+2★`)"),
                    );
                    if let Some(previous) = terms.last() {
                        push_related(&mut err, previous.span(), "previous term ends here");
                    }
                    return Err(err);
                }
                _ => break,
            },
        };

        separators.push(separator);
        terms.push(next);
    }
    separators.push(None);

    let entries = terms
        .into_iter()
        .zip(separators)
        .map(|(term, separator)| Entry::new(term, separator))
        .collect();

    Ok(DotClusterSequence::new(entries))
}

/// Parse the whole token stream.
fn signed_group_sequence(
    input: &mut Input<'_>,
    config: &ParserConfig,
) -> IResult<SignedGroupSequence> {
    let body = sequence(input, config, 0)?;

    match peek_token(input)?.map(|token| token.token) {
        None => Ok(SignedGroupSequence::new(body)),
        Some(Token::RightParen) => Err(syntax_error_from_offset(
            input.eof_offset(),
            ErrorCode::E101,
            "unmatched `)`",
            Some("remove it or add a matching `(` before it"),
        )),
        Some(_) => Err(syntax_error_from_offset(
            input.eof_offset(),
            ErrorCode::E103,
            "unexpected input after the last term",
            Some("a symbol needs a count in front of it, as in `1•`"),
        )),
    }
}

/// Compute the span a diagnostic should point at.
///
/// Covers the tokens consumed since the error started, or the offending
/// token when nothing was consumed, or the last token at end of input.
fn error_span(tokens: &[PositionedToken], start_offset: usize, end_offset: usize) -> Span {
    let last_meaningful = |slice: &[PositionedToken]| {
        slice
            .iter()
            .rev()
            .find(|t| !t.is_whitespace())
            .or(slice.last())
            .map(|t| t.span)
    };

    if start_offset < end_offset {
        let slice = &tokens[start_offset..end_offset];
        let first = slice
            .iter()
            .find(|t| !t.is_whitespace())
            .map(|t| t.span)
            .unwrap_or(slice[0].span);
        last_meaningful(slice).map_or(first, |last| first.union(last))
    } else if end_offset < tokens.len() {
        tokens[end_offset].span
    } else {
        last_meaningful(tokens).unwrap_or_default()
    }
}

/// Utility function to convert winnow errors to our custom error format
///
/// Extracts position information from error context (StartOffset) and calculates
/// precise error spans using the token array.
fn convert_error(
    error: ErrMode<ContextError<Context>>,
    tokens: &[PositionedToken],
    current_remaining: usize,
) -> Diagnostic {
    let context = match error {
        ErrMode::Backtrack(e) | ErrMode::Cut(e) => e,
        // Not produced: the token slice is never partial.
        ErrMode::Incomplete(_) => ContextError::new(),
    };

    let start_remaining = context.context().find_map(|ctx| match ctx {
        Context::StartOffset(n) => Some(*n),
        _ => None,
    });
    let code = context
        .context()
        .find_map(|ctx| match ctx {
            Context::Code(code) => Some(*code),
            _ => None,
        })
        .unwrap_or(ErrorCode::E100);
    let message = context
        .context()
        .find_map(|ctx| match ctx {
            Context::Label(label) => Some(*label),
            _ => None,
        })
        .unwrap_or_else(|| code.description());
    let help = context.context().find_map(|ctx| match ctx {
        Context::Help(help) => Some(*help),
        _ => None,
    });
    let related: Vec<_> = context
        .context()
        .filter_map(|ctx| match ctx {
            Context::Related(span, label) => Some((*span, *label)),
            _ => None,
        })
        .collect();

    // Calculate offsets from remaining token counts
    let end_offset = tokens.len() - current_remaining;
    let start_offset = start_remaining
        .map(|r| tokens.len() - r)
        .unwrap_or(end_offset);

    let span = error_span(tokens, start_offset, end_offset);

    let mut diagnostic = Diagnostic::error(message)
        .with_code(code)
        .with_label(span, code.description());
    for (span, label) in related {
        diagnostic = diagnostic.with_secondary_label(span, label);
    }
    if let Some(help) = help {
        diagnostic = diagnostic.with_help(help);
    }
    diagnostic
}

/// Build a syntax tree from tokens
pub fn build_sequence(
    tokens: &[PositionedToken],
    config: &ParserConfig,
) -> Result<SignedGroupSequence, Diagnostic> {
    let mut token_slice = TokenSlice::new(tokens);

    match signed_group_sequence(&mut token_slice, config) {
        Ok(sequence) => Ok(sequence),
        Err(e) => {
            let current_remaining = token_slice.eof_offset();
            Err(convert_error(e, tokens, current_remaining))
        }
    }
}
