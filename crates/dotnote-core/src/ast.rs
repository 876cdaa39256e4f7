//! Syntax tree for dot notation.
//!
//! The tree is produced by the parser and consumed by the layout resolver.
//! Ownership is strictly hierarchical: every node is owned by its parent and
//! nothing is shared.
//!
//! ```text
//! SignedGroupSequence
//!   └─ DotClusterSequence
//!        └─ Entry*  ── Term ── DotCluster
//!                          └── SignedGroup ── Group ── DotClusterSequence ...
//! ```
//!
//! # Canonical printing
//!
//! Every node implements [`Display`](fmt::Display) as canonical notation:
//! a [`Separator::Space`] prints as a single space, [`Separator::Plus`] as
//! `+`, and a juxtaposition (no separator) prints nothing. Parsing the
//! printed text of a parsed tree yields an equal tree.

use std::fmt;

use serde::Serialize;

use crate::{
    span::{Span, Spanned},
    symbol::Symbol,
};

/// Sign of a dot or of a whole group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Sign {
    Plus,
    Minus,
}

impl Sign {
    /// The sign flag of a dot drawn for a cluster with `count` repetitions.
    ///
    /// Zero counts as [`Sign::Plus`].
    pub fn of(count: i64) -> Self {
        if count < 0 { Sign::Minus } else { Sign::Plus }
    }

    /// Returns `true` for [`Sign::Minus`].
    pub fn is_negative(self) -> bool {
        matches!(self, Sign::Minus)
    }

    /// The character used for this sign in notation text.
    pub fn as_char(self) -> char {
        match self {
            Sign::Plus => '+',
            Sign::Minus => '-',
        }
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// How a term relates to the term that follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Separator {
    /// Whitespace: the two terms are packed next to each other.
    Space,
    /// `+`: an explicit union with a visible boundary.
    Plus,
}

impl fmt::Display for Separator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Separator::Space => write!(f, " "),
            Separator::Plus => write!(f, "+"),
        }
    }
}

/// `count` repetitions of `symbol`.
///
/// A negative count is a visual marker (the dots are drawn inverted or
/// crossed out), not an arithmetic quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DotCluster {
    count: i64,
    symbol: Symbol,
}

impl DotCluster {
    pub fn new(count: i64, symbol: Symbol) -> Self {
        Self { count, symbol }
    }

    pub fn count(&self) -> i64 {
        self.count
    }

    pub fn symbol(&self) -> Symbol {
        self.symbol
    }

    /// Number of dots drawn for this cluster.
    pub fn magnitude(&self) -> u64 {
        self.count.unsigned_abs()
    }

    /// Sign flag carried by every dot of this cluster.
    pub fn sign(&self) -> Sign {
        Sign::of(self.count)
    }
}

impl fmt::Display for DotCluster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.count, self.symbol)
    }
}

/// A parenthesized sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Group {
    body: DotClusterSequence,
}

impl Group {
    pub fn new(body: DotClusterSequence) -> Self {
        Self { body }
    }

    pub fn body(&self) -> &DotClusterSequence {
        &self.body
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", self.body)
    }
}

/// A group optionally prefixed by a sign and/or a magnitude.
///
/// The magnitude is only ever negative when a sign precedes it (`--3(…)`);
/// a single leading `-` is always read as the group's sign.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignedGroup {
    sign: Option<Spanned<Sign>>,
    magnitude: Option<Spanned<i64>>,
    group: Spanned<Group>,
}

impl SignedGroup {
    pub fn new(
        sign: Option<Spanned<Sign>>,
        magnitude: Option<Spanned<i64>>,
        group: Spanned<Group>,
    ) -> Self {
        Self {
            sign,
            magnitude,
            group,
        }
    }

    /// A group with neither sign nor magnitude.
    pub fn plain(group: Spanned<Group>) -> Self {
        Self::new(None, None, group)
    }

    pub fn sign(&self) -> Option<Sign> {
        self.sign.as_ref().map(|sign| *sign.inner())
    }

    pub fn magnitude(&self) -> Option<i64> {
        self.magnitude.as_ref().map(|magnitude| *magnitude.inner())
    }

    /// Span of the sign, if present.
    pub fn sign_span(&self) -> Option<Span> {
        self.sign.as_ref().map(Spanned::span)
    }

    /// Span of the magnitude, if present.
    pub fn magnitude_span(&self) -> Option<Span> {
        self.magnitude.as_ref().map(Spanned::span)
    }

    pub fn group(&self) -> &Spanned<Group> {
        &self.group
    }

    /// Returns `true` when the group is negated as a whole, either by a `-`
    /// sign or by a negative magnitude.
    pub fn is_negated(&self) -> bool {
        self.sign().is_some_and(Sign::is_negative) || self.magnitude().is_some_and(|m| m < 0)
    }

    /// Returns `true` when the text of this group starts with `(`.
    fn starts_with_paren(&self) -> bool {
        self.sign.is_none() && self.magnitude.is_none()
    }
}

impl fmt::Display for SignedGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(sign) = &self.sign {
            write!(f, "{sign}")?;
        }
        if let Some(magnitude) = &self.magnitude {
            write!(f, "{magnitude}")?;
        }
        write!(f, "{}", self.group)
    }
}

/// One item of a sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Term {
    Cluster(DotCluster),
    Group(SignedGroup),
}

impl Term {
    pub fn as_cluster(&self) -> Option<&DotCluster> {
        match self {
            Term::Cluster(cluster) => Some(cluster),
            Term::Group(_) => None,
        }
    }

    pub fn as_group(&self) -> Option<&SignedGroup> {
        match self {
            Term::Cluster(_) => None,
            Term::Group(group) => Some(group),
        }
    }

    /// Returns `true` when this term's text ends with `)`.
    pub fn ends_with_paren(&self) -> bool {
        matches!(self, Term::Group(_))
    }

    /// Returns `true` when this term's text starts with `(`.
    pub fn starts_with_paren(&self) -> bool {
        match self {
            Term::Cluster(_) => false,
            Term::Group(group) => group.starts_with_paren(),
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Cluster(cluster) => cluster.fmt(f),
            Term::Group(group) => group.fmt(f),
        }
    }
}

/// A term and the separator that links it to the next term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    term: Spanned<Term>,
    separator: Option<Spanned<Separator>>,
}

impl Entry {
    pub fn new(term: Spanned<Term>, separator: Option<Spanned<Separator>>) -> Self {
        Self { term, separator }
    }

    pub fn term(&self) -> &Spanned<Term> {
        &self.term
    }

    /// The separator following this term.
    ///
    /// `None` on the last entry of a sequence, and on a juxtaposition where a
    /// parenthesis touches the boundary, as in `(1•)(2★)`.
    pub fn separator(&self) -> Option<Separator> {
        self.separator.as_ref().map(|separator| *separator.inner())
    }

    pub fn separator_span(&self) -> Option<Span> {
        self.separator.as_ref().map(Spanned::span)
    }
}

/// An ordered, possibly empty, sequence of terms.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DotClusterSequence {
    entries: Vec<Entry>,
}

impl DotClusterSequence {
    pub fn new(entries: Vec<Entry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the terms, in textual order.
    pub fn terms(&self) -> impl Iterator<Item = &Spanned<Term>> {
        self.entries.iter().map(Entry::term)
    }

    /// Iterate over the clusters directly in this sequence (not nested ones).
    pub fn clusters(&self) -> impl Iterator<Item = &DotCluster> {
        self.terms().filter_map(|term| term.as_cluster())
    }

    /// Iterate over the groups directly in this sequence (not nested ones).
    pub fn groups(&self) -> impl Iterator<Item = &SignedGroup> {
        self.terms().filter_map(|term| term.as_group())
    }
}

impl fmt::Display for DotClusterSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, entry) in self.entries.iter().enumerate() {
            write!(f, "{}", entry.term)?;
            if idx + 1 < self.entries.len() {
                if let Some(separator) = entry.separator() {
                    write!(f, "{separator}")?;
                }
            }
        }
        Ok(())
    }
}

/// The root of every parse.
///
/// Conforming notation is a run of signed groups (`(1•)(2★ 3•)`); bare
/// clusters are also accepted at the top level (`3•`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SignedGroupSequence {
    body: DotClusterSequence,
}

impl SignedGroupSequence {
    pub fn new(body: DotClusterSequence) -> Self {
        Self { body }
    }

    pub fn body(&self) -> &DotClusterSequence {
        &self.body
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Iterate over the top-level terms.
    pub fn terms(&self) -> impl Iterator<Item = &Spanned<Term>> {
        self.body.terms()
    }

    /// Iterate over the top-level signed groups.
    pub fn groups(&self) -> impl Iterator<Item = &SignedGroup> {
        self.body.groups()
    }

    /// Total number of dots the sequence expands to, saturating at
    /// `u64::MAX`.
    pub fn dot_count(&self) -> u64 {
        count_dots(&self.body)
    }
}

impl fmt::Display for SignedGroupSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.body.fmt(f)
    }
}

fn count_dots(sequence: &DotClusterSequence) -> u64 {
    sequence
        .terms()
        .map(|term| match term.inner() {
            Term::Cluster(cluster) => cluster.magnitude(),
            Term::Group(group) => count_dots(group.group().body()),
        })
        .fold(0, u64::saturating_add)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sym(glyph: char) -> Symbol {
        Symbol::new(glyph).unwrap()
    }

    fn spanned<T>(value: T) -> Spanned<T> {
        Spanned::new(value, Span::default())
    }

    fn cluster(count: i64, glyph: char) -> Spanned<Term> {
        spanned(Term::Cluster(DotCluster::new(count, sym(glyph))))
    }

    fn group(entries: Vec<Entry>) -> Spanned<Term> {
        spanned(Term::Group(SignedGroup::plain(spanned(Group::new(
            DotClusterSequence::new(entries),
        )))))
    }

    #[test]
    fn test_dot_cluster_sign_and_magnitude() {
        let negative = DotCluster::new(-2, sym('•'));
        assert_eq!(negative.sign(), Sign::Minus);
        assert_eq!(negative.magnitude(), 2);

        let zero = DotCluster::new(0, sym('•'));
        assert_eq!(zero.sign(), Sign::Plus);
        assert_eq!(zero.magnitude(), 0);

        let extreme = DotCluster::new(i64::MIN + 1, sym('•'));
        assert_eq!(extreme.magnitude(), i64::MAX as u64);
    }

    #[test]
    fn test_display_group_with_separators() {
        let sequence = DotClusterSequence::new(vec![
            Entry::new(cluster(1, '•'), Some(spanned(Separator::Space))),
            Entry::new(cluster(2, '★'), Some(spanned(Separator::Plus))),
            Entry::new(cluster(-3, '○'), None),
        ]);
        let root = SignedGroupSequence::new(DotClusterSequence::new(vec![Entry::new(
            spanned(Term::Group(SignedGroup::plain(spanned(Group::new(sequence))))),
            None,
        )]));

        assert_eq!(root.to_string(), "(1• 2★+-3○)");
    }

    #[test]
    fn test_display_signed_group() {
        let signed = SignedGroup::new(
            Some(spanned(Sign::Minus)),
            Some(spanned(-3)),
            spanned(Group::default()),
        );
        assert_eq!(signed.to_string(), "--3()");
        assert!(signed.is_negated());

        let scaled = SignedGroup::new(None, Some(spanned(2)), spanned(Group::default()));
        assert_eq!(scaled.to_string(), "2()");
        assert!(!scaled.is_negated());
    }

    #[test]
    fn test_display_juxtaposed_groups() {
        let root = DotClusterSequence::new(vec![
            Entry::new(group(vec![]), None),
            Entry::new(group(vec![Entry::new(cluster(1, '•'), None)]), None),
        ]);
        assert_eq!(root.to_string(), "()(1•)");
    }

    #[test]
    fn test_display_plus_signed_group_after_union() {
        let plus_group = spanned(Term::Group(SignedGroup::new(
            Some(spanned(Sign::Plus)),
            None,
            spanned(Group::default()),
        )));
        let root = DotClusterSequence::new(vec![
            Entry::new(group(vec![]), Some(spanned(Separator::Plus))),
            Entry::new(plus_group, None),
        ]);
        assert_eq!(root.to_string(), "()++()");
    }

    #[test]
    fn test_dot_count_includes_nested_groups() {
        let root = SignedGroupSequence::new(DotClusterSequence::new(vec![
            Entry::new(cluster(3, '•'), Some(spanned(Separator::Space))),
            Entry::new(
                group(vec![
                    Entry::new(cluster(-2, '★'), Some(spanned(Separator::Space))),
                    Entry::new(group(vec![Entry::new(cluster(4, '•'), None)]), None),
                ]),
                None,
            ),
        ]));
        assert_eq!(root.dot_count(), 9);
        assert_eq!(root.groups().count(), 1);
        assert_eq!(root.body().clusters().count(), 1);
    }

    #[test]
    fn test_term_paren_edges() {
        assert!(group(vec![]).starts_with_paren());
        assert!(group(vec![]).ends_with_paren());
        assert!(!cluster(1, '•').starts_with_paren());

        let scaled = Term::Group(SignedGroup::new(None, Some(spanned(2)), spanned(Group::default())));
        assert!(!scaled.starts_with_paren());
        assert!(scaled.ends_with_paren());
    }
}
