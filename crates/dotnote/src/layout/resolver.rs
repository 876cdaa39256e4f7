//! Traversal that turns a syntax tree into a [`Layout`].

use indexmap::IndexMap;
use log::{debug, trace};

use dotnote_core::{
    ast::{DotCluster, DotClusterSequence, Separator, SignedGroup, SignedGroupSequence, Term},
    geometry::{ColumnRange, GridPoint},
    identifier::{ElementId, GroupId},
    layout::{GroupBoundary, Layout, LayoutElement, UnionMarker},
    span::{Span, Spanned},
};

use crate::{
    config::{LayoutConfig, NegativePolicy},
    error::LayoutError,
    layout::positioning::{ColumnCursor, midpoint},
};

/// Resolves syntax trees into layouts.
///
/// A resolver holds only its configuration and can be reused for any number
/// of trees.
///
/// # Examples
///
/// ```
/// # use dotnote::{config::LayoutConfig, layout::Resolver};
/// # use dotnote_parser::{ParserConfig, parse};
/// let tree = parse("(1• 2★)", ParserConfig::default()).unwrap();
/// let layout = Resolver::new(LayoutConfig::default()).resolve(&tree).unwrap();
///
/// assert_eq!(layout.elements().len(), 3);
/// assert_eq!(layout.groups().len(), 1);
/// assert_eq!(layout.width(), 6);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Resolver {
    config: LayoutConfig,
}

impl Resolver {
    pub fn new(config: LayoutConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Place every dot of `tree` on the grid.
    ///
    /// Terms are visited left to right and depth first, which fixes the draw
    /// order and the element and group identifiers.
    ///
    /// # Errors
    ///
    /// - [`LayoutError::TooManyElements`] when the tree expands to more dots
    ///   than `max_elements`; checked before any element is allocated.
    /// - [`LayoutError::NegativeMagnitudeUnsupported`] under
    ///   [`NegativePolicy::Reject`] for the first negative count, negative
    ///   magnitude or `-` group sign.
    pub fn resolve(&self, tree: &SignedGroupSequence) -> Result<Layout, LayoutError> {
        let dot_count = self.check_element_budget(tree)?;
        debug!(dot_count; "Resolving layout");

        // `dot_count` fits in `max_elements` at this point.
        let mut state = ResolveState::new(&self.config, dot_count as usize);
        state.sequence(tree.body())?;
        let layout = state.finish();

        debug!(
            elements_count = layout.elements().len(),
            groups_count = layout.groups().len(),
            unions_count = layout.unions().len(),
            width = layout.width();
            "Layout resolved"
        );
        trace!(layout:?; "Resolved layout");

        Ok(layout)
    }

    /// Returns the total dot count, or the top-level term at which the
    /// running count first exceeds the limit.
    fn check_element_budget(&self, tree: &SignedGroupSequence) -> Result<u64, LayoutError> {
        let limit = self.config.max_elements();
        let count = tree.dot_count();
        if count <= limit as u64 {
            return Ok(count);
        }

        let mut running: u64 = 0;
        let mut culprit = Span::default();
        for term in tree.terms() {
            running = running.saturating_add(term_dot_count(term));
            if running > limit as u64 {
                culprit = term.span();
                break;
            }
        }

        Err(LayoutError::TooManyElements {
            count,
            limit,
            span: culprit,
        })
    }
}

fn term_dot_count(term: &Term) -> u64 {
    match term {
        Term::Cluster(cluster) => cluster.magnitude(),
        Term::Group(group) => group
            .group()
            .body()
            .terms()
            .map(|term| term_dot_count(term))
            .fold(0, u64::saturating_add),
    }
}

/// Mutable state of one resolve pass.
struct ResolveState<'a> {
    config: &'a LayoutConfig,
    cursor: ColumnCursor,
    elements: Vec<LayoutElement>,
    groups: IndexMap<GroupId, GroupBoundary>,
    unions: Vec<UnionMarker>,
    /// Enclosing groups of the current position, outermost first.
    path: Vec<GroupId>,
}

impl<'a> ResolveState<'a> {
    fn new(config: &'a LayoutConfig, capacity: usize) -> Self {
        Self {
            config,
            cursor: ColumnCursor::new(),
            elements: Vec::with_capacity(capacity),
            groups: IndexMap::new(),
            unions: Vec::new(),
            path: Vec::new(),
        }
    }

    fn finish(self) -> Layout {
        let width = self.cursor.position();
        Layout::new(self.elements, self.groups, self.unions, width)
    }

    fn sequence(&mut self, sequence: &DotClusterSequence) -> Result<(), LayoutError> {
        let last = sequence.len().saturating_sub(1);

        for (idx, entry) in sequence.entries().iter().enumerate() {
            self.term(entry.term())?;

            // A separator after the last term has nothing to separate.
            if idx == last {
                break;
            }
            match entry.separator().zip(entry.separator_span()) {
                Some((Separator::Space, _)) => {
                    self.cursor.skip(self.config.space_gap());
                }
                Some((Separator::Plus, span)) => {
                    let gap = self.cursor.skip(self.config.union_gap());
                    self.unions.push(UnionMarker::new(
                        midpoint(gap),
                        self.path.len(),
                        self.path.last().copied(),
                        span,
                    ));
                }
                None => {}
            }
        }

        Ok(())
    }

    fn term(&mut self, term: &Spanned<Term>) -> Result<(), LayoutError> {
        match term.inner() {
            Term::Cluster(cluster) => self.cluster(cluster, term.span()),
            Term::Group(group) => self.group(group, term.span()),
        }
    }

    fn cluster(&mut self, cluster: &DotCluster, span: Span) -> Result<(), LayoutError> {
        if cluster.count() < 0 {
            self.check_negative(span)?;
        }

        if cluster.magnitude() == 0 {
            self.cursor.skip(self.config.zero_width());
            return Ok(());
        }

        for _ in 0..cluster.magnitude() {
            let id = ElementId::new(self.elements.len());
            let position = GridPoint::new(self.cursor.take(), self.path.len());
            self.elements.push(LayoutElement::new(
                id,
                position,
                cluster.symbol(),
                cluster.sign(),
                self.path.clone(),
                span,
            ));
        }

        Ok(())
    }

    fn group(&mut self, group: &SignedGroup, span: Span) -> Result<(), LayoutError> {
        if group.is_negated() {
            let culprit = group
                .sign_span()
                .filter(|_| group.sign().is_some_and(|sign| sign.is_negative()))
                .or(group.magnitude_span())
                .unwrap_or(span);
            self.check_negative(culprit)?;
        }

        let id = GroupId::new(self.groups.len());
        let parent = self.path.last().copied();
        self.path.push(id);
        let depth = self.path.len();

        let start_column = self.cursor.position();
        let first_element = self.elements.len();
        let boundary = |columns, elements| {
            GroupBoundary::new(
                id,
                parent,
                depth,
                group.sign(),
                group.magnitude(),
                columns,
                elements,
                span,
            )
        };

        // Reserve the slot so groups stay in pre-order.
        self.groups.insert(
            id,
            boundary(
                ColumnRange::new(start_column, start_column),
                first_element..first_element,
            ),
        );

        self.cursor.skip(self.config.group_padding());
        self.sequence(group.group().body())?;
        self.cursor.skip(self.config.group_padding());

        let columns = ColumnRange::new(start_column, self.cursor.position());
        self.groups
            .insert(id, boundary(columns, first_element..self.elements.len()));
        self.path.pop();

        trace!(group_id:% = id, depth, columns:?; "Group placed");
        Ok(())
    }

    fn check_negative(&self, span: Span) -> Result<(), LayoutError> {
        match self.config.negative_counts() {
            NegativePolicy::Mark => Ok(()),
            NegativePolicy::Reject => Err(LayoutError::NegativeMagnitudeUnsupported { span }),
        }
    }
}
