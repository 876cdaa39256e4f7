//! The positioned output of the layout resolver.
//!
//! A [`Layout`] is an ordered list of drawable dots plus the boundaries of the
//! groups enclosing them and the markers for explicit unions. Everything is
//! placed on the abstract grid described in [`geometry`](crate::geometry).
//! Renderers read a layout; they never need the syntax tree.

use std::ops::Range;

use indexmap::IndexMap;
use serde::Serialize;

use crate::{
    ast::Sign,
    geometry::{ColumnRange, GridPoint},
    identifier::{ElementId, GroupId},
    span::Span,
    symbol::Symbol,
};

/// One drawable dot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LayoutElement {
    id: ElementId,
    position: GridPoint,
    symbol: Symbol,
    sign: Sign,
    group_path: Vec<GroupId>,
    source: Span,
}

impl LayoutElement {
    /// Create an element.
    ///
    /// `group_path` lists the enclosing groups, outermost first, and its
    /// length must equal the depth of `position`.
    pub fn new(
        id: ElementId,
        position: GridPoint,
        symbol: Symbol,
        sign: Sign,
        group_path: Vec<GroupId>,
        source: Span,
    ) -> Self {
        debug_assert_eq!(group_path.len(), position.depth());
        Self {
            id,
            position,
            symbol,
            sign,
            group_path,
            source,
        }
    }

    pub fn id(&self) -> ElementId {
        self.id
    }

    pub fn position(&self) -> GridPoint {
        self.position
    }

    pub fn symbol(&self) -> Symbol {
        self.symbol
    }

    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// Enclosing groups, outermost first.
    pub fn group_path(&self) -> &[GroupId] {
        &self.group_path
    }

    /// The innermost enclosing group, if any.
    pub fn group(&self) -> Option<GroupId> {
        self.group_path.last().copied()
    }

    /// Span of the cluster this dot was expanded from.
    pub fn source(&self) -> Span {
        self.source
    }
}

/// The extent of one group on the grid.
///
/// Recorded for every group, including empty ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupBoundary {
    id: GroupId,
    parent: Option<GroupId>,
    depth: usize,
    sign: Option<Sign>,
    magnitude: Option<i64>,
    columns: ColumnRange,
    elements: Range<usize>,
    source: Span,
}

impl GroupBoundary {
    /// Create a group boundary.
    ///
    /// `depth` is the depth of the group's contents: a top-level group has
    /// depth 1.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: GroupId,
        parent: Option<GroupId>,
        depth: usize,
        sign: Option<Sign>,
        magnitude: Option<i64>,
        columns: ColumnRange,
        elements: Range<usize>,
        source: Span,
    ) -> Self {
        Self {
            id,
            parent,
            depth,
            sign,
            magnitude,
            columns,
            elements,
            source,
        }
    }

    pub fn id(&self) -> GroupId {
        self.id
    }

    /// The directly enclosing group, `None` at the top level.
    pub fn parent(&self) -> Option<GroupId> {
        self.parent
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn sign(&self) -> Option<Sign> {
        self.sign
    }

    pub fn magnitude(&self) -> Option<i64> {
        self.magnitude
    }

    /// Columns covered by the group, padding included.
    pub fn columns(&self) -> ColumnRange {
        self.columns
    }

    /// Indices into [`Layout::elements`] of every dot inside the group,
    /// nested groups included.
    pub fn elements(&self) -> Range<usize> {
        self.elements.clone()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Span of the signed group, from its sign to its closing parenthesis.
    pub fn source(&self) -> Span {
        self.source
    }
}

/// Marks an explicit `+` union between two neighbouring terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UnionMarker {
    column: usize,
    depth: usize,
    group: Option<GroupId>,
    source: Span,
}

impl UnionMarker {
    pub fn new(column: usize, depth: usize, group: Option<GroupId>, source: Span) -> Self {
        Self {
            column,
            depth,
            group,
            source,
        }
    }

    /// Column in the middle of the union gap.
    pub fn column(&self) -> usize {
        self.column
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// The group whose sequence holds the union, `None` at the top level.
    pub fn group(&self) -> Option<GroupId> {
        self.group
    }

    pub fn source(&self) -> Span {
        self.source
    }
}

/// A fully resolved layout.
///
/// Elements are in draw order; `elements()[i].id().index() == i`. Groups are
/// keyed by id in pre-order, so iteration visits a parent before its
/// children.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Layout {
    elements: Vec<LayoutElement>,
    groups: IndexMap<GroupId, GroupBoundary>,
    unions: Vec<UnionMarker>,
    width: usize,
}

impl Layout {
    pub fn new(
        elements: Vec<LayoutElement>,
        groups: IndexMap<GroupId, GroupBoundary>,
        unions: Vec<UnionMarker>,
        width: usize,
    ) -> Self {
        Self {
            elements,
            groups,
            unions,
            width,
        }
    }

    pub fn elements(&self) -> &[LayoutElement] {
        &self.elements
    }

    pub fn groups(&self) -> &IndexMap<GroupId, GroupBoundary> {
        &self.groups
    }

    pub fn group(&self, id: GroupId) -> Option<&GroupBoundary> {
        self.groups.get(&id)
    }

    pub fn unions(&self) -> &[UnionMarker] {
        &self.unions
    }

    /// Total number of grid columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Deepest group nesting in the layout.
    pub fn depth(&self) -> usize {
        self.groups
            .values()
            .map(GroupBoundary::depth)
            .max()
            .unwrap_or(0)
    }

    /// Returns `true` when the layout holds neither dots nor groups.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty() && self.groups.is_empty()
    }

    /// The dots enclosed by a group, nested groups included.
    ///
    /// Returns an empty slice for an unknown id.
    pub fn elements_in(&self, id: GroupId) -> &[LayoutElement] {
        match self.groups.get(&id) {
            Some(boundary) => &self.elements[boundary.elements()],
            None => &[],
        }
    }
}
