//! Layout resolver for dot notation.
//!
//! This module walks a parsed [`SignedGroupSequence`](dotnote_core::ast::SignedGroupSequence)
//! and places every dot on an abstract integer grid. The result is a
//! [`Layout`]: drawable elements in textual order, one boundary per group and
//! one marker per explicit union. Concrete drawing is left to renderers.
//!
//! # Pipeline Position
//!
//! ```text
//! Notation text
//!     ↓ dotnote_parser::parse
//! SignedGroupSequence
//!     ↓ layout (this module)
//! Layout
//!     ↓ export
//! JSON
//! ```
//!
//! # Submodules
//!
//! - [`positioning`] - Column bookkeeping shared by the resolver
//! - `resolver` - The traversal that builds a [`Layout`]

pub mod positioning;
mod resolver;

pub use dotnote_core::layout::{GroupBoundary, Layout, LayoutElement, UnionMarker};
pub use resolver::Resolver;
