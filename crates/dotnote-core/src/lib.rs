//! Dotnote Core Types and Definitions
//!
//! This crate provides the foundational types shared by the dot notation
//! parser and the layout resolver. It includes:
//!
//! - **Spans**: Source locations attached to syntax tree nodes ([`span`] module)
//! - **Symbols**: Glyph classification and the [`symbol::Symbol`] type
//! - **Syntax tree**: Dot clusters, groups and sequences ([`ast`] module)
//! - **Identifiers**: Group and element identifiers ([`identifier`] module)
//! - **Geometry**: Abstract grid coordinates ([`geometry`] module)
//! - **Layout**: The positioned output consumed by renderers ([`layout`] module)

pub mod ast;
pub mod geometry;
pub mod identifier;
pub mod layout;
pub mod span;
pub mod symbol;
