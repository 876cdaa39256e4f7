//! Serialization of resolved layouts.
//!
//! The JSON document mirrors [`Layout`]: an `elements` array in draw order,
//! a `groups` object keyed by group id in pre-order, a `unions` array and the
//! total grid `width`.

use dotnote_core::layout::Layout;

use crate::error::DotNoteError;

/// Serialize a layout as pretty-printed JSON.
///
/// # Errors
///
/// Returns [`DotNoteError::Export`] if serialization fails.
pub fn to_json(layout: &Layout) -> Result<String, DotNoteError> {
    serde_json::to_string_pretty(layout).map_err(|err| DotNoteError::Export(Box::new(err)))
}
