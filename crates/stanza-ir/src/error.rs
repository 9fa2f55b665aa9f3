//! Error types for style and effect mutations.
//!
//! All variants are non-fatal: the default API answers invalid input with
//! silent no-ops or lazy auto-creation, because edits originate from
//! inspector affordances that already constrain them. The `try_*` strict
//! variants surface the same conditions as rejected operations for testing.

use thiserror::Error;

use crate::effect::keyframes::KeyframeSide;

/// Result type for strict-mode style operations.
pub type Result<T> = std::result::Result<T, StyleError>;

/// Errors a strict-mode mutation can reject with.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StyleError {
    /// A mutation referenced a property name the catalog does not recognize.
    #[error("unknown style property: {name}")]
    UnknownProperty { name: String },

    /// A value write targeted a keyframe entry that was never added.
    #[error("no {side} keyframe entry for property: {property}")]
    MissingOverrideTarget {
        property: String,
        side: KeyframeSide,
    },

    /// A child override references an id that left the block's child list.
    ///
    /// Resolution never fails on this; the override is pruned when the
    /// child list changes and resolves as absent until then.
    #[error("child override references a removed child: {child_id}")]
    DanglingChildOverride { child_id: String },
}
