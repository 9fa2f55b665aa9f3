//! Intermediate representation for Stanza block styling.
//!
//! This crate owns the style/effect override model behind the Stanza
//! section editor: sparse property bags layered per breakpoint and
//! interaction state, per-trigger animation effects with symmetric
//! keyframe pairs, preset application, per-child overrides, and stagger
//! sequencing. Everything here is a synchronous, in-memory value
//! transformation; rendering, playback, and persistence are collaborators
//! that consume the resolved output.

pub mod block;
pub mod effect;
pub mod error;
pub mod style;

pub use block::{BlockStyle, EditScope, EffectStack};
pub use error::{Result, StyleError};
