//! Per-child effect overrides and their resolution.
//!
//! A parent effect applies to every child of its block. A `ChildOverride`
//! is a sparse partial definition keyed by child id: defined fields replace
//! the parent's, undefined fields inherit. The effective per-child view is
//! computed on demand and never stored, so later parent edits keep flowing
//! to non-overridden children.
//!
//! Child ids are weak back-references: membership in the block's child list
//! is the editor's responsibility, and overrides whose child left the list
//! are pruned when the list changes (a dangling override resolves as
//! absent, never as a failure).

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use super::keyframes::KeyframeSide;
use super::{EasingSpec, EffectDefinition, EffectPreset, ScrollRange, TriggerParams};
use crate::style::bag::PropertyBag;
use crate::style::diagnostics::diagnostics_enabled;

/// Partial keyframe override: per-property, per-side patches.
///
/// A child can replace just one endpoint of one property (say, the `to`
/// side of `translate_x`) and inherit everything else from the parent pair.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KeyframePatch {
    #[serde(default)]
    pub from: PropertyBag,
    #[serde(default)]
    pub to: PropertyBag,
}

impl KeyframePatch {
    /// Whether the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        self.from.is_empty() && self.to.is_empty()
    }

    /// Fold another patch into this one (later writes win per key).
    pub fn merge_from(&mut self, other: &KeyframePatch) {
        self.from.merge_from(&other.from);
        self.to.merge_from(&other.to);
    }
}

/// A partial effect definition for one child of the block.
///
/// Every field except `child_id` is optional; `None` inherits the parent's
/// value. At most one override exists per child id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChildOverride {
    pub child_id: String,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preset: Option<EffectPreset>,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyframes: Option<KeyframePatch>,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<f32>,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay_ms: Option<f32>,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub easing: Option<EasingSpec>,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scroll_range: Option<ScrollRange>,
}

impl ChildOverride {
    /// Create an override for a child that inherits every field.
    pub fn new(child_id: impl Into<String>) -> Self {
        Self {
            child_id: child_id.into(),
            ..Self::default()
        }
    }

    /// Override the duration for this child.
    pub fn with_duration_ms(mut self, duration_ms: f32) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }

    /// Override the delay for this child.
    pub fn with_delay_ms(mut self, delay_ms: f32) -> Self {
        self.delay_ms = Some(delay_ms);
        self
    }

    /// Override the easing for this child.
    pub fn with_easing(mut self, easing: EasingSpec) -> Self {
        self.easing = Some(easing);
        self
    }

    /// Override part of the keyframe pair for this child.
    pub fn with_keyframes(mut self, patch: KeyframePatch) -> Self {
        self.keyframes = Some(patch);
        self
    }

    /// Whether the override still inherits every field.
    pub fn is_inherit_all(&self) -> bool {
        self.preset.is_none()
            && self.keyframes.as_ref().is_none_or(KeyframePatch::is_empty)
            && self.duration_ms.is_none()
            && self.delay_ms.is_none()
            && self.easing.is_none()
            && self.scroll_range.is_none()
    }
}

impl EffectDefinition {
    /// The child overrides attached to this effect.
    pub fn child_overrides(&self) -> &[ChildOverride] {
        &self.child_overrides
    }

    /// The override for a child, if one exists.
    pub fn child_override(&self, child_id: &str) -> Option<&ChildOverride> {
        self.child_overrides
            .iter()
            .find(|ov| ov.child_id == child_id)
    }

    /// The effective definition for one child.
    ///
    /// Without an override this is the parent itself, borrowed rather than
    /// copied, so parent edits made later keep applying to the child. With
    /// an override, a merged view is built on demand: defined fields
    /// replace the parent's, keyframe patches merge per property and per
    /// side.
    pub fn effective_for(&self, child_id: &str) -> Cow<'_, EffectDefinition> {
        match self.child_override(child_id) {
            None => Cow::Borrowed(self),
            Some(ov) => Cow::Owned(self.merged_with(ov)),
        }
    }

    /// Create or update the override for `patch.child_id`.
    ///
    /// On first write the child starts from full inheritance and the
    /// patch's defined fields are applied; on later writes defined fields
    /// replace the stored ones and keyframe patches accumulate. Whether
    /// the id is a live child is the editor's concern, not checked here.
    pub fn upsert_child_override(&mut self, patch: ChildOverride) {
        match self
            .child_overrides
            .iter_mut()
            .find(|ov| ov.child_id == patch.child_id)
        {
            Some(existing) => {
                if let Some(preset) = patch.preset {
                    existing.preset = Some(preset);
                }
                if let Some(duration_ms) = patch.duration_ms {
                    existing.duration_ms = Some(duration_ms);
                }
                if let Some(delay_ms) = patch.delay_ms {
                    existing.delay_ms = Some(delay_ms);
                }
                if let Some(easing) = patch.easing {
                    existing.easing = Some(easing);
                }
                if let Some(scroll_range) = patch.scroll_range {
                    existing.scroll_range = Some(scroll_range);
                }
                if let Some(keyframes) = &patch.keyframes {
                    existing
                        .keyframes
                        .get_or_insert_with(KeyframePatch::default)
                        .merge_from(keyframes);
                }
            }
            None => self.child_overrides.push(patch),
        }
    }

    /// Strict flavor of [`upsert_child_override`](Self::upsert_child_override)
    /// for editors that do validate membership: an id outside the supplied
    /// child list is rejected instead of written.
    pub fn try_upsert_child_override(
        &mut self,
        patch: ChildOverride,
        live_ids: &[&str],
    ) -> crate::error::Result<()> {
        if !live_ids.contains(&patch.child_id.as_str()) {
            return Err(crate::error::StyleError::DanglingChildOverride {
                child_id: patch.child_id,
            });
        }
        self.upsert_child_override(patch);
        Ok(())
    }

    /// Remove the override for a child; it reverts to full inheritance.
    pub fn remove_child_override(&mut self, child_id: &str) -> bool {
        let before = self.child_overrides.len();
        self.child_overrides.retain(|ov| ov.child_id != child_id);
        self.child_overrides.len() != before
    }

    /// Drop overrides whose child id is no longer in the live list.
    ///
    /// Called when the block's child list changes; returns how many were
    /// pruned.
    pub fn prune_child_overrides(&mut self, live_ids: &[&str]) -> usize {
        let before = self.child_overrides.len();
        self.child_overrides
            .retain(|ov| live_ids.contains(&ov.child_id.as_str()));
        let pruned = before - self.child_overrides.len();
        if pruned > 0 && diagnostics_enabled("effects") {
            tracing::info!(pruned, "diagnostics: dangling child overrides pruned");
        }
        pruned
    }

    fn merged_with(&self, ov: &ChildOverride) -> EffectDefinition {
        let mut effective = self.clone();
        if let Some(preset) = ov.preset {
            effective.preset = preset;
        }
        if let Some(duration_ms) = ov.duration_ms {
            effective.duration_ms = duration_ms;
        }
        if let Some(delay_ms) = ov.delay_ms {
            effective.delay_ms = delay_ms;
        }
        if let Some(easing) = ov.easing {
            effective.easing = easing;
        }
        if let Some(range) = ov.scroll_range {
            if let TriggerParams::Scroll { scroll_range, .. } = &mut effective.trigger_params {
                *scroll_range = range;
            }
        }
        if let Some(patch) = &ov.keyframes {
            apply_patch_side(&mut effective, KeyframeSide::From, &patch.from);
            apply_patch_side(&mut effective, KeyframeSide::To, &patch.to);
        }
        effective
    }
}

/// Write one side of a keyframe patch into the merged view.
///
/// A patched property the parent pair never animated is added to both
/// sides first (catalog default on the unpatched side), so the merged pair
/// keeps its symmetric key set.
fn apply_patch_side(effective: &mut EffectDefinition, side: KeyframeSide, bag: &PropertyBag) {
    for (property, value) in bag.iter() {
        if !effective.keyframes.contains(property) {
            effective.keyframes.add_property(property);
        }
        effective.keyframes.set_value(side, property, value.clone());
    }
}
