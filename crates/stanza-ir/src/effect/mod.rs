//! Animation-effect definitions bound to triggers.
//!
//! Each block may carry one effect per trigger (hover, scroll, appear,
//! loop). An effect bundles a symmetric keyframe pair, timing, an optional
//! preset binding, trigger-specific parameters, stagger configuration, and
//! per-child overrides. These are serialization-focused records; playback
//! belongs to the preview collaborator.

pub mod children;
pub mod keyframes;
pub mod presets;
pub mod stagger;

use serde::{Deserialize, Serialize};

pub use children::{ChildOverride, KeyframePatch};
pub use keyframes::{EffectKeyframePair, KeyframeSide};
pub use presets::{EffectPreset, PresetFields, preset_fields};
pub use stagger::{StaggerConfig, StaggerOrigin, compute_delays};

use crate::error::Result;
use crate::style::catalog::{PropertyValue, StyleProperty};

/// Trigger an effect is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffectTrigger {
    Hover,
    Scroll,
    Appear,
    Loop,
}

/// Easing curve specification for effect timing.
///
/// Data only; evaluation happens in the playback collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EasingSpec {
    /// Linear interpolation (no easing).
    Linear,
    /// CSS `ease` - Slow start, fast middle, slow end.
    Ease,
    /// CSS `ease-in` - Slow start, accelerating.
    EaseIn,
    /// CSS `ease-out` - Fast start, decelerating.
    EaseOut,
    /// CSS `ease-in-out` - Slow start and end, fast middle.
    EaseInOut,
    /// Custom cubic bezier curve.
    CubicBezier { x1: f32, y1: f32, x2: f32, y2: f32 },
    /// Stepped animation with discrete jumps.
    Steps { count: u32, position: StepPosition },
}

impl Default for EasingSpec {
    fn default() -> Self {
        Self::Ease
    }
}

impl EasingSpec {
    /// Look up a named easing by its keyword (as it appears in config files).
    pub fn parse_keyword(name: &str) -> Option<Self> {
        match name {
            "linear" => Some(Self::Linear),
            "ease" => Some(Self::Ease),
            "ease_in" => Some(Self::EaseIn),
            "ease_out" => Some(Self::EaseOut),
            "ease_in_out" => Some(Self::EaseInOut),
            _ => None,
        }
    }
}

/// Position for stepped easing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepPosition {
    /// Jump at the start of each interval.
    Start,
    /// Jump at the end of each interval.
    #[default]
    End,
    /// Jump at both start and end.
    Both,
    /// No jump at start or end.
    None,
}

/// Transform origin for an effect.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TransformOrigin {
    /// Origin at absolute pixel coordinates.
    Absolute { x: f64, y: f64 },
    /// Origin at fractions of the element size (0.5, 0.5 = center).
    Percentage { x: f64, y: f64 },
    /// Named origin positions.
    Named { position: NamedOrigin },
}

impl Default for TransformOrigin {
    fn default() -> Self {
        Self::Named {
            position: NamedOrigin::Center,
        }
    }
}

/// Named transform origin positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NamedOrigin {
    TopLeft,
    TopCenter,
    TopRight,
    CenterLeft,
    #[default]
    Center,
    CenterRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

/// How a scroll effect is driven.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScrollTriggerKind {
    /// Progress follows the element through the viewport.
    #[default]
    WhileInView,
    /// Progress follows overall page scroll.
    WhilePageScrolls,
}

/// What the scroll range endpoints are measured against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScrollRelativeTo {
    #[default]
    Viewport,
    Element,
    Page,
}

/// Scroll progress window an effect maps onto, in normalized [0.0, 1.0].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScrollRange {
    pub start: f64,
    pub end: f64,
    #[serde(default)]
    pub relative_to: ScrollRelativeTo,
}

impl Default for ScrollRange {
    fn default() -> Self {
        Self {
            start: 0.0,
            end: 1.0,
            relative_to: ScrollRelativeTo::Viewport,
        }
    }
}

/// What starts an appear effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppearTriggerKind {
    /// Fire when the element scrolls into view.
    #[default]
    InView,
    /// Fire on page load.
    Load,
}

/// Boundary trigger for starting or stopping a loop effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoopTrigger {
    Load,
    InView,
    Hover,
    Click,
    Never,
}

/// Trigger-specific effect parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TriggerParams {
    /// Hover effects carry no extra parameters.
    Hover,
    Scroll {
        trigger: ScrollTriggerKind,
        scroll_range: ScrollRange,
    },
    Appear {
        trigger: AppearTriggerKind,
        /// Fraction of the element that must be visible before firing.
        threshold: f32,
        /// Fire only the first time the element appears.
        once: bool,
    },
    Loop {
        start_trigger: LoopTrigger,
        stop_trigger: LoopTrigger,
        reverse: bool,
        #[serde(rename = "loop")]
        repeat: bool,
    },
}

impl TriggerParams {
    /// Default parameters for a trigger.
    pub fn default_for(trigger: EffectTrigger) -> Self {
        match trigger {
            EffectTrigger::Hover => Self::Hover,
            EffectTrigger::Scroll => Self::Scroll {
                trigger: ScrollTriggerKind::WhileInView,
                scroll_range: ScrollRange::default(),
            },
            EffectTrigger::Appear => Self::Appear {
                trigger: AppearTriggerKind::InView,
                threshold: 0.25,
                once: true,
            },
            EffectTrigger::Loop => Self::Loop {
                start_trigger: LoopTrigger::Load,
                stop_trigger: LoopTrigger::Never,
                reverse: false,
                repeat: true,
            },
        }
    }

    /// The trigger these parameters belong to.
    pub fn trigger(&self) -> EffectTrigger {
        match self {
            Self::Hover => EffectTrigger::Hover,
            Self::Scroll { .. } => EffectTrigger::Scroll,
            Self::Appear { .. } => EffectTrigger::Appear,
            Self::Loop { .. } => EffectTrigger::Loop,
        }
    }
}

/// One trigger's full effect configuration.
///
/// Absent (no record) means the effect is off for the block; the owning
/// [`EffectStack`](crate::block::EffectStack) materializes a default on
/// first enable and deletes on reset. Keyframe and timing fields are
/// reached through mutators: hand-editing any of them unbinds the preset
/// (flips it to `custom`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EffectDefinition {
    pub enabled: bool,
    #[serde(default)]
    preset: EffectPreset,
    #[serde(default)]
    keyframes: EffectKeyframePair,
    duration_ms: f32,
    #[serde(default)]
    delay_ms: f32,
    #[serde(default)]
    easing: EasingSpec,
    #[serde(default)]
    transform_origin: TransformOrigin,
    pub trigger_params: TriggerParams,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stagger: Option<StaggerConfig>,
    #[serde(default)]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    child_overrides: Vec<ChildOverride>,
}

/// Default duration for a freshly enabled effect.
pub const DEFAULT_DURATION_MS: f32 = 300.0;

impl EffectDefinition {
    /// The default definition materialized when a trigger is first enabled.
    pub fn default_for(trigger: EffectTrigger) -> Self {
        Self {
            enabled: true,
            preset: EffectPreset::Custom,
            keyframes: EffectKeyframePair::new(),
            duration_ms: DEFAULT_DURATION_MS,
            delay_ms: 0.0,
            easing: EasingSpec::default(),
            transform_origin: TransformOrigin::default(),
            trigger_params: TriggerParams::default_for(trigger),
            stagger: None,
            child_overrides: Vec::new(),
        }
    }

    /// The preset this effect is bound to, or `custom`.
    pub fn preset(&self) -> EffectPreset {
        self.preset
    }

    /// The keyframe pair.
    pub fn keyframes(&self) -> &EffectKeyframePair {
        &self.keyframes
    }

    /// Duration of one run in milliseconds.
    pub fn duration_ms(&self) -> f32 {
        self.duration_ms
    }

    /// Delay before the effect starts in milliseconds.
    pub fn delay_ms(&self) -> f32 {
        self.delay_ms
    }

    /// Easing curve.
    pub fn easing(&self) -> EasingSpec {
        self.easing
    }

    /// Transform origin.
    pub fn transform_origin(&self) -> TransformOrigin {
        self.transform_origin
    }

    /// Apply a preset's fixed configuration.
    ///
    /// For a non-`custom` preset this overwrites keyframes, duration,
    /// easing, and transform origin as one replacement, discarding prior
    /// custom values. Applying `custom` changes only the tag.
    pub fn apply_preset(&mut self, preset: EffectPreset) {
        match preset_fields(preset) {
            Some(fields) => {
                self.keyframes = fields.keyframes;
                self.duration_ms = fields.duration_ms;
                self.easing = fields.easing;
                self.transform_origin = fields.transform_origin;
                self.preset = preset;
            }
            None => self.preset = EffectPreset::Custom,
        }
    }

    /// Set the duration. A changed value unbinds the preset.
    pub fn set_duration_ms(&mut self, duration_ms: f32) {
        if self.duration_ms != duration_ms {
            self.duration_ms = duration_ms;
            self.preset = EffectPreset::Custom;
        }
    }

    /// Set the delay. A changed value unbinds the preset.
    pub fn set_delay_ms(&mut self, delay_ms: f32) {
        if self.delay_ms != delay_ms {
            self.delay_ms = delay_ms;
            self.preset = EffectPreset::Custom;
        }
    }

    /// Set the easing curve. A changed value unbinds the preset.
    pub fn set_easing(&mut self, easing: EasingSpec) {
        if self.easing != easing {
            self.easing = easing;
            self.preset = EffectPreset::Custom;
        }
    }

    /// Set the transform origin. A changed value unbinds the preset.
    pub fn set_transform_origin(&mut self, origin: TransformOrigin) {
        if self.transform_origin != origin {
            self.transform_origin = origin;
            self.preset = EffectPreset::Custom;
        }
    }

    /// Add a property to both keyframe sides. Unbinds the preset when the
    /// pair actually changes.
    pub fn add_keyframe_property(&mut self, property: StyleProperty) -> bool {
        let added = self.keyframes.add_property(property);
        if added {
            self.preset = EffectPreset::Custom;
        }
        added
    }

    /// Add a keyframe property by catalog name; unknown names are ignored.
    pub fn add_keyframe_property_named(&mut self, name: &str) -> bool {
        match StyleProperty::parse(name) {
            Some(property) => self.add_keyframe_property(property),
            None => false,
        }
    }

    /// Remove a property from both keyframe sides.
    pub fn remove_keyframe_property(&mut self, property: StyleProperty) -> bool {
        let removed = self.keyframes.remove_property(property);
        if removed {
            self.preset = EffectPreset::Custom;
        }
        removed
    }

    /// Set a keyframe value; the property must have been added first.
    pub fn set_keyframe_value(
        &mut self,
        side: KeyframeSide,
        property: StyleProperty,
        value: PropertyValue,
    ) -> bool {
        let written = self.keyframes.set_value(side, property, value);
        if written {
            self.preset = EffectPreset::Custom;
        }
        written
    }

    /// Strict flavor of [`set_keyframe_value`](Self::set_keyframe_value).
    pub fn try_set_keyframe_value(
        &mut self,
        side: KeyframeSide,
        property: StyleProperty,
        value: PropertyValue,
    ) -> Result<()> {
        self.keyframes.try_set_value(side, property, value)?;
        self.preset = EffectPreset::Custom;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_for_trigger_params() {
        let hover = EffectDefinition::default_for(EffectTrigger::Hover);
        assert!(hover.enabled);
        assert_eq!(hover.preset(), EffectPreset::Custom);
        assert_eq!(hover.trigger_params.trigger(), EffectTrigger::Hover);
        assert_eq!(hover.duration_ms(), DEFAULT_DURATION_MS);

        let appear = EffectDefinition::default_for(EffectTrigger::Appear);
        match appear.trigger_params {
            TriggerParams::Appear { once, .. } => assert!(once),
            other => panic!("unexpected params: {other:?}"),
        }
    }

    #[test]
    fn test_timing_edit_unbinds_preset() {
        let mut def = EffectDefinition::default_for(EffectTrigger::Appear);
        def.apply_preset(EffectPreset::FadeIn);
        assert_eq!(def.preset(), EffectPreset::FadeIn);

        def.set_duration_ms(def.duration_ms() + 50.0);
        assert_eq!(def.preset(), EffectPreset::Custom);

        def.apply_preset(EffectPreset::FadeIn);
        def.set_easing(EasingSpec::Linear);
        assert_eq!(def.preset(), EffectPreset::Custom);

        def.apply_preset(EffectPreset::FadeIn);
        def.set_delay_ms(120.0);
        assert_eq!(def.preset(), EffectPreset::Custom);

        def.apply_preset(EffectPreset::FadeIn);
        def.set_transform_origin(TransformOrigin::Percentage { x: 0.0, y: 0.0 });
        assert_eq!(def.preset(), EffectPreset::Custom);
    }

    #[test]
    fn test_noop_edit_keeps_preset_bound() {
        let mut def = EffectDefinition::default_for(EffectTrigger::Appear);
        def.apply_preset(EffectPreset::FadeIn);

        // Writing the value already in place is not a hand edit.
        def.set_duration_ms(def.duration_ms());
        assert_eq!(def.preset(), EffectPreset::FadeIn);

        // A rejected keyframe write leaves the binding alone too.
        assert!(!def.set_keyframe_value(
            KeyframeSide::To,
            StyleProperty::Width,
            PropertyValue::px(10.0),
        ));
        assert_eq!(def.preset(), EffectPreset::FadeIn);
    }

    #[test]
    fn test_keyframe_edit_unbinds_preset() {
        let mut def = EffectDefinition::default_for(EffectTrigger::Hover);
        def.apply_preset(EffectPreset::FadeIn);

        assert!(def.set_keyframe_value(
            KeyframeSide::To,
            StyleProperty::Opacity,
            PropertyValue::number(0.4),
        ));
        assert_eq!(def.preset(), EffectPreset::Custom);
    }

    #[test]
    fn test_apply_custom_changes_only_the_tag() {
        let mut def = EffectDefinition::default_for(EffectTrigger::Hover);
        def.apply_preset(EffectPreset::ZoomIn);
        let keyframes = def.keyframes().clone();
        let duration = def.duration_ms();

        def.apply_preset(EffectPreset::Custom);
        assert_eq!(def.preset(), EffectPreset::Custom);
        assert_eq!(def.keyframes(), &keyframes);
        assert_eq!(def.duration_ms(), duration);
    }
}
