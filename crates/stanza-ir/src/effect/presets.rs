//! The fixed effect preset catalog.
//!
//! A preset is a named bundle of keyframe and timing values. Application is
//! a single field-set replacement: [`preset_fields`] is a pure function and
//! [`EffectDefinition::apply_preset`](super::EffectDefinition::apply_preset)
//! assigns the whole bundle at once, so no partially applied preset is ever
//! observable.

use serde::{Deserialize, Serialize};

use super::keyframes::{EffectKeyframePair, KeyframeSide};
use super::{EasingSpec, NamedOrigin, TransformOrigin};
use crate::style::catalog::{PropertyValue, StyleProperty};

/// Preset binding of an effect: a catalog entry, or `custom` once any
/// keyframe or timing field has been hand-edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffectPreset {
    #[default]
    Custom,
    FadeIn,
    FadeOut,
    SlideUp,
    SlideDown,
    SlideLeft,
    SlideRight,
    ZoomIn,
    ZoomOut,
    Pulse,
    Spin,
}

/// The field set a preset pins on an effect definition.
#[derive(Debug, Clone, PartialEq)]
pub struct PresetFields {
    pub keyframes: EffectKeyframePair,
    pub duration_ms: f32,
    pub easing: EasingSpec,
    pub transform_origin: TransformOrigin,
}

/// The fixed configuration of a preset, or `None` for `custom`.
pub fn preset_fields(preset: EffectPreset) -> Option<PresetFields> {
    let fields = match preset {
        EffectPreset::Custom => return None,
        EffectPreset::FadeIn => PresetFields {
            keyframes: pair(&[(
                StyleProperty::Opacity,
                PropertyValue::number(0.0),
                PropertyValue::number(1.0),
            )]),
            duration_ms: 400.0,
            easing: EasingSpec::EaseOut,
            transform_origin: center(),
        },
        EffectPreset::FadeOut => PresetFields {
            keyframes: pair(&[(
                StyleProperty::Opacity,
                PropertyValue::number(1.0),
                PropertyValue::number(0.0),
            )]),
            duration_ms: 400.0,
            easing: EasingSpec::EaseIn,
            transform_origin: center(),
        },
        EffectPreset::SlideUp => PresetFields {
            keyframes: pair(&[
                (
                    StyleProperty::TranslateY,
                    PropertyValue::px(40.0),
                    PropertyValue::px(0.0),
                ),
                (
                    StyleProperty::Opacity,
                    PropertyValue::number(0.0),
                    PropertyValue::number(1.0),
                ),
            ]),
            duration_ms: 500.0,
            easing: EasingSpec::EaseOut,
            transform_origin: center(),
        },
        EffectPreset::SlideDown => PresetFields {
            keyframes: pair(&[
                (
                    StyleProperty::TranslateY,
                    PropertyValue::px(-40.0),
                    PropertyValue::px(0.0),
                ),
                (
                    StyleProperty::Opacity,
                    PropertyValue::number(0.0),
                    PropertyValue::number(1.0),
                ),
            ]),
            duration_ms: 500.0,
            easing: EasingSpec::EaseOut,
            transform_origin: center(),
        },
        EffectPreset::SlideLeft => PresetFields {
            keyframes: pair(&[
                (
                    StyleProperty::TranslateX,
                    PropertyValue::px(40.0),
                    PropertyValue::px(0.0),
                ),
                (
                    StyleProperty::Opacity,
                    PropertyValue::number(0.0),
                    PropertyValue::number(1.0),
                ),
            ]),
            duration_ms: 500.0,
            easing: EasingSpec::EaseOut,
            transform_origin: center(),
        },
        EffectPreset::SlideRight => PresetFields {
            keyframes: pair(&[
                (
                    StyleProperty::TranslateX,
                    PropertyValue::px(-40.0),
                    PropertyValue::px(0.0),
                ),
                (
                    StyleProperty::Opacity,
                    PropertyValue::number(0.0),
                    PropertyValue::number(1.0),
                ),
            ]),
            duration_ms: 500.0,
            easing: EasingSpec::EaseOut,
            transform_origin: center(),
        },
        EffectPreset::ZoomIn => PresetFields {
            keyframes: pair(&[
                (
                    StyleProperty::ScaleX,
                    PropertyValue::number(0.85),
                    PropertyValue::number(1.0),
                ),
                (
                    StyleProperty::ScaleY,
                    PropertyValue::number(0.85),
                    PropertyValue::number(1.0),
                ),
                (
                    StyleProperty::Opacity,
                    PropertyValue::number(0.0),
                    PropertyValue::number(1.0),
                ),
            ]),
            duration_ms: 450.0,
            easing: EasingSpec::EaseOut,
            transform_origin: center(),
        },
        EffectPreset::ZoomOut => PresetFields {
            keyframes: pair(&[
                (
                    StyleProperty::ScaleX,
                    PropertyValue::number(1.15),
                    PropertyValue::number(1.0),
                ),
                (
                    StyleProperty::ScaleY,
                    PropertyValue::number(1.15),
                    PropertyValue::number(1.0),
                ),
                (
                    StyleProperty::Opacity,
                    PropertyValue::number(0.0),
                    PropertyValue::number(1.0),
                ),
            ]),
            duration_ms: 450.0,
            easing: EasingSpec::EaseOut,
            transform_origin: center(),
        },
        EffectPreset::Pulse => PresetFields {
            keyframes: pair(&[
                (
                    StyleProperty::ScaleX,
                    PropertyValue::number(1.0),
                    PropertyValue::number(1.05),
                ),
                (
                    StyleProperty::ScaleY,
                    PropertyValue::number(1.0),
                    PropertyValue::number(1.05),
                ),
            ]),
            duration_ms: 600.0,
            easing: EasingSpec::EaseInOut,
            transform_origin: center(),
        },
        EffectPreset::Spin => PresetFields {
            keyframes: pair(&[(
                StyleProperty::Rotate,
                PropertyValue::number(0.0),
                PropertyValue::number(360.0),
            )]),
            duration_ms: 1000.0,
            easing: EasingSpec::Linear,
            transform_origin: center(),
        },
    };
    Some(fields)
}

fn center() -> TransformOrigin {
    TransformOrigin::Named {
        position: NamedOrigin::Center,
    }
}

fn pair(entries: &[(StyleProperty, PropertyValue, PropertyValue)]) -> EffectKeyframePair {
    let mut keyframes = EffectKeyframePair::new();
    for (property, from, to) in entries {
        keyframes.add_property(*property);
        keyframes.set_value(KeyframeSide::From, *property, from.clone());
        keyframes.set_value(KeyframeSide::To, *property, to.clone());
    }
    keyframes
}
