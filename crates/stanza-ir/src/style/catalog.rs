//! Property catalog: the closed set of style properties the inspector
//! exposes, and the typed values they carry.
//!
//! This module defines:
//! - `StyleProperty`: Enum of every editable style property
//! - `PropertyValue`: Enum for all property value shapes
//! - Per-property metadata: string name, value kind, declared default
//!
//! The catalog is the authority for the string boundary: raw editor edits
//! arrive as `(name, value)` pairs and are admitted through
//! [`StyleProperty::parse`]. Names the catalog does not recognize are
//! rejected there and never reach a property bag.

use serde::{Deserialize, Serialize};

/// Enum of every style property the editor can override.
///
/// Properties correspond to the inspector's controls; each one declares the
/// value kind it expects and a default used to seed keyframe entries.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum StyleProperty {
    // Geometry properties
    Width,
    Height,
    MinWidth,
    MinHeight,
    MaxWidth,
    MaxHeight,

    // Spacing properties
    PaddingTop,
    PaddingRight,
    PaddingBottom,
    PaddingLeft,
    MarginTop,
    MarginRight,
    MarginBottom,
    MarginLeft,

    // Visual properties
    Opacity,
    Visibility,
    CornerRadius,
    Border,
    BoxShadow,

    // Background
    BackgroundColor,
    BackgroundGradient,

    // Text properties
    TextColor,
    FontSize,
    FontWeight,
    LineHeight,
    FontFamily,
    TextAlign,

    // Transform properties
    TranslateX,
    TranslateY,
    ScaleX,
    ScaleY,
    Rotate,
}

impl StyleProperty {
    /// The catalog name for this property, as used by raw editor edits.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Width => "width",
            Self::Height => "height",
            Self::MinWidth => "min_width",
            Self::MinHeight => "min_height",
            Self::MaxWidth => "max_width",
            Self::MaxHeight => "max_height",
            Self::PaddingTop => "padding_top",
            Self::PaddingRight => "padding_right",
            Self::PaddingBottom => "padding_bottom",
            Self::PaddingLeft => "padding_left",
            Self::MarginTop => "margin_top",
            Self::MarginRight => "margin_right",
            Self::MarginBottom => "margin_bottom",
            Self::MarginLeft => "margin_left",
            Self::Opacity => "opacity",
            Self::Visibility => "visibility",
            Self::CornerRadius => "corner_radius",
            Self::Border => "border",
            Self::BoxShadow => "box_shadow",
            Self::BackgroundColor => "background_color",
            Self::BackgroundGradient => "background_gradient",
            Self::TextColor => "text_color",
            Self::FontSize => "font_size",
            Self::FontWeight => "font_weight",
            Self::LineHeight => "line_height",
            Self::FontFamily => "font_family",
            Self::TextAlign => "text_align",
            Self::TranslateX => "translate_x",
            Self::TranslateY => "translate_y",
            Self::ScaleX => "scale_x",
            Self::ScaleY => "scale_y",
            Self::Rotate => "rotate",
        }
    }

    /// Look up a property by its catalog name.
    ///
    /// Returns `None` for names the catalog does not recognize; callers
    /// surface that as an `UnknownProperty` rejection or a silent no-op.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "width" => Some(Self::Width),
            "height" => Some(Self::Height),
            "min_width" => Some(Self::MinWidth),
            "min_height" => Some(Self::MinHeight),
            "max_width" => Some(Self::MaxWidth),
            "max_height" => Some(Self::MaxHeight),
            "padding_top" => Some(Self::PaddingTop),
            "padding_right" => Some(Self::PaddingRight),
            "padding_bottom" => Some(Self::PaddingBottom),
            "padding_left" => Some(Self::PaddingLeft),
            "margin_top" => Some(Self::MarginTop),
            "margin_right" => Some(Self::MarginRight),
            "margin_bottom" => Some(Self::MarginBottom),
            "margin_left" => Some(Self::MarginLeft),
            "opacity" => Some(Self::Opacity),
            "visibility" => Some(Self::Visibility),
            "corner_radius" => Some(Self::CornerRadius),
            "border" => Some(Self::Border),
            "box_shadow" => Some(Self::BoxShadow),
            "background_color" => Some(Self::BackgroundColor),
            "background_gradient" => Some(Self::BackgroundGradient),
            "text_color" => Some(Self::TextColor),
            "font_size" => Some(Self::FontSize),
            "font_weight" => Some(Self::FontWeight),
            "line_height" => Some(Self::LineHeight),
            "font_family" => Some(Self::FontFamily),
            "text_align" => Some(Self::TextAlign),
            "translate_x" => Some(Self::TranslateX),
            "translate_y" => Some(Self::TranslateY),
            "scale_x" => Some(Self::ScaleX),
            "scale_y" => Some(Self::ScaleY),
            "rotate" => Some(Self::Rotate),
            _ => None,
        }
    }

    /// Returns the expected value kind for this property.
    pub fn value_kind(&self) -> ValueKind {
        match self {
            // Geometry
            Self::Width
            | Self::Height
            | Self::MinWidth
            | Self::MinHeight
            | Self::MaxWidth
            | Self::MaxHeight => ValueKind::Length,

            // Spacing
            Self::PaddingTop
            | Self::PaddingRight
            | Self::PaddingBottom
            | Self::PaddingLeft
            | Self::MarginTop
            | Self::MarginRight
            | Self::MarginBottom
            | Self::MarginLeft => ValueKind::Length,

            // Visual
            Self::Opacity => ValueKind::Number,
            Self::Visibility => ValueKind::Keyword,
            Self::CornerRadius => ValueKind::Length,
            Self::Border => ValueKind::Border,
            Self::BoxShadow => ValueKind::Shadow,

            // Background
            Self::BackgroundColor => ValueKind::Color,
            Self::BackgroundGradient => ValueKind::Gradient,

            // Text
            Self::TextColor => ValueKind::Color,
            Self::FontSize => ValueKind::Length,
            Self::FontWeight | Self::LineHeight => ValueKind::Number,
            Self::FontFamily | Self::TextAlign => ValueKind::Keyword,

            // Transform
            Self::TranslateX | Self::TranslateY => ValueKind::Length,
            Self::ScaleX | Self::ScaleY | Self::Rotate => ValueKind::Number,
        }
    }

    /// The declared default value for this property.
    ///
    /// Used to seed both keyframe sides when a property is added to an
    /// effect, so the invariant `keys(from) == keys(to)` holds from the
    /// first write.
    pub fn default_value(&self) -> PropertyValue {
        match self {
            Self::Width
            | Self::Height
            | Self::MinWidth
            | Self::MinHeight
            | Self::MaxWidth
            | Self::MaxHeight
            | Self::PaddingTop
            | Self::PaddingRight
            | Self::PaddingBottom
            | Self::PaddingLeft
            | Self::MarginTop
            | Self::MarginRight
            | Self::MarginBottom
            | Self::MarginLeft
            | Self::CornerRadius
            | Self::TranslateX
            | Self::TranslateY => PropertyValue::px(0.0),

            Self::Opacity => PropertyValue::number(1.0),
            Self::Visibility => PropertyValue::keyword("visible"),
            Self::Border => PropertyValue::Border {
                width: 1.0,
                color: "#000000".to_string(),
            },
            Self::BoxShadow => PropertyValue::Shadow {
                offset_x: 0.0,
                offset_y: 2.0,
                blur: 4.0,
                color: "rgba(0,0,0,0.25)".to_string(),
            },
            Self::BackgroundColor => PropertyValue::color("#ffffff"),
            Self::BackgroundGradient => PropertyValue::Gradient {
                angle: 180.0,
                stops: vec![
                    GradientStop {
                        color: "#ffffff".to_string(),
                        offset: 0.0,
                    },
                    GradientStop {
                        color: "#000000".to_string(),
                        offset: 1.0,
                    },
                ],
            },
            Self::TextColor => PropertyValue::color("#000000"),
            Self::FontSize => PropertyValue::px(16.0),
            Self::FontWeight => PropertyValue::number(400.0),
            Self::LineHeight => PropertyValue::number(1.5),
            Self::FontFamily => PropertyValue::keyword("sans-serif"),
            Self::TextAlign => PropertyValue::keyword("start"),
            Self::ScaleX | Self::ScaleY => PropertyValue::number(1.0),
            Self::Rotate => PropertyValue::number(0.0),
        }
    }

    /// Returns true if this property affects layout (as opposed to paint only).
    ///
    /// The preview collaborator uses this to decide whether a resolved change
    /// needs a relayout pass.
    pub fn affects_layout(&self) -> bool {
        matches!(
            self,
            Self::Width
                | Self::Height
                | Self::MinWidth
                | Self::MinHeight
                | Self::MaxWidth
                | Self::MaxHeight
                | Self::PaddingTop
                | Self::PaddingRight
                | Self::PaddingBottom
                | Self::PaddingLeft
                | Self::MarginTop
                | Self::MarginRight
                | Self::MarginBottom
                | Self::MarginLeft
                | Self::FontSize
                | Self::LineHeight
                | Self::Visibility
        )
    }
}

/// Unit for length values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LengthUnit {
    #[default]
    Px,
    Em,
    Rem,
    Vw,
    Vh,
}

/// A single stop in a gradient value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    pub color: String,
    /// Offset in normalized [0.0, 1.0]
    pub offset: f64,
}

/// Enum representing every property value shape.
///
/// Values are stored as the editor supplied them; kind mismatches are the
/// editing surface's responsibility, not the engine's.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PropertyValue {
    /// Length with an explicit unit (width, spacing, translation, ...).
    Length { value: f64, unit: LengthUnit },
    /// Unitless number (opacity, scale, font weight, ...).
    Number { value: f64 },
    /// Numeric percentage of the parent dimension.
    Percentage { value: f64 },
    /// Color string (hex or rgba()).
    Color { value: String },
    /// Enumerated keyword (visibility, text_align, ...).
    Keyword { value: String },
    /// Box shadow sub-record.
    Shadow {
        offset_x: f64,
        offset_y: f64,
        blur: f64,
        color: String,
    },
    /// Border sub-record.
    Border { width: f64, color: String },
    /// Linear gradient sub-record.
    Gradient {
        angle: f64,
        stops: Vec<GradientStop>,
    },
}

impl PropertyValue {
    /// Create a pixel length value.
    pub fn px(value: f64) -> Self {
        Self::Length {
            value,
            unit: LengthUnit::Px,
        }
    }

    /// Create a unitless number value.
    pub fn number(value: f64) -> Self {
        Self::Number { value }
    }

    /// Create a percentage value.
    pub fn percentage(value: f64) -> Self {
        Self::Percentage { value }
    }

    /// Create a color value.
    pub fn color(value: impl Into<String>) -> Self {
        Self::Color {
            value: value.into(),
        }
    }

    /// Create a keyword value.
    pub fn keyword(value: impl Into<String>) -> Self {
        Self::Keyword {
            value: value.into(),
        }
    }

    /// The kind of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Length { .. } => ValueKind::Length,
            Self::Number { .. } => ValueKind::Number,
            Self::Percentage { .. } => ValueKind::Percentage,
            Self::Color { .. } => ValueKind::Color,
            Self::Keyword { .. } => ValueKind::Keyword,
            Self::Shadow { .. } => ValueKind::Shadow,
            Self::Border { .. } => ValueKind::Border,
            Self::Gradient { .. } => ValueKind::Gradient,
        }
    }

    /// Try to extract a numeric magnitude (length, number, or percentage).
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Length { value, .. } | Self::Number { value } | Self::Percentage { value } => {
                Some(*value)
            }
            _ => None,
        }
    }

    /// Try to extract a color string.
    pub fn as_color(&self) -> Option<&str> {
        match self {
            Self::Color { value } => Some(value),
            _ => None,
        }
    }

    /// Try to extract a keyword.
    pub fn as_keyword(&self) -> Option<&str> {
        match self {
            Self::Keyword { value } => Some(value),
            _ => None,
        }
    }
}

/// Value kind a property expects; drives inspector affordances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    Length,
    Number,
    Percentage,
    Color,
    Keyword,
    Shadow,
    Border,
    Gradient,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_parse_round_trip() {
        let all = [
            StyleProperty::Width,
            StyleProperty::PaddingLeft,
            StyleProperty::Opacity,
            StyleProperty::BackgroundGradient,
            StyleProperty::TranslateY,
            StyleProperty::Rotate,
        ];
        for prop in all {
            assert_eq!(StyleProperty::parse(prop.name()), Some(prop));
        }
    }

    #[test]
    fn test_parse_unknown_name() {
        assert_eq!(StyleProperty::parse("blink_rate"), None);
        assert_eq!(StyleProperty::parse(""), None);
        // Names are exact; no case folding at the boundary.
        assert_eq!(StyleProperty::parse("Width"), None);
    }

    #[test]
    fn test_default_matches_declared_kind() {
        let all = [
            StyleProperty::Width,
            StyleProperty::Opacity,
            StyleProperty::Visibility,
            StyleProperty::Border,
            StyleProperty::BoxShadow,
            StyleProperty::BackgroundColor,
            StyleProperty::BackgroundGradient,
            StyleProperty::FontFamily,
            StyleProperty::ScaleX,
        ];
        for prop in all {
            assert_eq!(
                prop.default_value().kind(),
                prop.value_kind(),
                "default for {} should match its declared kind",
                prop.name()
            );
        }
    }

    #[test]
    fn test_value_accessors() {
        let v = PropertyValue::px(42.0);
        assert_eq!(v.as_f64(), Some(42.0));
        assert_eq!(v.as_color(), None);

        let v = PropertyValue::color("#ff0000");
        assert_eq!(v.as_color(), Some("#ff0000"));
        assert_eq!(v.as_f64(), None);

        let v = PropertyValue::keyword("visible");
        assert_eq!(v.as_keyword(), Some("visible"));
    }

    #[test]
    fn test_layout_impact() {
        assert!(StyleProperty::Width.affects_layout());
        assert!(StyleProperty::PaddingTop.affects_layout());
        assert!(!StyleProperty::Opacity.affects_layout());
        assert!(!StyleProperty::BackgroundColor.affects_layout());
        assert!(!StyleProperty::TranslateX.affects_layout());
    }
}
