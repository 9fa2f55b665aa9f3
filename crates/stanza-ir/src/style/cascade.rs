//! Breakpoint and interaction-state cascades.
//!
//! Every block carries a layered stack of property overrides: a base bag,
//! optional tablet/mobile override bags, and optional per-interaction-state
//! bags layered on top of the breakpoint-resolved result. Resolution is a
//! pure overlay merge; editing writes into exactly one layer.

use serde::{Deserialize, Serialize};

use super::bag::PropertyBag;
use super::diagnostics::diagnostics_enabled;

/// Breakpoint an override layer is scoped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Breakpoint {
    #[default]
    Desktop,
    Tablet,
    Mobile,
}

/// Per-block breakpoint override stack.
///
/// Narrower breakpoints inherit everything not explicitly overridden at a
/// wider one: `mobile` cascades through `tablet`, which cascades from
/// `base`. Missing override bags are treated as empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BreakpointCascade {
    #[serde(default)]
    pub base: PropertyBag,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tablet: Option<PropertyBag>,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile: Option<PropertyBag>,
}

impl BreakpointCascade {
    /// Create a cascade with the given base styles and no overrides.
    pub fn with_base(base: PropertyBag) -> Self {
        Self {
            base,
            tablet: None,
            mobile: None,
        }
    }

    /// Resolve the effective bag for a breakpoint.
    ///
    /// `desktop` is the base unchanged; `tablet` overlays the tablet bag on
    /// the base; `mobile` overlays tablet then mobile, so a property
    /// overridden only at tablet still applies on mobile.
    pub fn resolve(&self, breakpoint: Breakpoint) -> PropertyBag {
        let resolved = match breakpoint {
            Breakpoint::Desktop => self.base.clone(),
            Breakpoint::Tablet => match &self.tablet {
                Some(tablet) => self.base.overlay(tablet),
                None => self.base.clone(),
            },
            Breakpoint::Mobile => {
                let mut merged = self.base.clone();
                if let Some(tablet) = &self.tablet {
                    merged.merge_from(tablet);
                }
                if let Some(mobile) = &self.mobile {
                    merged.merge_from(mobile);
                }
                merged
            }
        };
        if diagnostics_enabled("cascade") {
            tracing::info!(
                breakpoint = ?breakpoint,
                properties = resolved.len(),
                "diagnostics: breakpoint cascade resolved"
            );
        }
        resolved
    }

    /// The override bag for a breakpoint, created on first write.
    ///
    /// Edits scoped to a breakpoint land here and never touch a wider bag.
    pub fn bag_mut(&mut self, breakpoint: Breakpoint) -> &mut PropertyBag {
        match breakpoint {
            Breakpoint::Desktop => &mut self.base,
            Breakpoint::Tablet => self.tablet.get_or_insert_with(PropertyBag::new),
            Breakpoint::Mobile => self.mobile.get_or_insert_with(PropertyBag::new),
        }
    }

    /// The override bag for a breakpoint, if it exists.
    pub fn bag(&self, breakpoint: Breakpoint) -> Option<&PropertyBag> {
        match breakpoint {
            Breakpoint::Desktop => Some(&self.base),
            Breakpoint::Tablet => self.tablet.as_ref(),
            Breakpoint::Mobile => self.mobile.as_ref(),
        }
    }

    /// Whether a non-empty override bag exists for a breakpoint.
    ///
    /// Drives the inspector's override badges, not resolution.
    pub fn has_overrides_for(&self, breakpoint: Breakpoint) -> bool {
        self.bag(breakpoint).is_some_and(|bag| !bag.is_empty())
    }

    /// Delete the override bag for a breakpoint.
    ///
    /// Resetting `desktop` clears the base bag in place; the narrower
    /// breakpoints revert to absent.
    pub fn reset(&mut self, breakpoint: Breakpoint) {
        match breakpoint {
            Breakpoint::Desktop => self.base.clear(),
            Breakpoint::Tablet => self.tablet = None,
            Breakpoint::Mobile => self.mobile = None,
        }
    }
}

/// Interaction state an override layer is scoped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InteractionState {
    #[default]
    None,
    Hover,
    Pressed,
    Focused,
}

/// Per-block interaction-state override stack.
///
/// State bags layer on top of an already breakpoint-resolved bag. A bag is
/// created lazily on first edit while that state tab is active and can be
/// reset (deleted) outright.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InteractionStateCascade {
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hover: Option<PropertyBag>,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pressed: Option<PropertyBag>,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focused: Option<PropertyBag>,
}

impl InteractionStateCascade {
    /// Resolve a breakpoint-resolved bag through an interaction state.
    ///
    /// `none` returns the input unchanged; other states overlay their bag
    /// when one exists.
    pub fn resolve(&self, resolved: &PropertyBag, state: InteractionState) -> PropertyBag {
        match self.bag(state) {
            Some(overrides) => resolved.overlay(overrides),
            None => resolved.clone(),
        }
    }

    /// The override bag for a state, if it exists. `none` has no bag.
    pub fn bag(&self, state: InteractionState) -> Option<&PropertyBag> {
        match state {
            InteractionState::None => None,
            InteractionState::Hover => self.hover.as_ref(),
            InteractionState::Pressed => self.pressed.as_ref(),
            InteractionState::Focused => self.focused.as_ref(),
        }
    }

    /// The override bag for a state, created on first write.
    ///
    /// Returns `None` for the `none` state, which has no override layer.
    pub fn bag_mut(&mut self, state: InteractionState) -> Option<&mut PropertyBag> {
        match state {
            InteractionState::None => None,
            InteractionState::Hover => Some(self.hover.get_or_insert_with(PropertyBag::new)),
            InteractionState::Pressed => Some(self.pressed.get_or_insert_with(PropertyBag::new)),
            InteractionState::Focused => Some(self.focused.get_or_insert_with(PropertyBag::new)),
        }
    }

    /// Whether a non-empty override bag exists for a state.
    pub fn has_overrides_for(&self, state: InteractionState) -> bool {
        self.bag(state).is_some_and(|bag| !bag.is_empty())
    }

    /// Delete the override bag for a state entirely.
    pub fn reset(&mut self, state: InteractionState) {
        match state {
            InteractionState::None => {}
            InteractionState::Hover => self.hover = None,
            InteractionState::Pressed => self.pressed = None,
            InteractionState::Focused => self.focused = None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::catalog::{PropertyValue, StyleProperty};

    fn bag(entries: &[(StyleProperty, PropertyValue)]) -> PropertyBag {
        entries.iter().cloned().collect()
    }

    #[test]
    fn test_desktop_returns_base_unchanged() {
        let cascade = BreakpointCascade::with_base(bag(&[(
            StyleProperty::BackgroundColor,
            PropertyValue::color("#fff"),
        )]));
        assert_eq!(cascade.resolve(Breakpoint::Desktop), cascade.base);
    }

    #[test]
    fn test_tablet_falls_back_to_base_when_absent() {
        // The worked example: base color #fff, mobile override #000, no
        // tablet bag. Tablet resolves to base; mobile wins its override.
        let mut cascade = BreakpointCascade::with_base(bag(&[(
            StyleProperty::BackgroundColor,
            PropertyValue::color("#fff"),
        )]));
        cascade
            .bag_mut(Breakpoint::Mobile)
            .set(StyleProperty::BackgroundColor, PropertyValue::color("#000"));

        let tablet = cascade.resolve(Breakpoint::Tablet);
        assert_eq!(
            tablet.get(StyleProperty::BackgroundColor),
            Some(&PropertyValue::color("#fff"))
        );
        let mobile = cascade.resolve(Breakpoint::Mobile);
        assert_eq!(
            mobile.get(StyleProperty::BackgroundColor),
            Some(&PropertyValue::color("#000"))
        );
    }

    #[test]
    fn test_mobile_inherits_through_tablet() {
        let mut cascade = BreakpointCascade::with_base(bag(&[
            (StyleProperty::Width, PropertyValue::px(1200.0)),
            (StyleProperty::Opacity, PropertyValue::number(1.0)),
        ]));
        cascade
            .bag_mut(Breakpoint::Tablet)
            .set(StyleProperty::Width, PropertyValue::px(800.0));

        // Mobile has no override of its own; the tablet width carries down.
        let mobile = cascade.resolve(Breakpoint::Mobile);
        assert_eq!(
            mobile.get(StyleProperty::Width),
            Some(&PropertyValue::px(800.0))
        );
        assert_eq!(
            mobile.get(StyleProperty::Opacity),
            Some(&PropertyValue::number(1.0))
        );

        // A mobile override beats both wider layers.
        cascade
            .bag_mut(Breakpoint::Mobile)
            .set(StyleProperty::Width, PropertyValue::px(320.0));
        let mobile = cascade.resolve(Breakpoint::Mobile);
        assert_eq!(
            mobile.get(StyleProperty::Width),
            Some(&PropertyValue::px(320.0))
        );
    }

    #[test]
    fn test_breakpoint_edit_never_touches_wider_bags() {
        let mut cascade = BreakpointCascade::default();
        cascade
            .bag_mut(Breakpoint::Mobile)
            .set(StyleProperty::Opacity, PropertyValue::number(0.5));

        assert!(cascade.base.is_empty());
        assert!(cascade.tablet.is_none());
        assert!(cascade.has_overrides_for(Breakpoint::Mobile));
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let mut cascade = BreakpointCascade::with_base(bag(&[(
            StyleProperty::Width,
            PropertyValue::px(100.0),
        )]));
        cascade
            .bag_mut(Breakpoint::Tablet)
            .set(StyleProperty::Width, PropertyValue::px(50.0));

        assert_eq!(
            cascade.resolve(Breakpoint::Tablet),
            cascade.resolve(Breakpoint::Tablet)
        );
    }

    #[test]
    fn test_state_none_returns_input_unchanged() {
        let states = InteractionStateCascade::default();
        let base = bag(&[(StyleProperty::Opacity, PropertyValue::number(1.0))]);
        assert_eq!(states.resolve(&base, InteractionState::None), base);
    }

    #[test]
    fn test_state_overlay_and_reset() {
        let mut states = InteractionStateCascade::default();
        let base = bag(&[(StyleProperty::Opacity, PropertyValue::number(1.0))]);

        // First edit creates the hover bag lazily.
        states
            .bag_mut(InteractionState::Hover)
            .expect("hover has an override layer")
            .set(StyleProperty::Opacity, PropertyValue::number(0.5));
        assert!(states.has_overrides_for(InteractionState::Hover));

        let hovered = states.resolve(&base, InteractionState::Hover);
        assert_eq!(
            hovered.get(StyleProperty::Opacity),
            Some(&PropertyValue::number(0.5))
        );

        // Reset deletes the bag; hover now equals none.
        states.reset(InteractionState::Hover);
        assert!(!states.has_overrides_for(InteractionState::Hover));
        assert_eq!(
            states.resolve(&base, InteractionState::Hover),
            states.resolve(&base, InteractionState::None)
        );
    }

    #[test]
    fn test_empty_state_bag_reports_no_overrides() {
        let mut states = InteractionStateCascade::default();
        let _ = states.bag_mut(InteractionState::Pressed);
        // Bag exists but is empty; the badge should stay off.
        assert!(!states.has_overrides_for(InteractionState::Pressed));
    }
}
