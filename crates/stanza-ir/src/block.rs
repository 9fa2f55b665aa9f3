//! Per-block style state: the override stacks and effect slots a block
//! owns, plus the scoped entry points the editor writes through.

use serde::{Deserialize, Serialize};

use crate::effect::{EffectDefinition, EffectTrigger};
use crate::error::{Result, StyleError};
use crate::style::bag::PropertyBag;
use crate::style::cascade::{
    Breakpoint, BreakpointCascade, InteractionState, InteractionStateCascade,
};
use crate::style::catalog::{PropertyValue, StyleProperty};

/// The four per-trigger effect slots of a block.
///
/// A slot is either absent (effect off) or holds a full definition.
/// Enabling materializes a default; disabling deletes the definition
/// outright rather than blanking it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EffectStack {
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    hover: Option<EffectDefinition>,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    scroll: Option<EffectDefinition>,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    appear: Option<EffectDefinition>,
    #[serde(default)]
    #[serde(rename = "loop")]
    #[serde(skip_serializing_if = "Option::is_none")]
    loop_: Option<EffectDefinition>,
}

impl EffectStack {
    fn slot(&self, trigger: EffectTrigger) -> &Option<EffectDefinition> {
        match trigger {
            EffectTrigger::Hover => &self.hover,
            EffectTrigger::Scroll => &self.scroll,
            EffectTrigger::Appear => &self.appear,
            EffectTrigger::Loop => &self.loop_,
        }
    }

    fn slot_mut(&mut self, trigger: EffectTrigger) -> &mut Option<EffectDefinition> {
        match trigger {
            EffectTrigger::Hover => &mut self.hover,
            EffectTrigger::Scroll => &mut self.scroll,
            EffectTrigger::Appear => &mut self.appear,
            EffectTrigger::Loop => &mut self.loop_,
        }
    }

    /// The definition for a trigger, if the effect has been enabled.
    pub fn get(&self, trigger: EffectTrigger) -> Option<&EffectDefinition> {
        self.slot(trigger).as_ref()
    }

    /// Mutable access to an enabled effect.
    pub fn get_mut(&mut self, trigger: EffectTrigger) -> Option<&mut EffectDefinition> {
        self.slot_mut(trigger).as_mut()
    }

    /// Enable an effect, materializing the default definition when none
    /// exists; returns the definition either way.
    pub fn enable(&mut self, trigger: EffectTrigger) -> &mut EffectDefinition {
        self.slot_mut(trigger)
            .get_or_insert_with(|| EffectDefinition::default_for(trigger))
    }

    /// Reset an effect: delete the definition entirely.
    ///
    /// Returns `false` if the effect was already off.
    pub fn disable(&mut self, trigger: EffectTrigger) -> bool {
        self.slot_mut(trigger).take().is_some()
    }

    /// Whether a trigger currently has an enabled effect.
    pub fn is_enabled(&self, trigger: EffectTrigger) -> bool {
        self.get(trigger).is_some_and(|def| def.enabled)
    }

    /// Iterate over the present effect definitions.
    pub fn iter(&self) -> impl Iterator<Item = (EffectTrigger, &EffectDefinition)> {
        [
            EffectTrigger::Hover,
            EffectTrigger::Scroll,
            EffectTrigger::Appear,
            EffectTrigger::Loop,
        ]
        .into_iter()
        .filter_map(|trigger| self.get(trigger).map(|def| (trigger, def)))
    }

    fn iter_mut(&mut self) -> impl Iterator<Item = &mut EffectDefinition> {
        [
            &mut self.hover,
            &mut self.scroll,
            &mut self.appear,
            &mut self.loop_,
        ]
        .into_iter()
        .filter_map(Option::as_mut)
    }
}

/// The editor's active `(breakpoint, state)` selection.
///
/// Every raw property edit is scoped to one of these; the scope decides
/// which override bag the write lands in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EditScope {
    #[serde(default)]
    pub breakpoint: Breakpoint,
    #[serde(default)]
    pub state: InteractionState,
}

impl EditScope {
    /// Scope for a breakpoint with no interaction state.
    pub fn breakpoint(breakpoint: Breakpoint) -> Self {
        Self {
            breakpoint,
            state: InteractionState::None,
        }
    }

    /// Scope for an interaction state tab.
    pub fn state(state: InteractionState) -> Self {
        Self {
            breakpoint: Breakpoint::Desktop,
            state,
        }
    }
}

/// Everything a block owns about its appearance: breakpoint overrides,
/// interaction-state overrides, and the four effect slots.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BlockStyle {
    #[serde(default)]
    pub breakpoints: BreakpointCascade,
    #[serde(default)]
    pub states: InteractionStateCascade,
    #[serde(default)]
    pub effects: EffectStack,
}

impl BlockStyle {
    /// Create an empty block style.
    pub fn new() -> Self {
        Self::default()
    }

    /// The effective bag for a `(breakpoint, state)` pair: breakpoint
    /// cascade first, then the state overlay.
    pub fn resolve(&self, breakpoint: Breakpoint, state: InteractionState) -> PropertyBag {
        let resolved = self.breakpoints.resolve(breakpoint);
        self.states.resolve(&resolved, state)
    }

    /// Write a property override into the bag the scope selects.
    ///
    /// A non-`none` state routes to that state's bag (created on first
    /// write); otherwise the write lands in the scoped breakpoint's bag.
    pub fn set_property(&mut self, scope: EditScope, property: StyleProperty, value: PropertyValue) {
        match self.states.bag_mut(scope.state) {
            Some(bag) => bag.set(property, value),
            None => self.breakpoints.bag_mut(scope.breakpoint).set(property, value),
        }
    }

    /// Raw editor edit: `(name, value)` scoped to the active selection.
    /// Unknown names are a silent no-op; returns whether the write landed.
    pub fn set_property_named(
        &mut self,
        scope: EditScope,
        name: &str,
        value: PropertyValue,
    ) -> bool {
        match StyleProperty::parse(name) {
            Some(property) => {
                self.set_property(scope, property, value);
                true
            }
            None => false,
        }
    }

    /// Strict flavor of [`set_property_named`](Self::set_property_named).
    pub fn try_set_property_named(
        &mut self,
        scope: EditScope,
        name: &str,
        value: PropertyValue,
    ) -> Result<()> {
        let property = StyleProperty::parse(name).ok_or_else(|| StyleError::UnknownProperty {
            name: name.to_string(),
        })?;
        self.set_property(scope, property, value);
        Ok(())
    }

    /// Remove a property override from the bag the scope selects.
    pub fn remove_property(&mut self, scope: EditScope, property: StyleProperty) -> bool {
        match self.states.bag_mut(scope.state) {
            Some(bag) => bag.remove(property).is_some(),
            None => self
                .breakpoints
                .bag_mut(scope.breakpoint)
                .remove(property)
                .is_some(),
        }
    }

    /// Prune child overrides across all effect slots after the block's
    /// child list changed. Returns how many overrides were dropped.
    pub fn retain_children(&mut self, live_ids: &[&str]) -> usize {
        self.effects
            .iter_mut()
            .map(|def| def.prune_child_overrides(live_ids))
            .sum()
    }
}
