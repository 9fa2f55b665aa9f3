//! Symmetric `from`/`to` keyframe pairs.
//!
//! An effect's start and end states are two property bags that always
//! expose the same key set: adding a property seeds both sides with the
//! catalog default, removing deletes from both. Mutations go through this
//! type so no asymmetric intermediate state is ever observable.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, StyleError};
use crate::style::bag::PropertyBag;
use crate::style::catalog::{PropertyValue, StyleProperty};

/// Which side of a keyframe pair a value write targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyframeSide {
    From,
    To,
}

impl fmt::Display for KeyframeSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::From => write!(f, "from"),
            Self::To => write!(f, "to"),
        }
    }
}

/// The `from`/`to` property sets defining an effect's start and end state.
///
/// Invariant: both sides carry exactly the same property keys.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EffectKeyframePair {
    from: PropertyBag,
    to: PropertyBag,
}

impl EffectKeyframePair {
    /// Create an empty pair.
    pub fn new() -> Self {
        Self::default()
    }

    /// The start-state bag.
    pub fn from_side(&self) -> &PropertyBag {
        &self.from
    }

    /// The end-state bag.
    pub fn to_side(&self) -> &PropertyBag {
        &self.to
    }

    /// The bag for a side.
    pub fn side(&self, side: KeyframeSide) -> &PropertyBag {
        match side {
            KeyframeSide::From => &self.from,
            KeyframeSide::To => &self.to,
        }
    }

    /// Properties animated by this pair, in stable order.
    pub fn properties(&self) -> impl Iterator<Item = StyleProperty> + '_ {
        self.from.properties()
    }

    /// Whether a property is animated by this pair.
    pub fn contains(&self, property: StyleProperty) -> bool {
        self.from.contains(property)
    }

    /// Number of animated properties.
    pub fn len(&self) -> usize {
        self.from.len()
    }

    /// Whether the pair animates nothing.
    pub fn is_empty(&self) -> bool {
        self.from.is_empty()
    }

    /// The value of a property on one side, if the property is animated.
    pub fn value(&self, side: KeyframeSide, property: StyleProperty) -> Option<&PropertyValue> {
        self.side(side).get(property)
    }

    /// Add a property to both sides, seeded with its catalog default.
    ///
    /// Returns `false` without changing anything if the property is already
    /// present.
    pub fn add_property(&mut self, property: StyleProperty) -> bool {
        if self.from.contains(property) {
            return false;
        }
        let default = property.default_value();
        self.from.set(property, default.clone());
        self.to.set(property, default);
        true
    }

    /// Add a property by catalog name. Unknown names are a silent no-op.
    pub fn add_property_named(&mut self, name: &str) -> bool {
        match StyleProperty::parse(name) {
            Some(property) => self.add_property(property),
            None => false,
        }
    }

    /// Strict flavor of [`add_property_named`](Self::add_property_named):
    /// rejects unknown names instead of ignoring them.
    pub fn try_add_property_named(&mut self, name: &str) -> Result<bool> {
        let property = StyleProperty::parse(name).ok_or_else(|| StyleError::UnknownProperty {
            name: name.to_string(),
        })?;
        Ok(self.add_property(property))
    }

    /// Remove a property from both sides. No-op if absent.
    pub fn remove_property(&mut self, property: StyleProperty) -> bool {
        let removed = self.from.remove(property).is_some();
        if removed {
            self.to.remove(property);
        }
        removed
    }

    /// Set the value of an already-added property on one side.
    ///
    /// Returns `false` without writing if the property was never added;
    /// callers add first.
    pub fn set_value(
        &mut self,
        side: KeyframeSide,
        property: StyleProperty,
        value: PropertyValue,
    ) -> bool {
        if !self.from.contains(property) {
            return false;
        }
        match side {
            KeyframeSide::From => self.from.set(property, value),
            KeyframeSide::To => self.to.set(property, value),
        }
        true
    }

    /// Strict flavor of [`set_value`](Self::set_value): a write to a
    /// never-added property is rejected.
    pub fn try_set_value(
        &mut self,
        side: KeyframeSide,
        property: StyleProperty,
        value: PropertyValue,
    ) -> Result<()> {
        if !self.from.contains(property) {
            return Err(StyleError::MissingOverrideTarget {
                property: property.name().to_string(),
                side,
            });
        }
        self.set_value(side, property, value);
        Ok(())
    }
}
