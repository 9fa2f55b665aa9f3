//! Sparse property bags: the atomic unit of every override layer.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::catalog::{PropertyValue, StyleProperty};

/// A sparse map of style property to value.
///
/// A key is either entirely absent (inherit) or present with a concrete
/// value (override); there is no null sentinel. Backed by a `BTreeMap` so
/// iteration and serialization order are stable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertyBag {
    values: BTreeMap<StyleProperty, PropertyValue>,
}

impl PropertyBag {
    /// Create a new empty bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the value for a property, if overridden here.
    pub fn get(&self, property: StyleProperty) -> Option<&PropertyValue> {
        self.values.get(&property)
    }

    /// Set a property value, replacing any previous one.
    pub fn set(&mut self, property: StyleProperty, value: PropertyValue) {
        self.values.insert(property, value);
    }

    /// Remove a property override. Returns the removed value, if any.
    pub fn remove(&mut self, property: StyleProperty) -> Option<PropertyValue> {
        self.values.remove(&property)
    }

    /// Check whether a property is overridden in this bag.
    pub fn contains(&self, property: StyleProperty) -> bool {
        self.values.contains_key(&property)
    }

    /// Check if the bag has no overrides.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of overridden properties.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Remove every override.
    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Iterate over all property-value pairs in stable order.
    pub fn iter(&self) -> impl Iterator<Item = (StyleProperty, &PropertyValue)> {
        self.values.iter().map(|(k, v)| (*k, v))
    }

    /// Iterate over the overridden properties in stable order.
    pub fn properties(&self) -> impl Iterator<Item = StyleProperty> + '_ {
        self.values.keys().copied()
    }

    /// Copy every override from `other` into this bag (override wins per key).
    pub fn merge_from(&mut self, other: &PropertyBag) {
        for (property, value) in other.iter() {
            self.values.insert(property, value.clone());
        }
    }

    /// Produce a new bag with `other` overlaid on top of this one.
    pub fn overlay(&self, other: &PropertyBag) -> PropertyBag {
        let mut merged = self.clone();
        merged.merge_from(other);
        merged
    }
}

impl FromIterator<(StyleProperty, PropertyValue)> for PropertyBag {
    fn from_iter<T: IntoIterator<Item = (StyleProperty, PropertyValue)>>(iter: T) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}
