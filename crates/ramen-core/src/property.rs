//! Property entries and per-phase property sets.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::quantity::PhysicalQuantity;

/// One entry in a property set.
///
/// Most properties are a single [`PhysicalQuantity`]. A few (solute
/// diffusivities, solute misfit strains) are keyed by solute element.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Property {
    /// A single quantity.
    Quantity(PhysicalQuantity),
    /// One quantity per solute element, in insertion order.
    PerSolute(IndexMap<String, PhysicalQuantity>),
}

impl Property {
    /// The single quantity, or `None` for per-solute entries.
    pub fn as_quantity(&self) -> Option<&PhysicalQuantity> {
        match self {
            Self::Quantity(q) => Some(q),
            Self::PerSolute(_) => None,
        }
    }

    /// The per-solute mapping, or `None` for single quantities.
    pub fn as_per_solute(&self) -> Option<&IndexMap<String, PhysicalQuantity>> {
        match self {
            Self::Quantity(_) => None,
            Self::PerSolute(map) => Some(map),
        }
    }
}

impl From<PhysicalQuantity> for Property {
    fn from(q: PhysicalQuantity) -> Self {
        Self::Quantity(q)
    }
}

/// Mapping from property name to [`Property`] for a single phase
/// (e.g. `alpha`, `theta`, `liquid`).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PhasePropertySet {
    properties: IndexMap<String, Property>,
}

impl PhasePropertySet {
    /// Create an empty property set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a property by name.
    pub fn get(&self, name: &str) -> Option<&Property> {
        self.properties.get(name)
    }

    /// Store a property, replacing any previous entry under the same name.
    ///
    /// Returns the replaced entry.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        property: impl Into<Property>,
    ) -> Option<Property> {
        self.properties.insert(name.into(), property.into())
    }

    /// Store a single quantity under its own name.
    pub fn insert_quantity(&mut self, quantity: PhysicalQuantity) -> Option<Property> {
        let name = quantity.name().to_string();
        self.insert(name, quantity)
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, name: impl Into<String>, property: impl Into<Property>) -> Self {
        self.insert(name, property);
        self
    }

    /// Builder-style per-solute insert.
    pub fn with_per_solute<I, S>(mut self, name: impl Into<String>, entries: I) -> Self
    where
        I: IntoIterator<Item = (S, PhysicalQuantity)>,
        S: Into<String>,
    {
        let map = entries.into_iter().map(|(k, v)| (k.into(), v)).collect();
        self.insert(name, Property::PerSolute(map));
        self
    }

    /// Remove a property, returning it if present.
    pub fn remove(&mut self, name: &str) -> Option<Property> {
        self.properties.shift_remove(name)
    }

    /// Property names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.properties.keys().map(String::as_str)
    }

    /// `(name, property)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Property)> {
        self.properties.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of properties in the set.
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// True when the set holds no properties.
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}
