//! Solidification conditions supplied by the caller.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::{PropertyError, PropertyOwner};
use crate::quantity::PhysicalQuantity;

/// Average alloy composition: one at.% quantity per element plus the
/// designated list of solute elements.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Composition {
    solute_elements: SmallVec<[String; 2]>,
    elements: IndexMap<String, PhysicalQuantity>,
}

impl Composition {
    /// Create an empty composition.
    pub fn new() -> Self {
        Self::default()
    }

    /// Binary alloy with one solute at `at_percent`.
    pub fn binary(solute: impl Into<String>, at_percent: f64) -> Self {
        let solute = solute.into();
        let quantity = PhysicalQuantity::new(solute.clone(), "at.%", at_percent)
            .with_label(format!("Composition ({solute})"))
            .with_reference("Manually set by user");
        Self::new().with_solute(quantity)
    }

    /// Add (or replace) a solute element, named after the quantity.
    pub fn with_solute(mut self, quantity: PhysicalQuantity) -> Self {
        let element = quantity.name().to_string();
        if !self.solute_elements.contains(&element) {
            self.solute_elements.push(element.clone());
        }
        self.elements.insert(element, quantity);
        self
    }

    /// Designated solute elements in insertion order.
    pub fn solute_elements(&self) -> &[String] {
        &self.solute_elements
    }

    /// Composition quantity of one element.
    pub fn element(&self, element: &str) -> Option<&PhysicalQuantity> {
        self.elements.get(element)
    }

    /// The single solute of a binary alloy and its at.% value.
    ///
    /// # Errors
    ///
    /// [`PropertyError::NotBinary`] unless exactly one solute is designated,
    /// [`PropertyError::NotFound`] if that solute has no quantity, and
    /// [`PropertyError::UnexpectedShape`] if the quantity is not a scalar.
    pub fn single_solute(&self) -> Result<(&str, f64), PropertyError> {
        let [solute] = self.solute_elements.as_slice() else {
            return Err(PropertyError::NotBinary {
                owner: PropertyOwner::Composition,
                property: "solute_elements".to_string(),
                entries: self.solute_elements.len(),
            });
        };
        let quantity = self
            .element(solute)
            .ok_or_else(|| PropertyError::not_found(PropertyOwner::Composition, solute.as_str()))?;
        let value = quantity
            .scalar()
            .ok_or_else(|| PropertyError::UnexpectedShape {
                owner: PropertyOwner::Composition,
                property: solute.clone(),
                expected: "scalar",
            })?;
        Ok((solute.as_str(), value))
    }
}

/// Process conditions for one evaluation.
///
/// Set by the caller; the engine only reads it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SolidificationState {
    /// Average alloy composition.
    pub composition: Composition,
    /// Solidification velocity (m/s).
    pub velocity: f64,
    /// Average grain diameter (m).
    pub grain_diameter: f64,
}

impl SolidificationState {
    /// Conditions for a binary alloy.
    pub fn binary(
        solute: impl Into<String>,
        at_percent: f64,
        velocity: f64,
        grain_diameter: f64,
    ) -> Self {
        Self {
            composition: Composition::binary(solute, at_percent),
            velocity,
            grain_diameter,
        }
    }

    /// Same composition and grain size at a different velocity.
    pub fn with_velocity(&self, velocity: f64) -> Self {
        Self {
            velocity,
            ..self.clone()
        }
    }
}
