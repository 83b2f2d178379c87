//! The material record: material-level and per-phase properties, optional
//! solidification conditions, and a section for calculated results.

use std::path::Path;

use indexmap::IndexMap;
use ramen_core::error::PropertyOwner;
use ramen_core::{
    CalculatedQuantities, PhasePropertySet, PhysicalQuantity, Property, PropertySource,
    SolidificationState,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::StoreError;

/// Calculated results written back by
/// [`MaterialRecord::record_evaluation`].
///
/// Kept apart from the input properties so a record never reads its own
/// outputs as inputs.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Microstructure {
    /// Volume fraction per phase.
    #[serde(default)]
    pub phase_fractions: IndexMap<String, PhysicalQuantity>,
    /// Spacing, strengthening contributions, and yield strength.
    #[serde(default)]
    pub properties: PhasePropertySet,
}

impl Microstructure {
    /// True when no result has been recorded.
    pub fn is_empty(&self) -> bool {
        self.phase_fractions.is_empty() && self.properties.is_empty()
    }
}

/// An in-memory material record.
///
/// Implements [`PropertySource`] over the material-level `properties` and
/// the per-phase `phases` sections. JSON layout:
///
/// ```json
/// {
///   "name": "Al-Cu",
///   "properties": {
///     "hall_petch_coefficient": { "name": "...", "unit": "...", "value": 4.0e4 }
///   },
///   "phases": {
///     "alpha": {
///       "solubility_limit": { "name": "...", "unit": "at.%", "value": 0.17 }
///     },
///     "liquid": {
///       "solute_diffusivities": {
///         "Cu": { "name": "Cu", "unit": "m^2/s", "value": 3.0e-9 }
///       }
///     }
///   },
///   "solidification": { "composition": { ... }, "velocity": 1.3, "grain_diameter": 5.0e-6 }
/// }
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MaterialRecord {
    name: String,
    #[serde(default)]
    properties: PhasePropertySet,
    #[serde(default)]
    phases: IndexMap<String, PhasePropertySet>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    solidification: Option<SolidificationState>,
    #[serde(default, skip_serializing_if = "Microstructure::is_empty")]
    microstructure: Microstructure,
}

impl MaterialRecord {
    /// Create an empty record.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Parse a record from a JSON document.
    ///
    /// # Errors
    ///
    /// [`StoreError::Json`] for malformed documents and
    /// [`StoreError::NameMismatch`] when a quantity's name differs from
    /// the key it is stored under.
    pub fn from_json_str(json: &str) -> Result<Self, StoreError> {
        let record: Self = serde_json::from_str(json)?;
        record.check_names()?;
        debug!(
            material = %record.name,
            phases = record.phases.len(),
            "loaded material record"
        );
        Ok(record)
    }

    /// Read and parse a record from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Serialise the record (including recorded results) as pretty JSON.
    pub fn to_json_string(&self) -> Result<String, StoreError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    fn check_names(&self) -> Result<(), StoreError> {
        check_set(PropertyOwner::Material, &self.properties)?;
        for (phase, set) in &self.phases {
            check_set(PropertyOwner::phase(phase.as_str()), set)?;
        }
        Ok(())
    }

    /// The material name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Material-level properties.
    pub fn properties(&self) -> &PhasePropertySet {
        &self.properties
    }

    /// Store a material-level quantity under its own name.
    pub fn set_material_property(&mut self, quantity: PhysicalQuantity) -> Option<Property> {
        self.properties.insert_quantity(quantity)
    }

    /// Add a new phase.
    ///
    /// # Errors
    ///
    /// [`StoreError::DuplicatePhase`] if the name is already taken.
    pub fn add_phase(
        &mut self,
        phase: impl Into<String>,
        set: PhasePropertySet,
    ) -> Result<(), StoreError> {
        let phase = phase.into();
        if self.phases.contains_key(&phase) {
            return Err(StoreError::DuplicatePhase {
                material: self.name.clone(),
                phase,
            });
        }
        self.phases.insert(phase, set);
        Ok(())
    }

    /// Property set of one phase.
    pub fn phase(&self, phase: &str) -> Option<&PhasePropertySet> {
        self.phases.get(phase)
    }

    /// Mutable property set of one phase.
    pub fn phase_mut(&mut self, phase: &str) -> Option<&mut PhasePropertySet> {
        self.phases.get_mut(phase)
    }

    /// Phase names in insertion order.
    pub fn phase_names(&self) -> impl Iterator<Item = &str> {
        self.phases.keys().map(String::as_str)
    }

    /// Solidification conditions stored with the record, if any.
    pub fn solidification(&self) -> Option<&SolidificationState> {
        self.solidification.as_ref()
    }

    /// Replace the stored solidification conditions.
    pub fn set_solidification(&mut self, state: SolidificationState) {
        self.solidification = Some(state);
    }

    /// Results recorded so far.
    pub fn microstructure(&self) -> &Microstructure {
        &self.microstructure
    }

    /// Write calculated results into the microstructure section.
    ///
    /// Each phase receives its own volume fraction. Every quantity
    /// replaces any previous one under the same name. Nothing in the
    /// engine calls this; write-back is always the caller's decision.
    pub fn record_evaluation(&mut self, results: &CalculatedQuantities) {
        for (phase, fraction) in &results.phase_fractions {
            self.microstructure
                .phase_fractions
                .insert(phase.clone(), fraction.clone());
        }
        for quantity in &results.quantities {
            self.microstructure.properties.insert_quantity(quantity.clone());
        }
        debug!(
            material = %self.name,
            phases = results.phase_fractions.len(),
            quantities = results.quantities.len(),
            "recorded evaluation"
        );
    }

    /// Drop all recorded results.
    pub fn clear_microstructure(&mut self) {
        self.microstructure = Microstructure::default();
    }
}

fn check_set(owner: PropertyOwner, set: &PhasePropertySet) -> Result<(), StoreError> {
    let mismatch = set.iter().find_map(|(key, property)| match property {
        Property::Quantity(q) => (q.name() != key).then_some((key, q)),
        Property::PerSolute(map) => map
            .iter()
            .find(|(solute, q)| q.name() != solute.as_str())
            .map(|(solute, q)| (solute.as_str(), q)),
    });
    match mismatch {
        Some((key, q)) => Err(StoreError::NameMismatch {
            owner,
            key: key.to_string(),
            name: q.name().to_string(),
        }),
        None => Ok(()),
    }
}

impl PropertySource for MaterialRecord {
    fn phase_property(&self, phase: &str, name: &str) -> Option<&Property> {
        self.phases.get(phase)?.get(name)
    }

    fn material_property(&self, name: &str) -> Option<&Property> {
        self.properties.get(name)
    }
}
