//! Computed quantities on their way back to a property store.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::quantity::PhysicalQuantity;

/// Results of one evaluation, converted to [`PhysicalQuantity`] records.
///
/// Producing this never touches a store. Writing it back is a separate,
/// explicit step taken by the caller.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CalculatedQuantities {
    /// Volume fraction of each phase, keyed by phase name.
    pub phase_fractions: IndexMap<String, PhysicalQuantity>,
    /// Material-level results (lamellar spacing, strengthening terms).
    pub quantities: Vec<PhysicalQuantity>,
}

impl CalculatedQuantities {
    /// Look up a material-level result by name.
    pub fn quantity(&self, name: &str) -> Option<&PhysicalQuantity> {
        self.quantities.iter().find(|q| q.name() == name)
    }

    /// True when nothing was computed.
    pub fn is_empty(&self) -> bool {
        self.phase_fractions.is_empty() && self.quantities.is_empty()
    }
}
