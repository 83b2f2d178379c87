//! Which phases of a material take part in an evaluation.

use ramen_core::keys;
use serde::{Deserialize, Serialize};

/// Phase names for one binary eutectic system.
///
/// `alpha` and `beta` are the eutectic pair, with the lever rule and the
/// series term evaluated for `alpha`. Strengthening reads crystal
/// constants from `matrix` and the lamella fraction of `secondary`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EutecticSystem {
    /// First eutectic phase.
    pub alpha: String,
    /// Second eutectic phase.
    pub beta: String,
    /// Phase carrying the liquid solute diffusivities.
    pub liquid: String,
    /// Phase whose crystal constants control strengthening.
    pub matrix: String,
    /// Phase forming the strengthening lamellae.
    pub secondary: String,
}

impl EutecticSystem {
    /// The usual setup: `alpha` is the matrix, `beta` the lamellae, and
    /// the liquid phase is named `"liquid"`.
    pub fn binary(alpha: impl Into<String>, beta: impl Into<String>) -> Self {
        let alpha = alpha.into();
        let beta = beta.into();
        Self {
            matrix: alpha.clone(),
            secondary: beta.clone(),
            liquid: keys::LIQUID_PHASE.to_string(),
            alpha,
            beta,
        }
    }

    /// Same phases with a different liquid phase name.
    pub fn with_liquid(mut self, liquid: impl Into<String>) -> Self {
        self.liquid = liquid.into();
        self
    }
}
