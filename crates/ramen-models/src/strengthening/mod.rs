//! Strengthening contributions to the yield strength.
//!
//! Three independent models, each returning a stress in Pa:
//!
//! - [`orowan`]: dislocation bypass of eutectic lamellae.
//! - [`solid_solution`]: lattice misfit of dissolved solute.
//! - [`hall_petch`]: grain-boundary strengthening.
//!
//! Models from Michi et al., Mater. Sci. Eng. A 840, 142928 (2022) and
//! Zhou et al., J. Mater. Sci. 55, 14611–14625 (2020).

pub mod hall_petch;
pub mod orowan;
pub mod solid_solution;

use ramen_core::{keys, DomainError, PropertyError, PropertySource};
use serde::{Deserialize, Serialize};

use crate::superposition::total_yield_strength;

/// Crystal-plasticity constants of the matrix phase.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatrixProperties {
    /// Taylor factor `M`.
    pub taylor_factor: f64,
    /// Shear modulus `G` of the base element (Pa).
    pub shear_modulus: f64,
    /// Burgers vector `b` of the base element (m).
    pub burgers_vector: f64,
    /// Poisson ratio `ν` of the base element.
    pub poisson_ratio: f64,
}

impl MatrixProperties {
    /// Read the matrix constants of `phase` from `source`.
    pub fn from_source(source: &impl PropertySource, phase: &str) -> Result<Self, PropertyError> {
        Ok(Self {
            taylor_factor: source.phase_scalar(phase, keys::TAYLOR_FACTOR)?,
            shear_modulus: source.phase_scalar(phase, keys::SHEAR_MODULUS)?,
            burgers_vector: source.phase_scalar(phase, keys::BURGERS_VECTOR)?,
            poisson_ratio: source.phase_scalar(phase, keys::POISSON_RATIO)?,
        })
    }
}

/// Reject NaN/Inf results so they never reach the superposition.
pub(crate) fn finite(model: &'static str, value: f64) -> Result<f64, DomainError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(DomainError::new(model, "result", format!("evaluated to {value}")))
    }
}

/// The three strengthening contributions and their sum (all Pa).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct StrengtheningResult {
    /// Orowan strengthening from eutectic lamellae.
    pub orowan: f64,
    /// Solid-solution strengthening.
    pub solid_solution: f64,
    /// Grain-boundary (Hall–Petch) strengthening.
    pub grain_boundary: f64,
    /// Linear superposition of the three contributions.
    pub yield_strength: f64,
}

impl StrengtheningResult {
    /// Sum the contributions into a result.
    pub fn from_contributions(
        orowan: f64,
        solid_solution: f64,
        grain_boundary: f64,
    ) -> Result<Self, DomainError> {
        let yield_strength = total_yield_strength(&[orowan, solid_solution, grain_boundary])?;
        Ok(Self {
            orowan,
            solid_solution,
            grain_boundary,
            yield_strength,
        })
    }

    /// The individual contributions, in declaration order.
    pub fn contributions(&self) -> [f64; 3] {
        [self.orowan, self.solid_solution, self.grain_boundary]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn result_sums_contributions() {
        let r = StrengtheningResult::from_contributions(500.0e6, 150.0e6, 18.0e6).unwrap();
        assert_eq!(r.yield_strength, 500.0e6 + 150.0e6 + 18.0e6);
        assert_eq!(r.contributions(), [500.0e6, 150.0e6, 18.0e6]);
    }

    #[test]
    fn non_finite_contribution_is_rejected() {
        assert!(StrengtheningResult::from_contributions(f64::NAN, 1.0, 1.0).is_err());
        assert!(finite("test", f64::INFINITY).is_err());
        assert_eq!(finite("test", 2.0), Ok(2.0));
    }
}
