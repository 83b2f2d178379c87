//! Results of a full process → structure → property evaluation.

use ramen_core::{keys, CalculatedQuantities, PhysicalQuantity};
use ramen_models::{PhaseFractions, StrengtheningResult};
use serde::{Deserialize, Serialize};

use crate::system::EutecticSystem;

/// Solidification microstructure at one set of conditions.
///
/// Always inside the coexistence range: the spacing model rejects phase
/// fractions outside `(0, 1)` under every [`FractionPolicy`](crate::FractionPolicy).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MicrostructureResult {
    /// Lever-rule fractions of the eutectic pair.
    pub phase_fractions: PhaseFractions,
    /// Jackson–Hunt lamellar spacing (m).
    pub lamellar_spacing: f64,
}

/// Microstructure plus the strengthening it implies.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    /// Phase fractions and lamellar spacing.
    pub microstructure: MicrostructureResult,
    /// Strengthening contributions and yield strength.
    pub strengthening: StrengtheningResult,
}

impl Evaluation {
    /// Total yield strength (Pa).
    pub fn yield_strength(&self) -> f64 {
        self.strengthening.yield_strength
    }

    /// Convert to quantity records for an explicit write-back.
    pub fn to_quantities(&self, system: &EutecticSystem) -> CalculatedQuantities {
        let micro = &self.microstructure;
        let s = &self.strengthening;
        let mut out = CalculatedQuantities::default();
        for (phase, g) in [
            (&system.alpha, micro.phase_fractions.alpha),
            (&system.beta, micro.phase_fractions.beta),
        ] {
            out.phase_fractions.insert(
                phase.clone(),
                PhysicalQuantity::calculated(keys::PHASE_VOLUME_FRACTION, "None", g)
                    .with_label(format!("Volume fraction ({phase})"))
                    .with_symbol("$g$"),
            );
        }
        out.quantities = vec![
            PhysicalQuantity::calculated(
                keys::EUTECTIC_LAMELLAR_SPACING,
                "m",
                micro.lamellar_spacing,
            )
                .with_label("Eutectic lamellar spacing")
                .with_symbol("$\\lambda$"),
            PhysicalQuantity::calculated(keys::OROWAN_STRENGTHENING, "Pa", s.orowan)
                .with_label("Orowan strengthening, eutectic lamellae"),
            PhysicalQuantity::calculated(keys::SOLID_SOLUTION_STRENGTHENING, "Pa", s.solid_solution)
                .with_label("Solid solution strengthening"),
            PhysicalQuantity::calculated(keys::GRAIN_BOUNDARY_STRENGTHENING, "Pa", s.grain_boundary)
                .with_label("Grain boundary strengthening"),
            PhysicalQuantity::calculated(keys::YIELD_STRENGTH, "Pa", s.yield_strength)
                .with_label("Yield strength")
                .with_symbol("$\\sigma_y$"),
        ];
        out
    }
}
