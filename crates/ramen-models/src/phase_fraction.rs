//! Lever-rule volume fractions of the two eutectic phases.
//!
//! ```text
//! g_alpha = (c_avg - c_e_beta) / (c_e_alpha - c_e_beta)
//! g_beta  = 1 - g_alpha
//! ```
//!
//! Compositions only need to share a unit (the reference data uses at.%).

use ramen_core::{keys, DomainError, ModelError, PropertySource};
use serde::{Deserialize, Serialize};

const MODEL: &str = "lever rule";

/// Volume fractions of the two eutectic phases. `alpha + beta == 1`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PhaseFractions {
    /// Fraction of the first (alpha) phase.
    pub alpha: f64,
    /// Fraction of the second (beta) phase.
    pub beta: f64,
}

impl PhaseFractions {
    /// True when both fractions lie in `[0, 1]`, i.e. the average
    /// composition is inside the eutectic coexistence range.
    pub fn within_coexistence(&self) -> bool {
        (0.0..=1.0).contains(&self.alpha) && (0.0..=1.0).contains(&self.beta)
    }

    /// Fail unless [`within_coexistence`](Self::within_coexistence).
    pub fn check_coexistence(&self) -> Result<(), DomainError> {
        if self.within_coexistence() {
            Ok(())
        } else {
            Err(DomainError::new(
                MODEL,
                "average composition",
                format!(
                    "outside the eutectic coexistence range (g_alpha = {}, g_beta = {})",
                    self.alpha, self.beta
                ),
            ))
        }
    }
}

/// Apply the lever rule without checking the coexistence range.
///
/// Callers that treat an out-of-range composition as a warning use this
/// and inspect [`PhaseFractions::within_coexistence`] themselves.
///
/// # Errors
///
/// Returns a [`DomainError`] if the two solubility limits are equal
/// (degenerate system) or any input is not finite.
pub fn lever_rule(
    c_e_alpha: f64,
    c_e_beta: f64,
    c_avg: f64,
) -> Result<PhaseFractions, DomainError> {
    for (quantity, value) in [
        ("alpha solubility limit", c_e_alpha),
        ("beta solubility limit", c_e_beta),
        ("average composition", c_avg),
    ] {
        if !value.is_finite() {
            return Err(DomainError::new(MODEL, quantity, format!("must be finite, got {value}")));
        }
    }
    let span = c_e_alpha - c_e_beta;
    if span == 0.0 {
        return Err(DomainError::new(
            MODEL,
            "solubility limits",
            format!("alpha and beta limits are equal ({c_e_alpha}); the system is degenerate"),
        ));
    }
    let alpha = (c_avg - c_e_beta) / span;
    Ok(PhaseFractions {
        alpha,
        beta: 1.0 - alpha,
    })
}

/// Phase fractions from the two solubility limits and the average
/// composition.
///
/// # Errors
///
/// Everything [`lever_rule`] rejects, plus compositions outside the
/// eutectic coexistence range.
pub fn phase_fractions(
    c_e_alpha: f64,
    c_e_beta: f64,
    c_avg: f64,
) -> Result<PhaseFractions, DomainError> {
    let fractions = lever_rule(c_e_alpha, c_e_beta, c_avg)?;
    fractions.check_coexistence()?;
    Ok(fractions)
}

/// Read both solubility limits from `source` and apply the lever rule
/// without the coexistence check.
pub fn lever_rule_from_source(
    source: &impl PropertySource,
    alpha_phase: &str,
    beta_phase: &str,
    c_avg: f64,
) -> Result<PhaseFractions, ModelError> {
    let c_e_alpha = source.phase_scalar(alpha_phase, keys::SOLUBILITY_LIMIT)?;
    let c_e_beta = source.phase_scalar(beta_phase, keys::SOLUBILITY_LIMIT)?;
    Ok(lever_rule(c_e_alpha, c_e_beta, c_avg)?)
}
