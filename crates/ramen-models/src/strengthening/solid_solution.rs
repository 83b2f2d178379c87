//! Solid-solution strengthening from solute lattice misfit.
//!
//! ```text
//! Δσ = M · (3/8)^(2/3) · ((1+ν)/(1−ν))^(4/3) · (w/b)^(1/3) · G · |ε|^(4/3) · c^(2/3)
//! ```
//!
//! The dislocation core width is fixed at `w = 5b`, and the matrix solute
//! fraction `c` is taken as the matrix phase's solubility limit (at.%)
//! divided by 100.

use ramen_core::{keys, DomainError, ModelError, PropertySource};

use super::{finite, MatrixProperties};

const MODEL: &str = "solid solution strengthening";

/// Dislocation core width in units of the Burgers vector.
pub const CORE_WIDTH_IN_BURGERS: f64 = 5.0;

/// Matrix solute fraction assumed for a solubility limit in at.%.
pub fn matrix_solute_fraction(solubility_limit_at_percent: f64) -> f64 {
    0.01 * solubility_limit_at_percent
}

/// Solid-solution strengthening (Pa) for a solute with `misfit_strain`
/// at atomic fraction `solute_fraction` in the matrix.
///
/// # Errors
///
/// Returns a [`DomainError`] if `ν ≥ 1` or `solute_fraction` is negative.
/// `ν ≤ −1` is rejected as well: the thermodynamic bound on the Poisson
/// ratio is `−1 < ν`, and below it `(1+ν)/(1−ν)` has no real power.
pub fn solid_solution_strengthening(
    matrix: &MatrixProperties,
    misfit_strain: f64,
    solute_fraction: f64,
) -> Result<f64, DomainError> {
    let nu = matrix.poisson_ratio;
    if !(nu > -1.0 && nu < 1.0) {
        return Err(DomainError::new(
            MODEL,
            "poisson ratio",
            format!("must lie in (-1, 1), got {nu}"),
        ));
    }
    if !(solute_fraction >= 0.0) {
        return Err(DomainError::new(
            MODEL,
            "solute fraction",
            format!("must be non-negative, got {solute_fraction}"),
        ));
    }

    let poisson_term = ((1.0 + nu) / (1.0 - nu)).powf(4.0 / 3.0);
    let sigma = matrix.taylor_factor
        * (3.0_f64 / 8.0).powf(2.0 / 3.0)
        * poisson_term
        * CORE_WIDTH_IN_BURGERS.powf(1.0 / 3.0)
        * matrix.shear_modulus
        * misfit_strain.abs().powf(4.0 / 3.0)
        * solute_fraction.powf(2.0 / 3.0);
    finite(MODEL, sigma)
}

/// Read the single solute misfit strain and the solubility limit of
/// `matrix_phase`, then evaluate [`solid_solution_strengthening`] with
/// already loaded matrix constants.
pub fn solid_solution_for(
    matrix: &MatrixProperties,
    source: &impl PropertySource,
    matrix_phase: &str,
) -> Result<f64, ModelError> {
    let misfit = source.single_solute_scalar(matrix_phase, keys::SOLUTE_MISFIT_STRAINS)?;
    let c_matrix = source.phase_scalar(matrix_phase, keys::SOLUBILITY_LIMIT)?;
    Ok(solid_solution_strengthening(matrix, misfit, matrix_solute_fraction(c_matrix))?)
}

/// Read the matrix constants of `matrix_phase` as well and evaluate
/// [`solid_solution_for`].
pub fn solid_solution_from_source(
    source: &impl PropertySource,
    matrix_phase: &str,
) -> Result<f64, ModelError> {
    let matrix = MatrixProperties::from_source(source, matrix_phase)?;
    solid_solution_for(&matrix, source, matrix_phase)
}
