//! Orowan strengthening from dislocation bypass of eutectic lamellae.
//!
//! ```text
//! R  = λ / sqrt(3π/(4·g_s) − 1.64)
//! Δσ = M · 0.4 · G · b / (π · sqrt(1 − ν)) · ln(2R/b) / λ
//! ```
//!
//! The lamellae are treated as an equivalent dispersion of obstacles of
//! radius `R`, derived from the spacing `λ` and the secondary-phase
//! fraction `g_s`.

use std::f64::consts::PI;

use ramen_core::{DomainError, ModelError, PropertySource};

use super::{finite, MatrixProperties};

const MODEL: &str = "orowan strengthening";

/// Effective obstacle radius `R` of the secondary phase (m).
///
/// # Errors
///
/// Returns a [`DomainError`] if `spacing` is not positive, `g_secondary`
/// is not positive, or `3π/(4·g_secondary) ≤ 1.64` (the radius would be
/// imaginary or infinite).
pub fn effective_obstacle_radius(spacing: f64, g_secondary: f64) -> Result<f64, DomainError> {
    if !(spacing > 0.0) || !spacing.is_finite() {
        return Err(DomainError::new(
            MODEL,
            "lamellar spacing",
            format!("must be positive, got {spacing}"),
        ));
    }
    if !(g_secondary > 0.0) || !g_secondary.is_finite() {
        return Err(DomainError::new(
            MODEL,
            "secondary phase fraction",
            format!("must be positive, got {g_secondary}"),
        ));
    }
    let geometric = 3.0 * PI / (4.0 * g_secondary) - 1.64;
    if !(geometric > 0.0) {
        return Err(DomainError::new(
            MODEL,
            "secondary phase fraction",
            format!("g = {g_secondary} is too large for the obstacle geometry (3π/(4g) ≤ 1.64)"),
        ));
    }
    Ok(spacing / geometric.sqrt())
}

/// Orowan strengthening (Pa) for lamellae at `spacing` (m) with secondary
/// volume fraction `g_secondary`.
///
/// # Errors
///
/// Everything [`effective_obstacle_radius`] rejects, plus `ν ≥ 1`, a
/// non-positive Burgers vector, and obstacles with `2R ≤ b` (the log term
/// would turn the contribution negative).
pub fn orowan_strengthening(
    matrix: &MatrixProperties,
    spacing: f64,
    g_secondary: f64,
) -> Result<f64, DomainError> {
    let b = matrix.burgers_vector;
    if !(b > 0.0) {
        return Err(DomainError::new(
            MODEL,
            "burgers vector",
            format!("must be positive, got {b}"),
        ));
    }
    let nu = matrix.poisson_ratio;
    if !(nu < 1.0) {
        return Err(DomainError::new(
            MODEL,
            "poisson ratio",
            format!("must be below 1, got {nu}"),
        ));
    }
    let radius = effective_obstacle_radius(spacing, g_secondary)?;
    if !(2.0 * radius > b) {
        return Err(DomainError::new(
            MODEL,
            "obstacle radius",
            format!("2R = {} must exceed the burgers vector {b}", 2.0 * radius),
        ));
    }

    let prefactor =
        matrix.taylor_factor * 0.4 * matrix.shear_modulus * b / (PI * (1.0 - nu).sqrt());
    finite(MODEL, prefactor * (2.0 * radius / b).ln() / spacing)
}

/// Read the matrix constants of `matrix_phase` from `source` and evaluate
/// [`orowan_strengthening`].
pub fn orowan_from_source(
    source: &impl PropertySource,
    matrix_phase: &str,
    spacing: f64,
    g_secondary: f64,
) -> Result<f64, ModelError> {
    let matrix = MatrixProperties::from_source(source, matrix_phase)?;
    Ok(orowan_strengthening(&matrix, spacing, g_secondary)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn aluminium() -> MatrixProperties {
        MatrixProperties {
            taylor_factor: 3.06,
            shear_modulus: 26.2e9,
            burgers_vector: 2.86e-10,
            poisson_ratio: 0.347,
        }
    }

    const SPACING: f64 = 2.473_877_219_842_189_6e-8;
    const G_THETA: f64 = 0.076_583_674_755_751_67;

    #[test]
    fn alcu_reference_value() {
        let radius = effective_obstacle_radius(SPACING, G_THETA).unwrap();
        assert!((radius - 4.5839e-9).abs() < 1e-12, "R = {radius}");
        let sigma = orowan_strengthening(&aluminium(), SPACING, G_THETA).unwrap();
        assert!((sigma / 1.0e6 - 506.379).abs() < 0.01, "Δσ = {sigma}");
    }

    #[test]
    fn finer_spacing_is_stronger() {
        let coarse = orowan_strengthening(&aluminium(), 2.0 * SPACING, G_THETA).unwrap();
        let fine = orowan_strengthening(&aluminium(), SPACING, G_THETA).unwrap();
        assert!(fine > coarse);
    }

    #[test]
    fn obstacles_smaller_than_burgers_vector_are_rejected() {
        // R ≈ 0.93 Å, so 2R < b and ln(2R/b) < 0
        let err = orowan_strengthening(&aluminium(), 5.0e-10, G_THETA).unwrap_err();
        assert_eq!(err.quantity, "obstacle radius");
    }

    #[test]
    fn large_secondary_fraction_is_rejected() {
        // 3π/(4·1.5) ≈ 1.571 < 1.64
        let err = effective_obstacle_radius(SPACING, 1.5).unwrap_err();
        assert_eq!(err.quantity, "secondary phase fraction");
        assert!(orowan_strengthening(&aluminium(), SPACING, 0.0).is_err());
        assert!(orowan_strengthening(&aluminium(), SPACING, -0.1).is_err());
    }

    #[test]
    fn poisson_ratio_of_one_is_rejected() {
        let matrix = MatrixProperties {
            poisson_ratio: 1.0,
            ..aluminium()
        };
        let err = orowan_strengthening(&matrix, SPACING, G_THETA).unwrap_err();
        assert_eq!(err.quantity, "poisson ratio");
    }

    #[test]
    fn non_positive_lengths_are_rejected() {
        assert!(orowan_strengthening(&aluminium(), 0.0, G_THETA).is_err());
        assert!(orowan_strengthening(&aluminium(), f64::NAN, G_THETA).is_err());
        let matrix = MatrixProperties {
            burgers_vector: 0.0,
            ..aluminium()
        };
        assert!(orowan_strengthening(&matrix, SPACING, G_THETA).is_err());
    }

    fn matrix_strategy() -> impl Strategy<Value = MatrixProperties> {
        (1.0f64..4.0, 1.0e9f64..2.0e11, 1.0e-10f64..5.0e-10, -0.99f64..0.99).prop_map(
            |(taylor_factor, shear_modulus, burgers_vector, poisson_ratio)| MatrixProperties {
                taylor_factor,
                shear_modulus,
                burgers_vector,
                poisson_ratio,
            },
        )
    }

    proptest! {
        #[test]
        fn physical_inputs_give_non_negative_strengthening(
            matrix in matrix_strategy(),
            spacing in 1.0e-8f64..1.0e-5,
            g in 0.01f64..0.99,
        ) {
            let sigma = orowan_strengthening(&matrix, spacing, g).unwrap();
            prop_assert!(sigma >= 0.0);
        }

        #[test]
        fn never_returns_a_negative_contribution(
            matrix in matrix_strategy(),
            spacing in 1.0e-11f64..1.0e-5,
            g in 0.001f64..1.4,
        ) {
            match orowan_strengthening(&matrix, spacing, g) {
                Ok(sigma) => prop_assert!(sigma >= 0.0),
                Err(err) => prop_assert_eq!(err.quantity, "obstacle radius"),
            }
        }
    }
}
