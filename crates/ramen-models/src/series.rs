//! The semi-analytic series term `P(g)` of the Jackson–Hunt model.
//!
//! ```text
//! P(g) = Σ_{n=1}^{n_max} sin²(nπg) / (nπ)³
//! ```
//!
//! The summand is bounded by `1/(nπ)³`, so the tail after `n_max` terms is
//! below [`series_truncation_bound`]`(n_max) = 1/(2π³·n_max²)`. With the
//! default of [`DEFAULT_SERIES_TERMS`] the bound is ~1.6e-10, far below the
//! six significant digits the spacing model needs. This sum dominates the
//! cost of a spacing evaluation.

use std::f64::consts::PI;

use ramen_core::DomainError;

/// Default number of series terms.
pub const DEFAULT_SERIES_TERMS: u32 = 10_000;

const MODEL: &str = "jackson-hunt series";

/// Upper bound on the truncation error of [`jackson_hunt_p`] after
/// `n_max` terms.
pub fn series_truncation_bound(n_max: u32) -> f64 {
    let n = f64::from(n_max.max(1));
    1.0 / (2.0 * PI.powi(3) * n * n)
}

/// Evaluate `P(g)` with `n_max` terms.
///
/// # Errors
///
/// Returns a [`DomainError`] if `g` is not strictly inside `(0, 1)` or
/// `n_max` is zero.
pub fn jackson_hunt_p(g: f64, n_max: u32) -> Result<f64, DomainError> {
    if n_max < 1 {
        return Err(DomainError::new(MODEL, "n_max", "at least one term is required"));
    }
    if !(g > 0.0 && g < 1.0) {
        return Err(DomainError::new(
            MODEL,
            "phase fraction",
            format!("g must lie strictly inside (0, 1), got {g}"),
        ));
    }

    // Accumulate from the tail so the smallest terms are not absorbed.
    let sum: f64 = (1..=n_max)
        .rev()
        .map(|n| {
            let npi = f64::from(n) * PI;
            let s = (npi * g).sin();
            s * s / (npi * npi * npi)
        })
        .sum();
    Ok(sum)
}

/// Evaluate `P(g)` independently for every element of `gs`.
///
/// # Errors
///
/// Fails on the first invalid element; the error carries its index.
pub fn jackson_hunt_p_field(gs: &[f64], n_max: u32) -> Result<Vec<f64>, DomainError> {
    gs.iter()
        .enumerate()
        .map(|(i, &g)| jackson_hunt_p(g, n_max).map_err(|e| e.at_index(i)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn single_term_matches_closed_form() {
        let g: f64 = 0.5;
        let expected = (PI * g).sin().powi(2) / PI.powi(3);
        let p = jackson_hunt_p(g, 1).unwrap();
        assert!((p - expected).abs() < 1e-15);
    }

    #[test]
    fn converged_value_at_half() {
        // Only odd n contribute at g = 1/2: Σ 1/((2k+1)π)³ = 7ζ(3)/(8π³).
        let zeta3 = 1.202_056_903_159_594_3;
        let exact = 7.0 * zeta3 / (8.0 * PI.powi(3));
        let p = jackson_hunt_p(0.5, DEFAULT_SERIES_TERMS).unwrap();
        assert!((p - exact).abs() < series_truncation_bound(DEFAULT_SERIES_TERMS));
    }

    #[test]
    fn rejects_out_of_range_fraction() {
        for g in [0.0, 1.0, -0.1, 1.5, f64::NAN, f64::INFINITY] {
            let err = jackson_hunt_p(g, 100).unwrap_err();
            assert_eq!(err.quantity, "phase fraction", "g = {g}");
        }
    }

    #[test]
    fn rejects_zero_terms() {
        let err = jackson_hunt_p(0.3, 0).unwrap_err();
        assert_eq!(err.quantity, "n_max");
    }

    #[test]
    fn field_evaluates_elementwise() {
        let gs = [0.1, 0.3, 0.5];
        let field = jackson_hunt_p_field(&gs, 500).unwrap();
        for (g, p) in gs.iter().zip(&field) {
            assert_eq!(*p, jackson_hunt_p(*g, 500).unwrap());
        }
    }

    #[test]
    fn field_error_reports_index() {
        let err = jackson_hunt_p_field(&[0.2, 0.4, 1.0], 10).unwrap_err();
        assert_eq!(err.index, Some(2));
    }

    #[test]
    fn truncation_error_shrinks_as_terms_double() {
        for g in [0.3, 0.5, 0.9234] {
            let mut previous = f64::INFINITY;
            let mut n = 10;
            while n <= 640 {
                let fine = jackson_hunt_p(g, 2 * n).unwrap();
                let delta = (fine - jackson_hunt_p(g, n).unwrap()).abs();
                assert!(delta < previous, "g = {g}, n_max = {n}");
                assert!(delta <= series_truncation_bound(n));
                previous = delta;
                n *= 2;
            }
        }
    }

    proptest! {
        #[test]
        fn symmetric_about_one_half(g in 0.001f64..0.999) {
            let a = jackson_hunt_p(g, 2000).unwrap();
            let b = jackson_hunt_p(1.0 - g, 2000).unwrap();
            prop_assert!((a - b).abs() <= 1e-10 * a);
        }

        #[test]
        fn positive_and_bounded(g in 0.001f64..0.999) {
            let p = jackson_hunt_p(g, 1000).unwrap();
            // Σ 1/(nπ)³ = ζ(3)/π³
            prop_assert!(p > 0.0);
            prop_assert!(p < 1.202_056_903_159_594_3 / PI.powi(3));
        }
    }
}
