//! Grain-boundary (Hall–Petch) strengthening: `Δσ = k_HP / sqrt(d)`.

use ramen_core::{keys, DomainError, ModelError, PropertySource};

use super::finite;

const MODEL: &str = "hall-petch strengthening";

/// Grain-boundary strengthening (Pa) for coefficient `k_hp` (Pa·m^½) and
/// average grain diameter `grain_diameter` (m).
///
/// # Errors
///
/// Returns a [`DomainError`] if the grain diameter is not positive.
pub fn grain_boundary_strengthening(k_hp: f64, grain_diameter: f64) -> Result<f64, DomainError> {
    if !(grain_diameter > 0.0) {
        return Err(DomainError::new(
            MODEL,
            "grain diameter",
            format!("must be positive, got {grain_diameter}"),
        ));
    }
    finite(MODEL, k_hp / grain_diameter.sqrt())
}

/// Read the material-level Hall–Petch coefficient from `source` and
/// evaluate [`grain_boundary_strengthening`].
pub fn grain_boundary_from_source(
    source: &impl PropertySource,
    grain_diameter: f64,
) -> Result<f64, ModelError> {
    let k_hp = source.material_scalar(keys::HALL_PETCH_COEFFICIENT)?;
    Ok(grain_boundary_strengthening(k_hp, grain_diameter)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn alcu_reference_value() {
        let sigma = grain_boundary_strengthening(4.0e4, 5.0e-6).unwrap();
        assert!((sigma / 1.0e6 - 17.888_54).abs() < 1e-4);
    }

    #[test]
    fn quartering_grain_size_doubles_strengthening() {
        let d = 2.0e-5;
        let a = grain_boundary_strengthening(4.0e4, d).unwrap();
        let b = grain_boundary_strengthening(4.0e4, d / 4.0).unwrap();
        assert!((b / a - 2.0).abs() < 1e-12);
    }

    #[test]
    fn non_positive_diameter_is_rejected() {
        for d in [0.0, -1.0e-6, f64::NAN] {
            let err = grain_boundary_strengthening(4.0e4, d).unwrap_err();
            assert_eq!(err.quantity, "grain diameter");
        }
    }

    proptest! {
        #[test]
        fn physical_inputs_give_non_negative_strengthening(
            k_hp in 0.0f64..1.0e6,
            grain_diameter in 1.0e-9f64..1.0e-2,
        ) {
            let sigma = grain_boundary_strengthening(k_hp, grain_diameter).unwrap();
            prop_assert!(sigma >= 0.0);
        }
    }
}
