//! Linear superposition of strengthening contributions.

use ramen_core::DomainError;

const MODEL: &str = "yield strength";

/// Total yield strength as the plain sum of `contributions` (Pa).
///
/// # Errors
///
/// Returns a [`DomainError`] for an empty slice or a non-finite
/// contribution (the error carries its index).
pub fn total_yield_strength(contributions: &[f64]) -> Result<f64, DomainError> {
    if contributions.is_empty() {
        return Err(DomainError::new(
            MODEL,
            "contributions",
            "at least one contribution is required",
        ));
    }
    if let Some(i) = contributions.iter().position(|c| !c.is_finite()) {
        return Err(DomainError::new(
            MODEL,
            "contribution",
            format!("must be finite, got {}", contributions[i]),
        )
        .at_index(i));
    }
    Ok(contributions.iter().sum())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn empty_list_is_rejected() {
        let err = total_yield_strength(&[]).unwrap_err();
        assert_eq!(err.quantity, "contributions");
    }

    #[test]
    fn non_finite_contribution_reports_index() {
        let err = total_yield_strength(&[1.0, f64::INFINITY]).unwrap_err();
        assert_eq!(err.index, Some(1));
    }

    #[test]
    fn single_contribution_is_identity() {
        assert_eq!(total_yield_strength(&[123.0e6]).unwrap(), 123.0e6);
    }

    proptest! {
        #[test]
        fn equals_plain_sum(values in prop::collection::vec(-1.0e9f64..1.0e9, 1..8)) {
            let total = total_yield_strength(&values).unwrap();
            prop_assert_eq!(total, values.iter().sum::<f64>());
        }

        #[test]
        fn non_negative_inputs_give_non_negative_total(
            values in prop::collection::vec(0.0f64..1.0e9, 1..8),
        ) {
            let total = total_yield_strength(&values).unwrap();
            prop_assert!(total >= 0.0);
            for v in &values {
                prop_assert!(total >= *v);
            }
        }
    }
}
