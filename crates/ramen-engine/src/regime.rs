//! Porosity regime classification from melt-pool depth.
//!
//! Keyhole porosity when `depth / spot_size ≥ 2`; lack-of-fusion porosity
//! when `depth ≤ layer_thickness`; no data when the depth is not finite.
//! Depth, spot size and layer thickness only need to share a unit.

use ramen_core::DomainError;
use serde::{Deserialize, Serialize};

const MODEL: &str = "porosity regime";

/// Depth-to-spot-size ratio at which keyholing starts.
pub const KEYHOLE_ASPECT_RATIO: f64 = 2.0;

/// True when the melt pool is deep enough to keyhole.
pub fn keyhole_porosity(depth: f64, spot_size: f64) -> bool {
    depth / spot_size >= KEYHOLE_ASPECT_RATIO
}

/// True when the melt pool does not reach through the layer.
pub fn lack_of_fusion_porosity(depth: f64, layer_thickness: f64) -> bool {
    depth <= layer_thickness
}

/// True when there is no usable depth at this point.
pub fn no_data(depth: f64) -> bool {
    !depth.is_finite()
}

/// Classification of one process point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessRegime {
    /// Depth unavailable.
    NoData,
    /// Keyhole porosity expected.
    Keyhole,
    /// Lack-of-fusion porosity expected.
    LackOfFusion,
    /// Neither porosity mechanism applies.
    Dense,
}

/// Beam and powder-bed geometry used by [`classify_regime`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PorosityCriteria {
    spot_size: f64,
    layer_thickness: f64,
}

impl PorosityCriteria {
    /// Validate and store the geometry.
    ///
    /// # Errors
    ///
    /// Returns a [`DomainError`] unless both lengths are finite and > 0.
    pub fn new(spot_size: f64, layer_thickness: f64) -> Result<Self, DomainError> {
        for (quantity, value) in [("spot size", spot_size), ("layer thickness", layer_thickness)] {
            if !(value > 0.0 && value.is_finite()) {
                return Err(DomainError::new(
                    MODEL,
                    quantity,
                    format!("must be finite and > 0, got {value}"),
                ));
            }
        }
        Ok(Self {
            spot_size,
            layer_thickness,
        })
    }

    /// Beam spot size.
    pub fn spot_size(&self) -> f64 {
        self.spot_size
    }

    /// Powder layer thickness.
    pub fn layer_thickness(&self) -> f64 {
        self.layer_thickness
    }

    /// Classify one melt-pool depth.
    pub fn classify(&self, depth: f64) -> ProcessRegime {
        classify_regime(depth, self.spot_size, self.layer_thickness)
    }

    /// Classify every depth of a field.
    pub fn classify_field(&self, depths: &[f64]) -> Vec<ProcessRegime> {
        depths.iter().map(|&d| self.classify(d)).collect()
    }
}

/// Combine the three classifiers. Missing data wins, then keyhole, then
/// lack of fusion.
pub fn classify_regime(depth: f64, spot_size: f64, layer_thickness: f64) -> ProcessRegime {
    if no_data(depth) {
        ProcessRegime::NoData
    } else if keyhole_porosity(depth, spot_size) {
        ProcessRegime::Keyhole
    } else if lack_of_fusion_porosity(depth, layer_thickness) {
        ProcessRegime::LackOfFusion
    } else {
        ProcessRegime::Dense
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Spot size and layer thickness of the ACMZ process map (µm).
    const SPOT: f64 = 55.0;
    const LAYER: f64 = 30.0;

    #[test]
    fn thresholds_are_inclusive() {
        assert!(keyhole_porosity(110.0, SPOT));
        assert!(!keyhole_porosity(109.9, SPOT));
        assert!(lack_of_fusion_porosity(30.0, LAYER));
        assert!(!lack_of_fusion_porosity(30.1, LAYER));
    }

    #[test]
    fn classification() {
        assert_eq!(classify_regime(f64::NAN, SPOT, LAYER), ProcessRegime::NoData);
        assert_eq!(classify_regime(150.0, SPOT, LAYER), ProcessRegime::Keyhole);
        assert_eq!(classify_regime(20.0, SPOT, LAYER), ProcessRegime::LackOfFusion);
        assert_eq!(classify_regime(60.0, SPOT, LAYER), ProcessRegime::Dense);
    }

    #[test]
    fn keyhole_wins_over_lack_of_fusion() {
        // Layer thicker than twice the spot: both criteria hold.
        assert_eq!(classify_regime(25.0, 10.0, 40.0), ProcessRegime::Keyhole);
    }

    #[test]
    fn criteria_validate_geometry() {
        assert!(PorosityCriteria::new(0.0, LAYER).is_err());
        assert!(PorosityCriteria::new(SPOT, f64::INFINITY).is_err());
        let criteria = PorosityCriteria::new(SPOT, LAYER).unwrap();
        assert_eq!(
            criteria.classify_field(&[f64::NAN, 150.0, 20.0, 60.0]),
            vec![
                ProcessRegime::NoData,
                ProcessRegime::Keyhole,
                ProcessRegime::LackOfFusion,
                ProcessRegime::Dense
            ]
        );
    }
}
