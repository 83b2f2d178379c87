//! Named physical quantities with units and provenance.

use serde::{Deserialize, Serialize};

/// Provenance stamped on every quantity computed by the engine.
pub const CALCULATED_REFERENCE: &str = "Calculated by ramen";

/// The numeric payload of a [`PhysicalQuantity`].
///
/// Deserialises from either a bare number or a JSON array.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QuantityValue {
    /// A single value.
    Scalar(f64),
    /// An elementwise field, e.g. spacing over a velocity grid.
    Array(Vec<f64>),
}

impl QuantityValue {
    /// The scalar value, or `None` for arrays.
    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            Self::Scalar(v) => Some(*v),
            Self::Array(_) => None,
        }
    }

    /// The values as a slice; a scalar is a one-element slice.
    pub fn as_slice(&self) -> &[f64] {
        match self {
            Self::Scalar(v) => std::slice::from_ref(v),
            Self::Array(values) => values,
        }
    }
}

impl From<f64> for QuantityValue {
    fn from(v: f64) -> Self {
        Self::Scalar(v)
    }
}

impl From<Vec<f64>> for QuantityValue {
    fn from(v: Vec<f64>) -> Self {
        Self::Array(v)
    }
}

/// A named value with a physical unit, display metadata, and provenance.
///
/// Immutable once created: the `with_*` methods consume the quantity and
/// return a new one. Storing a computed quantity under an existing name
/// replaces the previous record rather than mutating it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PhysicalQuantity {
    name: String,
    unit: String,
    value: QuantityValue,
    #[serde(default)]
    label: String,
    #[serde(default)]
    symbol: String,
    #[serde(default)]
    reference: String,
}

impl PhysicalQuantity {
    /// Create a quantity with empty display metadata and provenance.
    pub fn new(
        name: impl Into<String>,
        unit: impl Into<String>,
        value: impl Into<QuantityValue>,
    ) -> Self {
        Self {
            name: name.into(),
            unit: unit.into(),
            value: value.into(),
            label: String::new(),
            symbol: String::new(),
            reference: String::new(),
        }
    }

    /// Create a quantity stamped with [`CALCULATED_REFERENCE`].
    pub fn calculated(
        name: impl Into<String>,
        unit: impl Into<String>,
        value: impl Into<QuantityValue>,
    ) -> Self {
        Self::new(name, unit, value).with_reference(CALCULATED_REFERENCE)
    }

    /// Set the human-readable label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Set the display symbol (e.g. `"$\\lambda$"`).
    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = symbol.into();
        self
    }

    /// Set the provenance string.
    pub fn with_reference(mut self, reference: impl Into<String>) -> Self {
        self.reference = reference.into();
        self
    }

    /// The quantity name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The unit annotation (e.g. `"m/s"`, `"at.%"`, `"None"`).
    pub fn unit(&self) -> &str {
        &self.unit
    }

    /// The numeric payload.
    pub fn value(&self) -> &QuantityValue {
        &self.value
    }

    /// The scalar value, or `None` for array quantities.
    pub fn scalar(&self) -> Option<f64> {
        self.value.as_scalar()
    }

    /// The human-readable label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The display symbol.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Where the number came from.
    pub fn reference(&self) -> &str {
        &self.reference
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builders_replace_metadata() {
        let q = PhysicalQuantity::new("solidification_velocity", "m/s", 1.3)
            .with_label("Solidification velocity")
            .with_symbol("$v$")
            .with_reference("Manually set by user");
        assert_eq!(q.name(), "solidification_velocity");
        assert_eq!(q.unit(), "m/s");
        assert_eq!(q.scalar(), Some(1.3));
        assert_eq!(q.label(), "Solidification velocity");
        assert_eq!(q.reference(), "Manually set by user");
    }

    #[test]
    fn calculated_stamps_provenance() {
        let q = PhysicalQuantity::calculated("eutectic_lamellar_spacing", "m", 2.5e-8);
        assert_eq!(q.reference(), CALCULATED_REFERENCE);
    }

    #[test]
    fn array_value_has_no_scalar() {
        let q = PhysicalQuantity::new("spacing", "m", vec![1.0, 2.0]);
        assert_eq!(q.scalar(), None);
        assert_eq!(q.value().as_slice(), &[1.0, 2.0]);
        assert_eq!(QuantityValue::Scalar(4.0).as_slice(), &[4.0]);
    }

    #[test]
    fn deserialises_scalar_or_array() {
        let q: PhysicalQuantity =
            serde_json::from_str(r#"{"name":"a","unit":"m","value":[1.0,2.0]}"#).unwrap();
        assert_eq!(q.value(), &QuantityValue::Array(vec![1.0, 2.0]));
        assert_eq!(q.label(), "");

        let q: PhysicalQuantity =
            serde_json::from_str(r#"{"name":"b","unit":"K","value":3.5,"reference":"lit."}"#)
                .unwrap();
        assert_eq!(q.scalar(), Some(3.5));
        assert_eq!(q.reference(), "lit.");
    }
}
