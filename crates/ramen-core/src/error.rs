//! Error types for the Ramen alloy engine.
//!
//! Two failure kinds cover every model: a required property is absent
//! from the store ([`PropertyError`]), or an input violates a physical
//! precondition of a formula ([`DomainError`]). Operations that both read
//! the store and evaluate a formula return [`ModelError`], which wraps
//! either kind without losing it.

use std::fmt;

use thiserror::Error;

/// Who owns a property: the material as a whole, one of its phases, or
/// the solidification composition.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum PropertyOwner {
    /// Material-level property (e.g. the Hall–Petch coefficient).
    Material,
    /// Per-phase property (e.g. the solubility limit of `alpha`).
    Phase(String),
    /// The average composition of the alloy.
    Composition,
}

impl PropertyOwner {
    /// Shorthand for [`PropertyOwner::Phase`].
    pub fn phase(name: impl Into<String>) -> Self {
        Self::Phase(name.into())
    }
}

impl fmt::Display for PropertyOwner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Material => write!(f, "material"),
            Self::Phase(name) => write!(f, "phase '{name}'"),
            Self::Composition => write!(f, "composition"),
        }
    }
}

/// Errors from reading the property store.
///
/// Never defaulted: a missing property always surfaces to the caller.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PropertyError {
    /// The requested key is absent.
    #[error("property '{property}' not found on {owner}")]
    NotFound {
        /// Where the lookup was made.
        owner: PropertyOwner,
        /// The missing property name.
        property: String,
    },
    /// A per-solute mapping was expected to hold exactly one entry.
    #[error(
        "property '{property}' on {owner} must hold exactly one solute for a binary system, found {entries}"
    )]
    NotBinary {
        /// Where the lookup was made.
        owner: PropertyOwner,
        /// The per-solute property name.
        property: String,
        /// Number of entries actually present.
        entries: usize,
    },
    /// The property exists but has the wrong shape (scalar vs array vs
    /// per-solute mapping).
    #[error("property '{property}' on {owner} is not a {expected}")]
    UnexpectedShape {
        /// Where the lookup was made.
        owner: PropertyOwner,
        /// The property name.
        property: String,
        /// The shape the caller asked for.
        expected: &'static str,
    },
}

impl PropertyError {
    /// Build a [`PropertyError::NotFound`].
    pub fn not_found(owner: PropertyOwner, property: impl Into<String>) -> Self {
        Self::NotFound {
            owner,
            property: property.into(),
        }
    }
}

/// A physical precondition of a formula was violated.
///
/// Raised at the point of violation with the model and quantity that
/// failed. No model returns NaN or infinity in place of this error.
#[derive(Clone, Debug, PartialEq, Error)]
#[error("{model}: invalid {quantity}{}: {reason}", index_suffix(.index))]
pub struct DomainError {
    /// The model that rejected its input (e.g. `"lamellar spacing"`).
    pub model: &'static str,
    /// The offending quantity (e.g. `"velocity"`).
    pub quantity: &'static str,
    /// What went wrong, including the offending value.
    pub reason: String,
    /// Element index when the failure happened inside a field evaluation.
    pub index: Option<usize>,
}

fn index_suffix(index: &Option<usize>) -> String {
    match index {
        Some(i) => format!(" at index {i}"),
        None => String::new(),
    }
}

impl DomainError {
    /// Create a scalar-evaluation domain error.
    pub fn new(model: &'static str, quantity: &'static str, reason: impl Into<String>) -> Self {
        Self {
            model,
            quantity,
            reason: reason.into(),
            index: None,
        }
    }

    /// Attach the element index of a field evaluation.
    pub fn at_index(mut self, index: usize) -> Self {
        self.index = Some(index);
        self
    }
}

/// Error from an operation that reads properties and evaluates a model.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ModelError {
    /// A required property could not be read.
    #[error("property lookup failed: {0}")]
    Property(#[from] PropertyError),
    /// A model precondition was violated.
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),
}

impl ModelError {
    /// True when the failure is a missing property key.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Property(PropertyError::NotFound { .. }))
    }

    /// The wrapped domain error, if any.
    pub fn as_domain(&self) -> Option<&DomainError> {
        match self {
            Self::Domain(e) => Some(e),
            Self::Property(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn not_found_display_names_owner_and_key() {
        let err = PropertyError::not_found(PropertyOwner::phase("alpha"), "taylor_factor");
        assert_eq!(
            err.to_string(),
            "property 'taylor_factor' not found on phase 'alpha'"
        );
    }

    #[test]
    fn domain_error_display_includes_index_when_present() {
        let scalar = DomainError::new("lamellar spacing", "velocity", "must be > 0, got -1");
        assert_eq!(
            scalar.to_string(),
            "lamellar spacing: invalid velocity: must be > 0, got -1"
        );
        let field = scalar.at_index(7);
        assert_eq!(
            field.to_string(),
            "lamellar spacing: invalid velocity at index 7: must be > 0, got -1"
        );
    }

    #[test]
    fn model_error_chains_source() {
        let err: ModelError =
            PropertyError::not_found(PropertyOwner::Material, "hall_petch_coefficient").into();
        assert!(err.is_not_found());
        assert!(err.source().is_some());
        assert!(err.as_domain().is_none());

        let err: ModelError = DomainError::new("hall-petch", "grain diameter", "zero").into();
        assert!(!err.is_not_found());
        assert_eq!(err.as_domain().map(|d| d.quantity), Some("grain diameter"));
    }
}
