//! The read-only property accessor consumed by every model.

use crate::error::{PropertyError, PropertyOwner};
use crate::property::Property;
use crate::quantity::PhysicalQuantity;

/// Read-only access to a material property store.
///
/// Implementors supply the two raw lookups; the provided methods apply
/// the lookup contract (missing key, wrong shape, non-binary mapping)
/// once for every store. Models only ever borrow a `PropertySource`, so a
/// store shared across worker threads must not be written during a batch.
pub trait PropertySource {
    /// Raw lookup of a per-phase property.
    fn phase_property(&self, phase: &str, name: &str) -> Option<&Property>;

    /// Raw lookup of a material-level property.
    fn material_property(&self, name: &str) -> Option<&Property>;

    /// Fetch a single per-phase quantity.
    ///
    /// # Errors
    ///
    /// [`PropertyError::NotFound`] if the key is absent,
    /// [`PropertyError::UnexpectedShape`] if it holds a per-solute mapping.
    fn get_property(&self, phase: &str, name: &str) -> Result<&PhysicalQuantity, PropertyError> {
        let owner = || PropertyOwner::phase(phase);
        let property = self
            .phase_property(phase, name)
            .ok_or_else(|| PropertyError::not_found(owner(), name))?;
        property
            .as_quantity()
            .ok_or_else(|| PropertyError::UnexpectedShape {
                owner: owner(),
                property: name.to_string(),
                expected: "single quantity",
            })
    }

    /// Fetch a scalar per-phase value.
    fn phase_scalar(&self, phase: &str, name: &str) -> Result<f64, PropertyError> {
        self.get_property(phase, name)?
            .scalar()
            .ok_or_else(|| PropertyError::UnexpectedShape {
                owner: PropertyOwner::phase(phase),
                property: name.to_string(),
                expected: "scalar",
            })
    }

    /// Fetch a scalar material-level value.
    fn material_scalar(&self, name: &str) -> Result<f64, PropertyError> {
        let shape_error = || PropertyError::UnexpectedShape {
            owner: PropertyOwner::Material,
            property: name.to_string(),
            expected: "scalar",
        };
        self.material_property(name)
            .ok_or_else(|| PropertyError::not_found(PropertyOwner::Material, name))?
            .as_quantity()
            .ok_or_else(shape_error)?
            .scalar()
            .ok_or_else(shape_error)
    }

    /// Fetch the only entry of a per-solute mapping on a phase.
    ///
    /// Binary alloys have exactly one solute; anything else is a
    /// [`PropertyError::NotBinary`] rather than an arbitrary first pick.
    fn single_solute(
        &self,
        phase: &str,
        name: &str,
    ) -> Result<(&str, &PhysicalQuantity), PropertyError> {
        let owner = || PropertyOwner::phase(phase);
        let map = self
            .phase_property(phase, name)
            .ok_or_else(|| PropertyError::not_found(owner(), name))?
            .as_per_solute()
            .ok_or_else(|| PropertyError::UnexpectedShape {
                owner: owner(),
                property: name.to_string(),
                expected: "per-solute mapping",
            })?;
        match map.len() {
            1 => map
                .first()
                .map(|(solute, q)| (solute.as_str(), q))
                .ok_or_else(|| PropertyError::not_found(owner(), name)),
            entries => Err(PropertyError::NotBinary {
                owner: owner(),
                property: name.to_string(),
                entries,
            }),
        }
    }

    /// Scalar value of the only entry of a per-solute mapping.
    fn single_solute_scalar(&self, phase: &str, name: &str) -> Result<f64, PropertyError> {
        let (solute, quantity) = self.single_solute(phase, name)?;
        quantity
            .scalar()
            .ok_or_else(|| PropertyError::UnexpectedShape {
                owner: PropertyOwner::phase(phase),
                property: format!("{name}.{solute}"),
                expected: "scalar",
            })
    }
}

impl<T: PropertySource + ?Sized> PropertySource for &T {
    fn phase_property(&self, phase: &str, name: &str) -> Option<&Property> {
        (**self).phase_property(phase, name)
    }

    fn material_property(&self, name: &str) -> Option<&Property> {
        (**self).material_property(name)
    }
}
