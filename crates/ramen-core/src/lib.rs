//! Core types and traits for the Ramen alloy engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental abstractions used throughout the Ramen workspace:
//! physical quantities, property sets, solidification conditions,
//! error types, and the read-only [`PropertySource`] accessor.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod conditions;
pub mod error;
pub mod keys;
pub mod property;
pub mod quantity;
pub mod results;
pub mod traits;

pub use conditions::{Composition, SolidificationState};
pub use error::{DomainError, ModelError, PropertyError};
pub use property::{PhasePropertySet, Property};
pub use quantity::{PhysicalQuantity, QuantityValue, CALCULATED_REFERENCE};
pub use results::CalculatedQuantities;
pub use traits::PropertySource;
