//! Ramen: process–structure–property models for binary eutectic alloys.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! Ramen sub-crates. For most users, adding `ramen` as a single dependency is
//! sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use ramen::prelude::*;
//!
//! let json = r#"{
//!   "name": "Al-Cu",
//!   "properties": {
//!     "hall_petch_coefficient": { "name": "hall_petch_coefficient", "unit": "Pa m^0.5", "value": 4.0e4 }
//!   },
//!   "phases": {
//!     "alpha": {
//!       "solubility_limit": { "name": "solubility_limit", "unit": "at.%", "value": 0.17 },
//!       "liquidus_slope": { "name": "liquidus_slope", "unit": "K/at.%", "value": -6.0 },
//!       "gibbs_thomson_coeff": { "name": "gibbs_thomson_coeff", "unit": "K m", "value": 2.41e-7 },
//!       "eutectic_contact_angle": { "name": "eutectic_contact_angle", "unit": "degrees", "value": 57.0 },
//!       "taylor_factor": { "name": "taylor_factor", "unit": "None", "value": 3.06 },
//!       "shear_modulus_base_element": { "name": "shear_modulus_base_element", "unit": "Pa", "value": 26.2e9 },
//!       "burgers_vector_base_element": { "name": "burgers_vector_base_element", "unit": "m", "value": 2.86e-10 },
//!       "poisson_ratio_base_element": { "name": "poisson_ratio_base_element", "unit": "None", "value": 0.347 },
//!       "solute_misfit_strains": { "Cu": { "name": "Cu", "unit": "None", "value": -0.12 } }
//!     },
//!     "theta": {
//!       "solubility_limit": { "name": "solubility_limit", "unit": "at.%", "value": 31.9 },
//!       "liquidus_slope": { "name": "liquidus_slope", "unit": "K/at.%", "value": 4.3 },
//!       "gibbs_thomson_coeff": { "name": "gibbs_thomson_coeff", "unit": "K m", "value": 1.2e-7 },
//!       "eutectic_contact_angle": { "name": "eutectic_contact_angle", "unit": "degrees", "value": 52.0 }
//!     },
//!     "liquid": {
//!       "solute_diffusivities": { "Cu": { "name": "Cu", "unit": "m^2/s", "value": 3.0e-9 } }
//!     }
//!   }
//! }"#;
//!
//! let record = MaterialRecord::from_json_str(json).unwrap();
//! let engine = Engine::with_defaults(&record, EutecticSystem::binary("alpha", "theta"));
//!
//! let state = SolidificationState::binary("Cu", 2.6, 1.3, 5.0e-6);
//! let evaluation = engine.evaluate(&state).unwrap();
//! assert!(evaluation.microstructure.lamellar_spacing < 1.0e-6);
//! assert!(evaluation.yield_strength() > 0.0);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `ramen-core` | Quantities, property sets, conditions, errors, `PropertySource` |
//! | [`models`] | `ramen-models` | Series, lever rule, Jackson–Hunt, strengthening, superposition |
//! | [`store`] | `ramen-store` | JSON-backed material records and write-back |
//! | [`engine`] | `ramen-engine` | Evaluation engine, batches, process maps, porosity regimes |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, traits, and errors (`ramen-core`).
///
/// Contains [`types::PhysicalQuantity`], [`types::PhasePropertySet`],
/// [`types::SolidificationState`], the error types, and the
/// [`types::PropertySource`] read accessor.
pub use ramen_core as types;

/// Physics kernels (`ramen-models`).
///
/// Pure functions over plain numbers, each with a companion that reads
/// its inputs from a [`types::PropertySource`].
pub use ramen_models as models;

/// Reference property store (`ramen-store`).
///
/// [`store::MaterialRecord`] loads JSON, serves properties, and accepts
/// explicit result write-back.
pub use ramen_store as store;

/// Evaluation engine (`ramen-engine`).
///
/// [`engine::Engine`] for single and batch evaluations,
/// [`engine::ProcessGrid`] for process maps, and
/// [`engine::PorosityCriteria`] for porosity regimes.
pub use ramen_engine as engine;

/// Common imports for typical Ramen usage.
///
/// ```rust
/// use ramen::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use ramen_core::{
        keys, CalculatedQuantities, Composition, PhasePropertySet, PhysicalQuantity, Property,
        PropertySource, SolidificationState,
    };

    // Errors
    pub use ramen_core::{DomainError, ModelError, PropertyError};

    // Models
    pub use ramen_models::{PhaseFractions, StrengtheningResult};

    // Store
    pub use ramen_store::{MaterialRecord, StoreError};

    // Engine
    pub use ramen_engine::{
        ConfigError, Engine, EngineConfig, Evaluation, EutecticSystem, FractionPolicy,
        MicrostructureResult, ProcessGrid, SpacingMap,
    };
}
