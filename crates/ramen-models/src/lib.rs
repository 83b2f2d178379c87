//! Physics kernels of the Ramen alloy engine.
//!
//! Every model is a pure function of plain numbers, with a `*_from_source`
//! or `from_source` companion that reads its inputs through a
//! [`PropertySource`](ramen_core::PropertySource). Units are SI except
//! compositions (at.%, only ratios are taken) and contact angles (degrees).
//!
//! - [`series`]: the Jackson–Hunt series term `P(g)`.
//! - [`phase_fraction`]: lever-rule phase fractions.
//! - [`lamellar`]: Jackson–Hunt eutectic lamellar spacing.
//! - [`strengthening`]: Orowan, solid-solution and Hall–Petch contributions.
//! - [`superposition`]: yield strength as the sum of contributions.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod lamellar;
pub mod phase_fraction;
pub mod series;
pub mod strengthening;
pub mod superposition;

pub use lamellar::{lamellar_spacing, liquid_diffusivity, EutecticPhase, JacksonHunt};
pub use phase_fraction::{lever_rule, lever_rule_from_source, phase_fractions, PhaseFractions};
pub use series::{
    jackson_hunt_p, jackson_hunt_p_field, series_truncation_bound, DEFAULT_SERIES_TERMS,
};
pub use strengthening::hall_petch::{grain_boundary_from_source, grain_boundary_strengthening};
pub use strengthening::orowan::{
    effective_obstacle_radius, orowan_from_source, orowan_strengthening,
};
pub use strengthening::solid_solution::{
    matrix_solute_fraction, solid_solution_for, solid_solution_from_source,
    solid_solution_strengthening,
};
pub use strengthening::{MatrixProperties, StrengtheningResult};
pub use superposition::total_yield_strength;
