//! Property-name constants shared by the models and the store.

/// Solubility limit of a solid phase at the eutectic temperature (at.%).
pub const SOLUBILITY_LIMIT: &str = "solubility_limit";
/// Liquidus slope of a solid phase (K/at.%).
pub const LIQUIDUS_SLOPE: &str = "liquidus_slope";
/// Gibbs–Thomson coefficient of the solid/liquid interface (K·m).
pub const GIBBS_THOMSON_COEFF: &str = "gibbs_thomson_coeff";
/// Contact angle at the eutectic triple junction, stored in degrees.
pub const EUTECTIC_CONTACT_ANGLE: &str = "eutectic_contact_angle";
/// Solute diffusivities in the liquid, keyed by solute element (m²/s).
pub const SOLUTE_DIFFUSIVITIES: &str = "solute_diffusivities";
/// Taylor factor of the matrix phase.
pub const TAYLOR_FACTOR: &str = "taylor_factor";
/// Shear modulus of the matrix base element (Pa).
pub const SHEAR_MODULUS: &str = "shear_modulus_base_element";
/// Burgers vector of the matrix base element (m).
pub const BURGERS_VECTOR: &str = "burgers_vector_base_element";
/// Poisson ratio of the matrix base element.
pub const POISSON_RATIO: &str = "poisson_ratio_base_element";
/// Solute misfit strains, keyed by solute element.
pub const SOLUTE_MISFIT_STRAINS: &str = "solute_misfit_strains";
/// Material-level Hall–Petch coefficient (Pa·m^½).
pub const HALL_PETCH_COEFFICIENT: &str = "hall_petch_coefficient";

/// Output: per-phase volume fraction.
pub const PHASE_VOLUME_FRACTION: &str = "phase_volume_fraction";
/// Output: eutectic lamellar spacing (m).
pub const EUTECTIC_LAMELLAR_SPACING: &str = "eutectic_lamellar_spacing";
/// Output: Orowan strengthening from eutectic lamellae (Pa).
pub const OROWAN_STRENGTHENING: &str = "orowan_strengthening_lamella";
/// Output: solid-solution strengthening (Pa).
pub const SOLID_SOLUTION_STRENGTHENING: &str = "solid_solution_strengthening";
/// Output: grain-boundary strengthening (Pa).
pub const GRAIN_BOUNDARY_STRENGTHENING: &str = "grain_boundary_strengthening";
/// Output: predicted yield strength (Pa).
pub const YIELD_STRENGTH: &str = "yield_strength";

/// Default name of the liquid phase.
pub const LIQUID_PHASE: &str = "liquid";
