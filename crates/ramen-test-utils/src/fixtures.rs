//! The Al–Cu reference system.
//!
//! Phases `alpha` (Al-rich FCC), `theta` (Al₂Cu) and `liquid`, with the
//! matrix constants of aluminium on `alpha`. The [`reference`] module holds
//! the values every model should reproduce for 2.6 at.% Cu, 1.3 m/s and a
//! 5 µm grain diameter.

use ramen_core::keys;

use crate::MockPropertySource;

/// Solute element of the reference system.
pub const SOLUTE: &str = "Cu";

/// The Al–Cu property set as a [`MockPropertySource`].
pub fn alcu_fixture() -> MockPropertySource {
    let mut source = MockPropertySource::new();

    source.set_scalar("alpha", keys::SOLUBILITY_LIMIT, "at.%", 0.17);
    source.set_scalar("alpha", keys::LIQUIDUS_SLOPE, "K/at.%", -6.0);
    source.set_scalar("alpha", keys::GIBBS_THOMSON_COEFF, "K m", 2.41e-7);
    source.set_scalar("alpha", keys::EUTECTIC_CONTACT_ANGLE, "degrees", 57.0);
    source.set_scalar("alpha", keys::TAYLOR_FACTOR, "None", 3.06);
    source.set_scalar("alpha", keys::SHEAR_MODULUS, "Pa", 26.2e9);
    source.set_scalar("alpha", keys::BURGERS_VECTOR, "m", 2.86e-10);
    source.set_scalar("alpha", keys::POISSON_RATIO, "None", 0.347);
    source.set_per_solute("alpha", keys::SOLUTE_MISFIT_STRAINS, SOLUTE, "None", -0.12);

    source.set_scalar("theta", keys::SOLUBILITY_LIMIT, "at.%", 31.9);
    source.set_scalar("theta", keys::LIQUIDUS_SLOPE, "K/at.%", 4.3);
    source.set_scalar("theta", keys::GIBBS_THOMSON_COEFF, "K m", 1.2e-7);
    source.set_scalar("theta", keys::EUTECTIC_CONTACT_ANGLE, "degrees", 52.0);

    source.set_per_solute(keys::LIQUID_PHASE, keys::SOLUTE_DIFFUSIVITIES, SOLUTE, "m^2/s", 3.0e-9);

    source.set_material_scalar(keys::HALL_PETCH_COEFFICIENT, "Pa m^0.5", 4.0e4);
    source
}

/// Expected outputs of the reference system.
pub mod reference {
    /// Average Cu content (at.%).
    pub const C_CU: f64 = 2.6;
    /// Solidification velocity (m/s).
    pub const VELOCITY: f64 = 1.3;
    /// Average grain diameter (m).
    pub const GRAIN_DIAMETER: f64 = 5.0e-6;

    pub const G_ALPHA: f64 = 0.923_416_325_244_248_3;
    pub const G_THETA: f64 = 0.076_583_674_755_751_67;
    /// `P(g_alpha)` with the default number of terms.
    pub const P_G_ALPHA: f64 = 0.004_168_994_932_788_417;
    pub const AR: f64 = 1.242_591_994_960_703e-6;
    pub const AC: f64 = 4.685_437_734_737_361;
    /// Lamellar spacing at [`VELOCITY`] (m).
    pub const SPACING: f64 = 2.473_877_219_842_189_6e-8;
    /// Lamellar spacing at half of [`VELOCITY`] (m).
    pub const SPACING_HALF_VELOCITY: f64 = 3.498_590_715_946_671e-8;

    pub const OROWAN: f64 = 506.379_19e6;
    pub const SOLID_SOLUTION: f64 = 157.826_67e6;
    pub const GRAIN_BOUNDARY: f64 = 17.888_544e6;
    pub const YIELD_STRENGTH: f64 = 682.094_40e6;
}
