//! Jackson–Hunt eutectic lamellar spacing.
//!
//! Model from Dantzig and Rappaz, *Solidification*, ch. 9 (EPFL Press, 2017).
//!
//! ```text
//! m̄  = |m_lα|·|m_lβ| / (|m_lα| + |m_lβ|)
//! AR = m̄ · [2Γ_α·cos θ_α / (|m_lα|·g_α) + 2Γ_β·cos θ_β / (|m_lβ|·g_β)]
//! AC = Δc_e / (g_α·g_β) · m̄ · P(g_α)          Δc_e = c_e,β − c_e,α
//! λ  = sqrt(AR · D_l / (AC · v))
//! ```
//!
//! Composition-derived coefficients are computed once in [`JacksonHunt`]
//! and broadcast over a velocity field by
//! [`spacing_field`](JacksonHunt::spacing_field).

use ramen_core::{keys, DomainError, PropertyError, PropertySource};
use serde::{Deserialize, Serialize};

use crate::phase_fraction::PhaseFractions;
use crate::series::{jackson_hunt_p, DEFAULT_SERIES_TERMS};

const MODEL: &str = "lamellar spacing";

/// Per-phase inputs to the Jackson–Hunt model.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EutecticPhase {
    /// Solubility limit at the eutectic temperature.
    pub solubility_limit: f64,
    /// Liquidus slope (temperature per composition unit). Sign is ignored.
    pub liquidus_slope: f64,
    /// Gibbs–Thomson coefficient of the phase/liquid interface (K·m).
    pub gibbs_thomson_coeff: f64,
    /// Contact angle at the triple junction, in degrees.
    pub contact_angle_deg: f64,
}

impl EutecticPhase {
    /// Read the four per-phase properties of `phase` from `source`.
    pub fn from_source(source: &impl PropertySource, phase: &str) -> Result<Self, PropertyError> {
        Ok(Self {
            solubility_limit: source.phase_scalar(phase, keys::SOLUBILITY_LIMIT)?,
            liquidus_slope: source.phase_scalar(phase, keys::LIQUIDUS_SLOPE)?,
            gibbs_thomson_coeff: source.phase_scalar(phase, keys::GIBBS_THOMSON_COEFF)?,
            contact_angle_deg: source.phase_scalar(phase, keys::EUTECTIC_CONTACT_ANGLE)?,
        })
    }
}

/// Liquid solute diffusivity of a binary alloy (the only entry of the
/// liquid phase's `solute_diffusivities`).
pub fn liquid_diffusivity(
    source: &impl PropertySource,
    liquid_phase: &str,
) -> Result<f64, PropertyError> {
    source.single_solute_scalar(liquid_phase, keys::SOLUTE_DIFFUSIVITIES)
}

fn reduced_slope(alpha: &EutecticPhase, beta: &EutecticPhase) -> Result<f64, DomainError> {
    let ma = alpha.liquidus_slope.abs();
    let mb = beta.liquidus_slope.abs();
    for (quantity, m) in [("alpha liquidus slope", ma), ("beta liquidus slope", mb)] {
        if !(m > 0.0 && m.is_finite()) {
            return Err(DomainError::new(
                MODEL,
                quantity,
                format!("must be finite and non-zero, got {m}"),
            ));
        }
    }
    Ok(ma * mb / (ma + mb))
}

fn check_fractions(g_alpha: f64, g_beta: f64) -> Result<(), DomainError> {
    for (quantity, g) in [("alpha phase fraction", g_alpha), ("beta phase fraction", g_beta)] {
        if g == 0.0 || !g.is_finite() {
            return Err(DomainError::new(
                MODEL,
                quantity,
                format!("must be finite and non-zero, got {g}"),
            ));
        }
    }
    Ok(())
}

/// The capillary coefficient `AR`.
///
/// Contact angles are converted from degrees here and nowhere else.
pub fn ar_coefficient(
    alpha: &EutecticPhase,
    beta: &EutecticPhase,
    g_alpha: f64,
    g_beta: f64,
) -> Result<f64, DomainError> {
    check_fractions(g_alpha, g_beta)?;
    let m_bar = reduced_slope(alpha, beta)?;
    let theta_alpha = alpha.contact_angle_deg.to_radians();
    let theta_beta = beta.contact_angle_deg.to_radians();
    let term_alpha = 2.0 * alpha.gibbs_thomson_coeff * theta_alpha.cos()
        / (alpha.liquidus_slope.abs() * g_alpha);
    let term_beta =
        2.0 * beta.gibbs_thomson_coeff * theta_beta.cos() / (beta.liquidus_slope.abs() * g_beta);
    Ok(m_bar * (term_alpha + term_beta))
}

/// The solutal coefficient `AC`, given a precomputed `P(g_alpha)`.
pub fn ac_coefficient(
    alpha: &EutecticPhase,
    beta: &EutecticPhase,
    g_alpha: f64,
    g_beta: f64,
    p_g_alpha: f64,
) -> Result<f64, DomainError> {
    check_fractions(g_alpha, g_beta)?;
    let m_bar = reduced_slope(alpha, beta)?;
    let delta_c_e = beta.solubility_limit - alpha.solubility_limit;
    Ok(delta_c_e / (g_alpha * g_beta) * m_bar * p_g_alpha)
}

/// Jackson–Hunt coefficients for one composition and phase pair.
///
/// Holds everything except the velocity, so a process map evaluates the
/// series once and the spacing per grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct JacksonHunt {
    ar: f64,
    ac: f64,
    diffusivity: f64,
}

impl JacksonHunt {
    /// Compute the coefficients, evaluating `P(g_alpha)` with `n_max` terms.
    pub fn new(
        alpha: &EutecticPhase,
        beta: &EutecticPhase,
        diffusivity: f64,
        fractions: PhaseFractions,
        n_max: u32,
    ) -> Result<Self, DomainError> {
        check_fractions(fractions.alpha, fractions.beta)?;
        let p = jackson_hunt_p(fractions.alpha, n_max)?;
        Self::with_series_value(alpha, beta, diffusivity, fractions, p)
    }

    /// Compute the coefficients from an already evaluated `P(g_alpha)`.
    pub fn with_series_value(
        alpha: &EutecticPhase,
        beta: &EutecticPhase,
        diffusivity: f64,
        fractions: PhaseFractions,
        p_g_alpha: f64,
    ) -> Result<Self, DomainError> {
        if !(diffusivity > 0.0 && diffusivity.is_finite()) {
            return Err(DomainError::new(
                MODEL,
                "liquid diffusivity",
                format!("must be finite and > 0, got {diffusivity}"),
            ));
        }
        let ar = ar_coefficient(alpha, beta, fractions.alpha, fractions.beta)?;
        let ac = ac_coefficient(alpha, beta, fractions.alpha, fractions.beta, p_g_alpha)?;
        let product = ar * ac;
        if !(product > 0.0 && product.is_finite()) {
            return Err(DomainError::new(
                MODEL,
                "AR·AC",
                format!("must be finite and > 0, got AR = {ar}, AC = {ac}"),
            ));
        }
        tracing::trace!(ar, ac, diffusivity, p_g_alpha, "jackson-hunt coefficients");
        Ok(Self { ar, ac, diffusivity })
    }

    /// The capillary coefficient `AR`.
    pub fn ar(&self) -> f64 {
        self.ar
    }

    /// The solutal coefficient `AC`.
    pub fn ac(&self) -> f64 {
        self.ac
    }

    /// The liquid diffusivity `D_l` (m²/s).
    pub fn diffusivity(&self) -> f64 {
        self.diffusivity
    }

    /// The growth constant `λ²·v = AR·D_l/AC` (m³/s).
    pub fn growth_constant(&self) -> f64 {
        self.ar * self.diffusivity / self.ac
    }

    /// Lamellar spacing (m) at `velocity` (m/s).
    ///
    /// # Errors
    ///
    /// Returns a [`DomainError`] unless `velocity` is finite and > 0.
    pub fn spacing(&self, velocity: f64) -> Result<f64, DomainError> {
        if !(velocity > 0.0 && velocity.is_finite()) {
            return Err(DomainError::new(
                MODEL,
                "velocity",
                format!("must be finite and > 0, got {velocity}"),
            ));
        }
        Ok((self.growth_constant() / velocity).sqrt())
    }

    /// Lamellar spacing for every element of a velocity field.
    ///
    /// # Errors
    ///
    /// Fails on the first invalid velocity; the error carries its index.
    pub fn spacing_field(&self, velocities: &[f64]) -> Result<Vec<f64>, DomainError> {
        velocities
            .iter()
            .enumerate()
            .map(|(i, &v)| self.spacing(v).map_err(|e| e.at_index(i)))
            .collect()
    }
}

/// Lamellar spacing (m) from per-phase properties, the liquid
/// diffusivity, both phase fractions, and the velocity.
///
/// Uses [`DEFAULT_SERIES_TERMS`] for `P(g_alpha)`.
pub fn lamellar_spacing(
    alpha: &EutecticPhase,
    beta: &EutecticPhase,
    diffusivity: f64,
    g_alpha: f64,
    g_beta: f64,
    velocity: f64,
) -> Result<f64, DomainError> {
    let fractions = PhaseFractions {
        alpha: g_alpha,
        beta: g_beta,
    };
    JacksonHunt::new(alpha, beta, diffusivity, fractions, DEFAULT_SERIES_TERMS)?.spacing(velocity)
}
