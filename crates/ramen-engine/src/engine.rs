//! The "compute everything from raw conditions" entry point.

use ramen_core::error::PropertyOwner;
use ramen_core::{
    keys, Composition, DomainError, ModelError, PropertyError, PropertySource, SolidificationState,
};
use ramen_models::{
    grain_boundary_from_source, jackson_hunt_p, lever_rule_from_source, orowan_strengthening,
    solid_solution_for, EutecticPhase, JacksonHunt, MatrixProperties, PhaseFractions,
    StrengtheningResult,
};
use tracing::{debug, instrument, warn};

use crate::batch::run_ordered;
use crate::cache::{CacheStats, SeriesCache};
use crate::config::{ConfigError, EngineConfig, FractionPolicy};
use crate::evaluation::{Evaluation, MicrostructureResult};
use crate::grid::{ProcessGrid, SpacingMap};
use crate::system::EutecticSystem;

/// Evaluates phase fractions, lamellar spacing, and strengthening for a
/// binary eutectic alloy.
///
/// Reads properties from `S` and never writes to it. Pass a reference
/// (`&record`) to keep ownership of the store, e.g. for a later
/// write-back of [`Evaluation::to_quantities`].
#[derive(Debug)]
pub struct Engine<S> {
    source: S,
    system: EutecticSystem,
    config: EngineConfig,
    cache: SeriesCache,
}

impl<S: PropertySource> Engine<S> {
    /// Create an engine over `source`.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if `config` fails validation.
    pub fn new(
        source: S,
        system: EutecticSystem,
        config: EngineConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            source,
            system,
            config,
            cache: SeriesCache::new(),
        })
    }

    /// Engine with the default configuration.
    pub fn with_defaults(source: S, system: EutecticSystem) -> Self {
        Self {
            source,
            system,
            config: EngineConfig::default(),
            cache: SeriesCache::new(),
        }
    }

    /// The property source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Release the property source.
    pub fn into_source(self) -> S {
        self.source
    }

    /// The phases taking part in the evaluation.
    pub fn system(&self) -> &EutecticSystem {
        &self.system
    }

    /// The active configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Series cache counters.
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Drop every memoised series value. The cache is never trimmed on its
    /// own.
    pub fn clear_series_cache(&self) {
        self.cache.clear();
    }

    /// Lever-rule fractions for an average composition, applying the
    /// configured [`FractionPolicy`].
    pub fn phase_fractions(&self, c_avg: f64) -> Result<PhaseFractions, ModelError> {
        let fractions =
            lever_rule_from_source(&self.source, &self.system.alpha, &self.system.beta, c_avg)?;
        if let Err(err) = fractions.check_coexistence() {
            match self.config.fraction_policy {
                FractionPolicy::Reject => return Err(err.into()),
                FractionPolicy::Warn => warn!(
                    c_avg,
                    g_alpha = fractions.alpha,
                    g_beta = fractions.beta,
                    "composition outside the eutectic coexistence range"
                ),
            }
        }
        Ok(fractions)
    }

    /// Jackson–Hunt coefficients for `composition`, ready to be evaluated
    /// at any velocity.
    pub fn jackson_hunt(
        &self,
        composition: &Composition,
    ) -> Result<(PhaseFractions, JacksonHunt), ModelError> {
        let (solute, c_avg) = composition.single_solute()?;
        let fractions = self.phase_fractions(c_avg)?;
        let alpha = EutecticPhase::from_source(&self.source, &self.system.alpha)?;
        let beta = EutecticPhase::from_source(&self.source, &self.system.beta)?;
        let diffusivity = self.liquid_diffusivity(solute)?;
        let p = self.series_value(fractions.alpha)?;
        let jh = JacksonHunt::with_series_value(&alpha, &beta, diffusivity, fractions, p)?;
        Ok((fractions, jh))
    }

    /// Phase fractions and lamellar spacing.
    #[instrument(level = "debug", skip_all, fields(velocity = state.velocity))]
    pub fn microstructure(
        &self,
        state: &SolidificationState,
    ) -> Result<MicrostructureResult, ModelError> {
        let (fractions, jh) = self.jackson_hunt(&state.composition)?;
        let lamellar_spacing = jh.spacing(state.velocity)?;
        Ok(MicrostructureResult {
            phase_fractions: fractions,
            lamellar_spacing,
        })
    }

    /// Strengthening contributions for a computed microstructure.
    pub fn strengthening(
        &self,
        microstructure: &MicrostructureResult,
        grain_diameter: f64,
    ) -> Result<StrengtheningResult, ModelError> {
        let matrix_phase = &self.system.matrix;
        let matrix = MatrixProperties::from_source(&self.source, matrix_phase)?;

        let g_secondary = self.secondary_fraction(&microstructure.phase_fractions)?;
        let orowan = orowan_strengthening(&matrix, microstructure.lamellar_spacing, g_secondary)?;
        let solid_solution = solid_solution_for(&matrix, &self.source, matrix_phase)?;

        let grain_boundary = grain_boundary_from_source(&self.source, grain_diameter)?;

        Ok(StrengtheningResult::from_contributions(
            orowan,
            solid_solution,
            grain_boundary,
        )?)
    }

    /// Full evaluation: microstructure, then strengthening.
    #[instrument(
        level = "debug",
        skip_all,
        fields(velocity = state.velocity, grain_diameter = state.grain_diameter)
    )]
    pub fn evaluate(&self, state: &SolidificationState) -> Result<Evaluation, ModelError> {
        let microstructure = self.microstructure(state)?;
        let strengthening = self.strengthening(&microstructure, state.grain_diameter)?;
        debug!(
            spacing = microstructure.lamellar_spacing,
            yield_strength = strengthening.yield_strength,
            "evaluated"
        );
        Ok(Evaluation {
            microstructure,
            strengthening,
        })
    }

    /// Evaluate independent conditions in parallel.
    ///
    /// Results come back in input order; one failure does not affect the
    /// other entries.
    #[instrument(level = "debug", skip_all, fields(states = states.len()))]
    pub fn evaluate_batch(
        &self,
        states: &[SolidificationState],
    ) -> Vec<Result<Evaluation, ModelError>>
    where
        S: Sync,
    {
        let workers = self.config.resolved_worker_count();
        let results = run_ordered(states, workers, |state| self.evaluate(state));
        let failed = results.iter().filter(|r| r.is_err()).count();
        if failed > 0 {
            warn!(failed, total = results.len(), "batch evaluations failed");
        }
        results
    }

    /// Lamellar spacing over a process grid with velocity on the x axis.
    pub fn spacing_map(
        &self,
        composition: &Composition,
        grid: &ProcessGrid,
    ) -> Result<SpacingMap, ModelError> {
        self.spacing_map_with(composition, grid, |x, _| x)
    }

    /// Lamellar spacing over a process grid, with the velocity of each
    /// cell given by `velocity(x, y)`.
    ///
    /// The composition-derived coefficients are computed once. Cells
    /// where the velocity is rejected hold `NaN`.
    ///
    /// # Errors
    ///
    /// Fails as a whole only if the composition itself cannot be
    /// evaluated.
    #[instrument(level = "debug", skip_all, fields(shape = ?grid.shape()))]
    pub fn spacing_map_with(
        &self,
        composition: &Composition,
        grid: &ProcessGrid,
        velocity: impl Fn(f64, f64) -> f64,
    ) -> Result<SpacingMap, ModelError> {
        let (_, jh) = self.jackson_hunt(composition)?;
        let values = grid
            .cells()
            .map(|(x, y)| jh.spacing(velocity(x, y)).unwrap_or(f64::NAN))
            .collect();
        let map = SpacingMap::new(grid.shape(), values);
        if map.invalid_cells() > 0 {
            debug!(invalid = map.invalid_cells(), "spacing map has invalid cells");
        }
        Ok(map)
    }

    fn series_value(&self, g: f64) -> Result<f64, DomainError> {
        if self.config.memoize_series {
            self.cache.get_or_compute(g, self.config.series_terms)
        } else {
            jackson_hunt_p(g, self.config.series_terms)
        }
    }

    /// Liquid diffusivity of `solute`, which must be the only entry.
    fn liquid_diffusivity(&self, solute: &str) -> Result<f64, PropertyError> {
        let liquid = &self.system.liquid;
        let (found, quantity) = self.source.single_solute(liquid, keys::SOLUTE_DIFFUSIVITIES)?;
        if found != solute {
            return Err(PropertyError::not_found(
                PropertyOwner::phase(liquid),
                format!("{}.{solute}", keys::SOLUTE_DIFFUSIVITIES),
            ));
        }
        quantity.scalar().ok_or_else(|| PropertyError::UnexpectedShape {
            owner: PropertyOwner::phase(liquid),
            property: format!("{}.{solute}", keys::SOLUTE_DIFFUSIVITIES),
            expected: "scalar",
        })
    }

    fn secondary_fraction(&self, fractions: &PhaseFractions) -> Result<f64, DomainError> {
        let secondary = &self.system.secondary;
        if *secondary == self.system.beta {
            Ok(fractions.beta)
        } else if *secondary == self.system.alpha {
            Ok(fractions.alpha)
        } else {
            Err(DomainError::new(
                "engine",
                "secondary phase",
                format!("'{secondary}' is not one of the eutectic phases"),
            ))
        }
    }
}
