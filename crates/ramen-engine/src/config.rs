//! Engine configuration, validation, and error types.
//!
//! [`EngineConfig`] is plain data with a [`Default`]; call
//! [`validate()`](EngineConfig::validate) (the [`Engine`](crate::Engine)
//! constructor does) before using it.

use ramen_models::DEFAULT_SERIES_TERMS;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ── FractionPolicy ─────────────────────────────────────────────────

/// What to do when the lever rule places the average composition outside
/// the eutectic coexistence range.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FractionPolicy {
    /// Fail with a domain error.
    #[default]
    Reject,
    /// Log a warning and return the out-of-range fractions flagged as such.
    Warn,
}

// ── EngineConfig ───────────────────────────────────────────────────

/// Tunables for an [`Engine`](crate::Engine).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Number of terms of the Jackson–Hunt series `P(g)`. Default: 10 000.
    pub series_terms: u32,
    /// Handling of compositions outside the coexistence range.
    pub fraction_policy: FractionPolicy,
    /// Batch worker threads. `None` = auto-detect
    /// (`available_parallelism`, clamped to `[1, 16]`).
    pub worker_count: Option<usize>,
    /// Reuse `P(g)` values across evaluations. Default: true.
    pub memoize_series: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            series_terms: DEFAULT_SERIES_TERMS,
            fraction_policy: FractionPolicy::Reject,
            worker_count: None,
            memoize_series: true,
        }
    }
}

impl EngineConfig {
    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.series_terms == 0 {
            return Err(ConfigError::NoSeriesTerms);
        }
        if self.worker_count == Some(0) {
            return Err(ConfigError::ZeroWorkers);
        }
        Ok(())
    }

    /// Resolve the actual worker count, applying auto-detection if `None`.
    ///
    /// Explicit values are clamped to `[1, 64]`.
    pub fn resolved_worker_count(&self) -> usize {
        match self.worker_count {
            Some(n) => n.clamp(1, 64),
            None => std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(4)
                .clamp(1, 16),
        }
    }

    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json).map_err(|e| ConfigError::Parse {
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected by [`EngineConfig::validate()`].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// `series_terms` is zero.
    #[error("series_terms must be at least 1")]
    NoSeriesTerms,
    /// `worker_count` is `Some(0)`.
    #[error("worker_count must be at least 1 when set")]
    ZeroWorkers,
    /// The configuration document could not be parsed.
    #[error("invalid engine config: {reason}")]
    Parse {
        /// Parser message.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let config = EngineConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.series_terms, 10_000);
        assert_eq!(config.fraction_policy, FractionPolicy::Reject);
        assert!(config.memoize_series);
    }

    #[test]
    fn zero_terms_is_rejected() {
        let config = EngineConfig {
            series_terms: 0,
            ..EngineConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::NoSeriesTerms));
    }

    #[test]
    fn zero_workers_is_rejected() {
        let config = EngineConfig {
            worker_count: Some(0),
            ..EngineConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroWorkers));
    }

    #[test]
    fn worker_count_is_clamped() {
        let explicit = EngineConfig {
            worker_count: Some(1000),
            ..EngineConfig::default()
        };
        assert_eq!(explicit.resolved_worker_count(), 64);
        let auto = EngineConfig::default().resolved_worker_count();
        assert!((1..=16).contains(&auto));
    }

    #[test]
    fn json_fills_missing_fields_with_defaults() {
        let config =
            EngineConfig::from_json_str(r#"{ "series_terms": 2000, "fraction_policy": "warn" }"#)
                .unwrap();
        assert_eq!(config.series_terms, 2000);
        assert_eq!(config.fraction_policy, FractionPolicy::Warn);
        assert_eq!(config.worker_count, None);
        assert!(config.memoize_series);
    }

    #[test]
    fn json_is_validated() {
        assert_eq!(
            EngineConfig::from_json_str(r#"{ "series_terms": 0 }"#),
            Err(ConfigError::NoSeriesTerms)
        );
        assert!(matches!(
            EngineConfig::from_json_str("{ \"fraction_policy\": \"ignore\" }"),
            Err(ConfigError::Parse { .. })
        ));
    }
}
