//! Benchmark profiles and utilities for the Ramen alloy engine.
//!
//! Provides the shared inputs for benchmarks and demos:
//!
//! - [`reference_record`]: the Al–Cu material record bundled with `ramen-store`
//! - [`reference_system`]: the α-Al / θ-Al₂Cu eutectic pair
//! - [`velocity_sweep`]: evenly spaced solidification states
//! - [`logging::init`]: `RUST_LOG`-driven subscriber for the demos

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use ramen_core::SolidificationState;
use ramen_engine::{linspace, EutecticSystem};
use ramen_store::{MaterialRecord, StoreError};

const ALCU_JSON: &str = include_str!("../../ramen-store/data/alcu.json");

/// Parse the bundled Al–Cu record.
pub fn reference_record() -> Result<MaterialRecord, StoreError> {
    MaterialRecord::from_json_str(ALCU_JSON)
}

/// The Al–Cu eutectic: α matrix with θ lamellae.
pub fn reference_system() -> EutecticSystem {
    EutecticSystem::binary("alpha", "theta")
}

/// `n` states from `v_min` to `v_max` (m/s) at a fixed composition and
/// grain size.
///
/// Composition is in at.% Cu, grain diameter in m.
pub fn velocity_sweep(
    c_cu: f64,
    v_min: f64,
    v_max: f64,
    n: usize,
    grain_diameter: f64,
) -> Vec<SolidificationState> {
    linspace(v_min, v_max, n)
        .into_iter()
        .map(|v| SolidificationState::binary("Cu", c_cu, v, grain_diameter))
        .collect()
}

/// Log subscriber setup for the demos.
pub mod logging {
    use tracing_subscriber::{fmt, EnvFilter};

    /// Install a formatting subscriber filtered by `RUST_LOG`
    /// (default `info`).
    ///
    /// ```no_run
    /// ramen_bench::logging::init();
    /// ```
    pub fn init() {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_line_number(true)
            .init();
    }
}
