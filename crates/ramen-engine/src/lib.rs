//! Evaluation engine for binary eutectic alloys.
//!
//! [`Engine`] ties the models of `ramen-models` into one pipeline:
//! raw conditions ([`SolidificationState`](ramen_core::SolidificationState))
//! → phase fractions → lamellar spacing → strengthening contributions →
//! yield strength. It reads properties through a
//! [`PropertySource`](ramen_core::PropertySource) and never writes to it;
//! [`Evaluation::to_quantities`] prepares an explicit write-back.
//!
//! Also provided: parallel batch evaluation, process-map grids, and
//! porosity regime classification.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod batch;
pub mod cache;
pub mod config;
pub mod engine;
pub mod evaluation;
pub mod grid;
pub mod regime;
pub mod system;

pub use cache::{CacheStats, SeriesCache};
pub use config::{ConfigError, EngineConfig, FractionPolicy};
pub use engine::Engine;
pub use evaluation::{Evaluation, MicrostructureResult};
pub use grid::{linspace, ProcessGrid, SpacingMap};
pub use regime::{
    classify_regime, keyhole_porosity, lack_of_fusion_porosity, no_data, PorosityCriteria,
    ProcessRegime,
};
pub use system::EutecticSystem;
