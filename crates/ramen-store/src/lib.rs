//! Reference property store for the Ramen alloy engine.
//!
//! [`MaterialRecord`] holds material-level and per-phase properties,
//! loads them from JSON, and serves them through
//! [`PropertySource`](ramen_core::PropertySource). Calculated results are
//! written back only through the explicit
//! [`record_evaluation`](MaterialRecord::record_evaluation) step.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod record;

pub use error::StoreError;
pub use record::{MaterialRecord, Microstructure};
