//! Errors from loading, saving, and editing material records.

use std::io;
use std::path::PathBuf;

use ramen_core::error::PropertyOwner;
use thiserror::Error;

/// Errors from [`MaterialRecord`](crate::MaterialRecord) I/O and edits.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The record file could not be read.
    #[error("failed to read material record {}: {source}", .path.display())]
    Io {
        /// The file that was being read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// The document is not a valid material record.
    #[error("invalid material record: {0}")]
    Json(#[from] serde_json::Error),
    /// A phase was added under a name that is already taken.
    #[error("material '{material}' already has a phase named '{phase}'")]
    DuplicatePhase {
        /// The material name.
        material: String,
        /// The conflicting phase name.
        phase: String,
    },
    /// A quantity is stored under a key that differs from its own name.
    #[error("quantity under '{key}' on {owner} is named '{name}'")]
    NameMismatch {
        /// Where the quantity was found.
        owner: PropertyOwner,
        /// The key it is stored under.
        key: String,
        /// The name the quantity carries.
        name: String,
    },
}
