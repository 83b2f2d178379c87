//! Memoised evaluation of the series term `P(g)`.
//!
//! A batch over many velocities at one composition evaluates the series
//! once. The cache is keyed on the exact bit pattern of `g` and the term
//! count, so a hit returns the same value a fresh evaluation would.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, PoisonError};

use ramen_core::DomainError;
use ramen_models::jackson_hunt_p;

/// Hit/miss counters of a [`SeriesCache`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Lookups answered from the cache.
    pub hits: u64,
    /// Lookups that evaluated the series.
    pub misses: u64,
    /// Distinct `(g, n_max)` pairs stored.
    pub entries: usize,
}

/// Thread-safe memo table for `P(g)`.
///
/// Shared by reference across batch workers. Failed evaluations are not
/// stored.
///
/// The table is unbounded: it keeps one entry per distinct `(g, n_max)`
/// until [`clear`](Self::clear) is called. A long-lived owner sweeping
/// many compositions should clear it between sweeps.
#[derive(Debug, Default)]
pub struct SeriesCache {
    values: Mutex<HashMap<(u64, u32), f64>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl SeriesCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// `P(g)` with `n_max` terms, from the cache when possible.
    pub fn get_or_compute(&self, g: f64, n_max: u32) -> Result<f64, DomainError> {
        let key = (g.to_bits(), n_max);
        if let Some(&p) = self.lock().get(&key) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return Ok(p);
        }
        // Evaluate outside the lock; racing workers compute the same value.
        let p = jackson_hunt_p(g, n_max)?;
        self.misses.fetch_add(1, Ordering::Relaxed);
        self.lock().insert(key, p);
        Ok(p)
    }

    /// Current counters.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries: self.lock().len(),
        }
    }

    /// Drop every stored value and reset the counters.
    pub fn clear(&self) {
        self.lock().clear();
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<(u64, u32), f64>> {
        // The map holds plain values; a panicked holder cannot leave it torn.
        self.values.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
