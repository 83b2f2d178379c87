//! Test utilities and mock types for Ramen development.
//!
//! Provides a [`MockPropertySource`] implementing [`PropertySource`], the
//! Al–Cu reference property set in [`fixtures`], and tolerance helpers
//! for comparing floating-point model outputs.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::collections::HashMap;

use ramen_core::{PhasePropertySet, PhysicalQuantity, Property, PropertySource};

pub use fixtures::alcu_fixture;

/// Mock implementation of [`PropertySource`].
///
/// Backed by a `HashMap<String, PhasePropertySet>` plus a material-level
/// set. Pre-populate with [`set_phase`](MockPropertySource::set_phase) or
/// the builder methods before passing to code under test.
#[derive(Clone, Debug, Default)]
pub struct MockPropertySource {
    phases: HashMap<String, PhasePropertySet>,
    material: PhasePropertySet,
}

impl MockPropertySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole property set of a phase.
    pub fn set_phase(&mut self, phase: impl Into<String>, set: PhasePropertySet) {
        self.phases.insert(phase.into(), set);
    }

    /// Store a scalar quantity on a phase, creating the phase if needed.
    pub fn set_scalar(&mut self, phase: &str, name: &str, unit: &str, value: f64) {
        self.phases
            .entry(phase.to_string())
            .or_default()
            .insert(name, PhysicalQuantity::new(name, unit, value));
    }

    /// Store a single-entry per-solute mapping on a phase.
    pub fn set_per_solute(
        &mut self,
        phase: &str,
        name: &str,
        solute: &str,
        unit: &str,
        value: f64,
    ) {
        let set = self.phases.remove(phase).unwrap_or_default();
        let set = set.with_per_solute(name, [(solute, PhysicalQuantity::new(solute, unit, value))]);
        self.phases.insert(phase.to_string(), set);
    }

    /// Store a material-level scalar quantity.
    pub fn set_material_scalar(&mut self, name: &str, unit: &str, value: f64) {
        self.material.insert(name, PhysicalQuantity::new(name, unit, value));
    }

    /// Remove one property from a phase. Returns it if it was present.
    pub fn remove(&mut self, phase: &str, name: &str) -> Option<Property> {
        self.phases.get_mut(phase)?.remove(name)
    }

    /// Remove one material-level property.
    pub fn remove_material(&mut self, name: &str) -> Option<Property> {
        self.material.remove(name)
    }

    /// Builder-style [`set_scalar`](Self::set_scalar).
    pub fn with_scalar(mut self, phase: &str, name: &str, unit: &str, value: f64) -> Self {
        self.set_scalar(phase, name, unit, value);
        self
    }

    /// Builder-style [`remove`](Self::remove).
    pub fn without(mut self, phase: &str, name: &str) -> Self {
        self.remove(phase, name);
        self
    }
}

impl PropertySource for MockPropertySource {
    fn phase_property(&self, phase: &str, name: &str) -> Option<&Property> {
        self.phases.get(phase)?.get(name)
    }

    fn material_property(&self, name: &str) -> Option<&Property> {
        self.material.get(name)
    }
}

/// Relative difference `|a - b| / max(|a|, |b|)`, or 0 when both are 0.
pub fn relative_diff(a: f64, b: f64) -> f64 {
    let scale = a.abs().max(b.abs());
    if scale == 0.0 {
        0.0
    } else {
        (a - b).abs() / scale
    }
}

/// Assert that `actual` matches `expected` to within relative `tol`.
#[track_caller]
pub fn assert_relative_eq(actual: f64, expected: f64, tol: f64) {
    let diff = relative_diff(actual, expected);
    assert!(
        diff <= tol,
        "expected {expected}, got {actual} (relative difference {diff:e} > {tol:e})"
    );
}
