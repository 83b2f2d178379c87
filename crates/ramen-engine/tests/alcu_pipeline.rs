//! End-to-end tests for the Al–Cu reference alloy.
//!
//! These exercise the full pipeline through `Engine` over a
//! `MaterialRecord` loaded from JSON, including batch evaluation, process
//! maps, and the explicit write-back.

use ramen_core::{keys, Composition, ModelError, PropertyError, SolidificationState};
use ramen_engine::{
    Engine, EngineConfig, EutecticSystem, FractionPolicy, ProcessGrid, ProcessRegime,
    PorosityCriteria,
};
use ramen_store::MaterialRecord;
use ramen_test_utils::fixtures::reference;
use ramen_test_utils::{alcu_fixture, assert_relative_eq};

fn record() -> MaterialRecord {
    MaterialRecord::from_path(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/../ramen-store/data/alcu.json"
    ))
    .unwrap()
}

fn system() -> EutecticSystem {
    EutecticSystem::binary("alpha", "theta")
}

fn state(velocity: f64) -> SolidificationState {
    SolidificationState::binary("Cu", reference::C_CU, velocity, reference::GRAIN_DIAMETER)
}

#[test]
fn alcu_phase_fraction_is_about_0_924() {
    let record = record();
    let engine = Engine::with_defaults(&record, system());
    let f = engine.phase_fractions(reference::C_CU).unwrap();
    assert!((f.alpha - 0.924).abs() < 1e-3);
    assert!((f.alpha + f.beta - 1.0).abs() < 1e-12);
}

#[test]
fn alcu_spacing_is_nanometre_scale() {
    let record = record();
    let engine = Engine::with_defaults(&record, system());
    let micro = engine.microstructure(&state(reference::VELOCITY)).unwrap();
    assert!(micro.lamellar_spacing > 1.0e-8 && micro.lamellar_spacing < 1.0e-6);
}

#[test]
fn halving_velocity_scales_spacing_by_root_two() {
    let record = record();
    let engine = Engine::with_defaults(&record, system());
    let fast = engine.microstructure(&state(1.3)).unwrap().lamellar_spacing;
    let slow = engine.microstructure(&state(0.65)).unwrap().lamellar_spacing;
    assert_relative_eq(slow / fast, std::f64::consts::SQRT_2, 1e-12);
}

#[test]
fn stored_conditions_evaluate_to_reference_strength() {
    let record = record();
    let state = record.solidification().cloned().unwrap();
    let engine = Engine::with_defaults(&record, system());
    let evaluation = engine.evaluate(&state).unwrap();
    assert_relative_eq(evaluation.yield_strength(), reference::YIELD_STRENGTH, 1e-6);
    let s = evaluation.strengthening;
    assert_eq!(s.yield_strength, s.orowan + s.solid_solution + s.grain_boundary);
}

#[test]
fn degenerate_solubility_limits_are_a_domain_error() {
    let source = alcu_fixture().with_scalar("theta", keys::SOLUBILITY_LIMIT, "at.%", 0.17);
    let engine = Engine::with_defaults(source, system());
    let err = engine.evaluate(&state(1.3)).unwrap_err();
    assert!(matches!(err, ModelError::Domain(_)));
}

#[test]
fn missing_taylor_factor_is_not_found() {
    let source = alcu_fixture().without("alpha", keys::TAYLOR_FACTOR);
    let engine = Engine::with_defaults(source, system());
    // The microstructure does not need the Taylor factor.
    assert!(engine.microstructure(&state(1.3)).is_ok());
    match engine.evaluate(&state(1.3)) {
        Err(ModelError::Property(PropertyError::NotFound { property, .. })) => {
            assert_eq!(property, keys::TAYLOR_FACTOR);
        }
        other => panic!("expected NotFound(taylor_factor), got {other:?}"),
    }
}

#[test]
fn batch_matches_sequential_and_keeps_order() {
    let record = record();
    let config = EngineConfig {
        worker_count: Some(4),
        ..EngineConfig::default()
    };
    let engine = Engine::new(&record, system(), config).unwrap();

    let mut states: Vec<_> = (1..=24).map(|i| state(0.1 * f64::from(i))).collect();
    states[7].velocity = 0.0;
    states[19].grain_diameter = -1.0;

    let batch = engine.evaluate_batch(&states);
    assert_eq!(batch.len(), states.len());
    for (i, (result, s)) in batch.iter().zip(&states).enumerate() {
        match (result, engine.evaluate(s)) {
            (Ok(a), Ok(b)) => assert_eq!(*a, b, "state {i}"),
            (Err(a), Err(b)) => assert_eq!(*a, b, "state {i}"),
            (a, b) => panic!("state {i}: batch {a:?} vs sequential {b:?}"),
        }
    }
    assert!(batch[7].is_err());
    assert!(batch[19].is_err());
    assert_eq!(batch.iter().filter(|r| r.is_ok()).count(), 22);

    // One composition: the series was evaluated once for the whole batch.
    assert_eq!(engine.cache_stats().entries, 1);
}

#[test]
fn spacing_map_marks_invalid_cells() {
    let record = record();
    let engine = Engine::with_defaults(&record, system());
    let composition = Composition::binary("Cu", reference::C_CU);

    // Velocity axis starts at zero: the first column is invalid.
    let grid = ProcessGrid::new((0.0, 2.0), (200.0, 400.0), (5, 3)).unwrap();
    let map = engine.spacing_map(&composition, &grid).unwrap();
    assert_eq!(map.shape(), (3, 5));
    assert_eq!(map.invalid_cells(), 3);
    for row in 0..3 {
        assert!(map.get(row, 0).is_some_and(f64::is_nan));
        let at_one = map.get(row, 2).unwrap();
        let direct = engine.microstructure(&state(1.0)).unwrap().lamellar_spacing;
        assert_eq!(at_one, direct);
    }
    let (lo, hi) = map.range().unwrap();
    assert!(lo < hi);
}

#[test]
fn spacing_map_with_custom_velocity() {
    let record = record();
    let engine = Engine::with_defaults(&record, system());
    let composition = Composition::binary("Cu", reference::C_CU);
    let grid = ProcessGrid::new((0.5, 1.5), (1.0, 2.0), (3, 2)).unwrap();

    // Scan speed scaled by the second axis.
    let map = engine.spacing_map_with(&composition, &grid, |x, y| x * y).unwrap();
    assert_eq!(map.invalid_cells(), 0);
    assert_relative_eq(
        map.get(0, 0).unwrap() / map.get(1, 0).unwrap(),
        std::f64::consts::SQRT_2,
        1e-12,
    );
}

#[test]
fn spacing_map_fails_for_bad_composition() {
    let record = record();
    let engine = Engine::with_defaults(&record, system());
    let grid = ProcessGrid::new((0.5, 1.5), (1.0, 2.0), (3, 2)).unwrap();
    assert!(engine.spacing_map(&Composition::new(), &grid).is_err());
}

#[test]
fn warn_policy_still_reports_out_of_range() {
    let config = EngineConfig {
        fraction_policy: FractionPolicy::Warn,
        ..EngineConfig::default()
    };
    let engine = Engine::new(alcu_fixture(), system(), config).unwrap();
    let f = engine.phase_fractions(-1.0).unwrap();
    assert!(!f.within_coexistence());
}

#[test]
fn write_back_is_explicit() {
    let mut record = record();
    let evaluation = {
        let engine = Engine::with_defaults(&record, system());
        engine.evaluate(&state(reference::VELOCITY)).unwrap()
    };
    assert!(record.microstructure().is_empty());

    record.record_evaluation(&evaluation.to_quantities(&system()));
    let micro = record.microstructure();
    assert_eq!(
        micro.phase_fractions["alpha"].scalar(),
        Some(evaluation.microstructure.phase_fractions.alpha)
    );
    assert_eq!(
        micro.phase_fractions["theta"].scalar(),
        Some(evaluation.microstructure.phase_fractions.beta)
    );
    assert_eq!(micro.properties.len(), 5);
}

#[test]
fn porosity_regimes_of_the_acmz_map() {
    let criteria = PorosityCriteria::new(55.0, 30.0).unwrap();
    let depths = [f64::NAN, 25.0, 80.0, 130.0];
    assert_eq!(
        criteria.classify_field(&depths),
        [
            ProcessRegime::NoData,
            ProcessRegime::LackOfFusion,
            ProcessRegime::Dense,
            ProcessRegime::Keyhole
        ]
    );
}
