//! Criterion micro-benchmarks for the Jackson–Hunt series and spacing.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use ramen_bench::{reference_record, reference_system};
use ramen_core::SolidificationState;
use ramen_engine::{Engine, EngineConfig};
use ramen_models::{jackson_hunt_p, jackson_hunt_p_field, DEFAULT_SERIES_TERMS};

fn bench_series_default_terms(c: &mut Criterion) {
    c.bench_function("series_p_10k_terms", |b| {
        b.iter(|| {
            let p = jackson_hunt_p(black_box(0.9234), DEFAULT_SERIES_TERMS).unwrap();
            black_box(p);
        });
    });
}

fn bench_series_field(c: &mut Criterion) {
    let gs: Vec<f64> = (1..100).map(|i| f64::from(i) / 100.0).collect();
    c.bench_function("series_p_field_99", |b| {
        b.iter(|| {
            let p = jackson_hunt_p_field(black_box(&gs), DEFAULT_SERIES_TERMS).unwrap();
            black_box(p);
        });
    });
}

fn bench_evaluate(c: &mut Criterion) {
    let record = reference_record().unwrap();
    let state = SolidificationState::binary("Cu", 2.6, 1.3, 5.0e-6);

    let cached = Engine::with_defaults(&record, reference_system());
    // Warm up: fill the series cache
    cached.evaluate(&state).unwrap();
    c.bench_function("evaluate_cached", |b| {
        b.iter(|| {
            let evaluation = cached.evaluate(black_box(&state)).unwrap();
            black_box(evaluation);
        });
    });

    let config = EngineConfig {
        memoize_series: false,
        ..EngineConfig::default()
    };
    let uncached = Engine::new(&record, reference_system(), config).unwrap();
    c.bench_function("evaluate_uncached", |b| {
        b.iter(|| {
            let evaluation = uncached.evaluate(black_box(&state)).unwrap();
            black_box(evaluation);
        });
    });
}

criterion_group!(
    benches,
    bench_series_default_terms,
    bench_series_field,
    bench_evaluate
);
criterion_main!(benches);
