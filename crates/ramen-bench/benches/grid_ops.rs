//! Criterion benchmarks for process maps and batch evaluation.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use ramen_bench::{reference_record, reference_system, velocity_sweep};
use ramen_core::Composition;
use ramen_engine::{Engine, EngineConfig, PorosityCriteria, ProcessGrid};

fn bench_spacing_map_100x100(c: &mut Criterion) {
    let record = reference_record().unwrap();
    let engine = Engine::with_defaults(&record, reference_system());
    let composition = Composition::binary("Cu", 2.6);
    let grid = ProcessGrid::new((0.1, 2.0), (150.0, 400.0), (100, 100)).unwrap();

    c.bench_function("spacing_map_100x100", |b| {
        b.iter(|| {
            let map = engine.spacing_map(black_box(&composition), &grid).unwrap();
            black_box(map);
        });
    });
}

fn bench_batch(c: &mut Criterion) {
    let record = reference_record().unwrap();
    let states = velocity_sweep(2.6, 0.1, 2.0, 1000, 5.0e-6);

    for workers in [1usize, 4] {
        let config = EngineConfig {
            worker_count: Some(workers),
            ..EngineConfig::default()
        };
        let engine = Engine::new(&record, reference_system(), config).unwrap();
        c.bench_function(&format!("evaluate_batch_1000_w{workers}"), |b| {
            b.iter(|| {
                let results = engine.evaluate_batch(black_box(&states));
                black_box(results);
            });
        });
    }
}

fn bench_classify_field(c: &mut Criterion) {
    let criteria = PorosityCriteria::new(55.0, 30.0).unwrap();
    let depths: Vec<f64> = (0..250_000).map(|i| f64::from(i % 200)).collect();
    c.bench_function("classify_field_250k", |b| {
        b.iter(|| {
            let regimes = criteria.classify_field(black_box(&depths));
            black_box(regimes);
        });
    });
}

criterion_group!(
    benches,
    bench_spacing_map_100x100,
    bench_batch,
    bench_classify_field
);
criterion_main!(benches);
