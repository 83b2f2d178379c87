//! Process map for Al–Cu: lamellar spacing over scan velocity, batch
//! strength along a velocity sweep, and porosity regimes.
//!
//! Demonstrates: ProcessGrid → Engine::spacing_map → evaluate_batch →
//! PorosityCriteria::classify_field.

use ramen_bench::{logging, reference_record, reference_system, velocity_sweep};
use ramen_core::Composition;
use ramen_engine::{Engine, EngineConfig, PorosityCriteria, ProcessGrid, ProcessRegime};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();
    println!("=== Ramen Al-Cu Process Map Example ===\n");

    let record = reference_record()?;
    let engine = Engine::new(&record, reference_system(), EngineConfig::default())?;

    // --- Spacing map: velocity (m/s) on x, laser power (W) on y ---
    let grid = ProcessGrid::new((0.0, 2.0), (150.0, 400.0), (9, 3))?;
    let map = engine.spacing_map(&Composition::binary("Cu", 2.6), &grid)?;
    println!("Lamellar spacing (nm), {} invalid cells:", map.invalid_cells());
    print!("{:>8}", "P \\ v");
    for v in grid.x() {
        print!("{v:>8.2}");
    }
    println!();
    for (row, power) in grid.y().iter().enumerate() {
        print!("{power:>8.0}");
        for col in 0..grid.x().len() {
            match map.get(row, col) {
                Some(s) if !s.is_nan() => print!("{:>8.2}", s * 1e9),
                _ => print!("{:>8}", "-"),
            }
        }
        println!();
    }
    if let Some((lo, hi)) = map.range() {
        println!("range: {:.2} .. {:.2} nm\n", lo * 1e9, hi * 1e9);
    }

    // --- Batch: yield strength along a velocity sweep ---
    let states = velocity_sweep(2.6, 0.25, 2.0, 8, 5.0e-6);
    println!("Yield strength along the sweep:");
    for (state, result) in states.iter().zip(engine.evaluate_batch(&states)) {
        match result {
            Ok(e) => println!(
                "  v={:>5.2} m/s  sigma_y={:>7.2} MPa",
                state.velocity,
                e.yield_strength() * 1e-6
            ),
            Err(err) => println!("  v={:>5.2} m/s  failed: {err}", state.velocity),
        }
    }
    let stats = engine.cache_stats();
    println!("series cache: {} hits, {} misses\n", stats.hits, stats.misses);

    // --- Porosity regimes: 55 µm spot, 30 µm layer ---
    let criteria = PorosityCriteria::new(55.0, 30.0)?;
    let depths = [f64::NAN, 12.0, 30.0, 45.0, 80.0, 109.0, 110.0, 160.0];
    println!("Porosity regimes (melt-pool depth in µm):");
    for (depth, regime) in depths.iter().zip(criteria.classify_field(&depths)) {
        let label = match regime {
            ProcessRegime::NoData => "no data",
            ProcessRegime::Keyhole => "keyhole",
            ProcessRegime::LackOfFusion => "lack of fusion",
            ProcessRegime::Dense => "dense",
        };
        println!("  {depth:>6.1}  {label}");
    }
    Ok(())
}
