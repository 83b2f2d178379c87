//! Al–Cu eutectic walkthrough.
//!
//! Demonstrates: load record → phase fractions → lamellar spacing →
//! strengthening contributions → yield strength → explicit write-back.
//!
//! Run with `RUST_LOG=debug` to see the engine's trace.

use ramen_bench::{logging, reference_record, reference_system};
use ramen_core::SolidificationState;
use ramen_engine::Engine;
use tracing::info;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();
    println!("=== Ramen Al-Cu Eutectic Example ===\n");

    let mut record = reference_record()?;
    let system = reference_system();

    // User-set conditions: 2.6 at.% Cu, 1.3 m/s, 5 µm grains
    let state = SolidificationState::binary("Cu", 2.6, 1.3, 5.0e-6);

    let evaluation = {
        let engine = Engine::with_defaults(&record, system.clone());
        let fractions = engine.phase_fractions(2.6)?;
        println!("Phase fractions: alpha={:.4}, theta={:.4}", fractions.alpha, fractions.beta);
        engine.evaluate(&state)?
    };

    let micro = &evaluation.microstructure;
    let s = &evaluation.strengthening;
    println!("Lamellar spacing: {:.3} nm\n", micro.lamellar_spacing * 1e9);
    println!("Orowan strengthening, eutectic lamellae: {:>8.2} MPa", s.orowan * 1e-6);
    println!("Solid solution strengthening:            {:>8.2} MPa", s.solid_solution * 1e-6);
    println!("Grain boundary strengthening:            {:>8.2} MPa", s.grain_boundary * 1e-6);
    println!("\nPredicted yield strength: {:.2} MPa", evaluation.yield_strength() * 1e-6);

    // Halving the velocity coarsens the lamellae by sqrt(2)
    let slow = Engine::with_defaults(&record, system.clone())
        .microstructure(&state.with_velocity(0.65))?;
    println!(
        "\nAt 0.65 m/s: spacing {:.3} nm (ratio {:.4})",
        slow.lamellar_spacing * 1e9,
        slow.lamellar_spacing / micro.lamellar_spacing
    );

    record.record_evaluation(&evaluation.to_quantities(&system));
    info!(
        quantities = record.microstructure().properties.len(),
        "results written back to the record"
    );
    println!("\n--- microstructure section ---");
    let written = record.microstructure();
    for (phase, q) in &written.phase_fractions {
        println!("  {phase:<6} {:<28} {:.4}", q.name(), q.scalar().unwrap_or(f64::NAN));
    }
    for (name, property) in written.properties.iter() {
        if let Some(q) = property.as_quantity() {
            let value = q.scalar().unwrap_or(f64::NAN);
            println!("  {name:<35} {value:.4e} {} ({})", q.unit(), q.reference());
        }
    }
    Ok(())
}
