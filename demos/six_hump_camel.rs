//! Six-Hump Camel-Back Minimization
//!
//! Runs the Flower Pollination Algorithm with its reference parameters on the
//! two-dimensional six-hump camel-back function and prints the best flower
//! after every generation.
//!
//! Set `RUST_LOG=fpa_evo=debug` to see per-generation log records.

use fpa_evo::prelude::*;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("=== Six-Hump Camel-Back Optimization ===\n");

    let camel = SixHumpCamelBack::new();
    let optimizer = FlowerPollination::builder()
        .flower_count(175)
        .iterations(300)
        .gamma(0.1)
        .lambda(1.5)
        .switch_probability(0.8)
        .bounds(camel.bounds())
        .objective(camel)
        .build()?;

    let mut report = |generation: usize, best: &Candidate| {
        println!("Iteration = {}, f(x) = {:.10}", generation, best.fitness());
    };

    // Standard stream seeded from the OS, quality stream reads it directly
    let mut standard = RngSource::new(rand::rngs::StdRng::from_rng(rand::rngs::OsRng)?);
    let mut quality = RngSource::new(rand::rngs::OsRng);
    let mut streams = RandomStreams::split(&mut standard, &mut quality);
    let outcome = optimizer.run_with_observer(&mut streams, &mut report)?;

    let position = outcome.best.position();
    println!("\nBest solution:");
    println!("  x = {:.6}, y = {:.6}", position[0], position[1]);
    println!("  f(x, y) = {:.10}", outcome.best.fitness());
    println!(
        "  known optimum = {:.10}",
        SixHumpCamelBack::new().optimal_fitness()
    );

    println!("\n{}", outcome.stats.summary());

    Ok(())
}
