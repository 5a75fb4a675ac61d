//! Demonstration entry point: minimize the population variance of a
//! 10-dimensional vector with a default hive, printing every evaluation and
//! the final best solution.

use bees::rng::RandomNumberGenerator;
use bees::{ConsoleSink, Hive, HiveOptions, PopulationVariance};
use tracing_subscriber::EnvFilter;

fn main() -> bees::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut hive = Hive::new(
        PopulationVariance,
        HiveOptions::default(),
        ConsoleSink,
        RandomNumberGenerator::new(),
    )?;

    let best = hive.run(1000)?;
    println!("BEST  {}", best);
    Ok(())
}
