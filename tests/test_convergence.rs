use bees::rng::RandomNumberGenerator;
use bees::{Hive, HiveOptions, NullSink, PopulationVariance};

/// End-to-end: minimizing the population variance of a vector's own elements
/// should drive all elements toward a common value.
#[test]
fn test_variance_minimization_converges() {
    let mut hive = Hive::new(
        PopulationVariance,
        HiveOptions::default(),
        NullSink,
        RandomNumberGenerator::from_seed(2024),
    )
    .unwrap();

    let initial = hive.best().fitness();
    let best = hive.run(500).unwrap();

    assert!(best.fitness() >= initial);
    // Fitness 0.5 corresponds to a raw variance of 1.0; a random 10-dim
    // vector in [0, 10) starts around variance 8.
    assert!(
        best.fitness() > 0.5,
        "expected substantial convergence, got fitness {}",
        best.fitness()
    );

    let elements = best.vector().elements();
    let mean = elements.iter().sum::<f64>() / elements.len() as f64;
    let spread = elements
        .iter()
        .map(|e| (e - mean).abs())
        .fold(0.0f64, f64::max);
    assert!(spread < 2.0, "elements should cluster, max spread {}", spread);
}

/// The scout phase keeps the search alive: over a long run on a small
/// population, stagnant slots must get recycled rather than pinning the hive
/// to its first local optimum forever.
#[test]
fn test_long_run_keeps_improving_early_best() {
    let mut hive = Hive::new(
        PopulationVariance,
        HiveOptions::builder().workers(5).observers(5).build(),
        NullSink,
        RandomNumberGenerator::from_seed(7),
    )
    .unwrap();

    hive.run(20).unwrap();
    let early = hive.best().fitness();
    hive.run(300).unwrap();
    let late = hive.best().fitness();

    assert!(late >= early);
    assert!(late > 0.3, "expected progress past fitness 0.3, got {}", late);
}
