//! # Hive
//!
//! The `Hive` owns the population of [`Solution`]s (the "food sources") and
//! the best solution seen across all history, and drives the three phases of
//! the Artificial Bee Colony algorithm. One iteration runs the worker phase
//! (every slot once, in index order), the observer phase (fitness-weighted
//! random re-trials), and the scout phase (recycling of stagnant slots), then
//! dumps the population to the injected log sink.
//!
//! ## Example
//!
//! ```rust
//! use bees::{Hive, HiveOptions, NullSink, PopulationVariance};
//! use bees::rng::RandomNumberGenerator;
//!
//! fn main() -> bees::error::Result<()> {
//!     let mut hive = Hive::new(
//!         PopulationVariance,
//!         HiveOptions::default(),
//!         NullSink,
//!         RandomNumberGenerator::from_seed(7),
//!     )?;
//!     let best = hive.run(50)?;
//!     println!("{}", best);
//!     Ok(())
//! }
//! ```

pub mod options;

pub use options::{HiveOptions, HiveOptionsBuilder};

use std::cmp::Ordering;
use std::fmt;

use tracing::{debug, info, trace};

use crate::error::{ColonyError, Result};
use crate::objective::Objective;
use crate::rng::RandomNumberGenerator;
use crate::sink::LogSink;
use crate::solution::Solution;
use crate::vector::Vector;

/// The result of one improvement trial on a population slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrialOutcome {
    /// The mutant beat the slot and the global best.
    NewBest,
    /// The mutant beat the slot but not the global best.
    Improved,
    /// The mutant did not improve on the slot; its attempts budget shrank.
    Stalled,
}

impl TrialOutcome {
    /// The single-character marker used in log lines.
    pub fn marker(&self) -> char {
        match self {
            TrialOutcome::NewBest => '^',
            TrialOutcome::Improved => '!',
            TrialOutcome::Stalled => ' ',
        }
    }
}

/// Selects a population index by walking the fitness slices of a roulette
/// wheel: `r` must be drawn uniformly from `[0, total_fitness)`; each visited
/// index's fitness is subtracted from `r` until `r` undershoots the fitness
/// at the current index.
///
/// The terminal index is clamped to the last slot so that floating-point
/// rounding in the subtraction chain can never run off the end of the
/// population.
pub fn select_index(fitnesses: &[f64], mut r: f64) -> usize {
    let mut i = 0;
    while i < fitnesses.len() && r >= fitnesses[i] {
        r -= fitnesses[i];
        i += 1;
    }
    i.min(fitnesses.len().saturating_sub(1))
}

/// The population of solutions and the engine driving it.
///
/// The hive is generic over the objective being minimized and the log sink
/// receiving its progress lines; the random source is injected so seeded runs
/// are reproducible.
#[derive(Clone)]
pub struct Hive<O, S>
where
    O: Objective,
    S: LogSink,
{
    solutions: Vec<Solution>,
    best: Solution,
    options: HiveOptions,
    objective: O,
    sink: S,
    rng: RandomNumberGenerator,
}

impl<O, S> Hive<O, S>
where
    O: Objective,
    S: LogSink,
{
    /// Creates a hive with `options.workers()` independently random
    /// solutions.
    ///
    /// # Errors
    ///
    /// Returns [`ColonyError::Configuration`] when the options violate a
    /// structural precondition (see [`HiveOptions::validate`]), or
    /// [`ColonyError::FitnessCalculation`] when the objective yields a
    /// non-finite score at an initial point.
    pub fn new(
        objective: O,
        options: HiveOptions,
        sink: S,
        mut rng: RandomNumberGenerator,
    ) -> Result<Self> {
        options.validate()?;

        let solutions = (0..options.workers())
            .map(|_| {
                Solution::random(
                    options.dimensions(),
                    &options.bounds(),
                    &objective,
                    options.max_attempts(),
                    &mut rng,
                )
            })
            .collect::<Result<Vec<_>>>()?;
        let best = fittest(&solutions)?;

        Ok(Self {
            solutions,
            best,
            options,
            objective,
            sink,
            rng,
        })
    }

    /// Creates a hive from caller-supplied starting vectors. The population
    /// size is inferred from the vectors; `options.workers()` is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ColonyError::Configuration`] when fewer than 2 vectors are
    /// supplied or any vector's dimensionality disagrees with the options.
    pub fn from_vectors(
        objective: O,
        options: HiveOptions,
        sink: S,
        rng: RandomNumberGenerator,
        vectors: Vec<Vector>,
    ) -> Result<Self> {
        let options = HiveOptions::builder()
            .workers(vectors.len())
            .observers(options.observers())
            .alpha(options.alpha())
            .dimensions(options.dimensions())
            .bounds(options.bounds())
            .max_attempts(options.max_attempts())
            .build();
        options.validate()?;

        for vector in &vectors {
            if vector.len() != options.dimensions() {
                return Err(ColonyError::Configuration(format!(
                    "Starting vector dimensionality ({}) doesn't match options ({})",
                    vector.len(),
                    options.dimensions()
                )));
            }
        }

        let solutions = vectors
            .into_iter()
            .map(|vector| Solution::from_vector(vector, &objective, options.max_attempts()))
            .collect::<Result<Vec<_>>>()?;
        let best = fittest(&solutions)?;

        Ok(Self {
            solutions,
            best,
            options,
            objective,
            sink,
            rng,
        })
    }

    /// The best solution seen across all history.
    pub fn best(&self) -> &Solution {
        &self.best
    }

    /// The current population, indexed 0..N-1.
    pub fn solutions(&self) -> &[Solution] {
        &self.solutions
    }

    /// The options the hive was built with.
    pub fn options(&self) -> &HiveOptions {
        &self.options
    }

    /// The log sink the hive reports into.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Attempts to replace the solution at index `n` with a better mutant.
    ///
    /// A strict improvement replaces the slot wholesale (fresh attempts
    /// budget) and, when it also beats the global best, the best. Ties and
    /// regressions leave the slot in place and cost it one attempt. Every
    /// trial emits one sink line with the index, outcome marker, and the
    /// slot's resulting attempts count.
    pub fn work_on(&mut self, n: usize) -> Result<TrialOutcome> {
        let mutant = self.mutate(n)?;

        let outcome = if mutant.fitness() > self.solutions[n].fitness() {
            let outcome = if mutant.fitness() > self.best.fitness() {
                self.best = mutant.clone();
                TrialOutcome::NewBest
            } else {
                TrialOutcome::Improved
            };
            self.solutions[n] = mutant;
            outcome
        } else {
            self.solutions[n].record_failure();
            TrialOutcome::Stalled
        };

        let line = format!(
            "work on {:3} {} ({:2})",
            n,
            outcome.marker(),
            self.solutions[n].attempts()
        );
        self.sink.record(&line);
        Ok(outcome)
    }

    /// Visits every index exactly once, in index order, trying a local
    /// improvement at each. Randomness is confined to mutation and partner
    /// selection.
    pub fn worker_phase(&mut self) -> Result<()> {
        for n in 0..self.solutions.len() {
            self.work_on(n)?;
        }
        Ok(())
    }

    /// Runs `options.observers()` fitness-proportional re-trials.
    ///
    /// The fitness snapshot is captured once at phase start and not
    /// re-sampled mid-phase, so every trial selects over the same wheel even
    /// as trials replace solutions.
    pub fn observer_phase(&mut self) -> Result<()> {
        let fitnesses: Vec<f64> = self.solutions.iter().map(Solution::fitness).collect();
        let total_fitness: f64 = fitnesses.iter().sum();

        for _ in 0..self.options.observers() {
            let r = self.rng.uniform(0.0, total_fitness);
            let n = select_index(&fitnesses, r);
            self.work_on(n)?;
        }
        Ok(())
    }

    /// Recycles every slot whose attempts budget is exhausted into a
    /// brand-new random solution with the full budget. This is the sole
    /// mechanism preventing indefinite exploitation of a stagnant region.
    pub fn scout_phase(&mut self) -> Result<()> {
        for n in 0..self.solutions.len() {
            if self.solutions[n].is_exhausted() {
                self.sink.record(&format!("reset {:2}", n));
                trace!(slot = n, "scout reset");
                let fresh = Solution::random(
                    self.options.dimensions(),
                    &self.options.bounds(),
                    &self.objective,
                    self.options.max_attempts(),
                    &mut self.rng,
                )?;
                if fresh.fitness() > self.best.fitness() {
                    debug!(slot = n, fitness = fresh.fitness(), "scout found new best");
                    self.best = fresh.clone();
                }
                self.solutions[n] = fresh;
            }
        }
        Ok(())
    }

    /// Runs one full iteration: worker phase, observer phase, scout phase,
    /// in that order, then reports the population to the sink.
    pub fn iteration(&mut self) -> Result<()> {
        self.worker_phase()?;
        self.observer_phase()?;
        self.scout_phase()?;

        let dump = self.to_string();
        self.sink.record(&dump);
        Ok(())
    }

    /// Executes `iterations` iterations sequentially and returns the final
    /// global-best solution.
    pub fn run(&mut self, iterations: usize) -> Result<Solution> {
        info!(iterations, "starting run");
        for i in 0..iterations {
            self.iteration()?;
            debug!(
                iteration = i,
                best_fitness = self.best.fitness(),
                "iteration complete"
            );
        }
        info!(best_fitness = self.best.fitness(), "run complete");
        Ok(self.best.clone())
    }

    fn mutate(&mut self, n: usize) -> Result<Solution> {
        let vectors: Vec<&Vector> = self.solutions.iter().map(Solution::vector).collect();
        let mutant_vector = Vector::mutant(
            &vectors,
            n,
            self.options.alpha(),
            &self.options.bounds(),
            &mut self.rng,
        )?;
        Solution::from_vector(mutant_vector, &self.objective, self.options.max_attempts())
    }
}

impl<O, S> fmt::Display for Hive<O, S>
where
    O: Objective,
    S: LogSink,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (n, solution) in self.solutions.iter().enumerate() {
            writeln!(f, "{:4}  {}", n, solution)?;
        }
        write!(f, "BEST  {}", self.best)
    }
}

/// The fittest solution in a population, cloned.
fn fittest(solutions: &[Solution]) -> Result<Solution> {
    solutions
        .iter()
        .max_by(|a, b| {
            a.fitness()
                .partial_cmp(&b.fitness())
                .unwrap_or(Ordering::Equal)
        })
        .cloned()
        .ok_or(ColonyError::EmptyPopulation)
}
