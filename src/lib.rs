//! # bees
//!
//! An Artificial Bee Colony (ABC) optimization library.
//!
//! The algorithm maintains a population of candidate solutions ("food
//! sources") over a bounded continuous search space and improves them through
//! three cooperating phases per iteration:
//!
//! - **Worker phase**: every candidate is visited once and a local mutant is
//!   tried against it (greedy acceptance).
//! - **Observer phase**: a fitness-weighted random sample of candidates is
//!   re-tried, biasing effort toward currently promising regions.
//! - **Scout phase**: candidates that have stagnated past their attempt
//!   budget are discarded and replaced with fresh random ones.
//!
//! ## Example
//!
//! ```rust
//! use bees::{Hive, HiveOptions, NullSink, PopulationVariance};
//! use bees::rng::RandomNumberGenerator;
//!
//! fn main() -> bees::error::Result<()> {
//!     let options = HiveOptions::builder().workers(10).observers(10).build();
//!     let rng = RandomNumberGenerator::from_seed(42);
//!     let mut hive = Hive::new(PopulationVariance, options, NullSink, rng)?;
//!     let best = hive.run(100)?;
//!     assert!(best.fitness() > 0.0);
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod fitness;
pub mod hive;
pub mod objective;
pub mod rng;
pub mod sink;
pub mod solution;
pub mod vector;

// Re-export commonly used types for convenience
pub use error::{ColonyError, Result};
pub use hive::{Hive, HiveOptions, TrialOutcome};
pub use objective::{Objective, PopulationVariance};
pub use sink::{ConsoleSink, FnSink, LogSink, MemorySink, NullSink};
pub use solution::Solution;
pub use vector::{Bounds, Vector};
