//! # RandomNumberGenerator
//!
//! The `RandomNumberGenerator` struct provides a simple interface for the
//! random draws the engine needs: uniform floating-point values and uniform
//! indices. Wrapping the `rand` crate behind one injected value keeps all
//! randomness explicit, so seeding it makes an entire optimization run
//! reproducible.
//!
//! ## Example
//!
//! ```rust
//! use bees::rng::RandomNumberGenerator;
//!
//! let mut rng = RandomNumberGenerator::from_seed(42);
//! let phi = rng.uniform(-1.0, 1.0);
//! assert!((-1.0..1.0).contains(&phi));
//! ```

use rand::{rngs::StdRng, Rng, SeedableRng};
use std::collections::VecDeque;

/// A wrapper around the `rand` crate's `StdRng` that provides methods for
/// generating random numbers within a specified range.
#[derive(Debug, Clone)]
pub struct RandomNumberGenerator {
    rng: StdRng,
}

impl RandomNumberGenerator {
    /// Creates a new `RandomNumberGenerator` instance seeded from the system entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a new `RandomNumberGenerator` instance with a specific seed.
    ///
    /// This is useful for reproducible tests and benchmarks.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generates a single random floating-point number in `[from, to)`.
    pub fn uniform(&mut self, from: f64, to: f64) -> f64 {
        self.rng.gen_range(from..to)
    }

    /// Generates a specified number of random floating-point numbers within
    /// the given range.
    ///
    /// # Parameters
    ///
    /// - `from`: The lower bound of the range (inclusive).
    /// - `to`: The upper bound of the range (exclusive).
    /// - `num`: The number of random numbers to generate.
    ///
    /// # Returns
    ///
    /// A `VecDeque` containing the generated random numbers.
    pub fn fetch_uniform(&mut self, from: f64, to: f64, num: usize) -> VecDeque<f64> {
        let mut uniform_numbers = VecDeque::with_capacity(num);
        uniform_numbers.extend((0..num).map(|_| self.rng.gen_range(from..to)));
        uniform_numbers
    }

    /// Generates a random index in `[0, upper)`.
    ///
    /// # Panics
    ///
    /// Panics if `upper` is zero, like the underlying `gen_range`.
    pub fn index(&mut self, upper: usize) -> usize {
        self.rng.gen_range(0..upper)
    }
}

impl Default for RandomNumberGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_within_range() {
        let mut rng = RandomNumberGenerator::new();
        for _ in 0..100 {
            let x = rng.uniform(0.0, 10.0);
            assert!((0.0..10.0).contains(&x));
        }
    }

    #[test]
    fn test_uniform_with_negative_range() {
        let mut rng = RandomNumberGenerator::new();
        for _ in 0..100 {
            let x = rng.uniform(-1.0, 1.0);
            assert!((-1.0..1.0).contains(&x));
        }
    }

    #[test]
    fn test_fetch_uniform_length_and_range() {
        let mut rng = RandomNumberGenerator::new();
        let result = rng.fetch_uniform(0.0, 1.0, 5);

        assert_eq!(result.len(), 5);

        for &num in result.iter() {
            assert!((0.0..1.0).contains(&num));
        }
    }

    #[test]
    fn test_fetch_uniform_with_empty_result() {
        let mut rng = RandomNumberGenerator::new();
        let result = rng.fetch_uniform(1.0, 2.0, 0);

        assert!(result.is_empty());
    }

    #[test]
    fn test_index_within_bounds() {
        let mut rng = RandomNumberGenerator::from_seed(7);
        for _ in 0..1000 {
            assert!(rng.index(9) < 9);
        }
    }

    #[test]
    fn test_seeded_clone_generates_same_sequence() {
        let mut rng1 = RandomNumberGenerator::from_seed(42);
        let mut rng2 = rng1.clone();

        let nums1 = rng1.fetch_uniform(0.0, 1.0, 5);
        let nums2 = rng2.fetch_uniform(0.0, 1.0, 5);

        assert_eq!(nums1, nums2);
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut rng1 = RandomNumberGenerator::from_seed(123);
        let mut rng2 = RandomNumberGenerator::from_seed(123);

        for _ in 0..10 {
            assert_eq!(rng1.uniform(0.0, 10.0), rng2.uniform(0.0, 10.0));
            assert_eq!(rng1.index(10), rng2.index(10));
        }
    }
}
