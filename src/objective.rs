//! # Objective Trait
//!
//! The `Objective` trait is the seam between the optimization engine and the
//! problem being solved: any function from a fixed-length real vector to a
//! real number. Implementors provide the raw value to minimize; the trait
//! derives the strictly positive, larger-is-better score the engine works
//! with via [`fitness::minimize`](crate::fitness::minimize).
//!
//! ## Example
//!
//! ```rust
//! use bees::objective::Objective;
//! use bees::vector::Vector;
//!
//! struct DistanceFromFive;
//!
//! impl Objective for DistanceFromFive {
//!     fn evaluate(&self, vector: &Vector) -> f64 {
//!         vector.elements().iter().map(|x| (x - 5.0).powi(2)).sum()
//!     }
//! }
//! ```

use crate::fitness::minimize;
use crate::vector::Vector;

/// Trait for the raw objective function being minimized.
///
/// Types implementing this trait must also implement `Send` and `Sync` so a
/// hive can be moved across threads by its owner, even though the engine
/// itself is single-threaded.
pub trait Objective: Send + Sync {
    /// Evaluates the raw objective at the given point. Lower is better;
    /// negative values are allowed.
    fn evaluate(&self, vector: &Vector) -> f64;

    /// The transformed fitness score at the given point: strictly positive,
    /// larger is better. Callers should not override this; the engine depends
    /// on the exact transform.
    fn score(&self, vector: &Vector) -> f64 {
        minimize(self.evaluate(vector))
    }
}

/// The default demonstration objective: the population variance of the
/// vector's own elements (mean squared deviation from the vector's mean).
///
/// Minimizing it drives every element of the vector toward a common value;
/// the minimum, variance 0, scores exactly 1.0.
#[derive(Debug, Clone, Copy, Default)]
pub struct PopulationVariance;

impl Objective for PopulationVariance {
    fn evaluate(&self, vector: &Vector) -> f64 {
        let elements = vector.elements();
        let mean = elements.iter().sum::<f64>() / elements.len() as f64;
        let total_squared_error: f64 = elements.iter().map(|elt| (elt - mean).powi(2)).sum();
        total_squared_error / elements.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::Bounds;

    #[test]
    fn test_variance_of_identical_elements_is_zero() {
        let vector = Vector::new(vec![3.0; 10], &Bounds::default());
        let objective = PopulationVariance;

        assert_eq!(objective.evaluate(&vector), 0.0);
        assert_eq!(objective.score(&vector), 1.0);
    }

    #[test]
    fn test_variance_of_spread_elements() {
        // [0, 10] has mean 5 and variance 25.
        let vector = Vector::new(vec![0.0, 10.0], &Bounds::default());
        let objective = PopulationVariance;

        assert_eq!(objective.evaluate(&vector), 25.0);
        assert_eq!(objective.score(&vector), 1.0 / 26.0);
    }

    #[test]
    fn test_score_uses_minimize_transform() {
        struct AlwaysNegative;
        impl Objective for AlwaysNegative {
            fn evaluate(&self, _vector: &Vector) -> f64 {
                -2.0
            }
        }

        let vector = Vector::new(vec![1.0], &Bounds::default());
        assert_eq!(AlwaysNegative.score(&vector), 3.0);
    }
}
