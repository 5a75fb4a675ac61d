//! # Solutions
//!
//! A [`Solution`] pairs a [`Vector`] with its cached transformed fitness and
//! the remaining-attempts counter used for stagnation detection. The fitness
//! is computed once at construction, so it can never be stale relative to the
//! vector it accompanies; replacing a solution means swapping the whole
//! value, never patching fields. The one exception is the attempts decrement
//! recorded after a non-improving trial.

use std::fmt;

use crate::error::{ColonyError, Result};
use crate::objective::Objective;
use crate::rng::RandomNumberGenerator;
use crate::vector::{Bounds, Vector};

/// A candidate in the population: a point, its fitness, and its remaining
/// stagnation budget.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    vector: Vector,
    fitness: f64,
    attempts: i32,
}

impl Solution {
    /// Creates a solution from an existing vector, scoring it against the
    /// objective and granting the full attempts budget.
    ///
    /// # Errors
    ///
    /// Returns [`ColonyError::FitnessCalculation`] if the objective yields a
    /// non-finite score at this point.
    pub fn from_vector<O: Objective>(
        vector: Vector,
        objective: &O,
        max_attempts: i32,
    ) -> Result<Self> {
        let fitness = objective.score(&vector);
        if !fitness.is_finite() {
            return Err(ColonyError::FitnessCalculation(format!(
                "Non-finite fitness score encountered: {}",
                fitness
            )));
        }
        Ok(Self {
            vector,
            fitness,
            attempts: max_attempts,
        })
    }

    /// Creates a solution around a fresh random vector.
    pub fn random<O: Objective>(
        dimensions: usize,
        bounds: &Bounds,
        objective: &O,
        max_attempts: i32,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Self> {
        let vector = Vector::random(dimensions, bounds, rng);
        Self::from_vector(vector, objective, max_attempts)
    }

    /// The point this solution sits at.
    pub fn vector(&self) -> &Vector {
        &self.vector
    }

    /// The transformed fitness: strictly positive, larger is better.
    pub fn fitness(&self) -> f64 {
        self.fitness
    }

    /// Trials left before the scout phase recycles this slot.
    pub fn attempts(&self) -> i32 {
        self.attempts
    }

    /// Records one failed improvement trial.
    pub fn record_failure(&mut self) {
        self.attempts -= 1;
    }

    /// Whether the stagnation budget is spent.
    pub fn is_exhausted(&self) -> bool {
        self.attempts <= 0
    }

    #[cfg(test)]
    pub(crate) fn set_attempts(&mut self, attempts: i32) {
        self.attempts = attempts;
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:8.3} {:3} {}", self.fitness, self.attempts, self.vector)
    }
}
