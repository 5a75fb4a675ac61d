//! # Search-Space Vectors
//!
//! A [`Vector`] is a fixed-length real-valued point in the bounded search
//! space. Every element is clamped into its [`Bounds`] immediately at
//! construction, never lazily, so a `Vector` in hand is always in bounds.
//! Vectors are immutable values: the mutation operator produces a new
//! `Vector` rather than altering an existing one in place.

use std::borrow::Borrow;
use std::fmt;

use crate::error::{ColonyError, Result};
use crate::rng::RandomNumberGenerator;

/// A closed interval `[low, high]` every vector element is clamped into.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    low: f64,
    high: f64,
}

impl Bounds {
    /// Creates bounds from a closed interval `[low, high]`.
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// The lower bound (inclusive).
    pub fn low(&self) -> f64 {
        self.low
    }

    /// The upper bound (inclusive).
    pub fn high(&self) -> f64 {
        self.high
    }

    /// Clamps a value into the interval.
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.low, self.high)
    }

    /// Checks the interval is finite and non-degenerate.
    pub fn validate(&self) -> Result<()> {
        if !self.low.is_finite() || !self.high.is_finite() {
            return Err(ColonyError::Configuration(format!(
                "Bounds must be finite, got [{}, {}]",
                self.low, self.high
            )));
        }
        if self.low >= self.high {
            return Err(ColonyError::Configuration(format!(
                "Bounds low must be less than high, got [{}, {}]",
                self.low, self.high
            )));
        }
        Ok(())
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            low: 0.0,
            high: 10.0,
        }
    }
}

/// A fixed-length point in the search space.
///
/// The dimensionality is fixed at construction. Elements always lie within
/// the bounds the vector was constructed with.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector {
    elements: Vec<f64>,
}

impl Vector {
    /// Creates a vector from raw elements, clamping each into `bounds`.
    pub fn new(elements: Vec<f64>, bounds: &Bounds) -> Self {
        Self {
            elements: elements.into_iter().map(|elt| bounds.clamp(elt)).collect(),
        }
    }

    /// Creates a random vector with each element drawn uniformly from
    /// `[bounds.low, bounds.high)`.
    pub fn random(dimensions: usize, bounds: &Bounds, rng: &mut RandomNumberGenerator) -> Self {
        let elements = (0..dimensions)
            .map(|_| rng.uniform(bounds.low(), bounds.high()))
            .collect();
        Self::new(elements, bounds)
    }

    /// Constructs a mutant of the vector at index `n` in `population`.
    ///
    /// For each element `i`, a partner index `m != n` is drawn uniformly from
    /// the remaining indices (re-sampled per element, not fixed once for the
    /// whole vector), `phi` is drawn uniformly from `[-alpha, alpha]`, and the
    /// new element is `v_n[i] + phi * (v_n[i] - v_m[i])`. In other words,
    /// each value is tweaked either towards or away from a random partner.
    /// The result is clamped into `bounds` on construction.
    ///
    /// # Errors
    ///
    /// Returns [`ColonyError::InsufficientPopulation`] when the population
    /// holds fewer than 2 vectors, since no distinct partner exists.
    pub fn mutant<V: Borrow<Vector>>(
        population: &[V],
        n: usize,
        alpha: f64,
        bounds: &Bounds,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vector> {
        if population.len() < 2 {
            return Err(ColonyError::InsufficientPopulation(population.len()));
        }

        let current = population[n].borrow();
        let mut elements = Vec::with_capacity(current.len());
        for (i, &elt) in current.elements.iter().enumerate() {
            // Draw from N-1 slots and skip over n itself.
            let mut m = rng.index(population.len() - 1);
            if m >= n {
                m += 1;
            }
            let diff = elt - population[m].borrow().elements[i];
            let phi = rng.uniform(-alpha, alpha);
            elements.push(elt + phi * diff);
        }

        Ok(Vector::new(elements, bounds))
    }

    /// The elements of the vector.
    pub fn elements(&self) -> &[f64] {
        &self.elements
    }

    /// The dimensionality of the vector.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether the vector has zero dimensions.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self
            .elements
            .iter()
            .map(|elt| format!("{:5.2}", elt))
            .collect();
        write!(f, "[ {} ]", rendered.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn in_bounds(vector: &Vector, bounds: &Bounds) -> bool {
        vector
            .elements()
            .iter()
            .all(|&elt| elt >= bounds.low() && elt <= bounds.high())
    }

    #[test]
    fn test_construction_clamps_immediately() {
        let bounds = Bounds::default();
        let vector = Vector::new(vec![-5.0, 3.0, 42.0], &bounds);

        assert_eq!(vector.elements(), &[0.0, 3.0, 10.0]);
    }

    #[test]
    fn test_random_vector_within_bounds() {
        let bounds = Bounds::new(-2.5, 7.5);
        let mut rng = RandomNumberGenerator::from_seed(1);

        for _ in 0..50 {
            let vector = Vector::random(10, &bounds, &mut rng);
            assert_eq!(vector.len(), 10);
            assert!(in_bounds(&vector, &bounds));
        }
    }

    #[test]
    fn test_mutant_within_bounds() {
        let bounds = Bounds::default();
        let mut rng = RandomNumberGenerator::from_seed(2);
        let population: Vec<Vector> = (0..5)
            .map(|_| Vector::random(10, &bounds, &mut rng))
            .collect();

        for n in 0..population.len() {
            let mutant = Vector::mutant(&population, n, 1.0, &bounds, &mut rng).unwrap();
            assert_eq!(mutant.len(), 10);
            assert!(in_bounds(&mutant, &bounds));
        }
    }

    #[test]
    fn test_mutant_preserves_dimensionality_with_large_alpha() {
        let bounds = Bounds::default();
        let mut rng = RandomNumberGenerator::from_seed(3);
        let population: Vec<Vector> = (0..4)
            .map(|_| Vector::random(6, &bounds, &mut rng))
            .collect();

        // Large alpha pushes elements far out of bounds before clamping.
        let mutant = Vector::mutant(&population, 0, 100.0, &bounds, &mut rng).unwrap();
        assert_eq!(mutant.len(), 6);
        assert!(in_bounds(&mutant, &bounds));
    }

    #[test]
    fn test_mutant_of_identical_population_is_identical() {
        let bounds = Bounds::default();
        let mut rng = RandomNumberGenerator::from_seed(4);
        let population = vec![Vector::new(vec![4.0; 8], &bounds); 3];

        // All partner differences are zero, so phi has nothing to scale.
        let mutant = Vector::mutant(&population, 1, 1.0, &bounds, &mut rng).unwrap();
        assert_eq!(mutant, population[1]);
    }

    #[test]
    fn test_mutant_requires_two_candidates() {
        let bounds = Bounds::default();
        let mut rng = RandomNumberGenerator::from_seed(5);
        let population = vec![Vector::random(10, &bounds, &mut rng)];

        let result = Vector::mutant(&population, 0, 1.0, &bounds, &mut rng);
        assert!(matches!(
            result,
            Err(ColonyError::InsufficientPopulation(1))
        ));
    }

    #[test]
    fn test_bounds_validate() {
        assert!(Bounds::default().validate().is_ok());
        assert!(Bounds::new(3.0, 3.0).validate().is_err());
        assert!(Bounds::new(5.0, 1.0).validate().is_err());
        assert!(Bounds::new(f64::NEG_INFINITY, 1.0).validate().is_err());
        assert!(Bounds::new(0.0, f64::NAN).validate().is_err());
    }

    #[test]
    fn test_display_format() {
        let bounds = Bounds::default();
        let vector = Vector::new(vec![1.234, 10.0], &bounds);

        assert_eq!(format!("{}", vector), "[  1.23, 10.00 ]");
    }
}
