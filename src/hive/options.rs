//! # HiveOptions
//!
//! The `HiveOptions` struct represents the configuration options for a hive.
//! It includes the population size (worker count), the number of observer
//! trials per iteration, the mutation strength, the search-space geometry,
//! and the stagnation budget.
//!
//! ## Example
//!
//! ```rust
//! use bees::hive::HiveOptions;
//! use bees::vector::Bounds;
//!
//! // Custom parameters through the builder
//! let custom = HiveOptions::builder()
//!     .workers(20)
//!     .observers(15)
//!     .alpha(0.8)
//!     .dimensions(5)
//!     .bounds(Bounds::new(-5.0, 5.0))
//!     .max_attempts(25)
//!     .build();
//!
//! // Default parameters
//! let default = HiveOptions::default();
//! ```

use crate::error::{ColonyError, Result};
use crate::vector::Bounds;

/// Configuration options for a hive.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HiveOptions {
    workers: usize,
    observers: usize,
    alpha: f64,
    dimensions: usize,
    bounds: Bounds,
    max_attempts: i32,
}

impl HiveOptions {
    /// Creates options with the given population size, observer trial count,
    /// and mutation strength, keeping defaults for the rest.
    pub fn new(workers: usize, observers: usize, alpha: f64) -> Self {
        Self {
            workers,
            observers,
            alpha,
            ..Self::default()
        }
    }

    /// The population size (one worker per food source).
    pub fn workers(&self) -> usize {
        self.workers
    }

    /// The number of observer trials per iteration.
    pub fn observers(&self) -> usize {
        self.observers
    }

    /// The mutation strength: `phi` is drawn from `[-alpha, alpha]`.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// The dimensionality of the search space.
    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    /// The per-dimension bounds.
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// The stagnation budget granted to every fresh solution.
    pub fn max_attempts(&self) -> i32 {
        self.max_attempts
    }

    /// Checks the structural preconditions of the engine.
    ///
    /// # Errors
    ///
    /// Returns [`ColonyError::Configuration`] when any option violates its
    /// precondition. Mutation partner selection is the reason the population
    /// must hold at least 2 candidates.
    pub fn validate(&self) -> Result<()> {
        if self.workers < 2 {
            return Err(ColonyError::Configuration(format!(
                "Population size must be at least 2 for mutation partner selection, got {}",
                self.workers
            )));
        }
        if !self.alpha.is_finite() || self.alpha <= 0.0 {
            return Err(ColonyError::Configuration(format!(
                "Mutation strength alpha must be finite and positive, got {}",
                self.alpha
            )));
        }
        if self.dimensions == 0 {
            return Err(ColonyError::Configuration(
                "Vector dimensionality cannot be zero".to_string(),
            ));
        }
        if self.max_attempts < 1 {
            return Err(ColonyError::Configuration(format!(
                "Stagnation budget must be at least 1, got {}",
                self.max_attempts
            )));
        }
        self.bounds.validate()
    }

    /// Returns a builder for creating a `HiveOptions` instance.
    pub fn builder() -> HiveOptionsBuilder {
        HiveOptionsBuilder::default()
    }
}

impl Default for HiveOptions {
    fn default() -> Self {
        Self {
            workers: 10,
            observers: 10,
            alpha: 1.0,
            dimensions: 10,
            bounds: Bounds::default(),
            max_attempts: 10,
        }
    }
}

/// Builder for `HiveOptions`.
///
/// Provides a fluent interface for constructing `HiveOptions` instances.
#[derive(Debug, Clone, Default)]
pub struct HiveOptionsBuilder {
    workers: Option<usize>,
    observers: Option<usize>,
    alpha: Option<f64>,
    dimensions: Option<usize>,
    bounds: Option<Bounds>,
    max_attempts: Option<i32>,
}

impl HiveOptionsBuilder {
    /// Sets the population size.
    pub fn workers(mut self, value: usize) -> Self {
        self.workers = Some(value);
        self
    }

    /// Sets the number of observer trials per iteration.
    pub fn observers(mut self, value: usize) -> Self {
        self.observers = Some(value);
        self
    }

    /// Sets the mutation strength.
    pub fn alpha(mut self, value: f64) -> Self {
        self.alpha = Some(value);
        self
    }

    /// Sets the vector dimensionality.
    pub fn dimensions(mut self, value: usize) -> Self {
        self.dimensions = Some(value);
        self
    }

    /// Sets the per-dimension bounds.
    pub fn bounds(mut self, value: Bounds) -> Self {
        self.bounds = Some(value);
        self
    }

    /// Sets the stagnation budget.
    pub fn max_attempts(mut self, value: i32) -> Self {
        self.max_attempts = Some(value);
        self
    }

    /// Builds the `HiveOptions` instance.
    pub fn build(self) -> HiveOptions {
        let defaults = HiveOptions::default();
        HiveOptions {
            workers: self.workers.unwrap_or(defaults.workers),
            observers: self.observers.unwrap_or(defaults.observers),
            alpha: self.alpha.unwrap_or(defaults.alpha),
            dimensions: self.dimensions.unwrap_or(defaults.dimensions),
            bounds: self.bounds.unwrap_or(defaults.bounds),
            max_attempts: self.max_attempts.unwrap_or(defaults.max_attempts),
        }
    }
}
