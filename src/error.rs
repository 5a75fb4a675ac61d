//! # Error Types
//!
//! This module defines custom error types for the bee colony library. It
//! provides specific error variants for the failure scenarios that can occur
//! while constructing or running a hive.
//!
//! ## Examples
//!
//! Using the `Result` type:
//!
//! ```rust
//! use bees::error::{ColonyError, Result};
//!
//! fn some_function() -> Result<()> {
//!     // Function implementation
//!     Ok(())
//! }
//!
//! fn caller() {
//!     match some_function() {
//!         Ok(_) => println!("Success!"),
//!         Err(e) => println!("Error: {}", e),
//!     }
//! }
//! ```

use thiserror::Error;

/// Represents errors that can occur in the bee colony library.
///
/// In the steady state the engine is total: once a hive has been constructed
/// with valid options, the phases cannot fail except through a non-finite
/// objective value. Everything else is a configuration precondition caught
/// up front.
#[derive(Error, Debug)]
pub enum ColonyError {
    /// Error that occurs when an invalid configuration is provided.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Error that occurs when an empty population is encountered.
    #[error("Empty population error: Cannot operate on an empty population")]
    EmptyPopulation,

    /// Error that occurs when a population is too small for mutation, which
    /// needs a partner candidate distinct from the one being perturbed.
    #[error("Insufficient population: mutation requires at least 2 candidates, got {0}")]
    InsufficientPopulation(usize),

    /// Error that occurs when an objective evaluates to NaN or infinity.
    #[error("Fitness calculation error: {0}")]
    FitnessCalculation(String),
}

/// A specialized Result type for bee colony operations.
///
/// This type is a convenience wrapper around `std::result::Result` with the
/// error type fixed to `ColonyError`.
///
/// ## Examples
///
/// ```rust
/// use bees::error::{ColonyError, Result};
///
/// fn may_fail() -> Result<i32> {
///     // Some operation that might fail
///     Ok(42)
/// }
/// ```
pub type Result<T> = std::result::Result<T, ColonyError>;
