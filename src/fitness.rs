//! # Fitness Transform
//!
//! Converts a raw objective value (possibly negative, zero-is-best) into a
//! strictly positive score where larger is better, so that every downstream
//! consumer can maximize uniformly. The observer phase's roulette-wheel
//! selection depends on all scores being strictly positive.

/// Transforms a raw minimization objective into a strictly positive score.
///
/// For `raw >= 0` the score is `1 / (raw + 1)`, bounded in `(0, 1]` and
/// approaching 1 as the objective approaches 0. For `raw < 0` the score is
/// `1 + |raw|`, unbounded above and strictly exceeding every non-negative
/// branch score.
///
/// The mapping is discontinuous at `raw = 0` but monotonic: a lower raw
/// objective always yields a higher score. The seam is intentional and must
/// not be smoothed.
///
/// ## Example
///
/// ```rust
/// use bees::fitness::minimize;
///
/// assert_eq!(minimize(0.0), 1.0);
/// assert_eq!(minimize(1.0), 0.5);
/// assert_eq!(minimize(-3.0), 4.0);
/// ```
pub fn minimize(raw: f64) -> f64 {
    if raw >= 0.0 {
        1.0 / (raw + 1.0)
    } else {
        1.0 + raw.abs()
    }
}
