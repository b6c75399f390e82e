//! Error types for fpa-evo
//!
//! This module defines all error types used throughout the library.

use thiserror::Error;

/// Error raised by an objective function for a point it cannot evaluate
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ObjectiveError {
    /// The objective is not defined at the requested point
    #[error("Objective undefined: {0}")]
    Undefined(String),

    /// The objective produced NaN
    #[error("Objective returned NaN")]
    NotANumber,
}

/// Top-level error type for pollination runs
#[derive(Debug, Error)]
pub enum FpaError {
    /// Invalid configuration, detected before any work is done
    #[error("Invalid configuration: {0}")]
    Configuration(String),

    /// The objective failed for a point inside the search space
    #[error("Objective evaluation failed at {position:?}: {source}")]
    ObjectiveEvaluation {
        /// The point that was being evaluated
        position: Vec<f64>,
        /// The underlying objective error
        #[source]
        source: ObjectiveError,
    },

    /// The underlying randomness source could not supply a value
    #[error("Random source failure: {0}")]
    RandomSource(String),

    /// A position or bounds of the wrong length was supplied
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}

/// Result type alias for pollination operations
pub type FpaResult<T> = Result<T, FpaError>;
