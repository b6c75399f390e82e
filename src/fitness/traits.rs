//! Objective traits
//!
//! This module defines the objective function contract. Objectives are
//! minimized: lower values are better.

use std::fmt::Display;
use std::marker::PhantomData;

use crate::error::{FpaError, FpaResult, ObjectiveError};

/// An objective function over a box-bounded search space
///
/// Implementations must be pure and deterministic, and defined over the
/// whole box the optimizer is given.
pub trait Objective {
    /// Evaluate the objective at `position` (lower is better)
    fn evaluate(&self, position: &[f64]) -> Result<f64, ObjectiveError>;
}

/// Any plain function of a position is an objective
impl<F> Objective for F
where
    F: Fn(&[f64]) -> f64,
{
    fn evaluate(&self, position: &[f64]) -> Result<f64, ObjectiveError> {
        Ok(self(position))
    }
}

/// Wraps a fallible closure as an objective
///
/// Errors are reported as [`ObjectiveError::Undefined`] with the closure's
/// error message.
pub struct TryFnObjective<F, E> {
    f: F,
    _marker: PhantomData<fn() -> E>,
}

impl<F, E> TryFnObjective<F, E>
where
    F: Fn(&[f64]) -> Result<f64, E>,
    E: Display,
{
    /// Create a new fallible objective
    pub fn new(f: F) -> Self {
        Self {
            f,
            _marker: PhantomData,
        }
    }
}

impl<F, E> Objective for TryFnObjective<F, E>
where
    F: Fn(&[f64]) -> Result<f64, E>,
    E: Display,
{
    fn evaluate(&self, position: &[f64]) -> Result<f64, ObjectiveError> {
        (self.f)(position).map_err(|e| ObjectiveError::Undefined(e.to_string()))
    }
}

/// Evaluate `objective` at `position`, rejecting NaN
///
/// NaN has no ordering, so a candidate carrying it could never take part in
/// greedy acceptance.
pub(crate) fn evaluate_checked<O: Objective + ?Sized>(
    objective: &O,
    position: &[f64],
) -> FpaResult<f64> {
    let into_error = |source| FpaError::ObjectiveEvaluation {
        position: position.to_vec(),
        source,
    };
    let value = objective.evaluate(position).map_err(into_error)?;
    if value.is_nan() {
        return Err(into_error(ObjectiveError::NotANumber));
    }
    Ok(value)
}
