//! Candidate type
//!
//! A candidate (a "flower") is a point in the search space together with its
//! objective value.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::error::FpaResult;
use crate::fitness::traits::{evaluate_checked, Objective};

/// A point in the search space and its fitness
///
/// Candidates are built by evaluating the objective at their position, and
/// the position is never mutated afterwards, so `fitness` always matches.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    position: Vec<f64>,
    fitness: f64,
}

impl Candidate {
    /// Evaluate `objective` at `position` and wrap the pair
    pub fn evaluate<O: Objective + ?Sized>(position: Vec<f64>, objective: &O) -> FpaResult<Self> {
        let fitness = evaluate_checked(objective, &position)?;
        Ok(Self { position, fitness })
    }

    /// The decision vector
    pub fn position(&self) -> &[f64] {
        &self.position
    }

    /// The objective value at [`Self::position`] (lower is better)
    pub fn fitness(&self) -> f64 {
        self.fitness
    }

    /// Number of dimensions
    pub fn dimension(&self) -> usize {
        self.position.len()
    }

    /// Take the decision vector out of this candidate
    pub fn into_position(self) -> Vec<f64> {
        self.position
    }

    /// Check if this candidate is strictly better than another
    pub fn is_better_than(&self, other: &Self) -> bool {
        self.fitness < other.fitness
    }

    /// Check if this candidate is at least as good as another
    pub fn is_at_least_as_good_as(&self, other: &Self) -> bool {
        self.fitness <= other.fitness
    }

    /// Euclidean distance between positions
    pub fn distance(&self, other: &Self) -> f64 {
        self.position
            .iter()
            .zip(&other.position)
            .map(|(a, b)| (a - b).powi(2))
            .sum::<f64>()
            .sqrt()
    }
}

impl PartialOrd for Candidate {
    /// Orders by fitness, lower first
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.fitness.partial_cmp(&other.fitness)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{FpaError, ObjectiveError};
    use crate::fitness::traits::TryFnObjective;

    fn sphere(x: &[f64]) -> f64 {
        x.iter().map(|v| v * v).sum()
    }

    #[test]
    fn test_candidate_evaluate() {
        let c = Candidate::evaluate(vec![1.0, 2.0], &sphere).unwrap();
        assert_eq!(c.position(), &[1.0, 2.0]);
        assert_eq!(c.fitness(), 5.0);
        assert_eq!(c.dimension(), 2);
    }

    #[test]
    fn test_candidate_evaluate_error() {
        let objective = TryFnObjective::new(|_: &[f64]| Err::<f64, _>("singular"));
        let err = Candidate::evaluate(vec![0.0], &objective).unwrap_err();
        assert!(matches!(
            err,
            FpaError::ObjectiveEvaluation {
                source: ObjectiveError::Undefined(_),
                ..
            }
        ));
    }

    #[test]
    fn test_candidate_comparisons() {
        let a = Candidate::evaluate(vec![1.0], &sphere).unwrap();
        let b = Candidate::evaluate(vec![2.0], &sphere).unwrap();
        let c = Candidate::evaluate(vec![-1.0], &sphere).unwrap();

        assert!(a.is_better_than(&b));
        assert!(!b.is_better_than(&a));
        assert!(!a.is_better_than(&c));
        assert!(a.is_at_least_as_good_as(&c));
        assert!(a < b);
    }

    #[test]
    fn test_candidate_distance() {
        let a = Candidate::evaluate(vec![0.0, 0.0], &sphere).unwrap();
        let b = Candidate::evaluate(vec![3.0, 4.0], &sphere).unwrap();
        assert_eq!(a.distance(&b), 5.0);
        assert_eq!(b.distance(&a), 5.0);
    }

    #[test]
    fn test_candidate_into_position() {
        let c = Candidate::evaluate(vec![1.5, -2.5], &sphere).unwrap();
        assert_eq!(c.into_position(), vec![1.5, -2.5]);
    }
}
