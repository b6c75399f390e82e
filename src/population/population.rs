//! Population type
//!
//! This module provides the fixed-size, in-place population of flowers.

use crate::error::FpaResult;
use crate::fitness::traits::Objective;
use crate::population::candidate::Candidate;
use crate::random::RandomSource;
use crate::space::bounds::MultiBounds;

/// An ordered population of candidates
///
/// Created once per run and only ever overwritten in place; its length never
/// changes.
#[derive(Clone, Debug, PartialEq)]
pub struct Population {
    flowers: Vec<Candidate>,
}

impl Population {
    /// Create a population from existing candidates
    pub fn from_candidates(flowers: Vec<Candidate>) -> Self {
        Self { flowers }
    }

    /// Create a random population
    ///
    /// Each coordinate is drawn uniformly from `[min, max)` of its dimension,
    /// then the candidate is evaluated.
    pub fn random<O: Objective + ?Sized>(
        size: usize,
        bounds: &MultiBounds,
        objective: &O,
        rng: &mut dyn RandomSource,
    ) -> FpaResult<Self> {
        let flowers = (0..size)
            .map(|_| {
                let position = bounds.sample(rng)?;
                Candidate::evaluate(position, objective)
            })
            .collect::<FpaResult<Vec<_>>>()?;
        Ok(Self { flowers })
    }

    /// Get the population size
    pub fn len(&self) -> usize {
        self.flowers.len()
    }

    /// Check if the population is empty
    pub fn is_empty(&self) -> bool {
        self.flowers.is_empty()
    }

    /// Get a candidate by index
    pub fn get(&self, index: usize) -> Option<&Candidate> {
        self.flowers.get(index)
    }

    /// Get an iterator over the candidates
    pub fn iter(&self) -> impl Iterator<Item = &Candidate> {
        self.flowers.iter()
    }

    /// Get the underlying candidates
    pub fn candidates(&self) -> &[Candidate] {
        &self.flowers
    }

    /// Take the candidates out of this population
    pub fn into_candidates(self) -> Vec<Candidate> {
        self.flowers
    }

    /// Index of the minimum-fitness candidate, first occurrence on ties
    pub fn best_index(&self) -> Option<usize> {
        let mut best: Option<usize> = None;
        for (i, candidate) in self.flowers.iter().enumerate() {
            match best {
                Some(b) if !candidate.is_better_than(&self.flowers[b]) => {}
                _ => best = Some(i),
            }
        }
        best
    }

    /// Get the best (minimum-fitness) candidate
    pub fn best(&self) -> Option<&Candidate> {
        self.best_index().map(|i| &self.flowers[i])
    }

    /// Get the worst (maximum-fitness) candidate
    pub fn worst(&self) -> Option<&Candidate> {
        self.flowers.iter().max_by(|a, b| {
            a.fitness()
                .partial_cmp(&b.fitness())
                .unwrap_or(std::cmp::Ordering::Equal)
        })
    }

    /// Greedy acceptance
    ///
    /// Replaces the candidate at `index` with `trial` if the trial is at least
    /// as good. Returns whether the replacement happened.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds
    pub fn accept(&mut self, index: usize, trial: Candidate) -> bool {
        let slot = &mut self.flowers[index];
        if trial.is_at_least_as_good_as(slot) {
            *slot = trial;
            true
        } else {
            false
        }
    }

    /// Check that every candidate lies inside `bounds`
    pub fn all_within(&self, bounds: &MultiBounds) -> bool {
        self.flowers
            .iter()
            .all(|c| bounds.contains_vec(c.position()))
    }

    /// Compute mean fitness
    pub fn mean_fitness(&self) -> Option<f64> {
        if self.flowers.is_empty() {
            return None;
        }
        Some(self.flowers.iter().map(Candidate::fitness).sum::<f64>() / self.len() as f64)
    }

    /// Compute fitness standard deviation
    pub fn fitness_std(&self) -> Option<f64> {
        if self.flowers.len() < 2 {
            return None;
        }
        let mean = self.mean_fitness()?;
        let variance = self
            .flowers
            .iter()
            .map(|c| (c.fitness() - mean).powi(2))
            .sum::<f64>()
            / (self.len() - 1) as f64;
        Some(variance.sqrt())
    }

    /// Compute population diversity (average pairwise distance)
    pub fn diversity(&self) -> f64 {
        if self.len() < 2 {
            return 0.0;
        }

        let mut total_distance = 0.0;
        let mut count = 0;

        for i in 0..self.len() {
            for j in (i + 1)..self.len() {
                total_distance += self.flowers[i].distance(&self.flowers[j]);
                count += 1;
            }
        }

        total_distance / count as f64
    }
}

impl std::ops::Index<usize> for Population {
    type Output = Candidate;

    fn index(&self, index: usize) -> &Self::Output {
        &self.flowers[index]
    }
}

impl<'a> IntoIterator for &'a Population {
    type Item = &'a Candidate;
    type IntoIter = std::slice::Iter<'a, Candidate>;

    fn into_iter(self) -> Self::IntoIter {
        self.flowers.iter()
    }
}
