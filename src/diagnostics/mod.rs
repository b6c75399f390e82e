//! Diagnostics and statistics
//!
//! This module provides statistics collection for pollination runs. All
//! fitness values are minimized, so "best" means lowest.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::operators::pollination::PollinationKind;
use crate::population::population::Population;

/// Operator usage within one generation
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveCounts {
    /// Trials produced by global pollination
    pub global: usize,
    /// Trials produced by local pollination
    pub local: usize,
    /// Trials that replaced their flower
    pub accepted: usize,
}

impl MoveCounts {
    /// Count one trial produced by `kind`
    pub fn record(&mut self, kind: PollinationKind) {
        match kind {
            PollinationKind::Global => self.global += 1,
            PollinationKind::Local => self.local += 1,
        }
    }

    /// Total trials
    pub fn total(&self) -> usize {
        self.global + self.local
    }

    /// Fraction of trials that were accepted
    pub fn acceptance_rate(&self) -> f64 {
        if self.total() == 0 {
            0.0
        } else {
            self.accepted as f64 / self.total() as f64
        }
    }
}

/// Statistics for a single generation
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GenerationStats {
    /// Generation number (0 is the initial population)
    pub generation: usize,
    /// Total objective evaluations so far
    pub evaluations: usize,
    /// Global best fitness after this generation
    pub best_fitness: f64,
    /// Worst fitness in the population
    pub worst_fitness: f64,
    /// Mean fitness
    pub mean_fitness: f64,
    /// Population diversity
    pub diversity: f64,
    /// Operator usage
    pub moves: MoveCounts,
    /// Wall-clock time of this generation (ms)
    pub elapsed_ms: f64,
}

impl GenerationStats {
    /// Compute statistics from a population
    pub fn from_population(
        population: &Population,
        best_fitness: f64,
        generation: usize,
        evaluations: usize,
    ) -> Self {
        Self {
            generation,
            evaluations,
            best_fitness,
            worst_fitness: population
                .worst()
                .map(|c| c.fitness())
                .unwrap_or(f64::NEG_INFINITY),
            mean_fitness: population.mean_fitness().unwrap_or(0.0),
            diversity: population.diversity(),
            moves: MoveCounts::default(),
            elapsed_ms: 0.0,
        }
    }

    /// Set operator usage
    pub fn with_moves(mut self, moves: MoveCounts) -> Self {
        self.moves = moves;
        self
    }

    /// Set elapsed time
    pub fn with_elapsed(mut self, duration: Duration) -> Self {
        self.elapsed_ms = duration.as_secs_f64() * 1000.0;
        self
    }
}

/// Statistics collector for an entire run
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RunStats {
    /// Statistics per generation
    pub generations: Vec<GenerationStats>,
    /// Total runtime in milliseconds
    pub total_runtime_ms: f64,
    /// Reason for termination
    pub termination_reason: Option<String>,
}

impl RunStats {
    /// Create a new stats collector
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a generation's statistics
    pub fn record(&mut self, stats: GenerationStats) {
        self.generations.push(stats);
    }

    /// Get the number of generations recorded, including the initial one
    pub fn num_generations(&self) -> usize {
        self.generations.len()
    }

    /// Get the final best fitness
    pub fn final_best_fitness(&self) -> Option<f64> {
        self.generations.last().map(|g| g.best_fitness)
    }

    /// Get the history of best fitness values
    pub fn best_fitness_history(&self) -> Vec<f64> {
        self.generations.iter().map(|g| g.best_fitness).collect()
    }

    /// Get the history of mean fitness values
    pub fn mean_fitness_history(&self) -> Vec<f64> {
        self.generations.iter().map(|g| g.mean_fitness).collect()
    }

    /// Get the history of diversity values
    pub fn diversity_history(&self) -> Vec<f64> {
        self.generations.iter().map(|g| g.diversity).collect()
    }

    /// Operator usage summed over all generations
    pub fn total_moves(&self) -> MoveCounts {
        self.generations
            .iter()
            .fold(MoveCounts::default(), |acc, g| MoveCounts {
                global: acc.global + g.moves.global,
                local: acc.local + g.moves.local,
                accepted: acc.accepted + g.moves.accepted,
            })
    }

    /// Set the termination reason
    pub fn set_termination_reason(&mut self, reason: &str) {
        self.termination_reason = Some(reason.to_string());
    }

    /// Set the total runtime
    pub fn set_runtime(&mut self, duration: Duration) {
        self.total_runtime_ms = duration.as_secs_f64() * 1000.0;
    }

    /// Get a summary of the run
    pub fn summary(&self) -> String {
        let moves = self.total_moves();
        format!(
            "Pollination Summary:\n\
             - Generations: {}\n\
             - Final best: {:.6}\n\
             - Global moves: {}\n\
             - Local moves: {}\n\
             - Acceptance rate: {:.1}%\n\
             - Runtime: {:.2}ms\n\
             - Termination: {}",
            self.num_generations().saturating_sub(1),
            self.final_best_fitness().unwrap_or(f64::INFINITY),
            moves.global,
            moves.local,
            moves.acceptance_rate() * 100.0,
            self.total_runtime_ms,
            self.termination_reason.as_deref().unwrap_or("unknown")
        )
    }
}

pub mod prelude {
    pub use super::{GenerationStats, MoveCounts, RunStats};
}
