//! Generation observers
//!
//! Observers receive the global best after every completed generation. They
//! have no influence on the run.

use crate::population::candidate::Candidate;

/// Callback invoked once per completed generation
pub trait GenerationObserver {
    /// Called with the zero-based generation index and the global best
    fn on_generation(&mut self, generation: usize, best: &Candidate);
}

impl<F> GenerationObserver for F
where
    F: FnMut(usize, &Candidate),
{
    fn on_generation(&mut self, generation: usize, best: &Candidate) {
        self(generation, best)
    }
}

/// Observer that does nothing
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl GenerationObserver for NoopObserver {
    fn on_generation(&mut self, _generation: usize, _best: &Candidate) {}
}

/// Observer that records the best fitness of every generation
#[derive(Clone, Debug, Default)]
pub struct BestFitnessTrace {
    /// Best fitness per generation, in order
    pub history: Vec<f64>,
}

impl BestFitnessTrace {
    /// Create an empty trace
    pub fn new() -> Self {
        Self::default()
    }

    /// Check that the best fitness never got worse
    pub fn is_monotone(&self) -> bool {
        self.history.windows(2).all(|w| w[1] <= w[0])
    }
}

impl GenerationObserver for BestFitnessTrace {
    fn on_generation(&mut self, _generation: usize, best: &Candidate) {
        self.history.push(best.fitness());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(value: f64) -> Candidate {
        Candidate::evaluate(vec![value], &|x: &[f64]| x[0]).unwrap()
    }

    #[test]
    fn test_closure_observer() {
        let mut seen = Vec::new();
        {
            let mut observer = |g: usize, best: &Candidate| seen.push((g, best.fitness()));
            observer.on_generation(0, &candidate(3.0));
            observer.on_generation(1, &candidate(2.0));
        }
        assert_eq!(seen, vec![(0, 3.0), (1, 2.0)]);
    }

    #[test]
    fn test_best_fitness_trace() {
        let mut trace = BestFitnessTrace::new();
        for v in [3.0, 2.0, 2.0, 1.0] {
            trace.on_generation(0, &candidate(v));
        }
        assert_eq!(trace.history, vec![3.0, 2.0, 2.0, 1.0]);
        assert!(trace.is_monotone());

        trace.on_generation(4, &candidate(5.0));
        assert!(!trace.is_monotone());
    }
}
