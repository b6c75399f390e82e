//! Pollination operators
//!
//! Global pollination moves a flower relative to the current global best
//! with Lévy-distributed steps. Local pollination moves it by a random
//! fraction of the difference between two other flowers. Both clip every
//! coordinate into the bounds and evaluate the trial.

use serde::{Deserialize, Serialize};

use crate::error::{FpaError, FpaResult};
use crate::fitness::traits::Objective;
use crate::operators::levy::LevyFlight;
use crate::population::candidate::Candidate;
use crate::population::population::Population;
use crate::random::RandomSource;
use crate::space::bounds::MultiBounds;

/// Which operator produced a trial
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PollinationKind {
    /// Biotic, cross-pollination over long distances
    Global,
    /// Abiotic, self-pollination between neighbors
    Local,
}

/// Global pollination: Lévy steps relative to the global best
///
/// For each dimension `j`, with a fresh step `L`:
/// `x[j] = clip(p[j] + gamma · L · (p[j] - best[j]))`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlobalPollination {
    gamma: f64,
    levy: LevyFlight,
}

impl GlobalPollination {
    /// Create the operator with step factor `gamma` and Lévy exponent `lambda`
    pub fn new(gamma: f64, lambda: f64) -> FpaResult<Self> {
        if !(gamma.is_finite() && gamma > 0.0) {
            return Err(FpaError::Configuration(format!(
                "gamma must be finite and positive, got {}",
                gamma
            )));
        }
        Ok(Self {
            gamma,
            levy: LevyFlight::new(lambda)?,
        })
    }

    /// The step factor
    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    /// The step sampler
    pub fn levy(&self) -> &LevyFlight {
        &self.levy
    }

    /// Produce a trial for the flower at `index`
    ///
    /// # Panics
    /// Panics if `index` is out of bounds
    pub fn pollinate<O: Objective + ?Sized>(
        &self,
        population: &Population,
        global_best: &Candidate,
        index: usize,
        bounds: &MultiBounds,
        objective: &O,
        rng: &mut dyn RandomSource,
    ) -> FpaResult<Candidate> {
        let current = population[index].position();
        check_dimension(bounds, current)?;
        check_dimension(bounds, global_best.position())?;

        let mut x = Vec::with_capacity(current.len());
        for ((&p, &g), b) in current.iter().zip(global_best.position()).zip(bounds.iter()) {
            let step = self.levy.step(rng)?;
            x.push(b.clamp(p + self.gamma * step * (p - g)));
        }
        Candidate::evaluate(x, objective)
    }
}

/// Local pollination: uniform interpolation between two neighbors
///
/// For each dimension `j`, with a fresh `r ~ U[0, 1)`:
/// `x[j] = clip(p[j] + r · (p_nb1[j] - p_nb2[j]))`
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LocalPollination;

impl LocalPollination {
    /// Create the operator
    pub fn new() -> Self {
        Self
    }

    /// Produce a trial for the flower at `index` from neighbors `(nb1, nb2)`
    ///
    /// The neighbors must differ from each other; either may equal `index`.
    ///
    /// # Panics
    /// Panics if any index is out of bounds
    pub fn pollinate<O: Objective + ?Sized>(
        &self,
        population: &Population,
        index: usize,
        (nb1, nb2): (usize, usize),
        bounds: &MultiBounds,
        objective: &O,
        rng: &mut dyn RandomSource,
    ) -> FpaResult<Candidate> {
        debug_assert_ne!(nb1, nb2, "local pollination needs two distinct neighbors");
        let current = population[index].position();
        let first = population[nb1].position();
        let second = population[nb2].position();
        check_dimension(bounds, current)?;

        let mut x = Vec::with_capacity(current.len());
        for (j, b) in bounds.iter().enumerate() {
            let r = rng.uniform01()?;
            x.push(b.clamp(current[j] + r * (first[j] - second[j])));
        }
        Candidate::evaluate(x, objective)
    }
}

/// Draw two distinct neighbor indices from `[0, flower_count)`
///
/// Both are drawn once, then the first is re-drawn until it differs from the
/// second.
pub fn draw_neighbors(
    flower_count: usize,
    rng: &mut dyn RandomSource,
) -> FpaResult<(usize, usize)> {
    if flower_count < 2 {
        return Err(FpaError::Configuration(format!(
            "two distinct neighbors need at least 2 flowers, got {}",
            flower_count
        )));
    }
    let mut nb1 = rng.uniform_int(flower_count)?;
    let nb2 = rng.uniform_int(flower_count)?;
    while nb1 == nb2 {
        nb1 = rng.uniform_int(flower_count)?;
    }
    Ok((nb1, nb2))
}

fn check_dimension(bounds: &MultiBounds, position: &[f64]) -> FpaResult<()> {
    if position.len() != bounds.dimension() {
        return Err(FpaError::DimensionMismatch {
            expected: bounds.dimension(),
            actual: position.len(),
        });
    }
    Ok(())
}
