//! Flower Pollination Algorithm
//!
//! A population of flowers is refined for a fixed number of generations.
//! Within a generation every flower, in index order, produces one trial by
//! either global pollination (Lévy steps relative to the global best) or
//! local pollination (interpolation between two other flowers). A trial
//! replaces its flower when it is at least as good. Updates are applied in
//! place, so later flowers in the same generation already see them.

use std::time::Instant;

use rand::rngs::{OsRng, StdRng};
use rand::SeedableRng;
use tracing::{debug, info, instrument, trace};

use crate::algorithms::observer::{GenerationObserver, NoopObserver};
use crate::config::{BestTracking, FpaConfig};
use crate::diagnostics::{GenerationStats, MoveCounts, RunStats};
use crate::error::{FpaError, FpaResult};
use crate::fitness::traits::Objective;
use crate::operators::pollination::{
    draw_neighbors, GlobalPollination, LocalPollination, PollinationKind,
};
use crate::population::candidate::Candidate;
use crate::population::population::Population;
use crate::random::{RandomSource, RandomStreams, RngSource};
use crate::space::bounds::MultiBounds;
use crate::termination::{CancellationToken, Termination};

/// Result of a pollination run
#[derive(Clone, Debug)]
pub struct FpaOutcome {
    /// Best candidate seen over the whole run
    pub best: Candidate,
    /// Final population
    pub population: Population,
    /// Completed generations
    pub generations: usize,
    /// Total objective evaluations
    pub evaluations: usize,
    /// Per-generation statistics, starting with the initial population
    pub stats: RunStats,
    /// Why the run stopped
    pub termination: Termination,
}

/// Builder for [`FlowerPollination`]
///
/// The objective is tracked in the type, so `build` is only available once
/// one has been supplied.
#[derive(Clone, Debug)]
pub struct FpaBuilder<O> {
    config: FpaConfig,
    objective: O,
}

impl FpaBuilder<()> {
    /// Create a new builder with default configuration
    pub fn new() -> Self {
        Self {
            config: FpaConfig::default(),
            objective: (),
        }
    }
}

impl Default for FpaBuilder<()> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O> FpaBuilder<O> {
    /// Replace the whole configuration
    pub fn config(mut self, config: FpaConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the number of flowers
    pub fn flower_count(mut self, flower_count: usize) -> Self {
        self.config.flower_count = flower_count;
        self
    }

    /// Set the search space
    pub fn bounds(mut self, bounds: MultiBounds) -> Self {
        self.config.bounds = bounds;
        self
    }

    /// Set the number of generations
    pub fn iterations(mut self, iterations: usize) -> Self {
        self.config.iterations = iterations;
        self
    }

    /// Set the global pollination step factor
    pub fn gamma(mut self, gamma: f64) -> Self {
        self.config.gamma = gamma;
        self
    }

    /// Set the Lévy exponent
    pub fn lambda(mut self, lambda: f64) -> Self {
        self.config.lambda = lambda;
        self
    }

    /// Set the probability of choosing global pollination
    pub fn switch_probability(mut self, p: f64) -> Self {
        self.config.switch_probability = p;
        self
    }

    /// Set the global best refresh strategy
    pub fn best_tracking(mut self, tracking: BestTracking) -> Self {
        self.config.best_tracking = tracking;
        self
    }

    /// Set the objective function
    pub fn objective<NewO>(self, objective: NewO) -> FpaBuilder<NewO> {
        FpaBuilder {
            config: self.config,
            objective,
        }
    }
}

impl<O: Objective> FpaBuilder<O> {
    /// Validate the configuration and build the optimizer
    pub fn build(self) -> FpaResult<FlowerPollination<O>> {
        FlowerPollination::new(self.config, self.objective)
    }
}

/// The Flower Pollination Algorithm over a box-bounded search space
#[derive(Clone, Debug)]
pub struct FlowerPollination<O> {
    config: FpaConfig,
    objective: O,
    global: GlobalPollination,
    local: LocalPollination,
}

impl FlowerPollination<()> {
    /// Create a builder
    pub fn builder() -> FpaBuilder<()> {
        FpaBuilder::new()
    }
}

impl<O: Objective> FlowerPollination<O> {
    /// Create an optimizer from a configuration
    ///
    /// Fails with [`FpaError::Configuration`] if any parameter is invalid.
    pub fn new(config: FpaConfig, objective: O) -> FpaResult<Self> {
        config.validate()?;
        let global = GlobalPollination::new(config.gamma, config.lambda)?;
        Ok(Self {
            config,
            objective,
            global,
            local: LocalPollination::new(),
        })
    }

    /// The validated configuration
    pub fn config(&self) -> &FpaConfig {
        &self.config
    }

    /// The objective being minimized
    pub fn objective(&self) -> &O {
        &self.objective
    }

    /// Run to completion
    pub fn run(&self, streams: &mut RandomStreams<'_>) -> FpaResult<FpaOutcome> {
        self.execute(streams, &mut NoopObserver, None)
    }

    /// Run to completion, reporting every generation to `observer`
    pub fn run_with_observer(
        &self,
        streams: &mut RandomStreams<'_>,
        observer: &mut dyn GenerationObserver,
    ) -> FpaResult<FpaOutcome> {
        self.execute(streams, observer, None)
    }

    /// Run until the budget is spent or `token` is cancelled
    ///
    /// The token is checked before each generation, so a generation that has
    /// started always completes.
    pub fn run_with_cancellation(
        &self,
        streams: &mut RandomStreams<'_>,
        observer: &mut dyn GenerationObserver,
        token: &CancellationToken,
    ) -> FpaResult<FpaOutcome> {
        self.execute(streams, observer, Some(token))
    }

    /// Run with freshly seeded streams
    ///
    /// The standard stream is a [`StdRng`] seeded from the OS, the quality
    /// stream reads the OS generator directly.
    pub fn run_with_entropy(&self) -> FpaResult<FpaOutcome> {
        let seeded = StdRng::from_rng(OsRng).map_err(|e| FpaError::RandomSource(e.to_string()))?;
        let mut standard = RngSource::new(seeded);
        let mut quality = RngSource::new(OsRng);
        let mut streams = RandomStreams::split(&mut standard, &mut quality);
        self.run(&mut streams)
    }

    #[instrument(
        level = "info",
        name = "fpa_run",
        skip_all,
        fields(
            flowers = self.config.flower_count,
            dimension = self.config.dimension(),
            iterations = self.config.iterations
        )
    )]
    fn execute(
        &self,
        streams: &mut RandomStreams<'_>,
        observer: &mut dyn GenerationObserver,
        cancel: Option<&CancellationToken>,
    ) -> FpaResult<FpaOutcome> {
        let start_time = Instant::now();
        let config = &self.config;

        let mut population = Population::random(
            config.flower_count,
            &config.bounds,
            &self.objective,
            streams.standard(),
        )?;
        let mut evaluations = population.len();
        let mut best = population
            .best()
            .cloned()
            .ok_or_else(|| FpaError::Configuration("population is empty".to_string()))?;

        let mut stats = RunStats::new();
        stats.record(GenerationStats::from_population(
            &population,
            best.fitness(),
            0,
            evaluations,
        ));
        info!(
            best_fitness = best.fitness(),
            split_streams = streams.is_split(),
            "population initialized"
        );

        let mut termination = Termination::MaxGenerations;
        let mut generations = 0usize;

        for generation in 0..config.iterations {
            if cancel.map_or(false, CancellationToken::is_cancelled) {
                termination = Termination::Cancelled;
                break;
            }

            let gen_start = Instant::now();
            let mut moves = MoveCounts::default();

            for index in 0..population.len() {
                let neighbors = draw_neighbors(population.len(), streams.standard())?;

                let kind = if streams.quality().uniform01()? < config.switch_probability {
                    PollinationKind::Global
                } else {
                    PollinationKind::Local
                };
                moves.record(kind);

                let trial = match kind {
                    PollinationKind::Global => self.global.pollinate(
                        &population,
                        &best,
                        index,
                        &config.bounds,
                        &self.objective,
                        streams.quality(),
                    )?,
                    PollinationKind::Local => self.local.pollinate(
                        &population,
                        index,
                        neighbors,
                        &config.bounds,
                        &self.objective,
                        streams.quality(),
                    )?,
                };
                evaluations += 1;

                if population.accept(index, trial) {
                    moves.accepted += 1;
                    trace!(
                        generation,
                        flower = index,
                        kind = ?kind,
                        fitness = population[index].fitness(),
                        "trial accepted"
                    );
                }
                self.refresh_best(&population, index, &mut best);
            }

            generations = generation + 1;
            stats.record(
                GenerationStats::from_population(
                    &population,
                    best.fitness(),
                    generations,
                    evaluations,
                )
                .with_moves(moves)
                .with_elapsed(gen_start.elapsed()),
            );
            debug!(
                generation,
                best_fitness = best.fitness(),
                accepted = moves.accepted,
                "generation complete"
            );
            observer.on_generation(generation, &best);
        }

        stats.set_termination_reason(termination.reason());
        stats.set_runtime(start_time.elapsed());
        info!(
            best_fitness = best.fitness(),
            generations,
            evaluations,
            reason = termination.reason(),
            "pollination finished"
        );

        Ok(FpaOutcome {
            best,
            population,
            generations,
            evaluations,
            stats,
            termination,
        })
    }

    /// Bring `best` up to date after the flower at `index` was processed
    ///
    /// `best` is always the population minimum, so comparing the changed
    /// flower alone gives the same result as a full rescan.
    fn refresh_best(&self, population: &Population, index: usize, best: &mut Candidate) {
        let candidate = match self.config.best_tracking {
            BestTracking::Incremental => &population[index],
            BestTracking::FullRescan => match population.best() {
                Some(candidate) => candidate,
                None => return,
            },
        };
        if candidate.is_better_than(best) {
            *best = candidate.clone();
        }
    }
}

/// Minimize `objective` over `bounds` and return the best candidate found
///
/// Parameters are validated before any randomness is drawn. Randomness
/// comes from the operating system, see
/// [`FlowerPollination::run_with_entropy`].
///
/// ```rust,ignore
/// use fpa_evo::prelude::*;
///
/// let best = optimize(
///     175,
///     MultiBounds::symmetric(5.0, 2),
///     300,
///     0.1,
///     1.5,
///     0.8,
///     SixHumpCamelBack::new(),
/// )?;
/// assert!(best.fitness() < -1.0);
/// ```
pub fn optimize<O: Objective>(
    flower_count: usize,
    bounds: MultiBounds,
    iterations: usize,
    gamma: f64,
    lambda: f64,
    switch_probability: f64,
    objective: O,
) -> FpaResult<Candidate> {
    let optimizer = FlowerPollination::builder()
        .flower_count(flower_count)
        .bounds(bounds)
        .iterations(iterations)
        .gamma(gamma)
        .lambda(lambda)
        .switch_probability(switch_probability)
        .objective(objective)
        .build()?;
    Ok(optimizer.run_with_entropy()?.best)
}
