//! Run configuration
//!
//! [`FpaConfig`] holds every parameter of a pollination run. It can be built
//! in code, through [`crate::algorithms::fpa::FpaBuilder`], or loaded from
//! JSON.

use serde::{Deserialize, Serialize};

use crate::error::{FpaError, FpaResult};
use crate::space::bounds::MultiBounds;

/// How the global best is refreshed after each flower update
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BestTracking {
    /// Compare only the flower that just changed against the global best
    #[default]
    Incremental,
    /// Rescan the whole population after every flower update
    FullRescan,
}

/// Configuration for the Flower Pollination Algorithm
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FpaConfig {
    /// Number of flowers in the population
    pub flower_count: usize,
    /// Search space
    pub bounds: MultiBounds,
    /// Number of generations
    pub iterations: usize,
    /// Step factor for global pollination
    pub gamma: f64,
    /// Lévy exponent, in (0, 2]
    pub lambda: f64,
    /// Probability of global over local pollination, in [0, 1]
    pub switch_probability: f64,
    /// Global best refresh strategy
    pub best_tracking: BestTracking,
}

impl Default for FpaConfig {
    fn default() -> Self {
        Self {
            flower_count: 175,
            bounds: MultiBounds::symmetric(5.0, 2),
            iterations: 300,
            gamma: 0.1,
            lambda: 1.5,
            switch_probability: 0.8,
            best_tracking: BestTracking::Incremental,
        }
    }
}

impl FpaConfig {
    /// Create a configuration with the default parameters over `bounds`
    pub fn new(bounds: MultiBounds) -> Self {
        Self {
            bounds,
            ..Default::default()
        }
    }

    /// Problem dimension
    pub fn dimension(&self) -> usize {
        self.bounds.dimension()
    }

    /// Check every parameter
    pub fn validate(&self) -> FpaResult<()> {
        if self.flower_count < 2 {
            return Err(FpaError::Configuration(format!(
                "flower_count must be at least 2, got {}",
                self.flower_count
            )));
        }
        self.bounds.validate()?;
        if !(self.gamma.is_finite() && self.gamma > 0.0) {
            return Err(FpaError::Configuration(format!(
                "gamma must be finite and positive, got {}",
                self.gamma
            )));
        }
        if !(self.lambda > 0.0 && self.lambda <= 2.0) {
            return Err(FpaError::Configuration(format!(
                "lambda must be in (0, 2], got {}",
                self.lambda
            )));
        }
        if !(0.0..=1.0).contains(&self.switch_probability) {
            return Err(FpaError::Configuration(format!(
                "switch_probability must be in [0, 1], got {}",
                self.switch_probability
            )));
        }
        Ok(())
    }

    /// Parse and validate a JSON configuration
    ///
    /// Missing fields take their default values.
    pub fn from_json_str(json: &str) -> FpaResult<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| FpaError::Configuration(format!("malformed configuration: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json_string(&self) -> FpaResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| FpaError::Configuration(format!("cannot serialize configuration: {}", e)))
    }
}
