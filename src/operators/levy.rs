//! Lévy flight step sampler
//!
//! Heavy-tailed step lengths via Mantegna's algorithm:
//!
//! ```text
//! sigma = ( Γ(1+β)·sin(πβ/2) / (Γ((1+β)/2)·β·2^((β-1)/2)) )^(1/β)
//! step  = 0.01 · r1 · sigma / |r2|^(1/β)
//! ```
//!
//! Reference: Mantegna, R. N. (1994). Fast, accurate algorithm for numerical
//! simulation of Lévy stable stochastic processes. Physical Review E, 49(5).

use std::f64::consts::PI;

use rand::Rng;
use rand_distr::Distribution;

use crate::error::{FpaError, FpaResult};
use crate::random::RandomSource;

/// Scale applied to every step
pub const STEP_SCALE: f64 = 0.01;

/// Lévy step sampler with fixed exponent β
///
/// Steps are non-negative and finite but unbounded: most are small and a few
/// are very large.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LevyFlight {
    beta: f64,
    sigma: f64,
}

impl LevyFlight {
    /// Create a sampler, requiring `0 < beta <= 2`
    pub fn new(beta: f64) -> FpaResult<Self> {
        if !(beta > 0.0 && beta <= 2.0) {
            return Err(FpaError::Configuration(format!(
                "Lévy exponent must be in (0, 2], got {}",
                beta
            )));
        }
        Ok(Self {
            beta,
            sigma: mantegna_sigma(beta),
        })
    }

    /// The exponent β
    pub fn beta(&self) -> f64 {
        self.beta
    }

    /// The precomputed Mantegna σ for this exponent
    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    /// Step for a given pair of uniforms, `r2` in (0, 1]
    pub fn step_from(&self, r1: f64, r2: f64) -> f64 {
        STEP_SCALE * r1 * self.sigma / r2.abs().powf(1.0 / self.beta)
    }

    /// Draw one step from `rng`
    ///
    /// `r2` is taken from (0, 1] so the step never divides by zero.
    pub fn step(&self, rng: &mut dyn RandomSource) -> FpaResult<f64> {
        let r1 = rng.uniform01()?;
        let r2 = 1.0 - rng.uniform01()?;
        Ok(self.step_from(r1, r2))
    }
}

impl Distribution<f64> for LevyFlight {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let r1: f64 = rng.gen();
        let r2 = 1.0 - rng.gen::<f64>();
        self.step_from(r1, r2)
    }
}

/// Mantegna's σ for exponent `beta`
pub fn mantegna_sigma(beta: f64) -> f64 {
    let numerator = libm::tgamma(1.0 + beta) * (PI * beta / 2.0).sin();
    let denominator = libm::tgamma((1.0 + beta) / 2.0) * beta * 2f64.powf((beta - 1.0) / 2.0);
    (numerator / denominator).powf(1.0 / beta)
}
