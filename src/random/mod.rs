//! Random sources
//!
//! The optimizer draws from two logical streams: a *standard* stream used
//! for population initialization and neighbor selection, and a
//! *high-quality* stream used for Lévy steps, branch selection and local
//! interpolation weights. [`RandomStreams`] either routes both through one
//! [`RandomSource`] or keeps them separate.

use rand::RngCore;

use crate::error::{FpaError, FpaResult};

/// 2^-53, the spacing of the 53-bit uniform grid on [0, 1)
const UNIT_SCALE: f64 = 1.0 / (1u64 << 53) as f64;

/// A fallible source of uniform draws
pub trait RandomSource {
    /// Uniform draw in [0, 1)
    fn uniform01(&mut self) -> FpaResult<f64>;

    /// Uniform index in [0, n)
    ///
    /// Indices are only drawn over the population, so an empty range means
    /// the run was configured without flowers.
    fn uniform_int(&mut self, n: usize) -> FpaResult<usize> {
        if n == 0 {
            return Err(FpaError::Configuration(
                "uniform_int requires a non-empty range".to_string(),
            ));
        }
        let index = (self.uniform01()? * n as f64) as usize;
        Ok(index.min(n - 1))
    }

    /// Uniform draw between `low` and `high`
    ///
    /// Interpolates without forming `high - low`, which overflows for wide
    /// finite limits.
    fn uniform_range(&mut self, low: f64, high: f64) -> FpaResult<f64> {
        let u = self.uniform01()?;
        Ok(low * (1.0 - u) + high * u)
    }
}

impl<S: RandomSource + ?Sized> RandomSource for &mut S {
    fn uniform01(&mut self) -> FpaResult<f64> {
        (**self).uniform01()
    }

    fn uniform_int(&mut self, n: usize) -> FpaResult<usize> {
        (**self).uniform_int(n)
    }
}

/// Adapts any [`RngCore`] into a [`RandomSource`]
///
/// Draws go through `try_fill_bytes`, so OS-backed generators such as
/// [`rand::rngs::OsRng`] surface their failures as
/// [`FpaError::RandomSource`] instead of panicking.
#[derive(Clone, Debug)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: RngCore> RngSource<R> {
    /// Wrap a generator
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Get the wrapped generator back
    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl<R: RngCore> RandomSource for RngSource<R> {
    fn uniform01(&mut self) -> FpaResult<f64> {
        let mut bytes = [0u8; 8];
        self.rng
            .try_fill_bytes(&mut bytes)
            .map_err(|e| FpaError::RandomSource(e.to_string()))?;
        Ok((u64::from_le_bytes(bytes) >> 11) as f64 * UNIT_SCALE)
    }
}

/// The pair of logical streams consumed by a run
pub struct RandomStreams<'a> {
    standard: &'a mut dyn RandomSource,
    quality: Option<&'a mut dyn RandomSource>,
}

impl<'a> RandomStreams<'a> {
    /// Serve both streams from one source
    pub fn unified(source: &'a mut dyn RandomSource) -> Self {
        Self {
            standard: source,
            quality: None,
        }
    }

    /// Serve the standard and high-quality streams from separate sources
    pub fn split(standard: &'a mut dyn RandomSource, quality: &'a mut dyn RandomSource) -> Self {
        Self {
            standard,
            quality: Some(quality),
        }
    }

    /// Whether the two streams are backed by separate sources
    pub fn is_split(&self) -> bool {
        self.quality.is_some()
    }

    /// Stream for initialization and neighbor selection
    pub fn standard(&mut self) -> &mut dyn RandomSource {
        &mut *self.standard
    }

    /// Stream for Lévy steps, branch selection and interpolation weights
    pub fn quality(&mut self) -> &mut dyn RandomSource {
        match self.quality.as_deref_mut() {
            Some(quality) => quality,
            None => &mut *self.standard,
        }
    }
}
