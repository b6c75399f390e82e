//! Box bounds for the search space
//!
//! Every position produced by the optimizer is clipped into a
//! [`MultiBounds`], one [`Bounds`] interval per dimension.

use serde::{Deserialize, Serialize};

use crate::error::{FpaError, FpaResult};
use crate::random::RandomSource;

/// Clamp `value` to `[lower, upper]`
///
/// Requires `lower <= upper`.
#[inline]
pub fn clip(value: f64, lower: f64, upper: f64) -> f64 {
    value.min(upper).max(lower)
}

/// Bounds for a single dimension
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    /// Lower bound (inclusive)
    pub min: f64,
    /// Upper bound (inclusive)
    pub max: f64,
}

impl Bounds {
    /// Create new bounds
    ///
    /// # Panics
    /// Panics if min > max
    pub fn new(min: f64, max: f64) -> Self {
        assert!(
            min <= max,
            "Invalid bounds: min ({}) must be <= max ({})",
            min,
            max
        );
        Self { min, max }
    }

    /// Create bounds, rejecting inverted or non-finite limits
    pub fn try_new(min: f64, max: f64) -> FpaResult<Self> {
        let bounds = Self { min, max };
        bounds.validate()?;
        Ok(bounds)
    }

    /// Create symmetric bounds centered at 0
    pub fn symmetric(half_width: f64) -> Self {
        Self::new(-half_width, half_width)
    }

    /// Check that the limits are finite and ordered
    pub fn validate(&self) -> FpaResult<()> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(FpaError::Configuration(format!(
                "bounds must be finite, got [{}, {}]",
                self.min, self.max
            )));
        }
        if self.min > self.max {
            return Err(FpaError::Configuration(format!(
                "lower bound {} exceeds upper bound {}",
                self.min, self.max
            )));
        }
        Ok(())
    }

    /// Get the range (max - min)
    pub fn range(&self) -> f64 {
        self.max - self.min
    }

    /// Get the center point
    pub fn center(&self) -> f64 {
        (self.min + self.max) / 2.0
    }

    /// Check if a value is within bounds
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Clamp a value to be within bounds
    pub fn clamp(&self, value: f64) -> f64 {
        clip(value, self.min, self.max)
    }

    /// Draw a uniform value in [min, max]
    pub fn sample(&self, rng: &mut dyn RandomSource) -> FpaResult<f64> {
        Ok(self.clamp(rng.uniform_range(self.min, self.max)?))
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::symmetric(5.0)
    }
}

impl From<(f64, f64)> for Bounds {
    fn from((min, max): (f64, f64)) -> Self {
        Self::new(min, max)
    }
}

/// Multi-dimensional bounds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiBounds {
    /// Bounds for each dimension
    pub bounds: Vec<Bounds>,
}

impl MultiBounds {
    /// Create new multi-dimensional bounds
    pub fn new(bounds: Vec<Bounds>) -> Self {
        Self { bounds }
    }

    /// Create bounds from parallel lower/upper vectors
    pub fn try_from_limits(lower: &[f64], upper: &[f64]) -> FpaResult<Self> {
        if lower.len() != upper.len() {
            return Err(FpaError::DimensionMismatch {
                expected: lower.len(),
                actual: upper.len(),
            });
        }
        let bounds = Self {
            bounds: lower
                .iter()
                .zip(upper)
                .map(|(&min, &max)| Bounds { min, max })
                .collect(),
        };
        bounds.validate()?;
        Ok(bounds)
    }

    /// Create uniform bounds for all dimensions
    pub fn uniform(bound: Bounds, dimension: usize) -> Self {
        Self {
            bounds: vec![bound; dimension],
        }
    }

    /// Create symmetric bounds for all dimensions
    pub fn symmetric(half_width: f64, dimension: usize) -> Self {
        Self::uniform(Bounds::symmetric(half_width), dimension)
    }

    /// Check every dimension, and that there is at least one
    pub fn validate(&self) -> FpaResult<()> {
        if self.bounds.is_empty() {
            return Err(FpaError::Configuration(
                "search space must have at least one dimension".to_string(),
            ));
        }
        for (j, b) in self.bounds.iter().enumerate() {
            b.validate().map_err(|e| match e {
                FpaError::Configuration(msg) => {
                    FpaError::Configuration(format!("dimension {}: {}", j, msg))
                }
                other => other,
            })?;
        }
        Ok(())
    }

    /// Get number of dimensions
    pub fn dimension(&self) -> usize {
        self.bounds.len()
    }

    /// Get bounds for a specific dimension
    pub fn get(&self, index: usize) -> Option<&Bounds> {
        self.bounds.get(index)
    }

    /// Iterate over the per-dimension bounds
    pub fn iter(&self) -> impl Iterator<Item = &Bounds> {
        self.bounds.iter()
    }

    /// Lower limits, one per dimension
    pub fn lower(&self) -> Vec<f64> {
        self.bounds.iter().map(|b| b.min).collect()
    }

    /// Upper limits, one per dimension
    pub fn upper(&self) -> Vec<f64> {
        self.bounds.iter().map(|b| b.max).collect()
    }

    /// Clamp a vector to be within bounds
    pub fn clamp_vec(&self, values: &mut [f64]) {
        for (value, b) in values.iter_mut().zip(&self.bounds) {
            *value = b.clamp(*value);
        }
    }

    /// Check if all values are within bounds
    pub fn contains_vec(&self, values: &[f64]) -> bool {
        values.len() == self.bounds.len()
            && values
                .iter()
                .zip(&self.bounds)
                .all(|(&v, b)| b.contains(v))
    }

    /// Draw a uniform point, dimension by dimension
    pub fn sample(&self, rng: &mut dyn RandomSource) -> FpaResult<Vec<f64>> {
        self.bounds.iter().map(|b| b.sample(rng)).collect()
    }
}

impl FromIterator<Bounds> for MultiBounds {
    fn from_iter<I: IntoIterator<Item = Bounds>>(iter: I) -> Self {
        Self {
            bounds: iter.into_iter().collect(),
        }
    }
}

impl FromIterator<(f64, f64)> for MultiBounds {
    fn from_iter<I: IntoIterator<Item = (f64, f64)>>(iter: I) -> Self {
        Self {
            bounds: iter.into_iter().map(Bounds::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::RngSource;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_clip_table() {
        let cases = [
            (-7.0, -5.0),
            (3.0, 3.0),
            (9.0, 5.0),
            (-5.0, -5.0),
            (5.0, 5.0),
            (0.0, 0.0),
        ];
        for (value, expected) in cases {
            assert_eq!(clip(value, -5.0, 5.0), expected, "clip({})", value);
        }
    }

    #[test]
    fn test_clip_degenerate_interval() {
        assert_eq!(clip(-1.0, 2.0, 2.0), 2.0);
        assert_eq!(clip(3.0, 2.0, 2.0), 2.0);
    }

    #[test]
    #[should_panic(expected = "Invalid bounds")]
    fn test_bounds_invalid() {
        Bounds::new(5.0, -5.0);
    }

    #[test]
    fn test_bounds_try_new() {
        assert!(Bounds::try_new(-1.0, 1.0).is_ok());
        assert!(Bounds::try_new(1.0, 1.0).is_ok());
        assert!(matches!(
            Bounds::try_new(1.0, -1.0),
            Err(FpaError::Configuration(_))
        ));
        assert!(Bounds::try_new(f64::NAN, 1.0).is_err());
        assert!(Bounds::try_new(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_bounds_range_center() {
        let b = Bounds::new(-2.0, 6.0);
        assert_eq!(b.range(), 8.0);
        assert_eq!(b.center(), 2.0);
    }

    #[test]
    fn test_bounds_contains() {
        let b = Bounds::new(-5.0, 5.0);
        assert!(b.contains(-5.0));
        assert!(b.contains(5.0));
        assert!(!b.contains(-5.1));
        assert!(!b.contains(5.1));
    }

    #[test]
    fn test_bounds_sample_within() {
        let mut rng = RngSource::new(StdRng::seed_from_u64(3));
        let b = Bounds::new(-1.0, 2.0);
        for _ in 0..1_000 {
            let v = b.sample(&mut rng).unwrap();
            assert!(b.contains(v));
        }
    }

    #[test]
    fn test_multi_bounds_from_limits() {
        let mb = MultiBounds::try_from_limits(&[-5.0, 0.0], &[5.0, 1.0]).unwrap();
        assert_eq!(mb.dimension(), 2);
        assert_eq!(mb.lower(), vec![-5.0, 0.0]);
        assert_eq!(mb.upper(), vec![5.0, 1.0]);
    }

    #[test]
    fn test_multi_bounds_from_limits_errors() {
        assert!(matches!(
            MultiBounds::try_from_limits(&[0.0], &[1.0, 2.0]),
            Err(FpaError::DimensionMismatch {
                expected: 1,
                actual: 2
            })
        ));
        assert!(matches!(
            MultiBounds::try_from_limits(&[0.0, 3.0], &[1.0, 2.0]),
            Err(FpaError::Configuration(_))
        ));
        assert!(matches!(
            MultiBounds::try_from_limits(&[], &[]),
            Err(FpaError::Configuration(_))
        ));
    }

    #[test]
    fn test_multi_bounds_clamp_vec() {
        let mb = MultiBounds::symmetric(5.0, 3);
        let mut values = vec![-10.0, 0.0, 10.0];
        mb.clamp_vec(&mut values);
        assert_eq!(values, vec![-5.0, 0.0, 5.0]);
    }

    #[test]
    fn test_multi_bounds_contains_vec() {
        let mb = MultiBounds::symmetric(5.0, 3);
        assert!(mb.contains_vec(&[0.0, 0.0, 0.0]));
        assert!(mb.contains_vec(&[-5.0, 5.0, 0.0]));
        assert!(!mb.contains_vec(&[-6.0, 0.0, 0.0]));
        assert!(!mb.contains_vec(&[0.0, 0.0]));
    }

    #[test]
    fn test_multi_bounds_sample() {
        let mut rng = RngSource::new(StdRng::seed_from_u64(11));
        let mb: MultiBounds = vec![(0.0, 1.0), (-10.0, 10.0)].into_iter().collect();
        let point = mb.sample(&mut rng).unwrap();
        assert_eq!(point.len(), 2);
        assert!(mb.contains_vec(&point));
    }

    #[test]
    fn test_multi_bounds_sample_wide_limits() {
        let mut rng = RngSource::new(StdRng::seed_from_u64(5));
        let mb = MultiBounds::try_from_limits(&[-1e308; 2], &[1e308; 2]).unwrap();
        for _ in 0..1_000 {
            let point = mb.sample(&mut rng).unwrap();
            assert!(mb.contains_vec(&point), "{:?} left the bounds", point);
        }
    }

    #[test]
    fn test_multi_bounds_serde() {
        let mb = MultiBounds::symmetric(5.0, 2);
        let json = serde_json::to_string(&mb).unwrap();
        let back: MultiBounds = serde_json::from_str(&json).unwrap();
        assert_eq!(mb, back);
    }
}
