//! Benchmark objective functions
//!
//! This module provides standard benchmark functions for testing the optimizer.
//! All of them are minimized.

use std::f64::consts::PI;

use crate::error::ObjectiveError;
use crate::fitness::traits::Objective;
use crate::space::bounds::MultiBounds;

/// Trait for benchmark functions
pub trait BenchmarkFunction {
    /// Name of the benchmark function
    fn name(&self) -> &'static str;

    /// Dimensionality of the problem
    fn dimension(&self) -> usize;

    /// Conventional search space
    fn bounds(&self) -> MultiBounds;

    /// Optimal (minimum) fitness value
    fn optimal_fitness(&self) -> f64;

    /// Optimal solution (if known)
    fn optimal_solution(&self) -> Option<Vec<f64>>;

    /// Evaluate the function
    fn evaluate_raw(&self, x: &[f64]) -> f64;
}

macro_rules! impl_objective_for_benchmark {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Objective for $ty {
                fn evaluate(&self, position: &[f64]) -> Result<f64, ObjectiveError> {
                    if position.len() != self.dimension() {
                        return Err(ObjectiveError::Undefined(format!(
                            "{} expects {} dimensions, got {}",
                            self.name(),
                            self.dimension(),
                            position.len()
                        )));
                    }
                    Ok(self.evaluate_raw(position))
                }
            }
        )*
    };
}

impl_objective_for_benchmark!(SixHumpCamelBack, Sphere, Rastrigin, Rosenbrock);

/// Six-hump camel back function
///
/// f(x, y) = 4x² - 2.1x⁴ + x⁶/3 + xy - 4y² + 4y⁴
///
/// Two-dimensional with six local minima, two of them global at
/// (0.0898, -0.7126) and (-0.0898, 0.7126).
#[derive(Clone, Debug, Default)]
pub struct SixHumpCamelBack;

impl SixHumpCamelBack {
    /// Create the six-hump camel back function
    pub fn new() -> Self {
        Self
    }
}

impl BenchmarkFunction for SixHumpCamelBack {
    fn name(&self) -> &'static str {
        "SixHumpCamelBack"
    }

    fn dimension(&self) -> usize {
        2
    }

    fn bounds(&self) -> MultiBounds {
        MultiBounds::symmetric(5.0, 2)
    }

    fn optimal_fitness(&self) -> f64 {
        -1.031_628_453_489_877_4
    }

    fn optimal_solution(&self) -> Option<Vec<f64>> {
        Some(vec![0.089_842_013_683_013_31, -0.712_656_403_270_413_5])
    }

    fn evaluate_raw(&self, x: &[f64]) -> f64 {
        let (a, b) = (x[0], x[1]);
        4.0 * a.powi(2) - 2.1 * a.powi(4) + a.powi(6) / 3.0 + a * b - 4.0 * b.powi(2)
            + 4.0 * b.powi(4)
    }
}

/// Sphere function: f(x) = Σxᵢ²
///
/// Unimodal, convex, separable. Optimum at origin.
#[derive(Clone, Debug)]
pub struct Sphere {
    dimension: usize,
}

impl Sphere {
    /// Create a new Sphere function
    pub fn new(dimension: usize) -> Self {
        Self { dimension }
    }
}

impl BenchmarkFunction for Sphere {
    fn name(&self) -> &'static str {
        "Sphere"
    }

    fn dimension(&self) -> usize {
        self.dimension
    }

    fn bounds(&self) -> MultiBounds {
        MultiBounds::symmetric(5.12, self.dimension)
    }

    fn optimal_fitness(&self) -> f64 {
        0.0
    }

    fn optimal_solution(&self) -> Option<Vec<f64>> {
        Some(vec![0.0; self.dimension])
    }

    fn evaluate_raw(&self, x: &[f64]) -> f64 {
        x.iter().map(|xi| xi * xi).sum()
    }
}

/// Rastrigin function: f(x) = 10n + Σ(xᵢ² - 10cos(2πxᵢ))
///
/// Highly multimodal with many local minima. Optimum at origin.
#[derive(Clone, Debug)]
pub struct Rastrigin {
    dimension: usize,
}

impl Rastrigin {
    /// Create a new Rastrigin function
    pub fn new(dimension: usize) -> Self {
        Self { dimension }
    }
}

impl BenchmarkFunction for Rastrigin {
    fn name(&self) -> &'static str {
        "Rastrigin"
    }

    fn dimension(&self) -> usize {
        self.dimension
    }

    fn bounds(&self) -> MultiBounds {
        MultiBounds::symmetric(5.12, self.dimension)
    }

    fn optimal_fitness(&self) -> f64 {
        0.0
    }

    fn optimal_solution(&self) -> Option<Vec<f64>> {
        Some(vec![0.0; self.dimension])
    }

    fn evaluate_raw(&self, x: &[f64]) -> f64 {
        let a = 10.0;
        let n = x.len() as f64;
        a * n
            + x.iter()
                .map(|xi| xi * xi - a * (2.0 * PI * xi).cos())
                .sum::<f64>()
    }
}

/// Rosenbrock function: f(x) = Σ[100(xᵢ₊₁-xᵢ²)² + (1-xᵢ)²]
///
/// Valley structure, non-separable. Optimum at (1,1,...,1).
#[derive(Clone, Debug)]
pub struct Rosenbrock {
    dimension: usize,
}

impl Rosenbrock {
    /// Create a new Rosenbrock function
    ///
    /// # Panics
    /// Panics if dimension < 2
    pub fn new(dimension: usize) -> Self {
        assert!(dimension >= 2, "Rosenbrock requires at least 2 dimensions");
        Self { dimension }
    }
}

impl BenchmarkFunction for Rosenbrock {
    fn name(&self) -> &'static str {
        "Rosenbrock"
    }

    fn dimension(&self) -> usize {
        self.dimension
    }

    fn bounds(&self) -> MultiBounds {
        MultiBounds::uniform((-5.0, 10.0).into(), self.dimension)
    }

    fn optimal_fitness(&self) -> f64 {
        0.0
    }

    fn optimal_solution(&self) -> Option<Vec<f64>> {
        Some(vec![1.0; self.dimension])
    }

    fn evaluate_raw(&self, x: &[f64]) -> f64 {
        x.windows(2)
            .map(|w| 100.0 * (w[1] - w[0] * w[0]).powi(2) + (1.0 - w[0]).powi(2))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_six_hump_camel_back_minima() {
        let f = SixHumpCamelBack::new();
        let optimum = f.optimal_solution().unwrap();
        assert_relative_eq!(f.evaluate_raw(&optimum), f.optimal_fitness(), epsilon = 1e-8);

        let mirrored = vec![-optimum[0], -optimum[1]];
        assert_relative_eq!(f.evaluate_raw(&mirrored), f.optimal_fitness(), epsilon = 1e-8);
    }

    #[test]
    fn test_six_hump_camel_back_values() {
        let f = SixHumpCamelBack::new();
        assert_eq!(f.evaluate_raw(&[0.0, 0.0]), 0.0);
        // 4 - 2.1 + 1/3 + 1 - 4 + 4
        assert_relative_eq!(f.evaluate_raw(&[1.0, 1.0]), 3.233_333_333, epsilon = 1e-8);
    }

    #[test]
    fn test_six_hump_camel_back_bounds() {
        let f = SixHumpCamelBack::new();
        assert_eq!(f.bounds(), MultiBounds::symmetric(5.0, 2));
        assert_eq!(f.dimension(), 2);
    }

    #[test]
    fn test_sphere() {
        let f = Sphere::new(3);
        assert_eq!(f.evaluate_raw(&[0.0, 0.0, 0.0]), 0.0);
        assert_eq!(f.evaluate_raw(&[1.0, 2.0, 3.0]), 14.0);
    }

    #[test]
    fn test_rastrigin_optimum() {
        let f = Rastrigin::new(4);
        assert_relative_eq!(f.evaluate_raw(&[0.0; 4]), 0.0, epsilon = 1e-12);
        assert!(f.evaluate_raw(&[0.5; 4]) > 0.0);
    }

    #[test]
    fn test_rosenbrock_optimum() {
        let f = Rosenbrock::new(3);
        assert_eq!(f.evaluate_raw(&[1.0, 1.0, 1.0]), 0.0);
        assert_eq!(f.evaluate_raw(&[0.0, 0.0, 0.0]), 2.0);
    }

    #[test]
    #[should_panic(expected = "at least 2 dimensions")]
    fn test_rosenbrock_requires_two_dimensions() {
        Rosenbrock::new(1);
    }

    #[test]
    fn test_benchmark_objective_dimension_check() {
        let f = SixHumpCamelBack::new();
        assert_eq!(f.evaluate(&[0.0, 0.0]), Ok(0.0));
        assert!(matches!(
            f.evaluate(&[0.0, 0.0, 0.0]),
            Err(ObjectiveError::Undefined(_))
        ));
    }
}
