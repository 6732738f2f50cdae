//! Seeded synthetic vector pairs for benchmarking.
//!
//! Components are drawn from strictly positive ranges so the ratio metrics
//! never hit a zero denominator, and every pair is valid for strict
//! evaluation. Data is seeded for reproducibility across benchmark runs.

use rand::{Rng, SeedableRng, rngs::SmallRng};

/// Errors that may occur during synthetic pair generation.
#[derive(Clone, Debug, thiserror::Error, PartialEq, Eq)]
pub enum SyntheticError {
    /// The requested pair count was zero.
    #[error("pair count must be greater than zero")]
    ZeroPairs,
    /// The requested dimension count was zero.
    #[error("dimension count must be greater than zero")]
    ZeroDimensions,
}

/// Configuration for synthetic pair generation.
#[derive(Clone, Debug)]
pub struct SyntheticConfig {
    /// Number of vector pairs to generate.
    pub pair_count: usize,
    /// Dimensionality of each vector.
    pub dimensions: usize,
    /// RNG seed for reproducibility.
    pub seed: u64,
}

/// Row-major batches of left and right vectors plus one shared weight vector.
///
/// # Examples
///
/// ```
/// use kyori_benches::source::{SyntheticConfig, SyntheticPairs};
///
/// let config = SyntheticConfig { pair_count: 10, dimensions: 4, seed: 42 };
/// let pairs = SyntheticPairs::generate(&config).expect("valid config");
/// assert_eq!(pairs.pairs().count(), 10);
/// assert_eq!(pairs.weights().len(), 4);
/// ```
#[derive(Clone, Debug)]
pub struct SyntheticPairs {
    left: Vec<f64>,
    right: Vec<f64>,
    weights: Vec<f64>,
    pair_count: usize,
    dimensions: usize,
}

impl SyntheticPairs {
    /// Generates feature vectors with components in `[0.1, 1)` and weights
    /// in `[0.5, 1.5)`.
    ///
    /// # Errors
    ///
    /// Returns [`SyntheticError::ZeroPairs`] if `pair_count` is zero,
    /// or [`SyntheticError::ZeroDimensions`] if `dimensions` is zero.
    pub fn generate(config: &SyntheticConfig) -> Result<Self, SyntheticError> {
        validate(config)?;
        let total = config.pair_count.saturating_mul(config.dimensions);
        let mut rng = SmallRng::seed_from_u64(config.seed);
        let left = (0..total).map(|_| rng.gen_range(0.1..1.0)).collect();
        let right = (0..total).map(|_| rng.gen_range(0.1..1.0)).collect();
        let weights = (0..config.dimensions)
            .map(|_| rng.gen_range(0.5..1.5))
            .collect();
        Ok(Self {
            left,
            right,
            weights,
            pair_count: config.pair_count,
            dimensions: config.dimensions,
        })
    }

    /// Generates `[longitude, latitude]` pairs spread over the whole sphere.
    ///
    /// The configured dimensionality is ignored; every vector has two
    /// components and the weights are all one.
    ///
    /// # Errors
    ///
    /// Returns [`SyntheticError::ZeroPairs`] if `pair_count` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use kyori_benches::source::{SyntheticConfig, SyntheticPairs};
    ///
    /// let config = SyntheticConfig { pair_count: 3, dimensions: 0, seed: 7 };
    /// let points = SyntheticPairs::generate_geographic(&config).expect("valid config");
    /// assert_eq!(points.dimensions(), 2);
    /// ```
    pub fn generate_geographic(config: &SyntheticConfig) -> Result<Self, SyntheticError> {
        validate(&SyntheticConfig {
            dimensions: 2,
            ..config.clone()
        })?;
        let mut rng = SmallRng::seed_from_u64(config.seed);
        let mut coordinates = || -> Vec<f64> {
            (0..config.pair_count)
                .flat_map(|_| [rng.gen_range(-180.0..=180.0), rng.gen_range(-90.0..=90.0)])
                .collect()
        };
        let left = coordinates();
        let right = coordinates();
        Ok(Self {
            left,
            right,
            weights: vec![1.0; 2],
            pair_count: config.pair_count,
            dimensions: 2,
        })
    }

    /// Returns the number of generated pairs.
    #[must_use]
    pub const fn pair_count(&self) -> usize {
        self.pair_count
    }

    /// Returns the dimensionality of each vector.
    #[must_use]
    pub const fn dimensions(&self) -> usize {
        self.dimensions
    }

    /// Returns the shared weight vector.
    #[must_use]
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Iterates over `(left, right)` vector pairs.
    pub fn pairs(&self) -> impl Iterator<Item = (&[f64], &[f64])> + '_ {
        self.left
            .chunks_exact(self.dimensions)
            .zip(self.right.chunks_exact(self.dimensions))
    }
}

const fn validate(config: &SyntheticConfig) -> Result<(), SyntheticError> {
    if config.pair_count == 0 {
        return Err(SyntheticError::ZeroPairs);
    }
    if config.dimensions == 0 {
        return Err(SyntheticError::ZeroDimensions);
    }
    Ok(())
}
