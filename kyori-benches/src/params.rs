//! Benchmark parameter types.

use std::fmt;

/// Parameters for one distance benchmark input.
#[derive(Clone, Copy, Debug)]
pub struct PairBenchParams {
    /// Number of vector pairs evaluated per iteration.
    pub pair_count: usize,
    /// Dimensionality of every vector.
    pub dimensions: usize,
}

impl fmt::Display for PairBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "pairs={},d={}", self.pair_count, self.dimensions)
    }
}
