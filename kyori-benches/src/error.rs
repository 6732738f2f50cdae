//! Benchmark setup error type.
//!
//! Lets setup functions propagate failures with `?` instead of `.expect()`.

use kyori_core::DistanceError;

use crate::source::SyntheticError;

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Synthetic pair generation failed.
    #[error("synthetic pair generation failed: {0}")]
    Synthetic(#[from] SyntheticError),
    /// A distance evaluated during the warm-up pass was rejected.
    #[error("distance evaluation failed: {0}")]
    Distance(#[from] DistanceError),
}
