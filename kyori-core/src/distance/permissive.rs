//! Unchecked distance routines that let NaN and infinity propagate.
//!
//! These functions skip every numeric guard: NaN and infinities in the inputs
//! flow through the formulas, `p` is not range-checked, zero denominators
//! yield NaN or ±∞, and geographic coordinates are not range-checked.
//!
//! Iteration is driven by the first vector's indices. Extra trailing
//! components in the second vector (or the weights) are ignored. A second
//! vector or weight vector that is *shorter* than the first is reported as
//! [`DistanceError::DimensionMismatch`] or [`DistanceError::WeightsMismatch`]
//! rather than read out of bounds.
//!
//! # Examples
//!
//! ```
//! use kyori_core::{DistanceError, permissive};
//!
//! fn main() -> Result<(), DistanceError> {
//!     // Strict mode would report a zero denominator here: 6 / 0.
//!     let d = permissive::bray_curtis_distance(&[1.0, -2.0], &[-1.0, 2.0])?;
//!     assert_eq!(d.value(), f64::INFINITY);
//!
//!     // Trailing components of the second vector are ignored.
//!     let d = permissive::manhattan_distance(&[0.0, 0.0], &[3.0, 4.0, 100.0])?;
//!     assert_eq!(d.value(), 7.0);
//!     Ok(())
//! }
//! ```

use super::helpers::{aligned_right, aligned_weights};
use super::kernels::{self, EARTH_RADIUS_METRES};
use super::types::Distance;
use crate::error::{DistanceError, Result, VectorKind};

/// Lp norm of a single vector without validating `p` or the components.
///
/// # Errors
///
/// Never fails; the `Result` keeps the signature uniform with the other
/// routines.
pub fn lp_norm(vector: &[f64], p: f64) -> Result<Distance> {
    Ok(Distance::from_raw(kernels::lp_norm(vector, p)))
}

/// Manhattan (L1) distance.
///
/// # Errors
///
/// [`DistanceError::DimensionMismatch`] when `right` is shorter than `left`.
pub fn manhattan_distance(left: &[f64], right: &[f64]) -> Result<Distance> {
    let right = aligned_right(left, right)?;
    Ok(Distance::from_raw(kernels::manhattan(left, right)))
}

/// Squared Euclidean distance.
///
/// # Errors
///
/// [`DistanceError::DimensionMismatch`] when `right` is shorter than `left`.
pub fn squared_euclidean_distance(left: &[f64], right: &[f64]) -> Result<Distance> {
    let right = aligned_right(left, right)?;
    Ok(Distance::from_raw(kernels::squared_euclidean(left, right)))
}

/// Euclidean (L2) distance, the square root of [`squared_euclidean_distance`].
///
/// # Errors
///
/// Propagates the errors of [`squared_euclidean_distance`].
pub fn euclidean_distance(left: &[f64], right: &[f64]) -> Result<Distance> {
    let squared = squared_euclidean_distance(left, right)?;
    Ok(Distance::from_raw(squared.value().sqrt()))
}

/// Minkowski (Lp) distance with an unchecked exponent.
///
/// # Errors
///
/// [`DistanceError::DimensionMismatch`] when `right` is shorter than `left`.
pub fn minkowski_distance(left: &[f64], right: &[f64], p: f64) -> Result<Distance> {
    let right = aligned_right(left, right)?;
    Ok(Distance::from_raw(kernels::minkowski(left, right, p)))
}

/// Weighted Minkowski distance with unchecked exponent and weights.
///
/// # Errors
///
/// [`DistanceError::DimensionMismatch`] when `right` is shorter than `left`
/// and [`DistanceError::WeightsMismatch`] when `weights` is.
pub fn weighted_minkowski_distance(
    left: &[f64],
    right: &[f64],
    weights: &[f64],
    p: f64,
) -> Result<Distance> {
    let right = aligned_right(left, right)?;
    let weights = aligned_weights(left, weights)?;
    Ok(Distance::from_raw(kernels::weighted_minkowski(
        left, right, weights, p,
    )))
}

/// Chebyshev (L∞) distance. NaN differences are skipped by the running
/// maximum.
///
/// # Errors
///
/// [`DistanceError::DimensionMismatch`] when `right` is shorter than `left`.
pub fn chebyshev_distance(left: &[f64], right: &[f64]) -> Result<Distance> {
    let right = aligned_right(left, right)?;
    Ok(Distance::from_raw(kernels::chebyshev(left, right)))
}

/// Hamming distance under exact IEEE inequality, so `NaN` never matches.
///
/// # Errors
///
/// [`DistanceError::DimensionMismatch`] when `right` is shorter than `left`.
pub fn hamming_distance(left: &[f64], right: &[f64]) -> Result<Distance> {
    let right = aligned_right(left, right)?;
    Ok(Distance::from_raw(kernels::hamming(left, right)))
}

/// Bray–Curtis dissimilarity. A zero denominator yields NaN or ±∞.
///
/// # Errors
///
/// [`DistanceError::DimensionMismatch`] when `right` is shorter than `left`.
pub fn bray_curtis_distance(left: &[f64], right: &[f64]) -> Result<Distance> {
    let right = aligned_right(left, right)?;
    let (numerator, denominator) = kernels::bray_curtis_sums(left, right);
    Ok(Distance::from_raw(numerator / denominator))
}

/// Canberra distance. A dimension where both values are zero contributes
/// `0 / 0`, which makes the whole sum NaN.
///
/// # Errors
///
/// [`DistanceError::DimensionMismatch`] when `right` is shorter than `left`.
pub fn canberra_distance(left: &[f64], right: &[f64]) -> Result<Distance> {
    let right = aligned_right(left, right)?;
    Ok(Distance::from_raw(kernels::canberra(left, right)))
}

/// Great-circle distance in metres between `[longitude, latitude]` pairs.
///
/// # Errors
///
/// See [`earth_distance_with_radius`].
pub fn earth_distance(left: &[f64], right: &[f64]) -> Result<Distance> {
    earth_distance_with_radius(left, right, EARTH_RADIUS_METRES)
}

/// Great-circle distance on a sphere of the given radius.
///
/// Only the first two components of each vector are read. Coordinates and
/// the radius are not range-checked.
///
/// # Errors
///
/// [`DistanceError::NotGeographic`] when a vector has fewer than two
/// components.
pub fn earth_distance_with_radius(left: &[f64], right: &[f64], radius: f64) -> Result<Distance> {
    let left = leading_pair(left, VectorKind::Left)?;
    let right = leading_pair(right, VectorKind::Right)?;
    Ok(Distance::from_raw(kernels::great_circle(
        left, right, radius,
    )))
}

fn leading_pair(values: &[f64], which: VectorKind) -> Result<(f64, f64)> {
    match values {
        &[longitude, latitude, ..] => Ok((longitude, latitude)),
        _ => Err(DistanceError::NotGeographic {
            which,
            dimension: values.len(),
        }),
    }
}
