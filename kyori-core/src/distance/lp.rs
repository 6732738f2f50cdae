//! Lp-family distances: Manhattan, Euclidean, Minkowski and Chebyshev.
//!
//! Manhattan (p = 1), Euclidean (p = 2) and Chebyshev (p = ∞) are computed
//! directly rather than through [`minkowski_distance`], avoiding a power and
//! root per dimension on the hot paths.

use super::helpers::{validated_pair, validated_triple};
use super::kernels;
use super::types::{Distance, Exponent, Vector};
use crate::error::{Result, VectorKind};

/// Computes the Lp norm of a single vector, its distance from the origin.
///
/// # Examples
///
/// ```
/// use kyori_core::{DistanceError, lp_norm};
///
/// fn main() -> Result<(), DistanceError> {
///     let norm = lp_norm(&[3.0, 4.0], 2.0)?;
///     assert!((norm.value() - 5.0).abs() < 1e-12);
///     Ok(())
/// }
/// ```
///
/// # Errors
///
/// - [`DistanceError::ZeroLength`](crate::DistanceError::ZeroLength) when the vector is empty.
/// - [`DistanceError::NonFinite`](crate::DistanceError::NonFinite) when a value is NaN or infinite.
/// - [`DistanceError::InvalidExponent`](crate::DistanceError::InvalidExponent) when `p` is not a finite value `>= 1`.
pub fn lp_norm(vector: &[f64], p: f64) -> Result<Distance> {
    let p = Exponent::new(p)?;
    let vector = Vector::new(vector, VectorKind::Left)?;
    Ok(Distance::from_raw(kernels::lp_norm(&vector, *p)))
}

/// Computes the Manhattan (L1) distance between two vectors.
///
/// # Examples
///
/// ```
/// use kyori_core::{DistanceError, manhattan_distance};
///
/// fn main() -> Result<(), DistanceError> {
///     let distance = manhattan_distance(&[0.0, 0.0], &[3.0, 4.0])?;
///     assert_eq!(distance.value(), 7.0);
///     Ok(())
/// }
/// ```
///
/// # Errors
///
/// - [`DistanceError::ZeroLength`](crate::DistanceError::ZeroLength) when any input is empty.
/// - [`DistanceError::DimensionMismatch`](crate::DistanceError::DimensionMismatch) when input lengths differ.
/// - [`DistanceError::NonFinite`](crate::DistanceError::NonFinite) when a value is NaN or infinite.
pub fn manhattan_distance(left: &[f64], right: &[f64]) -> Result<Distance> {
    let (left, right) = validated_pair(left, right)?;
    Ok(Distance::from_raw(kernels::manhattan(&left, &right)))
}

/// Computes the squared Euclidean distance between two vectors.
///
/// This is not a true metric: it violates the triangle inequality and weighs
/// distant pairs more heavily than [`euclidean_distance`]. It skips the
/// square root, so prefer it when only the ordering of distances matters,
/// such as nearest-centroid assignment.
///
/// # Examples
///
/// ```
/// use kyori_core::{DistanceError, squared_euclidean_distance};
///
/// fn main() -> Result<(), DistanceError> {
///     let distance = squared_euclidean_distance(&[0.0, 0.0], &[3.0, 4.0])?;
///     assert_eq!(distance.value(), 25.0);
///     Ok(())
/// }
/// ```
///
/// # Errors
///
/// - [`DistanceError::ZeroLength`](crate::DistanceError::ZeroLength) when any input is empty.
/// - [`DistanceError::DimensionMismatch`](crate::DistanceError::DimensionMismatch) when input lengths differ.
/// - [`DistanceError::NonFinite`](crate::DistanceError::NonFinite) when a value is NaN or infinite.
pub fn squared_euclidean_distance(left: &[f64], right: &[f64]) -> Result<Distance> {
    let (left, right) = validated_pair(left, right)?;
    Ok(Distance::from_raw(kernels::squared_euclidean(&left, &right)))
}

/// Computes the Euclidean (L2) distance between two vectors.
///
/// # Examples
///
/// ```
/// use kyori_core::{DistanceError, euclidean_distance};
///
/// fn main() -> Result<(), DistanceError> {
///     let distance = euclidean_distance(&[1.0, 2.0, 3.0], &[4.0, 6.0, 8.0])?;
///     assert!((distance.value() - 50.0_f64.sqrt()).abs() < 1e-12);
///     Ok(())
/// }
/// ```
///
/// # Errors
///
/// Propagates every error of [`squared_euclidean_distance`].
pub fn euclidean_distance(left: &[f64], right: &[f64]) -> Result<Distance> {
    let squared = squared_euclidean_distance(left, right)?;
    Ok(Distance::from_raw(squared.value().sqrt()))
}

/// Computes the Minkowski (Lp) distance between two vectors.
///
/// # Examples
///
/// ```
/// use kyori_core::{DistanceError, minkowski_distance};
///
/// fn main() -> Result<(), DistanceError> {
///     let distance = minkowski_distance(&[0.0, 0.0], &[3.0, 4.0], 3.0)?;
///     assert!((distance.value() - 91.0_f64.cbrt()).abs() < 1e-12);
///     Ok(())
/// }
/// ```
///
/// # Errors
///
/// - [`DistanceError::InvalidExponent`](crate::DistanceError::InvalidExponent) when `p` is not a finite value `>= 1`.
/// - [`DistanceError::ZeroLength`](crate::DistanceError::ZeroLength) when any input is empty.
/// - [`DistanceError::DimensionMismatch`](crate::DistanceError::DimensionMismatch) when input lengths differ.
/// - [`DistanceError::NonFinite`](crate::DistanceError::NonFinite) when a value is NaN or infinite.
pub fn minkowski_distance(left: &[f64], right: &[f64], p: f64) -> Result<Distance> {
    let p = Exponent::new(p)?;
    let (left, right) = validated_pair(left, right)?;
    Ok(Distance::from_raw(kernels::minkowski(&left, &right, *p)))
}

/// Computes the weighted Minkowski distance between two vectors.
///
/// Each dimension's term is scaled by the weight at the same index. A zero
/// weight removes the dimension; weights need not sum to one.
///
/// # Examples
///
/// ```
/// use kyori_core::{DistanceError, weighted_minkowski_distance};
///
/// fn main() -> Result<(), DistanceError> {
///     let distance = weighted_minkowski_distance(&[0.0, 0.0], &[3.0, 4.0], &[1.0, 1.0], 2.0)?;
///     assert!((distance.value() - 5.0).abs() < 1e-12);
///
///     let ignore_second = weighted_minkowski_distance(&[0.0, 0.0], &[3.0, 4.0], &[1.0, 0.0], 2.0)?;
///     assert!((ignore_second.value() - 3.0).abs() < 1e-12);
///     Ok(())
/// }
/// ```
///
/// # Errors
///
/// - [`DistanceError::InvalidExponent`](crate::DistanceError::InvalidExponent) when `p` is not a finite value `>= 1`.
/// - [`DistanceError::ZeroLength`](crate::DistanceError::ZeroLength) when any input is empty.
/// - [`DistanceError::DimensionMismatch`](crate::DistanceError::DimensionMismatch) when input lengths differ.
/// - [`DistanceError::WeightsMismatch`](crate::DistanceError::WeightsMismatch) when the weights have a different length.
/// - [`DistanceError::NonFinite`](crate::DistanceError::NonFinite) when a value or weight is NaN or infinite.
/// - [`DistanceError::NegativeWeight`](crate::DistanceError::NegativeWeight) when a weight is negative.
pub fn weighted_minkowski_distance(
    left: &[f64],
    right: &[f64],
    weights: &[f64],
    p: f64,
) -> Result<Distance> {
    let p = Exponent::new(p)?;
    let (left, right, weights) = validated_triple(left, right, weights)?;
    Ok(Distance::from_raw(
        kernels::weighted_minkowski_skipping_zero_weights(&left, &right, &weights, *p),
    ))
}

/// Computes the Chebyshev (L∞) distance: the largest per-dimension gap.
///
/// # Examples
///
/// ```
/// use kyori_core::{DistanceError, chebyshev_distance};
///
/// fn main() -> Result<(), DistanceError> {
///     let distance = chebyshev_distance(&[1.0, 2.0, 3.0], &[4.0, 2.0, 0.0])?;
///     assert_eq!(distance.value(), 3.0);
///     Ok(())
/// }
/// ```
///
/// # Errors
///
/// - [`DistanceError::ZeroLength`](crate::DistanceError::ZeroLength) when any input is empty.
/// - [`DistanceError::DimensionMismatch`](crate::DistanceError::DimensionMismatch) when input lengths differ.
/// - [`DistanceError::NonFinite`](crate::DistanceError::NonFinite) when a value is NaN or infinite.
pub fn chebyshev_distance(left: &[f64], right: &[f64]) -> Result<Distance> {
    let (left, right) = validated_pair(left, right)?;
    Ok(Distance::from_raw(kernels::chebyshev(&left, &right)))
}
