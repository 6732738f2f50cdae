//! Hamming distance over floating-point components.

use super::helpers::validated_pair;
use super::kernels;
use super::types::Distance;
use crate::error::Result;

/// Counts the dimensions in which two vectors differ.
///
/// Components are compared with exact floating-point inequality and no
/// tolerance, so the metric suits vectors of categorical codes stored as
/// floats. On continuous data that shares no exact ties it degenerates to the
/// dimension count.
///
/// # Examples
///
/// ```
/// use kyori_core::{DistanceError, hamming_distance};
///
/// fn main() -> Result<(), DistanceError> {
///     let distance = hamming_distance(&[1.0, 2.0, 3.0], &[1.0, 9.0, 3.0])?;
///     assert_eq!(distance.value(), 1.0);
///     Ok(())
/// }
/// ```
///
/// # Errors
///
/// - [`DistanceError::ZeroLength`](crate::DistanceError::ZeroLength) when any input is empty.
/// - [`DistanceError::DimensionMismatch`](crate::DistanceError::DimensionMismatch) when input lengths differ.
/// - [`DistanceError::NonFinite`](crate::DistanceError::NonFinite) when a value is NaN or infinite.
pub fn hamming_distance(left: &[f64], right: &[f64]) -> Result<Distance> {
    let (left, right) = validated_pair(left, right)?;
    Ok(Distance::from_raw(kernels::hamming(&left, &right)))
}
