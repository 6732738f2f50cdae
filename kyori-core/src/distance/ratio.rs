//! Normalised L1 variants: Bray–Curtis and Canberra.

use super::helpers::validated_pair;
use super::kernels;
use super::types::Distance;
use crate::error::{DistanceError, Result};

pub(crate) const BRAY_CURTIS: &str = "bray_curtis";
pub(crate) const CANBERRA: &str = "canberra";

/// Computes the Bray–Curtis dissimilarity `Σ|aᵢ − bᵢ| / Σ|aᵢ + bᵢ|`.
///
/// # Examples
///
/// ```
/// use kyori_core::{DistanceError, bray_curtis_distance};
///
/// fn main() -> Result<(), DistanceError> {
///     let distance = bray_curtis_distance(&[1.0, 2.0], &[3.0, 2.0])?;
///     assert!((distance.value() - 0.25).abs() < 1e-12);
///     Ok(())
/// }
/// ```
///
/// # Errors
///
/// - [`DistanceError::ZeroLength`] when any input is empty.
/// - [`DistanceError::DimensionMismatch`] when input lengths differ.
/// - [`DistanceError::NonFinite`] when a value is NaN or infinite.
/// - [`DistanceError::ZeroDenominator`] when `Σ|aᵢ + bᵢ|` is zero, for
///   example when `b = −a`.
/// - [`DistanceError::Overflow`] when either sum exceeds the `f64` range.
pub fn bray_curtis_distance(left: &[f64], right: &[f64]) -> Result<Distance> {
    let (left, right) = validated_pair(left, right)?;
    let (numerator, denominator) = kernels::bray_curtis_sums(&left, &right);
    if denominator == 0.0 {
        return Err(DistanceError::ZeroDenominator {
            metric: BRAY_CURTIS,
            index: None,
        });
    }
    if !numerator.is_finite() || !denominator.is_finite() {
        return Err(DistanceError::Overflow {
            metric: BRAY_CURTIS,
        });
    }
    Ok(Distance::from_raw(numerator / denominator))
}

/// Computes the Canberra distance `Σ |aᵢ − bᵢ| / (|aᵢ| + |bᵢ|)`.
///
/// Each term is normalised by its own dimension's magnitude, so every
/// dimension contributes at most one. Terms near the top of the `f64` range
/// are rescaled before dividing and never overflow.
///
/// # Examples
///
/// ```
/// use kyori_core::{DistanceError, canberra_distance};
///
/// fn main() -> Result<(), DistanceError> {
///     let distance = canberra_distance(&[1.0, 2.0], &[3.0, 2.0])?;
///     assert!((distance.value() - 0.5).abs() < 1e-12);
///     Ok(())
/// }
/// ```
///
/// # Errors
///
/// - [`DistanceError::ZeroLength`] when any input is empty.
/// - [`DistanceError::DimensionMismatch`] when input lengths differ.
/// - [`DistanceError::NonFinite`] when a value is NaN or infinite.
/// - [`DistanceError::ZeroDenominator`] when both vectors are zero in some
///   dimension.
pub fn canberra_distance(left: &[f64], right: &[f64]) -> Result<Distance> {
    let (left, right) = validated_pair(left, right)?;
    if let Some(index) = kernels::canberra_zero_term(&left, &right) {
        return Err(DistanceError::ZeroDenominator {
            metric: CANBERRA,
            index: Some(index),
        });
    }
    Ok(Distance::from_raw(kernels::canberra_rescaled(&left, &right)))
}
