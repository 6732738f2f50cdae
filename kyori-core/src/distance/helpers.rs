//! Shared helpers for distance implementations.

use super::types::{Vector, Weights};
use crate::error::{DistanceError, Result, VectorKind};

/// Validates both operands and ensures they share the same dimensionality.
pub(crate) fn validated_pair<'a>(
    left: &'a [f64],
    right: &'a [f64],
) -> Result<(Vector<'a>, Vector<'a>)> {
    let left = Vector::new(left, VectorKind::Left)?;
    let right = Vector::new(right, VectorKind::Right)?;
    validate_dimensions(&left, &right)?;
    Ok((left, right))
}

/// Ensures both vectors share the same dimensionality.
pub(crate) fn validate_dimensions(left: &Vector<'_>, right: &Vector<'_>) -> Result<()> {
    if left.dimension() != right.dimension() {
        return Err(DistanceError::DimensionMismatch {
            left: left.dimension(),
            right: right.dimension(),
        });
    }
    Ok(())
}

/// Validates a weighted operand triple.
pub(crate) fn validated_triple<'a>(
    left: &'a [f64],
    right: &'a [f64],
    weights: &'a [f64],
) -> Result<(Vector<'a>, Vector<'a>, Weights<'a>)> {
    let (left, right) = validated_pair(left, right)?;
    let weights = Weights::new(weights, left.dimension())?;
    Ok((left, right, weights))
}

/// Trims the right operand to the left operand's indices.
///
/// Iteration is driven by `left`: trailing components of `right` are ignored,
/// while a shorter `right` is reported instead of being read out of bounds.
pub(crate) fn aligned_right<'a>(left: &[f64], right: &'a [f64]) -> Result<&'a [f64]> {
    right
        .get(..left.len())
        .ok_or(DistanceError::DimensionMismatch {
            left: left.len(),
            right: right.len(),
        })
}

/// Trims the weights to the left operand's indices, as [`aligned_right`] does.
pub(crate) fn aligned_weights<'a>(left: &[f64], weights: &'a [f64]) -> Result<&'a [f64]> {
    weights
        .get(..left.len())
        .ok_or(DistanceError::WeightsMismatch {
            dimension: left.len(),
            weights: weights.len(),
        })
}
