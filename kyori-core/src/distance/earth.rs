//! Great-circle distance between `[longitude, latitude]` pairs.

use super::kernels::{self, EARTH_RADIUS_METRES};
use super::types::{Distance, Vector};
use crate::error::{Axis, DistanceError, Result, VectorKind};

const MAX_LONGITUDE: f64 = 180.0;
const MAX_LATITUDE: f64 = 90.0;

/// Computes the great-circle distance in metres between two points on Earth.
///
/// Each vector is a `[longitude, latitude]` pair in degrees. The sphere has
/// the WGS-84 equatorial radius, [`EARTH_RADIUS_METRES`].
///
/// # Examples
///
/// ```
/// use kyori_core::{DistanceError, earth_distance};
///
/// fn main() -> Result<(), DistanceError> {
///     assert_eq!(earth_distance(&[0.0, 0.0], &[0.0, 0.0])?.value(), 0.0);
///
///     // A quarter of the equator.
///     let quarter = earth_distance(&[0.0, 0.0], &[90.0, 0.0])?;
///     let expected = std::f64::consts::FRAC_PI_2 * kyori_core::EARTH_RADIUS_METRES;
///     assert!((quarter.value() - expected).abs() < 1e-6);
///     Ok(())
/// }
/// ```
///
/// # Errors
///
/// See [`earth_distance_with_radius`].
pub fn earth_distance(left: &[f64], right: &[f64]) -> Result<Distance> {
    earth_distance_with_radius(left, right, EARTH_RADIUS_METRES)
}

/// Computes the great-circle distance on a sphere of the given radius.
///
/// The result is expressed in the unit of `radius`.
///
/// # Examples
///
/// ```
/// use kyori_core::{DistanceError, earth_distance_with_radius};
///
/// fn main() -> Result<(), DistanceError> {
///     // Antipodal points on the unit sphere are π apart.
///     let d = earth_distance_with_radius(&[0.0, 0.0], &[180.0, 0.0], 1.0)?;
///     assert!((d.value() - std::f64::consts::PI).abs() < 1e-12);
///     Ok(())
/// }
/// ```
///
/// # Errors
///
/// - [`DistanceError::InvalidRadius`] when `radius` is not finite and positive.
/// - [`DistanceError::NotGeographic`] when a vector is not two-dimensional.
/// - [`DistanceError::NonFinite`] when a coordinate is NaN or infinite.
/// - [`DistanceError::CoordinateOutOfRange`] when a longitude lies outside
///   `[-180, 180]` or a latitude outside `[-90, 90]`.
pub fn earth_distance_with_radius(left: &[f64], right: &[f64], radius: f64) -> Result<Distance> {
    let radius = validate_radius(radius)?;
    let left = geographic(left, VectorKind::Left)?;
    let right = geographic(right, VectorKind::Right)?;
    Ok(Distance::from_raw(kernels::great_circle(
        left, right, radius,
    )))
}

/// Ensures a sphere radius is finite and strictly positive.
pub(crate) fn validate_radius(radius: f64) -> Result<f64> {
    if radius.is_finite() && radius > 0.0 {
        Ok(radius)
    } else {
        Err(DistanceError::InvalidRadius { radius })
    }
}

fn geographic(values: &[f64], which: VectorKind) -> Result<(f64, f64)> {
    let &[longitude, latitude] = values else {
        return Err(DistanceError::NotGeographic {
            which,
            dimension: values.len(),
        });
    };
    Vector::new(values, which)?;
    check_range(longitude, MAX_LONGITUDE, which, Axis::Longitude)?;
    check_range(latitude, MAX_LATITUDE, which, Axis::Latitude)?;
    Ok((longitude, latitude))
}

fn check_range(value: f64, bound: f64, which: VectorKind, axis: Axis) -> Result<()> {
    if (-bound..=bound).contains(&value) {
        Ok(())
    } else {
        Err(DistanceError::CoordinateOutOfRange { which, axis, value })
    }
}
