//! Unchecked distance formulas.
//!
//! Every kernel iterates the zipped operands, so callers must align lengths
//! first. Strict and permissive entry points share these bodies and differ
//! only in the validation wrapped around them.

/// Equatorial radius (semi-major axis) of the WGS-84 ellipsoid, in metres.
pub const EARTH_RADIUS_METRES: f64 = 6_378_137.0;

pub(crate) fn lp_norm(values: &[f64], p: f64) -> f64 {
    let sum: f64 = values.iter().map(|v| v.abs().powf(p)).sum();
    sum.powf(p.recip())
}

pub(crate) fn manhattan(left: &[f64], right: &[f64]) -> f64 {
    left.iter().zip(right).map(|(l, r)| (l - r).abs()).sum()
}

pub(crate) fn squared_euclidean(left: &[f64], right: &[f64]) -> f64 {
    left.iter()
        .zip(right)
        .map(|(l, r)| {
            let diff = l - r;
            diff * diff
        })
        .sum()
}

pub(crate) fn minkowski(left: &[f64], right: &[f64], p: f64) -> f64 {
    let sum: f64 = left
        .iter()
        .zip(right)
        .map(|(l, r)| (l - r).abs().powf(p))
        .sum();
    sum.powf(p.recip())
}

pub(crate) fn weighted_minkowski(left: &[f64], right: &[f64], weights: &[f64], p: f64) -> f64 {
    let sum: f64 = left
        .iter()
        .zip(right)
        .zip(weights)
        .map(|((l, r), w)| w * (l - r).abs().powf(p))
        .sum();
    sum.powf(p.recip())
}

/// Weighted Minkowski sum that drops zero-weight dimensions entirely.
///
/// A zero weight must remove its dimension even when `|l - r|^p` overflows,
/// where the plain product would give `0 * inf = NaN`. Weights are assumed
/// validated as non-negative.
pub(crate) fn weighted_minkowski_skipping_zero_weights(
    left: &[f64],
    right: &[f64],
    weights: &[f64],
    p: f64,
) -> f64 {
    let sum: f64 = left
        .iter()
        .zip(right)
        .zip(weights)
        .filter(|&(_, &w)| w > 0.0)
        .map(|((l, r), w)| w * (l - r).abs().powf(p))
        .sum();
    sum.powf(p.recip())
}

/// Running maximum of the absolute differences.
///
/// A NaN difference never compares `>=` and is therefore skipped.
pub(crate) fn chebyshev(left: &[f64], right: &[f64]) -> f64 {
    left.iter().zip(right).fold(0.0, |max, (l, r)| {
        let diff = (l - r).abs();
        if diff >= max { diff } else { max }
    })
}

/// Counts positions that differ under exact IEEE inequality.
pub(crate) fn hamming(left: &[f64], right: &[f64]) -> f64 {
    left.iter()
        .zip(right)
        .fold(0.0, |count, (l, r)| if l != r { count + 1.0 } else { count })
}

/// Returns the Bray–Curtis numerator and denominator sums.
pub(crate) fn bray_curtis_sums(left: &[f64], right: &[f64]) -> (f64, f64) {
    left.iter()
        .zip(right)
        .fold((0.0, 0.0), |(numerator, denominator), (l, r)| {
            (numerator + (l - r).abs(), denominator + (l + r).abs())
        })
}

pub(crate) fn canberra(left: &[f64], right: &[f64]) -> f64 {
    left.iter()
        .zip(right)
        .map(|(l, r)| (l - r).abs() / (l.abs() + r.abs()))
        .sum()
}

/// Canberra sum that stays finite for any finite inputs.
///
/// A term whose denominator overflows is evaluated on halved operands, which
/// leaves the ratio unchanged. Every term is then at most one.
pub(crate) fn canberra_rescaled(left: &[f64], right: &[f64]) -> f64 {
    left.iter()
        .zip(right)
        .map(|(&l, &r)| {
            let denominator = l.abs() + r.abs();
            if denominator.is_finite() {
                (l - r).abs() / denominator
            } else {
                let (half_l, half_r) = (l * 0.5, r * 0.5);
                (half_l - half_r).abs() / (half_l.abs() + half_r.abs())
            }
        })
        .sum()
}

/// Index of the first Canberra term whose denominator is zero.
pub(crate) fn canberra_zero_term(left: &[f64], right: &[f64]) -> Option<usize> {
    left.iter()
        .zip(right)
        .position(|(l, r)| l.abs() + r.abs() == 0.0)
}

/// Great-circle distance between two `(longitude, latitude)` pairs in degrees.
///
/// Uses the spherical law of cosines. The cosine of the central angle is
/// clamped to `[-1, 1]` so rounding noise near coincident or antipodal points
/// cannot push `acos` out of its domain.
pub(crate) fn great_circle(first: (f64, f64), second: (f64, f64), radius: f64) -> f64 {
    let (first_lng, first_lat) = first;
    let (second_lng, second_lat) = second;
    let lat1 = first_lat.to_radians();
    let lat2 = second_lat.to_radians();
    let delta_lng = (second_lng - first_lng).to_radians();

    let cosine = lat1.sin() * lat2.sin() + lat1.cos() * lat2.cos() * delta_lng.cos();
    // NaN survives clamp, so non-finite coordinates still propagate.
    cosine.clamp(-1.0, 1.0).acos() * radius
}
