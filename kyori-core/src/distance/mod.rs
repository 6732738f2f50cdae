//! Distance primitives for built-in numeric metrics.
//!
//! The top-level routines validate their inputs and surface detailed errors
//! so callers can react during ingestion or while clustering. The
//! [`permissive`] module exposes the same formulas without numeric guards for
//! callers that depend on NaN and infinity propagating through.

mod earth;
mod hamming;
mod helpers;
mod kernels;
mod lp;
pub mod permissive;
mod ratio;
mod types;

#[cfg(test)]
mod property;

pub(crate) use self::earth::validate_radius;
pub use self::earth::{earth_distance, earth_distance_with_radius};
pub use self::hamming::hamming_distance;
pub use self::kernels::EARTH_RADIUS_METRES;
pub use self::lp::{
    chebyshev_distance, euclidean_distance, lp_norm, manhattan_distance, minkowski_distance,
    squared_euclidean_distance, weighted_minkowski_distance,
};
pub use self::ratio::{bray_curtis_distance, canberra_distance};
pub(crate) use self::types::validate_weight_values;
pub use self::types::{Distance, Exponent, ValidationMode, Vector, Weights};

// ============================================================================
// Kani Formal Verification
// ============================================================================

#[cfg(kani)]
mod kani_proofs {
    use super::{chebyshev_distance, manhattan_distance};

    /// Verifies Manhattan distance symmetry: d(a, b) = d(b, a).
    ///
    /// Operands are 3-dimensional vectors of nondeterministic finite values.
    #[kani::proof]
    #[kani::unwind(6)]
    fn verify_manhattan_symmetry_3d() {
        let a: [f64; 3] = [kani::any(), kani::any(), kani::any()];
        let b: [f64; 3] = [kani::any(), kani::any(), kani::any()];

        for &v in a.iter().chain(b.iter()) {
            kani::assume(v.is_finite());
        }

        match (manhattan_distance(&a, &b), manhattan_distance(&b, &a)) {
            (Ok(d1), Ok(d2)) => {
                kani::assert(
                    d1.value() == d2.value() || (d1.value().is_nan() && d2.value().is_nan()),
                    "manhattan distance symmetry violated",
                );
            }
            (Err(_), Err(_)) => {}
            _ => kani::assert(false, "asymmetric error behaviour in manhattan distance"),
        }
    }

    /// Verifies Chebyshev distance is zero on identical finite inputs.
    #[kani::proof]
    #[kani::unwind(6)]
    fn verify_chebyshev_zero_on_identical_3d() {
        let v: [f64; 3] = [kani::any(), kani::any(), kani::any()];

        for &x in &v {
            kani::assume(x.is_finite());
        }

        if let Ok(d) = chebyshev_distance(&v, &v) {
            kani::assert(d.value() == 0.0, "chebyshev distance not zero on identical inputs");
        }
    }
}
