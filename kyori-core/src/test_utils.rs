//! Shared test utilities for `kyori-core`.

use kyori_test_support::ci::property_test_profile::ProptestRunProfile;
use proptest::prelude::*;
use proptest::test_runner::Config as ProptestConfig;

/// Builds a standard proptest configuration from the shared CI profile.
///
/// This keeps property suites aligned on the same `PROGTEST_CASES` and
/// `KYORI_PBT_FORK` interpretation.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}

/// Two equal-length vectors with components drawn from `(-bound, bound)`.
pub(crate) fn vector_pair(
    max_dimension: usize,
    bound: f64,
) -> impl Strategy<Value = (Vec<f64>, Vec<f64>)> {
    (1..=max_dimension).prop_flat_map(move |dimension| {
        (
            prop::collection::vec(-bound..bound, dimension),
            prop::collection::vec(-bound..bound, dimension),
        )
    })
}

/// Two equal-length vectors plus non-negative weights of the same length.
pub(crate) fn weighted_triple(
    max_dimension: usize,
    bound: f64,
) -> impl Strategy<Value = (Vec<f64>, Vec<f64>, Vec<f64>)> {
    (1..=max_dimension).prop_flat_map(move |dimension| {
        (
            prop::collection::vec(-bound..bound, dimension),
            prop::collection::vec(-bound..bound, dimension),
            prop::collection::vec(0.0..2.0, dimension),
        )
    })
}

/// A valid `[longitude, latitude]` pair in degrees.
pub(crate) fn geographic_point() -> impl Strategy<Value = Vec<f64>> {
    (-180.0..=180.0, -90.0..=90.0).prop_map(|(longitude, latitude)| vec![longitude, latitude])
}

/// Reports whether two floats agree within a tolerance relative to their magnitude.
pub(crate) fn approx_eq(left: f64, right: f64, relative: f64) -> bool {
    let scale = left.abs().max(right.abs()).max(1.0);
    (left - right).abs() <= relative * scale
}
