//! Property-based tests for the distance routines.
//!
//! Covers the Lp family identities (Euclidean as the root of squared
//! Euclidean, Manhattan and Euclidean as Minkowski special cases, Chebyshev
//! as the large-`p` limit), symmetry across every pairwise routine, identity
//! for the routines that are zero on equal inputs, and the absence of NaN in
//! strict results even when intermediate terms overflow.

use proptest::prelude::*;
use proptest::test_runner::TestCaseResult;
use test_strategy::Arbitrary;

use crate::Metric;
use crate::test_utils::{
    approx_eq, geographic_point, suite_proptest_config, vector_pair, weighted_triple,
};

use super::{
    Distance, ValidationMode, chebyshev_distance, euclidean_distance, minkowski_distance,
    manhattan_distance, squared_euclidean_distance,
};
use crate::error::Result;

/// Parameter-free metrics exercised by the symmetry property.
#[derive(Clone, Copy, Debug, Arbitrary)]
enum SymmetricKind {
    Manhattan,
    Euclidean,
    SquaredEuclidean,
    Chebyshev,
    Hamming,
    BrayCurtis,
    Canberra,
}

impl SymmetricKind {
    fn metric(self) -> Metric {
        match self {
            Self::Manhattan => Metric::Manhattan,
            Self::Euclidean => Metric::Euclidean,
            Self::SquaredEuclidean => Metric::SquaredEuclidean,
            Self::Chebyshev => Metric::Chebyshev,
            Self::Hamming => Metric::Hamming,
            Self::BrayCurtis => Metric::BrayCurtis,
            Self::Canberra => Metric::Canberra,
        }
    }
}

/// Metrics that must be exactly zero on identical inputs.
#[derive(Clone, Copy, Debug, Arbitrary)]
enum IdentityKind {
    Manhattan,
    Euclidean,
    SquaredEuclidean,
    Chebyshev,
    Hamming,
    #[weight(2)]
    Minkowski(#[strategy(1.0..8.0)] f64),
}

impl IdentityKind {
    fn metric(self) -> Metric {
        match self {
            Self::Manhattan => Metric::Manhattan,
            Self::Euclidean => Metric::Euclidean,
            Self::SquaredEuclidean => Metric::SquaredEuclidean,
            Self::Chebyshev => Metric::Chebyshev,
            Self::Hamming => Metric::Hamming,
            Self::Minkowski(p) => Metric::Minkowski(p),
        }
    }
}

fn assert_symmetric(ab: Result<Distance>, ba: Result<Distance>) -> TestCaseResult {
    match (ab, ba) {
        (Ok(d1), Ok(d2)) => {
            let both_nan = d1.value().is_nan() && d2.value().is_nan();
            prop_assert!(
                both_nan || approx_eq(d1.value(), d2.value(), 1e-12),
                "d(a,b)={} != d(b,a)={}",
                d1,
                d2
            );
        }
        (Err(e1), Err(e2)) => prop_assert_eq!(e1.code(), e2.code()),
        (ab, ba) => prop_assert!(false, "asymmetric outcome: {ab:?} vs {ba:?}"),
    }
    Ok(())
}

proptest! {
    #![proptest_config(suite_proptest_config(256))]

    #[test]
    fn euclidean_is_root_of_squared_euclidean((a, b) in vector_pair(16, 1.0e3)) {
        let squared = squared_euclidean_distance(&a, &b).expect("valid pair");
        let euclidean = euclidean_distance(&a, &b).expect("valid pair");
        prop_assert_eq!(euclidean.value(), squared.value().sqrt());
    }

    #[test]
    fn manhattan_matches_minkowski_one((a, b) in vector_pair(16, 1.0e3)) {
        let manhattan = manhattan_distance(&a, &b).expect("valid pair");
        let minkowski = minkowski_distance(&a, &b, 1.0).expect("valid pair");
        prop_assert!(approx_eq(manhattan.value(), minkowski.value(), 1e-12));
    }

    #[test]
    fn euclidean_matches_minkowski_two((a, b) in vector_pair(16, 1.0e3)) {
        let euclidean = euclidean_distance(&a, &b).expect("valid pair");
        let minkowski = minkowski_distance(&a, &b, 2.0).expect("valid pair");
        prop_assert!(approx_eq(euclidean.value(), minkowski.value(), 1e-9));
    }

    #[test]
    fn chebyshev_is_the_large_exponent_limit((a, b) in vector_pair(16, 1.0)) {
        let chebyshev = chebyshev_distance(&a, &b).expect("valid pair");
        // Smaller gaps underflow when raised to the thousandth power.
        prop_assume!(chebyshev.value() >= 0.5);
        let minkowski = minkowski_distance(&a, &b, 1000.0).expect("valid pair");
        prop_assert!(minkowski.value() >= chebyshev.value() * (1.0 - 1e-9));
        prop_assert!(approx_eq(chebyshev.value(), minkowski.value(), 5e-3));
    }

    #[test]
    fn parameter_free_metrics_are_symmetric(
        kind in any::<SymmetricKind>(),
        (a, b) in vector_pair(16, 1.0e3),
    ) {
        let metric = kind.metric();
        for mode in [ValidationMode::Strict, ValidationMode::Permissive] {
            assert_symmetric(
                metric.distance_with_mode(mode, &a, &b),
                metric.distance_with_mode(mode, &b, &a),
            )?;
        }
    }

    #[test]
    fn minkowski_family_is_symmetric(
        p in 1.0..6.0_f64,
        (a, b, w) in weighted_triple(16, 1.0e2),
    ) {
        let metric = Metric::Minkowski(p);
        assert_symmetric(metric.distance(&a, &b), metric.distance(&b, &a))?;
        let weighted = Metric::weighted_minkowski(p, w);
        assert_symmetric(weighted.distance(&a, &b), weighted.distance(&b, &a))?;
    }

    #[test]
    fn strict_results_are_never_nan(
        kind in any::<SymmetricKind>(),
        p in 1.0..1000.0_f64,
        (a, b, w) in weighted_triple(16, 1.0e307),
    ) {
        // Half the weights become exact zeros so overflowing terms can be dropped.
        let weights: Vec<f64> = w.iter().map(|&x| if x < 1.0 { 0.0 } else { x }).collect();
        let results = [
            kind.metric().distance(&a, &b),
            Metric::Minkowski(p).distance(&a, &b),
            Metric::weighted_minkowski(p, weights).distance(&a, &b),
        ];
        for result in results {
            if let Ok(d) = result {
                prop_assert!(!d.value().is_nan(), "strict evaluation returned NaN");
            }
        }
    }

    #[test]
    fn earth_distance_is_symmetric_and_bounded(
        a in geographic_point(),
        b in geographic_point(),
    ) {
        let ab = Metric::Earth.distance(&a, &b).expect("valid coordinates");
        let ba = Metric::Earth.distance(&b, &a).expect("valid coordinates");
        prop_assert!(approx_eq(ab.value(), ba.value(), 1e-12));
        prop_assert!(!ab.value().is_nan());
        prop_assert!(ab.value() >= 0.0);
        prop_assert!(ab.value() <= std::f64::consts::PI * super::EARTH_RADIUS_METRES + 1e-6);
    }

    #[test]
    fn identical_inputs_are_zero_apart(
        kind in any::<IdentityKind>(),
        (a, _) in vector_pair(16, 1.0e3),
    ) {
        let d = kind.metric().distance(&a, &a).expect("valid vector");
        prop_assert_eq!(d.value(), 0.0);
    }

    #[test]
    fn bounded_ratio_metrics((a, b) in vector_pair(16, 1.0e3)) {
        let dimension = a.len() as f64;
        if let Ok(canberra) = Metric::Canberra.distance(&a, &b) {
            prop_assert!((0.0..=dimension).contains(&canberra.value()));
        }
        let hamming = Metric::Hamming.distance(&a, &b).expect("valid pair");
        prop_assert!((0.0..=dimension).contains(&hamming.value()));
        let non_negative_a: Vec<f64> = a.iter().map(|v| v.abs()).collect();
        let non_negative_b: Vec<f64> = b.iter().map(|v| v.abs()).collect();
        if let Ok(bray_curtis) = Metric::BrayCurtis.distance(&non_negative_a, &non_negative_b) {
            prop_assert!((0.0..=1.0 + 1e-12).contains(&bray_curtis.value()));
        }
    }
}
