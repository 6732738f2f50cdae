//! Integration tests validating the distance functions exported by `kyori-core`.

mod common;

use std::f64::consts::PI;

use common::assert_close;
use kyori_core::{
    Axis, DistanceError, EARTH_RADIUS_METRES, ErrorKind, VectorKind, bray_curtis_distance,
    canberra_distance, chebyshev_distance, earth_distance, euclidean_distance, hamming_distance,
    lp_norm, manhattan_distance, minkowski_distance, permissive, squared_euclidean_distance,
    weighted_minkowski_distance,
};
use rstest::rstest;

#[test]
fn manhattan_sums_absolute_differences() {
    let d = manhattan_distance(&[0.0, 0.0], &[3.0, 4.0]).expect("valid pair");
    assert_eq!(d.value(), 7.0);
}

#[test]
fn euclidean_is_the_straight_line_length() {
    let d = euclidean_distance(&[0.0, 0.0], &[3.0, 4.0]).expect("valid pair");
    assert_eq!(d.value(), 5.0);
    let squared = squared_euclidean_distance(&[0.0, 0.0], &[3.0, 4.0]).expect("valid pair");
    assert_eq!(squared.value(), 25.0);
}

#[test]
fn chebyshev_takes_the_largest_difference() {
    let d = chebyshev_distance(&[1.0, 2.0, 3.0], &[4.0, 2.0, 0.0]).expect("valid pair");
    assert_eq!(d.value(), 3.0);
}

#[test]
fn hamming_counts_differing_positions() {
    let d = hamming_distance(&[1.0, 2.0, 3.0], &[1.0, 9.0, 3.0]).expect("valid pair");
    assert_eq!(d.value(), 1.0);
}

#[test]
fn unit_weights_reduce_to_minkowski() {
    let d = weighted_minkowski_distance(&[0.0, 0.0], &[3.0, 4.0], &[1.0, 1.0], 2.0)
        .expect("valid triple");
    assert_close(d, 5.0, 1e-12);
}

#[test]
fn earth_distance_between_identical_points_is_zero() {
    let d = earth_distance(&[0.0, 0.0], &[0.0, 0.0]).expect("valid coordinates");
    assert!(!d.value().is_nan());
    assert_eq!(d.value(), 0.0);
}

#[rstest]
#[case(&[3.0, 4.0], 1.0, 7.0)]
#[case(&[3.0, 4.0], 2.0, 5.0)]
#[case(&[-2.0, 0.0, 2.0], 3.0, 16.0_f64.cbrt())]
fn lp_norm_measures_vector_length(#[case] vector: &[f64], #[case] p: f64, #[case] expected: f64) {
    assert_close(lp_norm(vector, p).expect("valid norm"), expected, 1e-12);
}

#[rstest]
#[case(1.0, 7.0)]
#[case(2.0, 5.0)]
#[case(3.0, 91.0_f64.cbrt())]
fn minkowski_generalises_the_fast_paths(#[case] p: f64, #[case] expected: f64) {
    let d = minkowski_distance(&[0.0, 0.0], &[3.0, 4.0], p).expect("valid pair");
    assert_close(d, expected, 1e-12);
}

#[test]
fn weights_scale_each_term() {
    // 4 * 3^2 + 0 * 4^2 = 36
    let d = weighted_minkowski_distance(&[0.0, 0.0], &[3.0, 4.0], &[4.0, 0.0], 2.0)
        .expect("valid triple");
    assert_close(d, 6.0, 1e-12);
}

#[test]
fn bray_curtis_normalises_by_the_sum() {
    // |1-3| + |2-2| = 2 over |1+3| + |2+2| = 8
    let d = bray_curtis_distance(&[1.0, 2.0], &[3.0, 2.0]).expect("valid pair");
    assert_close(d, 0.25, 1e-12);
}

#[test]
fn canberra_sums_relative_differences() {
    // 2/4 + 0/4 + 1/1
    let d = canberra_distance(&[1.0, 2.0, 0.0], &[3.0, 2.0, 1.0]).expect("valid pair");
    assert_close(d, 1.5, 1e-12);
}

#[test]
fn antipodal_points_are_half_a_circumference_apart() {
    let d = earth_distance(&[0.0, 0.0], &[180.0, 0.0]).expect("valid coordinates");
    assert_close(d, PI * EARTH_RADIUS_METRES, 1e-6);
}

#[test]
fn one_degree_of_latitude_matches_the_arc_length() {
    let d = earth_distance(&[0.0, 0.0], &[0.0, 1.0]).expect("valid coordinates");
    assert_close(d, EARTH_RADIUS_METRES * PI / 180.0, 1e-3);
}

#[test]
fn strict_functions_reject_dimension_mismatch() {
    let error = manhattan_distance(&[1.0], &[1.0, 2.0]).expect_err("dimensions must match");
    assert_eq!(error, DistanceError::DimensionMismatch { left: 1, right: 2 });
}

#[test]
fn strict_functions_reject_zero_length() {
    let error = euclidean_distance(&[], &[]).expect_err("empty input");
    assert_eq!(error, DistanceError::ZeroLength);
}

#[test]
fn strict_functions_reject_non_finite_values() {
    let error = chebyshev_distance(&[0.0, 1.0], &[0.0, f64::NAN]).expect_err("reject NaN");
    match error {
        DistanceError::NonFinite {
            which: VectorKind::Right,
            index: 1,
            value,
        } => assert!(value.is_nan()),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[rstest]
#[case(0.0)]
#[case(0.999)]
#[case(-1.0)]
#[case(f64::INFINITY)]
#[case(f64::NAN)]
fn strict_minkowski_rejects_bad_exponents(#[case] p: f64) {
    let error = minkowski_distance(&[0.0], &[1.0], p).expect_err("exponent below one");
    assert!(matches!(error, DistanceError::InvalidExponent { .. }));
}

#[test]
fn strict_weighted_minkowski_checks_weights() {
    let short = weighted_minkowski_distance(&[0.0, 0.0], &[1.0, 1.0], &[1.0], 2.0)
        .expect_err("weights too short");
    assert_eq!(
        short,
        DistanceError::WeightsMismatch {
            dimension: 2,
            weights: 1
        }
    );
    let negative = weighted_minkowski_distance(&[0.0, 0.0], &[1.0, 1.0], &[1.0, -0.5], 2.0)
        .expect_err("negative weight");
    assert_eq!(
        negative,
        DistanceError::NegativeWeight {
            index: 1,
            value: -0.5
        }
    );
}

#[rstest]
#[case(&[1.0, 3.0], 1000.0)]
#[case(&[1.0, 1e200], 2.0)]
fn zero_weight_removes_an_overflowing_dimension(#[case] right: &[f64], #[case] p: f64) {
    let d = weighted_minkowski_distance(&[0.0, 0.0], right, &[1.0, 0.0], p)
        .expect("valid triple");
    assert_close(d, 1.0, 1e-12);
}

#[test]
fn strict_ratio_metrics_never_return_nan_on_huge_inputs() {
    let canberra = canberra_distance(&[1e308], &[-1e308]).expect("finite inputs");
    assert_eq!(canberra.value(), 1.0);

    let bray_curtis = bray_curtis_distance(&[1e308, 1e308], &[-1e308, 1e308])
        .expect_err("sums leave the f64 range");
    assert_eq!(bray_curtis, DistanceError::Overflow { metric: "bray_curtis" });
    assert_eq!(bray_curtis.kind(), ErrorKind::DegenerateInput);
}

#[test]
fn strict_ratio_metrics_reject_zero_denominators() {
    let bray_curtis = bray_curtis_distance(&[0.0, 0.0], &[0.0, 0.0]).expect_err("all zero");
    assert!(matches!(
        bray_curtis,
        DistanceError::ZeroDenominator {
            metric: "bray_curtis",
            index: None
        }
    ));
    let canberra = canberra_distance(&[0.0, 1.0], &[0.0, 2.0]).expect_err("zero pair");
    assert!(matches!(
        canberra,
        DistanceError::ZeroDenominator {
            metric: "canberra",
            index: Some(0)
        }
    ));
}

#[rstest]
#[case(&[0.0], &[0.0, 0.0], DistanceError::NotGeographic { which: VectorKind::Left, dimension: 1 })]
#[case(&[0.0, 0.0], &[0.0, 0.0, 0.0], DistanceError::NotGeographic { which: VectorKind::Right, dimension: 3 })]
#[case(&[181.0, 0.0], &[0.0, 0.0], DistanceError::CoordinateOutOfRange { which: VectorKind::Left, axis: Axis::Longitude, value: 181.0 })]
#[case(&[0.0, 0.0], &[0.0, -90.5], DistanceError::CoordinateOutOfRange { which: VectorKind::Right, axis: Axis::Latitude, value: -90.5 })]
fn strict_earth_distance_rejects_bad_coordinates(
    #[case] left: &[f64],
    #[case] right: &[f64],
    #[case] expected: DistanceError,
) {
    assert_eq!(earth_distance(left, right).expect_err("bad coordinates"), expected);
}

#[test]
fn permissive_functions_propagate_non_finite_values() {
    let d = permissive::manhattan_distance(&[0.0, f64::INFINITY], &[1.0, 0.0])
        .expect("permissive evaluation");
    assert_eq!(d.value(), f64::INFINITY);
    let nan = permissive::euclidean_distance(&[f64::NAN], &[0.0]).expect("permissive evaluation");
    assert!(nan.value().is_nan());
}

#[test]
fn permissive_ratio_metrics_divide_by_zero() {
    let bray_curtis =
        permissive::bray_curtis_distance(&[0.0, 0.0], &[0.0, 0.0]).expect("permissive evaluation");
    assert!(bray_curtis.value().is_nan());
    let canberra =
        permissive::canberra_distance(&[0.0, 1.0], &[0.0, 3.0]).expect("permissive evaluation");
    assert!(canberra.value().is_nan());
}

#[rstest]
#[case(&[1.0, -2.0], &[-1.0, 2.0])]
#[case(&[-3.0], &[3.0])]
fn permissive_bray_curtis_of_opposite_vectors_is_infinite(
    #[case] left: &[f64],
    #[case] right: &[f64],
) {
    // A non-zero numerator over an absolute-value sum of +0.
    let d = permissive::bray_curtis_distance(left, right).expect("permissive evaluation");
    assert_eq!(d.value(), f64::INFINITY);
    assert!(matches!(
        bray_curtis_distance(left, right),
        Err(DistanceError::ZeroDenominator { index: None, .. })
    ));
}

#[test]
fn permissive_functions_follow_the_left_operand() {
    let d = permissive::manhattan_distance(&[0.0, 0.0], &[3.0, 4.0, 100.0])
        .expect("extra right components are ignored");
    assert_eq!(d.value(), 7.0);
    let error = permissive::manhattan_distance(&[0.0, 0.0, 0.0], &[3.0, 4.0])
        .expect_err("shorter right operand");
    assert_eq!(error, DistanceError::DimensionMismatch { left: 3, right: 2 });
}

#[test]
fn permissive_minkowski_accepts_sub_unit_exponents() {
    let strict = minkowski_distance(&[0.0, 0.0], &[1.0, 1.0], 0.5);
    assert!(strict.is_err());
    let d = permissive::minkowski_distance(&[0.0, 0.0], &[1.0, 1.0], 0.5)
        .expect("permissive evaluation");
    assert_close(d, 4.0, 1e-12);
}

#[test]
fn permissive_earth_distance_is_clamped_for_identical_points() {
    let point = [151.209_3, -33.868_8];
    let d = permissive::earth_distance(&point, &point).expect("permissive evaluation");
    assert!(!d.value().is_nan());
    assert!(d.value() < 1.0);
}
