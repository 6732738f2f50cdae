use kyori_core::Distance;

/// Asserts that `actual` lies within `tolerance` of `expected`.
#[track_caller]
pub fn assert_close(actual: Distance, expected: f64, tolerance: f64) {
    assert!(
        (actual.value() - expected).abs() <= tolerance,
        "expected {expected} within {tolerance}, got {actual}"
    );
}
