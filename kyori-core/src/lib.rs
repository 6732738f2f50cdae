//! Kyori core library.
//!
//! Distance functions used as pluggable similarity measures by clustering
//! algorithms. Every routine is pure: it borrows its inputs, returns a
//! [`Distance`] or a [`DistanceError`], and keeps no state between calls.
//!
//! Manhattan, Euclidean and Chebyshev are dedicated fast paths rather than
//! special cases of [`minkowski_distance`]. The top-level functions validate
//! their inputs; [`permissive`] offers the same formulas without numeric
//! guards. [`Metric`] selects a function at runtime and [`MeasureBuilder`]
//! configures a [`Measure`] for an algorithm to hold.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod distance;
mod error;
mod measure;
mod metric;

#[cfg(test)]
mod test_utils;

pub use crate::{
    distance::{
        Distance, EARTH_RADIUS_METRES, Exponent, ValidationMode, Vector, Weights,
        bray_curtis_distance, canberra_distance, chebyshev_distance, earth_distance,
        earth_distance_with_radius, euclidean_distance, hamming_distance, lp_norm,
        manhattan_distance, minkowski_distance, permissive, squared_euclidean_distance,
        weighted_minkowski_distance,
    },
    error::{Axis, DistanceError, DistanceErrorCode, ErrorKind, Result, VectorKind},
    measure::{Measure, MeasureBuilder, PairwiseDistance},
    metric::Metric,
};
