//! Dynamic metric selection.
//!
//! [`Metric`] names one of the built-in distance functions together with its
//! parameters, so a clustering algorithm can be configured by value or by
//! name and evaluate the chosen function once per point pair.

use std::{fmt, str::FromStr, sync::Arc};

use crate::{
    distance::{self, Distance, EARTH_RADIUS_METRES, Exponent, ValidationMode, permissive},
    error::{DistanceError, Result},
};

/// Built-in distance functions.
///
/// # Examples
/// ```
/// use kyori_core::Metric;
///
/// let metric: Metric = "manhattan".parse()?;
/// assert_eq!(metric, Metric::Manhattan);
/// assert_eq!(metric.distance(&[0.0, 0.0], &[3.0, 4.0])?.value(), 7.0);
///
/// let weighted = Metric::weighted_minkowski(2.0, vec![1.0, 1.0]);
/// assert!((weighted.distance(&[0.0, 0.0], &[3.0, 4.0])?.value() - 5.0).abs() < 1e-12);
/// # Ok::<(), kyori_core::DistanceError>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Metric {
    /// Sum of absolute differences (L1).
    Manhattan,
    /// Straight-line distance (L2).
    Euclidean,
    /// Sum of squared differences; cheaper than [`Metric::Euclidean`] but not
    /// a true metric.
    SquaredEuclidean,
    /// General Lp distance with exponent `p`.
    Minkowski(f64),
    /// Lp distance with per-dimension weights.
    WeightedMinkowski {
        /// Exponent of the Lp norm.
        p: f64,
        /// Per-dimension weights, aligned with the compared vectors.
        weights: Arc<[f64]>,
    },
    /// Largest per-dimension difference (L∞).
    Chebyshev,
    /// Number of differing dimensions.
    Hamming,
    /// Bray–Curtis dissimilarity.
    BrayCurtis,
    /// Canberra distance.
    Canberra,
    /// Great-circle distance between `[longitude, latitude]` pairs.
    Earth,
}

impl Metric {
    /// Builds a [`Metric::WeightedMinkowski`] from any owned weight container.
    #[must_use]
    pub fn weighted_minkowski(p: f64, weights: impl Into<Arc<[f64]>>) -> Self {
        Self::WeightedMinkowski {
            p,
            weights: weights.into(),
        }
    }

    /// Returns the stable lowercase identifier of the metric.
    ///
    /// # Examples
    /// ```
    /// use kyori_core::Metric;
    ///
    /// assert_eq!(Metric::Minkowski(3.0).name(), "minkowski");
    /// assert_eq!(Metric::BrayCurtis.name(), "bray_curtis");
    /// ```
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Manhattan => "manhattan",
            Self::Euclidean => "euclidean",
            Self::SquaredEuclidean => "squared_euclidean",
            Self::Minkowski(_) => "minkowski",
            Self::WeightedMinkowski { .. } => "weighted_minkowski",
            Self::Chebyshev => "chebyshev",
            Self::Hamming => "hamming",
            Self::BrayCurtis => "bray_curtis",
            Self::Canberra => "canberra",
            Self::Earth => "earth",
        }
    }

    /// Reports whether the function satisfies the metric axioms.
    ///
    /// Squared Euclidean and Bray–Curtis break the triangle inequality,
    /// Minkowski does when `p < 1`, and a zero weight collapses distinct
    /// points in weighted Minkowski.
    ///
    /// # Examples
    /// ```
    /// use kyori_core::Metric;
    ///
    /// assert!(Metric::Euclidean.is_metric());
    /// assert!(!Metric::SquaredEuclidean.is_metric());
    /// assert!(!Metric::weighted_minkowski(2.0, vec![1.0, 0.0]).is_metric());
    /// ```
    #[must_use]
    pub fn is_metric(&self) -> bool {
        match self {
            Self::SquaredEuclidean | Self::BrayCurtis => false,
            Self::Minkowski(p) => Exponent::new(*p).is_ok(),
            Self::WeightedMinkowski { p, weights } => {
                Exponent::new(*p).is_ok() && weights.iter().all(|&w| w.is_finite() && w > 0.0)
            }
            Self::Manhattan
            | Self::Euclidean
            | Self::Chebyshev
            | Self::Hamming
            | Self::Canberra
            | Self::Earth => true,
        }
    }

    /// Checks the metric's own parameters against the strict rules.
    ///
    /// # Errors
    ///
    /// Returns [`DistanceError::InvalidExponent`] for an exponent that is not
    /// a finite value `>= 1`, and [`DistanceError::NonFinite`] or
    /// [`DistanceError::NegativeWeight`] for invalid weights.
    pub fn validate(&self) -> Result<()> {
        match self {
            Self::Minkowski(p) => Exponent::new(*p).map(|_| ()),
            Self::WeightedMinkowski { p, weights } => {
                Exponent::new(*p)?;
                distance::validate_weight_values(weights)
            }
            _ => Ok(()),
        }
    }

    /// Computes the distance between `left` and `right` in strict mode.
    ///
    /// # Errors
    ///
    /// Returns whatever the underlying strict routine reports.
    pub fn distance(&self, left: &[f64], right: &[f64]) -> Result<Distance> {
        self.distance_with_mode(ValidationMode::Strict, left, right)
    }

    /// Computes the distance between `left` and `right` in the given mode.
    ///
    /// # Examples
    /// ```
    /// use kyori_core::{Metric, ValidationMode};
    ///
    /// let metric = Metric::Canberra;
    /// assert!(metric.distance_with_mode(ValidationMode::Strict, &[0.0], &[0.0]).is_err());
    /// let unchecked = metric.distance_with_mode(ValidationMode::Permissive, &[0.0], &[0.0])?;
    /// assert!(unchecked.value().is_nan());
    /// # Ok::<(), kyori_core::DistanceError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns whatever the underlying routine reports in `mode`.
    pub fn distance_with_mode(
        &self,
        mode: ValidationMode,
        left: &[f64],
        right: &[f64],
    ) -> Result<Distance> {
        self.evaluate(mode, EARTH_RADIUS_METRES, left, right)
    }

    pub(crate) fn evaluate(
        &self,
        mode: ValidationMode,
        earth_radius: f64,
        left: &[f64],
        right: &[f64],
    ) -> Result<Distance> {
        match mode {
            ValidationMode::Strict => self.evaluate_strict(earth_radius, left, right),
            ValidationMode::Permissive => self.evaluate_permissive(earth_radius, left, right),
        }
    }

    fn evaluate_strict(&self, earth_radius: f64, left: &[f64], right: &[f64]) -> Result<Distance> {
        match self {
            Self::Manhattan => distance::manhattan_distance(left, right),
            Self::Euclidean => distance::euclidean_distance(left, right),
            Self::SquaredEuclidean => distance::squared_euclidean_distance(left, right),
            Self::Minkowski(p) => distance::minkowski_distance(left, right, *p),
            Self::WeightedMinkowski { p, weights } => {
                distance::weighted_minkowski_distance(left, right, weights, *p)
            }
            Self::Chebyshev => distance::chebyshev_distance(left, right),
            Self::Hamming => distance::hamming_distance(left, right),
            Self::BrayCurtis => distance::bray_curtis_distance(left, right),
            Self::Canberra => distance::canberra_distance(left, right),
            Self::Earth => distance::earth_distance_with_radius(left, right, earth_radius),
        }
    }

    fn evaluate_permissive(
        &self,
        earth_radius: f64,
        left: &[f64],
        right: &[f64],
    ) -> Result<Distance> {
        match self {
            Self::Manhattan => permissive::manhattan_distance(left, right),
            Self::Euclidean => permissive::euclidean_distance(left, right),
            Self::SquaredEuclidean => permissive::squared_euclidean_distance(left, right),
            Self::Minkowski(p) => permissive::minkowski_distance(left, right, *p),
            Self::WeightedMinkowski { p, weights } => {
                permissive::weighted_minkowski_distance(left, right, weights, *p)
            }
            Self::Chebyshev => permissive::chebyshev_distance(left, right),
            Self::Hamming => permissive::hamming_distance(left, right),
            Self::BrayCurtis => permissive::bray_curtis_distance(left, right),
            Self::Canberra => permissive::canberra_distance(left, right),
            Self::Earth => permissive::earth_distance_with_radius(left, right, earth_radius),
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Minkowski(p) => write!(f, "minkowski(p={p})"),
            Self::WeightedMinkowski { p, weights } => {
                write!(f, "weighted_minkowski(p={p}, dims={})", weights.len())
            }
            other => f.write_str(other.name()),
        }
    }
}

impl FromStr for Metric {
    type Err = DistanceError;

    /// Parses a parameter-free metric by name.
    ///
    /// Matching ignores ASCII case and surrounding whitespace and treats `-`
    /// and `_` alike, so `"Bray-Curtis"` selects [`Metric::BrayCurtis`].
    /// Conventional aliases such as `l1`, `l2`, `linf` and `great_circle`
    /// are accepted too.
    fn from_str(raw: &str) -> Result<Self> {
        let normalised = raw.trim().to_ascii_lowercase().replace('-', "_");
        match normalised.as_str() {
            "manhattan" | "cityblock" | "l1" => Ok(Self::Manhattan),
            "euclidean" | "l2" => Ok(Self::Euclidean),
            "squared_euclidean" | "sqeuclidean" => Ok(Self::SquaredEuclidean),
            "chebyshev" | "linf" => Ok(Self::Chebyshev),
            "hamming" => Ok(Self::Hamming),
            "bray_curtis" | "braycurtis" => Ok(Self::BrayCurtis),
            "canberra" => Ok(Self::Canberra),
            "earth" | "great_circle" => Ok(Self::Earth),
            "minkowski" | "weighted_minkowski" => Err(DistanceError::MissingParameter {
                name: raw.trim().to_owned(),
            }),
            _ => Err(DistanceError::UnknownMetric {
                name: raw.trim().to_owned(),
            }),
        }
    }
}
