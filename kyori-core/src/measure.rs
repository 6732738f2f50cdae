//! Configured distance measures for clustering algorithms.
//!
//! A [`Measure`] binds a [`Metric`] to a [`ValidationMode`] and the sphere
//! radius used by the great-circle metric. Algorithms stay generic over the
//! [`PairwiseDistance`] trait and receive a measure from the caller.

use tracing::{debug, instrument, warn};

use crate::{
    distance::{Distance, EARTH_RADIUS_METRES, ValidationMode, validate_radius},
    error::Result,
    metric::Metric,
};

/// A distance function evaluated once per point pair.
///
/// # Examples
/// ```
/// use kyori_core::{Distance, DistanceError, Metric, PairwiseDistance};
///
/// fn nearest<D: PairwiseDistance>(
///     measure: &D,
///     point: &[f64],
///     centroids: &[Vec<f64>],
/// ) -> Result<Option<usize>, DistanceError> {
///     let mut best: Option<(usize, Distance)> = None;
///     for (index, centroid) in centroids.iter().enumerate() {
///         let d = measure.distance(point, centroid)?;
///         if best.is_none_or(|(_, current)| d < current) {
///             best = Some((index, d));
///         }
///     }
///     Ok(best.map(|(index, _)| index))
/// }
///
/// let centroids = vec![vec![0.0, 0.0], vec![10.0, 10.0]];
/// assert_eq!(nearest(&Metric::Euclidean, &[9.0, 8.0], &centroids)?, Some(1));
/// # Ok::<(), DistanceError>(())
/// ```
pub trait PairwiseDistance {
    /// Computes the distance between two points.
    ///
    /// # Errors
    /// Returns a [`crate::DistanceError`] when the inputs are rejected.
    fn distance(&self, left: &[f64], right: &[f64]) -> Result<Distance>;
}

impl PairwiseDistance for Metric {
    fn distance(&self, left: &[f64], right: &[f64]) -> Result<Distance> {
        Self::distance(self, left, right)
    }
}

/// A metric together with its evaluation settings.
///
/// # Examples
/// ```
/// use kyori_core::{MeasureBuilder, Metric, ValidationMode};
///
/// let measure = MeasureBuilder::new()
///     .with_metric(Metric::Chebyshev)
///     .build()
///     .expect("configuration is valid");
/// assert_eq!(measure.mode(), ValidationMode::Strict);
/// assert_eq!(measure.distance(&[1.0, 2.0, 3.0], &[4.0, 2.0, 0.0])?.value(), 3.0);
/// # Ok::<(), kyori_core::DistanceError>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Measure {
    metric: Metric,
    mode: ValidationMode,
    earth_radius: f64,
}

impl Measure {
    /// Returns the configured metric.
    #[must_use]
    pub fn metric(&self) -> &Metric {
        &self.metric
    }

    /// Returns the validation mode used for every evaluation.
    #[must_use]
    pub fn mode(&self) -> ValidationMode {
        self.mode
    }

    /// Returns the sphere radius used by [`Metric::Earth`].
    #[must_use]
    pub fn earth_radius(&self) -> f64 {
        self.earth_radius
    }

    /// Computes the distance between two points with the configured metric.
    ///
    /// A non-finite result, which only permissive evaluation or arithmetic
    /// overflow can produce, is returned unchanged and logged at `warn`.
    ///
    /// # Errors
    /// Returns whatever the configured metric reports in the configured mode.
    #[instrument(
        name = "distance.measure",
        level = "trace",
        err(level = "debug"),
        skip(self, left, right),
        fields(metric = self.metric.name(), mode = %self.mode, dimension = left.len()),
    )]
    pub fn distance(&self, left: &[f64], right: &[f64]) -> Result<Distance> {
        let distance = self
            .metric
            .evaluate(self.mode, self.earth_radius, left, right)?;
        if !distance.is_finite() {
            warn!(
                metric = self.metric.name(),
                value = %distance,
                "distance evaluated to a non-finite value"
            );
        }
        Ok(distance)
    }
}

impl PairwiseDistance for Measure {
    fn distance(&self, left: &[f64], right: &[f64]) -> Result<Distance> {
        Self::distance(self, left, right)
    }
}

/// Configures and constructs [`Measure`] instances.
///
/// # Examples
/// ```
/// use kyori_core::{MeasureBuilder, Metric, ValidationMode};
///
/// let measure = MeasureBuilder::new()
///     .with_metric(Metric::Minkowski(0.5))
///     .with_mode(ValidationMode::Permissive)
///     .build()
///     .expect("permissive mode accepts any exponent");
/// assert_eq!(measure.metric(), &Metric::Minkowski(0.5));
///
/// let strict = MeasureBuilder::new()
///     .with_metric(Metric::Minkowski(0.5))
///     .build();
/// assert!(strict.is_err());
/// ```
#[derive(Debug, Clone)]
pub struct MeasureBuilder {
    metric: Metric,
    mode: ValidationMode,
    earth_radius: f64,
}

impl Default for MeasureBuilder {
    fn default() -> Self {
        Self {
            metric: Metric::Euclidean,
            mode: ValidationMode::Strict,
            earth_radius: EARTH_RADIUS_METRES,
        }
    }
}

impl MeasureBuilder {
    /// Creates a builder populated with default parameters.
    ///
    /// # Examples
    /// ```
    /// use kyori_core::{EARTH_RADIUS_METRES, MeasureBuilder, Metric, ValidationMode};
    ///
    /// let builder = MeasureBuilder::new();
    /// assert_eq!(builder.metric(), &Metric::Euclidean);
    /// assert_eq!(builder.mode(), ValidationMode::Strict);
    /// assert_eq!(builder.earth_radius(), EARTH_RADIUS_METRES);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects the metric to evaluate.
    #[must_use]
    pub fn with_metric(mut self, metric: Metric) -> Self {
        self.metric = metric;
        self
    }

    /// Returns the configured metric.
    #[must_use]
    pub fn metric(&self) -> &Metric {
        &self.metric
    }

    /// Selects strict or permissive evaluation.
    #[must_use]
    pub fn with_mode(mut self, mode: ValidationMode) -> Self {
        self.mode = mode;
        self
    }

    /// Returns the configured validation mode.
    #[must_use]
    pub fn mode(&self) -> ValidationMode {
        self.mode
    }

    /// Overrides the sphere radius used by [`Metric::Earth`].
    ///
    /// # Examples
    /// ```
    /// use kyori_core::{MeasureBuilder, Metric};
    ///
    /// let kilometres = MeasureBuilder::new()
    ///     .with_metric(Metric::Earth)
    ///     .with_earth_radius(6_371.0)
    ///     .build()
    ///     .expect("radius is positive");
    /// let d = kilometres.distance(&[0.0, 0.0], &[180.0, 0.0])?;
    /// assert!((d.value() - std::f64::consts::PI * 6_371.0).abs() < 1e-9);
    /// # Ok::<(), kyori_core::DistanceError>(())
    /// ```
    #[must_use]
    pub fn with_earth_radius(mut self, radius: f64) -> Self {
        self.earth_radius = radius;
        self
    }

    /// Returns the configured sphere radius.
    #[must_use]
    pub fn earth_radius(&self) -> f64 {
        self.earth_radius
    }

    /// Validates the configuration and constructs a [`Measure`].
    ///
    /// The sphere radius must be finite and positive in every mode. Strict
    /// mode additionally checks the metric's exponent and weights up front.
    ///
    /// # Errors
    /// Returns [`crate::DistanceError::InvalidRadius`] for a bad radius and
    /// the errors of [`Metric::validate`] in strict mode.
    pub fn build(self) -> Result<Measure> {
        let checked = validate_radius(self.earth_radius).and_then(|_| match self.mode {
            ValidationMode::Strict => self.metric.validate(),
            ValidationMode::Permissive => Ok(()),
        });
        if let Err(err) = checked {
            debug!(metric = %self.metric, mode = %self.mode, %err, "rejected measure configuration");
            return Err(err);
        }

        Ok(Measure {
            metric: self.metric,
            mode: self.mode,
            earth_radius: self.earth_radius,
        })
    }
}
