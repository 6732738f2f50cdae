//! Domain primitives shared by the distance routines.

use core::{fmt, ops::Deref};

use crate::error::{DistanceError, Result, VectorKind};

/// Selects how much validation a distance routine performs.
///
/// # Examples
/// ```
/// use kyori_core::ValidationMode;
///
/// assert_eq!(ValidationMode::default(), ValidationMode::Strict);
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum ValidationMode {
    /// Reject malformed shapes, invalid parameters and degenerate arithmetic.
    #[default]
    Strict,
    /// Reproduce the unchecked formulas, letting NaN and infinities through.
    Permissive,
}

impl fmt::Display for ValidationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Strict => f.write_str("strict"),
            Self::Permissive => f.write_str("permissive"),
        }
    }
}

/// Vector newtype that validates dimensionality and finiteness on construction.
#[derive(Clone, Copy, Debug)]
pub struct Vector<'a>(&'a [f64]);

impl<'a> Vector<'a> {
    /// Validates and constructs a [`Vector`].
    ///
    /// # Errors
    ///
    /// Returns [`DistanceError::ZeroLength`] when the slice is empty and
    /// [`DistanceError::NonFinite`] when a value is NaN or infinite.
    pub fn new(values: &'a [f64], which: VectorKind) -> Result<Self> {
        if values.is_empty() {
            return Err(DistanceError::ZeroLength);
        }

        if let Some((index, value)) = values.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(DistanceError::NonFinite {
                which,
                index,
                value: *value,
            });
        }

        Ok(Self(values))
    }

    /// Returns the dimensionality of the vector.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.0.len()
    }
}

impl AsRef<[f64]> for Vector<'_> {
    fn as_ref(&self) -> &[f64] {
        self.0
    }
}

impl Deref for Vector<'_> {
    type Target = [f64];

    fn deref(&self) -> &Self::Target {
        self.0
    }
}

/// Validated Lp exponent: finite and at least one.
///
/// # Examples
/// ```
/// use kyori_core::Exponent;
///
/// assert!(Exponent::new(3.0).is_ok());
/// assert!(Exponent::new(0.5).is_err());
/// assert!(Exponent::new(f64::INFINITY).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Exponent(f64);

impl Exponent {
    /// Validates an exponent.
    ///
    /// # Errors
    ///
    /// Returns [`DistanceError::InvalidExponent`] when `p` is NaN, infinite
    /// or below one.
    pub fn new(p: f64) -> Result<Self> {
        if p.is_finite() && p >= 1.0 {
            Ok(Self(p))
        } else {
            Err(DistanceError::InvalidExponent { p })
        }
    }

    /// Returns the exponent value.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl Deref for Exponent {
    type Target = f64;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Validated weight vector for weighted Minkowski distance.
#[derive(Clone, Copy, Debug)]
pub struct Weights<'a>(&'a [f64]);

impl<'a> Weights<'a> {
    /// Validates weights against the feature dimension.
    ///
    /// # Errors
    ///
    /// Returns [`DistanceError::WeightsMismatch`] when the length differs from
    /// `dimension`, [`DistanceError::NonFinite`] for NaN or infinite weights
    /// and [`DistanceError::NegativeWeight`] for negative ones.
    pub fn new(values: &'a [f64], dimension: usize) -> Result<Self> {
        if values.len() != dimension {
            return Err(DistanceError::WeightsMismatch {
                dimension,
                weights: values.len(),
            });
        }
        validate_weight_values(values)?;
        Ok(Self(values))
    }
}

impl Deref for Weights<'_> {
    type Target = [f64];

    fn deref(&self) -> &Self::Target {
        self.0
    }
}

/// Checks weights are finite and non-negative regardless of dimension.
pub(crate) fn validate_weight_values(values: &[f64]) -> Result<()> {
    for (index, &value) in values.iter().enumerate() {
        if !value.is_finite() {
            return Err(DistanceError::NonFinite {
                which: VectorKind::Weights,
                index,
                value,
            });
        }
        if value < 0.0 {
            return Err(DistanceError::NegativeWeight { index, value });
        }
    }
    Ok(())
}

/// Distance result newtype.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Distance(f64);

impl Distance {
    pub(crate) fn from_raw(value: f64) -> Self {
        Self(value)
    }

    /// Returns the raw distance value.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Returns whether the distance is neither NaN nor infinite.
    ///
    /// Strict evaluation of an unbounded metric can still overflow to
    /// infinity on huge inputs. NaN only arises in permissive mode.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }
}

impl Deref for Distance {
    type Target = f64;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<Distance> for f64 {
    fn from(distance: Distance) -> Self {
        distance.0
    }
}
