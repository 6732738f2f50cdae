//! Error types for the kyori distance library.
//!
//! Defines the error enum exposed by the public API, its stable codes, the
//! coarse [`ErrorKind`] taxonomy and a convenient result alias.

use std::fmt;

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Identifies which argument produced a validation error.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum VectorKind {
    /// Value originating from the first argument.
    Left,
    /// Value originating from the second argument.
    Right,
    /// Value originating from the weight vector.
    Weights,
}

impl fmt::Display for VectorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => f.write_str("left"),
            Self::Right => f.write_str("right"),
            Self::Weights => f.write_str("weights"),
        }
    }
}

/// Geographic axis of an `[longitude, latitude]` pair.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Axis {
    /// Longitude in degrees, valid within `[-180, 180]`.
    Longitude,
    /// Latitude in degrees, valid within `[-90, 90]`.
    Latitude,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Longitude => f.write_str("longitude"),
            Self::Latitude => f.write_str("latitude"),
        }
    }
}

/// Coarse classification of a [`DistanceError`].
///
/// Callers that only need to know whether the inputs were malformed, a
/// parameter was out of range, or the arithmetic degenerated can match on
/// this instead of the individual variants.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ErrorKind {
    /// Vector shapes did not line up.
    DimensionMismatch,
    /// An exponent, weight, coordinate, radius or metric name was invalid.
    InvalidParameter,
    /// Inputs were well-formed but the formula degenerates on them.
    DegenerateInput,
}

/// Errors emitted while computing distances.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum DistanceError {
    /// Either input vector had zero length.
    #[error("vectors must have positive dimension")]
    ZeroLength,
    /// Input vectors had different lengths.
    #[error("dimension mismatch: left={left}, right={right}")]
    DimensionMismatch {
        /// Dimensionality of the left-hand vector.
        left: usize,
        /// Dimensionality of the right-hand vector.
        right: usize,
    },
    /// The weight vector did not match the feature dimension.
    #[error("weight vector has {weights} entries but vectors have dimension {dimension}")]
    WeightsMismatch {
        /// Dimensionality of the feature vectors.
        dimension: usize,
        /// Number of supplied weights.
        weights: usize,
    },
    /// Encountered a non-finite value in one of the inputs.
    #[error("{which} vector contains a non-finite value at index {index}: {value}")]
    NonFinite {
        /// Argument that held the offending value.
        which: VectorKind,
        /// Position of the offending value.
        index: usize,
        /// The offending value.
        value: f64,
    },
    /// Lp exponents must be finite and at least one.
    #[error("exponent must be finite and >= 1 (got {p})")]
    InvalidExponent {
        /// The rejected exponent.
        p: f64,
    },
    /// Weights must be non-negative.
    #[error("weight at index {index} must be non-negative (got {value})")]
    NegativeWeight {
        /// Position of the negative weight.
        index: usize,
        /// The negative weight.
        value: f64,
    },
    /// A ratio metric divided by zero.
    #[error("{metric} denominator is zero{}", denominator_site(.index))]
    ZeroDenominator {
        /// Name of the metric that degenerated.
        metric: &'static str,
        /// Dimension whose term degenerated, when the metric is per-term.
        index: Option<usize>,
    },
    /// Finite inputs produced an intermediate sum beyond the `f64` range.
    #[error("{metric} sums overflow the f64 range")]
    Overflow {
        /// Name of the metric that overflowed.
        metric: &'static str,
    },
    /// Earth distance expects `[longitude, latitude]` pairs.
    #[error("{which} vector must be a [longitude, latitude] pair (got dimension {dimension})")]
    NotGeographic {
        /// Argument with the wrong shape.
        which: VectorKind,
        /// Dimension that was supplied.
        dimension: usize,
    },
    /// A coordinate fell outside its valid range.
    #[error("{which} {axis} {value} is out of range")]
    CoordinateOutOfRange {
        /// Argument holding the coordinate.
        which: VectorKind,
        /// Axis of the coordinate.
        axis: Axis,
        /// The rejected coordinate.
        value: f64,
    },
    /// Sphere radii must be finite and strictly positive.
    #[error("sphere radius must be finite and positive (got {radius})")]
    InvalidRadius {
        /// The rejected radius.
        radius: f64,
    },
    /// No metric is registered under the requested name.
    #[error("unknown metric `{name}`")]
    UnknownMetric {
        /// Name supplied by the caller.
        name: String,
    },
    /// The named metric needs parameters that a bare name cannot carry.
    #[error("metric `{name}` requires an exponent and cannot be parsed from its name alone")]
    MissingParameter {
        /// Name supplied by the caller.
        name: String,
    },
}

struct DenominatorSite(Option<usize>);

fn denominator_site(index: &Option<usize>) -> DenominatorSite {
    DenominatorSite(*index)
}

impl fmt::Display for DenominatorSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(index) => write!(f, " at index {index}"),
            None => Ok(()),
        }
    }
}

define_error_codes! {
    /// Stable codes describing [`DistanceError`] variants.
    enum DistanceErrorCode for DistanceError {
        /// Either input vector had zero length.
        ZeroLength => ZeroLength => "DISTANCE_ZERO_LENGTH",
        /// Input vectors had different lengths.
        DimensionMismatch => DimensionMismatch { .. } => "DISTANCE_DIMENSION_MISMATCH",
        /// The weight vector did not match the feature dimension.
        WeightsMismatch => WeightsMismatch { .. } => "DISTANCE_WEIGHTS_MISMATCH",
        /// Encountered a non-finite value in one of the inputs.
        NonFinite => NonFinite { .. } => "DISTANCE_NON_FINITE",
        /// Lp exponents must be finite and at least one.
        InvalidExponent => InvalidExponent { .. } => "DISTANCE_INVALID_EXPONENT",
        /// Weights must be non-negative.
        NegativeWeight => NegativeWeight { .. } => "DISTANCE_NEGATIVE_WEIGHT",
        /// A ratio metric divided by zero.
        ZeroDenominator => ZeroDenominator { .. } => "DISTANCE_ZERO_DENOMINATOR",
        /// Finite inputs produced an intermediate sum beyond the `f64` range.
        Overflow => Overflow { .. } => "DISTANCE_OVERFLOW",
        /// Earth distance expects `[longitude, latitude]` pairs.
        NotGeographic => NotGeographic { .. } => "DISTANCE_NOT_GEOGRAPHIC",
        /// A coordinate fell outside its valid range.
        CoordinateOutOfRange => CoordinateOutOfRange { .. } => "DISTANCE_COORDINATE_OUT_OF_RANGE",
        /// Sphere radii must be finite and strictly positive.
        InvalidRadius => InvalidRadius { .. } => "DISTANCE_INVALID_RADIUS",
        /// No metric is registered under the requested name.
        UnknownMetric => UnknownMetric { .. } => "DISTANCE_UNKNOWN_METRIC",
        /// The named metric needs parameters that a bare name cannot carry.
        MissingParameter => MissingParameter { .. } => "DISTANCE_MISSING_PARAMETER",
    }
}

impl DistanceError {
    /// Classifies this error into the coarse [`ErrorKind`] taxonomy.
    ///
    /// # Examples
    /// ```
    /// use kyori_core::{DistanceError, ErrorKind};
    ///
    /// let error = DistanceError::InvalidExponent { p: 0.5 };
    /// assert_eq!(error.kind(), ErrorKind::InvalidParameter);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::ZeroLength
            | Self::DimensionMismatch { .. }
            | Self::WeightsMismatch { .. }
            | Self::NotGeographic { .. } => ErrorKind::DimensionMismatch,
            Self::InvalidExponent { .. }
            | Self::NegativeWeight { .. }
            | Self::CoordinateOutOfRange { .. }
            | Self::InvalidRadius { .. }
            | Self::UnknownMetric { .. }
            | Self::MissingParameter { .. } => ErrorKind::InvalidParameter,
            Self::NonFinite { .. } | Self::ZeroDenominator { .. } | Self::Overflow { .. } => {
                ErrorKind::DegenerateInput
            }
        }
    }
}

/// Convenient alias for distance computations.
pub type Result<T> = core::result::Result<T, DistanceError>;
