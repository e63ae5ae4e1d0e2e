//! Failure conditions of the per-object geometry pipeline.
//!
//! All of them are local to one object: a batch caller reports the failure
//! and moves on to the next object.

use std::fmt;

/// Errors surfaced while deriving an object's oriented geometry.
#[derive(Clone, Debug, PartialEq)]
pub enum GeometryError {
    /// No points (or no contours) were supplied.
    EmptyInput,
    /// Fewer than three distinct non-collinear points; no positive-area rectangle exists.
    DegenerateGeometry { reason: String },
    /// A point carries a NaN or infinite coordinate.
    NonFinitePoint { index: usize },
    /// A marker dimension or offset is not a finite positive number.
    InvalidMarker { reason: String },
}

impl GeometryError {
    pub(crate) fn degenerate(reason: impl Into<String>) -> Self {
        Self::DegenerateGeometry {
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_marker(reason: impl Into<String>) -> Self {
        Self::InvalidMarker {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "empty input: no points to fit"),
            Self::DegenerateGeometry { reason } => write!(f, "degenerate geometry: {reason}"),
            Self::NonFinitePoint { index } => {
                write!(f, "point {index} has a non-finite coordinate")
            }
            Self::InvalidMarker { reason } => write!(f, "invalid marker spec: {reason}"),
        }
    }
}

impl std::error::Error for GeometryError {}
