//! Error types for shape-editing operations.
//!
//! Everything here is locally recoverable: the interaction loop logs these
//! errors and skips the offending operation, it never unwinds.

use thiserror::Error;

use crate::shape::ShapeKind;

/// Errors raised by shape and collection operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ShapeError {
    /// A shape has the wrong number of points for its kind.
    #[error("invalid {kind:?} shape: expected {expected} points, found {found}")]
    InvalidPointCount {
        /// The shape kind being validated
        kind: ShapeKind,
        /// Human-readable expected cardinality
        expected: &'static str,
        /// The actual number of points
        found: usize,
    },

    /// A structural edit referenced a point index that does not exist.
    #[error("point index {index} out of range (shape has {len} points)")]
    IndexOutOfRange {
        /// The offending index
        index: usize,
        /// Number of points in the shape
        len: usize,
    },

    /// A group move/rotate mixed rotation and non-rotation shapes.
    #[error("cannot move rotation and non-rotation shapes together")]
    MixedShapeKinds,
}

impl ShapeError {
    /// Create an invalid point count error.
    pub fn invalid_point_count(kind: ShapeKind, expected: &'static str, found: usize) -> Self {
        Self::InvalidPointCount {
            kind,
            expected,
            found,
        }
    }

    /// Create an out-of-range index error.
    pub fn index_out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }
}
