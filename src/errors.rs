//! Input-shape and allocation errors

use std::collections::TryReserveError;
use std::fmt::Display;

/// Result type alias for fallible winding and sampling operations.
pub type WindingResult<T> = Result<T, WindingError>;

/// All the ways a call can be rejected.
///
/// Geometric degeneracy (a vertex on the query point, an edge through it, a
/// triangle coplanar with it) is *not* represented here: it contributes a zero
/// sign and the computation carries on.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WindingError {
    /// (MalformedCoordinates) A flat coordinate slice is not a whole number of records
    MalformedCoordinates { len: usize, stride: usize },
    /// (EmptyMesh) A bounding box was needed but the mesh has no triangles
    EmptyMesh,
    /// (NoPoints) A point list was required to be non-empty
    NoPoints,
    /// (NonPositiveCount) A quasi-random draw count of zero
    NonPositiveCount,
    /// (UnsupportedDimension) The Halton prime table is too short for the requested dimension
    UnsupportedDimension { requested: usize, available: usize },
    /// (SequenceExhausted) The Halton index cannot advance past `u64::MAX`
    SequenceExhausted,
    /// (Reserve) The output buffer could not be sized
    Reserve(#[from] TryReserveError),
}

impl Display for WindingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WindingError::MalformedCoordinates { len, stride } => write!(f, "(MalformedCoordinates) {} coordinates is not a multiple of {}", len, stride),
            WindingError::EmptyMesh => write!(f, "(EmptyMesh) The mesh has no triangles, so it has no bounding box"),
            WindingError::NoPoints => write!(f, "(NoPoints) Number of points must be at least 1"),
            WindingError::NonPositiveCount => write!(f, "(NonPositiveCount) Number of Halton points must be positive"),
            WindingError::UnsupportedDimension { requested, available } => write!(f, "(UnsupportedDimension) Dimension {} requested but only {} primes are available", requested, available),
            WindingError::SequenceExhausted => write!(f, "(SequenceExhausted) Halton sequence index is at u64::MAX and cannot advance"),
            WindingError::Reserve(error) => write!(f, "(Reserve) Output buffer could not be allocated: {}", error),
        }
    }
}
