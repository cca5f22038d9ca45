//! Error types for grid construction, endpoint validation and path stacks.

use crate::grid::Coordinate;
use std::fmt;
use thiserror::Error;

/// Why an entry or exit coordinate was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CoordinateFault {
    /// The coordinate lies outside the grid.
    OutOfBounds,
    /// The coordinate names a wall cell.
    OnWall,
}

impl fmt::Display for CoordinateFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordinateFault::OutOfBounds => write!(f, "out of bounds"),
            CoordinateFault::OnWall => write!(f, "on a wall"),
        }
    }
}

/// Error type for every fallible operation in the crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MazeError {
    /// `pop` was called on a stack with no elements.
    #[error("cannot pop from an empty path stack")]
    EmptyStack,
    /// The grid is empty, ragged, or contains an unrecognized cell tag.
    #[error("malformed grid: {0}")]
    MalformedGrid(String),
    /// An entry or exit coordinate is off-grid or on a wall.
    #[error("invalid coordinate {coord}: {fault}")]
    InvalidCoordinate {
        coord: Coordinate,
        fault: CoordinateFault,
    },
}
