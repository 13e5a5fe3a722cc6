//! Error types for af-io.

use af_core::Coord;
use af_graph::GraphError;
use thiserror::Error;

use crate::Marker;

/// Errors raised while reading a farm description.
///
/// Variants tied to one input line carry its 1-based number.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("empty input")]
    Empty,

    #[error("line {line}: invalid number of ants {value:?}")]
    InvalidAgentCount { line: usize, value: String },

    #[error("no {} room", Marker::Start)]
    MissingStart,

    #[error("no {} room", Marker::End)]
    MissingEnd,

    #[error("line {line}: {marker} given more than once")]
    DuplicateMarker { line: usize, marker: Marker },

    #[error("line {line}: {marker} is not followed by a room")]
    DanglingMarker { line: usize, marker: Marker },

    #[error("line {line}: {reason}")]
    Malformed { line: usize, reason: String },

    #[error("line {line}: room {name:?} defined more than once")]
    DuplicateRoom { line: usize, name: String },

    #[error("line {line}: rooms {first:?} and {second:?} both sit at {coord}")]
    DuplicateCoordinates { line: usize, first: String, second: String, coord: Coord },

    #[error("line {line}: tunnel to unknown room {name:?}")]
    UnknownRoom { line: usize, name: String },

    #[error("line {line}: tunnel from room {name:?} to itself")]
    SelfLoop { line: usize, name: String },

    #[error("line {line}: tunnel {a}-{b} given more than once")]
    DuplicateTunnel { line: usize, a: String, b: String },

    #[error("a farm needs at least two rooms, found {0}")]
    NotEnoughRooms(usize),

    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// Alias for `Result<T, LoadError>`.
pub type LoadResult<T> = Result<T, LoadError>;

/// Errors raised while writing a turn trace.
#[derive(Debug, Error)]
pub enum PresentError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),
}

/// Alias for `Result<T, PresentError>`.
pub type PresentResult<T> = Result<T, PresentError>;
