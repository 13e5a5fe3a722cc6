//! Graph-subsystem error type.

use thiserror::Error;

use af_core::NodeId;

/// Errors produced by `af-graph`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    #[error("no path from {start} to {end}")]
    NoPath { start: String, end: String },

    #[error("room {0:?} defined more than once")]
    DuplicateNode(String),

    #[error("room {0:?} not found in graph")]
    NodeNameNotFound(String),

    #[error("node {0} not found in graph")]
    NodeNotFound(NodeId),

    #[error("no start room designated")]
    MissingStart,

    #[error("no end room designated")]
    MissingEnd,

    #[error("start and end are the same room {0:?}")]
    StartIsEnd(String),

    #[error("room {0:?} links to itself")]
    SelfLoop(String),

    #[error("link {0}-{1} defined more than once")]
    DuplicateEdge(String, String),
}

pub type GraphResult<T> = Result<T, GraphError>;
