use thiserror::Error;

use af_core::NodeId;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectError {
    #[error("a path set needs at least one path")]
    Empty,

    #[error("paths {first} and {second} both pass through {node}")]
    Overlap {
        first:  usize,
        second: usize,
        node:   NodeId,
    },

    /// Cardinality 1 is always constructible, so this signals a logic defect.
    #[error("no feasible path set of any size")]
    NoFeasiblePathSet,
}

pub type SelectResult<T> = Result<T, SelectError>;
