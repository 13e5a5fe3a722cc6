use af_core::{AgentId, NodeId, Turn};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("agent count must be positive, got {0}")]
    InvalidAgentCount(usize),

    /// Never expected; signals a scheduler logic defect.
    #[error("{turn}: ant {entering} entered {node} already held by ant {occupant}")]
    CapacityViolation {
        turn:     Turn,
        node:     NodeId,
        occupant: AgentId,
        entering: AgentId,
    },

    #[error("{turn}: no ant could move, {remaining} still travelling")]
    Stalled { turn: Turn, remaining: usize },
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;
