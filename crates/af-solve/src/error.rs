use af_graph::GraphError;
use af_sched::ScheduleError;
use af_select::SelectError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SolveError {
    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error(transparent)]
    Select(#[from] SelectError),

    #[error(transparent)]
    Schedule(#[from] ScheduleError),
}

pub type SolveResult<T> = Result<T, SolveError>;
