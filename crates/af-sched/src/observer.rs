//! Observer trait for progress reporting and data collection.

use af_core::Turn;
use af_select::PathSet;

use crate::{Occupancy, TurnRecord};

/// Callbacks invoked by [`CongestionScheduler::run`][crate::CongestionScheduler::run]
/// at key points in the turn loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example: move counter
///
/// ```rust
/// use af_core::Turn;
/// use af_sched::{Occupancy, TurnObserver, TurnRecord};
///
/// struct MoveCounter(usize);
///
/// impl TurnObserver for MoveCounter {
///     fn on_turn_end(&mut self, _turn: Turn, record: &TurnRecord, _occ: &Occupancy) {
///         self.0 += record.len();
///     }
/// }
/// ```
pub trait TurnObserver {
    /// Called once after ants are assigned, before the first turn.
    fn on_run_start(&mut self, _set: &PathSet, _agent_count: usize) {}

    /// Called at the very start of each turn.
    fn on_turn_start(&mut self, _turn: Turn) {}

    /// Called after every ant was evaluated, with the turn's moves and the
    /// occupancy they left behind.
    fn on_turn_end(&mut self, _turn: Turn, _record: &TurnRecord, _occupancy: &Occupancy) {}

    /// Called once after the last ant reached end.
    fn on_run_end(&mut self, _turns: usize) {}
}

/// A [`TurnObserver`] that does nothing.
pub struct NoopObserver;

impl TurnObserver for NoopObserver {}
