//! The `Solver` and the candidate comparison.

use tracing::{debug, info};

use af_core::SolverConfig;
use af_graph::{Graph, enumerate_paths};
use af_sched::{CongestionScheduler, NoopObserver, Schedule, ScheduleError, TurnObserver};
use af_select::{DisjointSetSelector, PathSet, SelectError};

use crate::SolveResult;

// ── Candidate / Solution ──────────────────────────────────────────────────────

/// Outcome of scheduling one path set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    /// Number of paths in the set.
    pub cardinality: usize,
    pub turns:       usize,
    pub moves:       usize,
}

impl Candidate {
    /// `true` if `self` finishes in fewer turns, or as many turns with fewer
    /// moves.
    #[inline]
    pub fn beats(&self, other: &Candidate) -> bool {
        (self.turns, self.moves) < (other.turns, other.moves)
    }
}

/// The winning schedule plus what was compared to find it.
#[derive(Debug, Clone)]
pub struct Solution {
    pub schedule: Schedule,

    /// The path set the winning schedule walks.
    pub path_set: PathSet,

    /// Every evaluated candidate, in evaluation order (largest set first).
    pub candidates: Vec<Candidate>,

    /// Index of the winner in `candidates`.
    pub chosen: usize,
}

impl Solution {
    pub fn winner(&self) -> &Candidate {
        &self.candidates[self.chosen]
    }
}

// ── Solver ────────────────────────────────────────────────────────────────────

/// Drives path enumeration, set selection, and scheduling for one graph.
pub struct Solver<'g> {
    graph:  &'g Graph,
    config: SolverConfig,
}

impl<'g> Solver<'g> {
    pub fn new(graph: &'g Graph, config: SolverConfig) -> Self {
        Self { graph, config }
    }

    /// Solve for `agent_count` ants without observing scheduler runs.
    pub fn solve(&self, agent_count: usize) -> SolveResult<Solution> {
        self.solve_with(agent_count, &mut NoopObserver)
    }

    /// Solve for `agent_count` ants, forwarding every scheduler run (one per
    /// feasible path set) to `observer`.
    ///
    /// # Errors
    ///
    /// - `Schedule(InvalidAgentCount)` for zero ants, before any search.
    /// - `Graph(NoPath)` if start and end are disconnected.
    /// - `Select(NoFeasiblePathSet)` if not even one path could be chosen.
    /// - Any scheduler error of any candidate run; no partial result.
    pub fn solve_with<O: TurnObserver>(
        &self,
        agent_count: usize,
        observer:    &mut O,
    ) -> SolveResult<Solution> {
        if agent_count == 0 {
            return Err(ScheduleError::InvalidAgentCount(agent_count).into());
        }

        let selector = DisjointSetSelector::new(enumerate_paths(self.graph)?);
        debug!(
            paths = selector.paths().len(),
            max_cardinality = selector.max_cardinality(),
            "searching path sets"
        );

        let mut candidates = Vec::new();
        let mut best: Option<(usize, Schedule, PathSet)> = None;

        for (k, set) in selector.candidates() {
            let schedule = CongestionScheduler::new(self.graph, &set, self.config.schedule)
                .run(agent_count, observer)?;
            let candidate = Candidate {
                cardinality: k,
                turns:       schedule.turn_count(),
                moves:       schedule.move_count(),
            };
            debug!(k, turns = candidate.turns, moves = candidate.moves, "candidate scheduled");

            let improves = match &best {
                None => true,
                Some((i, _, _)) => candidate.beats(&candidates[*i]),
            };
            candidates.push(candidate);
            if improves {
                best = Some((candidates.len() - 1, schedule, set));
            }
        }

        let (chosen, schedule, path_set) = best.ok_or(SelectError::NoFeasiblePathSet)?;
        info!(
            paths = path_set.len(),
            turns = schedule.turn_count(),
            moves = schedule.move_count(),
            "solution chosen"
        );
        Ok(Solution { schedule, path_set, candidates, chosen })
    }
}
