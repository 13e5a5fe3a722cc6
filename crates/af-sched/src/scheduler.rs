//! The `CongestionScheduler` and its turn loop.

use tracing::{debug, trace};

use af_core::{AgentId, SchedulePolicy, Turn};
use af_graph::Graph;
use af_select::PathSet;

use crate::{
    AgentStore, Move, Occupancy, Schedule, ScheduleError, ScheduleResult, TurnObserver,
    TurnRecord,
};

// ── CongestionScheduler ───────────────────────────────────────────────────────

/// Moves ants from start to end along one [`PathSet`].
///
/// The scheduler itself is immutable; every call to [`run`](Self::run)
/// builds fresh ant and occupancy state, so one scheduler can be run many
/// times with different ant counts.
pub struct CongestionScheduler<'a> {
    graph:  &'a Graph,
    set:    &'a PathSet,
    policy: SchedulePolicy,
}

impl<'a> CongestionScheduler<'a> {
    pub fn new(graph: &'a Graph, set: &'a PathSet, policy: SchedulePolicy) -> Self {
        Self { graph, set, policy }
    }

    /// Run turns until all `agent_count` ants reached end.
    ///
    /// Calls observer hooks at every turn boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    ///
    /// # Errors
    ///
    /// - [`ScheduleError::InvalidAgentCount`] for zero ants.
    /// - [`ScheduleError::CapacityViolation`] if two ants would share a room.
    /// - [`ScheduleError::Stalled`] if a whole turn passes without a move.
    pub fn run<O: TurnObserver>(
        &self,
        agent_count: usize,
        observer:    &mut O,
    ) -> ScheduleResult<Schedule> {
        if agent_count == 0 {
            return Err(ScheduleError::InvalidAgentCount(agent_count));
        }

        let mut state = RunState::new(self, agent_count);
        observer.on_run_start(self.set, agent_count);

        let mut turns = Vec::new();
        let mut turn  = Turn::FIRST;
        while state.remaining > 0 {
            observer.on_turn_start(turn);
            let record = state.play_turn(turn)?;
            if record.is_empty() {
                return Err(ScheduleError::Stalled { turn, remaining: state.remaining });
            }
            observer.on_turn_end(turn, &record, &state.occupancy);
            turns.push(record);
            turn = turn.next();
        }

        debug!(
            paths = self.set.len(),
            agents = agent_count,
            turns = turns.len(),
            "schedule complete"
        );
        observer.on_run_end(turns.len());
        Ok(Schedule { turns })
    }
}

// ── Per-run state ─────────────────────────────────────────────────────────────

/// Everything one run mutates.  Never outlives [`CongestionScheduler::run`].
struct RunState<'s> {
    set:       &'s PathSet,
    policy:    SchedulePolicy,
    agents:    AgentStore,
    occupancy: Occupancy,
    /// Ants that have not left start yet.
    at_home:   usize,
    /// Ants that have not reached end yet.
    remaining: usize,
}

impl<'s> RunState<'s> {
    fn new(scheduler: &CongestionScheduler<'s>, agent_count: usize) -> Self {
        Self {
            set:       scheduler.set,
            policy:    scheduler.policy,
            agents:    AgentStore::new(scheduler.set, agent_count),
            occupancy: Occupancy::new(scheduler.graph),
            at_home:   agent_count,
            remaining: agent_count,
        }
    }

    /// Evaluate every ant once, in id order.
    fn play_turn(&mut self, turn: Turn) -> ScheduleResult<TurnRecord> {
        let mut record = TurnRecord::default();
        let lock_engaged = self.policy.direct_path_lock && self.set.len() > 1;
        let mut direct_taken = false;

        for i in 0..self.agents.count {
            if self.agents.arrived(i, self.set) {
                continue;
            }
            let locked  = lock_engaged && direct_taken;
            let current = self.agents.path[i];
            let next    = self.agents.pos[i] + 1;

            let target = if self.can_enter(current, next, locked) {
                current
            } else {
                match self.reroute(i, locked) {
                    Some(q) => q,
                    None => continue,
                }
            };

            self.advance(i, target, turn, &mut record)?;
            if self.set.get(target).is_direct() {
                direct_taken = true;
            }
        }
        Ok(record)
    }

    /// May an ant step to position `idx` of path `p`?
    fn can_enter(&self, p: usize, idx: usize, locked: bool) -> bool {
        let path = self.set.get(p);
        !(locked && path.is_direct()) && self.occupancy.is_free(path.at(idx))
    }

    /// Another path of the set that ant `i` may switch to, if any.
    ///
    /// Only ants still at start may switch: paths share no room besides
    /// start and end, so a travelling ant has nowhere to go.
    fn reroute(&self, i: usize, locked: bool) -> Option<usize> {
        let reroute = self.policy.reroute;
        if !reroute.enabled || self.agents.left_start[i] {
            return None;
        }
        let current     = self.agents.path[i];
        let current_len = self.set.get(current).len();
        let next        = self.agents.pos[i] + 1;

        (0..self.set.len())
            .filter(|&q| q != current)
            .filter(|&q| self.can_enter(q, next, locked))
            .find(|&q| {
                reroute.allows_switch(current_len, self.set.get(q).len(), self.at_home, self.set.len())
            })
            .inspect(|&q| {
                trace!(agent = %AgentId::from_index(i), from = current, to = q, "rerouted");
            })
    }

    /// Move ant `i` one room forward along path `target`.
    fn advance(
        &mut self,
        i:      usize,
        target: usize,
        turn:   Turn,
        record: &mut TurnRecord,
    ) -> ScheduleResult<()> {
        let agent = AgentId::from_index(i);
        let path  = self.set.get(target);
        let pos   = self.agents.pos[i];
        let (from, to) = (path.at(pos), path.at(pos + 1));

        self.occupancy.leave(from);
        self.occupancy.enter(to, agent, turn)?;

        self.agents.path[i] = target;
        self.agents.pos[i]  = pos + 1;
        if !self.agents.left_start[i] {
            self.agents.left_start[i] = true;
            self.at_home -= 1;
        }
        if self.agents.arrived(i, self.set) {
            self.remaining -= 1;
        }
        record.moves.push(Move { agent, to });
        Ok(())
    }
}
