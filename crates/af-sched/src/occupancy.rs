//! Room capacity tracking for one scheduler run.
//!
//! Start and end hold any number of ants and are never recorded.  Every
//! other room holds at most one.

use af_core::{AgentId, NodeId, Turn};
use af_graph::Graph;

use crate::{ScheduleError, ScheduleResult};

/// Which ant, if any, sits in each non-terminal room.  Indexed by `NodeId`.
#[derive(Debug, Clone)]
pub struct Occupancy {
    slots: Vec<Option<AgentId>>,
    start: NodeId,
    end:   NodeId,
    held:  usize,
}

impl Occupancy {
    /// All rooms empty.
    pub fn new(graph: &Graph) -> Self {
        Self {
            slots: vec![None; graph.node_count()],
            start: graph.start,
            end:   graph.end,
            held:  0,
        }
    }

    #[inline]
    pub fn is_terminal(&self, node: NodeId) -> bool {
        node == self.start || node == self.end
    }

    /// `true` if an ant may step into `node` right now.
    #[inline]
    pub fn is_free(&self, node: NodeId) -> bool {
        self.is_terminal(node) || self.slots[node.index()].is_none()
    }

    /// The ant holding `node`, if any.  Always `None` for terminals.
    #[inline]
    pub fn occupant(&self, node: NodeId) -> Option<AgentId> {
        self.slots[node.index()]
    }

    /// Number of non-terminal rooms currently held.
    #[inline]
    pub fn held(&self) -> usize {
        self.held
    }

    /// Record `agent` entering `node`.  No-op for terminals.
    ///
    /// # Errors
    ///
    /// [`ScheduleError::CapacityViolation`] if another ant holds `node`.
    pub fn enter(&mut self, node: NodeId, agent: AgentId, turn: Turn) -> ScheduleResult<()> {
        if self.is_terminal(node) {
            return Ok(());
        }
        match self.slots[node.index()] {
            Some(occupant) => Err(ScheduleError::CapacityViolation {
                turn,
                node,
                occupant,
                entering: agent,
            }),
            None => {
                self.slots[node.index()] = Some(agent);
                self.held += 1;
                Ok(())
            }
        }
    }

    /// Record whoever holds `node` leaving it.  No-op for terminals.
    pub fn leave(&mut self, node: NodeId) {
        if self.is_terminal(node) {
            return;
        }
        if self.slots[node.index()].take().is_some() {
            self.held -= 1;
        }
    }
}
