//! Per-run ant state stored as Structure-of-Arrays.
//!
//! Index `i` of every array belongs to ant `AgentId::from_index(i)`.  The
//! store is created fresh for each run and dropped with it.

use af_select::PathSet;

/// Path assignment and progress of every ant.
#[derive(Debug, Clone)]
pub struct AgentStore {
    pub count: usize,

    /// Index into the path set of each ant's current path.  Changes only
    /// when an ant still at start is rerouted.
    pub path: Vec<usize>,

    /// Position of each ant along its path (0 = start).  Never decreases.
    pub pos: Vec<usize>,

    /// `true` once the ant has made its first move.
    pub left_start: Vec<bool>,
}

impl AgentStore {
    /// `count` ants at start, assigned by [`assign_paths`].
    pub fn new(set: &PathSet, count: usize) -> Self {
        Self {
            count,
            path:       assign_paths(set, count),
            pos:        vec![0; count],
            left_start: vec![false; count],
        }
    }

    /// `true` if ant `i` stands on the last room of its path.
    #[inline]
    pub fn arrived(&self, i: usize, set: &PathSet) -> bool {
        self.pos[i] == set.get(self.path[i]).len() - 1
    }
}

/// Load-balanced initial assignment.
///
/// Each ant, in id order, takes the path minimizing `rooms + ants already
/// assigned`; ties go to the earliest path of the set, which is the shortest.
pub fn assign_paths(set: &PathSet, count: usize) -> Vec<usize> {
    let mut load = vec![0usize; set.len()];
    (0..count)
        .map(|_| {
            let best = (0..set.len())
                .min_by_key(|&j| set.get(j).len() + load[j])
                .unwrap_or(0);
            load[best] += 1;
            best
        })
        .collect()
}
