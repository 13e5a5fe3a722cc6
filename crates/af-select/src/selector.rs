//! Backtracking search for disjoint path sets.
//!
//! # Cardinality bound
//!
//! Every path enters `end` through one of end's neighbors, and two disjoint
//! paths cannot share that neighbor.  The number of distinct second-to-last
//! rooms therefore bounds the set size.  A direct start→end link is a path
//! of its own that uses none of those neighbors, so it adds one.
//!
//! # Acceptance rule
//!
//! A candidate joins the growing set when its interior shares no room with
//! the rooms already committed and its second room differs from every
//! chosen path's second room.

use rustc_hash::FxHashSet;
use tracing::{debug, error, trace};

use af_core::NodeId;
use af_graph::Path;

use crate::PathSet;

// ── DisjointSetSelector ───────────────────────────────────────────────────────

/// Finds, for a target size `k`, one set of `k` pairwise-disjoint paths.
pub struct DisjointSetSelector {
    /// All enumerated paths, shortest first, ties in discovery order.
    paths: Vec<Path>,
}

impl DisjointSetSelector {
    /// Sort `paths` (stable, by room count) and prepare for selection.
    pub fn new(mut paths: Vec<Path>) -> Self {
        paths.sort_by_key(Path::len);
        Self { paths }
    }

    /// The sorted path list.
    pub fn paths(&self) -> &[Path] {
        &self.paths
    }

    /// Upper bound on the size of any disjoint set.
    pub fn max_cardinality(&self) -> usize {
        let Some(shortest) = self.paths.first() else { return 0 };
        let exits: FxHashSet<NodeId> = self
            .paths
            .iter()
            .filter(|p| !p.is_direct())
            .map(Path::penultimate)
            .collect();
        exits.len() + usize::from(shortest.is_direct())
    }

    /// One set of exactly `k` disjoint paths, or `None` if the search finds
    /// none.
    ///
    /// `k == 1` returns the globally shortest path without searching.
    pub fn select(&self, k: usize) -> Option<PathSet> {
        if k == 0 || k > self.paths.len() {
            return None;
        }
        if k == 1 {
            return Some(PathSet::single(self.paths[0].clone()));
        }

        for anchor in 0..=(self.paths.len() - k) {
            let mut search = Search::new(&self.paths, k);
            search.push(anchor);
            if search.extend(anchor + 1) {
                trace!(k, anchor, chosen = ?search.chosen, "disjoint set found");
                let paths = search.chosen.iter().map(|&i| self.paths[i].clone()).collect();
                return checked_set(paths);
            }
        }
        debug!(k, "no disjoint set of this size");
        None
    }

    /// Every feasible set, from the largest bound down to a single path.
    pub fn candidates(&self) -> impl Iterator<Item = (usize, PathSet)> + '_ {
        (1..=self.max_cardinality())
            .rev()
            .filter_map(move |k| self.select(k).map(|set| (k, set)))
    }
}

/// Wrap the paths a search accepted.  An overlap means the search itself is
/// broken: debug builds panic, release builds log it and report no set.
pub(crate) fn checked_set(paths: Vec<Path>) -> Option<PathSet> {
    match PathSet::new(paths) {
        Ok(set) => Some(set),
        Err(e) => {
            debug_assert!(false, "disjoint search produced an invalid set: {e}");
            error!(error = %e, "disjoint search produced an invalid set");
            None
        }
    }
}

// ── Search state ──────────────────────────────────────────────────────────────

/// Growing set for one anchor.  `used` holds the interiors of every chosen
/// path and `seconds` their second rooms; both are restored on backtrack.
struct Search<'a> {
    paths:   &'a [Path],
    k:       usize,
    chosen:  Vec<usize>,
    used:    FxHashSet<NodeId>,
    seconds: FxHashSet<NodeId>,
}

impl<'a> Search<'a> {
    fn new(paths: &'a [Path], k: usize) -> Self {
        Self {
            paths,
            k,
            chosen:  Vec::with_capacity(k),
            used:    FxHashSet::default(),
            seconds: FxHashSet::default(),
        }
    }

    fn accepts(&self, path: &Path) -> bool {
        !self.seconds.contains(&path.second())
            && path.interior().iter().all(|n| !self.used.contains(n))
    }

    fn push(&mut self, i: usize) {
        let path = &self.paths[i];
        self.used.extend(path.interior().iter().copied());
        self.seconds.insert(path.second());
        self.chosen.push(i);
    }

    fn pop(&mut self) {
        if let Some(i) = self.chosen.pop() {
            let path = &self.paths[i];
            for n in path.interior() {
                self.used.remove(n);
            }
            self.seconds.remove(&path.second());
        }
    }

    /// Try to complete the set using paths at index `from` or later.
    fn extend(&mut self, from: usize) -> bool {
        if self.chosen.len() == self.k {
            return true;
        }
        let needed = self.k - self.chosen.len();
        for i in from..self.paths.len() {
            if self.paths.len() - i < needed {
                break;
            }
            if !self.accepts(&self.paths[i]) {
                continue;
            }
            self.push(i);
            if self.extend(i + 1) {
                return true;
            }
            self.pop();
        }
        false
    }
}
