//! Exhaustive simple-path enumeration between start and end.
//!
//! # Algorithm
//!
//! Depth-first search with an explicit frame stack.  Each frame holds a room
//! and a cursor into its neighbor slice, so exploration order follows
//! link-insertion order exactly.  A neighbor is entered only if it is not
//! already on the partial path; reaching `end` records a path and never
//! extends past it.  Popping a frame removes its room from the partial path,
//! so sibling branches never see each other's rooms.
//!
//! The search is exponential in the worst case.  Farms are expected to have
//! tens of rooms.

use rustc_hash::FxHashSet;
use tracing::debug;

use af_core::NodeId;

use crate::{Graph, GraphError, GraphResult};

// ── Path ──────────────────────────────────────────────────────────────────────

/// A simple start→end room sequence.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Path {
    nodes: Vec<NodeId>,
}

impl Path {
    /// Wrap a room sequence.  The caller guarantees it has at least two
    /// rooms and no repeats.
    pub fn from_nodes(nodes: Vec<NodeId>) -> Self {
        debug_assert!(nodes.len() >= 2, "a path needs at least start and end");
        Self { nodes }
    }

    #[inline]
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    /// Number of rooms, start and end included.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false`: a path holds at least start and end.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Moves needed to walk the path.
    #[inline]
    pub fn hops(&self) -> usize {
        self.nodes.len() - 1
    }

    #[inline]
    pub fn first(&self) -> NodeId {
        self.nodes[0]
    }

    #[inline]
    pub fn last(&self) -> NodeId {
        self.nodes[self.nodes.len() - 1]
    }

    /// Room at position `i`.
    #[inline]
    pub fn at(&self, i: usize) -> NodeId {
        self.nodes[i]
    }

    /// The first room after start (`end` for a direct path).
    #[inline]
    pub fn second(&self) -> NodeId {
        self.nodes[1]
    }

    /// The room just before end (`start` for a direct path).
    #[inline]
    pub fn penultimate(&self) -> NodeId {
        self.nodes[self.nodes.len() - 2]
    }

    /// Rooms strictly between start and end.
    #[inline]
    pub fn interior(&self) -> &[NodeId] {
        &self.nodes[1..self.nodes.len() - 1]
    }

    /// A single start→end hop.
    #[inline]
    pub fn is_direct(&self) -> bool {
        self.nodes.len() == 2
    }

    /// `true` if no room appears twice.
    pub fn is_simple(&self) -> bool {
        let mut seen = FxHashSet::default();
        self.nodes.iter().all(|n| seen.insert(*n))
    }

    /// `true` if the interiors of `self` and `other` share no room.
    pub fn is_disjoint_from(&self, other: &Path) -> bool {
        let mine: FxHashSet<NodeId> = self.interior().iter().copied().collect();
        other.interior().iter().all(|n| !mine.contains(n))
    }
}

// ── Enumeration ───────────────────────────────────────────────────────────────

/// Every simple path from `graph.start` to `graph.end`, in discovery order.
///
/// # Errors
///
/// [`GraphError::NoPath`] if start and end are disconnected.
pub fn enumerate_paths(graph: &Graph) -> GraphResult<Vec<Path>> {
    let mut paths   = Vec::new();
    let mut on_path = vec![false; graph.node_count()];
    let mut partial = vec![graph.start];
    // (room, index of the next neighbor to try)
    let mut stack: Vec<(NodeId, usize)> = vec![(graph.start, 0)];
    on_path[graph.start.index()] = true;

    loop {
        let Some(&(node, cursor)) = stack.last() else { break };
        let neighbors = graph.neighbors(node);

        if cursor == neighbors.len() {
            stack.pop();
            partial.pop();
            on_path[node.index()] = false;
            continue;
        }
        if let Some(top) = stack.last_mut() {
            top.1 += 1;
        }

        let next = neighbors[cursor];
        if on_path[next.index()] {
            continue;
        }
        if next == graph.end {
            let mut nodes = Vec::with_capacity(partial.len() + 1);
            nodes.extend_from_slice(&partial);
            nodes.push(next);
            paths.push(Path::from_nodes(nodes));
            continue;
        }

        on_path[next.index()] = true;
        partial.push(next);
        stack.push((next, 0));
    }

    debug!(paths = paths.len(), rooms = graph.node_count(), "enumerated simple paths");

    if paths.is_empty() {
        return Err(GraphError::NoPath {
            start: graph.name(graph.start).to_owned(),
            end:   graph.name(graph.end).to_owned(),
        });
    }
    Ok(paths)
}
