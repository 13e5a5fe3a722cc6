//! Room graph representation and builder.
//!
//! # Data layout
//!
//! The graph uses **Compressed Sparse Row (CSR)** adjacency.  Given a
//! `NodeId n`, its neighbors occupy the slice:
//!
//! ```text
//! adj[ node_adj_start[n] .. node_adj_start[n+1] ]
//! ```
//!
//! Every undirected link is stored twice, once per direction.  Within one
//! room's slice, neighbors keep the order in which links were added to the
//! builder, so path enumeration is deterministic and follows the input file.

use rustc_hash::{FxHashMap, FxHashSet};

use af_core::{Coord, NodeId};

use crate::{GraphError, GraphResult};

// ── Graph ─────────────────────────────────────────────────────────────────────

/// Immutable undirected room graph with a designated start and end.
///
/// Do not construct directly; use [`GraphBuilder`].
#[derive(Debug, Clone)]
pub struct Graph {
    // ── Node data ─────────────────────────────────────────────────────────
    /// Room name of each node.  Indexed by `NodeId`.
    pub node_name: Vec<String>,

    /// Optional coordinate of each node (diagnostic only).
    pub node_coord: Vec<Option<Coord>>,

    // ── CSR adjacency ─────────────────────────────────────────────────────
    /// CSR row pointer.  Length = `node_count + 1`.
    pub node_adj_start: Vec<u32>,

    /// Neighbor lists, concatenated in `NodeId` order.
    pub adj: Vec<NodeId>,

    // ── Terminals ─────────────────────────────────────────────────────────
    pub start: NodeId,
    pub end:   NodeId,

    by_name: FxHashMap<String, NodeId>,
}

impl Graph {
    // ── Graph dimensions ──────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.node_name.len()
    }

    /// Number of undirected links.
    pub fn edge_count(&self) -> usize {
        self.adj.len() / 2
    }

    // ── Lookup ────────────────────────────────────────────────────────────

    /// Room name of `node`.
    #[inline]
    pub fn name(&self, node: NodeId) -> &str {
        &self.node_name[node.index()]
    }

    /// `NodeId` of the room called `name`, if any.
    pub fn node_id(&self, name: &str) -> Option<NodeId> {
        self.by_name.get(name).copied()
    }

    #[inline]
    pub fn coord(&self, node: NodeId) -> Option<Coord> {
        self.node_coord[node.index()]
    }

    /// `true` for the start and end rooms, which hold any number of ants.
    #[inline]
    pub fn is_terminal(&self, node: NodeId) -> bool {
        node == self.start || node == self.end
    }

    // ── Graph traversal ───────────────────────────────────────────────────

    /// Neighbors of `node` in link-insertion order.
    #[inline]
    pub fn neighbors(&self, node: NodeId) -> &[NodeId] {
        let start = self.node_adj_start[node.index()] as usize;
        let end   = self.node_adj_start[node.index() + 1] as usize;
        &self.adj[start..end]
    }

    #[inline]
    pub fn degree(&self, node: NodeId) -> usize {
        self.neighbors(node).len()
    }

    /// `true` if `a` and `b` share a link.
    pub fn are_adjacent(&self, a: NodeId, b: NodeId) -> bool {
        self.neighbors(a).contains(&b)
    }
}

// ── GraphBuilder ──────────────────────────────────────────────────────────────

/// Construct a [`Graph`] incrementally, then call [`build`](Self::build).
///
/// Rooms must be added before the links that name them.  `build()` checks
/// the graph is simple (no self-links, no repeated links) and that distinct
/// start and end rooms were designated.
///
/// # Example
///
/// ```
/// use af_graph::GraphBuilder;
///
/// let mut b = GraphBuilder::new();
/// let s = b.add_node("start", None).unwrap();
/// let a = b.add_node("a", None).unwrap();
/// let e = b.add_node("end", None).unwrap();
/// b.add_edge(s, a);
/// b.add_edge(a, e);
/// b.set_start(s);
/// b.set_end(e);
/// let graph = b.build().unwrap();
/// assert_eq!(graph.node_count(), 3);
/// assert_eq!(graph.edge_count(), 2);
/// ```
#[derive(Default)]
pub struct GraphBuilder {
    names:     Vec<String>,
    coords:    Vec<Option<Coord>>,
    by_name:   FxHashMap<String, NodeId>,
    raw_edges: Vec<(NodeId, NodeId)>,
    start:     Option<NodeId>,
    end:       Option<NodeId>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a room and return its `NodeId` (sequential from 0).
    pub fn add_node(&mut self, name: &str, coord: Option<Coord>) -> GraphResult<NodeId> {
        if self.by_name.contains_key(name) {
            return Err(GraphError::DuplicateNode(name.to_owned()));
        }
        let id = NodeId(self.names.len() as u32);
        self.names.push(name.to_owned());
        self.coords.push(coord);
        self.by_name.insert(name.to_owned(), id);
        Ok(id)
    }

    /// `NodeId` of a room added earlier.
    pub fn node_id(&self, name: &str) -> Option<NodeId> {
        self.by_name.get(name).copied()
    }

    /// Add an undirected link between `a` and `b`.
    pub fn add_edge(&mut self, a: NodeId, b: NodeId) {
        self.raw_edges.push((a, b));
    }

    /// Convenience: add a link between two rooms by name.
    pub fn add_edge_by_name(&mut self, a: &str, b: &str) -> GraphResult<()> {
        let lookup = |name: &str| {
            self.node_id(name)
                .ok_or_else(|| GraphError::NodeNameNotFound(name.to_owned()))
        };
        let (a, b) = (lookup(a)?, lookup(b)?);
        self.add_edge(a, b);
        Ok(())
    }

    pub fn set_start(&mut self, node: NodeId) {
        self.start = Some(node);
    }

    pub fn set_end(&mut self, node: NodeId) {
        self.end = Some(node);
    }

    pub fn node_count(&self) -> usize { self.names.len() }
    pub fn edge_count(&self) -> usize { self.raw_edges.len() }

    /// Validate and consume the builder, producing a [`Graph`].
    pub fn build(self) -> GraphResult<Graph> {
        let node_count = self.names.len();
        let in_range = |n: NodeId| {
            if n.index() < node_count { Ok(n) } else { Err(GraphError::NodeNotFound(n)) }
        };

        let start = in_range(self.start.ok_or(GraphError::MissingStart)?)?;
        let end   = in_range(self.end.ok_or(GraphError::MissingEnd)?)?;
        if start == end {
            return Err(GraphError::StartIsEnd(self.names[start.index()].clone()));
        }

        // Expand each undirected link into two directed half-links, checking
        // simplicity on the way.
        let mut seen: FxHashSet<(NodeId, NodeId)> = FxHashSet::default();
        let mut half: Vec<(NodeId, NodeId)> = Vec::with_capacity(self.raw_edges.len() * 2);
        for &(a, b) in &self.raw_edges {
            let (a, b) = (in_range(a)?, in_range(b)?);
            if a == b {
                return Err(GraphError::SelfLoop(self.names[a.index()].clone()));
            }
            if !seen.insert((a.min(b), a.max(b))) {
                return Err(GraphError::DuplicateEdge(
                    self.names[a.index()].clone(),
                    self.names[b.index()].clone(),
                ));
            }
            half.push((a, b));
            half.push((b, a));
        }

        // Stable sort: neighbors keep insertion order within each row.
        half.sort_by_key(|&(from, _)| from.0);

        let mut node_adj_start = vec![0u32; node_count + 1];
        for &(from, _) in &half {
            node_adj_start[from.index() + 1] += 1;
        }
        for i in 1..=node_count {
            node_adj_start[i] += node_adj_start[i - 1];
        }
        debug_assert_eq!(node_adj_start[node_count] as usize, half.len());

        Ok(Graph {
            node_name: self.names,
            node_coord: self.coords,
            node_adj_start,
            adj: half.into_iter().map(|(_, to)| to).collect(),
            start,
            end,
            by_name: self.by_name,
        })
    }
}
