//! Unit tests for af-graph.
//!
//! All tests use hand-crafted farms or small random graphs.

#[cfg(test)]
mod helpers {
    use crate::{Graph, GraphBuilder};

    /// Build a graph from room names and links; the first room is start and
    /// the last is end.
    pub fn farm(rooms: &[&str], links: &[(&str, &str)]) -> Graph {
        let mut b = GraphBuilder::new();
        for r in rooms {
            b.add_node(r, None).unwrap();
        }
        for (x, y) in links {
            b.add_edge_by_name(x, y).unwrap();
        }
        b.set_start(b.node_id(rooms[0]).unwrap());
        b.set_end(b.node_id(rooms[rooms.len() - 1]).unwrap());
        b.build().unwrap()
    }

    /// Render each path as a room-name string like `"s-a-e"`.
    pub fn names(graph: &Graph, paths: &[crate::Path]) -> Vec<String> {
        paths
            .iter()
            .map(|p| {
                p.nodes()
                    .iter()
                    .map(|&n| graph.name(n))
                    .collect::<Vec<_>>()
                    .join("-")
            })
            .collect()
    }

    /// Square with a cross link:
    ///
    /// ```text
    ///   s ── a
    ///   │  ╱ │
    ///   b ── e     links: s-a, s-b, a-b, a-e, b-e
    /// ```
    pub fn square() -> Graph {
        farm(
            &["s", "a", "b", "e"],
            &[("s", "a"), ("s", "b"), ("a", "b"), ("a", "e"), ("b", "e")],
        )
    }
}

// ── Builder & graph structure ─────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use af_core::{Coord, NodeId};

    use crate::{GraphBuilder, GraphError};

    fn two_rooms() -> (GraphBuilder, NodeId, NodeId) {
        let mut b = GraphBuilder::new();
        let s = b.add_node("s", Some(Coord::new(0, 0))).unwrap();
        let e = b.add_node("e", Some(Coord::new(1, 0))).unwrap();
        (b, s, e)
    }

    #[test]
    fn single_link() {
        let (mut b, s, e) = two_rooms();
        b.add_edge(s, e);
        b.set_start(s);
        b.set_end(e);
        let g = b.build().unwrap();
        assert_eq!(g.node_count(), 2);
        assert_eq!(g.edge_count(), 1);
        assert_eq!(g.neighbors(s), &[e]);
        assert_eq!(g.neighbors(e), &[s]);
        assert_eq!(g.coord(e), Some(Coord::new(1, 0)));
        assert!(g.is_terminal(s) && g.is_terminal(e));
    }

    #[test]
    fn neighbors_keep_insertion_order() {
        let g = super::helpers::square();
        let a = g.node_id("a").unwrap();
        let order: Vec<&str> = g.neighbors(a).iter().map(|&n| g.name(n)).collect();
        assert_eq!(order, vec!["s", "b", "e"]);
        assert_eq!(g.degree(a), 3);
        assert!(g.are_adjacent(a, g.end));
        assert!(!g.are_adjacent(g.start, g.end));
    }

    #[test]
    fn missing_terminals() {
        let (b, _, _) = two_rooms();
        assert_eq!(b.build().unwrap_err(), GraphError::MissingStart);

        let (mut b, s, _) = two_rooms();
        b.set_start(s);
        assert_eq!(b.build().unwrap_err(), GraphError::MissingEnd);
    }

    #[test]
    fn start_equal_end_rejected() {
        let (mut b, s, _) = two_rooms();
        b.set_start(s);
        b.set_end(s);
        assert_eq!(b.build().unwrap_err(), GraphError::StartIsEnd("s".into()));
    }

    #[test]
    fn duplicate_room_rejected() {
        let (mut b, _, _) = two_rooms();
        assert_eq!(
            b.add_node("s", None).unwrap_err(),
            GraphError::DuplicateNode("s".into())
        );
    }

    #[test]
    fn self_loop_rejected() {
        let (mut b, s, e) = two_rooms();
        b.add_edge(s, s);
        b.set_start(s);
        b.set_end(e);
        assert_eq!(b.build().unwrap_err(), GraphError::SelfLoop("s".into()));
    }

    #[test]
    fn reversed_duplicate_link_rejected() {
        let (mut b, s, e) = two_rooms();
        b.add_edge(s, e);
        b.add_edge(e, s);
        b.set_start(s);
        b.set_end(e);
        assert!(matches!(b.build().unwrap_err(), GraphError::DuplicateEdge(..)));
    }

    #[test]
    fn unknown_room_name() {
        let (mut b, _, _) = two_rooms();
        assert_eq!(
            b.add_edge_by_name("s", "zz").unwrap_err(),
            GraphError::NodeNameNotFound("zz".into())
        );
    }

    #[test]
    fn out_of_range_node() {
        let (mut b, s, e) = two_rooms();
        b.add_edge(s, NodeId(9));
        b.set_start(s);
        b.set_end(e);
        assert_eq!(b.build().unwrap_err(), GraphError::NodeNotFound(NodeId(9)));
    }
}

// ── Path enumeration ──────────────────────────────────────────────────────────

#[cfg(test)]
mod enumerate {
    use super::helpers::{farm, names, square};
    use crate::{GraphError, enumerate_paths};

    #[test]
    fn direct_link_only() {
        let g = farm(&["s", "e"], &[("s", "e")]);
        let paths = enumerate_paths(&g).unwrap();
        assert_eq!(names(&g, &paths), vec!["s-e"]);
        assert!(paths[0].is_direct());
        assert!(paths[0].interior().is_empty());
    }

    #[test]
    fn single_corridor() {
        let g = farm(&["s", "a", "e"], &[("s", "a"), ("a", "e")]);
        let paths = enumerate_paths(&g).unwrap();
        assert_eq!(names(&g, &paths), vec!["s-a-e"]);
        assert_eq!(paths[0].hops(), 2);
    }

    #[test]
    fn order_follows_adjacency() {
        let g = square();
        let paths = enumerate_paths(&g).unwrap();
        assert_eq!(names(&g, &paths), vec!["s-a-b-e", "s-a-e", "s-b-a-e", "s-b-e"]);
    }

    #[test]
    fn end_is_never_extended() {
        // e has further neighbors; no path may continue through it.
        let g = farm(
            &["s", "a", "x", "e"],
            &[("s", "a"), ("a", "e"), ("e", "x"), ("x", "s")],
        );
        let paths = enumerate_paths(&g).unwrap();
        assert_eq!(names(&g, &paths), vec!["s-a-e", "s-x-e"]);
        for p in &paths {
            assert_eq!(p.nodes().iter().filter(|&&n| n == g.end).count(), 1);
        }
    }

    #[test]
    fn sibling_branches_do_not_leak() {
        // Two branches from s that both pass through c; the second branch
        // must still be able to enter c after the first one backtracked.
        let g = farm(
            &["s", "a", "b", "c", "e"],
            &[("s", "a"), ("s", "b"), ("a", "c"), ("b", "c"), ("c", "e")],
        );
        let paths = enumerate_paths(&g).unwrap();
        assert_eq!(names(&g, &paths), vec!["s-a-c-e", "s-b-c-e"]);
    }

    #[test]
    fn disconnected_is_no_path() {
        let g = farm(&["s", "a", "b", "e"], &[("s", "a"), ("b", "e")]);
        assert_eq!(
            enumerate_paths(&g).unwrap_err(),
            GraphError::NoPath { start: "s".into(), end: "e".into() }
        );
    }

    #[test]
    fn path_accessors() {
        let g = square();
        let paths = enumerate_paths(&g).unwrap();
        let p = &paths[0]; // s-a-b-e
        assert_eq!(p.first(), g.start);
        assert_eq!(p.last(), g.end);
        assert_eq!(g.name(p.second()), "a");
        assert_eq!(g.name(p.penultimate()), "b");
        assert_eq!(p.len(), 4);
        assert!(p.is_simple());
        assert!(!p.is_disjoint_from(&paths[1]));
        assert!(paths[1].is_disjoint_from(&paths[3]));
    }
}

// ── Property tests ────────────────────────────────────────────────────────────

#[cfg(test)]
mod properties {
    use std::collections::VecDeque;

    use proptest::prelude::*;
    use rustc_hash::FxHashSet;

    use crate::{Graph, GraphBuilder, GraphError, enumerate_paths};

    /// Graph on `n` rooms `r0..r{n-1}` containing the link `(i, j)`, `i < j`,
    /// whenever the matching mask bit is set.  Start = r0, end = r{n-1}.
    fn masked(n: usize, mask: &[bool]) -> Graph {
        let mut b = GraphBuilder::new();
        let ids: Vec<_> = (0..n)
            .map(|i| b.add_node(&format!("r{i}"), None).unwrap())
            .collect();
        let mut k = 0;
        for i in 0..n {
            for j in (i + 1)..n {
                if mask[k] {
                    b.add_edge(ids[i], ids[j]);
                }
                k += 1;
            }
        }
        b.set_start(ids[0]);
        b.set_end(ids[n - 1]);
        b.build().unwrap()
    }

    fn arb_graph() -> impl Strategy<Value = Graph> {
        (2usize..8).prop_flat_map(|n| {
            proptest::collection::vec(any::<bool>(), n * (n - 1) / 2)
                .prop_map(move |mask| masked(n, &mask))
        })
    }

    fn connected(g: &Graph) -> bool {
        let mut seen = vec![false; g.node_count()];
        let mut queue = VecDeque::from([g.start]);
        seen[g.start.index()] = true;
        while let Some(n) = queue.pop_front() {
            for &m in g.neighbors(n) {
                if !seen[m.index()] {
                    seen[m.index()] = true;
                    queue.push_back(m);
                }
            }
        }
        seen[g.end.index()]
    }

    proptest! {
        #[test]
        fn paths_are_simple_and_well_formed(g in arb_graph()) {
            match enumerate_paths(&g) {
                Ok(paths) => {
                    prop_assert!(connected(&g));
                    let mut unique = FxHashSet::default();
                    for p in &paths {
                        prop_assert!(p.is_simple());
                        prop_assert_eq!(p.first(), g.start);
                        prop_assert_eq!(p.last(), g.end);
                        prop_assert!(!p.interior().contains(&g.end));
                        for w in p.nodes().windows(2) {
                            prop_assert!(g.are_adjacent(w[0], w[1]));
                        }
                        prop_assert!(unique.insert(p.clone()), "duplicate path");
                    }
                }
                Err(GraphError::NoPath { .. }) => prop_assert!(!connected(&g)),
                Err(e) => prop_assert!(false, "unexpected error {e}"),
            }
        }
    }
}
