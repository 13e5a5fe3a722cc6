//! `af-solve` — pick the fastest way to move every ant.
//!
//! ```text
//! enumerate_paths ─► DisjointSetSelector ─► for k = k_max ..= 1:
//!                                             CongestionScheduler::run
//!                                           ─► keep min (turns, moves)
//! ```
//!
//! # Quick-start
//!
//! ```rust
//! use af_core::SolverConfig;
//! use af_graph::GraphBuilder;
//! use af_solve::Solver;
//!
//! let mut b = GraphBuilder::new();
//! let s = b.add_node("start", None).unwrap();
//! let e = b.add_node("end", None).unwrap();
//! b.add_edge(s, e);
//! b.set_start(s);
//! b.set_end(e);
//! let graph = b.build().unwrap();
//!
//! let solution = Solver::new(&graph, SolverConfig::default()).solve(3).unwrap();
//! assert_eq!(solution.schedule.turn_count(), 1);
//! ```

pub mod error;
pub mod solver;


pub use error::{SolveError, SolveResult};
pub use solver::{Candidate, Solution, Solver};
