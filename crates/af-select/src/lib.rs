//! `af-select` — choose groups of paths that ants can walk side by side.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`path_set`] | `PathSet` (paths with pairwise disjoint interiors)        |
//! | [`selector`] | `DisjointSetSelector`, cardinality bound, backtracking    |
//! | [`error`]    | `SelectError`, `SelectResult<T>`                          |
//!
//! # Search order
//!
//! Paths are sorted shortest first (stable, so equal lengths keep discovery
//! order).  For a target size `k` the selector anchors on each path in turn
//! and greedily extends with later compatible paths, backtracking when the
//! set cannot reach `k`.  The first set found wins; no attempt is made to
//! find a "better" `k`-set beyond this deterministic order.

pub mod error;
pub mod path_set;
pub mod selector;


pub use error::{SelectError, SelectResult};
pub use path_set::PathSet;
pub use selector::DisjointSetSelector;
