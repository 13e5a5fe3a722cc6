//! `af-graph` — room graph and path enumeration.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`network`] | `Graph` (CSR adjacency), `GraphBuilder`                     |
//! | [`paths`]   | `Path`, `enumerate_paths`                                   |
//! | [`error`]   | `GraphError`, `GraphResult<T>`                              |

pub mod error;
pub mod network;
pub mod paths;

#[cfg(test)]
mod tests;

pub use error::{GraphError, GraphResult};
pub use network::{Graph, GraphBuilder};
pub use paths::{Path, enumerate_paths};
