//! `af-core` — foundational types for the `antfarm` path scheduler.
//!
//! This crate is a dependency of every other `af-*` crate.  It has no `af-*`
//! dependencies and no required external ones (only optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                                 |
//! |------------|----------------------------------------------------------|
//! | [`ids`]    | `NodeId`, `AgentId`                                      |
//! | [`geo`]    | `Coord` (diagnostic room coordinate)                     |
//! | [`turn`]   | `Turn` counter                                           |
//! | [`config`] | `ReroutePolicy`, `SchedulePolicy`, `SolverConfig`        |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod geo;
pub mod ids;
pub mod turn;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{ReroutePolicy, SchedulePolicy, SolverConfig};
pub use geo::Coord;
pub use ids::{AgentId, NodeId};
pub use turn::Turn;
