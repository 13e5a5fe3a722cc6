//! `af-sched` — turn loop that walks ants along a path set.
//!
//! # Turn loop
//!
//! ```text
//! assign every ant to a path (length + load, shortest first on ties)
//! until every ant is at end:
//!   for each ant in id order:
//!     ① arrived        → skip
//!     ② next room free → advance (vacate old room, occupy new one)
//!     ③ blocked        → still at start? try another path of the set
//!                        whose first room is free (ReroutePolicy); else wait
//!     ④ direct lock    → after one direct start→end hop, no other direct
//!                        hop in the same turn
//! ```
//!
//! # Crate layout
//!
//! | Module        | Contents                                                |
//! |---------------|---------------------------------------------------------|
//! | [`scheduler`] | `CongestionScheduler`                                   |
//! | [`agents`]    | `AgentStore` (SoA ant state), `assign_paths`            |
//! | [`occupancy`] | `Occupancy` (one ant per non-terminal room)             |
//! | [`trace`]     | `Move`, `TurnRecord`, `Schedule`                        |
//! | [`observer`]  | `TurnObserver`, `NoopObserver`                          |
//! | [`error`]     | `ScheduleError`, `ScheduleResult<T>`                    |
//!
//! # Cargo features
//!
//! | Feature | Effect                                                    |
//! |---------|-----------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on the turn trace.      |

pub mod agents;
pub mod error;
pub mod observer;
pub mod occupancy;
pub mod scheduler;
pub mod trace;


pub use agents::{AgentStore, assign_paths};
pub use error::{ScheduleError, ScheduleResult};
pub use observer::{NoopObserver, TurnObserver};
pub use occupancy::Occupancy;
pub use scheduler::CongestionScheduler;
pub use trace::{Move, Schedule, TurnRecord};
