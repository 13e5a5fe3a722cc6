//! `af-io` — reading farm descriptions and writing turn traces.
//!
//! # Input
//!
//! ```text
//! 3            number of ants
//! ##start
//! s 0 0        room: name x y
//! a 1 0
//! ##end
//! e 2 0
//! s-a          tunnel: name-name
//! a-e
//! ```
//!
//! Lines starting with `#` (other than `##start` / `##end`) are comments.
//! Blank lines are ignored.  See [`loader`] for the full rule set.
//!
//! # Output
//!
//! | Presenter         | Shape                                        |
//! |-------------------|----------------------------------------------|
//! | [`TextPresenter`] | one line per turn: `L1-a L2-b`               |
//! | [`CsvPresenter`]  | header `turn,ant,room`, one row per move     |
//!
//! Both implement [`TracePresenter`]; [`present`] drives either one over a
//! finished [`Schedule`](af_sched::Schedule).

pub mod csv;
pub mod error;
pub mod farm;
pub mod loader;
pub mod presenter;

#[cfg(test)]
mod tests;

pub use self::csv::CsvPresenter;
pub use error::{LoadError, LoadResult, PresentError, PresentResult};
pub use farm::Farm;
pub use loader::{Marker, load_farm_file, load_farm_reader, load_farm_str};
pub use presenter::{TextPresenter, TracePresenter, present};
