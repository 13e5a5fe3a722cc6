//! Discrete turn counter.
//!
//! Turns are numbered from 1: `Turn(1)` is the first turn in which any ant
//! moves.  A finished schedule of `n` turns ends at `Turn(n)`.

use std::fmt;

/// A 1-based simulation turn.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Turn(pub u64);

impl Turn {
    pub const FIRST: Turn = Turn(1);

    /// The turn after `self`.
    #[inline]
    pub fn next(self) -> Turn {
        Turn(self.0 + 1)
    }
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}
