//! Plain data produced by a scheduler run.

use af_core::{AgentId, NodeId};

/// One ant stepping into `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Move {
    pub agent: AgentId,
    pub to:    NodeId,
}

/// Moves of one turn, in the order ants were evaluated (ascending id).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnRecord {
    pub moves: Vec<Move>,
}

impl TurnRecord {
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.moves.iter()
    }
}

impl<'a> IntoIterator for &'a TurnRecord {
    type Item     = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// The full turn trace of one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Schedule {
    pub turns: Vec<TurnRecord>,
}

impl Schedule {
    /// Number of turns; equals `turns.len()`.
    pub fn turn_count(&self) -> usize {
        self.turns.len()
    }

    /// Total ant moves across all turns.
    pub fn move_count(&self) -> usize {
        self.turns.iter().map(TurnRecord::len).sum()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TurnRecord> {
        self.turns.iter()
    }
}

impl<'a> IntoIterator for &'a Schedule {
    type Item     = &'a TurnRecord;
    type IntoIter = std::slice::Iter<'a, TurnRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
