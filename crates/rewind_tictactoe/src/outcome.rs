//! Classification of a board position.

use super::types::Player;
use serde::{Deserialize, Serialize};

/// Result of evaluating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// No line is complete and empty squares remain.
    Undecided,
    /// Player owns a complete line.
    Win(Player),
    /// Board is full with no complete line.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Win(player) => Some(*player),
            Outcome::Undecided | Outcome::Draw => None,
        }
    }

    /// Returns true once no further moves are accepted.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::Undecided)
    }

    /// Minimax score from `player`'s point of view.
    ///
    /// `None` for undecided boards, which have no terminal value.
    pub fn score_for(&self, player: Player) -> Option<i8> {
        match self {
            Outcome::Undecided => None,
            Outcome::Draw => Some(0),
            Outcome::Win(winner) if *winner == player => Some(1),
            Outcome::Win(_) => Some(-1),
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Undecided => write!(f, "Undecided"),
            Outcome::Win(player) => write!(f, "Player {} wins", player),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}
