//! Read-only snapshot of a session for front ends.

use super::action::Move;
use super::board::Board;
use super::outcome::Outcome;
use super::types::{GameMode, Player};
use serde::{Deserialize, Serialize};

/// Everything a front end needs to draw the current step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionView {
    /// Board at the current step.
    pub board: Board,
    /// Outcome of that board.
    pub outcome: Outcome,
    /// Mark to play next at this step.
    pub turn: Player,
    /// Current step index.
    pub step: usize,
    /// Number of recorded snapshots.
    pub timeline_len: usize,
    /// Whether the engine answers human moves.
    pub mode: GameMode,
    /// Mark that plays on even steps.
    pub first_player: Player,
    /// Move that produced the current board, if any.
    pub last_move: Option<Move>,
}

impl SessionView {
    /// Status line: winner, next player, or draw.
    pub fn status(&self) -> String {
        match self.outcome {
            Outcome::Win(player) => format!("Winner: {}", player),
            Outcome::Draw => "Draw !".to_string(),
            Outcome::Undecided => format!("Next player: {}", self.turn),
        }
    }
}
