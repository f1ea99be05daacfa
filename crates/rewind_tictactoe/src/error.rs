//! Error taxonomy for board and session operations.

use super::position::Position;

/// Error that can occur when validating or applying a game operation.
///
/// `CellOccupied` and `GameOver` are rejections: the caller raced a
/// disabled control and the session is left untouched. The remaining
/// variants are contract errors the caller should have prevented.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum GameError {
    /// A cell index outside 0..9.
    #[display("Cell index {} is out of bounds (must be 0-8)", _0)]
    InvalidIndex(usize),

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    CellOccupied(Position),

    /// The current board already has an outcome.
    #[display("Game is already over")]
    GameOver,

    /// A timeline step outside the recorded history.
    #[display("Step {} is outside the timeline (length {})", step, len)]
    InvalidStep {
        /// Requested step.
        step: usize,
        /// Timeline length at the time of the request.
        len: usize,
    },

    /// Mode and first player can only change before the first move.
    #[display("Settings can only change at the start of a game")]
    SettingsLocked,

    /// A postcondition failed after a transition.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl GameError {
    /// Returns true for expected rejections that leave state unchanged.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            GameError::CellOccupied(_) | GameError::GameOver | GameError::SettingsLocked
        )
    }
}

impl std::error::Error for GameError {}
