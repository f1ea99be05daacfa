//! Named board positions and index conversion.

use super::board::Board;
use super::error::GameError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A position on the tic-tac-toe board (0-8, row-major).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Position {
    /// Top-left (position 0)
    TopLeft,
    /// Top-center (position 1)
    TopCenter,
    /// Top-right (position 2)
    TopRight,
    /// Middle-left (position 3)
    MiddleLeft,
    /// Center (position 4)
    Center,
    /// Middle-right (position 5)
    MiddleRight,
    /// Bottom-left (position 6)
    BottomLeft,
    /// Bottom-center (position 7)
    BottomCenter,
    /// Bottom-right (position 8)
    BottomRight,
}

impl Position {
    /// All 9 positions in ascending index order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Get label for this position (for display).
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Converts position to board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates position from board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Parse from a 1-based cell number or a label.
    ///
    /// Numbers follow the on-screen numbering (1-9) rather than the
    /// internal index.
    #[instrument]
    pub fn from_label_or_number(s: &str) -> Option<Position> {
        let s = s.trim();
        if let Ok(num) = s.parse::<usize>() {
            return num.checked_sub(1).and_then(Self::from_index);
        }

        let s_lower = s.to_lowercase();
        <Position as strum::IntoEnumIterator>::iter()
            .find(|pos| pos.label().to_lowercase() == s_lower)
    }

    /// Returns the empty positions of `board` in ascending index order.
    pub fn valid_moves(board: &Board) -> Vec<Position> {
        Self::ALL
            .iter()
            .copied()
            .filter(|pos| board.get(*pos).player().is_none())
            .collect()
    }
}

impl TryFrom<usize> for Position {
    type Error = GameError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::from_index(index).ok_or(GameError::InvalidIndex(index))
    }
}

impl From<Position> for usize {
    fn from(pos: Position) -> Self {
        pos.to_index()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip_order() {
        for (i, pos) in Position::ALL.iter().enumerate() {
            assert_eq!(pos.to_index(), i);
        }
        assert_eq!(Position::from_index(9), None);
    }

    #[test]
    fn test_try_from_out_of_range() {
        assert_eq!(Position::try_from(4), Ok(Position::Center));
        assert_eq!(Position::try_from(9), Err(GameError::InvalidIndex(9)));
    }

    #[test]
    fn test_from_label_or_number() {
        assert_eq!(Position::from_label_or_number("1"), Some(Position::TopLeft));
        assert_eq!(Position::from_label_or_number("9"), Some(Position::BottomRight));
        assert_eq!(Position::from_label_or_number("0"), None);
        assert_eq!(Position::from_label_or_number("center"), Some(Position::Center));
        assert_eq!(Position::from_label_or_number("bottom-LEFT"), Some(Position::BottomLeft));
        assert_eq!(Position::from_label_or_number("middle"), None);
    }
}
