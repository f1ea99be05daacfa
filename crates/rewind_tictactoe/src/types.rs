//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};

/// A player's mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Player {
    /// Player X.
    X,
    /// Player O.
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Parses a mark from a single character (case-insensitive).
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'X' => Some(Player::X),
            'O' => Some(Player::O),
            _ => None,
        }
    }
}

impl std::str::FromStr for Player {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Player::from_char(c).ok_or_else(|| format!("Unknown mark: {}", s)),
            _ => Err(format!("Unknown mark: {}", s)),
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }
}

/// Whether the computer plays one of the marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameMode {
    /// Two humans share the board.
    #[default]
    TwoPlayer,
    /// One human plays against the minimax engine.
    OnePlayer,
}

impl GameMode {
    /// Returns the display label for this mode.
    pub fn label(self) -> &'static str {
        match self {
            Self::TwoPlayer => "Two Players",
            Self::OnePlayer => "One Player",
        }
    }

    /// Toggles between the two modes.
    pub fn toggle(self) -> Self {
        match self {
            Self::TwoPlayer => Self::OnePlayer,
            Self::OnePlayer => Self::TwoPlayer,
        }
    }

    /// Returns true when the engine answers human moves.
    pub fn is_ai(self) -> bool {
        matches!(self, Self::OnePlayer)
    }
}
