//! The 3x3 board value.

use super::error::GameError;
use super::position::Position;
use super::types::{Player, Square};
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

/// 3x3 tic-tac-toe board.
///
/// A `Board` is a plain value: every operation that changes a square
/// returns a new board and leaves the original untouched. Stored
/// snapshots therefore never change once captured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Gets the square at a raw index.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidIndex`] if `index` is not in 0..9.
    pub fn square_at(&self, index: usize) -> Result<Square, GameError> {
        let pos = Position::try_from(index)?;
        Ok(self.get(pos))
    }

    /// Returns true if the square at `index` holds a mark.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidIndex`] if `index` is not in 0..9.
    pub fn is_occupied(&self, index: usize) -> Result<bool, GameError> {
        Ok(self.square_at(index)? != Square::Empty)
    }

    /// Checks if the square at `pos` is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Checks if every square holds a mark.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|s| *s != Square::Empty)
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Returns a copy of this board with `player`'s mark at `index`.
    ///
    /// # Errors
    ///
    /// - [`GameError::InvalidIndex`] if `index` is not in 0..9.
    /// - [`GameError::CellOccupied`] if the square already holds a mark.
    #[instrument(skip(self))]
    pub fn with_mark(&self, index: usize, player: Player) -> Result<Board, GameError> {
        let pos = Position::try_from(index)?;
        if !self.is_empty(pos) {
            return Err(GameError::CellOccupied(pos));
        }
        let mut next = *self;
        next.set(pos, Square::Occupied(player));
        trace!(position = %pos, %player, "Mark applied");
        Ok(next)
    }

    /// Overwrites a square in place.
    ///
    /// Only the search engine's scratch board and test fixtures write
    /// through this; snapshots are built with [`Board::with_mark`].
    pub(crate) fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty squares show their 1-based cell number.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.squares[pos] {
                    Square::Empty => (pos + 1).to_string(),
                    Square::Occupied(player) => player.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

/// Compact one-line notation: `X`, `O` or `.` per square, row-major.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for square in &self.squares {
            let c = match square {
                Square::Empty => '.',
                Square::Occupied(Player::X) => 'X',
                Square::Occupied(Player::O) => 'O',
            };
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

/// Error parsing the compact board notation.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum BoardParseError {
    /// The notation did not contain exactly nine squares.
    #[display("Expected 9 squares, found {}", _0)]
    WrongLength(usize),
    /// A character was not a mark or an empty marker.
    #[display("Unexpected character {:?} in board", _0)]
    BadSquare(char),
}

impl std::error::Error for BoardParseError {}

impl std::str::FromStr for Board {
    type Err = BoardParseError;

    /// Parses `X`, `O` and `.`/`_`/`-` squares; whitespace and `|` are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '|')
            .collect();
        if cells.len() != 9 {
            return Err(BoardParseError::WrongLength(cells.len()));
        }

        let mut board = Board::new();
        for (pos, c) in Position::ALL.into_iter().zip(cells) {
            let square = match c {
                '.' | '_' | '-' => Square::Empty,
                other => Square::Occupied(
                    Player::from_char(other).ok_or(BoardParseError::BadSquare(other))?,
                ),
            };
            board.set(pos, square);
        }
        Ok(board)
    }
}
