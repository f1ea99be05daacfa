//! Game rules for tic-tac-toe.
//!
//! Pure functions for evaluating a board. Rules are separated from board
//! storage so the session, the contracts and the search engine all judge
//! positions the same way.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, check_winner};

use super::board::Board;
use super::outcome::Outcome;
use tracing::instrument;

/// Classifies a board.
///
/// Lines are tested in [`LINES`] order and the first complete line
/// decides the winner, so boards with several complete lines (only
/// reachable by illegal play) still evaluate deterministically.
#[instrument(level = "trace")]
pub fn evaluate(board: &Board) -> Outcome {
    if let Some(winner) = check_winner(board) {
        Outcome::Win(winner)
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::Undecided
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Player;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_empty_board_undecided() {
        assert_eq!(evaluate(&Board::new()), Outcome::Undecided);
    }

    #[test]
    fn test_top_row_win() {
        assert_eq!(evaluate(&board("XXX......")), Outcome::Win(Player::X));
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        assert_eq!(evaluate(&board("XOXXOOOXX")), Outcome::Draw);
    }

    #[test]
    fn test_win_on_full_board_beats_draw() {
        assert_eq!(evaluate(&board("XXXOOXOXO")), Outcome::Win(Player::X));
    }

    #[test]
    fn test_first_line_in_order_decides() {
        assert_eq!(evaluate(&board("OOOXXX...")), Outcome::Win(Player::O));
        assert_eq!(evaluate(&board("...OOOXXX")), Outcome::Win(Player::O));
        // Column 0 is enumerated before column 2.
        assert_eq!(evaluate(&board("X.OX.OX.O")), Outcome::Win(Player::X));
    }

    #[test]
    fn test_evaluate_is_repeatable() {
        let b = board("XO.XO....");
        assert_eq!(evaluate(&b), evaluate(&b));
    }
}
