//! Exhaustive minimax search.
//!
//! The 3x3 game tree has at most 9! leaf paths, so the engine searches
//! it completely with no depth limit, pruning or memoization. Scores are
//! `+1` for a win by the searching player, `-1` for a loss and `0` for a
//! draw; the speed of a win does not matter.

use super::rules::evaluate;
use super::{Board, Player, Position, Square};
use tracing::{debug, instrument};

/// Best move found at one level of the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Best {
    position: Option<Position>,
    score: i8,
}

/// One search from a fixed root player.
///
/// Explores a single scratch board by placing a mark, recursing and
/// removing the mark again, so no intermediate boards are allocated.
struct Search {
    player: Player,
    nodes: u64,
}

impl Search {
    fn new(player: Player) -> Self {
        Self { player, nodes: 0 }
    }

    fn minimax(&mut self, board: &mut Board, maximizing: bool) -> Best {
        self.nodes += 1;

        if let Some(score) = evaluate(board).score_for(self.player) {
            return Best {
                position: None,
                score,
            };
        }

        let mark = if maximizing {
            self.player
        } else {
            self.player.opponent()
        };
        let mut best = Best {
            position: None,
            score: if maximizing { i8::MIN } else { i8::MAX },
        };

        for pos in Position::ALL {
            if !board.is_empty(pos) {
                continue;
            }

            board.set(pos, Square::Occupied(mark));
            let score = self.minimax(board, !maximizing).score;
            board.set(pos, Square::Empty);

            // Strict comparisons keep the lowest index among equal scores.
            let improves = if maximizing {
                score > best.score
            } else {
                score < best.score
            };
            if improves {
                best = Best {
                    position: Some(pos),
                    score,
                };
            }
        }

        best
    }
}

/// Returns the optimal move for `player`, assuming both sides play
/// perfectly from here on.
///
/// Among equally scored moves the lowest index wins. Returns `None` when
/// the board is full or already won. The caller's board is never
/// modified.
#[instrument(skip(board), fields(board = %board))]
pub fn find_best_move(board: &Board, player: Player) -> Option<Position> {
    let mut scratch = *board;
    let mut search = Search::new(player);
    let best = search.minimax(&mut scratch, true);
    debug_assert_eq!(scratch, *board, "scratch board not restored");

    debug!(
        position = ?best.position,
        score = best.score,
        nodes = search.nodes,
        "Search complete"
    );
    best.position
}

/// Minimax score of every legal move for `player`, in index order.
///
/// Empty when the board is already decided.
#[instrument(skip(board), fields(board = %board))]
pub fn score_moves(board: &Board, player: Player) -> Vec<(Position, i8)> {
    if evaluate(board).is_terminal() {
        return Vec::new();
    }

    let mut scratch = *board;
    let mut search = Search::new(player);
    let scores: Vec<(Position, i8)> = Position::valid_moves(board)
        .into_iter()
        .map(|pos| {
            scratch.set(pos, Square::Occupied(player));
            let score = search.minimax(&mut scratch, false).score;
            scratch.set(pos, Square::Empty);
            (pos, score)
        })
        .collect();

    debug!(moves = scores.len(), nodes = search.nodes, "Scored moves");
    scores
}
