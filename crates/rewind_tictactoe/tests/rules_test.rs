//! Tests for board evaluation over every reachable position.

use rewind_tictactoe::{Board, Outcome, Player, Position, Square, evaluate};

/// Rows top to bottom, columns left to right, then both diagonals.
const TRIPLES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Outcome computed straight from the squares.
fn expected_outcome(board: &Board) -> Outcome {
    let squares = board.squares();
    for [a, b, c] in TRIPLES {
        if let Square::Occupied(player) = squares[a]
            && squares[b] == squares[a]
            && squares[c] == squares[a]
        {
            return Outcome::Win(player);
        }
    }
    if squares.iter().all(|s| *s != Square::Empty) {
        Outcome::Draw
    } else {
        Outcome::Undecided
    }
}

#[derive(Debug, Default, PartialEq, Eq)]
struct Tally {
    positions: usize,
    x_wins: usize,
    o_wins: usize,
    draws: usize,
}

/// Walks every legal game from `board`, checking each position on the way.
fn walk(board: &Board, to_move: Player, tally: &mut Tally) {
    tally.positions += 1;

    let outcome = evaluate(board);
    assert_eq!(outcome, expected_outcome(board), "Board {}", board);
    assert_eq!(evaluate(board), outcome, "Board {} changed between calls", board);
    assert_eq!(board.is_full(), Position::valid_moves(board).is_empty());

    match outcome {
        Outcome::Win(Player::X) => tally.x_wins += 1,
        Outcome::Win(Player::O) => tally.o_wins += 1,
        Outcome::Draw => {
            assert!(board.is_full(), "Draw on a board with space: {}", board);
            tally.draws += 1;
        }
        Outcome::Undecided => {
            for pos in Position::valid_moves(board) {
                let next = board
                    .with_mark(pos.to_index(), to_move)
                    .expect("Empty square");
                walk(&next, to_move.opponent(), tally);
            }
        }
    }
}

#[test]
fn test_evaluate_agrees_on_every_reachable_board() {
    let mut tally = Tally::default();
    walk(&Board::new(), Player::X, &mut tally);

    assert_eq!(
        tally,
        Tally {
            positions: 549_946,
            x_wins: 131_184,
            o_wins: 77_904,
            draws: 46_080,
        }
    );
}

#[test]
fn test_evaluate_leaves_board_untouched() {
    let board: Board = "XOXOXO...".parse().expect("Valid board");
    let copy = board;
    assert_eq!(evaluate(&board), Outcome::Undecided);
    assert_eq!(board, copy);
}
