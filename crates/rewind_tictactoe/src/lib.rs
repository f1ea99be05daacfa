//! Rewind tic-tac-toe - game state machine and minimax engine
//!
//! A 3x3 "connect three" game with a navigable history of board
//! snapshots and an exhaustive minimax opponent.
//!
//! # Architecture
//!
//! - **Board model**: [`Board`] values and pure rule functions ([`evaluate`])
//! - **State machine**: [`GameSession`] owns the [`Timeline`] and current step
//! - **Decision engine**: [`find_best_move`] searches the full game tree
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::{GameMode, GameSession, Outcome, Player, find_best_move};
//!
//! let mut session = GameSession::new(Player::X, GameMode::OnePlayer);
//! let view = session.apply_move(4)?;
//! assert_eq!(view.outcome, Outcome::Undecided);
//!
//! if let Some(reply) = find_best_move(&view.board, view.turn) {
//!     session.apply_move(reply.to_index())?;
//! }
//! assert_eq!(session.step(), 2);
//! # Ok::<(), rewind_tictactoe::GameError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod error;
mod minimax;
mod outcome;
mod position;
mod session;
mod timeline;
mod types;
mod view;

pub mod contracts;
pub mod invariants;
pub mod rules;

pub use action::Move;
pub use board::{Board, BoardParseError};
pub use error::GameError;
pub use minimax::{find_best_move, score_moves};
pub use outcome::Outcome;
pub use position::Position;
pub use rules::evaluate;
pub use session::{GameSession, ResetPolicy};
pub use timeline::Timeline;
pub use types::{GameMode, Player, Square};
pub use view::SessionView;
