//! Move sources for the computer side.

use async_trait::async_trait;
use derive_new::new;
use rewind_tictactoe::{Position, SessionView, find_best_move};
use tracing::{debug, instrument};

/// Something that picks a move for the side to play.
#[async_trait]
pub trait MoveSource: Send {
    /// Chooses a move for `view.turn` on `view.board`.
    ///
    /// Returns `None` when no move is available.
    async fn choose(&mut self, view: &SessionView) -> Option<Position>;

    /// Display name.
    fn name(&self) -> &str;
}

/// The exhaustive minimax engine.
#[derive(Debug, Clone, new)]
pub struct MinimaxPlayer {
    name: String,
}

impl Default for MinimaxPlayer {
    fn default() -> Self {
        Self::new("Computer".to_string())
    }
}

#[async_trait]
impl MoveSource for MinimaxPlayer {
    #[instrument(skip(self, view), fields(ai = %self.name, step = view.step))]
    async fn choose(&mut self, view: &SessionView) -> Option<Position> {
        let choice = find_best_move(&view.board, view.turn);
        debug!(position = ?choice, "AI chose position");
        choice
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rewind_tictactoe::{GameMode, GameSession, Player};

    #[tokio::test]
    async fn test_minimax_player_takes_first_winning_move() {
        let mut session = GameSession::new(Player::X, GameMode::OnePlayer);
        for index in [3, 0, 4, 1] {
            session.apply_move(index).unwrap();
        }
        // Blocking at 2 also forces a win and precedes the win at 5.
        let mut ai = MinimaxPlayer::default();
        assert_eq!(ai.choose(&session.view()).await, Some(Position::TopRight));
        assert_eq!(ai.name(), "Computer");
    }
}
