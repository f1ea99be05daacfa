//! Plain-text rendering of session views and events.

use crate::orchestrator::GameEvent;
use rewind_tictactoe::{Outcome, SessionView};

/// Board, mode and status for the current step.
pub fn render_view(view: &SessionView) -> String {
    format!(
        "{}\n\nMode: {} | First: {} | Step {}/{}\n{}",
        view.board.display(),
        view.mode.label(),
        view.first_player,
        view.step,
        view.timeline_len - 1,
        view.status(),
    )
}

/// Numbered history list with the current step marked.
pub fn render_history(labels: &[String], current: usize) -> String {
    labels
        .iter()
        .enumerate()
        .map(|(step, label)| {
            let marker = if step == current { '>' } else { ' ' };
            format!("{} {:>2}. {}", marker, step, label)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// One line describing an orchestrator event.
pub fn render_event(event: &GameEvent) -> String {
    match event {
        GameEvent::MoveMade { mv, by_ai: true } => format!("Computer plays {}", mv),
        GameEvent::MoveMade { mv, by_ai: false } => mv.to_string(),
        GameEvent::AgentThinking => "Computer is thinking...".to_string(),
        GameEvent::Rejected(reason) => format!("Ignored: {}", reason),
        GameEvent::GameOver(Outcome::Win(player)) => format!("Game over: {} wins", player),
        GameEvent::GameOver(_) => "Game over: draw".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rewind_tictactoe::{GameMode, GameSession, Player};

    #[test]
    fn test_render_view() {
        let mut session = GameSession::new(Player::X, GameMode::OnePlayer);
        session.apply_move(0).unwrap();
        let text = render_view(&session.view());
        assert!(text.starts_with("X|2|3"));
        assert!(text.contains("Mode: One Player | First: X | Step 1/1"));
        assert!(text.ends_with("Next player: O"));
    }

    #[test]
    fn test_render_history_marks_current() {
        let labels = vec!["Go to game start".to_string(), "Go to move #1".to_string()];
        assert_eq!(
            render_history(&labels, 0),
            ">  0. Go to game start\n   1. Go to move #1"
        );
    }
}
