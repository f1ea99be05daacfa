//! Step bounds invariant: the current step names a recorded snapshot.

use super::super::GameSession;
use super::Invariant;

/// Invariant: `0 <= step < timeline.len()`.
pub struct StepInBoundsInvariant;

impl Invariant<GameSession> for StepInBoundsInvariant {
    fn holds(session: &GameSession) -> bool {
        session.step() < session.timeline().len()
    }

    fn description() -> &'static str {
        "Current step lies within the timeline"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameMode, Player};

    #[test]
    fn test_holds_through_jumps() {
        let mut session = GameSession::new(Player::X, GameMode::TwoPlayer);
        session.apply_move(3).unwrap();
        session.apply_move(5).unwrap();
        for step in 0..3 {
            session.jump_to(step).unwrap();
            assert!(StepInBoundsInvariant::holds(&session));
        }
    }
}
