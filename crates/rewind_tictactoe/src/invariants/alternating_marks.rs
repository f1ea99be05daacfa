//! Alternating marks invariant: the first player moves on odd steps.

use super::super::GameSession;
use super::Invariant;

/// Invariant: players alternate turns, starting with the configured
/// first player, and the derived turn matches the current step.
pub struct AlternatingMarksInvariant;

impl Invariant<GameSession> for AlternatingMarksInvariant {
    fn holds(session: &GameSession) -> bool {
        let timeline = session.timeline();
        let first = session.first_player();

        let marks_alternate = (1..timeline.len()).all(|step| {
            let expected = if step % 2 == 1 { first } else { first.opponent() };
            timeline
                .move_at(step)
                .is_some_and(|mv| mv.player == expected)
        });

        let expected_turn = if session.step() % 2 == 0 {
            first
        } else {
            first.opponent()
        };

        marks_alternate && session.turn() == expected_turn
    }

    fn description() -> &'static str {
        "Players alternate turns starting with the first player"
    }
}
