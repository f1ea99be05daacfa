//! First-class invariants for game sessions.
//!
//! Invariants are logical properties that must hold after every session
//! transition. They are testable independently and serve as
//! documentation of what the timeline guarantees.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// Joins violation descriptions into one message.
pub fn describe(violations: &[InvariantViolation]) -> String {
    violations
        .iter()
        .map(|v| v.description.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// A set of invariants that can be checked together.
///
/// Implementations are provided for tuples.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with a list of
    /// violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn collect<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

fn finish(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        collect::<S, I1>(state, &mut violations);
        collect::<S, I2>(state, &mut violations);
        collect::<S, I3>(state, &mut violations);
        finish(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        collect::<S, I1>(state, &mut violations);
        collect::<S, I2>(state, &mut violations);
        finish(violations)
    }
}

pub mod alternating_marks;
pub mod monotonic_snapshots;
pub mod step_in_bounds;

pub use alternating_marks::AlternatingMarksInvariant;
pub use monotonic_snapshots::MonotonicSnapshotsInvariant;
pub use step_in_bounds::StepInBoundsInvariant;

/// All session invariants as a composable set.
pub type SessionInvariants = (
    MonotonicSnapshotsInvariant,
    AlternatingMarksInvariant,
    StepInBoundsInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameMode, GameSession, Player};

    #[test]
    fn test_invariant_set_holds_for_new_session() {
        let session = GameSession::new(Player::X, GameMode::TwoPlayer);
        assert!(SessionInvariants::check_all(&session).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves_and_jumps() {
        let mut session = GameSession::new(Player::O, GameMode::TwoPlayer);
        for index in [0, 4, 8] {
            session.apply_move(index).unwrap();
        }
        session.jump_to(1).unwrap();
        assert!(SessionInvariants::check_all(&session).is_ok());
        session.apply_move(2).unwrap();
        assert!(SessionInvariants::check_all(&session).is_ok());
    }

    #[test]
    fn test_invariant_set_detects_violations() {
        let mut session = GameSession::new(Player::X, GameMode::TwoPlayer);
        session.apply_move(4).unwrap();

        // Corrupt the latest snapshot with a second mark.
        session.corrupt_latest_for_test(crate::Position::TopLeft, Player::O);

        let violations = SessionInvariants::check_all(&session).unwrap_err();
        assert!(!violations.is_empty());
    }

    #[test]
    fn test_two_invariants_as_set() {
        let session = GameSession::new(Player::X, GameMode::OnePlayer);

        type TwoInvariants = (MonotonicSnapshotsInvariant, StepInBoundsInvariant);
        assert!(TwoInvariants::check_all(&session).is_ok());
    }
}
