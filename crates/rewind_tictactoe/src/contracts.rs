//! Contract-based validation for session moves.
//!
//! Contracts define correctness through preconditions and postconditions:
//! {P} action {Q}.

use super::error::GameError;
use super::invariants::{InvariantSet, SessionInvariants, describe};
use super::rules::evaluate;
use super::{GameSession, Position};
use tracing::{instrument, warn};

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), GameError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), GameError>;
}

/// Precondition: the board at the current step has no outcome yet.
pub struct GameUndecided;

impl GameUndecided {
    /// Checks the precondition.
    #[instrument(level = "trace", skip(session))]
    pub fn check(session: &GameSession) -> Result<(), GameError> {
        if evaluate(session.current_board()).is_terminal() {
            Err(GameError::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the target square is empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Checks the precondition.
    #[instrument(level = "trace", skip(session))]
    pub fn check(pos: &Position, session: &GameSession) -> Result<(), GameError> {
        if session.current_board().is_empty(*pos) {
            Ok(())
        } else {
            Err(GameError::CellOccupied(*pos))
        }
    }
}

/// Contract for move actions.
///
/// Preconditions:
/// - Board at the current step is undecided
/// - Target square is empty
///
/// Postconditions:
/// - Exactly one mark was added, at the end of the timeline
/// - All [`SessionInvariants`] hold
pub struct MoveContract;

impl Contract<GameSession, Position> for MoveContract {
    fn pre(session: &GameSession, pos: &Position) -> Result<(), GameError> {
        GameUndecided::check(session)?;
        SquareIsEmpty::check(pos, session)
    }

    fn post(before: &GameSession, after: &GameSession) -> Result<(), GameError> {
        if after.step() != before.step() + 1 || after.step() + 1 != after.timeline().len() {
            warn!(
                before = before.step(),
                after = after.step(),
                len = after.timeline().len(),
                "Move did not land at the end of the timeline"
            );
            return Err(GameError::InvariantViolation(
                "Postcondition failed: new snapshot must follow the previous step".to_string(),
            ));
        }

        SessionInvariants::check_all(after).map_err(|violations| {
            let descriptions = describe(&violations);
            warn!(%descriptions, "Session invariants violated");
            GameError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
