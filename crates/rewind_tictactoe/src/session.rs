//! Game session: timeline, current step and settings.

use super::contracts::{Contract, MoveContract};
use super::error::GameError;
use super::invariants::{InvariantSet, SessionInvariants, describe};
use super::outcome::Outcome;
use super::rules::evaluate;
use super::timeline::Timeline;
use super::types::{GameMode, Player};
use super::view::SessionView;
use super::{Board, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// What [`GameSession::reset`] does with mode and first player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResetPolicy {
    /// Return to two-player mode with X first.
    #[default]
    ClearSettings,
    /// Keep the current mode and first player.
    KeepSettings,
}

/// A single game with time travel.
///
/// The session owns its timeline outright and changes only through
/// [`apply_move`](Self::apply_move), [`jump_to`](Self::jump_to),
/// [`reset`](Self::reset) and the settings setters. Each of those is a
/// single atomic update, so a caller may suspend between calls (for
/// example while delaying the engine's reply) without observing a
/// half-applied move.
///
/// Deserialization checks the session invariants and fails instead of
/// producing a session that could index past its timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SessionRecord")]
pub struct GameSession {
    timeline: Timeline,
    step: usize,
    mode: GameMode,
    first_player: Player,
    reset_policy: ResetPolicy,
}

/// Session as read from serialized input, before validation.
#[derive(Deserialize)]
struct SessionRecord {
    timeline: Timeline,
    step: usize,
    mode: GameMode,
    first_player: Player,
    #[serde(default)]
    reset_policy: ResetPolicy,
}

impl TryFrom<SessionRecord> for GameSession {
    type Error = GameError;

    fn try_from(record: SessionRecord) -> Result<Self, Self::Error> {
        let session = Self {
            timeline: record.timeline,
            step: record.step,
            mode: record.mode,
            first_player: record.first_player,
            reset_policy: record.reset_policy,
        };
        SessionInvariants::check_all(&session).map_err(|violations| {
            let descriptions = describe(&violations);
            warn!(%descriptions, "Rejected serialized session");
            GameError::InvariantViolation(descriptions)
        })?;
        Ok(session)
    }
}

impl GameSession {
    /// Creates a session at step 0 with an empty board.
    #[instrument]
    pub fn new(first_player: Player, mode: GameMode) -> Self {
        info!("Creating new game session");
        Self {
            timeline: Timeline::new(),
            step: 0,
            mode,
            first_player,
            reset_policy: ResetPolicy::default(),
        }
    }

    /// Sets the reset policy.
    pub fn with_reset_policy(mut self, policy: ResetPolicy) -> Self {
        self.reset_policy = policy;
        self
    }

    /// Returns the recorded timeline.
    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// Returns the current step.
    pub fn step(&self) -> usize {
        self.step
    }

    /// Returns the game mode.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Returns the mark that plays on even steps.
    pub fn first_player(&self) -> Player {
        self.first_player
    }

    /// Returns the reset policy.
    pub fn reset_policy(&self) -> ResetPolicy {
        self.reset_policy
    }

    /// Returns the board at the current step.
    pub fn current_board(&self) -> &Board {
        // `step < timeline.len()` is maintained by every transition.
        &self.timeline.snapshots()[self.step]
    }

    /// Evaluates the board at the current step.
    pub fn outcome(&self) -> Outcome {
        evaluate(self.current_board())
    }

    /// Mark to play at the current step.
    ///
    /// Derived from step parity so it can never drift from the timeline.
    pub fn turn(&self) -> Player {
        if self.step % 2 == 0 {
            self.first_player
        } else {
            self.first_player.opponent()
        }
    }

    /// Places the current player's mark at `index`.
    ///
    /// Moves played from an earlier step discard the snapshots after it.
    ///
    /// # Errors
    ///
    /// - [`GameError::InvalidIndex`] if `index` is not in 0..9.
    /// - [`GameError::GameOver`] if the current board has an outcome.
    /// - [`GameError::CellOccupied`] if the square is taken.
    ///
    /// The session is unchanged on every error.
    #[instrument(skip(self), fields(step = self.step, player = %self.turn()))]
    pub fn apply_move(&mut self, index: usize) -> Result<SessionView, GameError> {
        let pos = Position::try_from(index)?;

        if let Err(e) = MoveContract::pre(self, &pos) {
            debug!(error = %e, "Move rejected");
            return Err(e);
        }

        let board = self.current_board().with_mark(index, self.turn())?;
        let mut next = self.clone();
        next.step = next.timeline.branch(self.step, board);

        #[cfg(debug_assertions)]
        MoveContract::post(self, &next)?;

        *self = next;
        info!(
            position = %pos,
            step = self.step,
            outcome = %self.outcome(),
            "Move applied"
        );
        Ok(self.view())
    }

    /// Moves the current step without touching the timeline.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidStep`] if `step` is not a recorded step.
    #[instrument(skip(self), fields(len = self.timeline.len()))]
    pub fn jump_to(&mut self, step: usize) -> Result<SessionView, GameError> {
        if step >= self.timeline.len() {
            warn!("Jump outside timeline");
            return Err(GameError::InvalidStep {
                step,
                len: self.timeline.len(),
            });
        }
        self.step = step;
        debug!(turn = %self.turn(), "Jumped");
        Ok(self.view())
    }

    /// Starts over from an empty board.
    ///
    /// Mode and first player follow the session's [`ResetPolicy`].
    #[instrument(skip(self), fields(policy = ?self.reset_policy))]
    pub fn reset(&mut self) -> SessionView {
        let (first_player, mode) = match self.reset_policy {
            ResetPolicy::ClearSettings => (Player::X, GameMode::TwoPlayer),
            ResetPolicy::KeepSettings => (self.first_player, self.mode),
        };
        *self = Self::new(first_player, mode).with_reset_policy(self.reset_policy);
        self.view()
    }

    /// Changes the game mode.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::SettingsLocked`] unless the current step is 0.
    #[instrument(skip(self), fields(step = self.step))]
    pub fn set_mode(&mut self, mode: GameMode) -> Result<SessionView, GameError> {
        if self.step != 0 {
            debug!("Mode change rejected mid-game");
            return Err(GameError::SettingsLocked);
        }
        self.mode = mode;
        Ok(self.view())
    }

    /// Changes which mark moves first.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::SettingsLocked`] once any move is recorded,
    /// since recorded snapshots were played in the old order.
    #[instrument(skip(self), fields(len = self.timeline.len()))]
    pub fn set_first_player(&mut self, first_player: Player) -> Result<SessionView, GameError> {
        if self.timeline.len() != 1 {
            debug!("First player change rejected with recorded moves");
            return Err(GameError::SettingsLocked);
        }
        self.first_player = first_player;
        Ok(self.view())
    }

    /// Labels for each recorded step, for a history list.
    pub fn history_labels(&self) -> Vec<String> {
        (0..self.timeline.len())
            .map(|step| {
                if step == 0 {
                    "Go to game start".to_string()
                } else {
                    format!("Go to move #{}", step)
                }
            })
            .collect()
    }

    /// Snapshot of the current step.
    pub fn view(&self) -> SessionView {
        SessionView {
            board: *self.current_board(),
            outcome: self.outcome(),
            turn: self.turn(),
            step: self.step,
            timeline_len: self.timeline.len(),
            mode: self.mode,
            first_player: self.first_player,
            last_move: self.timeline.move_at(self.step),
        }
    }

    #[cfg(test)]
    pub(crate) fn corrupt_latest_for_test(&mut self, pos: Position, player: Player) {
        let last = self.timeline.len() - 1;
        self.timeline.overwrite_for_test(last, pos, player);
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(Player::X, GameMode::TwoPlayer)
    }
}
