//! Sequencing of human moves, the artificial delay and engine replies.

use crate::players::MoveSource;
use anyhow::Result;
use rewind_tictactoe::{GameError, GameMode, GameSession, Move, Outcome, Player, SessionView};
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};

/// Messages sent from orchestrator to the front end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A mark was placed.
    MoveMade {
        /// The move.
        mv: Move,
        /// Whether the engine played it.
        by_ai: bool,
    },
    /// The engine is about to think.
    AgentThinking,
    /// An input was ignored.
    Rejected(String),
    /// The current board reached an outcome.
    GameOver(Outcome),
}

/// Drives a [`GameSession`] for one front end.
///
/// Every session call is synchronous and atomic; the only suspension
/// point is the delay before the engine replies.
pub struct Orchestrator {
    session: GameSession,
    ai: Box<dyn MoveSource>,
    delay: Duration,
    event_tx: mpsc::UnboundedSender<GameEvent>,
}

impl Orchestrator {
    /// Creates a new orchestrator.
    pub fn new(
        session: GameSession,
        ai: Box<dyn MoveSource>,
        delay: Duration,
        event_tx: mpsc::UnboundedSender<GameEvent>,
    ) -> Self {
        Self {
            session,
            ai,
            delay,
            event_tx,
        }
    }

    /// Returns the session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Current view.
    pub fn view(&self) -> SessionView {
        self.session.view()
    }

    /// Plays a human move at `index`, then the engine's reply in
    /// one-player mode.
    ///
    /// Rejected moves are reported as [`GameEvent::Rejected`] and leave
    /// the session untouched.
    ///
    /// # Errors
    ///
    /// Fails on contract errors (an index outside 0..9) and when the
    /// event channel is closed.
    #[instrument(skip(self), fields(step = self.session.step()))]
    pub async fn handle_click(&mut self, index: usize) -> Result<SessionView> {
        let view = match self.session.apply_move(index) {
            Ok(view) => view,
            Err(e) if e.is_rejection() => {
                debug!(error = %e, "Click ignored");
                self.event_tx.send(GameEvent::Rejected(e.to_string()))?;
                return Ok(self.session.view());
            }
            Err(e) => return Err(e.into()),
        };
        self.announce(&view, false)?;

        if view.outcome.is_terminal() || !view.mode.is_ai() {
            return Ok(view);
        }

        self.event_tx.send(GameEvent::AgentThinking)?;
        tokio::time::sleep(self.delay).await;

        let Some(position) = self.ai.choose(&view).await else {
            warn!(ai = %self.ai.name(), "Engine found no move");
            return Ok(view);
        };
        let view = self.session.apply_move(position.to_index())?;
        info!(ai = %self.ai.name(), %position, "Engine replied");
        self.announce(&view, true)?;
        Ok(view)
    }

    fn announce(&self, view: &SessionView, by_ai: bool) -> Result<()> {
        if let Some(mv) = view.last_move {
            self.event_tx.send(GameEvent::MoveMade { mv, by_ai })?;
        }
        if view.outcome.is_terminal() {
            self.event_tx.send(GameEvent::GameOver(view.outcome))?;
        }
        Ok(())
    }

    /// Shows an earlier (or later) recorded step.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, step: usize) -> Result<SessionView, GameError> {
        self.session.jump_to(step)
    }

    /// Starts a new game.
    #[instrument(skip(self))]
    pub fn reset(&mut self) -> SessionView {
        self.session.reset()
    }

    /// Switches between one- and two-player mode.
    #[instrument(skip(self))]
    pub fn toggle_mode(&mut self) -> Result<SessionView, GameError> {
        let mode: GameMode = self.session.mode().toggle();
        self.session.set_mode(mode)
    }

    /// Chooses which mark moves first.
    #[instrument(skip(self))]
    pub fn set_first_player(&mut self, player: Player) -> Result<SessionView, GameError> {
        self.session.set_first_player(player)
    }
}
