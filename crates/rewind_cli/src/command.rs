//! Parsing of interactive input lines.

use rewind_tictactoe::{Player, Position};
use tracing::instrument;

/// One line of user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserCommand {
    /// Place the current player's mark.
    Place(Position),
    /// Show a recorded step.
    Jump(usize),
    /// Start a new game.
    Reset,
    /// Switch between one- and two-player mode.
    ToggleMode,
    /// Choose which mark moves first.
    First(Player),
    /// List recorded steps.
    History,
    /// Show the command list.
    Help,
    /// Leave.
    Quit,
}

/// Input that is not a command.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum CommandError {
    /// Blank line.
    #[display("Empty input")]
    Empty,
    /// Unknown word or bad argument.
    #[display("Unrecognized input: {}", _0)]
    Unrecognized(String),
}

impl std::error::Error for CommandError {}

/// Help text listing every command.
pub const HELP: &str = "\
Commands:
  1-9          place a mark (cells numbered left to right, top to bottom)
  jump N       show step N (0 is the game start)
  history      list recorded steps
  mode         switch between one and two players (before the first move)
  first x|o    choose who moves first (before the first move)
  reset        start a new game
  help         show this list
  quit         leave";

impl std::str::FromStr for UserCommand {
    type Err = CommandError;

    #[instrument(level = "trace")]
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Err(CommandError::Empty);
        };
        let arg = words.next();
        let unrecognized = || CommandError::Unrecognized(line.trim().to_string());

        let command = match (head.to_lowercase().as_str(), arg) {
            ("jump" | "j" | "goto", Some(step)) => {
                UserCommand::Jump(step.parse().map_err(|_| unrecognized())?)
            }
            ("first", Some(mark)) => UserCommand::First(mark.parse().map_err(|_| unrecognized())?),
            ("reset" | "new", None) => UserCommand::Reset,
            ("mode", None) => UserCommand::ToggleMode,
            ("history" | "h", None) => UserCommand::History,
            ("help" | "?", None) => UserCommand::Help,
            ("quit" | "q" | "exit", None) => UserCommand::Quit,
            (_, None) => UserCommand::Place(
                Position::from_label_or_number(head).ok_or_else(unrecognized)?,
            ),
            _ => return Err(unrecognized()),
        };

        if words.next().is_some() {
            return Err(unrecognized());
        }
        Ok(command)
    }
}
