//! Rewind terminal front end
//!
//! Wires a [`rewind_tictactoe::GameSession`] to stdin/stdout and to the
//! minimax engine.
//!
//! # Architecture
//!
//! - **Orchestrator**: human move, artificial delay, engine reply
//! - **Players**: [`MoveSource`] implementations for the computer side
//! - **App**: line-based command loop and rendering
//! - **Config**: TOML settings with command-line overrides

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod app;
pub mod cli;
pub mod command;
pub mod config;
pub mod orchestrator;
pub mod players;
pub mod render;

pub use cli::{Cli, Command, ModeArg};
pub use command::{CommandError, UserCommand};
pub use config::{ConfigError, PlayConfig};
pub use orchestrator::{GameEvent, Orchestrator};
pub use players::{MinimaxPlayer, MoveSource};
