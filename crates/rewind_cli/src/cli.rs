//! Command-line interface for rewind.

use clap::{Parser, Subcommand, ValueEnum};
use rewind_tictactoe::{Board, GameMode, Player};

/// Rewind - tic-tac-toe with time travel and a perfect opponent
#[derive(Parser, Debug)]
#[command(name = "rewind")]
#[command(about = "Tic-tac-toe with move history and a minimax opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively on the terminal
    Play {
        /// Path to a TOML config file
        #[arg(short, long, default_value = "rewind.toml")]
        config: std::path::PathBuf,

        /// Number of human players
        #[arg(long, value_enum)]
        mode: Option<ModeArg>,

        /// Mark that moves first (x or o)
        #[arg(long)]
        first: Option<Player>,

        /// Pause before the computer replies, in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,
    },

    /// Print the engine's move for a board
    BestMove {
        /// Nine squares, row-major: X, O or '.'
        board: Board,

        /// Mark to move (x or o)
        player: Player,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Print the minimax score of every legal move
    Analyze {
        /// Nine squares, row-major: X, O or '.'
        board: Board,

        /// Mark to move (x or o)
        player: Player,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

/// Number of human players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// Play against the computer
    One,
    /// Two humans share the board
    Two,
}

impl From<ModeArg> for GameMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::One => GameMode::OnePlayer,
            ModeArg::Two => GameMode::TwoPlayer,
        }
    }
}
