//! Rewind - tic-tac-toe CLI
//!
//! Interactive play plus one-shot engine queries.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use rewind_cli::{Cli, Command, MinimaxPlayer, ModeArg, Orchestrator, PlayConfig, app};
use rewind_tictactoe::{Board, GameSession, Player, find_best_move, score_moves};
use serde_json::json;
use std::path::PathBuf;
use tokio::sync::mpsc;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    initialize_tracing();

    match cli.command {
        Command::Play {
            config,
            mode,
            first,
            delay_ms,
        } => run_play(config, mode, first, delay_ms).await,
        Command::BestMove {
            board,
            player,
            json,
        } => run_best_move(board, player, json),
        Command::Analyze {
            board,
            player,
            json,
        } => run_analyze(board, player, json),
    }
}

/// Logs go to stderr so the board on stdout stays readable.
fn initialize_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn,rewind_cli=info,rewind_tictactoe=info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Run an interactive game on the terminal
#[instrument(skip_all, fields(config_path = %config_path.display()))]
async fn run_play(
    config_path: PathBuf,
    mode: Option<ModeArg>,
    first: Option<Player>,
    delay_ms: Option<u64>,
) -> Result<()> {
    let config = PlayConfig::load_or_default(Some(&config_path))?.with_overrides(
        mode.map(Into::into),
        first,
        delay_ms,
    );
    info!(?config, "Starting game");

    let session = GameSession::new(*config.first_player(), *config.mode())
        .with_reset_policy(*config.reset_policy());

    let (event_tx, mut event_rx) = mpsc::unbounded_channel();

    let mut orchestrator = Orchestrator::new(
        session,
        Box::new(MinimaxPlayer::default()),
        config.ai_delay(),
        event_tx,
    );

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    app::run(&mut orchestrator, &mut event_rx, stdin, &mut stdout).await
}

/// Print the engine's choice for a board
#[instrument]
fn run_best_move(board: Board, player: Player, json: bool) -> Result<()> {
    let choice = find_best_move(&board, player);
    if json {
        let value = json!({
            "board": board.to_string(),
            "player": player,
            "index": choice.map(|pos| pos.to_index()),
            "position": choice,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        match choice {
            Some(pos) => println!("{} ({})", pos.to_index(), pos),
            None => println!("No move: board is already decided"),
        }
    }
    Ok(())
}

/// Print the minimax score of each legal move
#[instrument]
fn run_analyze(board: Board, player: Player, json: bool) -> Result<()> {
    let scores = score_moves(&board, player);
    if json {
        let value: Vec<_> = scores
            .iter()
            .map(|(pos, score)| json!({ "index": pos.to_index(), "position": pos, "score": score }))
            .collect();
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        println!("{}\n", board.display());
        if scores.is_empty() {
            println!("No moves: board is already decided");
        }
        for (pos, score) in scores {
            let verdict = match score {
                1 => "win",
                0 => "draw",
                _ => "loss",
            };
            println!("{:>2} {:<14} {:>2} ({})", pos.to_index(), pos.label(), score, verdict);
        }
    }
    Ok(())
}
