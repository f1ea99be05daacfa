//! End-to-end tests for the interactive loop.

use rewind_cli::{GameEvent, MinimaxPlayer, Orchestrator, PlayConfig, app};
use rewind_tictactoe::{GameMode, GameSession, Outcome, Player, ResetPolicy};
use std::io::Write;
use std::time::Duration;
use tokio::sync::mpsc;

fn orchestrator(session: GameSession) -> (Orchestrator, mpsc::UnboundedReceiver<GameEvent>) {
    let (tx, rx) = mpsc::unbounded_channel();
    let orch = Orchestrator::new(session, Box::new(MinimaxPlayer::default()), Duration::ZERO, tx);
    (orch, rx)
}

async fn play(
    orch: &mut Orchestrator,
    events: &mut mpsc::UnboundedReceiver<GameEvent>,
    script: &str,
) -> String {
    let input = tokio::io::BufReader::new(script.as_bytes());
    let mut out = Vec::new();
    app::run(orch, events, input, &mut out).await.expect("Loop runs");
    String::from_utf8(out).expect("UTF-8 output")
}

#[tokio::test]
async fn test_two_player_game_to_win() {
    let (mut orch, mut rx) = orchestrator(GameSession::default());
    let out = play(&mut orch, &mut rx, "1\n4\n2\n5\n3\nquit\n").await;

    assert!(out.contains("Winner: X"));
    assert_eq!(orch.view().outcome, Outcome::Win(Player::X));
    assert!(out.contains("Game over: X wins"));
    assert!(rx.try_recv().is_err());
}

#[tokio::test]
async fn test_engine_reply_prints_before_board() {
    let session = GameSession::new(Player::X, GameMode::OnePlayer);
    let (mut orch, mut rx) = orchestrator(session);
    let out = play(&mut orch, &mut rx, "5\n").await;

    let thinking = out.find("Computer is thinking...").expect("Thinking line");
    let reply = out.find("Computer plays O -> Top-left").expect("Reply line");
    let board = out.rfind("O|2|3").expect("Board after reply");
    assert!(thinking < reply && reply < board);
    assert!(out.trim_end().ends_with("Next player: X"));
}

#[tokio::test]
async fn test_history_jump_and_branch() {
    let (mut orch, mut rx) = orchestrator(GameSession::default());
    let out = play(&mut orch, &mut rx, "1\n5\n9\nhistory\njump 1\n3\n").await;

    assert!(out.contains("Go to move #3"));
    let session = orch.session();
    assert_eq!(session.step(), 2);
    assert_eq!(session.timeline().len(), 3);
}

#[tokio::test]
async fn test_one_player_engine_never_loses() {
    let session = GameSession::new(Player::X, GameMode::OnePlayer);
    let (mut orch, mut rx) = orchestrator(session);
    // Human tries corners; the engine answers each move.
    play(&mut orch, &mut rx, "1\n9\n3\n7\n2\n4\n6\n8\n").await;

    let outcome = orch.view().outcome;
    assert!(outcome.is_terminal());
    assert_ne!(outcome, Outcome::Win(Player::X));
}

#[tokio::test]
async fn test_bad_input_and_locked_settings_are_reported() {
    let (mut orch, mut rx) = orchestrator(GameSession::default());
    let out = play(&mut orch, &mut rx, "bogus\n5\nmode\nfirst o\njump 7\n").await;

    assert!(out.contains("Unrecognized input: bogus"));
    assert!(out.contains("Settings can only change at the start of a game"));
    assert!(out.contains("Step 7 is outside the timeline (length 2)"));
    assert_eq!(orch.view().mode, GameMode::TwoPlayer);
}

#[tokio::test]
async fn test_reset_follows_configured_policy() {
    let mut file = tempfile::NamedTempFile::new().expect("Temp file");
    writeln!(
        file,
        "ai_delay_ms = 0\nmode = \"one_player\"\nfirst_player = \"O\"\nreset_policy = \"keep_settings\""
    )
    .expect("Write config");

    let config = PlayConfig::from_file(file.path()).expect("Valid config");
    assert_eq!(*config.reset_policy(), ResetPolicy::KeepSettings);

    let session = GameSession::new(*config.first_player(), *config.mode())
        .with_reset_policy(*config.reset_policy());
    let (mut orch, mut rx) = orchestrator(session);
    play(&mut orch, &mut rx, "5\nreset\n").await;

    let view = orch.view();
    assert_eq!(view.step, 0);
    assert_eq!(view.mode, GameMode::OnePlayer);
    assert_eq!(view.first_player, Player::O);
}

#[test]
fn test_invalid_config_file_reports_error() {
    let mut file = tempfile::NamedTempFile::new().expect("Temp file");
    writeln!(file, "mode = \"three_player\"").expect("Write config");
    let err = PlayConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}
