//! Interactive read-eval-print loop.

use crate::command::{HELP, UserCommand};
use crate::orchestrator::{GameEvent, Orchestrator};
use crate::render::{render_event, render_history, render_view};
use anyhow::Result;
use rewind_tictactoe::GameError;
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc;
use tracing::{debug, info, instrument};

/// Reads commands from `input` until `quit` or end of input, writing
/// the board after each one to `out`.
///
/// Events the orchestrator sent while handling a command are written
/// before the board they led to.
#[instrument(skip_all)]
pub async fn run<R, W>(
    orchestrator: &mut Orchestrator,
    events: &mut mpsc::UnboundedReceiver<GameEvent>,
    input: R,
    out: &mut W,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    info!("Starting interactive session");
    writeln!(out, "{}\n\n{}", render_view(&orchestrator.view()), HELP)?;

    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        let command = match line.parse::<UserCommand>() {
            Ok(command) => command,
            Err(e) => {
                debug!(error = %e, "Bad input");
                writeln!(out, "{} (type 'help')", e)?;
                continue;
            }
        };

        let result: Result<(), GameError> = match command {
            UserCommand::Quit => break,
            UserCommand::Help => {
                writeln!(out, "{}", HELP)?;
                continue;
            }
            UserCommand::History => {
                let session = orchestrator.session();
                writeln!(
                    out,
                    "{}",
                    render_history(&session.history_labels(), session.step())
                )?;
                continue;
            }
            UserCommand::Place(position) => {
                orchestrator.handle_click(position.to_index()).await?;
                Ok(())
            }
            UserCommand::Jump(step) => orchestrator.jump_to(step).map(drop),
            UserCommand::Reset => {
                orchestrator.reset();
                Ok(())
            }
            UserCommand::ToggleMode => orchestrator.toggle_mode().map(drop),
            UserCommand::First(player) => orchestrator.set_first_player(player).map(drop),
        };

        if let Err(e) = result {
            writeln!(out, "{}", e)?;
        }
        write_events(events, out)?;
        writeln!(out, "\n{}", render_view(&orchestrator.view()))?;
    }

    info!("Interactive session ended");
    Ok(())
}

fn write_events<W: Write>(
    events: &mut mpsc::UnboundedReceiver<GameEvent>,
    out: &mut W,
) -> Result<()> {
    while let Ok(event) = events.try_recv() {
        writeln!(out, "{}", render_event(&event))?;
    }
    Ok(())
}
