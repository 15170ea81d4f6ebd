//! Line-oriented console loop.
//!
//! Reads commands from an async line source, submits each one to the session
//! and writes every new transcript line to the output as it appears. On end of
//! input or `quit`, work already handed to the ledger is awaited so its
//! outcome reaches the transcript before the loop returns.

use std::io::Write;
use std::sync::Arc;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::task::{JoinError, JoinHandle, JoinSet};

use rise_domain::GameState;

use crate::terminal;
use crate::use_cases::{GameSession, SessionError, StartOutcome, SubmitOutcome};

#[derive(Debug, thiserror::Error)]
pub enum ConsoleError {
    #[error("Console I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Session task failed: {0}")]
    Task(#[from] JoinError),

    #[error(transparent)]
    Session(#[from] SessionError),
}

/// Start the session, then run commands from `input` until it ends or the
/// player quits.
///
/// Input is only read once `start` has settled, so early lines wait instead
/// of being rejected as busy.
///
/// # Errors
///
/// - `ConsoleError::Session` if `start` fails (the failure is rendered first)
/// - `ConsoleError::Io` if reading input or writing output fails
/// - `ConsoleError::Task` if a session task panics
pub async fn run<R, W>(
    session: Arc<GameSession>,
    input: R,
    mut output: W,
) -> Result<(), ConsoleError>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut printed = session.snapshot();
    let mut updates = session.subscribe();
    let mut lines = input.lines();

    let mut starting: JoinHandle<Result<StartOutcome, SessionError>> = {
        let session = session.clone();
        tokio::spawn(async move { session.start().await })
    };
    let mut started = false;
    let mut in_flight = JoinSet::new();

    loop {
        tokio::select! {
            changed = updates.changed() => {
                if changed.is_err() {
                    break;
                }
                let current = updates.borrow_and_update().clone();
                render(&mut output, &printed, &current)?;
                printed = current;
            }
            result = &mut starting, if !started => {
                started = true;
                if let Err(err) = settle_start(result?) {
                    render(&mut output, &printed, &session.snapshot())?;
                    return Err(err.into());
                }
            }
            Some(finished) = in_flight.join_next() => {
                finished?;
            }
            line = lines.next_line(), if started => {
                let Some(line) = line? else {
                    break;
                };
                let command = line.trim().to_lowercase();
                if command == "quit" || command == "exit" {
                    break;
                }

                let session = session.clone();
                in_flight.spawn(async move {
                    if session.submit(&line).await == SubmitOutcome::Rejected {
                        tracing::info!("Still waiting on the ledger, command ignored");
                    }
                });
            }
        }
    }

    if !started {
        if let Err(err) = settle_start(starting.await?) {
            render(&mut output, &printed, &session.snapshot())?;
            return Err(err.into());
        }
    }
    while let Some(finished) = in_flight.join_next().await {
        finished?;
    }

    render(&mut output, &printed, &session.snapshot())?;
    Ok(())
}

fn settle_start(result: Result<StartOutcome, SessionError>) -> Result<(), SessionError> {
    match result? {
        StartOutcome::Disconnected => {
            tracing::warn!("RISE_PLAYER_ID is not set, running without a wallet");
        }
        outcome => tracing::info!(outcome = ?outcome, "Session started"),
    }
    Ok(())
}

fn render<W: Write>(
    output: &mut W,
    printed: &GameState,
    current: &GameState,
) -> std::io::Result<()> {
    for line in terminal::fresh_lines(printed.transcript(), current.transcript()) {
        writeln!(output, "{}", terminal::paint(line))?;
    }
    output.flush()
}
