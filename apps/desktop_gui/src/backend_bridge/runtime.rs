//! Runtime bridge between UI command queue and backend event intake.
//!
//! One worker thread hosts a tokio runtime. Each solve or scramble command
//! becomes its own task; the in-flight solve task is kept so it can be
//! aborted on cancel.

use std::{sync::Arc, thread};

use client_core::SolverApi;
use crossbeam_channel::{Receiver, Sender};
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

use crate::{
    backend_bridge::commands::BackendCommand,
    controller::events::{Ticket, UiEvent},
};

pub fn launch(
    client: Arc<dyn SolverApi>,
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                error!("failed to build backend runtime: {err}");
                let _ = ui_tx.try_send(UiEvent::BackendUnavailable(format!(
                    "backend worker startup failure: failed to build runtime: {err}"
                )));
                return;
            }
        };

        let _ = ui_tx.try_send(UiEvent::Info("Backend worker ready".to_string()));
        runtime.block_on(serve_commands(client, cmd_rx, ui_tx));
        debug!("backend command loop finished");
    })
}

async fn serve_commands(
    client: Arc<dyn SolverApi>,
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
) {
    let mut in_flight_solve: Option<(Ticket, JoinHandle<()>)> = None;

    while let Ok(cmd) = cmd_rx.recv() {
        match cmd {
            BackendCommand::Solve { ticket, state } => {
                if let Some((previous, handle)) = in_flight_solve.take() {
                    if !handle.is_finished() {
                        warn!(previous = previous.0, ticket = ticket.0, "aborting superseded solve");
                        handle.abort();
                    }
                }
                let client = client.clone();
                let ui_tx = ui_tx.clone();
                let handle = tokio::spawn(async move {
                    let outcome = client.solve(&state).await;
                    if ui_tx
                        .try_send(UiEvent::SolveFinished { ticket, outcome })
                        .is_err()
                    {
                        warn!(ticket = ticket.0, "ui event queue unavailable; solve result lost");
                    }
                });
                in_flight_solve = Some((ticket, handle));
            }
            BackendCommand::CancelSolve { ticket } => match in_flight_solve.take() {
                Some((active, handle)) if active == ticket => {
                    handle.abort();
                    info!(ticket = ticket.0, "aborted in-flight solve");
                }
                other => {
                    debug!(ticket = ticket.0, "cancel for a solve that is no longer in flight");
                    in_flight_solve = other;
                }
            },
            BackendCommand::Scramble { ticket } => {
                let client = client.clone();
                let ui_tx = ui_tx.clone();
                tokio::spawn(async move {
                    let outcome = client.scramble().await;
                    if ui_tx
                        .try_send(UiEvent::ScrambleFinished { ticket, outcome })
                        .is_err()
                    {
                        warn!(ticket = ticket.0, "ui event queue unavailable; scramble result lost");
                    }
                });
            }
        }
    }

    if let Some((_, handle)) = in_flight_solve {
        handle.abort();
    }
}

#[cfg(test)]
#[path = "tests/runtime_tests.rs"]
mod tests;
