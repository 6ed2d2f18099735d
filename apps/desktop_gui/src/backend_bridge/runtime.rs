//! Backend worker: owns the tokio runtime and turns commands into HTTP calls.

use std::{sync::Arc, thread, time::Duration};

use client_core::{ClientSettings, PredictionApi, PredictionClient};
use crossbeam_channel::{Receiver, Sender, TrySendError};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorContext, UiEvent};

/// Starts the worker thread for the configured prediction service.
///
/// Startup failures are reported as a `BackendStartup` error event; the
/// command receiver is dropped so later dispatches see a disconnected queue.
pub fn launch(
    settings: ClientSettings,
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
) {
    match PredictionClient::from_settings(&settings) {
        Ok(client) => {
            tracing::info!(base_url = %client.base_url(), "prediction client configured");
            spawn_worker(Arc::new(client), cmd_rx, ui_tx);
        }
        Err(err) => {
            tracing::error!("backend worker startup failure: {err}");
            send_ui_event(
                &ui_tx,
                UiEvent::Error(UiError::from_client_error(UiErrorContext::BackendStartup, &err)),
            );
            drop(cmd_rx);
        }
    }
}

pub fn spawn_worker(
    api: Arc<dyn PredictionApi>,
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
                send_ui_event(
                    &ui_tx,
                    UiEvent::Error(UiError::from_message(
                        UiErrorContext::BackendStartup,
                        format!("backend worker startup failure: failed to build runtime: {err}"),
                    )),
                );
                tracing::error!("failed to build backend runtime: {err}");
                return;
            }
        };

        send_ui_event(&ui_tx, UiEvent::Info("Backend worker ready".to_string()));

        // Each command runs as its own task; a slow prediction never holds back
        // a newer one, and nothing is cancelled once issued.
        while let Ok(cmd) = cmd_rx.recv() {
            tracing::debug!(command = cmd.name(), "backend received command");
            runtime.spawn(handle_command(api.clone(), cmd, ui_tx.clone()));
        }

        tracing::info!("ui command queue closed; backend worker shutting down");
    })
}

pub async fn handle_command(
    api: Arc<dyn PredictionApi>,
    cmd: BackendCommand,
    ui_tx: Sender<UiEvent>,
) {
    let event = match cmd {
        BackendCommand::ListVariants => match api.list_variants().await {
            Ok(variants) => UiEvent::VariantsLoaded(variants),
            Err(err) => {
                UiEvent::Error(UiError::from_client_error(UiErrorContext::LoadVariants, &err))
            }
        },
        BackendCommand::PredictVariant { variant_name } => match api.predict(&variant_name).await {
            Ok(prediction) => UiEvent::PredictionReady(prediction),
            Err(err) => UiEvent::Error(UiError::from_client_error(UiErrorContext::Predict, &err)),
        },
    };
    deliver_ui_event(&ui_tx, event).await;
}

const FULL_QUEUE_RETRY: Duration = Duration::from_millis(10);

/// Waits for room in the event queue; a request's outcome is never dropped
/// while the UI is still listening.
async fn deliver_ui_event(ui_tx: &Sender<UiEvent>, mut event: UiEvent) {
    let mut warned = false;
    loop {
        match ui_tx.try_send(event) {
            Ok(()) => return,
            Err(TrySendError::Full(pending)) => {
                if !warned {
                    tracing::warn!("backend->ui event queue is full; waiting to deliver result");
                    warned = true;
                }
                event = pending;
                tokio::time::sleep(FULL_QUEUE_RETRY).await;
            }
            Err(TrySendError::Disconnected(_)) => {
                tracing::debug!("ui event receiver closed; result dropped");
                return;
            }
        }
    }
}

fn send_ui_event(ui_tx: &Sender<UiEvent>, event: UiEvent) {
    match ui_tx.try_send(event) {
        Ok(()) => {}
        Err(TrySendError::Full(_)) => tracing::warn!("backend->ui event queue is full; event dropped"),
        Err(TrySendError::Disconnected(_)) => {
            tracing::debug!("ui event receiver closed; event dropped")
        }
    }
}

#[cfg(test)]
#[path = "tests/runtime_tests.rs"]
mod tests;
