//! Command orchestration from UI intents to the backend command queue.

use crossbeam_channel::{Receiver, Sender, TrySendError};
use shared::domain::VariantName;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorContext, UiEvent};
use crate::controller::state::AppState;

pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
) -> Result<(), UiError> {
    let cmd_name = cmd.name();
    let context = match &cmd {
        BackendCommand::ListVariants => UiErrorContext::LoadVariants,
        BackendCommand::PredictVariant { .. } => UiErrorContext::Predict,
    };

    match cmd_tx.try_send(cmd) {
        Ok(()) => {
            tracing::debug!(command = cmd_name, "queued ui->backend command");
            Ok(())
        }
        Err(TrySendError::Full(_)) => {
            tracing::warn!(command = cmd_name, "ui->backend command queue is full");
            Err(UiError::from_message(
                context,
                "UI command queue is full; please retry",
            ))
        }
        Err(TrySendError::Disconnected(_)) => {
            tracing::error!(command = cmd_name, "backend command processor disconnected");
            Err(UiError::from_message(
                context,
                "Backend command processor disconnected (possible startup/runtime failure)",
            ))
        }
    }
}

/// Owns [`AppState`] and is the only writer to it.
///
/// Intents from the view become backend commands; backend events are folded
/// into state by [`PredictionController::process_ui_events`]. There is no
/// guard against overlapping predictions: responses apply in arrival order.
pub struct PredictionController {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    state: AppState,
    variants_requested: bool,
}

impl PredictionController {
    pub fn new(cmd_tx: Sender<BackendCommand>, ui_rx: Receiver<UiEvent>) -> Self {
        Self {
            cmd_tx,
            ui_rx,
            state: AppState::default(),
            variants_requested: false,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Requests the variant list on first activation only.
    pub fn initialize(&mut self) {
        if self.variants_requested {
            return;
        }
        self.variants_requested = true;
        if let Err(err) = dispatch_backend_command(&self.cmd_tx, BackendCommand::ListVariants) {
            self.state.apply(UiEvent::Error(err));
        }
    }

    pub fn select_variant(&mut self, variant_name: VariantName) {
        tracing::info!(variant = %variant_name, "variant selected");
        self.state.begin_prediction();
        if let Err(err) = dispatch_backend_command(
            &self.cmd_tx,
            BackendCommand::PredictVariant { variant_name },
        ) {
            self.state.apply(UiEvent::Error(err));
        }
    }

    pub fn clear_error(&mut self) {
        self.state.clear_error();
    }

    /// Drains pending backend events; returns how many were applied.
    pub fn process_ui_events(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(event) = self.ui_rx.try_recv() {
            self.state.apply(event);
            applied += 1;
        }
        applied
    }
}

#[cfg(test)]
#[path = "tests/orchestration_tests.rs"]
mod tests;
