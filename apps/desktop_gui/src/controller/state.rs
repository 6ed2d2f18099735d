//! Application state owned by the controller and the transitions applied to it.

use shared::domain::{Prediction, VariantName};
use tracing::{info, warn};

use super::events::{err_label, UiEvent};

/// Request lifecycle for predictions.
///
/// `shown` keeps the last successful prediction on screen while a newer
/// request is in flight or after it failed.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum PredictionStatus {
    #[default]
    Idle,
    Loading {
        shown: Option<Prediction>,
    },
    Ready(Prediction),
    Failed {
        message: String,
        shown: Option<Prediction>,
    },
}

impl PredictionStatus {
    pub fn prediction(&self) -> Option<&Prediction> {
        match self {
            Self::Idle => None,
            Self::Ready(prediction) => Some(prediction),
            Self::Loading { shown } | Self::Failed { shown, .. } => shown.as_ref(),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading { .. })
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed { message, .. } => Some(message),
            _ => None,
        }
    }

    fn into_shown(self) -> Option<Prediction> {
        match self {
            Self::Idle => None,
            Self::Ready(prediction) => Some(prediction),
            Self::Loading { shown } | Self::Failed { shown, .. } => shown,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AppState {
    available_variants: Vec<VariantName>,
    status: PredictionStatus,
    status_line: String,
}

impl AppState {
    pub fn available_variants(&self) -> &[VariantName] {
        &self.available_variants
    }

    pub fn status(&self) -> &PredictionStatus {
        &self.status
    }

    pub fn prediction(&self) -> Option<&Prediction> {
        self.status.prediction()
    }

    pub fn is_loading(&self) -> bool {
        self.status.is_loading()
    }

    pub fn error(&self) -> Option<&str> {
        self.status.error()
    }

    /// Last informational message from the backend worker.
    pub fn status_line(&self) -> &str {
        &self.status_line
    }

    /// Enters `Loading`, dropping any error but keeping the displayed prediction.
    pub fn begin_prediction(&mut self) {
        let shown = std::mem::take(&mut self.status).into_shown();
        self.status = PredictionStatus::Loading { shown };
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        let shown = std::mem::take(&mut self.status).into_shown();
        self.status = PredictionStatus::Failed {
            message: message.into(),
            shown,
        };
    }

    /// No-op unless an error is set.
    pub fn clear_error(&mut self) {
        if let PredictionStatus::Failed { shown, .. } = &mut self.status {
            self.status = match shown.take() {
                Some(prediction) => PredictionStatus::Ready(prediction),
                None => PredictionStatus::Idle,
            };
        }
    }

    pub fn apply(&mut self, event: UiEvent) {
        match event {
            UiEvent::Info(message) => {
                info!("{message}");
                self.status_line = message;
            }
            UiEvent::VariantsLoaded(variants) => {
                self.status_line = format!("{} variants available", variants.len());
                self.available_variants = variants;
            }
            UiEvent::PredictionReady(prediction) => {
                self.status_line = format!("Prediction ready for {}", prediction.variant_name);
                self.status = PredictionStatus::Ready(prediction);
            }
            UiEvent::Error(err) => {
                warn!(
                    category = err_label(err.category()),
                    context = ?err.context(),
                    "{}",
                    err.message()
                );
                self.fail(err.into_message());
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/state_tests.rs"]
mod tests;
