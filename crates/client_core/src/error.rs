use shared::error::ErrorCode;
use thiserror::Error;

/// Failures surfaced by [`crate::PredictionApi`] calls and settings resolution.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never produced a response: connect, DNS, TLS, or body read.
    #[error("request to prediction service failed: {0}")]
    Network(#[from] reqwest::Error),
    /// Non-2xx response. `message` is shown to the user verbatim.
    #[error("{message}")]
    Server { status: u16, message: String },
    /// 2xx response whose body does not match the expected shape.
    #[error("malformed response from {endpoint}: {source}")]
    MalformedResponse {
        endpoint: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid api base url '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

impl ClientError {
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Server { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn code(&self) -> Option<ErrorCode> {
        self.status().map(ErrorCode::from_status)
    }

    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network(_))
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedResponse { .. })
    }
}
