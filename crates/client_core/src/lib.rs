use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use shared::{
    domain::{Prediction, VariantName},
    error::ApiErrorBody,
    protocol::{
        HealthResponse, PredictVariantRequest, VariantsResponse, HEALTH_PATH, PREDICT_PATH,
        VARIANTS_PATH,
    },
};
use tracing::{debug, info, warn};
use url::Url;

pub mod config;
pub mod error;
pub mod summary;

pub use config::{load_settings, ClientSettings, DEFAULT_API_BASE_URL};
pub use error::ClientError;
pub use summary::EffectsSummary;

pub const VARIANTS_FAILED_MESSAGE: &str = "Failed to fetch variants";
pub const PREDICTION_FAILED_MESSAGE: &str = "Prediction failed";
pub const HEALTH_FAILED_MESSAGE: &str = "Health check failed";

/// Operations offered by the prediction service.
///
/// Every call runs exactly once: no retries, no timeout, no cancellation.
#[async_trait]
pub trait PredictionApi: Send + Sync {
    async fn list_variants(&self) -> Result<Vec<VariantName>, ClientError>;
    async fn predict(&self, variant_name: &VariantName) -> Result<Prediction, ClientError>;
    async fn health(&self) -> Result<HealthResponse, ClientError>;
}

pub struct PredictionClient {
    http: Client,
    base_url: Url,
}

impl PredictionClient {
    pub fn new(base_url: Url) -> Self {
        Self {
            http: Client::new(),
            base_url,
        }
    }

    pub fn from_settings(settings: &ClientSettings) -> Result<Self, ClientError> {
        Ok(Self::new(settings.base_url()?))
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url.as_str().trim_end_matches('/'))
    }
}

fn decode<T: DeserializeOwned>(endpoint: &'static str, body: &[u8]) -> Result<T, ClientError> {
    serde_json::from_slice(body).map_err(|source| ClientError::MalformedResponse { endpoint, source })
}

/// Picks the server supplied `detail` string, falling back to `fallback`
/// when the body is not JSON or carries no usable detail.
fn server_error_message(body: &[u8], fallback: &str) -> String {
    serde_json::from_slice::<ApiErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.detail_message().map(str::to_owned))
        .unwrap_or_else(|| fallback.to_string())
}

#[async_trait]
impl PredictionApi for PredictionClient {
    async fn list_variants(&self) -> Result<Vec<VariantName>, ClientError> {
        let url = self.endpoint(VARIANTS_PATH);
        debug!(%url, "fetching available variants");

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "variant listing rejected by server");
            return Err(ClientError::Server {
                status: status.as_u16(),
                message: VARIANTS_FAILED_MESSAGE.to_string(),
            });
        }

        let body = response.bytes().await?;
        let parsed: VariantsResponse = decode(VARIANTS_PATH, &body)?;
        if let Some(total) = parsed.total_count {
            if total != parsed.variants.len() {
                warn!(
                    total_count = total,
                    listed = parsed.variants.len(),
                    "variant listing total_count disagrees with list length"
                );
            }
        }
        info!(count = parsed.variants.len(), "fetched available variants");
        Ok(parsed.variants)
    }

    async fn predict(&self, variant_name: &VariantName) -> Result<Prediction, ClientError> {
        let url = self.endpoint(PREDICT_PATH);
        debug!(%url, variant = %variant_name, "requesting prediction");

        let response = self
            .http
            .post(&url)
            .json(&PredictVariantRequest {
                variant_name: variant_name.clone(),
            })
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.bytes().await.unwrap_or_default();
            let message = server_error_message(&body, PREDICTION_FAILED_MESSAGE);
            warn!(
                status = status.as_u16(),
                variant = %variant_name,
                "prediction rejected by server: {message}"
            );
            return Err(ClientError::Server {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.bytes().await?;
        let prediction: Prediction = decode(PREDICT_PATH, &body)?;
        if prediction.variant_name != *variant_name {
            warn!(
                requested = %variant_name,
                returned = %prediction.variant_name,
                "prediction echoes a different variant name"
            );
        }
        info!(variant = %prediction.variant_name, "prediction received");
        Ok(prediction)
    }

    async fn health(&self) -> Result<HealthResponse, ClientError> {
        let url = self.endpoint(HEALTH_PATH);
        debug!(%url, "checking service health");

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "health check rejected by server");
            return Err(ClientError::Server {
                status: status.as_u16(),
                message: HEALTH_FAILED_MESSAGE.to_string(),
            });
        }

        let body = response.bytes().await?;
        decode(HEALTH_PATH, &body)
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
