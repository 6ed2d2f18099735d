use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::VariantName;

pub const VARIANTS_PATH: &str = "/api/v1/variants/";
pub const PREDICT_PATH: &str = "/api/v1/variants/predict";
pub const HEALTH_PATH: &str = "/api/v1/health/";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VariantsResponse {
    pub variants: Vec<VariantName>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_count: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictVariantRequest {
    pub variant_name: VariantName,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
}

impl HealthResponse {
    pub fn is_healthy(&self) -> bool {
        self.status.eq_ignore_ascii_case("healthy")
    }

    /// Server clock at the time of the check, from its unix-seconds timestamp.
    pub fn checked_at(&self) -> Option<DateTime<Utc>> {
        let timestamp = self.timestamp?;
        if !timestamp.is_finite() {
            return None;
        }
        let secs = timestamp.floor() as i64;
        let nanos = ((timestamp - timestamp.floor()) * 1e9) as u32;
        DateTime::from_timestamp(secs, nanos)
    }
}
