use std::fmt;

use serde::{Deserialize, Serialize};

/// Pharmacogenomic allele name as the service lists it, e.g. `CYP2D6*4`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VariantName(pub String);

impl VariantName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VariantName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for VariantName {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Confidence indicator; the service sends a label today but scores are accepted too.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfidenceLevel {
    Label(String),
    Score(f64),
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Label(label) => f.write_str(label),
            Self::Score(score) => write!(f, "{score}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MolecularEffects {
    /// Signed percentage.
    pub gene_expression_change: f64,
    /// Signed percentage.
    pub chromatin_accessibility_change: f64,
    pub splicing_impact: String,
    pub binding_sites_lost: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub binding_sites_gained: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionConfidence {
    pub expression: ConfidenceLevel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chromatin: Option<ConfidenceLevel>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawData {
    pub interval: String,
    #[serde(default)]
    pub reference_expression_profile: Vec<f64>,
    #[serde(default)]
    pub alternate_expression_profile: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub variant_name: VariantName,
    pub molecular_effects: MolecularEffects,
    pub prediction_confidence: PredictionConfidence,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_data: Option<RawData>,
}
