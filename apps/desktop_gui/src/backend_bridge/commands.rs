//! Backend commands queued from UI to backend worker.

use shared::domain::VariantName;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendCommand {
    ListVariants,
    PredictVariant { variant_name: VariantName },
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            Self::ListVariants => "list_variants",
            Self::PredictVariant { .. } => "predict_variant",
        }
    }
}
