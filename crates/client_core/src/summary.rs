//! Display model for a prediction: chart magnitudes plus labeled text rows.
//!
//! Both the desktop panel and the command-line renderer read from
//! [`EffectsSummary`] so the two surfaces show the same numbers.

use shared::domain::Prediction;

pub const GENE_EXPRESSION_LABEL: &str = "Gene Expression";
pub const CHROMATIN_ACCESS_LABEL: &str = "Chromatin Access";

#[derive(Debug, Clone, PartialEq)]
pub struct EffectBar {
    pub label: &'static str,
    /// Absolute percentage change.
    pub magnitude: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EffectsSummary {
    pub variant_name: String,
    pub bars: [EffectBar; 2],
    pub gene_expression: String,
    pub chromatin_accessibility: String,
    pub splicing_impact: String,
    pub binding_sites_lost: String,
    pub binding_sites_gained: Option<String>,
    pub expression_confidence: String,
    pub chromatin_confidence: Option<String>,
    pub interval: Option<String>,
    pub reference_profile_len: Option<usize>,
    pub alternate_profile_len: Option<usize>,
}

pub fn format_percent(value: f64) -> String {
    format!("{value}%")
}

impl EffectsSummary {
    pub fn from_prediction(prediction: &Prediction) -> Self {
        let effects = &prediction.molecular_effects;
        let confidence = &prediction.prediction_confidence;
        Self {
            variant_name: prediction.variant_name.to_string(),
            bars: [
                EffectBar {
                    label: GENE_EXPRESSION_LABEL,
                    magnitude: effects.gene_expression_change.abs(),
                },
                EffectBar {
                    label: CHROMATIN_ACCESS_LABEL,
                    magnitude: effects.chromatin_accessibility_change.abs(),
                },
            ],
            gene_expression: format_percent(effects.gene_expression_change),
            chromatin_accessibility: format_percent(effects.chromatin_accessibility_change),
            splicing_impact: effects.splicing_impact.clone(),
            binding_sites_lost: effects.binding_sites_lost.to_string(),
            binding_sites_gained: effects.binding_sites_gained.map(|n| n.to_string()),
            expression_confidence: confidence.expression.to_string(),
            chromatin_confidence: confidence.chromatin.as_ref().map(ToString::to_string),
            interval: prediction.raw_data.as_ref().map(|raw| raw.interval.clone()),
            reference_profile_len: prediction
                .raw_data
                .as_ref()
                .map(|raw| raw.reference_expression_profile.len()),
            alternate_profile_len: prediction
                .raw_data
                .as_ref()
                .map(|raw| raw.alternate_expression_profile.len()),
        }
    }

    pub fn max_magnitude(&self) -> f64 {
        self.bars
            .iter()
            .map(|bar| bar.magnitude)
            .fold(0.0_f64, f64::max)
    }

    /// Labeled text rows in display order; optional rows are skipped when absent.
    pub fn text_rows(&self) -> Vec<(&'static str, String)> {
        let mut rows = vec![
            ("Gene Expression", self.gene_expression.clone()),
            ("Chromatin Accessibility", self.chromatin_accessibility.clone()),
            ("Splicing Impact", self.splicing_impact.clone()),
            ("Binding Sites Lost", self.binding_sites_lost.clone()),
        ];
        if let Some(gained) = &self.binding_sites_gained {
            rows.push(("Binding Sites Gained", gained.clone()));
        }
        rows.push(("Confidence", self.expression_confidence.clone()));
        if let Some(chromatin) = &self.chromatin_confidence {
            rows.push(("Chromatin Confidence", chromatin.clone()));
        }
        if let Some(interval) = &self.interval {
            rows.push(("Interval", interval.clone()));
        }
        if let Some(points) = self.reference_profile_len {
            rows.push(("Reference Profile", format!("{points} points")));
        }
        if let Some(points) = self.alternate_profile_len {
            rows.push(("Alternate Profile", format!("{points} points")));
        }
        rows
    }
}

/// Horizontal bar chart scaled so the largest magnitude fills `width` cells.
pub fn render_ascii_chart(summary: &EffectsSummary, width: usize) -> String {
    let max = summary.max_magnitude();
    let label_width = summary
        .bars
        .iter()
        .map(|bar| bar.label.len())
        .max()
        .unwrap_or_default();

    summary
        .bars
        .iter()
        .map(|bar| {
            let cells = if max > 0.0 {
                ((bar.magnitude / max) * width as f64).round() as usize
            } else {
                0
            };
            format!(
                "{:<label_width$} | {:<width$} {}",
                bar.label,
                "#".repeat(cells),
                format_percent(bar.magnitude),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
#[path = "tests/summary_tests.rs"]
mod tests;
