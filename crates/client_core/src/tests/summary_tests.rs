use super::*;
use shared::domain::{
    ConfidenceLevel, MolecularEffects, Prediction, PredictionConfidence, RawData, VariantName,
};

fn scenario_prediction() -> Prediction {
    Prediction {
        variant_name: VariantName::from("CYP2D6*4"),
        molecular_effects: MolecularEffects {
            gene_expression_change: -45.2,
            chromatin_accessibility_change: 12.0,
            splicing_impact: "high".to_string(),
            binding_sites_lost: 3,
            binding_sites_gained: None,
        },
        prediction_confidence: PredictionConfidence {
            expression: ConfidenceLevel::Label("high".to_string()),
            chromatin: None,
        },
        raw_data: None,
    }
}

#[test]
fn bars_use_absolute_magnitudes() {
    let summary = EffectsSummary::from_prediction(&scenario_prediction());

    assert_eq!(summary.bars[0].magnitude, 45.2);
    assert_eq!(summary.bars[1].magnitude, 12.0);
    assert_eq!(summary.bars[0].label, GENE_EXPRESSION_LABEL);
    assert_eq!(summary.bars[1].label, CHROMATIN_ACCESS_LABEL);
    assert_eq!(summary.max_magnitude(), 45.2);
}

#[test]
fn text_fields_keep_sign_and_labels() {
    let summary = EffectsSummary::from_prediction(&scenario_prediction());

    assert_eq!(summary.variant_name, "CYP2D6*4");
    assert_eq!(summary.gene_expression, "-45.2%");
    assert_eq!(summary.chromatin_accessibility, "12%");
    assert_eq!(summary.splicing_impact, "high");
    assert_eq!(summary.binding_sites_lost, "3");
    assert_eq!(summary.expression_confidence, "high");
}

#[test]
fn text_rows_skip_absent_optional_fields() {
    let summary = EffectsSummary::from_prediction(&scenario_prediction());

    let labels: Vec<&str> = summary.text_rows().iter().map(|(label, _)| *label).collect();
    assert_eq!(
        labels,
        vec![
            "Gene Expression",
            "Chromatin Accessibility",
            "Splicing Impact",
            "Binding Sites Lost",
            "Confidence",
        ]
    );
}

#[test]
fn text_rows_include_optional_fields_when_present() {
    let mut prediction = scenario_prediction();
    prediction.molecular_effects.binding_sites_gained = Some(1);
    prediction.prediction_confidence.chromatin = Some(ConfidenceLevel::Score(0.5));
    prediction.raw_data = Some(RawData {
        interval: "chr22:42522000-42523000".to_string(),
        reference_expression_profile: vec![],
        alternate_expression_profile: vec![],
    });

    let rows = EffectsSummary::from_prediction(&prediction).text_rows();

    assert!(rows.contains(&("Binding Sites Gained", "1".to_string())));
    assert!(rows.contains(&("Chromatin Confidence", "0.5".to_string())));
    assert!(rows.contains(&("Interval", "chr22:42522000-42523000".to_string())));
    assert!(!rows.iter().any(|(label, _)| label.ends_with("Profile")));
}

#[test]
fn text_rows_report_expression_profile_lengths() {
    let mut prediction = scenario_prediction();
    prediction.raw_data = Some(RawData {
        interval: "chr1:1-2".to_string(),
        reference_expression_profile: vec![1.0, 0.9, 0.8],
        alternate_expression_profile: vec![0.5, 0.4, 0.3],
    });

    let summary = EffectsSummary::from_prediction(&prediction);
    let rows = summary.text_rows();

    assert_eq!(summary.reference_profile_len, Some(3));
    assert_eq!(summary.alternate_profile_len, Some(3));
    assert!(rows.contains(&("Reference Profile", "3 points".to_string())));
    assert!(rows.contains(&("Alternate Profile", "3 points".to_string())));
}

#[test]
fn ascii_chart_scales_to_largest_bar() {
    let summary = EffectsSummary::from_prediction(&scenario_prediction());

    let chart = render_ascii_chart(&summary, 30);
    let lines: Vec<&str> = chart.lines().collect();

    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("Gene Expression  | "));
    assert_eq!(lines[0].matches('#').count(), 30);
    assert!(lines[0].ends_with(" 45.2%"));
    assert_eq!(lines[1].matches('#').count(), 8);
    assert!(lines[1].ends_with(" 12%"));
}

#[test]
fn ascii_chart_handles_zero_effects() {
    let mut prediction = scenario_prediction();
    prediction.molecular_effects.gene_expression_change = 0.0;
    prediction.molecular_effects.chromatin_accessibility_change = -0.0;

    let chart = render_ascii_chart(&EffectsSummary::from_prediction(&prediction), 20);

    assert_eq!(chart.matches('#').count(), 0);
}
