use super::*;
use crate::controller::events::{UiError, UiErrorContext};
use shared::domain::{ConfidenceLevel, MolecularEffects, PredictionConfidence};

fn prediction(variant: &str, gene_expression_change: f64) -> Prediction {
    Prediction {
        variant_name: VariantName::from(variant),
        molecular_effects: MolecularEffects {
            gene_expression_change,
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

fn server_error(message: &str) -> UiEvent {
    UiEvent::Error(UiError::from_message(UiErrorContext::Predict, message))
}

#[test]
fn starts_idle_with_no_variants() {
    let state = AppState::default();

    assert!(state.available_variants().is_empty());
    assert_eq!(state.status(), &PredictionStatus::Idle);
    assert!(state.prediction().is_none());
    assert!(!state.is_loading());
    assert!(state.error().is_none());
}

#[test]
fn loaded_variants_replace_list_in_order() {
    let mut state = AppState::default();
    let variants = vec![
        VariantName::from("CYP2D6*4"),
        VariantName::from("TPMT*3A_G460A"),
        VariantName::from("DPYD*2A"),
    ];

    state.apply(UiEvent::VariantsLoaded(variants.clone()));

    assert_eq!(state.available_variants(), variants.as_slice());
}

#[test]
fn variant_listing_failure_sets_error_and_leaves_list_empty() {
    let mut state = AppState::default();

    state.apply(UiEvent::Error(UiError::from_message(
        UiErrorContext::LoadVariants,
        "Failed to fetch variants",
    )));

    assert_eq!(state.error(), Some("Failed to fetch variants"));
    assert!(state.available_variants().is_empty());
    assert!(!state.is_loading());
}

#[test]
fn begin_prediction_clears_error_and_keeps_shown_prediction() {
    let mut state = AppState::default();
    state.apply(UiEvent::PredictionReady(prediction("CYP2D6*4", -45.2)));
    state.apply(server_error("Unknown variant"));

    state.begin_prediction();

    assert!(state.is_loading());
    assert!(state.error().is_none());
    assert_eq!(
        state.prediction().map(|p| p.variant_name.as_str()),
        Some("CYP2D6*4")
    );
}

#[test]
fn successful_prediction_ends_loading() {
    let mut state = AppState::default();
    state.begin_prediction();

    state.apply(UiEvent::PredictionReady(prediction("CYP2D6*4", -45.2)));

    assert!(!state.is_loading());
    assert!(state.error().is_none());
    assert_eq!(state.prediction(), Some(&prediction("CYP2D6*4", -45.2)));
}

#[test]
fn failed_prediction_keeps_previous_prediction_visible() {
    let mut state = AppState::default();
    let previous = prediction("CYP2D6*4", -45.2);
    state.apply(UiEvent::PredictionReady(previous.clone()));
    state.begin_prediction();

    state.apply(server_error("Unknown variant"));

    assert!(!state.is_loading());
    assert_eq!(state.error(), Some("Unknown variant"));
    assert_eq!(state.prediction(), Some(&previous));
}

#[test]
fn failed_first_prediction_shows_no_panel() {
    let mut state = AppState::default();
    state.begin_prediction();

    state.apply(server_error("Unknown variant"));

    assert_eq!(state.error(), Some("Unknown variant"));
    assert!(state.prediction().is_none());
}

#[test]
fn last_response_to_arrive_wins() {
    let mut state = AppState::default();
    state.begin_prediction();
    state.begin_prediction();

    state.apply(UiEvent::PredictionReady(prediction("DPYD*2A", -50.0)));
    state.apply(UiEvent::PredictionReady(prediction("CYP2D6*4", -45.2)));

    assert_eq!(
        state.prediction().map(|p| p.variant_name.as_str()),
        Some("CYP2D6*4")
    );
}

#[test]
fn clear_error_restores_shown_prediction() {
    let mut state = AppState::default();
    let previous = prediction("CYP2D6*4", -45.2);
    state.apply(UiEvent::PredictionReady(previous.clone()));
    state.apply(server_error("Rate limit exceeded. Please try again later."));

    state.clear_error();

    assert_eq!(state.status(), &PredictionStatus::Ready(previous));
}

#[test]
fn clear_error_without_prediction_returns_to_idle() {
    let mut state = AppState::default();
    state.apply(server_error("Failed to fetch variants"));

    state.clear_error();

    assert_eq!(state.status(), &PredictionStatus::Idle);
}

#[test]
fn clear_error_is_a_no_op_without_error() {
    let mut idle = AppState::default();
    idle.clear_error();
    assert_eq!(idle.status(), &PredictionStatus::Idle);

    let mut loading = AppState::default();
    loading.begin_prediction();
    let before = loading.status().clone();
    loading.clear_error();
    assert_eq!(loading.status(), &before);

    let mut ready = AppState::default();
    ready.apply(UiEvent::PredictionReady(prediction("CYP2D6*4", -45.2)));
    let before = ready.status().clone();
    ready.clear_error();
    assert_eq!(ready.status(), &before);
}

#[test]
fn info_events_only_update_status_line() {
    let mut state = AppState::default();

    state.apply(UiEvent::Info("Backend worker ready".to_string()));

    assert_eq!(state.status_line(), "Backend worker ready");
    assert_eq!(state.status(), &PredictionStatus::Idle);
}
