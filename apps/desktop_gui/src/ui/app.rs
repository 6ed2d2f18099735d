use std::time::Duration;

use crossbeam_channel::{Receiver, Sender};
use eframe::egui;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::{events::UiEvent, AppState, PredictionController};
use crate::ui::{effects::show_effects_panel, picker::show_variant_picker, UiIntent};

const IDLE_REPAINT_INTERVAL: Duration = Duration::from_millis(100);
const LOADING_REPAINT_INTERVAL: Duration = Duration::from_millis(16);

pub struct PharmaCodeApp {
    controller: PredictionController,
}

impl PharmaCodeApp {
    pub fn new(cmd_tx: Sender<BackendCommand>, ui_rx: Receiver<UiEvent>) -> Self {
        let mut controller = PredictionController::new(cmd_tx, ui_rx);
        controller.initialize();
        Self { controller }
    }

    fn apply_intent(&mut self, intent: UiIntent) {
        match intent {
            UiIntent::SelectVariant(variant_name) => self.controller.select_variant(variant_name),
            UiIntent::ClearError => self.controller.clear_error(),
        }
    }
}

fn show_header(ui: &mut egui::Ui) {
    ui.add_space(8.0);
    ui.heading(egui::RichText::new("PharmaCode").size(28.0).strong());
    ui.label(egui::RichText::new("AI-powered pharmacogenomics learning").weak());
    ui.add_space(8.0);
}

fn show_error_banner(ui: &mut egui::Ui, message: &str) -> Option<UiIntent> {
    let mut intent = None;
    egui::Frame::new()
        .fill(egui::Color32::from_rgb(254, 242, 242))
        .stroke(egui::Stroke::new(1.0, egui::Color32::from_rgb(254, 202, 202)))
        .corner_radius(8)
        .inner_margin(egui::Margin::symmetric(12, 10))
        .show(ui, |ui| {
            ui.horizontal_wrapped(|ui| {
                ui.label(egui::RichText::new(message).color(egui::Color32::from_rgb(185, 28, 28)));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Dismiss").clicked() {
                        intent = Some(UiIntent::ClearError);
                    }
                });
            });
        });
    intent
}

/// Root view: a pure function of state that reports the user's intents.
fn show_root(ctx: &egui::Context, state: &AppState) -> Vec<UiIntent> {
    let mut intents = Vec::new();

    egui::TopBottomPanel::top("pharmacode_header").show(ctx, show_header);

    egui::TopBottomPanel::bottom("pharmacode_status").show(ctx, |ui| {
        ui.small(state.status_line());
    });

    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::vertical().show(ui, |ui| {
            if let Some(variant_name) = show_variant_picker(ui, state) {
                intents.push(UiIntent::SelectVariant(variant_name));
            }

            if let Some(message) = state.error() {
                ui.add_space(12.0);
                if let Some(intent) = show_error_banner(ui, message) {
                    intents.push(intent);
                }
            }

            if let Some(prediction) = state.prediction() {
                ui.add_space(16.0);
                show_effects_panel(ui, prediction);
            }
        });
    });

    intents
}

impl eframe::App for PharmaCodeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.controller.process_ui_events();

        let intents = show_root(ctx, self.controller.state());
        for intent in intents {
            self.apply_intent(intent);
        }

        if self.controller.state().is_loading() {
            ctx.request_repaint_after(LOADING_REPAINT_INTERVAL);
        } else {
            ctx.request_repaint_after(IDLE_REPAINT_INTERVAL);
        }
    }
}
