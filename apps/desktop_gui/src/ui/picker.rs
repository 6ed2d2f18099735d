//! Variant picker: one button per available variant, disabled while loading.

use eframe::egui;
use shared::domain::VariantName;

use crate::controller::AppState;

const PICKER_COLUMNS: usize = 4;
const BUTTON_SIZE: egui::Vec2 = egui::vec2(180.0, 40.0);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerEntry {
    pub variant: VariantName,
    pub enabled: bool,
}

impl PickerEntry {
    pub fn label(&self) -> &str {
        self.variant.as_str()
    }
}

pub fn picker_entries(state: &AppState) -> Vec<PickerEntry> {
    let enabled = !state.is_loading();
    state
        .available_variants()
        .iter()
        .map(|variant| PickerEntry {
            variant: variant.clone(),
            enabled,
        })
        .collect()
}

pub fn shows_loading_indicator(state: &AppState) -> bool {
    state.is_loading()
}

/// Renders the picker and returns the variant the user clicked, if any.
pub fn show_variant_picker(ui: &mut egui::Ui, state: &AppState) -> Option<VariantName> {
    let mut selected = None;

    ui.heading("Select a Pharmacogenomic Variant");
    ui.add_space(6.0);

    let entries = picker_entries(state);
    if entries.is_empty() {
        ui.weak("No variants available.");
    }

    egui::Grid::new("variant_picker_grid")
        .num_columns(PICKER_COLUMNS)
        .spacing(egui::vec2(10.0, 10.0))
        .show(ui, |ui| {
            for (index, entry) in entries.iter().enumerate() {
                let button = egui::Button::new(egui::RichText::new(entry.label()).strong())
                    .min_size(BUTTON_SIZE);
                if ui.add_enabled(entry.enabled, button).clicked() {
                    selected = Some(entry.variant.clone());
                }
                if (index + 1) % PICKER_COLUMNS == 0 {
                    ui.end_row();
                }
            }
        });

    if shows_loading_indicator(state) {
        ui.add_space(10.0);
        ui.horizontal(|ui| {
            ui.add(egui::Spinner::new());
            ui.label("Getting predictions...");
        });
    }

    selected
}
