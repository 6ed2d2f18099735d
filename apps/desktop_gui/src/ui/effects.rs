//! Molecular-effects panel: two-bar chart of magnitudes next to the raw values.

use client_core::EffectsSummary;
use eframe::egui;
use egui_plot::{Bar, BarChart, Plot};
use shared::domain::Prediction;

const CHART_HEIGHT: f32 = 200.0;
const BAR_COLOR: egui::Color32 = egui::Color32::from_rgb(0xEF, 0x44, 0x44);

fn effect_bars(summary: &EffectsSummary) -> Vec<Bar> {
    summary
        .bars
        .iter()
        .enumerate()
        .map(|(index, bar)| {
            Bar::new(index as f64, bar.magnitude)
                .name(bar.label)
                .width(0.6)
                .fill(BAR_COLOR)
        })
        .collect()
}

fn show_effects_chart(ui: &mut egui::Ui, summary: &EffectsSummary) {
    let labels: Vec<&'static str> = summary.bars.iter().map(|bar| bar.label).collect();
    let chart = BarChart::new("% Change", effect_bars(summary)).color(BAR_COLOR);

    Plot::new(("molecular_effects_chart", summary.variant_name.as_str()))
        .height(CHART_HEIGHT)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .include_y(0.0)
        .y_axis_label("% Change")
        .x_axis_formatter(move |mark, _range| {
            let index = mark.value.round();
            if (mark.value - index).abs() > f64::EPSILON || index < 0.0 {
                return String::new();
            }
            labels
                .get(index as usize)
                .map(|label| label.to_string())
                .unwrap_or_default()
        })
        .show(ui, |plot_ui| plot_ui.bar_chart(chart));
}

fn show_effect_rows(ui: &mut egui::Ui, summary: &EffectsSummary) {
    egui::Grid::new("molecular_effects_rows")
        .num_columns(2)
        .spacing(egui::vec2(12.0, 6.0))
        .show(ui, |ui| {
            for (label, value) in summary.text_rows() {
                ui.label(egui::RichText::new(format!("{label}:")).strong());
                ui.label(value);
                ui.end_row();
            }
        });
}

pub fn show_effects_panel(ui: &mut egui::Ui, prediction: &Prediction) {
    let summary = EffectsSummary::from_prediction(prediction);

    egui::Frame::group(ui.style())
        .inner_margin(egui::Margin::same(12))
        .show(ui, |ui| {
            ui.heading(&summary.variant_name);
            ui.add_space(6.0);
            ui.label(egui::RichText::new("Predicted Molecular Effects").strong().size(16.0));
            ui.add_space(6.0);

            ui.columns(2, |columns| {
                show_effects_chart(&mut columns[0], &summary);
                show_effect_rows(&mut columns[1], &summary);
            });
        });
}
