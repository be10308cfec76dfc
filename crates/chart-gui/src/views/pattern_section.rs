use chart_core::constants::{MAX_GRID_COLS, MAX_GRID_ROWS};
use chart_core::generators::LITERAL_CHARTS;
use chart_core::ChartPattern;
use eframe::egui;

use crate::state::EditorState;
use crate::ui_components::{labeled_drag_clamped, section};

pub fn show(ui: &mut egui::Ui, state: &mut EditorState, status: &mut String) {
    section(ui, "Patterns", |ui| {
        labeled_drag_clamped(ui, "Rows:", &mut state.config.grid_rows, 1..=MAX_GRID_ROWS, "");
        labeled_drag_clamped(ui, "Columns:", &mut state.config.grid_cols, 1..=MAX_GRID_COLS, "");
        if ui.button("▦ Grid").clicked() {
            state.apply_pattern(state.grid_pattern());
        }

        ui.add_space(6.0);
        if ui.button("✖ MacDonald chart").clicked() {
            state.apply_pattern(ChartPattern::Radial);
        }

        ui.add_space(6.0);
        ui.horizontal(|ui| {
            ui.label("Words:");
            ui.add(egui::TextEdit::singleline(&mut state.word_top).desired_width(70.0));
            ui.add(egui::TextEdit::singleline(&mut state.word_bottom).desired_width(70.0));
        });
        if ui.button("🔤 Word shape").clicked() {
            state.apply_pattern(state.word_pattern());
        }

        ui.add_space(6.0);
        ui.horizontal(|ui| {
            let current = LITERAL_CHARTS
                .get(state.literal_index)
                .map(|chart| chart.name)
                .unwrap_or("-");
            egui::ComboBox::from_id_salt("literal_chart")
                .selected_text(current)
                .show_ui(ui, |ui| {
                    for (index, chart) in LITERAL_CHARTS.iter().enumerate() {
                        ui.selectable_value(&mut state.literal_index, index, chart.name);
                    }
                });
            if ui.button("Apply").clicked() {
                state.apply_pattern(state.literal_pattern());
            }
        });

        ui.add_space(10.0);
        ui.checkbox(&mut state.config.include_digits, "Include digits 0-9");
        ui.checkbox(&mut state.config.allow_duplicates, "Allow duplicates");
        if ui.button("🎲 Regenerate characters").clicked() {
            match state.regenerate_letters() {
                Ok(()) => *status = format!("Regenerated {} characters", state.layout.len()),
                Err(message) => *status = message,
            }
        }
    });
}
