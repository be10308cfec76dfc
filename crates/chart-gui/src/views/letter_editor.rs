use chart_core::constants::{MAX_FONT_SIZE_PT, MIN_FONT_SIZE_PT};
use chart_core::{LetterField, round_tenth};
use eframe::egui;

use crate::state::EditorState;
use crate::ui_components::{DragValueBuilder, section};

pub fn show(ui: &mut egui::Ui, state: &mut EditorState) {
    section(ui, "Editor", |ui| {
        let Some(letter) = state.layout.selected_letter().cloned() else {
            ui.weak("Click a letter on the page to edit it");
            if ui.button("➕ Add letter").clicked() {
                let (cx, cy) = state.geometry().center();
                let id = state.layout.add_letter('A', cx, cy, 24.0);
                state.layout.select(id);
            }
            return;
        };

        ui.label(format!("Selected #{}", letter.id + 1));

        let mut text = letter.glyph.to_string();
        ui.horizontal(|ui| {
            ui.label("Character:");
            let edit = ui.add(egui::TextEdit::singleline(&mut text).char_limit(1).desired_width(40.0));
            if edit.changed() {
                if let Some(c) = text.chars().next() {
                    state.layout.update(letter.id, LetterField::Char(c));
                }
            }
        });

        let geometry = state.geometry();
        let (mut x, mut y) = (letter.x, letter.y);
        ui.horizontal(|ui| {
            ui.label("X:");
            if DragValueBuilder::new(&mut x)
                .range(0.0..=geometry.width_mm)
                .speed(0.1)
                .decimals(1)
                .suffix(" mm")
                .show(ui)
            {
                state.layout.update(letter.id, LetterField::X(round_tenth(x)));
            }
            ui.label("Y:");
            if DragValueBuilder::new(&mut y)
                .range(0.0..=geometry.height_mm)
                .speed(0.1)
                .decimals(1)
                .suffix(" mm")
                .show(ui)
            {
                state.layout.update(letter.id, LetterField::Y(round_tenth(y)));
            }
        });

        let mut size = letter.font_size;
        if ui
            .add(egui::Slider::new(&mut size, MIN_FONT_SIZE_PT..=MAX_FONT_SIZE_PT).text("pt"))
            .changed()
        {
            state.layout.update(letter.id, LetterField::FontSize(size));
        }

        ui.horizontal(|ui| {
            if ui.button("🗑 Remove").clicked() {
                state.layout.remove(letter.id);
            }
            if ui.button("Deselect").clicked() {
                state.layout.clear_selection();
            }
        });
    });
}
