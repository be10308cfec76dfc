use eframe::egui;

use crate::state::EditorState;
use crate::ui_components::section;

pub fn show(ui: &mut egui::Ui, state: &mut EditorState, status: &mut String) {
    section(ui, "Presets", |ui| {
        let names: Vec<(String, bool)> = state
            .presets
            .presets()
            .iter()
            .map(|p| (p.name.clone(), p.is_built_in))
            .collect();

        let mut load = None;
        let mut delete = None;
        for (name, built_in) in &names {
            ui.horizontal(|ui| {
                let selected = state.selected_preset.as_deref() == Some(name.as_str());
                let label = if *built_in {
                    format!("{name} (built-in)")
                } else {
                    name.clone()
                };
                if ui.selectable_label(selected, label).clicked() {
                    load = Some(name.clone());
                }
                if !built_in && ui.small_button("🗑").on_hover_text("Delete preset").clicked() {
                    delete = Some(name.clone());
                }
            });
        }

        if let Some(name) = load {
            match state.load_preset(&name) {
                Ok(()) => {
                    *status = format!("Loaded preset '{name}'");
                    state.selected_preset = Some(name);
                }
                Err(e) => *status = e,
            }
        }
        if let Some(name) = delete {
            match state.delete_preset(&name) {
                Ok(()) => *status = format!("Deleted preset '{name}'"),
                Err(e) => *status = e,
            }
        }

        ui.add_space(6.0);
        ui.horizontal(|ui| {
            ui.add(
                egui::TextEdit::singleline(&mut state.preset_name)
                    .hint_text("Preset name")
                    .desired_width(140.0),
            );
            if ui.button("Save").clicked() {
                match state.save_preset() {
                    Ok(name) => *status = format!("Saved preset '{name}'"),
                    Err(e) => *status = e,
                }
            }
        });
    });
}
