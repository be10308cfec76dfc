use chart_async_runtime::ChartCommand;
use chart_core::{FontFamily, Orientation};
use eframe::egui;
use tokio::sync::mpsc;

use crate::state::EditorState;
use crate::ui_components::{color_row, enum_selector, section};

pub fn show(
    ui: &mut egui::Ui,
    state: &mut EditorState,
    command_tx: &mpsc::UnboundedSender<ChartCommand>,
) {
    section(ui, "Page", |ui| {
        let settings = &mut state.config.page_settings;
        color_row(ui, "Background:", &mut settings.bg_color);
        color_row(ui, "Text:", &mut settings.text_color);

        let fonts: Vec<(FontFamily, &str)> =
            FontFamily::ALL.iter().map(|f| (*f, f.label())).collect();
        enum_selector(ui, "font_family", "Font:", &mut settings.font_family, &fonts);

        let before = state.config.orientation;
        enum_selector(
            ui,
            "orientation",
            "Orientation:",
            &mut state.config.orientation,
            &[
                (Orientation::Landscape, "Landscape"),
                (Orientation::Portrait, "Portrait"),
            ],
        );
        if state.config.orientation != before {
            log::info!("Orientation changed to {}", state.config.orientation.name());
        }

        ui.checkbox(&mut state.config.show_grid, "Show alignment grid");
        ui.checkbox(&mut state.config.show_fixation, "Show fixation point");

        if ui.button("💾 Save as defaults").clicked() {
            let _ = command_tx.send(ChartCommand::SaveConfig {
                config: state.config.clone(),
            });
        }
    });
}
