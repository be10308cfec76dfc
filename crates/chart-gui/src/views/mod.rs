pub mod canvas;
mod export_section;
mod letter_editor;
mod page_section;
mod pattern_section;
mod presets_section;

pub use canvas::show_canvas;

use chart_async_runtime::ChartCommand;
use eframe::egui;
use tokio::sync::mpsc;

use crate::state::EditorState;

pub fn show_sidebar(
    ui: &mut egui::Ui,
    state: &mut EditorState,
    command_tx: &mpsc::UnboundedSender<ChartCommand>,
    status: &mut String,
    busy: &mut bool,
) {
    egui::ScrollArea::vertical().show(ui, |ui| {
        ui.heading("Vision Charts");

        page_section::show(ui, state, command_tx);
        pattern_section::show(ui, state, status);
        letter_editor::show(ui, state);
        presets_section::show(ui, state, status);
        export_section::show(ui, state, command_tx, status, busy);
    });
}
