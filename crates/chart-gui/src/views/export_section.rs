use chart_async_runtime::ChartCommand;
use chart_core::constants::{MAX_COPIES, MIN_COPIES};
use eframe::egui;
use std::path::PathBuf;
use tokio::sync::mpsc;

use crate::state::EditorState;
use crate::ui_components::{labeled_drag_clamped, section};

pub fn show(
    ui: &mut egui::Ui,
    state: &mut EditorState,
    command_tx: &mpsc::UnboundedSender<ChartCommand>,
    status: &mut String,
    busy: &mut bool,
) {
    section(ui, "Output", |ui| {
        labeled_drag_clamped(ui, "Copies:", &mut state.config.copies, MIN_COPIES..=MAX_COPIES, "");

        ui.add_enabled_ui(!*busy, |ui| {
            if ui.button("📄 Export PDF").clicked() {
                *busy |= export_pdf(state, command_tx, status);
            }
            if ui.button("🖨 Print").clicked() {
                *busy |= print(state, command_tx, status);
            }
        });

        ui.add_space(6.0);
        ui.horizontal(|ui| {
            if ui.button("Open layout").clicked() {
                if let Some(path) = json_dialog().pick_file() {
                    let _ = command_tx.send(ChartCommand::LoadLayout { path });
                }
            }
            if ui.button("Save layout").clicked() {
                if let Some(path) = json_dialog().set_file_name("layout.json").save_file() {
                    let _ = command_tx.send(ChartCommand::SaveLayout {
                        snapshot: state.snapshot(),
                        path,
                    });
                }
            }
        });
        ui.horizontal(|ui| {
            if ui.button("Import CSV").clicked() {
                if let Some(path) = csv_dialog().pick_file() {
                    let _ = command_tx.send(ChartCommand::ImportCsv { input_path: path });
                    *status = "Loading CSV...".to_string();
                }
            }
            if ui.button("Export CSV").clicked() {
                if let Some(path) = csv_dialog().set_file_name("layout.csv").save_file() {
                    let _ = command_tx.send(ChartCommand::ExportCsv {
                        letters: state.layout.letters().to_vec(),
                        output_path: path,
                    });
                }
            }
        });
    });
}

fn json_dialog() -> rfd::FileDialog {
    rfd::FileDialog::new().add_filter("JSON", &["json"])
}

fn csv_dialog() -> rfd::FileDialog {
    rfd::FileDialog::new().add_filter("CSV", &["csv"])
}

fn export_pdf(
    state: &EditorState,
    command_tx: &mpsc::UnboundedSender<ChartCommand>,
    status: &mut String,
) -> bool {
    let output_dir: Option<PathBuf> = match &state.config.output_dir {
        Some(dir) => Some(dir.clone()),
        None => rfd::FileDialog::new().pick_folder(),
    };
    let Some(output_dir) = output_dir else {
        return false;
    };

    let _ = command_tx.send(ChartCommand::Export {
        letters: state.layout.letters().to_vec(),
        options: state.export_options(),
        output_dir,
    });
    *status = "Generating PDF...".to_string();
    true
}

fn print(
    state: &EditorState,
    command_tx: &mpsc::UnboundedSender<ChartCommand>,
    status: &mut String,
) -> bool {
    let Some(output_path) = rfd::FileDialog::new()
        .add_filter("HTML", &["html"])
        .set_file_name("vision-trainer-print.html")
        .save_file()
    else {
        return false;
    };

    let _ = command_tx.send(ChartCommand::Print {
        letters: state.layout.letters().to_vec(),
        options: state.export_options(),
        output_path,
    });
    *status = "Preparing print document...".to_string();
    true
}
