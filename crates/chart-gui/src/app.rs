use chart_async_runtime::{ChartCommand, ChartUpdate};
use chart_core::{DragController, EditorConfig};
use eframe::egui;
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use std::path::Path;
use tokio::sync::mpsc;

use crate::logger::AppLogger;
use crate::state::EditorState;
use crate::views::{show_canvas, show_sidebar};

/// Characters escaped in a `file://` path; `/` and the drive colon stay
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'[')
    .add(b']')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// `file://` URL for a local path, Windows separators and drive letters included
fn file_url(path: &Path) -> String {
    let mut raw = path.to_string_lossy().replace('\\', "/");
    if !raw.starts_with('/') {
        raw.insert(0, '/');
    }
    format!("file://{}", utf8_percent_encode(&raw, PATH_SEGMENT))
}

#[derive(Clone)]
struct ProgressState {
    operation: String,
    current: usize,
    total: usize,
}

pub struct ChartEditorApp {
    state: EditorState,
    drag: DragController,
    status: String,
    show_log: bool,
    logger: AppLogger,

    // Async infrastructure
    command_tx: mpsc::UnboundedSender<ChartCommand>,
    update_rx: mpsc::UnboundedReceiver<ChartUpdate>,

    progress: Option<ProgressState>,
    busy: bool,

    _tokio_handle: tokio::runtime::Handle,
}

impl ChartEditorApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        tokio_handle: tokio::runtime::Handle,
        logger: AppLogger,
        config: EditorConfig,
    ) -> Self {
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (update_tx, update_rx) = mpsc::unbounded_channel();

        tokio_handle.spawn(crate::worker::worker_task(command_rx, update_tx));

        Self {
            state: EditorState::new(config),
            drag: DragController::new(),
            status: String::new(),
            show_log: false,
            logger,
            command_tx,
            update_rx,
            progress: None,
            busy: false,
            _tokio_handle: tokio_handle,
        }
    }

    fn handle_update(&mut self, ctx: &egui::Context, update: ChartUpdate) {
        match update {
            ChartUpdate::Progress {
                operation,
                current,
                total,
            } => {
                self.progress = Some(ProgressState {
                    operation,
                    current,
                    total,
                });
                self.busy = true;
                ctx.request_repaint();
            }
            ChartUpdate::ExportComplete { path, page_count } => {
                self.status = format!("Exported {} pages → {}", page_count, path.display());
                self.finish_operation();
            }
            ChartUpdate::PrintReady { path, page_count } => {
                self.status = format!("Opened {} sheets for printing", page_count);
                ctx.open_url(egui::OpenUrl::new_tab(file_url(&path)));
                self.finish_operation();
            }
            ChartUpdate::CsvImported { letters } => {
                self.status = format!("Imported {} letters from CSV", letters.len());
                self.state.grid_layout = None;
                self.state.layout.replace(letters);
            }
            ChartUpdate::CsvExported { path, letter_count } => {
                self.status = format!("Wrote {} letters → {}", letter_count, path.display());
            }
            ChartUpdate::LayoutLoaded { snapshot } => {
                self.status = format!("Loaded layout with {} letters", snapshot.letters.len());
                self.state.restore(snapshot);
            }
            ChartUpdate::LayoutSaved { path } => {
                self.status = format!("Saved layout → {}", path.display());
            }
            ChartUpdate::ConfigSaved => {
                self.status = "Saved settings as defaults".to_string();
            }
            ChartUpdate::Error { message } => {
                self.status = format!("Error: {message}");
                self.finish_operation();
            }
        }
    }

    fn finish_operation(&mut self) {
        self.progress = None;
        self.busy = false;
    }

    fn show_log_panel(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("log")
            .resizable(true)
            .default_height(140.0)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.strong("Log");
                    if ui.small_button("Clear").clicked() {
                        self.logger.clear();
                    }
                });
                egui::ScrollArea::vertical()
                    .stick_to_bottom(true)
                    .show(ui, |ui| {
                        for entry in self.logger.entries() {
                            ui.monospace(format!(
                                "{} {:<5} {}",
                                entry.timestamp.format("%H:%M:%S"),
                                entry.level,
                                entry.message
                            ));
                        }
                    });
            });
    }
}

impl eframe::App for ChartEditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        while let Ok(update) = self.update_rx.try_recv() {
            self.handle_update(ctx, update);
        }

        egui::TopBottomPanel::top("status").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.toggle_value(&mut self.show_log, "📜 Log");
                ui.separator();
                ui.label(format!(
                    "{} letters · {}",
                    self.state.layout.len(),
                    self.state.config.orientation.name()
                ));
                if !self.status.is_empty() {
                    ui.separator();
                    ui.label(&self.status);
                }
            });

            if let Some(ref progress) = self.progress {
                ui.horizontal(|ui| {
                    ui.label(&progress.operation);
                    ui.add(
                        egui::ProgressBar::new(progress.current as f32 / progress.total.max(1) as f32)
                            .text(format!("{}/{}", progress.current, progress.total)),
                    );
                });
                ctx.request_repaint();
            }
        });

        if self.show_log {
            self.show_log_panel(ctx);
        }

        egui::SidePanel::left("controls")
            .min_width(300.0)
            .show(ctx, |ui| {
                show_sidebar(ui, &mut self.state, &self.command_tx, &mut self.status, &mut self.busy);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            show_canvas(ui, &mut self.state, &mut self.drag);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_url_escapes_path() {
        assert_eq!(
            file_url(Path::new("/tmp/vision charts/#1 print.html")),
            "file:///tmp/vision%20charts/%231%20print.html"
        );
        assert_eq!(file_url(Path::new("/tmp/sehtafel-ü.html")), "file:///tmp/sehtafel-%C3%BC.html");
    }

    #[test]
    fn file_url_handles_drive_paths() {
        assert_eq!(
            file_url(Path::new(r"C:\Users\me\print.html")),
            "file:///C:/Users/me/print.html"
        );
    }
}
