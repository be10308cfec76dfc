use chart_async_runtime::{ChartCommand, ChartUpdate};
use chart_export::{PageRenderer, ResvgRenderer};
use std::sync::Arc;
use tokio::sync::mpsc;

use crate::handlers;

/// Async worker task that processes chart commands and sends updates
pub async fn worker_task(
    mut command_rx: mpsc::UnboundedReceiver<ChartCommand>,
    update_tx: mpsc::UnboundedSender<ChartUpdate>,
) {
    // Font discovery is slow, do it once and off the runtime threads
    let renderer: Arc<dyn PageRenderer> =
        match tokio::task::spawn_blocking(ResvgRenderer::with_system_fonts).await {
            Ok(renderer) => Arc::new(renderer),
            Err(e) => {
                log::error!("Font loading failed, glyphs will not be rendered: {}", e);
                Arc::new(ResvgRenderer::without_fonts())
            }
        };

    while let Some(cmd) = command_rx.recv().await {
        process_command(cmd, &renderer, &update_tx).await;
    }
}

async fn process_command(
    cmd: ChartCommand,
    renderer: &Arc<dyn PageRenderer>,
    update_tx: &mpsc::UnboundedSender<ChartUpdate>,
) {
    match cmd {
        ChartCommand::Export {
            letters,
            options,
            output_dir,
        } => {
            handlers::export::handle_export(letters, options, output_dir, renderer.clone(), update_tx)
                .await;
        }
        ChartCommand::Print {
            letters,
            options,
            output_path,
        } => {
            handlers::export::handle_print(letters, options, output_path, update_tx).await;
        }
        ChartCommand::ImportCsv { input_path } => {
            handlers::files::handle_import_csv(input_path, update_tx).await;
        }
        ChartCommand::ExportCsv {
            letters,
            output_path,
        } => {
            handlers::files::handle_export_csv(letters, output_path, update_tx).await;
        }
        ChartCommand::LoadLayout { path } => {
            handlers::files::handle_load_layout(path, update_tx).await;
        }
        ChartCommand::SaveLayout { snapshot, path } => {
            handlers::files::handle_save_layout(snapshot, path, update_tx).await;
        }
        ChartCommand::SaveConfig { config } => {
            handlers::files::handle_save_config(config, update_tx).await;
        }
    }
}
