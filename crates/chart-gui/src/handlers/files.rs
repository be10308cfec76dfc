use chart_async_runtime::ChartUpdate;
use chart_core::{EditorConfig, LayoutSnapshot, PositionedCharacter};
use std::path::PathBuf;
use tokio::sync::mpsc;

pub async fn handle_import_csv(input_path: PathBuf, update_tx: &mpsc::UnboundedSender<ChartUpdate>) {
    match chart_core::load_layout_csv(&input_path).await {
        Ok(letters) => {
            let _ = update_tx.send(ChartUpdate::CsvImported { letters });
        }
        Err(e) => {
            let _ = update_tx.send(ChartUpdate::Error {
                message: format!("Failed to load CSV: {e}"),
            });
        }
    }
}

pub async fn handle_export_csv(
    letters: Vec<PositionedCharacter>,
    output_path: PathBuf,
    update_tx: &mpsc::UnboundedSender<ChartUpdate>,
) {
    match chart_core::save_layout_csv(&letters, &output_path).await {
        Ok(()) => {
            let _ = update_tx.send(ChartUpdate::CsvExported {
                path: output_path,
                letter_count: letters.len(),
            });
        }
        Err(e) => {
            let _ = update_tx.send(ChartUpdate::Error {
                message: format!("Failed to write CSV: {e}"),
            });
        }
    }
}

pub async fn handle_load_layout(path: PathBuf, update_tx: &mpsc::UnboundedSender<ChartUpdate>) {
    match LayoutSnapshot::load(&path).await {
        Ok(snapshot) => {
            let _ = update_tx.send(ChartUpdate::LayoutLoaded { snapshot });
        }
        Err(e) => {
            let _ = update_tx.send(ChartUpdate::Error {
                message: format!("Failed to load layout: {e}"),
            });
        }
    }
}

pub async fn handle_save_layout(
    snapshot: LayoutSnapshot,
    path: PathBuf,
    update_tx: &mpsc::UnboundedSender<ChartUpdate>,
) {
    match snapshot.save(&path).await {
        Ok(()) => {
            let _ = update_tx.send(ChartUpdate::LayoutSaved { path });
        }
        Err(e) => {
            let _ = update_tx.send(ChartUpdate::Error {
                message: format!("Failed to save layout: {e}"),
            });
        }
    }
}

pub async fn handle_save_config(config: EditorConfig, update_tx: &mpsc::UnboundedSender<ChartUpdate>) {
    match config.save().await {
        Ok(()) => {
            let _ = update_tx.send(ChartUpdate::ConfigSaved);
        }
        Err(e) => {
            let _ = update_tx.send(ChartUpdate::Error {
                message: format!("Failed to save settings: {e}"),
            });
        }
    }
}
