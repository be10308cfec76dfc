use chart_async_runtime::ChartUpdate;
use chart_core::PositionedCharacter;
use chart_export::{ExportOptions, PageRenderer, build_print_document, page_layouts};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::mpsc;

pub async fn handle_export(
    letters: Vec<PositionedCharacter>,
    options: ExportOptions,
    output_dir: PathBuf,
    renderer: Arc<dyn PageRenderer>,
    update_tx: &mpsc::UnboundedSender<ChartUpdate>,
) {
    let mut rng = StdRng::from_os_rng();
    let progress_tx = update_tx.clone();

    let result = chart_export::export_document(&letters, &options, renderer, &mut rng, |current, total| {
        let _ = progress_tx.send(ChartUpdate::Progress {
            operation: "Generating PDF".to_string(),
            current,
            total,
        });
    })
    .await;

    let saved = match result {
        Ok(document) => chart_export::save_document(&document, &output_dir)
            .await
            .map(|path| (path, document.page_count)),
        Err(e) => Err(e),
    };

    match saved {
        Ok((path, page_count)) => {
            log::info!("Exported {} pages to {}", page_count, path.display());
            let _ = update_tx.send(ChartUpdate::ExportComplete { path, page_count });
        }
        Err(e) => {
            log::error!("PDF export failed: {}", e);
            let _ = update_tx.send(ChartUpdate::Error {
                message: "Failed to generate PDF. Please try again.".to_string(),
            });
        }
    }
}

pub async fn handle_print(
    letters: Vec<PositionedCharacter>,
    options: ExportOptions,
    output_path: PathBuf,
    update_tx: &mpsc::UnboundedSender<ChartUpdate>,
) {
    if let Err(e) = options.validate() {
        let _ = update_tx.send(ChartUpdate::Error {
            message: e.to_string(),
        });
        return;
    }

    let mut rng = StdRng::from_os_rng();
    let pages = page_layouts(&letters, &options, &mut rng);
    let html = build_print_document(
        &pages,
        &options.page_settings,
        options.orientation,
        options.show_fixation,
    );

    match tokio::fs::write(&output_path, html).await {
        Ok(()) => {
            let _ = update_tx.send(ChartUpdate::PrintReady {
                path: output_path,
                page_count: pages.len(),
            });
        }
        Err(e) => {
            let _ = update_tx.send(ChartUpdate::Error {
                message: format!("Failed to write print document: {e}"),
            });
        }
    }
}
