#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use anyhow::Result;
use eframe::egui;

mod app;
mod handlers;
mod logger;
mod state;
mod ui_components;
mod views;
mod worker;

const LOG_CAPACITY: usize = 500;

fn main() -> Result<()> {
    let logger = logger::AppLogger::new(LOG_CAPACITY, log::LevelFilter::Info);
    logger.clone().init()?;

    let runtime = tokio::runtime::Runtime::new()?;
    let handle = runtime.handle().clone();
    let _guard = runtime.enter();

    let config = runtime
        .block_on(chart_core::EditorConfig::load())
        .unwrap_or_else(|e| {
            log::warn!("Using default settings: {}", e);
            chart_core::EditorConfig::default()
        });

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 860.0])
            .with_title("Vision Charts"),
        ..Default::default()
    };

    eframe::run_native(
        "Vision Charts",
        options,
        Box::new(move |cc| Ok(Box::new(app::ChartEditorApp::new(cc, handle, logger, config)))),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))
}
