use std::path::PathBuf;

// Re-export types from library crates
pub use chart_core::{EditorConfig, LayoutSnapshot, PositionedCharacter};
pub use chart_export::ExportOptions;

/// Commands sent from UI to worker
#[derive(Debug)]
pub enum ChartCommand {
    Export {
        letters: Vec<PositionedCharacter>,
        options: ExportOptions,
        output_dir: PathBuf,
    },
    Print {
        letters: Vec<PositionedCharacter>,
        options: ExportOptions,
        output_path: PathBuf,
    },
    ImportCsv {
        input_path: PathBuf,
    },
    ExportCsv {
        letters: Vec<PositionedCharacter>,
        output_path: PathBuf,
    },
    LoadLayout {
        path: PathBuf,
    },
    SaveLayout {
        snapshot: LayoutSnapshot,
        path: PathBuf,
    },
    SaveConfig {
        config: EditorConfig,
    },
}

/// Updates sent from worker to UI
#[derive(Debug, Clone)]
pub enum ChartUpdate {
    Progress {
        operation: String,
        current: usize,
        total: usize,
    },
    ExportComplete {
        path: PathBuf,
        page_count: usize,
    },
    PrintReady {
        path: PathBuf,
        page_count: usize,
    },
    CsvImported {
        letters: Vec<PositionedCharacter>,
    },
    CsvExported {
        path: PathBuf,
        letter_count: usize,
    },
    LayoutLoaded {
        snapshot: LayoutSnapshot,
    },
    LayoutSaved {
        path: PathBuf,
    },
    ConfigSaved,
    Error {
        message: String,
    },
}
