use chart_core::generators::{DEFAULT_BOTTOM_WORD, DEFAULT_TOP_WORD, LITERAL_CHARTS};
use chart_core::presets::{FileStore, KeyValueStore, MemoryStore, PresetStore};
use chart_core::{
    ChartError, ChartPattern, EditorConfig, GridLayout, LayoutSnapshot, LayoutState, PageGeometry,
    regenerate,
};
use chart_export::ExportOptions;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Preset persistence: the config directory when it exists, memory otherwise
pub enum PresetBackend {
    File(FileStore),
    Memory(MemoryStore),
}

impl KeyValueStore for PresetBackend {
    fn get(&self, key: &str) -> chart_core::Result<Option<String>> {
        match self {
            PresetBackend::File(store) => store.get(key),
            PresetBackend::Memory(store) => store.get(key),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> chart_core::Result<()> {
        match self {
            PresetBackend::File(store) => store.set(key, value),
            PresetBackend::Memory(store) => store.set(key, value),
        }
    }
}

impl PresetBackend {
    pub fn open() -> Self {
        match EditorConfig::config_dir() {
            Ok(dir) => PresetBackend::File(FileStore::new(dir)),
            Err(e) => {
                log::warn!("Presets will not be saved: {}", e);
                PresetBackend::Memory(MemoryStore::new())
            }
        }
    }
}

/// Everything the editor window edits
pub struct EditorState {
    pub layout: LayoutState,
    pub config: EditorConfig,
    pub grid_layout: Option<GridLayout>,
    pub word_top: String,
    pub word_bottom: String,
    pub literal_index: usize,
    pub preset_name: String,
    pub selected_preset: Option<String>,
    pub presets: PresetStore<PresetBackend>,
    pub rng: StdRng,
}

impl EditorState {
    pub fn new(config: EditorConfig) -> Self {
        Self::with_presets(config, PresetStore::initialize(PresetBackend::open()))
    }

    pub fn with_presets(config: EditorConfig, presets: PresetStore<PresetBackend>) -> Self {
        let mut rng = StdRng::from_os_rng();
        let grid = GridLayout {
            rows: config.grid_rows,
            cols: config.grid_cols,
        };
        let letters = ChartPattern::Grid {
            rows: grid.rows,
            cols: grid.cols,
        }
        .generate(config.orientation, &mut rng);

        Self {
            layout: LayoutState::new(letters),
            config,
            grid_layout: Some(grid),
            word_top: DEFAULT_TOP_WORD.to_string(),
            word_bottom: DEFAULT_BOTTOM_WORD.to_string(),
            literal_index: 0,
            preset_name: String::new(),
            selected_preset: None,
            presets,
            rng,
        }
    }

    pub fn geometry(&self) -> PageGeometry {
        self.config.orientation.geometry()
    }

    /// Replace the layout with a freshly generated pattern
    pub fn apply_pattern(&mut self, pattern: ChartPattern) {
        self.grid_layout = match &pattern {
            ChartPattern::Grid { rows, cols } => Some(GridLayout {
                rows: *rows,
                cols: *cols,
            }),
            _ => None,
        };
        let letters = pattern.generate(self.config.orientation, &mut self.rng);
        log::info!("Generated {} letters", letters.len());
        self.layout.replace(letters);
    }

    pub fn grid_pattern(&self) -> ChartPattern {
        ChartPattern::Grid {
            rows: self.config.grid_rows,
            cols: self.config.grid_cols,
        }
    }

    pub fn word_pattern(&self) -> ChartPattern {
        ChartPattern::Word {
            top: self.word_top.clone(),
            bottom: self.word_bottom.clone(),
        }
    }

    pub fn literal_pattern(&self) -> ChartPattern {
        let index = self.literal_index.min(LITERAL_CHARTS.len() - 1);
        ChartPattern::Literal(LITERAL_CHARTS[index])
    }

    /// Reassign characters; the layout is untouched when the pool is too small
    pub fn regenerate_letters(&mut self) -> Result<(), String> {
        match regenerate(
            self.layout.letters(),
            self.config.include_digits,
            self.config.allow_duplicates,
            &mut self.rng,
        ) {
            Ok(letters) => {
                self.layout.replace(letters);
                Ok(())
            }
            Err(ChartError::InsufficientPool { required, available }) => Err(format!(
                "Cannot generate {required} unique characters. Pool only has {available} characters. \
                 Enable duplicates or include digits."
            )),
            Err(e) => Err(e.to_string()),
        }
    }

    pub fn save_preset(&mut self) -> Result<String, String> {
        let preset = self
            .presets
            .save(
                &self.preset_name,
                self.layout.letters(),
                self.config.page_settings,
                self.config.orientation,
                self.grid_layout,
            )
            .map_err(|e| e.to_string())?;
        let name = preset.name.clone();
        self.preset_name.clear();
        self.selected_preset = Some(name.clone());
        Ok(name)
    }

    pub fn load_preset(&mut self, name: &str) -> Result<(), String> {
        let loaded = self.presets.load(name).map_err(|e| e.to_string())?;
        self.layout.replace(loaded.letters);
        self.config.page_settings = loaded.page_settings;
        self.config.orientation = loaded.orientation;
        self.grid_layout = loaded.grid_layout;
        if let Some(grid) = loaded.grid_layout {
            self.config.grid_rows = grid.rows;
            self.config.grid_cols = grid.cols;
        }
        Ok(())
    }

    pub fn delete_preset(&mut self, name: &str) -> Result<(), String> {
        self.presets.delete(name).map_err(|e| e.to_string())?;
        if self.selected_preset.as_deref() == Some(name) {
            self.selected_preset = None;
        }
        Ok(())
    }

    pub fn snapshot(&self) -> LayoutSnapshot {
        LayoutSnapshot {
            letters: self.layout.letters().to_vec(),
            page_settings: self.config.page_settings,
            orientation: self.config.orientation,
            grid_layout: self.grid_layout,
        }
    }

    pub fn restore(&mut self, snapshot: LayoutSnapshot) {
        self.layout.replace(snapshot.letters);
        self.config.page_settings = snapshot.page_settings;
        self.config.orientation = snapshot.orientation;
        self.grid_layout = snapshot.grid_layout;
    }

    pub fn export_options(&self) -> ExportOptions {
        ExportOptions::from(&self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chart_core::presets::MACDONALD_PRESET;
    use chart_core::Orientation;

    fn editor() -> EditorState {
        let presets = PresetStore::initialize(PresetBackend::Memory(MemoryStore::new()));
        EditorState::with_presets(EditorConfig::default(), presets)
    }

    #[test]
    fn starts_with_standard_grid() {
        let state = editor();
        assert_eq!(state.layout.len(), 28);
        assert_eq!(state.grid_layout, Some(GridLayout { rows: 4, cols: 7 }));
    }

    #[test]
    fn failed_regeneration_leaves_layout() {
        let mut state = editor();
        state.apply_pattern(ChartPattern::Grid { rows: 4, cols: 8 });
        state.config.allow_duplicates = false;
        let before = state.layout.letters().to_vec();

        let message = state.regenerate_letters().unwrap_err();
        assert!(message.contains("Cannot generate 32 unique characters"), "{message}");
        assert!(message.contains("Pool only has 26 characters"), "{message}");
        assert_eq!(state.layout.letters(), before.as_slice());

        state.config.include_digits = true;
        assert!(state.regenerate_letters().is_ok());
    }

    #[test]
    fn preset_round_trip_through_editor() {
        let mut state = editor();
        state.config.orientation = Orientation::Portrait;
        state.preset_name = "Portrait Grid".to_string();
        assert_eq!(state.save_preset().unwrap(), "Portrait Grid");
        assert!(state.preset_name.is_empty());

        state.load_preset(MACDONALD_PRESET).unwrap();
        assert_eq!(state.config.orientation, Orientation::Landscape);
        assert_eq!(state.grid_layout, None);

        state.load_preset("portrait grid").unwrap();
        assert_eq!(state.config.orientation, Orientation::Portrait);
        assert_eq!(state.layout.letters()[0].glyph, 'A');

        assert!(state.delete_preset(MACDONALD_PRESET).is_err());
        state.delete_preset("Portrait Grid").unwrap();
        assert_eq!(state.selected_preset, None);
    }
}
