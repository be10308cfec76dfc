use crate::types::Result;
use chart_core::constants::{MAX_COPIES, MIN_COPIES};
use chart_core::{ChartError, EditorConfig, Orientation, PageGeometry, PageSettings, check_range};

/// Offscreen render scale relative to 96 dpi
pub const DEFAULT_RENDER_SCALE: f32 = 2.0;

#[derive(Debug, Clone, PartialEq)]
pub struct ExportOptions {
    pub copies: usize,
    pub page_settings: PageSettings,
    pub orientation: Orientation,
    pub show_fixation: bool,
    pub include_digits: bool,
    pub allow_duplicates: bool,
    pub scale: f32,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            copies: 1,
            page_settings: PageSettings::default(),
            orientation: Orientation::Landscape,
            show_fixation: false,
            include_digits: false,
            allow_duplicates: true,
            scale: DEFAULT_RENDER_SCALE,
        }
    }
}

impl From<&EditorConfig> for ExportOptions {
    fn from(config: &EditorConfig) -> Self {
        Self {
            copies: config.copies,
            page_settings: config.page_settings,
            orientation: config.orientation,
            show_fixation: config.show_fixation,
            include_digits: config.include_digits,
            allow_duplicates: config.allow_duplicates,
            scale: DEFAULT_RENDER_SCALE,
        }
    }
}

impl ExportOptions {
    pub fn geometry(&self) -> PageGeometry {
        self.orientation.geometry()
    }

    pub fn validate(&self) -> Result<()> {
        check_range("Copies", self.copies, MIN_COPIES, MAX_COPIES)?;
        if !(self.scale > 0.0 && self.scale.is_finite()) {
            return Err(ChartError::Config(format!("Render scale must be positive, got {}", self.scale)).into());
        }
        Ok(())
    }
}
