//! Named layout presets
//!
//! Built-in presets are recomputed from code on every start; custom presets
//! are persisted as one JSON array through a [`KeyValueStore`].

mod storage;
mod store;

pub use storage::*;
pub use store::*;

use crate::constants::{DEFAULT_GRID_COLS, DEFAULT_GRID_ROWS};
use crate::generators::{generate_grid, generate_radial};
use crate::types::{GridLayout, Orientation, PageSettings, PositionedCharacter};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const STANDARD_GRID_PRESET: &str = "Standard Grid";
pub const MACDONALD_PRESET: &str = "MacDonald 1";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preset {
    pub name: String,
    #[serde(default)]
    pub is_built_in: bool,
    pub letters: Vec<PositionedCharacter>,
    #[serde(default)]
    pub page_settings: PageSettings,
    #[serde(default)]
    pub orientation: Orientation,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grid_layout: Option<GridLayout>,
}

impl Preset {
    pub fn matches_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.trim().to_lowercase()
    }
}

/// Everything needed to restore the editor from a preset
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedPreset {
    pub letters: Vec<PositionedCharacter>,
    pub page_settings: PageSettings,
    pub orientation: Orientation,
    pub grid_layout: Option<GridLayout>,
}

impl From<&Preset> for LoadedPreset {
    fn from(preset: &Preset) -> Self {
        Self {
            letters: preset.letters.clone(),
            page_settings: preset.page_settings,
            orientation: preset.orientation,
            grid_layout: preset.grid_layout,
        }
    }
}

/// Presets shipped with the application, generated fresh
pub fn builtin_presets() -> Vec<Preset> {
    let now = Utc::now();
    vec![
        Preset {
            name: STANDARD_GRID_PRESET.to_string(),
            is_built_in: true,
            letters: generate_grid(DEFAULT_GRID_ROWS, DEFAULT_GRID_COLS, Orientation::Landscape),
            page_settings: PageSettings::default(),
            orientation: Orientation::Landscape,
            created_at: now,
            grid_layout: Some(GridLayout {
                rows: DEFAULT_GRID_ROWS,
                cols: DEFAULT_GRID_COLS,
            }),
        },
        Preset {
            name: MACDONALD_PRESET.to_string(),
            is_built_in: true,
            letters: generate_radial(Orientation::Landscape),
            page_settings: PageSettings::default(),
            orientation: Orientation::Landscape,
            created_at: now,
            grid_layout: None,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtins_are_flagged() {
        let presets = builtin_presets();
        assert_eq!(presets.len(), 2);
        assert!(presets.iter().all(|p| p.is_built_in));
        assert_eq!(presets[0].letters.len(), 28);
        assert_eq!(presets[1].letters.len(), 28);
        assert_eq!(presets[0].grid_layout, Some(GridLayout { rows: 4, cols: 7 }));
    }

    #[test]
    fn missing_fields_take_defaults() {
        let json = r##"{
            "name": "Old",
            "letters": [{"id": 0, "char": "Q", "x": 1.5, "y": 2.0, "fontSize": 12}],
            "pageSettings": {"bgColor": "#000000", "textColor": "#ffffff"},
            "createdAt": "2024-03-01T10:00:00Z",
            "somethingElse": true
        }"##;
        let preset: Preset = serde_json::from_str(json).unwrap();
        assert_eq!(preset.orientation, Orientation::Landscape);
        assert!(!preset.is_built_in);
        assert_eq!(preset.grid_layout, None);
        assert_eq!(preset.letters[0].glyph, 'Q');
        assert_eq!(preset.page_settings.text_color.to_string(), "#FFFFFF");
    }

    #[test]
    fn name_match_ignores_case_and_padding() {
        let preset = &builtin_presets()[1];
        assert!(preset.matches_name("  macdonald 1 "));
        assert!(!preset.matches_name("MacDonald 2"));
    }
}
