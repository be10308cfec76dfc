//! Persisted editor defaults
//!
//! Stored as `config.json` in `<config_dir>/vision-charts/`, next to the
//! preset file. A missing file means defaults.

use crate::constants::{
    APP_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_GRID_COLS, DEFAULT_GRID_ROWS, MAX_COPIES,
    MAX_GRID_COLS, MAX_GRID_ROWS, MIN_COPIES,
};
use crate::types::{ChartError, Orientation, PageSettings, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EditorConfig {
    pub orientation: Orientation,
    pub page_settings: PageSettings,
    pub copies: usize,
    pub grid_rows: usize,
    pub grid_cols: usize,
    pub include_digits: bool,
    pub allow_duplicates: bool,
    pub show_fixation: bool,
    pub show_grid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            orientation: Orientation::Landscape,
            page_settings: PageSettings::default(),
            copies: 1,
            grid_rows: DEFAULT_GRID_ROWS,
            grid_cols: DEFAULT_GRID_COLS,
            include_digits: false,
            allow_duplicates: true,
            show_fixation: false,
            show_grid: true,
            output_dir: None,
        }
    }
}

/// Reject a value outside `min..=max`
pub fn check_range(label: &str, value: usize, min: usize, max: usize) -> Result<()> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ChartError::Config(format!(
            "{label} must be between {min} and {max}, got {value}"
        )))
    }
}

impl EditorConfig {
    pub fn validate(&self) -> Result<()> {
        check_range("Copies", self.copies, MIN_COPIES, MAX_COPIES)?;
        check_range("Grid rows", self.grid_rows, 1, MAX_GRID_ROWS)?;
        check_range("Grid columns", self.grid_cols, 1, MAX_GRID_COLS)?;
        Ok(())
    }

    /// `<platform config dir>/vision-charts`
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR_NAME))
            .ok_or_else(|| ChartError::Config("Could not determine config directory".into()))
    }

    pub fn config_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE_NAME))
    }

    pub async fn load() -> Result<Self> {
        Self::load_from(Self::config_file()?).await
    }

    pub async fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = match tokio::fs::read_to_string(path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("No config at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(e) => return Err(e.into()),
        };

        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    pub async fn save(&self) -> Result<()> {
        self.save_to(Self::config_file()?).await
    }

    pub async fn save_to(&self, path: impl AsRef<Path>) -> Result<()> {
        self.validate()?;
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        tokio::fs::write(path, contents).await?;
        log::info!("Saved configuration to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = EditorConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!((config.grid_rows, config.grid_cols), (4, 7));
        assert!(config.allow_duplicates);
        assert!(config.show_grid);
    }

    #[test]
    fn out_of_range_copies() {
        let config = EditorConfig {
            copies: 31,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ChartError::Config(_))));

        let config = EditorConfig {
            copies: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn out_of_range_grid() {
        let config = EditorConfig {
            grid_rows: 21,
            ..Default::default()
        };
        assert!(config.validate().is_err());
        let config = EditorConfig {
            grid_cols: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config: EditorConfig = serde_json::from_str(r#"{"copies": 5, "orientation": "portrait"}"#).unwrap();
        assert_eq!(config.copies, 5);
        assert_eq!(config.orientation, Orientation::Portrait);
        assert_eq!(config.grid_cols, 7);
    }
}
