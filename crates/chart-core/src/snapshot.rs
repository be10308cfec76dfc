use crate::types::{GridLayout, Orientation, PageSettings, PositionedCharacter, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Layout plus page settings, as exchanged through `layout.json` files
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutSnapshot {
    pub letters: Vec<PositionedCharacter>,
    #[serde(default)]
    pub page_settings: PageSettings,
    #[serde(default)]
    pub orientation: Orientation,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grid_layout: Option<GridLayout>,
}

impl LayoutSnapshot {
    pub fn new(
        letters: Vec<PositionedCharacter>,
        page_settings: PageSettings,
        orientation: Orientation,
    ) -> Self {
        Self {
            letters,
            page_settings,
            orientation,
            grid_layout: None,
        }
    }

    pub fn with_grid(mut self, grid_layout: GridLayout) -> Self {
        self.grid_layout = Some(grid_layout);
        self
    }

    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = tokio::fs::read_to_string(path.as_ref()).await?;
        Ok(serde_json::from_str(&contents)?)
    }

    pub async fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)?;
        tokio::fs::write(path.as_ref(), contents).await?;
        Ok(())
    }
}
