use super::{KeyValueStore, LoadedPreset, Preset, builtin_presets};
use crate::constants::STORAGE_KEY;
use crate::types::{ChartError, GridLayout, Orientation, PageSettings, PositionedCharacter, Result};
use chrono::Utc;

/// Built-in plus custom presets, written through to a backend on every change
#[derive(Debug)]
pub struct PresetStore<S: KeyValueStore> {
    backend: S,
    presets: Vec<Preset>,
}

impl<S: KeyValueStore> PresetStore<S> {
    /// Read the persisted presets, merge them with freshly computed built-ins
    /// and write the merged set back.
    ///
    /// Missing or unreadable data counts as no stored presets.
    pub fn initialize(backend: S) -> Self {
        let stored = read_presets(&backend);
        let mut presets = builtin_presets();

        for preset in stored.into_iter().filter(|p| !p.is_built_in) {
            if presets.iter().any(|p| p.is_built_in && p.matches_name(&preset.name)) {
                log::warn!(
                    "Dropping custom preset '{}' because its name is taken by a built-in",
                    preset.name
                );
                continue;
            }
            presets.push(preset);
        }

        let mut store = Self { backend, presets };
        store.persist();
        log::debug!("Preset store initialized with {} presets", store.presets.len());
        store
    }

    pub fn presets(&self) -> &[Preset] {
        &self.presets
    }

    pub fn names(&self) -> Vec<&str> {
        self.presets.iter().map(|p| p.name.as_str()).collect()
    }

    pub fn find(&self, name: &str) -> Option<&Preset> {
        self.presets.iter().find(|p| p.matches_name(name))
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Store a deep copy of the given layout under `name`
    pub fn save(
        &mut self,
        name: &str,
        letters: &[PositionedCharacter],
        page_settings: PageSettings,
        orientation: Orientation,
        grid_layout: Option<GridLayout>,
    ) -> Result<&Preset> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ChartError::EmptyPresetName);
        }
        if self.find(name).is_some() {
            return Err(ChartError::DuplicatePresetName(name.to_string()));
        }

        self.presets.push(Preset {
            name: name.to_string(),
            is_built_in: false,
            letters: letters.to_vec(),
            page_settings,
            orientation,
            created_at: Utc::now(),
            grid_layout,
        });
        self.persist();
        log::info!("Saved preset '{}' ({} letters)", name, letters.len());

        let index = self.presets.len() - 1;
        Ok(&self.presets[index])
    }

    /// Remove a custom preset
    pub fn delete(&mut self, name: &str) -> Result<()> {
        let index = self
            .presets
            .iter()
            .position(|p| p.matches_name(name))
            .ok_or_else(|| ChartError::PresetNotFound(name.trim().to_string()))?;

        if self.presets[index].is_built_in {
            return Err(ChartError::BuiltInPreset(self.presets[index].name.clone()));
        }

        let removed = self.presets.remove(index);
        self.persist();
        log::info!("Deleted preset '{}'", removed.name);
        Ok(())
    }

    /// Deep copy of the preset's layout and settings
    pub fn load(&self, name: &str) -> Result<LoadedPreset> {
        self.find(name)
            .map(LoadedPreset::from)
            .ok_or_else(|| ChartError::PresetNotFound(name.trim().to_string()))
    }

    pub fn into_backend(self) -> S {
        self.backend
    }

    fn persist(&mut self) {
        let json = match serde_json::to_string(&self.presets) {
            Ok(json) => json,
            Err(e) => {
                log::error!("Failed to serialize presets: {}", e);
                return;
            }
        };
        if let Err(e) = self.backend.set(STORAGE_KEY, &json) {
            log::error!("Failed to persist presets: {}", e);
        }
    }
}

fn read_presets<S: KeyValueStore>(backend: &S) -> Vec<Preset> {
    let raw = match backend.get(STORAGE_KEY) {
        Ok(Some(raw)) if !raw.trim().is_empty() => raw,
        Ok(_) => return Vec::new(),
        Err(e) => {
            log::warn!("Failed to read stored presets: {}", e);
            return Vec::new();
        }
    };

    serde_json::from_str(&raw).unwrap_or_else(|e| {
        log::warn!("Ignoring malformed stored presets: {}", e);
        Vec::new()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presets::{MemoryStore, STANDARD_GRID_PRESET};

    struct FailingStore;

    impl KeyValueStore for FailingStore {
        fn get(&self, _key: &str) -> Result<Option<String>> {
            Err(ChartError::Storage("unavailable".into()))
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<()> {
            Err(ChartError::Storage("read-only".into()))
        }
    }

    #[test]
    fn failing_backend_still_works_in_memory() {
        let mut store = PresetStore::initialize(FailingStore);
        assert_eq!(store.presets().len(), 2);

        store
            .save("Mine", &[], PageSettings::default(), Orientation::Landscape, None)
            .unwrap();
        assert!(store.find("mine").is_some());
    }

    #[test]
    fn malformed_data_is_ignored() {
        let store = PresetStore::initialize(MemoryStore::with_entry(STORAGE_KEY, "{not json"));
        assert_eq!(store.names(), vec![STANDARD_GRID_PRESET, "MacDonald 1"]);

        // The merged set replaced the broken blob
        let raw = store.backend().get(STORAGE_KEY).unwrap().unwrap();
        let persisted: Vec<Preset> = serde_json::from_str(&raw).unwrap();
        assert_eq!(persisted.len(), 2);
    }
}
