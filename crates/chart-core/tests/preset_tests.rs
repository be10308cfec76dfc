use chart_core::constants::STORAGE_KEY;
use chart_core::generators::generate_grid;
use chart_core::presets::*;
use chart_core::*;

fn store() -> PresetStore<MemoryStore> {
    PresetStore::initialize(MemoryStore::new())
}

fn sample_letters() -> Vec<PositionedCharacter> {
    generate_grid(2, 2, Orientation::Landscape)
}

#[test]
fn test_initialize_persists_builtins() {
    let store = store();
    assert_eq!(store.names(), vec![STANDARD_GRID_PRESET, MACDONALD_PRESET]);

    let raw = store.backend().get(STORAGE_KEY).unwrap().unwrap();
    let persisted: Vec<Preset> = serde_json::from_str(&raw).unwrap();
    assert_eq!(persisted.len(), 2);
    assert!(persisted.iter().all(|p| p.is_built_in));
}

#[test]
fn test_save_and_reload_across_sessions() {
    let mut store = store();
    store
        .save(
            "  Evening Drill ",
            &sample_letters(),
            PageSettings::default(),
            Orientation::Portrait,
            Some(GridLayout { rows: 2, cols: 2 }),
        )
        .unwrap();

    let reopened = PresetStore::initialize(store.into_backend());
    let preset = reopened.find("evening drill").unwrap();
    assert_eq!(preset.name, "Evening Drill");
    assert!(!preset.is_built_in);
    assert_eq!(preset.orientation, Orientation::Portrait);
    assert_eq!(preset.letters, sample_letters());
    assert_eq!(reopened.presets().len(), 3);
}

#[test]
fn test_empty_name_rejected() {
    let mut store = store();
    let result = store.save("   ", &[], PageSettings::default(), Orientation::Landscape, None);
    assert!(matches!(result, Err(ChartError::EmptyPresetName)));
    assert_eq!(store.presets().len(), 2);
}

#[test]
fn test_duplicate_name_rejected_case_insensitively() {
    let mut store = store();
    store
        .save("Foo", &sample_letters(), PageSettings::default(), Orientation::Landscape, None)
        .unwrap();

    let result = store.save("foo", &[], PageSettings::default(), Orientation::Landscape, None);
    assert!(matches!(result, Err(ChartError::DuplicatePresetName(_))));

    let result = store.save("STANDARD GRID", &[], PageSettings::default(), Orientation::Landscape, None);
    assert!(matches!(result, Err(ChartError::DuplicatePresetName(_))));
    assert_eq!(store.presets().len(), 3);
}

#[test]
fn test_saved_preset_is_a_deep_copy() {
    let mut store = store();
    let mut layout = LayoutState::new(sample_letters());
    store
        .save("Snapshot", layout.letters(), PageSettings::default(), Orientation::Landscape, None)
        .unwrap();

    layout.update(0, LetterField::X(250.0));
    layout.update(0, LetterField::Char('Z'));

    let loaded = store.load("Snapshot").unwrap();
    assert_eq!(loaded.letters, sample_letters());
}

#[test]
fn test_loaded_preset_is_a_deep_copy() {
    let store = store();
    let mut loaded = store.load(MACDONALD_PRESET).unwrap();
    loaded.letters[0].x = 1.0;

    let again = store.load(MACDONALD_PRESET).unwrap();
    assert_ne!(again.letters[0].x, 1.0);
    assert_eq!(again.letters.len(), 28);
}

#[test]
fn test_delete_custom_preset() {
    let mut store = store();
    store
        .save("Temp", &[], PageSettings::default(), Orientation::Landscape, None)
        .unwrap();
    store.delete("temp").unwrap();
    assert!(store.find("Temp").is_none());

    let raw = store.backend().get(STORAGE_KEY).unwrap().unwrap();
    assert!(!raw.contains("\"Temp\""));
}

#[test]
fn test_delete_builtin_and_unknown_rejected() {
    let mut store = store();
    assert!(matches!(
        store.delete(STANDARD_GRID_PRESET),
        Err(ChartError::BuiltInPreset(_))
    ));
    assert!(matches!(
        store.delete("Nope"),
        Err(ChartError::PresetNotFound(_))
    ));
    assert_eq!(store.presets().len(), 2);
}

#[test]
fn test_custom_colliding_with_builtin_is_dropped() {
    let stored = serde_json::json!([
        {
            "name": "macdonald 1",
            "isBuiltIn": false,
            "letters": [],
            "pageSettings": {"bgColor": "#FFFFFF", "textColor": "#000000"},
            "createdAt": "2024-01-01T00:00:00Z"
        },
        {
            "name": "Kept",
            "isBuiltIn": false,
            "letters": [],
            "pageSettings": {"bgColor": "#FFFFFF", "textColor": "#000000"},
            "createdAt": "2024-01-01T00:00:00Z"
        }
    ]);
    let backend = MemoryStore::with_entry(STORAGE_KEY, &stored.to_string());
    let store = PresetStore::initialize(backend);

    assert_eq!(store.names(), vec![STANDARD_GRID_PRESET, MACDONALD_PRESET, "Kept"]);
    assert_eq!(store.find("MacDonald 1").unwrap().letters.len(), 28);
}

#[test]
fn test_file_store_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = PresetStore::initialize(FileStore::new(dir.path()));
    store
        .save("On Disk", &sample_letters(), PageSettings::default(), Orientation::Landscape, None)
        .unwrap();

    let path = dir.path().join(format!("{STORAGE_KEY}.json"));
    assert!(path.exists());

    let reopened = PresetStore::initialize(FileStore::new(dir.path()));
    assert!(reopened.find("on disk").is_some());
}
