//! Unit tests for the persistence module.

use bevy::prelude::*;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;

use crate::habitat::{Habitat, ItemKind, ResourceVector};

use super::autosave::autosave_due;
use super::resources::AutosaveTimer;
use super::store::{JsonFileStore, SaveData, SaveStore, StorageError, load_or_none};

/// In-memory save slot holding raw JSON, like browser local storage
#[derive(Default)]
struct MemoryStore {
    slot: Mutex<Option<String>>,
}

impl MemoryStore {
    fn with_raw(raw: &str) -> Self {
        Self {
            slot: Mutex::new(Some(raw.to_string())),
        }
    }
}

impl SaveStore for MemoryStore {
    fn save(&self, data: &SaveData) -> Result<(), StorageError> {
        let json = serde_json::to_string(data).map_err(StorageError::Serialize)?;
        *self.slot.lock().unwrap() = Some(json);
        Ok(())
    }

    fn load(&self) -> Result<Option<SaveData>, StorageError> {
        match self.slot.lock().unwrap().as_deref() {
            Some(json) => serde_json::from_str(json)
                .map(Some)
                .map_err(StorageError::Parse),
            None => Ok(None),
        }
    }

    fn clear(&self) -> Result<(), StorageError> {
        *self.slot.lock().unwrap() = None;
        Ok(())
    }

    fn has_saved_game(&self) -> bool {
        self.slot.lock().unwrap().is_some()
    }
}

fn sample_save() -> SaveData {
    let mut habitat = Habitat::default();
    let dome = habitat.place(ItemKind::Dome, 20.0, 40.0);
    habitat.place(ItemKind::Solar, 200.0, 40.0);
    habitat.rotate(dome);
    SaveData::new(
        habitat.items().to_vec(),
        ResourceVector::compute(habitat.items()),
    )
}

fn temp_save_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "marsforge-test-{}-{}.json",
        name,
        std::process::id()
    ))
}

#[test]
fn test_memory_store_round_trip() {
    let store = MemoryStore::default();
    assert!(!store.has_saved_game());
    assert!(store.load().unwrap().is_none());

    let data = sample_save();
    store.save(&data).unwrap();
    assert!(store.has_saved_game());
    assert_eq!(store.load().unwrap(), Some(data));

    store.clear().unwrap();
    assert!(!store.has_saved_game());
}

#[test]
fn test_corrupt_data_is_treated_as_absent() {
    let store = MemoryStore::with_raw("{ not json");
    assert!(matches!(store.load(), Err(StorageError::Parse(_))));
    assert!(load_or_none(&store).is_none());
}

#[test]
fn test_wrong_shape_is_treated_as_absent() {
    let store = MemoryStore::with_raw(
        r#"{
            "placed_items": [{"id": 1, "kind": "reactor", "x": 0, "y": 0}],
            "resources": {"oxygen": 1, "power": 1, "water": 1, "food": 1},
            "timestamp": 0
        }"#,
    );
    assert!(load_or_none(&store).is_none());
}

#[test]
fn test_json_file_store_round_trip() {
    let path = temp_save_path("roundtrip");
    let store = JsonFileStore::new(&path);
    let _ = store.clear();

    assert!(!store.has_saved_game());
    assert!(store.load().unwrap().is_none());

    let data = sample_save();
    store.save(&data).unwrap();
    assert!(store.has_saved_game());
    assert_eq!(store.load().unwrap(), Some(data));

    store.clear().unwrap();
    assert!(!path.exists());
    // Clearing twice is fine
    store.clear().unwrap();
}

#[test]
fn test_json_file_store_corrupt_file() {
    let path = temp_save_path("corrupt");
    std::fs::write(&path, "garbage").unwrap();
    let store = JsonFileStore::new(&path);

    assert!(load_or_none(&store).is_none());
    store.clear().unwrap();
}

#[test]
fn test_storage_error_messages() {
    let parse_error = serde_json::from_str::<SaveData>("nope").unwrap_err();
    let message = StorageError::Parse(parse_error).to_string();
    assert!(message.starts_with("Save data is corrupted"));
}

#[test]
fn test_autosave_waits_for_interval() {
    let mut timer = Timer::from_seconds(30.0, TimerMode::Repeating);
    assert!(!autosave_due(&mut timer, Duration::from_secs(10), false));
    assert!(!autosave_due(&mut timer, Duration::from_secs(10), false));
    assert!(autosave_due(&mut timer, Duration::from_secs(10), false));
    // Repeats on the next interval
    assert!(!autosave_due(&mut timer, Duration::from_secs(29), false));
    assert!(autosave_due(&mut timer, Duration::from_secs(1), false));
}

#[test]
fn test_autosave_skips_empty_habitat() {
    let mut timer = Timer::from_seconds(30.0, TimerMode::Repeating);
    assert!(!autosave_due(&mut timer, Duration::from_secs(30), true));
    assert!(autosave_due(&mut timer, Duration::from_secs(30), false));
}

#[test]
fn test_autosave_interval_is_bounded() {
    let huge = AutosaveTimer::new(1e30);
    assert_eq!(huge.0.duration(), Duration::from_secs(3600));

    let tiny = AutosaveTimer::new(0.0);
    assert_eq!(tiny.0.duration(), Duration::from_secs(1));

    let not_a_number = AutosaveTimer::new(f32::NAN);
    assert_eq!(not_a_number.0.duration(), Duration::from_secs(30));
}
