//! Save slot abstraction and its JSON file implementation.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::habitat::{PlacedItem, ResourceVector};

/// Everything written to the save slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveData {
    pub placed_items: Vec<PlacedItem>,
    pub resources: ResourceVector,
    /// Unix time in milliseconds
    pub timestamp: i64,
}

impl SaveData {
    pub fn new(placed_items: Vec<PlacedItem>, resources: ResourceVector) -> Self {
        Self {
            placed_items,
            resources,
            timestamp: chrono::Utc::now().timestamp_millis(),
        }
    }
}

#[derive(Debug)]
pub enum StorageError {
    Io(std::io::Error),
    Serialize(serde_json::Error),
    Parse(serde_json::Error),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::Io(e) => write!(f, "Failed to access save file: {}", e),
            StorageError::Serialize(e) => write!(f, "Failed to serialize habitat: {}", e),
            StorageError::Parse(e) => write!(f, "Save data is corrupted: {}", e),
        }
    }
}

impl std::error::Error for StorageError {}

/// A single-slot store for the player's habitat.
pub trait SaveStore: Send + Sync + 'static {
    fn save(&self, data: &SaveData) -> Result<(), StorageError>;

    /// `Ok(None)` when nothing has been saved yet
    fn load(&self) -> Result<Option<SaveData>, StorageError>;

    fn clear(&self) -> Result<(), StorageError>;

    fn has_saved_game(&self) -> bool;
}

/// Load the saved game, treating unreadable or corrupt data as no save.
pub fn load_or_none(store: &dyn SaveStore) -> Option<SaveData> {
    match store.load() {
        Ok(data) => data,
        Err(e) => {
            warn!("Ignoring saved habitat: {}", e);
            None
        }
    }
}

/// Stores the habitat as pretty-printed JSON in one file.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SaveStore for JsonFileStore {
    fn save(&self, data: &SaveData) -> Result<(), StorageError> {
        let json = serde_json::to_string_pretty(data).map_err(StorageError::Serialize)?;
        std::fs::write(&self.path, json).map_err(StorageError::Io)
    }

    fn load(&self) -> Result<Option<SaveData>, StorageError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let json = std::fs::read_to_string(&self.path).map_err(StorageError::Io)?;
        serde_json::from_str(&json)
            .map(Some)
            .map_err(StorageError::Parse)
    }

    fn clear(&self) -> Result<(), StorageError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::Io(e)),
        }
    }

    fn has_saved_game(&self) -> bool {
        self.path.exists()
    }
}
