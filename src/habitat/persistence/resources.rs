//! Resource types for save state tracking.

use bevy::prelude::*;
use bevy::tasks::Task;
use std::sync::Arc;

use crate::constants::{
    AUTOSAVE_INTERVAL_SECS, MAX_AUTOSAVE_INTERVAL_SECS, MIN_AUTOSAVE_INTERVAL_SECS,
};
use crate::paths;

use super::results::SaveOutcome;
use super::store::{JsonFileStore, SaveStore};

/// The persistence collaborator plus its switches.
#[derive(Resource, Clone)]
pub struct GameStorage {
    pub store: Arc<dyn SaveStore>,
    pub autosave_enabled: bool,
    pub autosave_interval_secs: f32,
}

impl GameStorage {
    pub fn new(store: Arc<dyn SaveStore>) -> Self {
        Self {
            store,
            autosave_enabled: true,
            autosave_interval_secs: AUTOSAVE_INTERVAL_SECS,
        }
    }
}

impl Default for GameStorage {
    fn default() -> Self {
        Self::new(Arc::new(JsonFileStore::new(paths::save_file())))
    }
}

/// Periodic autosave. Only present between session start and app exit.
#[derive(Resource)]
pub struct AutosaveTimer(pub Timer);

impl AutosaveTimer {
    pub fn new(interval_secs: f32) -> Self {
        let interval_secs = if interval_secs.is_finite() {
            interval_secs.clamp(MIN_AUTOSAVE_INTERVAL_SECS, MAX_AUTOSAVE_INTERVAL_SECS)
        } else {
            AUTOSAVE_INTERVAL_SECS
        };
        Self(Timer::from_seconds(interval_secs, TimerMode::Repeating))
    }
}

/// Tracks the in-flight save so saves never overlap
#[derive(Resource, Default)]
pub struct AsyncSaveState {
    pub is_saving: bool,
}

/// Component for save task
#[derive(Component)]
pub struct SaveGameTask(pub Task<SaveOutcome>);
