//! Startup loading of the saved habitat.

use bevy::prelude::*;

use crate::config::AppConfig;
use crate::habitat::Habitat;

use super::resources::GameStorage;
use super::store::load_or_none;

/// Copy persistence settings from the loaded config
pub fn configure_storage(config: Res<AppConfig>, mut storage: ResMut<GameStorage>) {
    storage.autosave_enabled = config.data.autosave_enabled;
    storage.autosave_interval_secs = config.data.autosave_interval_secs;
}

/// Restore the saved habitat, if any. Corrupt saves start an empty habitat.
pub fn load_saved_game(storage: Res<GameStorage>, mut habitat: ResMut<Habitat>) {
    if !storage.store.has_saved_game() {
        info!("No saved habitat, starting fresh");
        return;
    }

    let Some(data) = load_or_none(storage.store.as_ref()) else {
        return;
    };

    info!("Loaded saved habitat with {} modules", data.placed_items.len());
    // Stored resources are ignored; they are recomputed from the modules.
    habitat.replace_items(data.placed_items);
}
