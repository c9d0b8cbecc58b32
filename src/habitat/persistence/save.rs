//! Save system and task polling.

use bevy::prelude::*;
use bevy::tasks::IoTaskPool;
use futures_lite::future;

use crate::feedback::Notification;
use crate::habitat::{Habitat, ResourceVector};

use super::messages::{DeleteSaveRequest, SaveGameRequest, SaveReason};
use super::resources::{AsyncSaveState, GameStorage, SaveGameTask};
use super::results::SaveOutcome;
use super::store::SaveData;

/// Starts an async save operation
pub fn save_game_system(
    mut commands: Commands,
    mut events: MessageReader<SaveGameRequest>,
    habitat: Res<Habitat>,
    resources: Res<ResourceVector>,
    storage: Res<GameStorage>,
    mut save_state: ResMut<AsyncSaveState>,
) {
    for event in events.read() {
        // Don't start a new save if one is already in progress
        if save_state.is_saving {
            warn!("Save already in progress, skipping {:?} save", event.reason);
            continue;
        }

        let data = SaveData::new(habitat.items().to_vec(), *resources);
        let store = storage.store.clone();
        let reason = event.reason;
        let item_count = data.placed_items.len();

        save_state.is_saving = true;

        let task = IoTaskPool::get().spawn(async move {
            let error = store.save(&data).err().map(|e| e.to_string());
            SaveOutcome {
                reason,
                item_count,
                error,
            }
        });

        commands.spawn(SaveGameTask(task));
    }
}

/// Polls save tasks and reports completion
pub fn poll_save_tasks(
    mut commands: Commands,
    mut tasks: Query<(Entity, &mut SaveGameTask)>,
    mut save_state: ResMut<AsyncSaveState>,
    mut notifications: MessageWriter<Notification>,
) {
    for (entity, mut task) in tasks.iter_mut() {
        let Some(outcome) = future::block_on(future::poll_once(&mut task.0)) else {
            continue;
        };

        save_state.is_saving = false;

        match (outcome.error, outcome.reason) {
            (None, SaveReason::Manual) => {
                info!("Habitat saved ({} modules)", outcome.item_count);
                notifications.write(Notification::Saved);
            }
            (None, SaveReason::Autosave) => {
                debug!("Autosaved habitat ({} modules)", outcome.item_count);
            }
            (Some(error), SaveReason::Manual) => {
                error!("{}", error);
                notifications.write(Notification::SaveFailed { reason: error });
            }
            (Some(error), SaveReason::Autosave) => {
                // Autosave is best-effort
                error!("Autosave failed: {}", error);
            }
        }

        commands.entity(entity).despawn();
    }
}

/// Erase the save slot. The file is tiny, so this runs inline.
pub fn delete_save_system(
    mut events: MessageReader<DeleteSaveRequest>,
    storage: Res<GameStorage>,
) {
    for _ in events.read() {
        match storage.store.clear() {
            Ok(()) => info!("Saved habitat deleted"),
            Err(e) => error!("Failed to delete saved habitat: {}", e),
        }
    }
}
