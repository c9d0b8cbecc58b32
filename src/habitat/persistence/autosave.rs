//! Periodic autosave task.
//!
//! The timer resource is inserted when the session starts and removed when
//! the app exits, so no save can be scheduled during teardown.

use bevy::prelude::*;
use std::time::Duration;

use crate::habitat::Habitat;

use super::messages::{SaveGameRequest, SaveReason};
use super::resources::{AutosaveTimer, GameStorage};

/// Advance the timer; true when a save should be written now.
/// An empty habitat is never autosaved.
pub fn autosave_due(timer: &mut Timer, delta: Duration, habitat_empty: bool) -> bool {
    timer.tick(delta).just_finished() && !habitat_empty
}

pub fn start_autosave(mut commands: Commands, storage: Res<GameStorage>) {
    if !storage.autosave_enabled {
        info!("Autosave disabled");
        return;
    }

    info!("Autosave every {} seconds", storage.autosave_interval_secs);
    commands.insert_resource(AutosaveTimer::new(storage.autosave_interval_secs));
}

pub fn tick_autosave(
    time: Res<Time>,
    mut timer: ResMut<AutosaveTimer>,
    habitat: Res<Habitat>,
    mut save_events: MessageWriter<SaveGameRequest>,
) {
    if autosave_due(&mut timer.0, time.delta(), habitat.is_empty()) {
        save_events.write(SaveGameRequest {
            reason: SaveReason::Autosave,
        });
    }
}

pub fn stop_autosave(mut commands: Commands, mut exit_events: MessageReader<AppExit>) {
    if exit_events.read().next().is_some() {
        debug!("Stopping autosave");
        commands.remove_resource::<AutosaveTimer>();
    }
}
