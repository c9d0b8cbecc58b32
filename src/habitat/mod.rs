mod catalog;
mod collection;
pub mod persistence;
mod placed_item;
mod resources;

pub use catalog::{CatalogEntry, ItemKind, ResourceImpact};
pub use collection::Habitat;
pub use persistence::{
    AsyncSaveState, DeleteSaveRequest, GameStorage, SaveGameRequest, SaveReason,
};
pub use placed_item::{PlacedItem, PlacedItemId, Rotation};
pub use resources::{
    ColonyStatistics, ResourceKind, ResourceLevel, ResourceVector, Sustainability, display_percent,
};

use bevy::prelude::*;

use crate::config::ConfigLoaded;

/// System set for restoring the saved habitat (the session seeds history after this)
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct HabitatLoaded;

pub struct HabitatPlugin;

impl Plugin for HabitatPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Habitat>()
            .init_resource::<ResourceVector>()
            .init_resource::<GameStorage>()
            .init_resource::<AsyncSaveState>()
            .add_message::<SaveGameRequest>()
            .add_message::<DeleteSaveRequest>()
            .add_systems(
                Startup,
                (
                    persistence::configure_storage,
                    persistence::load_saved_game,
                    persistence::start_autosave,
                )
                    .chain()
                    .after(ConfigLoaded)
                    .in_set(HabitatLoaded),
            )
            .add_systems(
                Update,
                (
                    persistence::tick_autosave
                        .run_if(resource_exists::<persistence::AutosaveTimer>),
                    persistence::save_game_system.run_if(on_message::<SaveGameRequest>),
                    persistence::poll_save_tasks,
                    persistence::delete_save_system.run_if(on_message::<DeleteSaveRequest>),
                    persistence::stop_autosave,
                )
                    .chain(),
            );
    }
}
