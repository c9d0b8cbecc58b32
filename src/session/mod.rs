//! The play session: owns the undo/redo history and turns player actions into
//! habitat edits, resource updates and feedback.

mod controller;
mod systems;
mod warning;


pub use controller::{HabitatAction, SessionSettings};
pub use warning::{LowResourceMonitor, WarningPolicy};

use bevy::prelude::*;

use crate::config::ConfigLoaded;
use crate::habitat::HabitatLoaded;
use crate::history::GameHistory;

/// System set that applies queued [`HabitatAction`]s; input systems run before it
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionActions;

pub struct SessionPlugin;

impl Plugin for SessionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GameHistory>()
            .init_resource::<SessionSettings>()
            .init_resource::<LowResourceMonitor>()
            .add_message::<HabitatAction>()
            .add_systems(
                Startup,
                (
                    systems::configure_session.after(ConfigLoaded),
                    (systems::seed_history, systems::initial_refresh)
                        .chain()
                        .after(HabitatLoaded),
                )
                    .chain(),
            )
            .add_systems(
                Update,
                systems::apply_habitat_actions
                    .run_if(on_message::<HabitatAction>)
                    .in_set(SessionActions),
            );
    }
}
