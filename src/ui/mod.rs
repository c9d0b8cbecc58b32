mod control_bar;
mod dialogs;
mod inventory;
mod resource_bar;
mod toasts;
mod tooltip;

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

use crate::config::{AppConfig, ConfigResetNotification};

/// Resource that tracks whether any modal dialog is currently open.
/// Editor input handlers should check this to avoid processing input
/// when the user is interacting with a dialog.
#[derive(Resource, Default)]
pub struct DialogState {
    /// True when any modal dialog is open that should block editor input
    pub any_modal_open: bool,
}

/// System to aggregate all dialog open states into a single resource.
/// Runs in First schedule before input handlers.
fn update_dialog_state(
    config: Res<AppConfig>,
    config_reset: Res<ConfigResetNotification>,
    clear_dialog: Res<control_bar::ClearConfirmDialog>,
    mut dialog_state: ResMut<DialogState>,
) {
    dialog_state.any_modal_open =
        !config.data.welcome_seen || config_reset.show || clear_dialog.open;
}

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DialogState>()
            .init_resource::<control_bar::ClearConfirmDialog>()
            // Top and bottom bars render first so the side panel fits between them
            .add_systems(
                EguiPrimaryContextPass,
                (
                    resource_bar::resource_bar_ui,
                    control_bar::control_bar_ui,
                    inventory::inventory_panel_ui,
                )
                    .chain(),
            )
            .add_systems(
                EguiPrimaryContextPass,
                (
                    // Last: dialogs/overlays
                    dialogs::welcome_window_ui,
                    dialogs::config_reset_notification_ui,
                    toasts::toasts_ui,
                    tooltip::module_tooltip_ui,
                )
                    .after(inventory::inventory_panel_ui),
            )
            .add_systems(First, update_dialog_state);
    }
}
