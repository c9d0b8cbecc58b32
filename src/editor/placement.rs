use bevy::prelude::*;
use bevy_egui::EguiContexts;

use crate::constants::GRID_SIZE;
use crate::feedback::Notification;
use crate::habitat::{Habitat, ItemKind};
use crate::session::HabitatAction;

use super::GridSettings;
use super::drag::DragState;
use super::grid::snap_to_grid;
use super::params::{CameraParams, is_cursor_over_ui};
use super::selection::Selection;

/// Top-left position for a new module so its footprint is centred on the click
pub fn placement_origin(click: Vec2, kind: ItemKind, snap_enabled: bool) -> Vec2 {
    let size = kind.entry().size();
    snap_to_grid(click - size / 2.0, GRID_SIZE, snap_enabled)
}

/// Left click on the surface: grab the module under the cursor, place the
/// picked catalog kind, or deselect
#[allow(clippy::too_many_arguments)]
pub fn handle_surface_click(
    mouse_button: Res<ButtonInput<MouseButton>>,
    camera: CameraParams,
    habitat: Res<Habitat>,
    grid_settings: Res<GridSettings>,
    mut selection: ResMut<Selection>,
    mut drag_state: ResMut<DragState>,
    mut actions: MessageWriter<HabitatAction>,
    mut notifications: MessageWriter<Notification>,
    mut contexts: EguiContexts,
) {
    if !mouse_button.just_pressed(MouseButton::Left) {
        return;
    }

    // Don't act if clicking on UI
    if is_cursor_over_ui(&mut contexts) {
        return;
    }

    let Some(scene_pos) = camera.cursor_scene_pos() else {
        return;
    };

    if let Some(item) = habitat.item_at(scene_pos) {
        debug!("Selected {} {}", item.kind.display_name(), item.id);
        selection.select(item.id);
        drag_state.begin(item.id, scene_pos - item.position());
        notifications.write(Notification::Click);
        return;
    }

    if let Some(kind) = selection.placing {
        let origin = placement_origin(scene_pos, kind, grid_settings.snap_enabled);
        actions.write(HabitatAction::Place {
            kind,
            x: origin.x,
            y: origin.y,
        });
        selection.placing = None;
        return;
    }

    selection.clear();
}
