//! Dragging placed modules around the surface.
//!
//! Drag motion is applied live as [`HabitatAction::Move`] and is not recorded
//! in history on its own; the next historied edit captures the final spot.

use bevy::prelude::*;

use crate::constants::GRID_SIZE;
use crate::habitat::{Habitat, PlacedItemId};
use crate::session::HabitatAction;

use super::GridSettings;
use super::grid::snap_to_grid;
use super::params::CameraParams;

#[derive(Resource, Debug, Default)]
pub struct DragState {
    dragging: Option<PlacedItemId>,
    /// Cursor position relative to the module's top-left when the drag began
    grab_offset: Vec2,
}

impl DragState {
    pub fn begin(&mut self, id: PlacedItemId, grab_offset: Vec2) {
        self.dragging = Some(id);
        self.grab_offset = grab_offset;
    }

    pub fn end(&mut self) {
        self.dragging = None;
        self.grab_offset = Vec2::ZERO;
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging.is_some()
    }

    pub fn dragged(&self) -> Option<PlacedItemId> {
        self.dragging
    }
}

/// Where a dragged module lands: never left of or above the surface origin
pub fn drag_target(cursor: Vec2, grab_offset: Vec2, snap_enabled: bool) -> Vec2 {
    let top_left = (cursor - grab_offset).max(Vec2::ZERO);
    snap_to_grid(top_left, GRID_SIZE, snap_enabled)
}

pub fn handle_drag(
    mouse_button: Res<ButtonInput<MouseButton>>,
    camera: CameraParams,
    habitat: Res<Habitat>,
    grid_settings: Res<GridSettings>,
    mut drag_state: ResMut<DragState>,
    mut actions: MessageWriter<HabitatAction>,
) {
    let Some(id) = drag_state.dragged() else {
        return;
    };

    // Stop dragging on mouse release
    if mouse_button.just_released(MouseButton::Left) || !mouse_button.pressed(MouseButton::Left) {
        debug!("Stopped dragging {}", id);
        drag_state.end();
        return;
    }

    // The module vanished under the cursor (undo shortcut mid-drag)
    let Some(item) = habitat.get(id) else {
        drag_state.end();
        return;
    };

    let Some(scene_pos) = camera.cursor_scene_pos() else {
        return;
    };

    let target = drag_target(scene_pos, drag_state.grab_offset, grid_settings.snap_enabled);
    if target != item.position() {
        actions.write(HabitatAction::Move {
            id,
            x: target.x,
            y: target.y,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drag_keeps_grab_offset() {
        let target = drag_target(Vec2::new(130.0, 90.0), Vec2::new(30.0, 10.0), false);
        assert_eq!(target, Vec2::new(100.0, 80.0));
    }

    #[test]
    fn test_drag_clamps_to_origin() {
        let target = drag_target(Vec2::new(5.0, 50.0), Vec2::new(40.0, 10.0), false);
        assert_eq!(target, Vec2::new(0.0, 40.0));
    }

    #[test]
    fn test_drag_clamps_before_snapping() {
        let target = drag_target(Vec2::new(-100.0, 47.0), Vec2::ZERO, true);
        assert_eq!(target, Vec2::new(0.0, 40.0));
    }

    #[test]
    fn test_drag_state_lifecycle() {
        let mut state = DragState::default();
        assert!(!state.is_dragging());
        state.begin(PlacedItemId(7), Vec2::new(3.0, 4.0));
        assert_eq!(state.dragged(), Some(PlacedItemId(7)));
        state.end();
        assert!(!state.is_dragging());
    }
}
