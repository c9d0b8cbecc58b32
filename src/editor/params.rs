//! Shared SystemParam bundles and coordinate helpers for editor systems.
//!
//! Habitat positions live in scene coordinates: origin at the top-left of the
//! surface, y growing downward. Bevy's 2D world is y-up, so every conversion
//! between the two flips y.

use bevy::ecs::system::SystemParam;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use bevy_egui::EguiContexts;

use super::EditorCamera;

/// Bundled camera and window queries for cursor-to-world calculations
#[derive(SystemParam)]
pub struct CameraParams<'w, 's> {
    pub window: Query<'w, 's, &'static Window, With<PrimaryWindow>>,
    pub camera: Query<'w, 's, (&'static Camera, &'static GlobalTransform), With<EditorCamera>>,
}

impl CameraParams<'_, '_> {
    /// Get the world position of the cursor, if available
    pub fn cursor_world_pos(&self) -> Option<Vec2> {
        let window = self.window.single().ok()?;
        let (camera, transform) = self.camera.single().ok()?;
        let cursor_pos = window.cursor_position()?;
        camera.viewport_to_world_2d(transform, cursor_pos).ok()
    }

    /// Cursor position in scene coordinates
    pub fn cursor_scene_pos(&self) -> Option<Vec2> {
        self.cursor_world_pos().map(world_to_scene)
    }
}

pub fn world_to_scene(world: Vec2) -> Vec2 {
    Vec2::new(world.x, -world.y)
}

pub fn scene_to_world(scene: Vec2) -> Vec2 {
    Vec2::new(scene.x, -scene.y)
}

/// Check if the cursor is over egui UI
pub fn is_cursor_over_ui(contexts: &mut EguiContexts) -> bool {
    contexts
        .ctx_mut()
        .map(|ctx| ctx.is_pointer_over_area())
        .unwrap_or(false)
}

/// Check if egui is capturing keystrokes (a focused text field)
pub fn is_typing_in_ui(contexts: &mut EguiContexts) -> bool {
    contexts
        .ctx_mut()
        .map(|ctx| ctx.wants_keyboard_input())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scene_world_round_trip_flips_y() {
        let scene = Vec2::new(40.0, 120.0);
        let world = scene_to_world(scene);
        assert_eq!(world, Vec2::new(40.0, -120.0));
        assert_eq!(world_to_scene(world), scene);
    }
}
