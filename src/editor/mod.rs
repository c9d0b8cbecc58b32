//! The habitat surface: camera, grid, pointer and keyboard input, and gizmo
//! rendering of placed modules.
//!
//! Input systems never touch the habitat directly. They write
//! [`HabitatAction`](crate::session::HabitatAction) messages that the session
//! applies in the same frame.

mod camera;
mod conditions;
mod drag;
mod grid;
mod params;
mod placement;
mod render;
mod selection;
mod shortcuts;

pub use camera::EditorCamera;
pub use drag::DragState;
pub use grid::GridSettings;
pub use params::{CameraParams, is_cursor_over_ui};
pub use selection::Selection;

use bevy::prelude::*;

use crate::config::AppConfig;
use crate::session::SessionActions;

pub struct EditorPlugin;

impl Plugin for EditorPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GridSettings>()
            .init_resource::<Selection>()
            .init_resource::<DragState>()
            .add_systems(Startup, camera::spawn_camera)
            .add_systems(
                Update,
                (
                    camera::camera_pan,
                    camera::camera_zoom,
                    camera::apply_camera_zoom,
                    grid::sync_grid_settings.run_if(resource_changed::<AppConfig>),
                ),
            )
            .add_systems(
                Update,
                (
                    shortcuts::handle_shortcuts,
                    placement::handle_surface_click,
                    drag::handle_drag,
                )
                    .chain()
                    .run_if(conditions::no_dialog_open)
                    .before(SessionActions),
            )
            .add_systems(
                Update,
                (
                    selection::prune_selection,
                    selection::update_cursor_icon,
                    grid::draw_grid,
                    render::draw_habitat,
                    render::draw_placement_preview.run_if(conditions::is_placing),
                )
                    .chain()
                    .after(SessionActions),
            );
    }
}
