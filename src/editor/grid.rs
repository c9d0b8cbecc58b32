use bevy::prelude::*;

use crate::config::AppConfig;
use crate::constants::{DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH, GRID_SIZE};
use crate::theme;

use super::EditorCamera;
use super::camera::CameraZoom;

#[derive(Resource)]
pub struct GridSettings {
    pub snap_enabled: bool,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self { snap_enabled: true }
    }
}

/// Snap a scene position to the nearest grid intersection
pub fn snap_to_grid(position: Vec2, grid_size: f32, snap_enabled: bool) -> Vec2 {
    if !snap_enabled || grid_size <= 0.0 {
        return position;
    }

    Vec2::new(
        (position.x / grid_size).round() * grid_size,
        (position.y / grid_size).round() * grid_size,
    )
}

/// Keep the snap toggle in step with the persisted config
pub fn sync_grid_settings(config: Res<AppConfig>, mut grid_settings: ResMut<GridSettings>) {
    if grid_settings.snap_enabled != config.data.grid_snap {
        grid_settings.snap_enabled = config.data.grid_snap;
    }
}

pub fn draw_grid(
    mut gizmos: Gizmos,
    camera_query: Query<(&Transform, &CameraZoom), With<EditorCamera>>,
) {
    let Ok((camera_transform, zoom)) = camera_query.single() else {
        return;
    };

    let grid_size = GRID_SIZE;
    let grid_color = theme::GRID_COLOR;

    let view_width = DEFAULT_WINDOW_WIDTH * zoom.scale;
    let view_height = DEFAULT_WINDOW_HEIGHT * zoom.scale;

    let camera_pos = camera_transform.translation.truncate();

    let start_x = ((camera_pos.x - view_width / 2.0) / grid_size).floor() as i32;
    let end_x = ((camera_pos.x + view_width / 2.0) / grid_size).ceil() as i32;
    let start_y = ((camera_pos.y - view_height / 2.0) / grid_size).floor() as i32;
    let end_y = ((camera_pos.y + view_height / 2.0) / grid_size).ceil() as i32;

    for x in start_x..=end_x {
        let x_pos = x as f32 * grid_size;
        gizmos.line_2d(
            Vec2::new(x_pos, start_y as f32 * grid_size),
            Vec2::new(x_pos, end_y as f32 * grid_size),
            grid_color,
        );
    }

    for y in start_y..=end_y {
        let y_pos = y as f32 * grid_size;
        gizmos.line_2d(
            Vec2::new(start_x as f32 * grid_size, y_pos),
            Vec2::new(end_x as f32 * grid_size, y_pos),
            grid_color,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_settings_default() {
        let settings = GridSettings::default();
        assert!(settings.snap_enabled);
    }

    #[test]
    fn test_snap_disabled_returns_original() {
        let pos = Vec2::new(33.0, 47.0);
        assert_eq!(snap_to_grid(pos, 20.0, false), pos);
    }

    #[test]
    fn test_snap_rounds_to_nearest_line() {
        assert_eq!(
            snap_to_grid(Vec2::new(29.0, 31.0), 20.0, true),
            Vec2::new(20.0, 40.0)
        );
    }

    #[test]
    fn test_snap_halfway_rounds_up() {
        assert_eq!(
            snap_to_grid(Vec2::new(10.0, 30.0), 20.0, true),
            Vec2::new(20.0, 40.0)
        );
    }

    #[test]
    fn test_snap_keeps_grid_points() {
        let pos = Vec2::new(60.0, 140.0);
        assert_eq!(snap_to_grid(pos, 20.0, true), pos);
    }

    #[test]
    fn test_snap_near_origin() {
        assert_eq!(snap_to_grid(Vec2::new(4.0, 9.0), 20.0, true), Vec2::ZERO);
    }

    #[test]
    fn test_snap_ignores_degenerate_grid() {
        let pos = Vec2::new(13.0, 7.0);
        assert_eq!(snap_to_grid(pos, 0.0, true), pos);
    }
}
