//! Gizmo rendering of the habitat: module footprints, selection and the
//! placement preview.

use bevy::prelude::*;

use crate::habitat::{Habitat, ItemKind, PlacedItem};
use crate::theme;

use super::GridSettings;
use super::drag::DragState;
use super::params::{CameraParams, scene_to_world};
use super::placement::placement_origin;
use super::selection::Selection;

/// Extra margin around the selection outline (in world units)
const SELECTION_PADDING: f32 = 4.0;

/// World-space pose of a footprint centred at `center` (scene coordinates).
/// Scene rotation is clockwise on screen, which is a negative angle in
/// Bevy's y-up world.
fn footprint_isometry(center: Vec2, radians: f32) -> Isometry2d {
    Isometry2d::new(scene_to_world(center), Rot2::radians(-radians))
}

fn draw_module(
    gizmos: &mut Gizmos,
    kind: ItemKind,
    isometry: Isometry2d,
    size: Vec2,
    color: Color,
) {
    gizmos.rect_2d(isometry, size, color);

    match kind {
        ItemKind::Dome => {
            gizmos.circle_2d(isometry, size.min_element() * 0.4, color);
        }
        ItemKind::Solar => {
            // Panel cells
            for step in [-1.0, 0.0, 1.0] {
                let offset = isometry.rotation * Vec2::new(step * size.x / 4.0, 0.0);
                let half = isometry.rotation * Vec2::new(0.0, size.y / 2.0);
                let x = isometry.translation + offset;
                gizmos.line_2d(x - half, x + half, color);
            }
        }
        ItemKind::Bed => {
            gizmos.rect_2d(isometry, size * 0.6, color);
        }
        ItemKind::Plant => {
            gizmos.circle_2d(isometry, size.min_element() * 0.3, color);
            gizmos.circle_2d(isometry, size.min_element() * 0.1, color);
        }
        ItemKind::Water => {
            let half = isometry.rotation * Vec2::new(size.x / 2.0, 0.0);
            gizmos.line_2d(isometry.translation - half, isometry.translation + half, color);
        }
    }
}

fn item_isometry(item: &PlacedItem) -> Isometry2d {
    footprint_isometry(item.center(), item.rotation.radians())
}

pub fn draw_habitat(
    mut gizmos: Gizmos,
    habitat: Res<Habitat>,
    selection: Res<Selection>,
    drag_state: Res<DragState>,
) {
    for item in habitat.items() {
        let isometry = item_isometry(item);
        let mut color = theme::module_color(item.kind);
        if drag_state.dragged() == Some(item.id) {
            color = color.with_alpha(0.7);
        }
        draw_module(&mut gizmos, item.kind, isometry, item.size(), color);

        if selection.selected == Some(item.id) {
            gizmos.rect_2d(
                isometry,
                item.size() + Vec2::splat(SELECTION_PADDING * 2.0),
                theme::SELECTION_COLOR,
            );
        }
    }
}

/// Ghost footprint under the cursor while a catalog kind is picked
pub fn draw_placement_preview(
    mut gizmos: Gizmos,
    selection: Res<Selection>,
    grid_settings: Res<GridSettings>,
    camera: CameraParams,
) {
    let Some(kind) = selection.placing else {
        return;
    };

    let Some(scene_pos) = camera.cursor_scene_pos() else {
        return;
    };

    let size = kind.entry().size();
    let origin = placement_origin(scene_pos, kind, grid_settings.snap_enabled);
    let isometry = footprint_isometry(origin + size / 2.0, 0.0);
    draw_module(&mut gizmos, kind, isometry, size, theme::PLACEMENT_PREVIEW);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::habitat::PlacedItemId;

    #[test]
    fn test_footprint_centre_is_flipped_into_world() {
        let isometry = footprint_isometry(Vec2::new(130.0, 60.0), 0.0);
        assert_eq!(isometry.translation, Vec2::new(130.0, -60.0));
    }

    #[test]
    fn test_item_pose_uses_footprint_centre() {
        // Bed is 60 x 40
        let item = PlacedItem::new(PlacedItemId(1), ItemKind::Bed, 100.0, 40.0);
        let isometry = item_isometry(&item);
        assert_eq!(isometry.translation, Vec2::new(130.0, -60.0));
    }
}
