use bevy::prelude::*;
use bevy::window::{CursorIcon, PrimaryWindow, SystemCursorIcon};
use bevy_egui::EguiContexts;

use crate::habitat::{Habitat, ItemKind, PlacedItemId};

use super::drag::DragState;
use super::params::is_cursor_over_ui;

/// What the player is pointing at: a catalog kind waiting to be placed, and
/// the placed module that rotate/delete act on
#[derive(Resource, Debug, Default, Clone, PartialEq)]
pub struct Selection {
    pub placing: Option<ItemKind>,
    pub selected: Option<PlacedItemId>,
}

impl Selection {
    /// Pick a catalog kind; picking the current one again cancels it
    pub fn toggle_placing(&mut self, kind: ItemKind) {
        if self.placing == Some(kind) {
            self.placing = None;
        } else {
            self.placing = Some(kind);
            self.selected = None;
        }
    }

    pub fn select(&mut self, id: PlacedItemId) {
        self.selected = Some(id);
        self.placing = None;
    }

    pub fn clear(&mut self) {
        self.placing = None;
        self.selected = None;
    }
}

/// Drop the selection when its module no longer exists (deleted, cleared, undone)
pub fn prune_selection(habitat: Res<Habitat>, mut selection: ResMut<Selection>) {
    if let Some(id) = selection.selected
        && habitat.get(id).is_none()
    {
        selection.selected = None;
    }
}

pub fn update_cursor_icon(
    selection: Res<Selection>,
    drag_state: Res<DragState>,
    window_query: Query<Entity, With<PrimaryWindow>>,
    mut commands: Commands,
    mut contexts: EguiContexts,
) {
    let Ok(entity) = window_query.single() else {
        return;
    };

    let icon = if is_cursor_over_ui(&mut contexts) {
        SystemCursorIcon::Default
    } else if drag_state.is_dragging() {
        SystemCursorIcon::Grabbing
    } else if selection.placing.is_some() {
        SystemCursorIcon::Crosshair
    } else {
        SystemCursorIcon::Default
    };

    commands.entity(entity).insert(CursorIcon::System(icon));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_placing_twice_cancels() {
        let mut selection = Selection::default();
        selection.toggle_placing(ItemKind::Solar);
        assert_eq!(selection.placing, Some(ItemKind::Solar));
        selection.toggle_placing(ItemKind::Solar);
        assert_eq!(selection.placing, None);
    }

    #[test]
    fn test_placing_and_selected_are_exclusive() {
        let mut selection = Selection::default();
        selection.select(PlacedItemId(3));
        selection.toggle_placing(ItemKind::Dome);
        assert_eq!(selection.selected, None);

        selection.select(PlacedItemId(4));
        assert_eq!(selection.placing, None);
        assert_eq!(selection.selected, Some(PlacedItemId(4)));
    }
}
