//! Applying player actions to the live habitat.
//!
//! This is the only place that mutates the habitat after startup. Historied
//! edits push exactly one snapshot; drag moves and undo/redo never push.

use bevy::prelude::*;

use crate::feedback::Notification;
use crate::habitat::{Habitat, ItemKind, PlacedItemId, ResourceVector};
use crate::history::GameHistory;

use super::warning::LowResourceMonitor;

/// Something the player asked to do to the habitat
#[derive(Message, Debug, Clone, Copy, PartialEq)]
pub enum HabitatAction {
    Place { kind: ItemKind, x: f32, y: f32 },
    /// Drag motion, applied without recording history
    Move { id: PlacedItemId, x: f32, y: f32 },
    Rotate { id: PlacedItemId },
    Delete { id: PlacedItemId },
    Clear,
    Undo,
    Redo,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActionOutcome {
    /// The habitat was mutated and resources must be recomputed
    pub changed: bool,
    pub notification: Option<Notification>,
}

impl ActionOutcome {
    fn notify(notification: Notification) -> Self {
        Self {
            changed: true,
            notification: Some(notification),
        }
    }

    fn silent_change() -> Self {
        Self {
            changed: true,
            notification: None,
        }
    }

    fn unchanged() -> Self {
        Self {
            changed: false,
            notification: None,
        }
    }
}

/// Resource rules the session was configured with
#[derive(Resource, Debug, Clone, Copy)]
pub struct SessionSettings {
    pub resource_baseline: i32,
    pub low_resource_threshold: i32,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            resource_baseline: crate::constants::BASELINE_RESOURCE,
            low_resource_threshold: crate::constants::LOW_RESOURCE_THRESHOLD,
        }
    }
}

pub fn apply_action(
    habitat: &mut Habitat,
    history: &mut GameHistory,
    action: &HabitatAction,
) -> ActionOutcome {
    match *action {
        HabitatAction::Place { kind, x, y } => {
            let id = habitat.place(kind, x, y);
            debug!("Placed {} {} at ({}, {})", kind.key(), id, x, y);
            history.push_state(habitat.items());
            ActionOutcome::notify(Notification::Placed)
        }
        HabitatAction::Move { id, x, y } => {
            if habitat.move_item(id, x, y) {
                ActionOutcome::silent_change()
            } else {
                ActionOutcome::unchanged()
            }
        }
        HabitatAction::Rotate { id } => {
            let Some(rotation) = habitat.rotate(id) else {
                return ActionOutcome::unchanged();
            };
            debug!("Rotated {} to {} degrees", id, rotation.degrees());
            history.push_state(habitat.items());
            ActionOutcome::notify(Notification::Rotated)
        }
        HabitatAction::Delete { id } => {
            let Some(removed) = habitat.remove(id) else {
                return ActionOutcome::unchanged();
            };
            debug!("Deleted {} {}", removed.kind.display_name(), id);
            history.push_state(habitat.items());
            ActionOutcome::notify(Notification::Deleted)
        }
        HabitatAction::Clear => {
            habitat.clear();
            info!("Habitat cleared");
            history.push_state(habitat.items());
            ActionOutcome::notify(Notification::Cleared)
        }
        HabitatAction::Undo => match history.undo() {
            Some(items) => {
                habitat.replace_items(items);
                ActionOutcome::notify(Notification::Undo)
            }
            None => ActionOutcome::unchanged(),
        },
        HabitatAction::Redo => match history.redo() {
            Some(items) => {
                habitat.replace_items(items);
                ActionOutcome::notify(Notification::Redo)
            }
            None => ActionOutcome::unchanged(),
        },
    }
}

/// Recompute resources from the habitat. Returns true if the low-resource
/// warning should fire for this recomputation.
pub fn recompute_resources(
    habitat: &Habitat,
    settings: &SessionSettings,
    resources: &mut ResourceVector,
    monitor: &mut LowResourceMonitor,
) -> bool {
    *resources = ResourceVector::compute_from(settings.resource_baseline, habitat.items());
    monitor.evaluate(resources, habitat.len(), settings.low_resource_threshold)
}
