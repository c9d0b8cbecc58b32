//! Keyboard shortcuts for habitat editing.

use bevy::prelude::*;
use bevy_egui::EguiContexts;

use crate::habitat::{SaveGameRequest, SaveReason};
use crate::session::HabitatAction;

use super::params::is_typing_in_ui;
use super::selection::Selection;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    Rotate,
    Delete,
    Deselect,
    Undo,
    Redo,
    Save,
}

/// Map a freshly pressed key plus held modifiers to a shortcut
pub fn resolve_shortcut(key: KeyCode, ctrl: bool, shift: bool) -> Option<Shortcut> {
    match (key, ctrl, shift) {
        (KeyCode::KeyZ, true, false) => Some(Shortcut::Undo),
        (KeyCode::KeyZ, true, true) | (KeyCode::KeyY, true, _) => Some(Shortcut::Redo),
        (KeyCode::KeyS, true, _) => Some(Shortcut::Save),
        (KeyCode::KeyR, false, _) => Some(Shortcut::Rotate),
        (KeyCode::Delete | KeyCode::Backspace, false, _) => Some(Shortcut::Delete),
        (KeyCode::Escape, _, _) => Some(Shortcut::Deselect),
        _ => None,
    }
}

pub fn handle_shortcuts(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut selection: ResMut<Selection>,
    mut actions: MessageWriter<HabitatAction>,
    mut save_requests: MessageWriter<SaveGameRequest>,
    mut contexts: EguiContexts,
) {
    // Don't trigger if typing in UI
    if is_typing_in_ui(&mut contexts) {
        return;
    }

    let ctrl = keyboard.any_pressed([
        KeyCode::ControlLeft,
        KeyCode::ControlRight,
        KeyCode::SuperLeft,
        KeyCode::SuperRight,
    ]);
    let shift = keyboard.any_pressed([KeyCode::ShiftLeft, KeyCode::ShiftRight]);

    for key in keyboard.get_just_pressed() {
        let Some(shortcut) = resolve_shortcut(*key, ctrl, shift) else {
            continue;
        };

        match shortcut {
            Shortcut::Undo => {
                actions.write(HabitatAction::Undo);
            }
            Shortcut::Redo => {
                actions.write(HabitatAction::Redo);
            }
            Shortcut::Save => {
                save_requests.write(SaveGameRequest {
                    reason: SaveReason::Manual,
                });
            }
            Shortcut::Rotate => {
                if let Some(id) = selection.selected {
                    actions.write(HabitatAction::Rotate { id });
                }
            }
            Shortcut::Delete => {
                if let Some(id) = selection.selected.take() {
                    actions.write(HabitatAction::Delete { id });
                }
            }
            Shortcut::Deselect => selection.clear(),
        }
    }
}
