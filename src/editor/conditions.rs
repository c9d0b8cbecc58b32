//! Run conditions for controlling when editor systems execute.

use bevy::prelude::*;

use crate::ui::DialogState;

use super::selection::Selection;

/// Run condition: returns true when no modal dialog is open.
///
/// Keeps clicks and shortcuts from reaching the habitat while the welcome
/// window or another modal is up.
///
/// Usage: `.run_if(no_dialog_open)`
pub fn no_dialog_open(dialog_state: Res<DialogState>) -> bool {
    !dialog_state.any_modal_open
}

/// Run condition: returns true while a catalog kind is waiting to be placed.
pub fn is_placing(selection: Res<Selection>) -> bool {
    selection.placing.is_some()
}
