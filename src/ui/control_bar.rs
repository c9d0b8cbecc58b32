use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::config::{AppConfig, SetGridSnapRequest, SetSoundEnabledRequest};
use crate::editor::Selection;
use crate::habitat::{AsyncSaveState, DeleteSaveRequest, Habitat, SaveGameRequest, SaveReason};
use crate::history::GameHistory;
use crate::session::HabitatAction;
use crate::theme;

#[derive(Resource, Default)]
pub struct ClearConfirmDialog {
    pub open: bool,
}

/// Position in the undo log, with the time of the current snapshot on hover
fn history_label(ui: &mut egui::Ui, history: &GameHistory) {
    let position = history.current_index().map_or(0, |index| index + 1);
    let label = ui.label(
        egui::RichText::new(format!("{}/{}", position, history.len()))
            .small()
            .color(theme::ui::HINT_TEXT),
    );
    if let Some(snapshot) = history.current() {
        let captured = snapshot.captured_at().with_timezone(&chrono::Local);
        label.on_hover_text(format!(
            "Current state recorded at {}",
            captured.format("%H:%M:%S")
        ));
    }
}

/// Bottom bar: save, history, edits on the selected module, and toggles
#[allow(clippy::too_many_arguments)]
pub fn control_bar_ui(
    mut contexts: EguiContexts,
    config: Res<AppConfig>,
    selection: Res<Selection>,
    history: Res<GameHistory>,
    habitat: Res<Habitat>,
    save_state: Res<AsyncSaveState>,
    mut clear_dialog: ResMut<ClearConfirmDialog>,
    mut actions: MessageWriter<HabitatAction>,
    mut save_requests: MessageWriter<SaveGameRequest>,
    mut delete_requests: MessageWriter<DeleteSaveRequest>,
    mut sound_requests: MessageWriter<SetSoundEnabledRequest>,
    mut snap_requests: MessageWriter<SetGridSnapRequest>,
) -> Result {
    egui::TopBottomPanel::bottom("control_bar")
        .frame(
            egui::Frame::side_top_panel(&contexts.ctx_mut()?.style())
                .inner_margin(egui::Margin::symmetric(12, 8))
                .fill(theme::ui::PANEL_BACKGROUND),
        )
        .show(contexts.ctx_mut()?, |ui| {
            ui.horizontal(|ui| {
                ui.spacing_mut().item_spacing.x = 6.0;

                let save_label = if save_state.is_saving { "Saving..." } else { "Save" };
                if ui
                    .add_enabled(!save_state.is_saving, egui::Button::new(save_label))
                    .on_hover_text("Ctrl+S")
                    .clicked()
                {
                    save_requests.write(SaveGameRequest {
                        reason: SaveReason::Manual,
                    });
                }

                ui.separator();

                if ui
                    .add_enabled(history.can_undo(), egui::Button::new("Undo"))
                    .on_hover_text("Ctrl+Z")
                    .clicked()
                {
                    actions.write(HabitatAction::Undo);
                }
                if ui
                    .add_enabled(history.can_redo(), egui::Button::new("Redo"))
                    .on_hover_text("Ctrl+Y / Ctrl+Shift+Z")
                    .clicked()
                {
                    actions.write(HabitatAction::Redo);
                }
                history_label(ui, &history);

                ui.separator();

                let selected = selection.selected;
                if ui
                    .add_enabled(selected.is_some(), egui::Button::new("Rotate"))
                    .on_hover_text("R")
                    .clicked()
                    && let Some(id) = selected
                {
                    actions.write(HabitatAction::Rotate { id });
                }
                if ui
                    .add_enabled(selected.is_some(), egui::Button::new("Delete"))
                    .on_hover_text("Delete / Backspace")
                    .clicked()
                    && let Some(id) = selected
                {
                    actions.write(HabitatAction::Delete { id });
                }

                ui.separator();

                let mut sound_enabled = config.data.sound_enabled;
                if ui.checkbox(&mut sound_enabled, "Sound").changed() {
                    sound_requests.write(SetSoundEnabledRequest {
                        enabled: sound_enabled,
                    });
                }
                let mut grid_snap = config.data.grid_snap;
                if ui.checkbox(&mut grid_snap, "Snap to grid").changed() {
                    snap_requests.write(SetGridSnapRequest { enabled: grid_snap });
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let clear = egui::Button::new(
                        egui::RichText::new("Clear All").color(theme::ui::ERROR_TEXT),
                    );
                    if ui.add_enabled(!habitat.is_empty(), clear).clicked() {
                        clear_dialog.open = true;
                    }
                });
            });
        });

    if clear_dialog.open {
        egui::Window::new("Clear Habitat")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(contexts.ctx_mut()?, |ui| {
                ui.label("Clear all placed items? You can still undo this.");
                ui.horizontal(|ui| {
                    if ui.button("Clear All").clicked() {
                        actions.write(HabitatAction::Clear);
                        clear_dialog.open = false;
                    }
                    if ui
                        .button("Clear and Delete Save")
                        .on_hover_text("Also erase the saved habitat from disk")
                        .clicked()
                    {
                        actions.write(HabitatAction::Clear);
                        delete_requests.write(DeleteSaveRequest);
                        clear_dialog.open = false;
                    }
                    if ui.button("Cancel").clicked() {
                        clear_dialog.open = false;
                    }
                });
            });
    }
    Ok(())
}
