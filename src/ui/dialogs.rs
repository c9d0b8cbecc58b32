use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::config::{AppConfig, ConfigResetNotification, MarkWelcomeSeenRequest};
use crate::theme;

const HOW_TO_PLAY: [&str; 5] = [
    "Select an item from the inventory panel",
    "Click on the Mars surface to place it",
    "Drag items to reposition them",
    "Select an item and press R to rotate or Delete to remove",
    "Watch your resources - keep them balanced!",
];

/// First-launch introduction, shown until dismissed once
pub fn welcome_window_ui(
    mut contexts: EguiContexts,
    config: Res<AppConfig>,
    mut seen_events: MessageWriter<MarkWelcomeSeenRequest>,
) -> Result {
    if config.data.welcome_seen {
        return Ok(());
    }

    egui::Window::new("Welcome to Mars Habitat Builder")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(contexts.ctx_mut()?, |ui| {
            ui.set_max_width(420.0);
            ui.label(
                "Design and build your own sustainable Mars base! Place habitat modules \
                 strategically to maintain a healthy balance of oxygen, power, water, and \
                 food for your colony.",
            );
            ui.add_space(8.0);

            ui.label(egui::RichText::new("How to Play:").strong());
            for (step, text) in HOW_TO_PLAY.iter().enumerate() {
                ui.horizontal(|ui| {
                    ui.colored_label(
                        theme::ui::ACCENT,
                        egui::RichText::new(format!("{}.", step + 1)).strong(),
                    );
                    ui.label(*text);
                });
            }

            ui.add_space(8.0);
            ui.label(
                egui::RichText::new(
                    "Your progress is automatically saved. Have fun building your Mars habitat!",
                )
                .color(theme::ui::HINT_TEXT),
            );
            ui.add_space(8.0);

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Start Building").clicked() {
                    seen_events.write(MarkWelcomeSeenRequest);
                }
            });
        });
    Ok(())
}

/// Tell the player their settings file was unusable and defaults were loaded
pub fn config_reset_notification_ui(
    mut contexts: EguiContexts,
    mut notification: ResMut<ConfigResetNotification>,
) -> Result {
    if !notification.show {
        return Ok(());
    }

    egui::Window::new("Settings Reset")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(contexts.ctx_mut()?, |ui| {
            ui.label("Your settings could not be read and were reset to defaults.");
            if let Some(reason) = &notification.reason {
                ui.colored_label(theme::ui::ERROR_TEXT, reason);
            }
            if ui.button("OK").clicked() {
                notification.show = false;
                notification.reason = None;
            }
        });
    Ok(())
}
