use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::feedback::{ToastKind, ToastQueue};
use crate::theme;

/// Stack of short-lived toasts in the bottom-left corner, above the control bar
pub fn toasts_ui(mut contexts: EguiContexts, toasts: Res<ToastQueue>) -> Result {
    if toasts.is_empty() {
        return Ok(());
    }

    egui::Area::new(egui::Id::new("toasts"))
        .anchor(egui::Align2::LEFT_BOTTOM, [16.0, -64.0])
        .interactable(false)
        .show(contexts.ctx_mut()?, |ui| {
            for toast in toasts.iter() {
                let title_color = match toast.kind {
                    ToastKind::Info => theme::ui::ACCENT,
                    ToastKind::Destructive => theme::ui::ERROR_TEXT,
                };
                egui::Frame::popup(ui.style()).show(ui, |ui| {
                    ui.set_min_width(240.0);
                    ui.label(egui::RichText::new(&toast.title).strong().color(title_color));
                    ui.label(egui::RichText::new(&toast.description).color(theme::ui::LABEL_TEXT));
                });
                ui.add_space(6.0);
            }
        });
    Ok(())
}
