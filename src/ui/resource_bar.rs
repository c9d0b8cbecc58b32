use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::habitat::{ResourceKind, ResourceLevel, ResourceVector, display_percent};
use crate::theme;

/// Gauge caption, with the warning level spelled out when not normal
fn gauge_text(kind: ResourceKind, value: i32) -> String {
    let percent = display_percent(value);
    match ResourceLevel::of(value) {
        ResourceLevel::Normal => format!("{} {:.0}%", kind.display_name(), percent),
        ResourceLevel::Low => format!("{} {:.0}% (low)", kind.display_name(), percent),
        ResourceLevel::Critical => format!("{} {:.0}% (critical)", kind.display_name(), percent),
    }
}

/// Top bar with the four colony resource gauges
pub fn resource_bar_ui(mut contexts: EguiContexts, resources: Res<ResourceVector>) -> Result {
    egui::TopBottomPanel::top("resource_bar")
        .frame(
            egui::Frame::side_top_panel(&contexts.ctx_mut()?.style())
                .inner_margin(egui::Margin::symmetric(12, 8))
                .fill(theme::ui::PANEL_BACKGROUND),
        )
        .show(contexts.ctx_mut()?, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new("MARS COLONY")
                        .strong()
                        .color(theme::ui::ACCENT),
                );
                ui.add_space(12.0);

                for kind in ResourceKind::all() {
                    let value = resources.get(*kind);
                    let bar = egui::ProgressBar::new(display_percent(value) / 100.0)
                        .desired_width(150.0)
                        .fill(theme::ui::resource_level(ResourceLevel::of(value)))
                        .text(gauge_text(*kind, value));
                    ui.add(bar);
                    ui.add_space(6.0);
                }
            });
        });
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gauge_text_normal() {
        assert_eq!(gauge_text(ResourceKind::Oxygen, 55), "Oxygen 55%");
    }

    #[test]
    fn test_gauge_text_flags_levels() {
        assert_eq!(gauge_text(ResourceKind::Power, 15), "Power 15% (low)");
        assert_eq!(gauge_text(ResourceKind::Water, 4), "Water 4% (critical)");
    }

    #[test]
    fn test_gauge_text_clamps_display() {
        assert_eq!(gauge_text(ResourceKind::Food, 130), "Food 100%");
        assert_eq!(gauge_text(ResourceKind::Food, -20), "Food 0% (critical)");
    }
}
