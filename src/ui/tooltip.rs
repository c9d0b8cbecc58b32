//! Hover card for modules already placed on the surface.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::editor::{CameraParams, DragState, is_cursor_over_ui};
use crate::habitat::{Habitat, ResourceImpact, ResourceKind};
use crate::theme;

use super::DialogState;

/// Offset of the card from the pointer, in screen points
const TOOLTIP_OFFSET: egui::Vec2 = egui::vec2(20.0, -10.0);

/// Nonzero impacts in gauge order, as (resource, signed amount)
fn impact_rows(impact: &ResourceImpact) -> Vec<(ResourceKind, i32)> {
    ResourceKind::all()
        .iter()
        .map(|kind| {
            let value = match kind {
                ResourceKind::Oxygen => impact.oxygen,
                ResourceKind::Power => impact.power,
                ResourceKind::Water => impact.water,
                ResourceKind::Food => impact.food,
            };
            (*kind, value)
        })
        .filter(|(_, value)| *value != 0)
        .collect()
}

pub fn module_tooltip_ui(
    mut contexts: EguiContexts,
    habitat: Res<Habitat>,
    drag_state: Res<DragState>,
    dialog_state: Res<DialogState>,
    camera: CameraParams,
) -> Result {
    if drag_state.is_dragging() || dialog_state.any_modal_open {
        return Ok(());
    }
    if is_cursor_over_ui(&mut contexts) {
        return Ok(());
    }

    let Some(item) = camera
        .cursor_scene_pos()
        .and_then(|point| habitat.item_at(point))
    else {
        return Ok(());
    };

    let ctx = contexts.ctx_mut()?;
    let Some(pointer) = ctx.pointer_hover_pos() else {
        return Ok(());
    };

    let entry = item.kind.entry();
    egui::Area::new(egui::Id::new("module_tooltip"))
        .order(egui::Order::Tooltip)
        .fixed_pos(pointer + TOOLTIP_OFFSET)
        .interactable(false)
        .show(ctx, |ui| {
            egui::Frame::popup(ui.style())
                .stroke(egui::Stroke::new(2.0, theme::ui::ACCENT))
                .show(ui, |ui| {
                    ui.set_max_width(260.0);
                    ui.label(egui::RichText::new(entry.name).strong());
                    ui.label(
                        egui::RichText::new(entry.description)
                            .small()
                            .color(theme::ui::LABEL_TEXT),
                    );
                    ui.add_space(6.0);
                    ui.label(egui::RichText::new("Resource Impact:").small().strong());

                    egui::Grid::new("module_tooltip_impacts")
                        .num_columns(2)
                        .spacing([16.0, 2.0])
                        .show(ui, |ui| {
                            for (kind, value) in impact_rows(&entry.resource_impact) {
                                let color = if value > 0 {
                                    theme::ui::GAIN_TEXT
                                } else {
                                    theme::ui::ERROR_TEXT
                                };
                                ui.label(
                                    egui::RichText::new(format!("{}:", kind.display_name()))
                                        .small()
                                        .color(theme::ui::LABEL_TEXT),
                                );
                                ui.label(
                                    egui::RichText::new(format!("{:+}", value))
                                        .small()
                                        .monospace()
                                        .color(color),
                                );
                                ui.end_row();
                            }
                        });
                });
        });
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::habitat::ItemKind;

    #[test]
    fn test_impact_rows_skip_zero_fields() {
        let rows = impact_rows(&ItemKind::Solar.entry().resource_impact);
        assert_eq!(rows, vec![(ResourceKind::Power, 25)]);
    }

    #[test]
    fn test_impact_rows_keep_gauge_order_and_sign() {
        let rows = impact_rows(&ItemKind::Bed.entry().resource_impact);
        assert_eq!(
            rows,
            vec![
                (ResourceKind::Oxygen, -2),
                (ResourceKind::Power, -5),
                (ResourceKind::Water, -3),
                (ResourceKind::Food, -5),
            ]
        );
    }
}
