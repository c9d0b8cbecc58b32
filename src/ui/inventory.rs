//! Right-hand panel: the module catalog and colony statistics.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::editor::Selection;
use crate::feedback::Notification;
use crate::habitat::{
    CatalogEntry, ColonyStatistics, Habitat, ItemKind, ResourceImpact, ResourceVector,
};
use crate::theme;

/// Nonzero impacts as short signed tags, e.g. "O2 +5  PWR -10"
fn impact_summary(impact: &ResourceImpact) -> String {
    [
        ("O2", impact.oxygen),
        ("PWR", impact.power),
        ("H2O", impact.water),
        ("FOOD", impact.food),
    ]
    .into_iter()
    .filter(|(_, value)| *value != 0)
    .map(|(label, value)| format!("{} {:+}", label, value))
    .collect::<Vec<_>>()
    .join("  ")
}

fn catalog_entry_ui(ui: &mut egui::Ui, entry: &CatalogEntry, picked: bool) -> egui::Response {
    let mut title = egui::RichText::new(entry.name).strong();
    if picked {
        title = title.color(theme::ui::ACCENT);
    }

    let swatch = theme::bevy_to_egui_opaque(theme::module_color(entry.kind));
    let response = ui
        .horizontal(|ui| {
            ui.colored_label(swatch, "■");
            ui.add(egui::Button::new(title).selected(picked))
        })
        .inner;

    ui.label(
        egui::RichText::new(impact_summary(&entry.resource_impact))
            .small()
            .color(theme::ui::LABEL_TEXT),
    );
    response.on_hover_text(entry.description)
}

fn statistics_ui(ui: &mut egui::Ui, stats: &ColonyStatistics) {
    ui.heading("Colony Statistics");
    ui.add_space(4.0);

    egui::Grid::new("colony_stats")
        .num_columns(2)
        .spacing([12.0, 4.0])
        .show(ui, |ui| {
            ui.label("Modules");
            ui.label(stats.module_count.to_string());
            ui.end_row();

            for (kind, count) in &stats.breakdown {
                ui.label(egui::RichText::new(kind.display_name()).color(theme::ui::LABEL_TEXT));
                ui.label(count.to_string());
                ui.end_row();
            }

            ui.label("Average resources");
            ui.label(format!("{}%", stats.average));
            ui.end_row();

            ui.label("Sustainability");
            ui.colored_label(
                theme::ui::sustainability(stats.sustainability),
                egui::RichText::new(stats.sustainability.display_name()).strong(),
            );
            ui.end_row();
        });
}

pub fn inventory_panel_ui(
    mut contexts: EguiContexts,
    mut selection: ResMut<Selection>,
    habitat: Res<Habitat>,
    resources: Res<ResourceVector>,
    mut notifications: MessageWriter<Notification>,
) -> Result {
    egui::SidePanel::right("inventory_panel")
        .default_width(240.0)
        .resizable(false)
        .show(contexts.ctx_mut()?, |ui| {
            ui.add_space(6.0);
            ui.heading("Habitat Modules");
            ui.label(
                egui::RichText::new("Pick a module, then click the surface to place it.")
                    .small()
                    .color(theme::ui::HINT_TEXT),
            );
            ui.add_space(6.0);

            for kind in ItemKind::all() {
                let picked = selection.placing == Some(*kind);
                if catalog_entry_ui(ui, kind.entry(), picked).clicked() {
                    selection.toggle_placing(*kind);
                    notifications.write(Notification::Click);
                }
                ui.add_space(4.0);
            }

            ui.separator();
            let stats = ColonyStatistics::gather(habitat.items(), &resources);
            statistics_ui(ui, &stats);
        });
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_impact_summary_skips_zero_fields() {
        let impact = ItemKind::Dome.entry().resource_impact;
        assert_eq!(impact_summary(&impact), "O2 +5  PWR -10");
    }

    #[test]
    fn test_impact_summary_all_fields() {
        let impact = ItemKind::Plant.entry().resource_impact;
        assert_eq!(impact_summary(&impact), "O2 +10  PWR -8  H2O -10  FOOD +15");
    }
}
