//! Bevy systems wiring the session controller into the app.

use bevy::prelude::*;

use crate::config::AppConfig;
use crate::feedback::Notification;
use crate::habitat::{Habitat, ResourceVector};
use crate::history::GameHistory;

use super::controller::{HabitatAction, SessionSettings, apply_action, recompute_resources};
use super::warning::LowResourceMonitor;

/// Build the session collaborators from the loaded config
pub fn configure_session(
    config: Res<AppConfig>,
    mut history: ResMut<GameHistory>,
    mut settings: ResMut<SessionSettings>,
    mut monitor: ResMut<LowResourceMonitor>,
) {
    *history = GameHistory::new(config.data.history_capacity);
    *settings = SessionSettings {
        resource_baseline: config.data.resource_baseline,
        low_resource_threshold: config.data.low_resource_threshold,
    };
    *monitor = LowResourceMonitor::new(config.data.warning_policy);
}

/// Seed history with the starting habitat (empty, or whatever was loaded)
pub fn seed_history(habitat: Res<Habitat>, mut history: ResMut<GameHistory>) {
    history.clear();
    history.push_state(habitat.items());
    debug!(
        "History seeded with {} modules (capacity {})",
        history.current().map_or(0, |snapshot| snapshot.items().len()),
        history.capacity()
    );
}

/// Compute the gauges for the starting habitat
pub fn initial_refresh(
    habitat: Res<Habitat>,
    settings: Res<SessionSettings>,
    mut resources: ResMut<ResourceVector>,
    mut monitor: ResMut<LowResourceMonitor>,
    mut notifications: MessageWriter<Notification>,
) {
    if recompute_resources(&habitat, &settings, &mut resources, &mut monitor) {
        notifications.write(Notification::ResourceLow);
    }
}

/// Apply queued actions in order, recomputing resources after each mutation
pub fn apply_habitat_actions(
    mut actions: MessageReader<HabitatAction>,
    mut habitat: ResMut<Habitat>,
    mut history: ResMut<GameHistory>,
    settings: Res<SessionSettings>,
    mut resources: ResMut<ResourceVector>,
    mut monitor: ResMut<LowResourceMonitor>,
    mut notifications: MessageWriter<Notification>,
) {
    for action in actions.read() {
        let outcome = apply_action(&mut habitat, &mut history, action);

        if let Some(notification) = outcome.notification {
            notifications.write(notification);
        }

        if !outcome.changed {
            continue;
        }

        if recompute_resources(&habitat, &settings, &mut resources, &mut monitor) {
            debug!("Resources low: {:?}", *resources);
            notifications.write(Notification::ResourceLow);
        }
    }
}
