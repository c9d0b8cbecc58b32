use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::constants::{
    AUTOSAVE_INTERVAL_SECS, BASELINE_RESOURCE, LOW_RESOURCE_THRESHOLD, MAX_AUTOSAVE_INTERVAL_SECS,
    MAX_HISTORY_CAPACITY, MAX_HISTORY_SIZE, MIN_AUTOSAVE_INTERVAL_SECS, RESOURCE_SETTING_LIMIT,
};
use crate::session::WarningPolicy;

/// System set for config loading (other plugins can run after this)
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConfigLoaded;

/// Application configuration persisted to disk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfigData {
    /// Play sound cues for actions and warnings
    pub sound_enabled: bool,

    /// Periodically save a non-empty habitat
    pub autosave_enabled: bool,

    pub autosave_interval_secs: f32,

    /// Number of snapshots kept for undo/redo
    pub history_capacity: usize,

    /// Starting value of every resource
    pub resource_baseline: i32,

    /// Resources below this raise the low-resource warning
    pub low_resource_threshold: i32,

    /// Whether the low-resource warning repeats while resources stay low
    pub warning_policy: WarningPolicy,

    /// Snap placement and dragging to the grid
    pub grid_snap: bool,

    /// The welcome window has been shown once
    pub welcome_seen: bool,
}

impl Default for AppConfigData {
    fn default() -> Self {
        Self {
            sound_enabled: true,
            autosave_enabled: true,
            autosave_interval_secs: AUTOSAVE_INTERVAL_SECS,
            history_capacity: MAX_HISTORY_SIZE,
            resource_baseline: BASELINE_RESOURCE,
            low_resource_threshold: LOW_RESOURCE_THRESHOLD,
            warning_policy: WarningPolicy::default(),
            grid_snap: true,
            welcome_seen: false,
        }
    }
}

impl AppConfigData {
    /// Pull hand-edited numeric settings back into their supported ranges
    fn clamped(self) -> Self {
        let autosave_interval_secs = if self.autosave_interval_secs.is_finite() {
            self.autosave_interval_secs
                .clamp(MIN_AUTOSAVE_INTERVAL_SECS, MAX_AUTOSAVE_INTERVAL_SECS)
        } else {
            AUTOSAVE_INTERVAL_SECS
        };

        Self {
            autosave_interval_secs,
            history_capacity: self.history_capacity.clamp(1, MAX_HISTORY_CAPACITY),
            resource_baseline: self
                .resource_baseline
                .clamp(-RESOURCE_SETTING_LIMIT, RESOURCE_SETTING_LIMIT),
            low_resource_threshold: self
                .low_resource_threshold
                .clamp(-RESOURCE_SETTING_LIMIT, RESOURCE_SETTING_LIMIT),
            ..self
        }
    }
}

/// Runtime configuration resource
#[derive(Resource)]
pub struct AppConfig {
    /// The persisted configuration data
    pub data: AppConfigData,
    /// Path to the config file
    pub config_path: PathBuf,
    /// Whether config needs to be saved (dirty flag)
    pub dirty: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data: AppConfigData::default(),
            config_path: get_config_path(),
            dirty: false,
        }
    }
}

/// Resource to notify user when config was reset to defaults
#[derive(Resource, Default)]
pub struct ConfigResetNotification {
    /// Whether to show the notification dialog
    pub show: bool,
    /// The reason for the reset (parse error, read error, etc.)
    pub reason: Option<String>,
}

/// Message to trigger config save
#[derive(Message)]
pub struct SaveConfigRequest;

/// Message to turn sound cues on or off
#[derive(Message)]
pub struct SetSoundEnabledRequest {
    pub enabled: bool,
}

/// Message to turn grid snapping on or off
#[derive(Message)]
pub struct SetGridSnapRequest {
    pub enabled: bool,
}

/// Message to remember that the welcome window was dismissed
#[derive(Message)]
pub struct MarkWelcomeSeenRequest;

/// Get the path to the config file (platform-appropriate location)
fn get_config_path() -> PathBuf {
    crate::paths::config_file()
}

/// Result of loading config from disk
struct LoadConfigResult {
    data: AppConfigData,
    /// Error message if config was reset to defaults due to an error
    reset_reason: Option<String>,
}

/// Parse config JSON, falling back to defaults with a reason on failure
fn parse_config(json: &str) -> LoadConfigResult {
    match serde_json::from_str::<AppConfigData>(json) {
        Ok(parsed) => {
            let data = parsed.clone().clamped();
            if data != parsed {
                warn!("Config values out of range were clamped");
            }
            LoadConfigResult {
                data,
                reset_reason: None,
            }
        }
        Err(e) => {
            warn!("Failed to parse config file: {}", e);
            LoadConfigResult {
                data: AppConfigData::default(),
                reset_reason: Some(format!("Configuration file was corrupted: {}", e)),
            }
        }
    }
}

/// Load configuration from disk
fn load_config(config_path: &Path) -> LoadConfigResult {
    if !config_path.exists() {
        info!("No config file found, using defaults");
        return LoadConfigResult {
            data: AppConfigData::default(),
            reset_reason: None,
        };
    }

    match std::fs::read_to_string(config_path) {
        Ok(json) => {
            let result = parse_config(&json);
            if result.reset_reason.is_none() {
                info!("Loaded config from {:?}", config_path);
            }
            result
        }
        Err(e) => {
            warn!("Failed to read config file: {}", e);
            LoadConfigResult {
                data: AppConfigData::default(),
                reset_reason: Some(format!("Could not read configuration file: {}", e)),
            }
        }
    }
}

/// Save configuration to disk
fn save_config(config: &AppConfig) {
    match serde_json::to_string_pretty(&config.data) {
        Ok(json) => {
            if let Err(e) = std::fs::write(&config.config_path, json) {
                error!("Failed to save config: {}", e);
            } else {
                info!("Config saved to {:?}", config.config_path);
            }
        }
        Err(e) => {
            error!("Failed to serialize config: {}", e);
        }
    }
}

/// Startup system to load config from disk into the existing resource
fn load_config_system(
    mut config: ResMut<AppConfig>,
    mut reset_notification: ResMut<ConfigResetNotification>,
) {
    let result = load_config(&config.config_path);
    config.data = result.data;
    config.dirty = false;

    // Set notification if config was reset due to an error
    if let Some(reason) = result.reset_reason {
        reset_notification.show = true;
        reset_notification.reason = Some(reason);
    }
}

/// System to save config when requested
fn save_config_system(
    mut events: MessageReader<SaveConfigRequest>,
    mut config: ResMut<AppConfig>,
) {
    for _ in events.read() {
        if config.dirty {
            save_config(&config);
            config.dirty = false;
        }
    }
}

fn set_sound_enabled_system(
    mut events: MessageReader<SetSoundEnabledRequest>,
    mut config: ResMut<AppConfig>,
    mut save_events: MessageWriter<SaveConfigRequest>,
) {
    for event in events.read() {
        config.data.sound_enabled = event.enabled;
        config.dirty = true;
        save_events.write(SaveConfigRequest);
        info!("Sound {}", if event.enabled { "enabled" } else { "disabled" });
    }
}

fn set_grid_snap_system(
    mut events: MessageReader<SetGridSnapRequest>,
    mut config: ResMut<AppConfig>,
    mut save_events: MessageWriter<SaveConfigRequest>,
) {
    for event in events.read() {
        config.data.grid_snap = event.enabled;
        config.dirty = true;
        save_events.write(SaveConfigRequest);
    }
}

fn mark_welcome_seen_system(
    mut events: MessageReader<MarkWelcomeSeenRequest>,
    mut config: ResMut<AppConfig>,
    mut save_events: MessageWriter<SaveConfigRequest>,
) {
    for _ in events.read() {
        if !config.data.welcome_seen {
            config.data.welcome_seen = true;
            config.dirty = true;
            save_events.write(SaveConfigRequest);
        }
    }
}

pub struct ConfigPlugin;

impl Plugin for ConfigPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AppConfig>()
            .init_resource::<ConfigResetNotification>()
            .add_message::<SaveConfigRequest>()
            .add_message::<SetSoundEnabledRequest>()
            .add_message::<SetGridSnapRequest>()
            .add_message::<MarkWelcomeSeenRequest>()
            .add_systems(Startup, load_config_system.in_set(ConfigLoaded))
            .add_systems(
                Update,
                (
                    set_sound_enabled_system.run_if(on_message::<SetSoundEnabledRequest>),
                    set_grid_snap_system.run_if(on_message::<SetGridSnapRequest>),
                    mark_welcome_seen_system.run_if(on_message::<MarkWelcomeSeenRequest>),
                    save_config_system.run_if(on_message::<SaveConfigRequest>),
                )
                    .chain(),
            );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_config_data_default() {
        let data = AppConfigData::default();
        assert!(data.sound_enabled);
        assert!(data.autosave_enabled);
        assert_eq!(data.autosave_interval_secs, 30.0);
        assert_eq!(data.history_capacity, 50);
        assert_eq!(data.resource_baseline, 50);
        assert_eq!(data.low_resource_threshold, 20);
        assert_eq!(data.warning_policy, WarningPolicy::LevelTriggered);
        assert!(data.grid_snap);
        assert!(!data.welcome_seen);
    }

    #[test]
    fn test_app_config_data_serialization() {
        let data = AppConfigData {
            sound_enabled: false,
            history_capacity: 10,
            warning_policy: WarningPolicy::EdgeTriggered,
            welcome_seen: true,
            ..Default::default()
        };

        let json = serde_json::to_string(&data).unwrap();
        let parsed: AppConfigData = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, data);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let result = parse_config(r#"{"sound_enabled": false}"#);
        assert!(result.reset_reason.is_none());
        assert!(!result.data.sound_enabled);
        assert_eq!(result.data.history_capacity, MAX_HISTORY_SIZE);
        assert!(result.data.autosave_enabled);
    }

    #[test]
    fn test_corrupt_config_resets_with_reason() {
        let result = parse_config("{ definitely not json");
        assert_eq!(result.data, AppConfigData::default());
        assert!(
            result
                .reset_reason
                .unwrap()
                .starts_with("Configuration file was corrupted")
        );
    }

    #[test]
    fn test_out_of_range_values_are_clamped() {
        let result = parse_config(
            r#"{
                "history_capacity": 18446744073709551615,
                "autosave_interval_secs": 1e30,
                "resource_baseline": 2147483647,
                "low_resource_threshold": -2147483648
            }"#,
        );
        assert!(result.reset_reason.is_none());
        assert_eq!(result.data.history_capacity, MAX_HISTORY_CAPACITY);
        assert_eq!(result.data.autosave_interval_secs, MAX_AUTOSAVE_INTERVAL_SECS);
        assert_eq!(result.data.resource_baseline, RESOURCE_SETTING_LIMIT);
        assert_eq!(result.data.low_resource_threshold, -RESOURCE_SETTING_LIMIT);
    }

    #[test]
    fn test_too_small_values_are_raised() {
        let result =
            parse_config(r#"{"history_capacity": 0, "autosave_interval_secs": -5.0}"#);
        assert_eq!(result.data.history_capacity, 1);
        assert_eq!(result.data.autosave_interval_secs, MIN_AUTOSAVE_INTERVAL_SECS);
    }

    #[test]
    fn test_in_range_values_are_kept() {
        let data = AppConfigData {
            history_capacity: 200,
            autosave_interval_secs: 90.0,
            resource_baseline: -40,
            low_resource_threshold: 35,
            ..Default::default()
        };
        assert_eq!(data.clone().clamped(), data);
    }

    #[test]
    fn test_missing_config_file_uses_defaults() {
        let path = std::env::temp_dir().join("marsforge-test-missing-config.json");
        let _ = std::fs::remove_file(&path);
        let result = load_config(&path);
        assert!(result.reset_reason.is_none());
        assert_eq!(result.data, AppConfigData::default());
    }
}
