//! Centralized constants used across the application.
//!
//! This module contains magic numbers and configuration values that are used
//! in multiple places or would benefit from being named constants.

/// Default window width in pixels (also used for grid viewport calculations)
pub const DEFAULT_WINDOW_WIDTH: f32 = 1600.0;

/// Default window height in pixels (also used for grid viewport calculations)
pub const DEFAULT_WINDOW_HEIGHT: f32 = 900.0;

/// Maximum number of snapshots kept in the undo/redo history
pub const MAX_HISTORY_SIZE: usize = 50;

/// Starting value of every resource before any module is placed
pub const BASELINE_RESOURCE: i32 = 50;

/// A resource below this value raises the low-resource warning
pub const LOW_RESOURCE_THRESHOLD: i32 = 20;

/// A resource below this value is shown as critical in the gauges
pub const CRITICAL_RESOURCE_THRESHOLD: i32 = 10;

/// Seconds between autosaves
pub const AUTOSAVE_INTERVAL_SECS: f32 = 30.0;

/// Size of a placement grid cell in scene units
pub const GRID_SIZE: f32 = 20.0;

/// How long a toast stays on screen
pub const TOAST_LIFETIME_SECS: f32 = 3.0;

/// Largest undo/redo history a config file may request
pub const MAX_HISTORY_CAPACITY: usize = 1000;

/// Bounds for the configured autosave interval, in seconds
pub const MIN_AUTOSAVE_INTERVAL_SECS: f32 = 1.0;
pub const MAX_AUTOSAVE_INTERVAL_SECS: f32 = 3600.0;

/// Magnitude limit for the configured resource baseline and warning threshold
pub const RESOURCE_SETTING_LIMIT: i32 = 10_000;
