//! Centralized color theme for the application.
//!
//! This module provides all colors used throughout the habitat UI and rendering.
//! Modify values here to change the application's color scheme.

use bevy::prelude::Color;

use crate::habitat::ItemKind;

// ============================================================================
// Surface Colors
// ============================================================================

/// Rusty Martian ground behind everything
pub const SURFACE_BACKGROUND: Color = Color::srgb(0.45, 0.2, 0.12);

/// Faint dusty grid lines
pub const GRID_COLOR: Color = Color::srgba(0.9, 0.6, 0.45, 0.15);

// ============================================================================
// Module Colors
// ============================================================================

/// Outline color for each module kind
pub fn module_color(kind: ItemKind) -> Color {
    match kind {
        ItemKind::Dome => Color::srgb(0.85, 0.9, 0.95),
        ItemKind::Solar => Color::srgb(0.3, 0.55, 1.0),
        ItemKind::Bed => Color::srgb(0.95, 0.75, 0.4),
        ItemKind::Plant => Color::srgb(0.4, 0.9, 0.4),
        ItemKind::Water => Color::srgb(0.3, 0.85, 0.95),
    }
}

// ============================================================================
// Selection Colors
// ============================================================================

/// Bright outline around the selected module
pub const SELECTION_COLOR: Color = Color::srgb(1.0, 0.85, 0.2);

/// Translucent ghost of the module about to be placed
pub const PLACEMENT_PREVIEW: Color = Color::srgba(1.0, 1.0, 1.0, 0.35);

// ============================================================================
// UI Colors (egui)
// ============================================================================

pub mod ui {
    use bevy_egui::egui;

    use crate::habitat::{ResourceLevel, Sustainability};

    /// Dark reddish panel background
    pub const PANEL_BACKGROUND: egui::Color32 = egui::Color32::from_rgb(40, 24, 20);

    /// Light grey for label text
    pub const LABEL_TEXT: egui::Color32 = egui::Color32::LIGHT_GRAY;

    /// Grey for help/hint text
    pub const HINT_TEXT: egui::Color32 = egui::Color32::GRAY;

    /// Mars orange accent for headings and the picked catalog entry
    pub const ACCENT: egui::Color32 = egui::Color32::from_rgb(230, 110, 50);

    /// Red for destructive toasts and errors
    pub const ERROR_TEXT: egui::Color32 = egui::Color32::from_rgb(230, 80, 70);

    /// Green for resource gains in tooltips
    pub const GAIN_TEXT: egui::Color32 = egui::Color32::from_rgb(80, 190, 110);

    /// Gauge fill by warning level
    pub fn resource_level(level: ResourceLevel) -> egui::Color32 {
        match level {
            ResourceLevel::Normal => egui::Color32::from_rgb(80, 190, 110),
            ResourceLevel::Low => egui::Color32::from_rgb(230, 170, 50),
            ResourceLevel::Critical => egui::Color32::from_rgb(220, 60, 50),
        }
    }

    pub fn sustainability(rating: Sustainability) -> egui::Color32 {
        match rating {
            Sustainability::Excellent => egui::Color32::from_rgb(80, 190, 110),
            Sustainability::Good => egui::Color32::from_rgb(90, 160, 230),
            Sustainability::Fair => egui::Color32::from_rgb(230, 170, 50),
            Sustainability::Critical => egui::Color32::from_rgb(220, 60, 50),
        }
    }
}

// ============================================================================
// Color Conversion Utilities
// ============================================================================

/// Convert a Bevy Color to egui Color32 (fully opaque)
pub fn bevy_to_egui_opaque(color: Color) -> bevy_egui::egui::Color32 {
    let srgba = color.to_srgba();
    bevy_egui::egui::Color32::from_rgb(
        (srgba.red * 255.0) as u8,
        (srgba.green * 255.0) as u8,
        (srgba.blue * 255.0) as u8,
    )
}
