//! Static catalog of placeable habitat modules.

use bevy::math::Vec2;
use serde::{Deserialize, Serialize};

/// Per-module change applied to each colony resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ResourceImpact {
    pub oxygen: i32,
    pub power: i32,
    pub water: i32,
    pub food: i32,
}

/// Immutable template describing one placeable module type.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogEntry {
    pub kind: ItemKind,
    pub name: &'static str,
    /// Footprint width in scene units
    pub width: f32,
    /// Footprint height in scene units
    pub height: f32,
    pub resource_impact: ResourceImpact,
    pub description: &'static str,
}

impl CatalogEntry {
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Dome,
    Solar,
    Bed,
    Plant,
    Water,
}

static CATALOG: [CatalogEntry; 5] = [
    CatalogEntry {
        kind: ItemKind::Dome,
        name: "Habitat Dome",
        width: 120.0,
        height: 100.0,
        resource_impact: ResourceImpact {
            oxygen: 5,
            power: -10,
            water: 0,
            food: 0,
        },
        description: "Living space for colonists. Provides oxygen, consumes power.",
    },
    CatalogEntry {
        kind: ItemKind::Solar,
        name: "Solar Panel",
        width: 80.0,
        height: 60.0,
        resource_impact: ResourceImpact {
            oxygen: 0,
            power: 25,
            water: 0,
            food: 0,
        },
        description: "Generates power from sunlight. Essential for energy.",
    },
    CatalogEntry {
        kind: ItemKind::Bed,
        name: "Living Quarters",
        width: 60.0,
        height: 40.0,
        resource_impact: ResourceImpact {
            oxygen: -2,
            power: -5,
            water: -3,
            food: -5,
        },
        description: "Sleeping quarters for crew. Consumes resources.",
    },
    CatalogEntry {
        kind: ItemKind::Plant,
        name: "Plant Pod",
        width: 50.0,
        height: 50.0,
        resource_impact: ResourceImpact {
            oxygen: 10,
            power: -8,
            water: -10,
            food: 15,
        },
        description: "Grows food and produces oxygen. Needs water and power.",
    },
    CatalogEntry {
        kind: ItemKind::Water,
        name: "Water Tank",
        width: 70.0,
        height: 80.0,
        resource_impact: ResourceImpact {
            oxygen: 0,
            power: -3,
            water: 20,
            food: 0,
        },
        description: "Stores and purifies water. Slight power consumption.",
    },
];

impl ItemKind {
    /// Catalog entry for this kind
    pub fn entry(self) -> &'static CatalogEntry {
        match self {
            ItemKind::Dome => &CATALOG[0],
            ItemKind::Solar => &CATALOG[1],
            ItemKind::Bed => &CATALOG[2],
            ItemKind::Plant => &CATALOG[3],
            ItemKind::Water => &CATALOG[4],
        }
    }

    pub fn display_name(self) -> &'static str {
        self.entry().name
    }

    /// Stable identifier used in saves and logs
    pub fn key(self) -> &'static str {
        match self {
            ItemKind::Dome => "dome",
            ItemKind::Solar => "solar",
            ItemKind::Bed => "bed",
            ItemKind::Plant => "plant",
            ItemKind::Water => "water",
        }
    }

    /// All kinds in inventory order
    pub fn all() -> &'static [ItemKind] {
        &[
            ItemKind::Dome,
            ItemKind::Solar,
            ItemKind::Bed,
            ItemKind::Plant,
            ItemKind::Water,
        ]
    }
}
