use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use super::ItemKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlacedItemId(pub u64);

impl std::fmt::Display for PlacedItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One of the four orientations a module can be placed in.
///
/// Saved as integer degrees so save files stay readable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub enum Rotation {
    #[default]
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Rotation {
    /// Next orientation clockwise, wrapping after 270
    pub fn rotated(self) -> Self {
        match self {
            Rotation::Deg0 => Rotation::Deg90,
            Rotation::Deg90 => Rotation::Deg180,
            Rotation::Deg180 => Rotation::Deg270,
            Rotation::Deg270 => Rotation::Deg0,
        }
    }

    pub fn degrees(self) -> u16 {
        match self {
            Rotation::Deg0 => 0,
            Rotation::Deg90 => 90,
            Rotation::Deg180 => 180,
            Rotation::Deg270 => 270,
        }
    }

    pub fn radians(self) -> f32 {
        f32::from(self.degrees()).to_radians()
    }
}

impl From<Rotation> for u16 {
    fn from(rotation: Rotation) -> Self {
        rotation.degrees()
    }
}

impl TryFrom<u16> for Rotation {
    type Error = String;

    fn try_from(degrees: u16) -> Result<Self, Self::Error> {
        match degrees {
            0 => Ok(Rotation::Deg0),
            90 => Ok(Rotation::Deg90),
            180 => Ok(Rotation::Deg180),
            270 => Ok(Rotation::Deg270),
            other => Err(format!("unsupported rotation: {} degrees", other)),
        }
    }
}

/// A catalog module placed on the Mars surface.
///
/// Plain values only: cloning an item produces a fully independent copy,
/// which is what history snapshots rely on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedItem {
    pub id: PlacedItemId,
    pub kind: ItemKind,
    /// Top-left corner in scene coordinates (y grows downward)
    pub x: f32,
    pub y: f32,
    #[serde(default)]
    pub rotation: Rotation,
}

impl PlacedItem {
    pub fn new(id: PlacedItemId, kind: ItemKind, x: f32, y: f32) -> Self {
        Self {
            id,
            kind,
            x,
            y,
            rotation: Rotation::Deg0,
        }
    }

    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn size(&self) -> Vec2 {
        self.kind.entry().size()
    }

    pub fn center(&self) -> Vec2 {
        self.position() + self.size() / 2.0
    }

    /// On-screen footprint size once rotated about the centre
    pub fn rotated_size(&self) -> Vec2 {
        let size = self.size();
        match self.rotation {
            Rotation::Deg0 | Rotation::Deg180 => size,
            Rotation::Deg90 | Rotation::Deg270 => Vec2::new(size.y, size.x),
        }
    }

    /// Hit test against the drawn (rotated) footprint, edges inclusive
    pub fn contains(&self, point: Vec2) -> bool {
        let offset = (point - self.center()).abs();
        let half = self.rotated_size() / 2.0;
        offset.x <= half.x && offset.y <= half.y
    }
}
