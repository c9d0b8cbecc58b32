//! Message types for save operations.

use bevy::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveReason {
    /// Player pressed Save; success and failure are reported to the player
    Manual,
    /// Periodic save; failures are only logged
    Autosave,
}

/// Message to save the current habitat to the save slot
#[derive(Message)]
pub struct SaveGameRequest {
    pub reason: SaveReason,
}

/// Message to erase the save slot
#[derive(Message)]
pub struct DeleteSaveRequest;
