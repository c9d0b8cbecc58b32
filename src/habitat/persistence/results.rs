//! Result types for async save operations.

use super::messages::SaveReason;

/// Result of an async save operation
pub struct SaveOutcome {
    pub reason: SaveReason,
    pub item_count: usize,
    pub error: Option<String>,
}
