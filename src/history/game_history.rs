//! Bounded snapshot history for undo/redo.

use bevy::prelude::*;
use chrono::{DateTime, Utc};
use std::collections::VecDeque;

use crate::constants::MAX_HISTORY_SIZE;
use crate::habitat::PlacedItem;

/// An independent copy of the habitat at one point in time
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    items: Vec<PlacedItem>,
    captured_at: DateTime<Utc>,
}

impl Snapshot {
    fn capture(items: &[PlacedItem]) -> Self {
        Self {
            items: items.to_vec(),
            captured_at: Utc::now(),
        }
    }

    pub fn items(&self) -> &[PlacedItem] {
        &self.items
    }

    pub fn captured_at(&self) -> DateTime<Utc> {
        self.captured_at
    }
}

/// Linear undo/redo log over habitat snapshots.
///
/// `cursor` points at the snapshot matching the live habitat; `None` only
/// while the log is empty.
#[derive(Resource, Debug, Clone)]
pub struct GameHistory {
    entries: VecDeque<Snapshot>,
    cursor: Option<usize>,
    capacity: usize,
}

impl Default for GameHistory {
    fn default() -> Self {
        Self::new(MAX_HISTORY_SIZE)
    }
}

impl GameHistory {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity.min(MAX_HISTORY_SIZE).saturating_add(1)),
            cursor: None,
            capacity,
        }
    }

    /// Record the habitat as the new current state.
    ///
    /// Anything after the cursor is discarded. When the log overflows the
    /// oldest snapshot is dropped and the cursor stays put, which leaves it
    /// on the snapshot just pushed.
    pub fn push_state(&mut self, items: &[PlacedItem]) {
        let keep = self.cursor.map_or(0, |cursor| cursor + 1);
        self.entries.truncate(keep);

        self.entries.push_back(Snapshot::capture(items));

        if self.entries.len() > self.capacity {
            self.entries.pop_front();
        } else {
            self.cursor = Some(self.cursor.map_or(0, |cursor| cursor + 1));
        }
    }

    /// Step back one snapshot, returning a copy the caller may freely mutate
    pub fn undo(&mut self) -> Option<Vec<PlacedItem>> {
        if !self.can_undo() {
            return None;
        }
        let cursor = self.cursor? - 1;
        self.cursor = Some(cursor);
        self.entries.get(cursor).map(|s| s.items.clone())
    }

    /// Step forward one snapshot, returning a copy the caller may freely mutate
    pub fn redo(&mut self) -> Option<Vec<PlacedItem>> {
        if !self.can_redo() {
            return None;
        }
        let cursor = self.cursor.map_or(0, |cursor| cursor + 1);
        self.cursor = Some(cursor);
        self.entries.get(cursor).map(|s| s.items.clone())
    }

    pub fn can_undo(&self) -> bool {
        self.cursor.is_some_and(|cursor| cursor > 0)
    }

    pub fn can_redo(&self) -> bool {
        match self.cursor {
            Some(cursor) => cursor + 1 < self.entries.len(),
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.cursor = None;
    }

    pub fn current_index(&self) -> Option<usize> {
        self.cursor
    }

    pub fn current(&self) -> Option<&Snapshot> {
        self.cursor.and_then(|cursor| self.entries.get(cursor))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
