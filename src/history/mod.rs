//! Undo/Redo history for habitat edits.
//!
//! Every historied edit (placement, rotation, deletion, clearing) records a
//! full snapshot of the habitat. Undo and redo move a cursor through those
//! snapshots and hand back an owned copy that becomes the live habitat.
//! Drag movement is not recorded on its own; the moved positions are
//! captured by the next historied edit.
//!
//! ## Usage
//!
//! - **Ctrl+Z**: Undo the last action
//! - **Ctrl+Y** or **Ctrl+Shift+Z**: Redo the last undone action
//!
//! ## Module Structure
//!
//! - [`game_history`] - `GameHistory` resource and `Snapshot`

mod game_history;


pub use game_history::GameHistory;
