//! Habitat persistence.
//!
//! Handles the single local save slot, including:
//! - Manual saves and periodic autosave on the IO task pool
//! - Restoring the saved habitat at startup
//! - Treating unreadable saves as "no save"
//!
//! ## Module Structure
//!
//! - [`store`] - `SaveStore` trait, `SaveData` and the JSON file store
//! - [`messages`] - Message types for save operations
//! - [`resources`] - Resource types for storage and save state
//! - [`results`] - Result types for async saves
//! - [`save`] - Save and delete systems, task polling
//! - [`load`] - Startup load
//! - [`autosave`] - Periodic autosave timer

mod autosave;
mod load;
mod messages;
mod resources;
mod results;
mod save;
mod store;

#[cfg(test)]
mod tests;

// Re-exports - Messages
pub use messages::{DeleteSaveRequest, SaveGameRequest, SaveReason};

// Re-exports - Resources
pub use resources::{AsyncSaveState, AutosaveTimer, GameStorage};

// Re-exports - Systems
pub use autosave::{start_autosave, stop_autosave, tick_autosave};
pub use load::{configure_storage, load_saved_game};
pub use save::{delete_save_system, poll_save_tasks, save_game_system};
