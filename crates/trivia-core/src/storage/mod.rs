//! File-backed inputs and state for the command-line front end.
//!
//! - `ScoreCollections::load` - per-mode score arrays exported from the backend
//! - `AchievementState` - previously unlocked achievement IDs

mod achievement_state;
mod collections;

pub use achievement_state::*;
