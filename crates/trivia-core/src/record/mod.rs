//! Score record types.
//!
//! This module contains the shapes the backend hands to the engine:
//! - `ScoreRecord` - one play session, with lenient accessors
//! - `Mode`, `ModeFamily` - game modes and leaderboard pages
//! - `ModeDescriptor` - per-mode grading, selection and XP strategy
//! - `LineColor`, `ClearType`, `InputType` - tiers and tags carried by a record
//! - `ScoreCollections` - every mode's records for one snapshot

mod collections;
mod enums;
mod mode;
mod score_record;
mod time;

pub use collections::*;
pub use enums::*;
pub use mode::*;
pub use score_record::*;
pub use time::*;
