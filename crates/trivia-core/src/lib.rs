pub mod achievement;
pub mod config;
pub mod error;
pub mod export;
pub mod grade;
pub mod progression;
pub mod ranking;
pub mod record;
pub mod storage;

pub use achievement::{
    Achievement, AchievementData, catalog, evaluate, unlocked_now, unlocked_union,
};
pub use config::Config;
pub use error::{Error, Result};
pub use grade::GradeScale;
pub use progression::{
    ExperienceBreakdown, ModeExperience, PlayerProgression, compute_progression,
    experience_breakdown,
};
pub use ranking::{
    FadingFilter, PlayerBest, RankRequest, RankedEntry, RecordFilters, best_per_player, rank,
    select_best,
};
pub use record::{
    ClearType, InputType, LineColor, Mode, ModeFamily, Modifiers, RecordDate, ScoreCollections,
    ScoreRecord,
};
pub use storage::AchievementState;
