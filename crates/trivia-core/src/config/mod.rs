//! Configuration and tuning constants.
//!
//! This module contains:
//! - `Config` - user settings loaded from TOML (default filters, file paths)
//! - Experience, level and ranking constants

mod settings;

pub use settings::*;

/// Experience awarded per record and per milestone.
pub mod xp {
    use crate::record::ClearType;

    /// Flat bonus by clear type; `Failed`, `Clear` and absent earn nothing.
    pub const CLEAR_TYPE_BONUS: [(ClearType, u64); 5] = [
        (ClearType::Hard, 25),
        (ClearType::Brave, 50),
        (ClearType::Absolute, 75),
        (ClearType::Catastrophy, 100),
        (ClearType::AllCorrect, 150),
    ];

    /// Normal-mode score thresholds, highest first.
    pub const NORMAL_SCORE_MILESTONES: [(f64, u64); 4] =
        [(100.0, 25), (75.0, 15), (50.0, 10), (25.0, 5)];

    /// Per-step bonus for `S<n>` grades in master and hell.
    pub const S_GRADE_BONUS_PER_STEP: u64 = 10;

    pub const MASTER_GM_ORANGE_BONUS: u64 = 150;
    pub const MASTER_GM_GREEN_BONUS: u64 = 50;
    pub const MASTER_ORANGE_LINE_BONUS: u64 = 50;
    pub const MASTER_GREEN_LINE_BONUS: u64 = 25;
}

/// Level curve: level `n` starts at `(n - 1)^2 * XP_PER_LEVEL_UNIT`.
pub mod level {
    pub const XP_PER_LEVEL_UNIT: u64 = 30;
}

/// Leaderboard filter tolerances.
pub mod ranking {
    /// Time multipliers within this distance count as equal.
    pub const TIME_MULTIPLIER_EPSILON: f64 = 0.01;

    /// Vanish durations (seconds) within this distance count as equal.
    pub const FADING_EPSILON: f64 = 0.01;
}
