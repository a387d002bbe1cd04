use serde::{Deserialize, Serialize};

use crate::config::level::XP_PER_LEVEL_UNIT;

/// Level summary derived from total experience. Never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerProgression {
    pub level: u32,
    pub experience: u64,
    pub xp_for_current_level: u64,
    pub xp_for_next_level: u64,
    pub xp_in_current_level: u64,
    pub xp_needed_for_next_level: u64,
}

impl Default for PlayerProgression {
    fn default() -> Self {
        Self::from_experience(0)
    }
}

impl PlayerProgression {
    pub fn from_experience(experience: u64) -> Self {
        let level = level_for_experience(experience);
        let xp_for_current_level = level_threshold(level);
        let xp_for_next_level = level_threshold(level.saturating_add(1));

        Self {
            level,
            experience,
            xp_for_current_level,
            xp_for_next_level,
            xp_in_current_level: experience - xp_for_current_level,
            xp_needed_for_next_level: xp_for_next_level - xp_for_current_level,
        }
    }

    /// Fraction of the current level completed, in `[0, 1)`.
    pub fn level_progress(&self) -> f64 {
        if self.xp_needed_for_next_level == 0 {
            return 0.0;
        }
        self.xp_in_current_level as f64 / self.xp_needed_for_next_level as f64
    }
}

/// Experience at which `level` begins: `(level - 1)^2 * 30`, saturating at `u64::MAX`.
pub fn level_threshold(level: u32) -> u64 {
    checked_level_threshold(level).unwrap_or(u64::MAX)
}

fn checked_level_threshold(level: u32) -> Option<u64> {
    let steps = u64::from(level.saturating_sub(1));
    steps.checked_mul(steps)?.checked_mul(XP_PER_LEVEL_UNIT)
}

/// `max(1, floor(1 + sqrt(E / 30)))`, corrected so that
/// `level_threshold(level) <= E < level_threshold(level + 1)` holds exactly.
pub fn level_for_experience(experience: u64) -> u32 {
    let estimate = (1.0 + (experience as f64 / XP_PER_LEVEL_UNIT as f64).sqrt()).floor();
    let mut level = (estimate as u32).max(1);

    while level > 1 && level_threshold(level) > experience {
        level -= 1;
    }
    // a threshold past u64::MAX is out of reach
    while checked_level_threshold(level.saturating_add(1))
        .is_some_and(|next| next <= experience)
    {
        level += 1;
    }
    level
}
