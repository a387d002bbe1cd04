//! Achievement evaluation.
//!
//! The catalog is a fixed, ordered list of pure predicates over a player's
//! score collections and progression. `evaluate` reports which achievements
//! became true relative to what the caller already has stored; persisting
//! the union is the caller's job.

mod catalog;
mod condition;

pub use catalog::*;
pub use condition::*;

use std::collections::HashSet;

use tracing::debug;

use crate::progression::PlayerProgression;
use crate::record::{Mode, ScoreCollections, ScoreRecord};

/// Everything an achievement predicate may look at.
#[derive(Debug, Clone, Copy)]
pub struct AchievementData<'a> {
    pub easy_scores: &'a [ScoreRecord],
    pub normal_scores: &'a [ScoreRecord],
    pub master_scores: &'a [ScoreRecord],
    pub hell_scores: &'a [ScoreRecord],
    pub race_scores: &'a [ScoreRecord],
    pub secret_scores: &'a [ScoreRecord],
    pub player: PlayerProgression,
    pub has_unlocked_secret_mode: bool,
}

impl<'a> AchievementData<'a> {
    /// Modes a player must try for the exploration achievement.
    pub const MAIN_MODES: [Mode; 5] = [
        Mode::Easy,
        Mode::Normal,
        Mode::Master,
        Mode::Hell,
        Mode::Race,
    ];

    pub fn from_collections(
        collections: &'a ScoreCollections,
        player: PlayerProgression,
        has_unlocked_secret_mode: bool,
    ) -> Self {
        Self {
            easy_scores: collections.get(Mode::Easy),
            normal_scores: collections.get(Mode::Normal),
            master_scores: collections.get(Mode::Master),
            hell_scores: collections.get(Mode::Hell),
            race_scores: collections.get(Mode::Race),
            secret_scores: collections.get(Mode::Secret),
            player,
            has_unlocked_secret_mode,
        }
    }

    /// Records for a mode; modes outside the evaluated set are empty.
    pub fn scores(&self, mode: Mode) -> &'a [ScoreRecord] {
        match mode {
            Mode::Easy => self.easy_scores,
            Mode::Normal => self.normal_scores,
            Mode::Master => self.master_scores,
            Mode::Hell => self.hell_scores,
            Mode::Race => self.race_scores,
            Mode::Secret => self.secret_scores,
            Mode::EasyRace | Mode::HardRace | Mode::Death => &[],
        }
    }

    pub fn all_records(&self) -> impl Iterator<Item = &'a ScoreRecord> + 'a {
        [
            self.easy_scores,
            self.normal_scores,
            self.master_scores,
            self.hell_scores,
            self.race_scores,
            self.secret_scores,
        ]
        .into_iter()
        .flatten()
    }
}

/// IDs of every visible achievement whose condition currently holds.
pub fn unlocked_now(data: &AchievementData<'_>) -> Vec<&'static str> {
    catalog()
        .iter()
        .filter(|achievement| achievement.is_unlocked(data))
        .map(|achievement| achievement.id)
        .collect()
}

/// Achievements that hold now and are absent from `previously_unlocked`,
/// in catalog order.
pub fn evaluate(
    data: &AchievementData<'_>,
    previously_unlocked: &HashSet<String>,
) -> Vec<&'static str> {
    let newly: Vec<&'static str> = unlocked_now(data)
        .into_iter()
        .filter(|id| !previously_unlocked.contains(*id))
        .collect();

    debug!(
        "{} achievements newly unlocked ({} previously)",
        newly.len(),
        previously_unlocked.len()
    );
    newly
}

/// Previous IDs followed by the newly unlocked ones, without duplicates.
pub fn unlocked_union(previous: &[String], newly: &[&str]) -> Vec<String> {
    let mut union = previous.to_vec();
    for id in newly {
        if !union.iter().any(|existing| existing == id) {
            union.push((*id).to_string());
        }
    }
    union
}
