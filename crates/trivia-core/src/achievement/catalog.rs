use serde::Serialize;

use crate::record::{ClearType, Mode};

use super::Condition::{ClearWithAll, ClearWithLives, ClearWithModifier, LevelAtLeast, Perfect};
use super::RunModifier::{DoubleTime, QuickVanish};
use super::{AchievementData, Condition, RunModifier, Visibility};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Achievement {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    #[serde(skip)]
    pub condition: Condition,
    #[serde(skip)]
    pub visibility: Visibility,
}

impl Achievement {
    const fn new(
        id: &'static str,
        name: &'static str,
        description: &'static str,
        condition: Condition,
    ) -> Self {
        Self {
            id,
            name,
            description,
            condition,
            visibility: Visibility::Always,
        }
    }

    const fn secret(mut self) -> Self {
        self.visibility = Visibility::UntilSecretUnlocked;
        self
    }

    pub fn is_hidden(&self, data: &AchievementData<'_>) -> bool {
        self.visibility.is_hidden(data)
    }

    /// Hidden achievements cannot unlock.
    pub fn is_unlocked(&self, data: &AchievementData<'_>) -> bool {
        !self.is_hidden(data) && self.condition.holds(data)
    }
}

const VANISH_DOUBLE_TIME: &[RunModifier] = &[RunModifier::QuickVanish, RunModifier::DoubleTime];
const VANISH_ONE_LIFE: &[RunModifier] = &[RunModifier::QuickVanish, RunModifier::OneLife];
const DOUBLE_TIME_ONE_LIFE: &[RunModifier] = &[RunModifier::DoubleTime, RunModifier::OneLife];
const ALL_MODIFIERS: &[RunModifier] = &[
    RunModifier::QuickVanish,
    RunModifier::DoubleTime,
    RunModifier::OneLife,
];

static ACHIEVEMENTS: [Achievement; 36] = [
    // Perfect runs
    Achievement::new(
        "easy_perfect",
        "Easy Does It",
        "Score 30 grade points in Easy mode",
        Perfect(Mode::Easy),
    ),
    Achievement::new(
        "normal_perfect",
        "Flawless",
        "Answer all 100 questions correctly in Normal mode",
        Perfect(Mode::Normal),
    ),
    Achievement::new(
        "master_perfect",
        "Grand Master",
        "Reach the GM grade in Master mode",
        Perfect(Mode::Master),
    ),
    Achievement::new(
        "hell_perfect",
        "Out of the Inferno",
        "Answer all 200 questions correctly in Hell mode",
        Perfect(Mode::Hell),
    ),
    Achievement::new(
        "race_perfect",
        "Photo Finish",
        "Reach the GM grade in Race mode",
        Perfect(Mode::Race),
    ),
    // Clears with limited lives
    Achievement::new(
        "easy_lives_10",
        "Easy Survivor",
        "Clear Easy mode with 10 lives or fewer",
        ClearWithLives(Mode::Easy, 10.0, ClearType::Absolute),
    ),
    Achievement::new(
        "easy_lives_5",
        "Easy Daredevil",
        "Clear Easy mode with 5 lives or fewer",
        ClearWithLives(Mode::Easy, 5.0, ClearType::Catastrophy),
    ),
    Achievement::new(
        "easy_lives_1",
        "Easy Tightrope",
        "Clear Easy mode with a single life",
        ClearWithLives(Mode::Easy, 1.0, ClearType::AllCorrect),
    ),
    Achievement::new(
        "normal_lives_10",
        "Normal Survivor",
        "Clear Normal mode with 10 lives or fewer",
        ClearWithLives(Mode::Normal, 10.0, ClearType::Absolute),
    ),
    Achievement::new(
        "normal_lives_5",
        "Normal Daredevil",
        "Clear Normal mode with 5 lives or fewer",
        ClearWithLives(Mode::Normal, 5.0, ClearType::Catastrophy),
    ),
    Achievement::new(
        "normal_lives_1",
        "Normal Tightrope",
        "Clear Normal mode with a single life",
        ClearWithLives(Mode::Normal, 1.0, ClearType::AllCorrect),
    ),
    Achievement::new(
        "master_lives_10",
        "Master Survivor",
        "Clear Master mode with 10 lives or fewer",
        ClearWithLives(Mode::Master, 10.0, ClearType::Absolute),
    ),
    Achievement::new(
        "master_lives_5",
        "Master Daredevil",
        "Clear Master mode with 5 lives or fewer",
        ClearWithLives(Mode::Master, 5.0, ClearType::Catastrophy),
    ),
    Achievement::new(
        "master_lives_1",
        "Master Tightrope",
        "Clear Master mode with a single life",
        ClearWithLives(Mode::Master, 1.0, ClearType::AllCorrect),
    ),
    Achievement::new(
        "hell_lives_10",
        "Hell Survivor",
        "Clear Hell mode with 10 lives or fewer",
        ClearWithLives(Mode::Hell, 10.0, ClearType::Absolute),
    ),
    Achievement::new(
        "hell_lives_5",
        "Hell Daredevil",
        "Clear Hell mode with 5 lives or fewer",
        ClearWithLives(Mode::Hell, 5.0, ClearType::Catastrophy),
    ),
    Achievement::new(
        "hell_lives_1",
        "Hell Tightrope",
        "Clear Hell mode with a single life",
        ClearWithLives(Mode::Hell, 1.0, ClearType::AllCorrect),
    ),
    // Single modifiers
    Achievement::new(
        "easy_double_time",
        "Easy Overtime",
        "Clear Easy mode with 2x time",
        ClearWithModifier(Mode::Easy, DoubleTime),
    ),
    Achievement::new(
        "easy_vanish",
        "Easy Blink",
        "Clear Easy mode with 0.5s vanish",
        ClearWithModifier(Mode::Easy, QuickVanish),
    ),
    Achievement::new(
        "normal_double_time",
        "Normal Overtime",
        "Clear Normal mode with 2x time",
        ClearWithModifier(Mode::Normal, DoubleTime),
    ),
    Achievement::new(
        "normal_vanish",
        "Normal Blink",
        "Clear Normal mode with 0.5s vanish",
        ClearWithModifier(Mode::Normal, QuickVanish),
    ),
    Achievement::new(
        "master_double_time",
        "Master Overtime",
        "Clear Master mode with 2x time",
        ClearWithModifier(Mode::Master, DoubleTime),
    ),
    Achievement::new(
        "master_vanish",
        "Master Blink",
        "Clear Master mode with 0.5s vanish",
        ClearWithModifier(Mode::Master, QuickVanish),
    ),
    Achievement::new(
        "hell_double_time",
        "Hell Overtime",
        "Clear Hell mode with 2x time",
        ClearWithModifier(Mode::Hell, DoubleTime),
    ),
    Achievement::new(
        "hell_vanish",
        "Hell Blink",
        "Clear Hell mode with 0.5s vanish",
        ClearWithModifier(Mode::Hell, QuickVanish),
    ),
    // Modifier combinations, any mode
    Achievement::new(
        "combo_vanish_double_time",
        "Slow Fade",
        "Clear any mode with 0.5s vanish and 2x time",
        ClearWithAll(VANISH_DOUBLE_TIME),
    ),
    Achievement::new(
        "combo_vanish_one_life",
        "Blind Faith",
        "Clear any mode with 0.5s vanish and one life",
        ClearWithAll(VANISH_ONE_LIFE),
    ),
    Achievement::new(
        "combo_double_time_one_life",
        "Borrowed Time",
        "Clear any mode with 2x time and one life",
        ClearWithAll(DOUBLE_TIME_ONE_LIFE),
    ),
    Achievement::new(
        "combo_all_modifiers",
        "Everything at Once",
        "Clear any mode with 0.5s vanish, 2x time and one life",
        ClearWithAll(ALL_MODIFIERS),
    ),
    // Levels
    Achievement::new("level_10", "Regular", "Reach level 10", LevelAtLeast(10)),
    Achievement::new("level_50", "Veteran", "Reach level 50", LevelAtLeast(50)),
    Achievement::new("level_100", "Legend", "Reach level 100", LevelAtLeast(100)),
    // Exploration
    Achievement::new(
        "explorer",
        "Explorer",
        "Play at least one game in every mode",
        Condition::PlayedEveryMode,
    ),
    // Secret mode
    Achievement::new(
        "secret_perfect",
        "Nothing Left Hidden",
        "Get All Correct! in the secret mode",
        Perfect(Mode::Secret),
    )
    .secret(),
    Achievement::new(
        "secret_unlocked",
        "Curiosity",
        "Unlock the secret mode",
        Condition::SecretModeUnlocked,
    )
    .secret(),
    Achievement::new(
        "secret_played",
        "Down the Rabbit Hole",
        "Play the secret mode",
        Condition::PlayedSecretMode,
    )
    .secret(),
];

/// Every achievement, in evaluation order.
pub fn catalog() -> &'static [Achievement] {
    &ACHIEVEMENTS
}

pub fn find(id: &str) -> Option<&'static Achievement> {
    ACHIEVEMENTS.iter().find(|achievement| achievement.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_ids_unique() {
        let ids: HashSet<&str> = catalog().iter().map(|a| a.id).collect();
        assert_eq!(ids.len(), catalog().len());
    }

    #[test]
    fn test_find() {
        assert_eq!(find("level_50").unwrap().name, "Veteran");
        assert!(find("level_1000").is_none());
    }

    #[test]
    fn test_secret_entries_are_gated() {
        for achievement in catalog() {
            let gated = achievement.visibility == Visibility::UntilSecretUnlocked;
            assert_eq!(gated, achievement.id.starts_with("secret_"), "{}", achievement.id);
        }
    }
}
