use crate::config::ranking::{FADING_EPSILON, TIME_MULTIPLIER_EPSILON};
use crate::grade::MASTER_TOP_GRADES;
use crate::record::{ClearType, Mode, ScoreRecord};

use super::AchievementData;

/// Run modifier an achievement can require.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RunModifier {
    /// Time multiplier of 2x.
    DoubleTime,
    /// Answers vanish after half a second.
    QuickVanish,
    /// At most one life.
    OneLife,
}

impl RunModifier {
    pub fn applies_to(&self, record: &ScoreRecord) -> bool {
        match self {
            Self::DoubleTime => (record.time_multiplier() - 2.0).abs() < TIME_MULTIPLIER_EPSILON,
            Self::QuickVanish => record
                .fading_seconds()
                .is_some_and(|seconds| (seconds - 0.5).abs() < FADING_EPSILON),
            Self::OneLife => record.lives().is_some_and(|lives| lives <= 1.0),
        }
    }
}

/// Predicate behind one achievement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Condition {
    /// A perfect run in the mode.
    Perfect(Mode),
    /// A run in the mode cleared at this clear-type tier or better, or a
    /// cleared run played with at most this many lives.
    ClearWithLives(Mode, f64, ClearType),
    /// A cleared run in the mode with the modifier active.
    ClearWithModifier(Mode, RunModifier),
    /// One cleared run, in any mode, with every modifier active at once.
    ClearWithAll(&'static [RunModifier]),
    LevelAtLeast(u32),
    /// At least one game in each of the main modes.
    PlayedEveryMode,
    SecretModeUnlocked,
    PlayedSecretMode,
}

impl Condition {
    pub fn holds(&self, data: &AchievementData<'_>) -> bool {
        match *self {
            Self::Perfect(mode) => data.scores(mode).iter().any(|r| is_perfect(mode, r)),
            Self::ClearWithLives(mode, lives, tier) => data.scores(mode).iter().any(|r| {
                r.clear_type().is_some_and(|ct| ct >= tier)
                    || (r.is_cleared() && r.lives().is_some_and(|l| l <= lives))
            }),
            Self::ClearWithModifier(mode, modifier) => data
                .scores(mode)
                .iter()
                .any(|r| r.is_cleared() && modifier.applies_to(r)),
            Self::ClearWithAll(modifiers) => data
                .all_records()
                .any(|r| r.is_cleared() && modifiers.iter().all(|m| m.applies_to(r))),
            Self::LevelAtLeast(level) => data.player.level >= level,
            Self::PlayedEveryMode => AchievementData::MAIN_MODES
                .iter()
                .all(|mode| !data.scores(*mode).is_empty()),
            Self::SecretModeUnlocked => data.has_unlocked_secret_mode,
            Self::PlayedSecretMode => !data.scores(Mode::Secret).is_empty(),
        }
    }
}

fn is_perfect(mode: Mode, record: &ScoreRecord) -> bool {
    match mode {
        Mode::Easy => record.score_or_zero() >= 30.0,
        Mode::Normal => record.score_or_zero() >= 100.0,
        Mode::Master => record
            .grade_str()
            .is_some_and(|grade| MASTER_TOP_GRADES.contains(&grade)),
        Mode::Hell => record.score_or_zero() >= 200.0,
        Mode::Race | Mode::EasyRace | Mode::HardRace => record.has_grade("GM"),
        Mode::Death => record.score_or_zero() >= 200.0,
        Mode::Secret => record.clear_type() == Some(ClearType::AllCorrect),
    }
}

/// When an achievement is kept out of view (and out of reach).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Always,
    UntilSecretUnlocked,
}

impl Visibility {
    pub fn is_hidden(&self, data: &AchievementData<'_>) -> bool {
        match self {
            Self::Always => false,
            Self::UntilSecretUnlocked => !data.has_unlocked_secret_mode,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Modifiers;

    fn run(lives: Option<f64>, multiplier: Option<f64>, fading: Option<&str>) -> ScoreRecord {
        ScoreRecord::new("p", 10.0)
            .with_clear_type(ClearType::Clear)
            .with_modifiers(Modifiers {
                lives,
                time_multiplier: multiplier,
                fading_mode: fading.map(str::to_string),
                ..Default::default()
            })
    }

    #[test]
    fn test_modifiers_apply() {
        let record = run(Some(1.0), Some(2.0), Some("0.5"));
        assert!(RunModifier::DoubleTime.applies_to(&record));
        assert!(RunModifier::QuickVanish.applies_to(&record));
        assert!(RunModifier::OneLife.applies_to(&record));

        let plain = run(Some(3.0), None, Some("off"));
        assert!(!RunModifier::DoubleTime.applies_to(&plain));
        assert!(!RunModifier::QuickVanish.applies_to(&plain));
        assert!(!RunModifier::OneLife.applies_to(&plain));
    }

    #[test]
    fn test_perfect_rules() {
        assert!(is_perfect(Mode::Easy, &ScoreRecord::new("p", 30.0)));
        assert!(!is_perfect(Mode::Easy, &ScoreRecord::new("p", 29.0)));
        assert!(is_perfect(Mode::Master, &ScoreRecord::new("p", 0.0).with_grade("Grand Master")));
        assert!(!is_perfect(Mode::Master, &ScoreRecord::new("p", 90.0).with_grade("S9")));
        assert!(is_perfect(Mode::Race, &ScoreRecord::new("p", 0.0).with_grade("GM")));
        assert!(is_perfect(
            Mode::Secret,
            &ScoreRecord::new("p", 0.0).with_clear_type(ClearType::AllCorrect)
        ));
    }
}
