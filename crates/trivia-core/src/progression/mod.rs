//! Experience and level progression.
//!
//! A player's experience is the sum, over every mode, of a per-record
//! formula plus one-time bonuses for milestones reached at least once.
//! The level is derived from that total and nothing is carried between calls.

mod level;
mod xp;

pub use level::*;
pub use xp::*;

use serde::Serialize;
use tracing::debug;

use crate::record::{Mode, ScoreCollections, ScoreRecord};

/// Condition checked against each record for a one-time bonus.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Milestone {
    ScoreEquals(f64),
    ScoreAtLeast(f64),
    GradeEquals(&'static str),
    /// Grade points, falling back to score.
    GradePointsAtLeast(f64),
}

impl Milestone {
    pub fn reached_by(&self, record: &ScoreRecord) -> bool {
        match *self {
            Self::ScoreEquals(score) => record.score_or_zero() == score,
            Self::ScoreAtLeast(score) => record.score_or_zero() >= score,
            Self::GradeEquals(grade) => record.has_grade(grade),
            Self::GradePointsAtLeast(points) => record.grade_points_or_score() >= points,
        }
    }
}

/// Bonus granted once per player, however many records qualify.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OneTimeBonus {
    pub id: &'static str,
    pub milestone: Milestone,
    pub xp: u64,
}

/// Experience earned in one mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModeExperience {
    pub mode: Mode,
    pub records: usize,
    pub record_xp: u64,
    pub bonus_xp: u64,
    /// IDs of the one-time bonuses awarded.
    pub bonuses: Vec<&'static str>,
}

impl ModeExperience {
    pub fn total(&self) -> u64 {
        self.record_xp.saturating_add(self.bonus_xp)
    }
}

/// Per-mode experience totals the progression is folded from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExperienceBreakdown {
    pub modes: Vec<ModeExperience>,
}

impl ExperienceBreakdown {
    pub fn total(&self) -> u64 {
        self.modes
            .iter()
            .map(ModeExperience::total)
            .fold(0, u64::saturating_add)
    }

    pub fn get(&self, mode: Mode) -> Option<&ModeExperience> {
        self.modes.iter().find(|entry| entry.mode == mode)
    }
}

/// Experience earned from one mode's records.
pub fn mode_experience(mode: Mode, records: &[ScoreRecord]) -> ModeExperience {
    let descriptor = mode.descriptor();

    let record_xp = records
        .iter()
        .map(|record| descriptor.xp.record_experience(record))
        .fold(0, u64::saturating_add);

    let mut bonus_xp: u64 = 0;
    let mut bonuses = Vec::new();
    for bonus in descriptor.one_time_bonuses {
        if records.iter().any(|record| bonus.milestone.reached_by(record)) {
            bonus_xp = bonus_xp.saturating_add(bonus.xp);
            bonuses.push(bonus.id);
        }
    }

    ModeExperience {
        mode,
        records: records.len(),
        record_xp,
        bonus_xp,
        bonuses,
    }
}

/// Experience per mode, in mode order, for every mode with records.
pub fn experience_breakdown(collections: &ScoreCollections) -> ExperienceBreakdown {
    let modes: Vec<ModeExperience> = collections
        .iter()
        .map(|(mode, records)| mode_experience(mode, records))
        .collect();

    for entry in &modes {
        debug!(
            "{}: {} records, {} XP (+{} bonus {:?})",
            entry.mode, entry.records, entry.record_xp, entry.bonus_xp, entry.bonuses
        );
    }

    ExperienceBreakdown { modes }
}

/// Fold a player's full history into level and experience.
pub fn compute_progression(collections: &ScoreCollections) -> PlayerProgression {
    PlayerProgression::from_experience(experience_breakdown(collections).total())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{ClearType, LineColor};

    #[test]
    fn test_empty_collections() {
        let progression = compute_progression(&ScoreCollections::new());
        assert_eq!(progression.level, 1);
        assert_eq!(progression.experience, 0);
    }

    #[test]
    fn test_easy_perfect_run() {
        let collections = ScoreCollections::new().with(
            Mode::Easy,
            vec![ScoreRecord::new("p", 30.0).with_clear_type(ClearType::AllCorrect)],
        );
        let breakdown = experience_breakdown(&collections);
        let easy = breakdown.get(Mode::Easy).unwrap();

        assert_eq!(easy.record_xp, 150);
        assert_eq!(easy.bonuses, ["easy_perfect"]);
        assert_eq!(easy.total(), 165);
        assert_eq!(compute_progression(&collections).level, 3);
    }

    #[test]
    fn test_one_time_bonus_awarded_once() {
        let records = vec![ScoreRecord::new("p", 90.0); 3];
        let master = mode_experience(Mode::Master, &records);

        assert_eq!(master.bonus_xp, 75);
        assert_eq!(master.record_xp, 0);
    }

    #[test]
    fn test_master_gm_orange() {
        let records = vec![
            ScoreRecord::new("p", 90.0)
                .with_grade("GM")
                .with_line(LineColor::Orange),
        ];
        let master = mode_experience(Mode::Master, &records);

        assert_eq!(master.record_xp, 400);
        assert_eq!(master.bonus_xp, 75);
    }

    #[test]
    fn test_huge_scores_saturate() {
        let hell = vec![ScoreRecord::new("p", 1e300).with_grade("S1")];
        assert_eq!(mode_experience(Mode::Hell, &hell).record_xp, u64::MAX);

        let death = vec![ScoreRecord::new("p", 2e18), ScoreRecord::new("p", 2e18)];
        let experience = mode_experience(Mode::Death, &death);
        assert_eq!(experience.record_xp, u64::MAX);
        assert_eq!(experience.total(), u64::MAX);

        let collections = ScoreCollections::new()
            .with(Mode::Hell, hell)
            .with(Mode::Death, death);
        let progression = compute_progression(&collections);
        assert_eq!(progression.experience, u64::MAX);
        assert!(progression.level > 1);
    }

    #[test]
    fn test_race_bonuses() {
        let records = vec![
            ScoreRecord::new("p", 100.0).with_grade("GM"),
            ScoreRecord::new("p", 50.0).with_grade_points(1_246_000.0),
        ];
        let race = mode_experience(Mode::Race, &records);

        assert_eq!(race.bonuses, ["race_full_clear", "race_grade_points"]);
        assert_eq!(race.bonus_xp, 130);
        // 0 + 250 for the GM run, 10383 for the grade points run
        assert_eq!(race.record_xp, 250 + 10_383);
    }

    #[test]
    fn test_death_threshold_bonus() {
        let records = vec![ScoreRecord::new("p", 99.0), ScoreRecord::new("p", 100.0)];
        let death = mode_experience(Mode::Death, &records);

        assert_eq!(death.bonus_xp, 120);
        assert_eq!(death.record_xp, 891 + 900);
    }

    #[test]
    fn test_sum_across_modes() {
        let collections = ScoreCollections::new()
            .with(Mode::Normal, vec![ScoreRecord::new("p", 50.0)])
            .with(Mode::Hell, vec![ScoreRecord::new("p", 3.0).with_grade("S2")])
            .with(Mode::Secret, vec![ScoreRecord::new("p", 999.0)]);
        let progression = compute_progression(&collections);

        // normal 25 + 10, hell 24 + 20, secret nothing
        assert_eq!(progression.experience, 79);
        assert_eq!(progression.level, 2);
    }

    #[test]
    fn test_compute_progression_is_idempotent() {
        let collections = ScoreCollections::new()
            .with(Mode::Easy, vec![ScoreRecord::new("p", 700.0)])
            .with(
                Mode::HardRace,
                vec![ScoreRecord::new("p", 300.0).with_grade("GM")],
            );
        assert_eq!(
            compute_progression(&collections),
            compute_progression(&collections)
        );
    }

    #[test]
    fn test_level_monotonic_in_experience() {
        let mut records = Vec::new();
        let mut previous = compute_progression(&ScoreCollections::new());
        for score in 0..60 {
            records.push(ScoreRecord::new("p", f64::from(score)));
            let collections = ScoreCollections::new().with(Mode::Normal, records.clone());
            let progression = compute_progression(&collections);
            assert!(progression.experience >= previous.experience);
            assert!(progression.level >= previous.level);
            previous = progression;
        }
    }
}
