use crate::config::xp::{
    CLEAR_TYPE_BONUS, MASTER_GM_GREEN_BONUS, MASTER_GM_ORANGE_BONUS, MASTER_GREEN_LINE_BONUS,
    MASTER_ORANGE_LINE_BONUS, NORMAL_SCORE_MILESTONES, S_GRADE_BONUS_PER_STEP,
};
use crate::grade::trailing_number;
use crate::record::{ClearType, LineColor, ScoreRecord};

/// Base experience derived from a record's score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BaseXp {
    None,
    /// `floor(value / divisor)`
    Divide(f64),
    /// `floor(value * factor)`
    Multiply(f64),
}

impl BaseXp {
    pub fn apply(&self, value: f64) -> u64 {
        let raw = match self {
            Self::None => 0.0,
            Self::Divide(divisor) => value / divisor,
            Self::Multiply(factor) => value * factor,
        };
        if raw.is_finite() && raw > 0.0 {
            raw.floor() as u64
        } else {
            0
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GradeBonus {
    None,
    /// `top` earns `top_xp`; otherwise an `S<n>` grade earns `10 * n`.
    SGrades { top: &'static str, top_xp: u64 },
    Exact { grade: &'static str, xp: u64 },
    ContainsIgnoreCase { needle: &'static str, xp: u64 },
}

impl GradeBonus {
    pub fn apply(&self, grade: Option<&str>) -> u64 {
        let Some(grade) = grade else {
            return 0;
        };
        match *self {
            Self::None => 0,
            Self::SGrades { top, top_xp } => {
                if grade == top {
                    top_xp
                } else if grade.starts_with('S') {
                    let step = trailing_number(grade).unwrap_or(0).max(0) as u64;
                    step * S_GRADE_BONUS_PER_STEP
                } else {
                    0
                }
            }
            Self::Exact { grade: wanted, xp } => {
                if grade == wanted {
                    xp
                } else {
                    0
                }
            }
            Self::ContainsIgnoreCase { needle, xp } => {
                if grade.to_ascii_lowercase().contains(needle) {
                    xp
                } else {
                    0
                }
            }
        }
    }
}

/// Per-record experience formula for one mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct XpFormula {
    pub base: BaseXp,
    /// Feed `gradePoints` (falling back to `score`) into `base`.
    pub uses_grade_points: bool,
    pub grade_bonus: GradeBonus,
    pub score_milestones: bool,
    pub master_line_bonus: bool,
    pub clear_type_bonus: bool,
}

impl XpFormula {
    pub fn record_experience(&self, record: &ScoreRecord) -> u64 {
        let value = if self.uses_grade_points {
            record.grade_points_or_score()
        } else {
            record.score_or_zero()
        };

        let mut xp = self.base.apply(value);
        xp = xp.saturating_add(self.grade_bonus.apply(record.grade.as_deref()));
        if self.score_milestones {
            xp = xp.saturating_add(score_milestone_bonus(record.score_or_zero()));
        }
        if self.master_line_bonus {
            xp = xp.saturating_add(master_line_bonus(record));
        }
        if self.clear_type_bonus {
            xp = xp.saturating_add(clear_type_bonus(record.clear_type()));
        }
        xp
    }
}

/// Highest milestone met, not cumulative.
pub fn score_milestone_bonus(score: f64) -> u64 {
    NORMAL_SCORE_MILESTONES
        .iter()
        .find(|(threshold, _)| score >= *threshold)
        .map(|(_, xp)| *xp)
        .unwrap_or(0)
}

pub fn clear_type_bonus(clear_type: Option<ClearType>) -> u64 {
    let Some(clear_type) = clear_type else {
        return 0;
    };
    CLEAR_TYPE_BONUS
        .iter()
        .find(|(ct, _)| *ct == clear_type)
        .map(|(_, xp)| *xp)
        .unwrap_or(0)
}

/// GM line bonus plus the flat line bonus every master record gets.
///
/// A GM run on an orange line collects both, 150 + 50.
pub fn master_line_bonus(record: &ScoreRecord) -> u64 {
    let line = record.line_color();
    let is_gm = record.has_grade("GM");

    let gm_bonus = match line {
        LineColor::Orange if is_gm => MASTER_GM_ORANGE_BONUS,
        LineColor::Green if is_gm => MASTER_GM_GREEN_BONUS,
        _ => 0,
    };
    let flat_bonus = match line {
        LineColor::Orange => MASTER_ORANGE_LINE_BONUS,
        LineColor::Green => MASTER_GREEN_LINE_BONUS,
        LineColor::White => 0,
    };
    gm_bonus + flat_bonus
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Mode;

    fn xp(mode: Mode, record: &ScoreRecord) -> u64 {
        mode.descriptor().xp.record_experience(record)
    }

    #[test]
    fn test_base_xp_floors_and_clamps() {
        assert_eq!(BaseXp::Divide(500.0).apply(999.0), 1);
        assert_eq!(BaseXp::Multiply(0.5).apply(81.0), 40);
        assert_eq!(BaseXp::Multiply(8.0).apply(-3.0), 0);
        assert_eq!(BaseXp::Divide(100.0).apply(f64::NAN), 0);
        assert_eq!(BaseXp::None.apply(1000.0), 0);
    }

    #[test]
    fn test_easy_perfect_all_correct() {
        let record = ScoreRecord::new("p", 30.0).with_clear_type(ClearType::AllCorrect);
        assert_eq!(xp(Mode::Easy, &record), 150);
    }

    #[test]
    fn test_easy_clear_type_table() {
        let cases = [
            (ClearType::Failed, 0),
            (ClearType::Clear, 0),
            (ClearType::Hard, 25),
            (ClearType::Brave, 50),
            (ClearType::Absolute, 75),
            (ClearType::Catastrophy, 100),
            (ClearType::AllCorrect, 150),
        ];
        for (clear_type, bonus) in cases {
            let record = ScoreRecord::new("p", 1000.0).with_clear_type(clear_type);
            assert_eq!(xp(Mode::Easy, &record), 2 + bonus, "{:?}", clear_type);
        }
    }

    #[test]
    fn test_normal_milestones_use_highest_only() {
        assert_eq!(score_milestone_bonus(100.0), 25);
        assert_eq!(score_milestone_bonus(99.0), 15);
        assert_eq!(score_milestone_bonus(50.0), 10);
        assert_eq!(score_milestone_bonus(25.0), 5);
        assert_eq!(score_milestone_bonus(24.0), 0);

        let record = ScoreRecord::new("p", 80.0).with_clear_type(ClearType::Hard);
        // 40 base + 15 milestone + 25 clear
        assert_eq!(xp(Mode::Normal, &record), 80);
    }

    #[test]
    fn test_master_gm_orange_double_counts_line() {
        let record = ScoreRecord::new("p", 90.0)
            .with_grade("GM")
            .with_line(LineColor::Orange);
        assert_eq!(xp(Mode::Master, &record), 400);
    }

    #[test]
    fn test_master_line_bonuses() {
        let gm_green = ScoreRecord::new("p", 0.0)
            .with_grade("GM")
            .with_line(LineColor::Green);
        assert_eq!(xp(Mode::Master, &gm_green), 200 + 50 + 25);

        let s5_orange = ScoreRecord::new("p", 250.0)
            .with_grade("S5")
            .with_line(LineColor::Orange);
        assert_eq!(xp(Mode::Master, &s5_orange), 2 + 50 + 50);

        let numeric = ScoreRecord::new("p", 10.0).with_grade("3");
        assert_eq!(xp(Mode::Master, &numeric), 0);
    }

    #[test]
    fn test_hell_grade_bonus() {
        let top = ScoreRecord::new("p", 200.0).with_grade("Grand Master - Infinity");
        assert_eq!(xp(Mode::Hell, &top), 1600 + 200);

        let s12 = ScoreRecord::new("p", 10.0).with_grade("S12");
        assert_eq!(xp(Mode::Hell, &s12), 80 + 120);

        let invalid = ScoreRecord::new("p", 5.0).with_grade("Invalid");
        assert_eq!(xp(Mode::Hell, &invalid), 40);
    }

    #[test]
    fn test_race_variants() {
        let race = ScoreRecord::new("p", 100.0)
            .with_grade_points(1200.0)
            .with_grade("GM")
            .with_clear_type(ClearType::Brave);
        assert_eq!(xp(Mode::Race, &race), 10 + 250 + 50);
        // easy race ignores clear type
        assert_eq!(xp(Mode::EasyRace, &race), 8 + 150);
        assert_eq!(xp(Mode::HardRace, &race), 12 + 275);

        let no_points = ScoreRecord::new("p", 240.0);
        assert_eq!(xp(Mode::Race, &no_points), 2);
    }

    #[test]
    fn test_death_grade_contains_gm() {
        let lower = ScoreRecord::new("p", 10.0).with_grade("gm");
        assert_eq!(xp(Mode::Death, &lower), 90 + 180);

        let mixed = ScoreRecord::new("p", 0.0).with_grade("Death GM 2");
        assert_eq!(xp(Mode::Death, &mixed), 180);

        let plain = ScoreRecord::new("p", 1.0).with_grade("M");
        assert_eq!(xp(Mode::Death, &plain), 9);
    }

    #[test]
    fn test_missing_score_still_earns_bonuses() {
        let record = ScoreRecord {
            grade: Some("GM".to_string()),
            ..Default::default()
        };
        assert_eq!(xp(Mode::Master, &record), 200);
        assert_eq!(xp(Mode::Easy, &ScoreRecord::default()), 0);
    }

    #[test]
    fn test_secret_mode_earns_nothing() {
        let record = ScoreRecord::new("p", 500.0)
            .with_grade("S")
            .with_clear_type(ClearType::AllCorrect);
        assert_eq!(xp(Mode::Secret, &record), 0);
    }
}
