use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator, IntoStaticStr};

use crate::error::{Error, Result};
use crate::grade::GradeScale;
use crate::progression::{BaseXp, GradeBonus, Milestone, OneTimeBonus, XpFormula};

/// Game mode a score record was played in.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    EnumIter,
    IntoStaticStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Mode {
    Easy,
    Normal,
    Master,
    Hell,
    Race,
    EasyRace,
    HardRace,
    Death,
    Secret,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        self.into()
    }

    pub fn all() -> impl Iterator<Item = Mode> {
        Self::iter()
    }

    pub fn descriptor(&self) -> &'static ModeDescriptor {
        &MODE_TABLE[*self as usize]
    }

    pub fn family(&self) -> ModeFamily {
        match self {
            Self::Easy => ModeFamily::Easy,
            Self::Normal => ModeFamily::Normal,
            Self::Master => ModeFamily::Master,
            Self::Hell | Self::Death => ModeFamily::Hell,
            Self::Race | Self::EasyRace | Self::HardRace => ModeFamily::Race,
            Self::Secret => ModeFamily::Secret,
        }
    }

    pub fn is_race(&self) -> bool {
        self.family() == ModeFamily::Race
    }
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::iter()
            .find(|mode| mode.as_str() == wanted)
            .ok_or_else(|| Error::UnknownMode(s.to_string()))
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A leaderboard page; the race and hell pages carry a sub-mode toggle.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ModeFamily {
    Easy,
    Normal,
    Master,
    Hell,
    Race,
    Secret,
}

impl ModeFamily {
    pub fn as_str(&self) -> &'static str {
        self.into()
    }

    /// Toggle names accepted by this page, default first.
    pub fn toggles(&self) -> &'static [&'static str] {
        match self {
            Self::Race => &["normal", "easy", "hard"],
            Self::Hell => &["hell", "death"],
            _ => &[],
        }
    }

    /// Resolve the active toggle to a concrete mode. `None` selects the default.
    pub fn resolve(&self, toggle: Option<&str>) -> Result<Mode> {
        let toggle = toggle.map(|t| t.trim().to_ascii_lowercase());
        let mode = match (self, toggle.as_deref()) {
            (Self::Easy, None) => Some(Mode::Easy),
            (Self::Normal, None) => Some(Mode::Normal),
            (Self::Master, None) => Some(Mode::Master),
            (Self::Secret, None) => Some(Mode::Secret),
            (Self::Hell, None | Some("hell")) => Some(Mode::Hell),
            (Self::Hell, Some("death")) => Some(Mode::Death),
            (Self::Race, None | Some("normal")) => Some(Mode::Race),
            (Self::Race, Some("easy")) => Some(Mode::EasyRace),
            (Self::Race, Some("hard")) => Some(Mode::HardRace),
            _ => None,
        };

        mode.ok_or_else(|| Error::InvalidToggle {
            family: self.as_str().to_string(),
            toggle: toggle.unwrap_or_default(),
        })
    }
}

impl FromStr for ModeFamily {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::iter()
            .find(|family| family.as_str() == wanted)
            .ok_or_else(|| Error::UnknownMode(s.to_string()))
    }
}

/// How the profile view picks a player's single best record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BestRule {
    /// Highest score only.
    MaxScore,
    /// Fastest time among top-grade runs, else highest score.
    FastestTopGrade,
    /// Like `FastestTopGrade`, but the fallback prefers grade points over score.
    FastestFullClear,
    /// Highest score, then lexicographic grade.
    MaxScoreThenGrade,
}

/// Per-mode strategy consumed by the ranker, best-score selector and
/// progression engine.
#[derive(Debug)]
pub struct ModeDescriptor {
    pub mode: Mode,
    /// Ordering used on the leaderboard when scores tie. `None` skips grades.
    pub grade_scale: Option<GradeScale>,
    pub has_line: bool,
    /// Grades counted as a full clear for best-score selection.
    pub top_grades: &'static [&'static str],
    pub best_rule: BestRule,
    pub xp: XpFormula,
    pub one_time_bonuses: &'static [OneTimeBonus],
}

const fn no_xp() -> XpFormula {
    XpFormula {
        base: BaseXp::None,
        uses_grade_points: false,
        grade_bonus: GradeBonus::None,
        score_milestones: false,
        master_line_bonus: false,
        clear_type_bonus: false,
    }
}

/// Indexed by `Mode as usize`.
static MODE_TABLE: [ModeDescriptor; 9] = [
    ModeDescriptor {
        mode: Mode::Easy,
        grade_scale: None,
        has_line: false,
        top_grades: &[],
        best_rule: BestRule::MaxScore,
        xp: XpFormula {
            base: BaseXp::Divide(500.0),
            clear_type_bonus: true,
            ..no_xp()
        },
        one_time_bonuses: &[OneTimeBonus {
            id: "easy_perfect",
            milestone: Milestone::ScoreEquals(30.0),
            xp: 15,
        }],
    },
    ModeDescriptor {
        mode: Mode::Normal,
        grade_scale: Some(GradeScale::Lexicographic),
        has_line: true,
        top_grades: &["Grand Master"],
        best_rule: BestRule::FastestTopGrade,
        xp: XpFormula {
            base: BaseXp::Multiply(0.5),
            score_milestones: true,
            clear_type_bonus: true,
            ..no_xp()
        },
        one_time_bonuses: &[],
    },
    ModeDescriptor {
        mode: Mode::Master,
        grade_scale: Some(GradeScale::Master),
        has_line: true,
        top_grades: &["GM", "Grand Master"],
        best_rule: BestRule::FastestTopGrade,
        xp: XpFormula {
            base: BaseXp::Divide(100.0),
            grade_bonus: GradeBonus::SGrades {
                top: "GM",
                top_xp: 200,
            },
            master_line_bonus: true,
            clear_type_bonus: true,
            ..no_xp()
        },
        one_time_bonuses: &[OneTimeBonus {
            id: "master_perfect",
            milestone: Milestone::ScoreEquals(90.0),
            xp: 75,
        }],
    },
    ModeDescriptor {
        mode: Mode::Hell,
        grade_scale: Some(GradeScale::Hell),
        has_line: true,
        top_grades: &["Grand Master - Infinity"],
        best_rule: BestRule::FastestTopGrade,
        xp: XpFormula {
            base: BaseXp::Multiply(8.0),
            grade_bonus: GradeBonus::SGrades {
                top: "Grand Master - Infinity",
                top_xp: 200,
            },
            clear_type_bonus: true,
            ..no_xp()
        },
        one_time_bonuses: &[OneTimeBonus {
            id: "hell_perfect",
            milestone: Milestone::ScoreEquals(200.0),
            xp: 150,
        }],
    },
    ModeDescriptor {
        mode: Mode::Race,
        grade_scale: None,
        has_line: false,
        top_grades: &["GM"],
        best_rule: BestRule::FastestFullClear,
        xp: XpFormula {
            base: BaseXp::Divide(120.0),
            uses_grade_points: true,
            grade_bonus: GradeBonus::Exact { grade: "GM", xp: 250 },
            clear_type_bonus: true,
            ..no_xp()
        },
        one_time_bonuses: &[
            OneTimeBonus {
                id: "race_full_clear",
                milestone: Milestone::GradeEquals("GM"),
                xp: 80,
            },
            OneTimeBonus {
                id: "race_grade_points",
                milestone: Milestone::GradePointsAtLeast(1_246_000.0),
                xp: 50,
            },
        ],
    },
    ModeDescriptor {
        mode: Mode::EasyRace,
        grade_scale: None,
        has_line: false,
        top_grades: &["GM"],
        best_rule: BestRule::FastestFullClear,
        xp: XpFormula {
            base: BaseXp::Divide(150.0),
            uses_grade_points: true,
            grade_bonus: GradeBonus::Exact { grade: "GM", xp: 150 },
            ..no_xp()
        },
        one_time_bonuses: &[OneTimeBonus {
            id: "easy_race_full_clear",
            milestone: Milestone::GradeEquals("GM"),
            xp: 60,
        }],
    },
    ModeDescriptor {
        mode: Mode::HardRace,
        grade_scale: None,
        has_line: false,
        top_grades: &["GM"],
        best_rule: BestRule::FastestFullClear,
        xp: XpFormula {
            base: BaseXp::Divide(100.0),
            uses_grade_points: true,
            grade_bonus: GradeBonus::Exact { grade: "GM", xp: 275 },
            ..no_xp()
        },
        one_time_bonuses: &[OneTimeBonus {
            id: "hard_race_full_clear",
            milestone: Milestone::GradeEquals("GM"),
            xp: 90,
        }],
    },
    ModeDescriptor {
        mode: Mode::Death,
        grade_scale: Some(GradeScale::Lexicographic),
        has_line: false,
        top_grades: &[],
        best_rule: BestRule::MaxScoreThenGrade,
        xp: XpFormula {
            base: BaseXp::Multiply(9.0),
            grade_bonus: GradeBonus::ContainsIgnoreCase { needle: "gm", xp: 180 },
            ..no_xp()
        },
        one_time_bonuses: &[OneTimeBonus {
            id: "death_hundred",
            milestone: Milestone::ScoreAtLeast(100.0),
            xp: 120,
        }],
    },
    ModeDescriptor {
        mode: Mode::Secret,
        grade_scale: Some(GradeScale::Lexicographic),
        has_line: false,
        top_grades: &[],
        best_rule: BestRule::MaxScore,
        xp: no_xp(),
        one_time_bonuses: &[],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_table_is_indexed_by_mode() {
        for mode in Mode::all() {
            assert_eq!(mode.descriptor().mode, mode);
        }
    }

    #[test]
    fn test_mode_wire_names() {
        assert_eq!(Mode::EasyRace.as_str(), "easy-race");
        assert_eq!("hard-race".parse::<Mode>().unwrap(), Mode::HardRace);
        assert_eq!("HARD_RACE".parse::<Mode>().unwrap(), Mode::HardRace);
        assert_eq!("Master".parse::<Mode>().unwrap(), Mode::Master);
        assert!(matches!("zen".parse::<Mode>(), Err(Error::UnknownMode(_))));
    }

    #[test]
    fn test_mode_serde_names() {
        let json = serde_json::to_string(&Mode::EasyRace).unwrap();
        assert_eq!(json, "\"easy-race\"");
        let mode: Mode = serde_json::from_str("\"death\"").unwrap();
        assert_eq!(mode, Mode::Death);
    }

    #[test]
    fn test_family_toggles_resolve() {
        assert_eq!(ModeFamily::Race.resolve(None).unwrap(), Mode::Race);
        assert_eq!(ModeFamily::Race.resolve(Some("easy")).unwrap(), Mode::EasyRace);
        assert_eq!(ModeFamily::Race.resolve(Some("Hard")).unwrap(), Mode::HardRace);
        assert_eq!(ModeFamily::Hell.resolve(None).unwrap(), Mode::Hell);
        assert_eq!(ModeFamily::Hell.resolve(Some("death")).unwrap(), Mode::Death);
        assert_eq!(ModeFamily::Master.resolve(None).unwrap(), Mode::Master);
    }

    #[test]
    fn test_family_rejects_foreign_toggle() {
        assert!(matches!(
            ModeFamily::Master.resolve(Some("death")),
            Err(Error::InvalidToggle { .. })
        ));
        assert!(ModeFamily::Hell.resolve(Some("easy")).is_err());
    }

    #[test]
    fn test_every_mode_round_trips_through_its_family() {
        for mode in Mode::all() {
            let family = mode.family();
            let resolved = if family.toggles().is_empty() {
                family.resolve(None).unwrap()
            } else {
                family
                    .toggles()
                    .iter()
                    .map(|t| family.resolve(Some(t)).unwrap())
                    .find(|m| *m == mode)
                    .unwrap()
            };
            assert_eq!(resolved, mode);
        }
    }
}
