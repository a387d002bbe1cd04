//! Grade orderings.
//!
//! Grades are free-form strings whose meaning depends on the mode family:
//! - `Master` - "9" (lowest) through "1", then "S1".."S9", with "GM" on top
//! - `Hell` - "S1".."S20" capped by "Grand Master - Infinity"
//! - `Lexicographic` - string order, case-insensitive first (normal, death, secret)
//!
//! Every ordering returns `Ordering::Greater` when the first grade is better.
//! Absent or empty grades sort below everything, including "Invalid".

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::record::{LineColor, ScoreRecord};

/// Master-mode grades from worst to best; index is the rank.
pub const MASTER_GRADE_ORDER: [&str; 18] = [
    "9", "8", "7", "6", "5", "4", "3", "2", "1", "S1", "S2", "S3", "S4", "S5", "S6", "S7", "S8",
    "S9",
];

pub const MASTER_TOP_GRADES: [&str; 2] = ["GM", "Grand Master"];
pub const HELL_TOP_GRADE: &str = "Grand Master - Infinity";
pub const INVALID_GRADE: &str = "Invalid";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GradeScale {
    Master,
    Hell,
    Lexicographic,
}

// (tier, value): 0 absent, 1 invalid, 2 unrecognized, 3 ranked, 4 top.
type RankKey = (u8, i64);

const ABSENT: RankKey = (0, 0);
const INVALID: RankKey = (1, 0);

impl GradeScale {
    /// Compare two grades alone.
    pub fn compare(&self, a: Option<&str>, b: Option<&str>) -> Ordering {
        match self {
            Self::Master => master_rank(a).cmp(&master_rank(b)),
            Self::Hell => hell_rank(a).cmp(&hell_rank(b)),
            Self::Lexicographic => lexicographic_cmp(normalize(a), normalize(b)),
        }
    }

    /// Compare grades, breaking equal grades by line color.
    pub fn compare_with_line(
        &self,
        a: Option<&str>,
        a_line: LineColor,
        b: Option<&str>,
        b_line: LineColor,
    ) -> Ordering {
        self.compare(a, b).then(a_line.cmp(&b_line))
    }

    pub fn compare_records(&self, a: &ScoreRecord, b: &ScoreRecord) -> Ordering {
        self.compare_with_line(a.grade_str(), a.line_color(), b.grade_str(), b.line_color())
    }
}

fn normalize(grade: Option<&str>) -> Option<&str> {
    grade.map(str::trim).filter(|g| !g.is_empty())
}

/// Case-insensitive first, so "gm" and "GM" sit together; bytes break the tie.
fn lexicographic_cmp(a: Option<&str>, b: Option<&str>) -> Ordering {
    let a = a.unwrap_or("");
    let b = b.unwrap_or("");
    a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| a.cmp(b))
}

/// Integer formed by the trailing ASCII digits, e.g. `"S12"` -> 12.
pub fn trailing_number(grade: &str) -> Option<i64> {
    let digits_start = grade
        .char_indices()
        .rev()
        .take_while(|(_, c)| c.is_ascii_digit())
        .last()
        .map(|(i, _)| i)?;
    grade[digits_start..].parse().ok()
}

fn master_rank(grade: Option<&str>) -> RankKey {
    let Some(grade) = normalize(grade) else {
        return ABSENT;
    };
    if MASTER_TOP_GRADES.contains(&grade) {
        return (4, 0);
    }
    if grade == INVALID_GRADE {
        return INVALID;
    }
    if let Some(index) = MASTER_GRADE_ORDER.iter().position(|g| *g == grade) {
        return (3, index as i64);
    }
    // Off-table grades extend the same scale: "10" sits below "9", "S10" above "S9".
    // Anything that would land on the table ("0", "S0", negatives) is unrecognized.
    if let Ok(n) = grade.parse::<i64>() {
        if n > 9 {
            return (3, 9 - n);
        }
        return (2, 0);
    }
    if let Some(n) = grade.strip_prefix('S').and_then(|rest| rest.parse::<i64>().ok()) {
        if n > 9 {
            return (3, n.saturating_add(8));
        }
    }
    (2, 0)
}

fn hell_rank(grade: Option<&str>) -> RankKey {
    let Some(grade) = normalize(grade) else {
        return ABSENT;
    };
    if grade == HELL_TOP_GRADE {
        return (3, 0);
    }
    if grade == INVALID_GRADE {
        return INVALID;
    }
    if grade.starts_with('S') {
        return (2, trailing_number(grade).unwrap_or(0));
    }
    (2, 0)
}
