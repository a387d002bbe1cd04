use std::cmp::Ordering;
use std::collections::HashMap;

use serde::Serialize;

use crate::grade::GradeScale;
use crate::record::{BestRule, Mode, ModeDescriptor, ScoreRecord};

/// A player's representative record for one mode.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlayerBest<'a> {
    pub name: &'a str,
    pub record: &'a ScoreRecord,
}

/// Pick the record that represents a player's peak in `mode`.
///
/// Modes with a full-clear grade prefer the fastest full-clear run. Without
/// one, the fallback looks at score alone and never at grade; death is the
/// exception and breaks score ties by grade. Ties keep the earliest record.
pub fn select_best<'a, I>(mode: Mode, records: I) -> Option<&'a ScoreRecord>
where
    I: IntoIterator<Item = &'a ScoreRecord>,
{
    let records: Vec<&ScoreRecord> = records.into_iter().collect();
    let descriptor = mode.descriptor();

    match descriptor.best_rule {
        BestRule::MaxScore => first_max_by(&records, by_score),
        BestRule::FastestTopGrade => {
            fastest_top_grade(descriptor, &records).or_else(|| first_max_by(&records, by_score))
        }
        BestRule::FastestFullClear => fastest_top_grade(descriptor, &records)
            .or_else(|| first_max_by(&records, by_grade_points)),
        BestRule::MaxScoreThenGrade => first_max_by(&records, |a, b| {
            by_score(a, b)
                .then_with(|| GradeScale::Lexicographic.compare(a.grade_str(), b.grade_str()))
        }),
    }
}

/// Best record per player, in order of each player's first appearance.
pub fn best_per_player(mode: Mode, records: &[ScoreRecord]) -> Vec<PlayerBest<'_>> {
    let mut order: Vec<&str> = Vec::new();
    let mut groups: HashMap<&str, Vec<&ScoreRecord>> = HashMap::new();

    for record in records {
        let name = record.name.as_str();
        groups
            .entry(name)
            .or_insert_with(|| {
                order.push(name);
                Vec::new()
            })
            .push(record);
    }

    order
        .into_iter()
        .filter_map(|name| {
            let group = groups.remove(name)?;
            select_best(mode, group).map(|record| PlayerBest { name, record })
        })
        .collect()
}

fn fastest_top_grade<'a>(
    descriptor: &ModeDescriptor,
    records: &[&'a ScoreRecord],
) -> Option<&'a ScoreRecord> {
    records
        .iter()
        .copied()
        .filter(|record| {
            record
                .grade_str()
                .is_some_and(|grade| descriptor.top_grades.contains(&grade))
                && record.has_time()
        })
        .min_by_key(|record| record.elapsed_ms())
}

fn by_score(a: &ScoreRecord, b: &ScoreRecord) -> Ordering {
    a.score_or_zero().total_cmp(&b.score_or_zero())
}

fn by_grade_points(a: &ScoreRecord, b: &ScoreRecord) -> Ordering {
    a.grade_points_or_score().total_cmp(&b.grade_points_or_score())
}

/// Like `Iterator::max_by`, but the first of equal maxima wins.
fn first_max_by<'a, F>(records: &[&'a ScoreRecord], mut compare: F) -> Option<&'a ScoreRecord>
where
    F: FnMut(&ScoreRecord, &ScoreRecord) -> Ordering,
{
    let mut best: Option<&'a ScoreRecord> = None;
    for &record in records {
        match best {
            Some(current) if compare(record, current) != Ordering::Greater => {}
            _ => best = Some(record),
        }
    }
    best
}
