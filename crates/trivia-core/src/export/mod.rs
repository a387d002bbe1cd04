//! Export formats for leaderboards and progression.

mod console;

pub use console::*;

use crate::error::Result;
use crate::ranking::RankedEntry;
use crate::record::ScoreRecord;

const TSV_COLUMNS: [&str; 8] = [
    "Rank",
    "Name",
    "Score",
    "Grade",
    "Time",
    "ClearType",
    "InputType",
    "Date",
];

pub fn format_ranking_tsv_header() -> String {
    TSV_COLUMNS.join("\t")
}

pub fn format_ranking_tsv_row(entry: &RankedEntry<'_>) -> String {
    let record = entry.record;
    let values: Vec<String> = vec![
        entry.rank.to_string(),
        record.name.replace(['\t', '\n'], " "),
        format_score(record.score_or_zero()),
        or_dash(record.grade_str()),
        or_dash(record.time.as_deref().filter(|_| record.has_time())),
        or_dash(record.clear_type.as_deref()),
        record.input_type().as_str().to_string(),
        format_date(record),
    ];
    values.join("\t")
}

/// Leaderboard as TSV, header first.
pub fn format_ranking_tsv(entries: &[RankedEntry<'_>]) -> String {
    let mut lines = Vec::with_capacity(entries.len() + 1);
    lines.push(format_ranking_tsv_header());
    lines.extend(entries.iter().map(format_ranking_tsv_row));
    lines.join("\n")
}

pub fn format_ranking_json(entries: &[RankedEntry<'_>]) -> Result<String> {
    Ok(serde_json::to_string_pretty(entries)?)
}

/// Whole scores print without a fractional part.
pub fn format_score(score: f64) -> String {
    if score.fract() == 0.0 && score.abs() < 1e15 {
        format!("{}", score as i64)
    } else {
        format!("{}", score)
    }
}

pub fn format_date(record: &ScoreRecord) -> String {
    record
        .timestamp()
        .map(|dt| dt.to_rfc3339())
        .unwrap_or_else(|| "-".to_string())
}

fn or_dash(value: Option<&str>) -> String {
    value.unwrap_or("-").to_string()
}
