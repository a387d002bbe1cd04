//! Leaderboard ranking and best-score selection.
//!
//! - `rank` - orders one mode's records for a leaderboard page
//! - `select_best` / `best_per_player` - profile "best score" picks
//! - `RecordFilters` - equality filters shared by both

mod best;
mod filter;

pub use best::*;
pub use filter::*;

use std::cmp::Ordering;

use serde::Serialize;
use tracing::debug;

use crate::error::Result;
use crate::record::{Mode, ModeDescriptor, ModeFamily, ScoreRecord};

/// One leaderboard query: the resolved mode plus the active filters.
#[derive(Debug, Clone, PartialEq)]
pub struct RankRequest {
    pub mode: Mode,
    pub filters: RecordFilters,
}

impl RankRequest {
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            filters: RecordFilters::default(),
        }
    }

    /// Build a request for a leaderboard page and its sub-mode toggle.
    pub fn for_page(family: ModeFamily, toggle: Option<&str>) -> Result<Self> {
        Ok(Self::new(family.resolve(toggle)?))
    }

    pub fn with_filters(mut self, filters: RecordFilters) -> Self {
        self.filters = filters;
        self
    }
}

/// A record with its final leaderboard position (1 = best).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RankedEntry<'a> {
    pub rank: usize,
    #[serde(flatten)]
    pub record: &'a ScoreRecord,
}

/// Filter and sort `records` into leaderboard order.
///
/// Sort key: score descending, then grade (modes with grades), then time
/// ascending. A missing time counts as zero. The sort is stable, so fully
/// tied records keep their input order.
pub fn rank<'a>(records: &'a [ScoreRecord], request: &RankRequest) -> Vec<RankedEntry<'a>> {
    let descriptor = request.mode.descriptor();

    let mut filtered: Vec<&ScoreRecord> = records
        .iter()
        .filter(|record| request.filters.matches(record))
        .collect();
    filtered.sort_by(|a, b| leaderboard_order(descriptor, a, b));

    debug!(
        "Ranked {} of {} {} records",
        filtered.len(),
        records.len(),
        request.mode
    );

    filtered
        .into_iter()
        .enumerate()
        .map(|(index, record)| RankedEntry {
            rank: index + 1,
            record,
        })
        .collect()
}

/// `Ordering::Less` when `a` ranks ahead of `b`.
pub fn leaderboard_order(
    descriptor: &ModeDescriptor,
    a: &ScoreRecord,
    b: &ScoreRecord,
) -> Ordering {
    b.score_or_zero()
        .total_cmp(&a.score_or_zero())
        .then_with(|| match descriptor.grade_scale {
            Some(scale) if descriptor.has_line => scale.compare_records(b, a),
            Some(scale) => scale.compare(b.grade_str(), a.grade_str()),
            None => Ordering::Equal,
        })
        .then_with(|| a.elapsed_ms().cmp(&b.elapsed_ms()))
}
