//! Rank command for printing a leaderboard.

use std::path::Path;

use anyhow::{Context, Result};
use trivia_core::export::{format_ranking_console, format_ranking_json, format_ranking_tsv};
use trivia_core::{Config, Mode, ModeFamily, RankRequest, RecordFilters, rank};

use crate::cli::RankFormat;

/// Run the rank command
pub fn run(
    config: &Config,
    mode: &str,
    toggle: Option<&str>,
    filters: RecordFilters,
    format: RankFormat,
    output: Option<&Path>,
) -> Result<()> {
    let mode = resolve_mode(mode, toggle)?;
    let collections = super::load_collections(config)?;

    let request = RankRequest::new(mode).with_filters(filters.or(&config.filters));
    let entries = rank(collections.get(mode), &request);

    let content = match format {
        RankFormat::Table => format_ranking_console(mode, &entries),
        RankFormat::Tsv => format_ranking_tsv(&entries),
        RankFormat::Json => format_ranking_json(&entries)?,
    };

    if let Some(output_path) = output {
        std::fs::write(output_path, &content)
            .with_context(|| format!("Failed to write {:?}", output_path))?;
        eprintln!("Exported {} entries to: {}", entries.len(), output_path.display());
    } else {
        println!("{}", content);
    }

    Ok(())
}

/// A toggle selects a sub-mode of a leaderboard page; otherwise the name is a mode.
fn resolve_mode(name: &str, toggle: Option<&str>) -> Result<Mode> {
    let mode = match toggle {
        Some(toggle) => name.parse::<ModeFamily>()?.resolve(Some(toggle))?,
        None => name.parse::<Mode>()?,
    };
    Ok(mode)
}
