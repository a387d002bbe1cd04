//! Best command for a player's best record per mode.

use std::fmt::Write as _;

use anyhow::Result;
use serde_json::json;
use trivia_core::export::format_score;
use trivia_core::{Config, Mode, select_best};

/// Run the best command
pub fn run(config: &Config, player: &str, mode: Option<Mode>, json: bool) -> Result<()> {
    let collections = super::load_collections(config)?.for_player(player);

    let modes: Vec<Mode> = match mode {
        Some(mode) => vec![mode],
        None => Mode::all().collect(),
    };

    let bests: Vec<_> = modes
        .into_iter()
        .filter_map(|mode| select_best(mode, collections.get(mode)).map(|best| (mode, best)))
        .collect();

    if json {
        let best: serde_json::Map<String, serde_json::Value> = bests
            .iter()
            .map(|(mode, best)| serde_json::to_value(best).map(|v| (mode.to_string(), v)))
            .collect::<serde_json::Result<_>>()?;
        let value = json!({ "player": player, "best": best });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    if bests.is_empty() {
        println!("No records for {}", player);
        return Ok(());
    }

    println!("Best records for {}", player);
    for (mode, best) in &bests {
        let mut line = format!(
            "  {:<10} {:>8}",
            mode.as_str(),
            format_score(best.score_or_zero())
        );
        if let Some(grade) = best.grade_str() {
            let _ = write!(line, "  {}", grade);
        }
        if let Some(time) = best.time.as_deref().filter(|_| best.has_time()) {
            let _ = write!(line, "  {}", time);
        }
        println!("{}", line);
    }

    Ok(())
}
