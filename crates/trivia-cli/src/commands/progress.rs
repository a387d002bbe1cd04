//! Progress command for a player's level and experience.

use anyhow::Result;
use serde_json::json;
use trivia_core::export::format_progression_console;
use trivia_core::{Config, PlayerProgression, experience_breakdown};

/// Run the progress command
pub fn run(config: &Config, player: &str, json: bool) -> Result<()> {
    let collections = super::load_collections(config)?.for_player(player);
    let breakdown = experience_breakdown(&collections);
    let progression = PlayerProgression::from_experience(breakdown.total());

    if json {
        let value = json!({
            "player": player,
            "progression": progression,
            "breakdown": breakdown,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        println!("{}", player);
        println!("{}", format_progression_console(&progression, &breakdown));
    }

    Ok(())
}
