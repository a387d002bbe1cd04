//! Achievements command: evaluate, report and persist newly unlocked achievements.

use anyhow::{Context, Result};
use tracing::info;
use trivia_core::achievement::find;
use trivia_core::{AchievementData, AchievementState, Config, compute_progression, evaluate};

/// Run the achievements command
pub fn run(config: &Config, player: &str, secret_unlocked: bool) -> Result<()> {
    let collections = super::load_collections(config)?.for_player(player);
    let progression = compute_progression(&collections);
    let data = AchievementData::from_collections(&collections, progression, secret_unlocked);

    let path = &config.achievement_state;
    let mut state = AchievementState::load(path)
        .with_context(|| format!("Failed to load achievement state from {:?}", path))?;

    let newly = evaluate(&data, &state.to_set());
    if newly.is_empty() {
        println!("No new achievements for {} ({} unlocked)", player, state.ids().len());
        return Ok(());
    }

    println!("New achievements for {}:", player);
    for id in &newly {
        match find(id) {
            Some(achievement) => {
                println!("  {} - {}", achievement.name, achievement.description)
            }
            None => println!("  {}", id),
        }
    }

    state.record(&newly);
    state
        .save(path)
        .with_context(|| format!("Failed to save achievement state to {:?}", path))?;
    info!("Saved {} unlocked achievements to {:?}", state.ids().len(), path);

    Ok(())
}
