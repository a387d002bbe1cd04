//! CLI command implementations.
//!
//! This module contains the implementation of each CLI command.

pub mod achievements;
pub mod best;
pub mod progress;
pub mod rank;

use anyhow::{Context, Result};
use trivia_core::{Config, ScoreCollections};

/// Load the score collections named by the config.
fn load_collections(config: &Config) -> Result<ScoreCollections> {
    ScoreCollections::load(&config.data)
        .with_context(|| format!("Failed to load score collections from {:?}", config.data))
}
