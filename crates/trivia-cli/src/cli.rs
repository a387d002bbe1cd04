//! CLI argument definitions for trivia.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use trivia_core::{ClearType, FadingFilter, InputType, Mode};

#[derive(Parser)]
#[command(name = "trivia")]
#[command(about = "Trivia quiz leaderboards, levels and achievements", version)]
pub struct Args {
    /// Path to config file
    #[arg(short, long, global = true, default_value = "trivia.toml")]
    pub config: PathBuf,

    /// Score collections file (overrides the config)
    #[arg(long, global = true, env = "TRIVIA_DATA")]
    pub data: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show a mode's leaderboard
    Rank {
        /// Mode or leaderboard page (e.g. master, race, easy-race)
        #[arg(short, long)]
        mode: String,
        /// Sub-mode toggle on a page (race: normal/easy/hard, hell: hell/death)
        #[arg(long)]
        toggle: Option<String>,
        /// Only records played with this input type
        #[arg(long)]
        input: Option<InputType>,
        /// Only records played with this time multiplier
        #[arg(long)]
        time_multiplier: Option<f64>,
        /// Only records with this clear type
        #[arg(long)]
        clear_type: Option<ClearType>,
        /// Only records with this vanish setting ("off" or seconds)
        #[arg(long)]
        fading: Option<FadingFilter>,
        /// Output format
        #[arg(short, long, value_enum, default_value = "table")]
        format: RankFormat,
        /// Output file path
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Show a player's best record per mode
    Best {
        /// Player name
        #[arg(short, long)]
        player: String,
        /// Limit to one mode
        #[arg(short, long)]
        mode: Option<Mode>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show a player's level and experience
    Progress {
        /// Player name
        #[arg(short, long)]
        player: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Evaluate and store newly unlocked achievements
    Achievements {
        /// Player name
        #[arg(short, long)]
        player: String,
        /// Unlocked achievement file (overrides the config)
        #[arg(long, value_name = "FILE")]
        state: Option<PathBuf>,
        /// The player has unlocked the secret mode
        #[arg(long)]
        secret_unlocked: bool,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
pub enum RankFormat {
    Table,
    Tsv,
    Json,
}
