mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use cli::{Args, Command};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use trivia_core::{Config, RecordFilters};

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging (warn unless RUST_LOG says otherwise)
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("trivia_cli=warn,trivia_core=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let mut config = match Config::load(&args.config) {
        Ok(c) => {
            info!("Loaded config from {:?}", args.config);
            c
        }
        Err(e) => {
            warn!("Failed to load config {:?}: {}, using defaults", args.config, e);
            Config::default()
        }
    };
    if let Some(data) = args.data {
        config.data = data;
    }

    match args.command {
        Command::Rank {
            mode,
            toggle,
            input,
            time_multiplier,
            clear_type,
            fading,
            format,
            output,
        } => {
            let filters = RecordFilters {
                input,
                time_multiplier,
                clear_type,
                fading,
            };
            commands::rank::run(
                &config,
                &mode,
                toggle.as_deref(),
                filters,
                format,
                output.as_deref(),
            )
        }
        Command::Best { player, mode, json } => commands::best::run(&config, &player, mode, json),
        Command::Progress { player, json } => commands::progress::run(&config, &player, json),
        Command::Achievements {
            player,
            state,
            secret_unlocked,
        } => {
            if let Some(state) = state {
                config.achievement_state = state;
            }
            commands::achievements::run(&config, &player, secret_unlocked)
        }
    }
}
