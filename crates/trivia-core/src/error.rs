use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Unknown mode: {0}")]
    UnknownMode(String),

    #[error("Invalid toggle {toggle:?} for {family} leaderboard")]
    InvalidToggle { family: String, toggle: String },

    #[error("Invalid filter value for {field}: {value}")]
    InvalidFilter { field: &'static str, value: String },

    #[error("Config parse error: {0}")]
    ConfigParseError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
