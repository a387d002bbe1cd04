use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::ranking::RecordFilters;

/// User settings for the command-line front end.
///
/// Format (TOML):
/// ```toml
/// data = "scores.json"
/// achievement_state = "achievements.json"
///
/// [filters]
/// input = "keyboard"
/// time_multiplier = 2.0
/// clear_type = "Hard"
/// fading = "0.5"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Score collection file, keyed by mode name.
    pub data: PathBuf,
    /// Previously unlocked achievement IDs.
    pub achievement_state: PathBuf,
    /// Filters applied to every leaderboard unless overridden.
    pub filters: RecordFilters,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data: PathBuf::from("scores.json"),
            achievement_state: PathBuf::from("achievements.json"),
            filters: RecordFilters::default(),
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;

        if let Some(multiplier) = config.filters.time_multiplier {
            if !(multiplier.is_finite() && multiplier > 0.0) {
                return Err(Error::ConfigParseError(format!(
                    "time_multiplier must be positive, got {}",
                    multiplier
                )));
            }
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ranking::FadingFilter;
    use crate::record::{ClearType, InputType};

    #[test]
    fn test_parse_config() {
        let content = r#"
data = "exports/scores.json"

[filters]
input = "controller"
time_multiplier = 2.0
clear_type = "All Correct!"
fading = "0.5"
"#;
        let config = Config::parse(content).unwrap();

        assert_eq!(config.data, PathBuf::from("exports/scores.json"));
        assert_eq!(config.achievement_state, PathBuf::from("achievements.json"));
        assert_eq!(config.filters.input, Some(InputType::Controller));
        assert_eq!(config.filters.time_multiplier, Some(2.0));
        assert_eq!(config.filters.clear_type, Some(ClearType::AllCorrect));
        assert_eq!(config.filters.fading, Some(FadingFilter::Seconds(0.5)));
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config, Config::default());
        assert!(config.filters.is_empty());
    }

    #[test]
    fn test_reject_non_positive_multiplier() {
        let content = "[filters]\ntime_multiplier = 0.0\n";
        assert!(matches!(
            Config::parse(content),
            Err(Error::ConfigParseError(_))
        ));
    }

    #[test]
    fn test_reject_malformed_toml() {
        assert!(matches!(Config::parse("data = ["), Err(Error::Toml(_))));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trivia.toml");
        fs::write(&path, "achievement_state = \"state.json\"\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.achievement_state, PathBuf::from("state.json"));
    }
}
