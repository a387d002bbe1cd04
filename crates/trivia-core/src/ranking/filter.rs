use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::ranking::{FADING_EPSILON, TIME_MULTIPLIER_EPSILON};
use crate::error::{Error, Result};
use crate::record::{ClearType, InputType, ScoreRecord};

/// Vanish-mode filter value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum FadingFilter {
    Off,
    Seconds(f64),
}

impl FromStr for FadingFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("off") {
            return Ok(Self::Off);
        }
        match trimmed.parse::<f64>() {
            Ok(seconds) if seconds.is_finite() && seconds >= 0.0 => Ok(Self::Seconds(seconds)),
            _ => Err(Error::InvalidFilter {
                field: "fading",
                value: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for FadingFilter {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<FadingFilter> for String {
    fn from(value: FadingFilter) -> Self {
        value.to_string()
    }
}

impl std::fmt::Display for FadingFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Off => write!(f, "off"),
            Self::Seconds(seconds) => write!(f, "{}", seconds),
        }
    }
}

/// Equality filters for a leaderboard view. `None` shows everything.
///
/// Records without modifiers count as a 1x time multiplier with vanish off.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecordFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<InputType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_multiplier: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clear_type: Option<ClearType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fading: Option<FadingFilter>,
}

impl RecordFilters {
    pub fn is_empty(&self) -> bool {
        self.input.is_none()
            && self.time_multiplier.is_none()
            && self.clear_type.is_none()
            && self.fading.is_none()
    }

    /// Fill unset fields from `defaults`.
    pub fn or(self, defaults: &RecordFilters) -> Self {
        Self {
            input: self.input.or(defaults.input),
            time_multiplier: self.time_multiplier.or(defaults.time_multiplier),
            clear_type: self.clear_type.or(defaults.clear_type),
            fading: self.fading.or(defaults.fading),
        }
    }

    pub fn matches(&self, record: &ScoreRecord) -> bool {
        if let Some(input) = self.input {
            if record.input_type() != input {
                return false;
            }
        }
        if let Some(multiplier) = self.time_multiplier {
            if (record.time_multiplier() - multiplier).abs() >= TIME_MULTIPLIER_EPSILON {
                return false;
            }
        }
        if let Some(clear_type) = self.clear_type {
            if record.clear_type() != Some(clear_type) {
                return false;
            }
        }
        match self.fading {
            None => true,
            Some(FadingFilter::Off) => record.fading_seconds().is_none(),
            Some(FadingFilter::Seconds(seconds)) => record
                .fading_seconds()
                .is_some_and(|actual| (actual - seconds).abs() < FADING_EPSILON),
        }
    }
}
