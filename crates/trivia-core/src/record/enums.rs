use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumString, IntoStaticStr};

/// Secondary tier earned alongside a grade, used only to break grade ties.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Default,
    EnumString,
    IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum LineColor {
    #[default]
    #[strum(serialize = "white")]
    White,
    #[strum(serialize = "green")]
    Green,
    #[strum(serialize = "orange")]
    Orange,
}

impl LineColor {
    /// Absent or unrecognized values read as white.
    pub fn parse_lenient(value: Option<&str>) -> Self {
        value
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or_default()
    }

    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}

impl std::fmt::Display for LineColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
pub enum ClearType {
    #[strum(serialize = "Failed")]
    Failed,
    #[strum(serialize = "Clear")]
    Clear,
    #[strum(serialize = "Hard")]
    Hard,
    #[strum(serialize = "Brave")]
    Brave,
    #[strum(serialize = "Absolute")]
    Absolute,
    #[strum(serialize = "Catastrophy")]
    Catastrophy,
    #[serde(rename = "All Correct!")]
    #[strum(serialize = "All Correct!")]
    AllCorrect,
}

impl ClearType {
    pub fn as_str(&self) -> &'static str {
        self.into()
    }

    pub fn is_cleared(&self) -> bool {
        *self != Self::Failed
    }
}

impl std::fmt::Display for ClearType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Default,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum InputType {
    Keyboard,
    Controller,
    Mobile,
    Mouse,
    #[default]
    Unknown,
}

impl InputType {
    pub fn parse_lenient(value: Option<&str>) -> Self {
        value
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or_default()
    }

    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}

impl std::fmt::Display for InputType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
