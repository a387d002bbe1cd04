use std::collections::HashSet;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::achievement::unlocked_union;
use crate::error::Result;

/// Unlocked achievement IDs, stored as a JSON array of strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AchievementState {
    unlocked: Vec<String>,
}

impl AchievementState {
    pub fn new() -> Self {
        Self::default()
    }

    /// A missing file is an empty state.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Self::new()),
            Err(e) => Err(e.into()),
        }
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    pub fn ids(&self) -> &[String] {
        &self.unlocked
    }

    pub fn to_set(&self) -> HashSet<String> {
        self.unlocked.iter().cloned().collect()
    }

    /// Add newly unlocked IDs, keeping existing order.
    pub fn record(&mut self, newly: &[&str]) {
        self.unlocked = unlocked_union(&self.unlocked, newly);
    }
}
