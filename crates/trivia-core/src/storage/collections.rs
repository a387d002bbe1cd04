use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde_json::Value as JsonValue;
use tracing::{info, warn};

use crate::error::Result;
use crate::record::{Mode, ScoreCollections, ScoreRecord};

impl ScoreCollections {
    /// Load collections from a JSON object keyed by mode name.
    ///
    /// ```json
    /// { "easy": [{"name": "alice", "score": 30}], "hard-race": [] }
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Unknown mode keys and malformed records are skipped with a warning.
    pub fn parse(content: &str) -> Result<Self> {
        let raw: BTreeMap<String, Vec<JsonValue>> = serde_json::from_str(content)?;
        let mut collections = Self::new();

        for (key, values) in raw {
            let mode: Mode = match key.parse() {
                Ok(mode) => mode,
                Err(e) => {
                    warn!("Skipping {} records: {}", values.len(), e);
                    continue;
                }
            };

            let mut records = Vec::with_capacity(values.len());
            for (index, value) in values.into_iter().enumerate() {
                match serde_json::from_value::<ScoreRecord>(value) {
                    Ok(record) => records.push(record),
                    Err(e) => warn!("Skipping malformed {} record #{}: {}", mode, index, e),
                }
            }

            info!("Loaded {} {} records", records.len(), mode);
            collections.insert(mode, records);
        }

        Ok(collections)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_parse_collections() {
        let content = r#"{
            "easy": [{"name": "alice", "score": 30}],
            "hard-race": [{"name": "bob", "score": 100, "grade": "GM", "gradePoints": 1200}],
            "death": []
        }"#;
        let collections = ScoreCollections::parse(content).unwrap();

        assert_eq!(collections.get(Mode::Easy).len(), 1);
        assert_eq!(collections.get(Mode::HardRace)[0].grade_points, Some(1200.0));
        assert!(collections.get(Mode::Death).is_empty());
        assert_eq!(collections.len(), 2);
    }

    #[test]
    fn test_unknown_mode_is_skipped() {
        let content = r#"{"zen": [{"name": "a"}], "master": [{"name": "b"}]}"#;
        let collections = ScoreCollections::parse(content).unwrap();

        assert_eq!(collections.len(), 1);
        assert_eq!(collections.get(Mode::Master)[0].name, "b");
    }

    #[test]
    fn test_malformed_record_is_skipped() {
        let content = r#"{"normal": [{"name": "a", "score": "lots"}, {"name": "b", "score": 12}, 7]}"#;
        let collections = ScoreCollections::parse(content).unwrap();

        let normal = collections.get(Mode::Normal);
        assert_eq!(normal.len(), 1);
        assert_eq!(normal[0].name, "b");
    }

    #[test]
    fn test_top_level_must_be_object() {
        assert!(matches!(ScoreCollections::parse("[]"), Err(Error::Json(_))));
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scores.json");

        let collections = ScoreCollections::new()
            .with(Mode::EasyRace, vec![ScoreRecord::new("c", 42.0).with_grade("GM")]);
        collections.save(&path).unwrap();

        let loaded = ScoreCollections::load(&path).unwrap();
        assert_eq!(loaded, collections);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = ScoreCollections::load(dir.path().join("missing.json"));
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
