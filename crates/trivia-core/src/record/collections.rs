use std::collections::BTreeMap;

use serde::Serialize;

use super::{Mode, ScoreRecord};

/// Every mode's records for one snapshot, as fetched from the backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ScoreCollections {
    modes: BTreeMap<Mode, Vec<ScoreRecord>>,
}

impl ScoreCollections {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records for `mode`; empty when nothing was fetched.
    pub fn get(&self, mode: Mode) -> &[ScoreRecord] {
        self.modes.get(&mode).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn insert(&mut self, mode: Mode, records: Vec<ScoreRecord>) {
        self.modes.insert(mode, records);
    }

    pub fn push(&mut self, mode: Mode, record: ScoreRecord) {
        self.modes.entry(mode).or_default().push(record);
    }

    pub fn with(mut self, mode: Mode, records: Vec<ScoreRecord>) -> Self {
        self.insert(mode, records);
        self
    }

    /// Modes with at least one record, in mode order.
    pub fn iter(&self) -> impl Iterator<Item = (Mode, &[ScoreRecord])> {
        self.modes
            .iter()
            .filter(|(_, records)| !records.is_empty())
            .map(|(mode, records)| (*mode, records.as_slice()))
    }

    /// Same collections narrowed to one player's records.
    pub fn for_player(&self, name: &str) -> Self {
        let modes = self
            .modes
            .iter()
            .map(|(mode, records)| {
                let own: Vec<ScoreRecord> = records
                    .iter()
                    .filter(|record| record.name == name)
                    .cloned()
                    .collect();
                (*mode, own)
            })
            .collect();
        Self { modes }
    }

    pub fn len(&self) -> usize {
        self.modes.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
