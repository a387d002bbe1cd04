use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value as JsonValue;

use super::enums::{ClearType, InputType, LineColor};
use super::time::parse_time_ms;

/// One completed (or abandoned) play session as stored by the backend.
///
/// Optional fields stay as raw strings so that a record with an unexpected
/// value still loads; the accessor methods interpret them leniently.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRecord {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clear_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modifiers: Option<Modifiers>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade_points: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<RecordDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pause_count: Option<f64>,
}

/// Run configuration chosen before the game started.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Modifiers {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lives: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_multiplier: Option<f64>,
    /// `"off"` or a number of seconds; the store has held both strings and numbers.
    #[serde(
        default,
        deserialize_with = "string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub fading_mode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_question: Option<f64>,
}

impl Modifiers {
    pub fn time_multiplier_or_default(&self) -> f64 {
        self.time_multiplier.unwrap_or(1.0)
    }

    /// Seconds before an answer fades, `None` when vanish mode is off.
    pub fn fading_seconds(&self) -> Option<f64> {
        let raw = self.fading_mode.as_deref()?.trim();
        if raw.eq_ignore_ascii_case("off") {
            return None;
        }
        raw.parse().ok()
    }
}

fn string_or_number<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<JsonValue>::deserialize(deserializer)?;
    Ok(match value {
        Some(JsonValue::String(s)) => Some(s),
        Some(JsonValue::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// Creation time, either an ISO-8601 string or the store's native timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordDate {
    Iso(String),
    Timestamp {
        #[serde(alias = "_seconds")]
        seconds: i64,
        #[serde(default, alias = "_nanoseconds")]
        nanoseconds: u32,
    },
    Millis(i64),
}

impl RecordDate {
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Iso(s) => DateTime::parse_from_rfc3339(s)
                .ok()
                .map(|dt| dt.with_timezone(&Utc)),
            Self::Timestamp {
                seconds,
                nanoseconds,
            } => DateTime::from_timestamp(*seconds, *nanoseconds),
            Self::Millis(ms) => DateTime::from_timestamp_millis(*ms),
        }
    }
}

impl ScoreRecord {
    pub fn new(name: impl Into<String>, score: f64) -> Self {
        Self {
            name: name.into(),
            score: Some(score),
            ..Default::default()
        }
    }

    pub fn with_grade(mut self, grade: impl Into<String>) -> Self {
        self.grade = Some(grade.into());
        self
    }

    pub fn with_line(mut self, line: LineColor) -> Self {
        self.line = Some(line.as_str().to_string());
        self
    }

    pub fn with_time(mut self, time: impl Into<String>) -> Self {
        self.time = Some(time.into());
        self
    }

    pub fn with_clear_type(mut self, clear_type: ClearType) -> Self {
        self.clear_type = Some(clear_type.as_str().to_string());
        self
    }

    pub fn with_input_type(mut self, input_type: InputType) -> Self {
        self.input_type = Some(input_type.as_str().to_string());
        self
    }

    pub fn with_grade_points(mut self, grade_points: f64) -> Self {
        self.grade_points = Some(grade_points);
        self
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = Some(modifiers);
        self
    }

    /// Absent or non-finite scores count as zero.
    pub fn score_or_zero(&self) -> f64 {
        self.score.filter(|s| s.is_finite()).unwrap_or(0.0)
    }

    /// Grade points when recorded, otherwise the raw score.
    pub fn grade_points_or_score(&self) -> f64 {
        self.grade_points
            .filter(|gp| gp.is_finite())
            .unwrap_or_else(|| self.score_or_zero())
    }

    pub fn grade_str(&self) -> Option<&str> {
        self.grade.as_deref().filter(|g| !g.is_empty())
    }

    pub fn has_grade(&self, grade: &str) -> bool {
        self.grade.as_deref() == Some(grade)
    }

    pub fn line_color(&self) -> LineColor {
        LineColor::parse_lenient(self.line.as_deref())
    }

    pub fn clear_type(&self) -> Option<ClearType> {
        self.clear_type.as_deref()?.trim().parse().ok()
    }

    /// True when a clear type is recorded and it is not `Failed`.
    pub fn is_cleared(&self) -> bool {
        self.clear_type().is_some_and(|ct| ct.is_cleared())
    }

    pub fn input_type(&self) -> InputType {
        InputType::parse_lenient(self.input_type.as_deref())
    }

    pub fn has_time(&self) -> bool {
        self.time.as_deref().is_some_and(|t| !t.trim().is_empty())
    }

    /// Elapsed time in milliseconds; a missing time counts as zero.
    pub fn elapsed_ms(&self) -> u64 {
        self.time.as_deref().map(parse_time_ms).unwrap_or(0)
    }

    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        self.date.as_ref().and_then(RecordDate::to_datetime)
    }

    pub fn lives(&self) -> Option<f64> {
        self.modifiers.as_ref().and_then(|m| m.lives)
    }

    pub fn time_multiplier(&self) -> f64 {
        self.modifiers
            .as_ref()
            .map(Modifiers::time_multiplier_or_default)
            .unwrap_or(1.0)
    }

    pub fn fading_seconds(&self) -> Option<f64> {
        self.modifiers.as_ref().and_then(Modifiers::fading_seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_record() {
        let json = r#"{
            "name": "alice",
            "score": 87,
            "grade": "S4",
            "line": "green",
            "time": "05:12:40",
            "clearType": "Brave",
            "modifiers": {"lives": 5, "timeMultiplier": 2, "fadingMode": "0.5", "startQuestion": 1},
            "inputType": "controller",
            "date": "2024-03-01T12:00:00Z",
            "pauseCount": 2
        }"#;
        let record: ScoreRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record.name, "alice");
        assert_eq!(record.score_or_zero(), 87.0);
        assert_eq!(record.grade_str(), Some("S4"));
        assert_eq!(record.line_color(), LineColor::Green);
        assert_eq!(record.clear_type(), Some(ClearType::Brave));
        assert_eq!(record.input_type(), InputType::Controller);
        assert_eq!(record.elapsed_ms(), 5 * 60_000 + 12_000 + 400);
        assert_eq!(record.lives(), Some(5.0));
        assert_eq!(record.time_multiplier(), 2.0);
        assert_eq!(record.fading_seconds(), Some(0.5));
        assert!(record.timestamp().is_some());
    }

    #[test]
    fn test_deserialize_sparse_record() {
        let record: ScoreRecord = serde_json::from_str(r#"{"name": "bob"}"#).unwrap();

        assert_eq!(record.score_or_zero(), 0.0);
        assert_eq!(record.grade_str(), None);
        assert_eq!(record.line_color(), LineColor::White);
        assert_eq!(record.clear_type(), None);
        assert!(!record.is_cleared());
        assert_eq!(record.input_type(), InputType::Unknown);
        assert_eq!(record.elapsed_ms(), 0);
        assert_eq!(record.time_multiplier(), 1.0);
        assert_eq!(record.fading_seconds(), None);
        assert!(record.timestamp().is_none());
    }

    #[test]
    fn test_fading_mode_accepts_number_and_off() {
        let numeric: Modifiers = serde_json::from_str(r#"{"fadingMode": 0.5}"#).unwrap();
        assert_eq!(numeric.fading_seconds(), Some(0.5));

        let off: Modifiers = serde_json::from_str(r#"{"fadingMode": "off"}"#).unwrap();
        assert_eq!(off.fading_seconds(), None);
    }

    #[test]
    fn test_store_native_timestamp() {
        let record: ScoreRecord =
            serde_json::from_str(r#"{"name": "c", "date": {"seconds": 1700000000, "nanoseconds": 0}}"#)
                .unwrap();
        assert_eq!(record.timestamp().unwrap().timestamp(), 1_700_000_000);

        let legacy: ScoreRecord =
            serde_json::from_str(r#"{"name": "c", "date": {"_seconds": 1700000000, "_nanoseconds": 5}}"#)
                .unwrap();
        assert_eq!(legacy.timestamp().unwrap().timestamp(), 1_700_000_000);
    }

    #[test]
    fn test_grade_points_supersede_score() {
        let record = ScoreRecord::new("r", 120.0).with_grade_points(1_250_000.0);
        assert_eq!(record.grade_points_or_score(), 1_250_000.0);

        let plain = ScoreRecord::new("r", 120.0);
        assert_eq!(plain.grade_points_or_score(), 120.0);
    }

    #[test]
    fn test_unknown_clear_type_is_not_cleared() {
        let mut record = ScoreRecord::new("d", 10.0);
        record.clear_type = Some("Legendary".to_string());
        assert_eq!(record.clear_type(), None);
        assert!(!record.is_cleared());
    }
}
