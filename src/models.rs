//! Data Model
//!
//! Sessions and sets as the API sends them, plus the request and response
//! bodies of each endpoint. Everything on the wire is camelCase JSON and
//! all timestamps are epoch seconds.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// A timed grouping of recorded sets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub session_id: String,
    pub created_at: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub set_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl Session {
    /// Last update time, falling back to creation time
    pub fn display_timestamp(&self) -> i64 {
        self.last_updated_at.unwrap_or(self.created_at)
    }

    /// Number of sets, zero when the API did not report it
    pub fn display_set_count(&self) -> u32 {
        self.set_count.unwrap_or(0)
    }

    /// Note text if one is present and non-empty
    pub fn note_text(&self) -> Option<&str> {
        self.note.as_deref().filter(|n| !n.is_empty())
    }

    /// Selector label: `"{note} ({id}) {time} / {count} sets"`
    pub fn label(&self) -> String {
        let note = self
            .note_text()
            .map(|n| format!("{} ", n))
            .unwrap_or_default();
        format!(
            "{}({}) {} / {} sets",
            note,
            self.session_id,
            format_timestamp(self.display_timestamp()),
            self.display_set_count()
        )
    }
}

/// One recorded exercise instance within a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutSet {
    pub seq: u64,
    pub weight: f64,
    pub reps: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub created_at: i64,
}

impl WorkoutSet {
    /// Training volume of this set
    pub fn volume(&self) -> f64 {
        self.weight * self.reps as f64
    }

    /// List row: `"#{seq} {weight} kg × {reps} reps"` with an optional note
    pub fn summary(&self) -> String {
        let mut line = format!("#{} {} kg × {} reps", self.seq, self.weight, self.reps);
        if let Some(note) = self.note.as_deref().filter(|n| !n.is_empty()) {
            line.push_str(&format!(" ({})", note));
        }
        line
    }
}

/// List envelope used by both list endpoints
#[derive(Debug, Clone, Deserialize)]
pub struct ItemsResponse<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
}

/// POST /sessions body
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateSessionRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// POST /sessions response
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSessionResponse {
    pub session_id: String,
    pub created_at: i64,
}

/// POST /sessions/{id}/sets body
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateSetRequest {
    pub weight: f64,
    pub reps: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Status document served at the API root
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApiStatus {
    pub ok: bool,
    #[serde(default)]
    pub stage: Option<String>,
    #[serde(default)]
    pub path: Option<String>,
}

/// Render epoch seconds in the local timezone
pub fn format_timestamp(secs: i64) -> String {
    DateTime::from_timestamp(secs, 0)
        .map(|dt| dt.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| "-".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(json: &str) -> Session {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_session_optional_fields_default() {
        let s = session(r#"{"sessionId":"s1","createdAt":1700000000}"#);
        assert_eq!(s.last_updated_at, None);
        assert_eq!(s.set_count, None);
        assert_eq!(s.note, None);
        assert_eq!(s.display_timestamp(), 1700000000);
        assert_eq!(s.display_set_count(), 0);
    }

    #[test]
    fn test_display_timestamp_prefers_last_update() {
        let s = session(
            r#"{"sessionId":"s1","createdAt":1700000000,"lastUpdatedAt":1700000600,"setCount":3}"#,
        );
        assert_eq!(s.display_timestamp(), 1700000600);
        assert_eq!(s.display_set_count(), 3);
    }

    #[test]
    fn test_label_omits_missing_note() {
        let mut s = session(r#"{"sessionId":"abc","createdAt":1700000000,"setCount":2}"#);
        assert!(s.label().starts_with("(abc) "));
        assert!(s.label().ends_with(" / 2 sets"));

        s.note = Some("chest day".to_string());
        assert!(s.label().starts_with("chest day (abc) "));

        s.note = Some(String::new());
        assert!(s.label().starts_with("(abc) "));
    }

    #[test]
    fn test_set_summary() {
        let set: WorkoutSet =
            serde_json::from_str(r#"{"seq":3,"weight":42.5,"reps":10,"createdAt":1}"#).unwrap();
        assert_eq!(set.summary(), "#3 42.5 kg × 10 reps");
        assert_eq!(set.volume(), 425.0);

        let set = WorkoutSet {
            note: Some("paused".to_string()),
            weight: 60.0,
            ..set
        };
        assert_eq!(set.summary(), "#3 60 kg × 10 reps (paused)");
    }

    #[test]
    fn test_items_envelope_without_items() {
        let resp: ItemsResponse<Session> = serde_json::from_str("{}").unwrap();
        assert!(resp.items.is_empty());
    }

    #[test]
    fn test_create_session_request_skips_empty_note() {
        let body = serde_json::to_value(CreateSessionRequest::default()).unwrap();
        assert_eq!(body, serde_json::json!({}));

        let body = serde_json::to_value(CreateSessionRequest {
            note: Some("legs".to_string()),
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({ "note": "legs" }));
    }

    #[test]
    fn test_format_timestamp_out_of_range() {
        assert_eq!(format_timestamp(i64::MAX), "-");
    }
}
