use chrono::{Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Format of every stored timestamp: local time, second precision.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Format accepted by date queries.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Assigned ids start at 1, but stored ids of any sign load verbatim.
pub type NoteId = i64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    pub body: String,
    // Kept as the raw string so records written by other tools load verbatim
    pub timestamp: String,
}

impl Note {
    pub fn new(id: NoteId, title: String, body: String) -> Self {
        Self {
            id,
            title,
            body,
            timestamp: now_timestamp(),
        }
    }

    /// Marks the note as modified now.
    pub fn touch(&mut self) {
        self.timestamp = now_timestamp();
    }

    /// Parses the stored timestamp. `None` when it isn't in [`TIMESTAMP_FORMAT`].
    pub fn modified_at(&self) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(&self.timestamp, TIMESTAMP_FORMAT).ok()
    }

    /// Calendar day of the last creation or edit.
    pub fn date(&self) -> Option<NaiveDate> {
        self.modified_at().map(|dt| dt.date())
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {} ({})\n{}", self.id, self.title, self.timestamp, self.body)
    }
}

pub fn now_timestamp() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note_at(timestamp: &str) -> Note {
        Note {
            id: 1,
            title: "Title".into(),
            body: "Body".into(),
            timestamp: timestamp.into(),
        }
    }

    #[test]
    fn new_note_has_well_formed_timestamp() {
        let note = Note::new(7, "T".into(), "B".into());
        assert_eq!(note.id, 7);
        assert!(note.modified_at().is_some());
        assert_eq!(note.timestamp.len(), "2024-01-01 00:00:00".len());
    }

    #[test]
    fn date_extracts_calendar_day() {
        let note = note_at("2024-01-01 10:00:00");
        assert_eq!(note.date(), NaiveDate::from_ymd_opt(2024, 1, 1));
    }

    #[test]
    fn date_is_none_for_garbage_timestamp() {
        assert_eq!(note_at("yesterday").date(), None);
        assert_eq!(note_at("2024-01-01").date(), None);
    }

    #[test]
    fn display_matches_listing_layout() {
        let note = note_at("2024-01-01 10:00:00");
        assert_eq!(note.to_string(), "[1] Title (2024-01-01 10:00:00)\nBody");
    }

    #[test]
    fn serializes_with_flat_record_fields() {
        let json = serde_json::to_value(note_at("2024-01-01 10:00:00")).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["title"], "Title");
        assert_eq!(json["body"], "Body");
        assert_eq!(json["timestamp"], "2024-01-01 10:00:00");
    }
}
