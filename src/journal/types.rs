//! Core data types for the dream journal
//!
//! An [`Entry`] is one captured dream fragment. The persisted shape is
//! exactly the in-memory shape: four string fields, no version marker.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calendar::today_key;

/// Fixed palette of glyphs offered by the capture view.
///
/// The palette only drives the picker; nothing validates a stored symbol
/// against it at write time.
pub const SYMBOL_PALETTE: [&str; 10] = ["🌙", "⭐", "🌊", "🔥", "🌲", "🕊", "👁", "🦋", "🏠", "🗝"];

/// One captured dream fragment
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Entry {
    /// Opaque unique id, assigned at creation and stable for the entry's lifetime
    pub id: String,
    /// Local calendar date key (`YYYY-MM-DD`) at capture time, not UTC
    pub date: String,
    /// Trimmed, non-empty dream text
    pub text: String,
    /// Glyph attached to the entry, normally one of [`SYMBOL_PALETTE`]
    pub symbol: String,
}

impl Entry {
    /// Create an entry dated today (local wall-clock date)
    pub fn new(text: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self::dated(text, symbol, today_key())
    }

    /// Create an entry with an explicit date key
    pub fn dated(
        text: impl Into<String>,
        symbol: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            date: date.into(),
            text: text.into(),
            symbol: symbol.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_creation() {
        let entry = Entry::dated("Pink bike", "🌙", "2024-03-05");

        assert_eq!(entry.date, "2024-03-05");
        assert_eq!(entry.text, "Pink bike");
        assert_eq!(entry.symbol, "🌙");
        assert!(!entry.id.is_empty());
    }

    #[test]
    fn test_entries_get_distinct_ids() {
        let a = Entry::new("one", "🌙");
        let b = Entry::new("one", "🌙");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_entry_serializes_as_four_string_fields() {
        let entry = Entry::dated("Pink bike", "🌙", "2024-03-05");
        let value = serde_json::to_value(&entry).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(object.len(), 4);
        assert!(object["id"].is_string());
        assert_eq!(object["date"], "2024-03-05");
        assert_eq!(object["text"], "Pink bike");
        assert_eq!(object["symbol"], "🌙");
    }

    #[test]
    fn test_entry_round_trip() {
        let entry = Entry::dated("Falling upward", "⭐", "2024-03-06");
        let json = serde_json::to_string(&entry).unwrap();
        let restored: Entry = serde_json::from_str(&json).unwrap();
        assert_eq!(entry, restored);
    }
}
