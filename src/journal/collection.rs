//! The entry collection
//!
//! A [`Journal`] holds the full ordered set of entries, newest first. New
//! entries are prepended, never appended, and entries are never mutated in
//! place. Persistence is a whole-collection JSON snapshot; there is no log,
//! no diff, no partial update.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::error::JournalResult;
use super::types::Entry;

/// The full ordered set of entries, newest first
///
/// Serializes transparently as the bare entry array, which is also the
/// persisted storage layout.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct Journal {
    entries: Vec<Entry>,
}

impl Journal {
    /// Create an empty journal
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a journal from an already-ordered (newest-first) entry list
    pub fn from_entries(entries: Vec<Entry>) -> Self {
        Self { entries }
    }

    /// All entries, newest first
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Save a new dream fragment dated today.
    ///
    /// The text is trimmed first; whitespace-only text is a no-op and returns
    /// `None`. Otherwise the freshly created entry is prepended and a copy of
    /// it is returned. Entries are never merged or deduplicated by date.
    pub fn capture(&mut self, text: &str, symbol: &str) -> Option<Entry> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        let entry = Entry::new(text, symbol);
        self.prepend(entry.clone());
        Some(entry)
    }

    /// Prepend an entry, keeping the collection newest-first
    pub fn prepend(&mut self, entry: Entry) {
        self.entries.insert(0, entry);
    }

    /// Remove the entry with the given id.
    ///
    /// Returns `true` if an entry was removed.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        self.entries.len() != before
    }

    /// Entries for one date key, preserving the collection's newest-first order
    pub fn bucket(&self, date: &str) -> Vec<Entry> {
        self.entries
            .iter()
            .filter(|entry| entry.date == date)
            .cloned()
            .collect()
    }

    /// Group all entries by date key.
    ///
    /// Each bucket preserves the collection's newest-first order. The map is
    /// derived on demand and never stored.
    pub fn buckets(&self) -> HashMap<String, Vec<Entry>> {
        let mut buckets: HashMap<String, Vec<Entry>> = HashMap::new();
        for entry in &self.entries {
            buckets.entry(entry.date.clone()).or_default().push(entry.clone());
        }
        buckets
    }

    /// Serialize the whole collection as one JSON snapshot
    pub fn to_json(&self) -> JournalResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Restore a collection from a JSON snapshot
    pub fn from_json(json: &str) -> JournalResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::today_key;

    #[test]
    fn test_capture_prepends_trimmed_entries() {
        let mut journal = Journal::new();
        let first = journal.capture("  Pink bike  ", "🌙").unwrap();
        let second = journal.capture("Falling upward", "⭐").unwrap();

        assert_eq!(first.text, "Pink bike");
        assert_eq!(first.date, today_key());
        assert_eq!(journal.len(), 2);
        assert_eq!(journal.entries()[0].id, second.id);
        assert_eq!(journal.entries()[1].id, first.id);
    }

    #[test]
    fn test_whitespace_only_capture_is_a_no_op() {
        let mut journal = Journal::new();
        assert!(journal.capture("  ", "🌙").is_none());
        assert!(journal.is_empty());
    }

    #[test]
    fn test_same_day_entries_are_not_merged() {
        let mut journal = Journal::new();
        journal.capture("first dream", "🌙").unwrap();
        journal.capture("second dream", "⭐").unwrap();

        assert_eq!(journal.bucket(&today_key()).len(), 2);
    }

    #[test]
    fn test_buckets_preserve_newest_first_order() {
        let mut journal = Journal::new();
        journal.prepend(Entry::dated("older", "🌊", "2024-03-05"));
        journal.prepend(Entry::dated("newer", "🔥", "2024-03-05"));
        journal.prepend(Entry::dated("other day", "⭐", "2024-03-06"));

        let buckets = journal.buckets();
        let day = &buckets["2024-03-05"];
        assert_eq!(day.len(), 2);
        assert_eq!(day[0].text, "newer");
        assert_eq!(day[0].symbol, "🔥");
        assert_eq!(day[1].text, "older");
        assert_eq!(buckets["2024-03-06"].len(), 1);
    }

    #[test]
    fn test_remove_deletes_exactly_one_entry() {
        let mut journal = Journal::new();
        let keep = Entry::dated("keep", "🌙", "2024-03-05");
        let gone = Entry::dated("gone", "🌙", "2024-03-05");
        journal.prepend(keep.clone());
        journal.prepend(gone.clone());

        assert!(journal.remove(&gone.id));
        assert_eq!(journal.len(), 1);
        assert_eq!(journal.entries()[0].id, keep.id);

        // A second remove of the same id finds nothing.
        assert!(!journal.remove(&gone.id));
    }

    #[test]
    fn test_removing_last_entry_empties_its_bucket() {
        let mut journal = Journal::new();
        let only = Entry::dated("solo", "🌙", "2024-03-05");
        journal.prepend(only.clone());

        assert!(journal.remove(&only.id));
        assert!(journal.buckets().get("2024-03-05").is_none());
        assert!(journal.bucket("2024-03-05").is_empty());
    }

    #[test]
    fn test_snapshot_round_trip_is_identical() {
        let mut journal = Journal::new();
        journal.capture("Pink bike", "🌙").unwrap();
        journal.capture("Tide of letters", "🌊").unwrap();

        let json = journal.to_json().unwrap();
        let restored = Journal::from_json(&json).unwrap();

        assert_eq!(journal, restored);
    }

    #[test]
    fn test_snapshot_layout_is_a_bare_array() {
        let mut journal = Journal::new();
        journal.prepend(Entry::dated("solo", "🌙", "2024-03-05"));

        let value: serde_json::Value = serde_json::from_str(&journal.to_json().unwrap()).unwrap();
        assert!(value.is_array());
        assert_eq!(value.as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_garbage_snapshot_fails_to_parse() {
        assert!(Journal::from_json("not json").is_err());
        assert!(Journal::from_json("{\"entries\":3}").is_err());
    }
}
