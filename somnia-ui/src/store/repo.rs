//! Journal persistence over `localStorage`
//!
//! The whole collection lives under one well-known key as a JSON snapshot.
//! Reads fail open: a missing, inaccessible, or unparsable snapshot is an
//! empty journal and is never surfaced to the user. Every collection change
//! writes the full snapshot back; there is no log, no diff, no partial
//! update.

use somnia::Journal;

/// The single storage key holding the serialized entry array
pub const STORAGE_KEY: &str = "somnia.entries";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|window| window.local_storage().ok().flatten())
}

/// Read the persisted journal, treating every failure as an empty collection
pub fn load() -> Journal {
    let Some(storage) = local_storage() else {
        return Journal::new();
    };

    match storage.get_item(STORAGE_KEY) {
        Ok(Some(json)) => Journal::from_json(&json).unwrap_or_else(|e| {
            web_sys::console::error_1(
                &format!("Discarding unreadable journal snapshot: {}", e).into(),
            );
            Journal::new()
        }),
        _ => Journal::new(),
    }
}

/// Replace the persisted snapshot with the given collection.
///
/// Write failures (e.g. quota exhaustion) are not recovered from.
pub fn save(journal: &Journal) {
    let Some(storage) = local_storage() else {
        return;
    };

    match journal.to_json() {
        Ok(json) => {
            let _ = storage.set_item(STORAGE_KEY, &json);
        }
        Err(e) => {
            web_sys::console::error_1(&format!("Failed to serialize journal: {}", e).into());
        }
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use somnia::Entry;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn clear_key() {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(STORAGE_KEY);
        }
    }

    #[wasm_bindgen_test]
    fn load_is_empty_when_key_absent() {
        clear_key();
        assert!(load().is_empty());
    }

    #[wasm_bindgen_test]
    fn snapshot_round_trip() {
        clear_key();

        let mut journal = Journal::new();
        journal.prepend(Entry::dated("older", "🌊", "2024-03-05"));
        journal.prepend(Entry::dated("newer", "🌙", "2024-03-06"));
        save(&journal);

        assert_eq!(load(), journal);
        clear_key();
    }

    #[wasm_bindgen_test]
    fn unparsable_snapshot_reads_as_empty() {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(STORAGE_KEY, "{{ not json");
        }
        assert!(load().is_empty());
        clear_key();
    }
}
