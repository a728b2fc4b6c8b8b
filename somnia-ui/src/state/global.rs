//! Global Application State
//!
//! Reactive state management using Leptos signals. The journal signal is a
//! cached copy of the persisted snapshot, not a shared source of truth: each
//! mounted view refreshes it from storage on its own resynchronization
//! triggers (mount, cross-tab storage event, focus, visibility).

use leptos::*;
use somnia::Journal;

use crate::store;

/// How long a confirmation toast stays on screen, in milliseconds
const NOTICE_MILLIS: u32 = 2_000;

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Cached copy of the persisted journal
    pub journal: RwSignal<Journal>,
    /// Transient confirmation message (for toasts)
    pub notice: RwSignal<Option<String>>,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        journal: create_rw_signal(store::load()),
        notice: create_rw_signal(None),
    };

    provide_context(state);
}

impl GlobalState {
    /// Re-read the persisted snapshot into the cached copy
    pub fn reload(&self) {
        self.journal.set(store::load());
    }

    /// Save a new entry dated today and persist the full snapshot.
    ///
    /// Whitespace-only text is a silent no-op. Returns whether an entry was
    /// created.
    pub fn capture(&self, text: &str, symbol: &str) -> bool {
        let mut journal = self.journal.get_untracked();
        if journal.capture(text, symbol).is_none() {
            return false;
        }

        store::save(&journal);
        self.journal.set(journal);
        true
    }

    /// Delete an entry by id and persist the remaining collection
    pub fn delete(&self, id: &str) {
        let mut journal = self.journal.get_untracked();
        if journal.remove(id) {
            store::save(&journal);
            self.journal.set(journal);
        }
    }

    /// Show a confirmation message (auto-clears after a short delay)
    pub fn show_notice(&self, message: &str) {
        self.notice.set(Some(message.to_string()));

        let notice = self.notice;
        gloo_timers::callback::Timeout::new(NOTICE_MILLIS, move || {
            notice.set(None);
        })
        .forget();
    }
}
