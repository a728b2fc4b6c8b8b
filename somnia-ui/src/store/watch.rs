//! External change notification
//!
//! The persisted journal can change behind a mounted view's back: another
//! same-origin tab writes the shared key, or this tab regains focus after
//! the user was elsewhere. Views subscribe to those triggers for the
//! lifetime of their mount and re-read the snapshot when any of them fires.
//! Between triggers the cached copy may be stale; that window is accepted,
//! not worked around.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, StorageEvent, VisibilityState};

use super::repo::STORAGE_KEY;

/// Active subscription to the journal's resynchronization triggers.
///
/// Listeners stay registered until the handle is dropped.
pub struct StorageWatch {
    storage: Closure<dyn FnMut(StorageEvent)>,
    focus: Closure<dyn FnMut(Event)>,
    visibility: Closure<dyn FnMut(Event)>,
}

/// Subscribe `on_change` to the resynchronization triggers: cross-tab
/// `storage` events for the journal key, window focus, and the document
/// becoming visible again.
///
/// Returns `None` outside a browsing context.
pub fn watch(on_change: impl Fn() + Clone + 'static) -> Option<StorageWatch> {
    let window = web_sys::window()?;
    let document = window.document()?;

    let callback = on_change.clone();
    let storage = Closure::wrap(Box::new(move |event: StorageEvent| {
        // Storage events fire only in *other* same-origin tabs; ignore
        // writes to unrelated keys.
        if event.key().as_deref() == Some(STORAGE_KEY) {
            callback();
        }
    }) as Box<dyn FnMut(StorageEvent)>);

    let callback = on_change.clone();
    let focus = Closure::wrap(Box::new(move |_: Event| {
        callback();
    }) as Box<dyn FnMut(Event)>);

    let callback = on_change;
    let visibility = Closure::wrap(Box::new(move |_: Event| {
        let visible = web_sys::window()
            .and_then(|window| window.document())
            .map(|document| document.visibility_state() == VisibilityState::Visible)
            .unwrap_or(false);
        if visible {
            callback();
        }
    }) as Box<dyn FnMut(Event)>);

    let watch = StorageWatch {
        storage,
        focus,
        visibility,
    };

    let _ = window
        .add_event_listener_with_callback("storage", watch.storage.as_ref().unchecked_ref());
    let _ = window.add_event_listener_with_callback("focus", watch.focus.as_ref().unchecked_ref());
    let _ = document.add_event_listener_with_callback(
        "visibilitychange",
        watch.visibility.as_ref().unchecked_ref(),
    );

    Some(watch)
}

impl Drop for StorageWatch {
    fn drop(&mut self) {
        let Some(window) = web_sys::window() else {
            return;
        };

        let _ = window
            .remove_event_listener_with_callback("storage", self.storage.as_ref().unchecked_ref());
        let _ = window
            .remove_event_listener_with_callback("focus", self.focus.as_ref().unchecked_ref());
        if let Some(document) = window.document() {
            let _ = document.remove_event_listener_with_callback(
                "visibilitychange",
                self.visibility.as_ref().unchecked_ref(),
            );
        }
    }
}
