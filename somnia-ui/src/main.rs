//! Somnia
//!
//! A local-first dream journal built with Leptos (WASM).
//!
//! # Features
//!
//! - Capture short dream fragments with an attached symbol
//! - Browse entries on a month calendar, grouped by local date
//! - Everything persists in the browser's `localStorage`; no server
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. Both views cache their own copy of the journal and re-read
//! the shared storage key on mount, cross-tab storage events, window focus,
//! and visibility changes.

use leptos::*;

mod app;
mod components;
mod pages;
mod state;
mod store;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
