//! # Somnia
//!
//! Core logic for a local-first dream journal: the entry collection, the
//! local-date key math, and the calendar grid construction shared by the
//! Leptos frontend in `somnia-ui/`.
//!
//! This crate is deliberately platform-independent: no DOM access and no
//! storage I/O live here, so everything is natively testable. The frontend
//! owns the `localStorage` repository and feeds snapshots in and out of
//! [`journal::Journal`].
//!
//! ## Modules
//!
//! - [`journal`]: entries, the newest-first collection, and JSON snapshots
//! - [`calendar`]: local date keys, month lengths, and month grid math
//!
//! ## Quick Start
//!
//! ```rust
//! use somnia::calendar::{MonthCursor, MonthGrid};
//! use somnia::journal::Journal;
//!
//! let mut journal = Journal::new();
//! let entry = journal
//!     .capture("Pink bike on a frozen lake", "🌙")
//!     .expect("text is non-empty");
//!
//! // Entries bucket by their local capture date.
//! let buckets = journal.buckets();
//! assert_eq!(buckets[&entry.date].len(), 1);
//!
//! // February 2024 is a leap month.
//! let grid = MonthGrid::new(&MonthCursor::new(2024, 1));
//! assert_eq!(grid.days, 29);
//! ```

pub mod calendar;
pub mod journal;

// Re-export top-level types for convenience
pub use calendar::{
    days_in_month, format_date_key, local_date_key, today_key, MonthCursor, MonthGrid,
    WEEKDAY_LABELS,
};

pub use journal::{Entry, Journal, JournalError, JournalResult, SYMBOL_PALETTE};
