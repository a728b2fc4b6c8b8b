//! Dream journal entries and the persisted collection
//!
//! The journal is a flat, newest-first sequence of [`Entry`] values. It is
//! mirrored to the frontend's key-value storage as a single JSON snapshot;
//! every state change re-serializes the whole collection.

pub mod collection;
pub mod error;
pub mod types;

pub use collection::Journal;
pub use error::{JournalError, JournalResult};
pub use types::{Entry, SYMBOL_PALETTE};
