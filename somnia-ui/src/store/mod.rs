//! Persistence
//!
//! Repository over the browser's local key-value storage, plus the external
//! change notification the views resynchronize on.

pub mod repo;
pub mod watch;

pub use repo::{load, save, STORAGE_KEY};
pub use watch::{watch, StorageWatch};
