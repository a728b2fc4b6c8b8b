//! Calendar math for the month view
//!
//! Everything here works on *local* calendar dates: entry date keys come from
//! local wall-clock components, never UTC, so a dream captured at 23:30 west
//! of Greenwich lands on the day the user actually experienced.

pub mod dates;
pub mod grid;

pub use dates::{days_in_month, format_date_key, local_date_key, normalize_month, today_key};
pub use grid::{MonthCursor, MonthGrid, WEEKDAY_LABELS};
