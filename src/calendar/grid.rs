//! Month grid construction
//!
//! [`MonthCursor`] is the calendar view's navigation state: a `(year,
//! month0)` pair stepped by ±1 with normal rollover across December/January.
//! [`MonthGrid`] turns a cursor into render data: leading blank cells for a
//! Sunday-aligned grid, the day count, and per-day date keys.

use chrono::{Datelike, Local, NaiveDate};

use super::dates::{days_in_month, local_date_key, normalize_month};

/// Column headers for a Sunday-first grid
pub const WEEKDAY_LABELS: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

/// Month navigation state for the calendar view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthCursor {
    pub year: i32,
    /// Zero-based month index, kept normalized to 0–11
    pub month0: i32,
}

impl MonthCursor {
    /// Create a cursor, rolling an out-of-range month index into the
    /// adjacent year
    pub fn new(year: i32, month0: i32) -> Self {
        let (year, month) = normalize_month(year, month0);
        Self {
            year,
            month0: month as i32 - 1,
        }
    }

    /// Cursor for the current local year and month
    pub fn today() -> Self {
        let now = Local::now();
        Self {
            year: now.year(),
            month0: now.month0() as i32,
        }
    }

    pub fn prev(self) -> Self {
        Self::new(self.year, self.month0 - 1)
    }

    pub fn next(self) -> Self {
        Self::new(self.year, self.month0 + 1)
    }

    /// Header label, e.g. "March 2024"
    pub fn label(&self) -> String {
        let (year, month) = normalize_month(self.year, self.month0);
        NaiveDate::from_ymd_opt(year, month, 1)
            .map(|first| first.format("%B %Y").to_string())
            .unwrap_or_default()
    }
}

/// Render data for one month of the calendar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    pub year: i32,
    /// One-based month
    pub month: u32,
    /// Blank cells before day 1; 0 means the month starts on Sunday
    pub leading_blanks: u32,
    /// Number of days in the month
    pub days: u32,
}

impl MonthGrid {
    pub fn new(cursor: &MonthCursor) -> Self {
        let (year, month) = normalize_month(cursor.year, cursor.month0);
        let leading_blanks = NaiveDate::from_ymd_opt(year, month, 1)
            .map(|first| first.weekday().num_days_from_sunday())
            .unwrap_or(0);

        Self {
            year,
            month,
            leading_blanks,
            days: days_in_month(cursor.year, cursor.month0),
        }
    }

    /// Date key for a day cell of this month
    pub fn day_key(&self, day: u32) -> String {
        NaiveDate::from_ymd_opt(self.year, self.month, day)
            .map(|date| local_date_key(&date))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_june_2024_grid_shape() {
        // June 1st 2024 is a Saturday: six leading blanks in a Sunday-first grid.
        let grid = MonthGrid::new(&MonthCursor::new(2024, 5));
        assert_eq!(grid.leading_blanks, 6);
        assert_eq!(grid.days, 30);
        assert_eq!(grid.day_key(1), "2024-06-01");
        assert_eq!(grid.day_key(30), "2024-06-30");
    }

    #[test]
    fn test_september_2024_starts_on_sunday() {
        let grid = MonthGrid::new(&MonthCursor::new(2024, 8));
        assert_eq!(grid.leading_blanks, 0);
        assert_eq!(grid.days, 30);
    }

    #[test]
    fn test_leap_february_grid() {
        // February 1st 2024 is a Thursday.
        let grid = MonthGrid::new(&MonthCursor::new(2024, 1));
        assert_eq!(grid.leading_blanks, 4);
        assert_eq!(grid.days, 29);
        assert_eq!(grid.day_key(29), "2024-02-29");
    }

    #[test]
    fn test_cursor_rolls_over_year_boundaries() {
        let dec = MonthCursor::new(2023, 11);
        let jan = dec.next();
        assert_eq!((jan.year, jan.month0), (2024, 0));

        let back = jan.prev();
        assert_eq!((back.year, back.month0), (2023, 11));

        // Constructing straight from an out-of-range index normalizes too.
        assert_eq!(MonthCursor::new(2023, 12), jan);
    }

    #[test]
    fn test_cursor_label() {
        assert_eq!(MonthCursor::new(2024, 2).label(), "March 2024");
        assert_eq!(MonthCursor::new(2023, 11).label(), "December 2023");
    }
}
