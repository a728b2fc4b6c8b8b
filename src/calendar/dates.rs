//! Local date keys and month lengths
//!
//! Pure functions with no failure mode. Month indices are zero-based and may
//! lie outside 0–11; out-of-range values roll over into adjacent years, which
//! the month navigation relies on.

use chrono::{Datelike, Local, Months, NaiveDate};

/// Zero-padded `YYYY-MM-DD` key from a date's own year/month/day components.
///
/// For zone-aware datetimes the components are already expressed in that
/// zone, so the key is the local calendar date, not the UTC one.
pub fn local_date_key<D: Datelike>(date: &D) -> String {
    format!("{:04}-{:02}-{:02}", date.year(), date.month(), date.day())
}

/// Today's local date key
pub fn today_key() -> String {
    local_date_key(&Local::now())
}

/// Carry an arbitrary zero-based month index into `(year, month 1–12)`
pub fn normalize_month(year: i32, month0: i32) -> (i32, u32) {
    let year = year + month0.div_euclid(12);
    let month0 = month0.rem_euclid(12);
    (year, (month0 + 1) as u32)
}

/// Number of days in the given month, via the day before the first of the
/// next month.
pub fn days_in_month(year: i32, month0: i32) -> u32 {
    let (year, month) = normalize_month(year, month0);
    NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|first| first.checked_add_months(Months::new(1)))
        .and_then(|next_first| next_first.pred_opt())
        .map(|last| last.day())
        .unwrap_or(0)
}

/// Human label for a date key ("March 5, 2024").
///
/// A key that does not parse is shown as-is.
pub fn format_date_key(key: &str) -> String {
    NaiveDate::parse_from_str(key, "%Y-%m-%d")
        .map(|date| date.format("%B %-d, %Y").to_string())
        .unwrap_or_else(|_| key.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, FixedOffset};

    #[test]
    fn test_date_key_is_zero_padded() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 9).unwrap();
        assert_eq!(local_date_key(&date), "2024-01-09");
    }

    #[test]
    fn test_date_key_uses_local_components_not_utc() {
        // 23:30 on March 1st, seven hours west of UTC: in UTC the date is
        // already March 2nd, but the local key must stay on March 1st.
        let dt: DateTime<FixedOffset> = "2024-03-01T23:30:00-07:00".parse().unwrap();
        assert_eq!(dt.naive_utc().date(), NaiveDate::from_ymd_opt(2024, 3, 2).unwrap());
        assert_eq!(local_date_key(&dt), "2024-03-01");

        // And the mirror case east of UTC just after midnight.
        let dt: DateTime<FixedOffset> = "2024-03-02T00:10:00+09:00".parse().unwrap();
        assert_eq!(dt.naive_utc().date(), NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert_eq!(local_date_key(&dt), "2024-03-02");
    }

    #[test]
    fn test_today_key_matches_local_now() {
        assert_eq!(today_key(), local_date_key(&Local::now()));
    }

    #[test]
    fn test_month_lengths() {
        assert_eq!(days_in_month(2024, 1), 29); // leap-year February
        assert_eq!(days_in_month(2023, 1), 28);
        assert_eq!(days_in_month(2024, 11), 31); // December
        assert_eq!(days_in_month(2024, 3), 30); // April
    }

    #[test]
    fn test_month_index_rolls_over_adjacent_years() {
        assert_eq!(normalize_month(2024, 0), (2024, 1));
        assert_eq!(normalize_month(2024, 11), (2024, 12));
        assert_eq!(normalize_month(2024, 12), (2025, 1));
        assert_eq!(normalize_month(2024, -1), (2023, 12));
        assert_eq!(normalize_month(2024, -13), (2022, 12));

        assert_eq!(days_in_month(2024, 12), 31); // January 2025
        assert_eq!(days_in_month(2024, -1), 31); // December 2023
        assert_eq!(days_in_month(2024, 13), 28); // February 2025, not a leap year
    }

    #[test]
    fn test_format_date_key() {
        assert_eq!(format_date_key("2024-03-05"), "March 5, 2024");
        assert_eq!(format_date_key("2023-12-31"), "December 31, 2023");
        assert_eq!(format_date_key("not-a-date"), "not-a-date");
    }
}
