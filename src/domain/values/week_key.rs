use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// Sunday that opens the week containing `date`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_sunday() as i64)
}

/// Identity of a Sunday-to-Saturday week bucket.
///
/// Carries the week-start year alongside the week number, so the same
/// numeric week in different years never shares a key, and a week that
/// crosses January 1st keeps a single key for all seven days. Ordering
/// is chronological (year first, then number). Derived only from the
/// trade date, so the key stays stable while the trade list changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WeekKey {
    pub year: i32,
    pub number: u32,
}

impl WeekKey {
    /// Bucket key for `date`. Week 01 opens at the first Sunday of the
    /// year; days before it belong to the closing week of the prior year.
    pub fn for_date(date: NaiveDate) -> Self {
        let start = week_start(date);
        WeekKey {
            year: start.year(),
            number: start.ordinal0() / 7 + 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_week_starts_on_sunday() {
        assert_eq!(week_start(d("2024-06-05")), d("2024-06-02"));
        assert_eq!(week_start(d("2024-06-02")), d("2024-06-02"));
        assert_eq!(week_start(d("2024-06-08")), d("2024-06-02"));
    }

    #[test]
    fn test_same_span_shares_key() {
        assert_eq!(
            WeekKey::for_date(d("2024-06-02")),
            WeekKey::for_date(d("2024-06-08"))
        );
    }

    #[test]
    fn test_adjacent_spans_differ() {
        assert_ne!(
            WeekKey::for_date(d("2024-06-08")),
            WeekKey::for_date(d("2024-06-09"))
        );
    }

    #[test]
    fn test_year_boundary_week_keeps_one_key() {
        // Sunday 2024-12-29 opens the span containing New Year's Day
        let key = WeekKey::for_date(d("2024-12-30"));
        assert_eq!(key, WeekKey::for_date(d("2025-01-02")));
        assert_eq!(key.year, 2024);
    }

    #[test]
    fn test_numbering_follows_first_sunday() {
        // 2024 opens on a Monday; its first Sunday is Jan 7
        assert_eq!(WeekKey::for_date(d("2024-01-07")).number, 1);
        assert_eq!(WeekKey::for_date(d("2024-01-14")).number, 2);
        // Jan 1-6 spill into the closing week of 2023
        let spill = WeekKey::for_date(d("2024-01-03"));
        assert_eq!(spill.year, 2023);
        assert_eq!(spill.number, 53);
    }

    #[test]
    fn test_same_number_different_year() {
        let a = WeekKey::for_date(d("2023-06-05"));
        let b = WeekKey::for_date(d("2024-06-10"));
        assert_eq!(a.number, b.number);
        assert_ne!(a, b);
        assert!(a < b);
    }
}
