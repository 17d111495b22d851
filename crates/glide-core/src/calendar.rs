//! Calendar date arithmetic for month-grid components.
//!
//! Comparison, offsetting and grid-row helpers on [`chrono::NaiveDate`].
//! Month and year offsets clamp the day-of-month to the target month's
//! length, so "one month after January 31" lands on the last day of
//! February rather than spilling into March.

use std::cmp::Ordering;

use chrono::{Datelike, Days, Local, Months, NaiveDate};

/// Compare two dates by year and month, ignoring the day-of-month.
pub fn compare_month(a: NaiveDate, b: NaiveDate) -> Ordering {
    (a.year(), a.month()).cmp(&(b.year(), b.month()))
}

/// Compare two dates by year, month and day-of-month.
pub fn compare_day(a: NaiveDate, b: NaiveDate) -> Ordering {
    compare_month(a, b).then_with(|| a.day().cmp(&b.day()))
}

/// The date `offset` days away. Saturates at the representable range.
pub fn day_by_offset(date: NaiveDate, offset: i64) -> NaiveDate {
    let shifted = if offset >= 0 {
        date.checked_add_days(Days::new(offset as u64))
    } else {
        date.checked_sub_days(Days::new(offset.unsigned_abs()))
    };
    shifted.unwrap_or(date)
}

/// The date `offset` months away, day-of-month clamped to the target
/// month's length. Saturates at the representable range.
pub fn month_by_offset(date: NaiveDate, offset: i32) -> NaiveDate {
    let shifted = if offset >= 0 {
        date.checked_add_months(Months::new(offset as u32))
    } else {
        date.checked_sub_months(Months::new(offset.unsigned_abs()))
    };
    shifted.unwrap_or(date)
}

/// The date `offset` years away, with the same day clamping as
/// [`month_by_offset`] (February 29 maps to February 28 off leap years).
pub fn year_by_offset(date: NaiveDate, offset: i32) -> NaiveDate {
    month_by_offset(date, offset.saturating_mul(12))
}

pub fn prev_day(date: NaiveDate) -> NaiveDate {
    day_by_offset(date, -1)
}

pub fn next_day(date: NaiveDate) -> NaiveDate {
    day_by_offset(date, 1)
}

pub fn prev_month(date: NaiveDate) -> NaiveDate {
    month_by_offset(date, -1)
}

pub fn next_month(date: NaiveDate) -> NaiveDate {
    month_by_offset(date, 1)
}

pub fn prev_year(date: NaiveDate) -> NaiveDate {
    year_by_offset(date, -1)
}

pub fn next_year(date: NaiveDate) -> NaiveDate {
    year_by_offset(date, 1)
}

/// Today's date in the local timezone.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Inclusive number of days covered by a range: a range starting and
/// ending on the same day spans 1.
pub fn span_in_days(from: NaiveDate, to: NaiveDate) -> i64 {
    to.signed_duration_since(from).num_days() + 1
}

/// The last day of the date's month.
pub fn month_end(date: NaiveDate) -> NaiveDate {
    let first = date.with_day(1).unwrap_or(date);
    month_by_offset(first, 1).pred_opt().unwrap_or(date)
}

/// Whether the date sits in the last visual row of its month grid.
///
/// `offset` is the grid position of the month's first day (0 = first
/// column). Rows are 7 columns wide; a date is in the last row when its
/// row index equals the row index of the month's last day.
pub fn is_last_row_in_month(date: NaiveDate, offset: u32) -> bool {
    let current_pos = offset + date.day() - 1;
    let last_pos = offset + month_end(date).day() - 1;
    current_pos / 7 == last_pos / 7
}

/// Heading for a month grid, e.g. "August 2026".
pub fn month_title(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn compare_month_ignores_day() {
        assert_eq!(compare_month(date(2025, 3, 1), date(2025, 3, 31)), Ordering::Equal);
        assert_eq!(compare_month(date(2025, 2, 28), date(2025, 3, 1)), Ordering::Less);
        assert_eq!(compare_month(date(2026, 1, 1), date(2025, 12, 31)), Ordering::Greater);
    }

    #[test]
    fn compare_day_falls_through_to_day_of_month() {
        assert_eq!(compare_day(date(2025, 3, 14), date(2025, 3, 14)), Ordering::Equal);
        assert_eq!(compare_day(date(2025, 3, 14), date(2025, 3, 15)), Ordering::Less);
        assert_eq!(compare_day(date(2025, 4, 1), date(2025, 3, 31)), Ordering::Greater);
    }

    #[test]
    fn day_offsets_cross_month_and_year_boundaries() {
        assert_eq!(day_by_offset(date(2025, 2, 28), 1), date(2025, 3, 1));
        assert_eq!(day_by_offset(date(2024, 2, 28), 1), date(2024, 2, 29));
        assert_eq!(day_by_offset(date(2025, 1, 1), -1), date(2024, 12, 31));
        assert_eq!(next_day(date(2025, 12, 31)), date(2026, 1, 1));
        assert_eq!(prev_day(date(2025, 3, 1)), date(2025, 2, 28));
    }

    #[test]
    fn month_offsets_clamp_to_month_length() {
        assert_eq!(month_by_offset(date(2025, 1, 31), 1), date(2025, 2, 28));
        assert_eq!(month_by_offset(date(2024, 1, 31), 1), date(2024, 2, 29));
        // the clamp applies to the destination month only
        assert_eq!(month_by_offset(date(2025, 1, 31), 2), date(2025, 3, 31));
        assert_eq!(month_by_offset(date(2025, 3, 31), -1), date(2025, 2, 28));
        assert_eq!(next_month(date(2025, 12, 15)), date(2026, 1, 15));
        assert_eq!(prev_month(date(2026, 1, 15)), date(2025, 12, 15));
    }

    #[test]
    fn year_offsets_clamp_leap_days() {
        assert_eq!(year_by_offset(date(2024, 2, 29), 1), date(2025, 2, 28));
        assert_eq!(year_by_offset(date(2024, 2, 29), 4), date(2028, 2, 29));
        assert_eq!(prev_year(date(2025, 6, 1)), date(2024, 6, 1));
        assert_eq!(next_year(date(2025, 6, 1)), date(2026, 6, 1));
    }

    #[test]
    fn span_is_inclusive() {
        assert_eq!(span_in_days(date(2025, 1, 1), date(2025, 1, 1)), 1);
        assert_eq!(span_in_days(date(2025, 1, 1), date(2025, 1, 31)), 31);
        assert_eq!(span_in_days(date(2024, 2, 1), date(2024, 3, 1)), 30);
    }

    #[test]
    fn month_end_handles_leap_years() {
        assert_eq!(month_end(date(2024, 2, 10)), date(2024, 2, 29));
        assert_eq!(month_end(date(2025, 2, 10)), date(2025, 2, 28));
        assert_eq!(month_end(date(2025, 12, 1)), date(2025, 12, 31));
    }

    #[test]
    fn last_row_detection() {
        // March 2024 starts on a Friday: offset 5 in a Sunday-first
        // grid, and the 31st (a Sunday) sits alone in the last row.
        assert!(is_last_row_in_month(date(2024, 3, 31), 5));
        assert!(!is_last_row_in_month(date(2024, 3, 25), 5));

        // April 2024 starts on a Monday: offset 1, last row holds the
        // 28th through the 30th.
        assert!(is_last_row_in_month(date(2024, 4, 28), 1));
        assert!(is_last_row_in_month(date(2024, 4, 30), 1));
        assert!(!is_last_row_in_month(date(2024, 4, 27), 1));
    }

    #[test]
    fn last_row_respects_grid_offset() {
        // With a Monday-first grid, April 2024 starts in column 0 and
        // the last row shrinks to the 29th and 30th.
        assert!(is_last_row_in_month(date(2024, 4, 29), 0));
        assert!(!is_last_row_in_month(date(2024, 4, 28), 0));
    }

    #[test]
    fn month_titles() {
        assert_eq!(month_title(date(2026, 8, 1)), "August 2026");
        assert_eq!(month_title(date(2024, 2, 29)), "February 2024");
    }
}
