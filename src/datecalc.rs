//! Calendar span between two dates, as the age calculator reports it.

use crate::error::ToolError;
use chrono::{Datelike, NaiveDate};
use serde::Serialize;

/// Elapsed time between two dates, broken down calendar-style plus the
/// flat totals the widget shows alongside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AgeBreakdown {
    pub years: u32,
    /// Whole months past the last year boundary, always in 0..=11.
    pub months: u32,
    /// Days past the last month boundary.
    pub days: u32,
    /// Exact day count between the two dates, computed independently of
    /// the calendar breakdown.
    pub total_days: i64,
    pub total_weeks: i64,
    pub total_months: u32,
}

/// Split `birth..today` into years, months, and days.
///
/// The month count is the largest number of whole months whose
/// anniversary does not pass `today`; an anniversary landing on a day the
/// target month doesn't have clamps to that month's last day (Jan 31 plus
/// one month is Feb 28 or 29). The leftover is counted in exact days, so
/// the result never goes negative the way a naive day subtraction does.
pub fn between(birth: NaiveDate, today: NaiveDate) -> Result<AgeBreakdown, ToolError> {
    if birth > today {
        return Err(ToolError::invalid_input(
            "birth date",
            "must not be in the future",
        ));
    }

    let mut whole_months =
        (today.year() - birth.year()) * 12 + (today.month() as i32 - birth.month() as i32);
    let mut anniversary = add_months_clamped(birth, whole_months);
    if anniversary > today {
        whole_months -= 1;
        anniversary = add_months_clamped(birth, whole_months);
    }

    let days = (today - anniversary).num_days() as u32;
    let total_days = (today - birth).num_days();

    Ok(AgeBreakdown {
        years: (whole_months / 12) as u32,
        months: (whole_months % 12) as u32,
        days,
        total_days,
        total_weeks: total_days / 7,
        total_months: whole_months as u32,
    })
}

/// `date` shifted by `months` whole months, day-of-month clamped to the
/// target month's length.
fn add_months_clamped(date: NaiveDate, months: i32) -> NaiveDate {
    let zero_based = date.year() * 12 + date.month() as i32 - 1 + months;
    let year = zero_based.div_euclid(12);
    let month = zero_based.rem_euclid(12) as u32 + 1;
    let day = date.day().min(days_in_month(year, month));
    NaiveDate::from_ymd_opt(year, month, day).expect("clamped day is always valid")
}

/// Number of days in the given month.
fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    let first = NaiveDate::from_ymd_opt(year, month, 1).expect("month in 1..=12");
    let next_first = NaiveDate::from_ymd_opt(next_year, next_month, 1).expect("month in 1..=12");
    (next_first - first).num_days() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn exact_anniversary() {
        let span = between(date(2000, 1, 1), date(2024, 1, 1)).unwrap();
        assert_eq!((span.years, span.months, span.days), (24, 0, 0));
        assert_eq!(span.total_months, 288);
        assert_eq!(span.total_days, 8766); // 24 years spanning 6 leap days
        assert_eq!(span.total_weeks, 8766 / 7);
    }

    #[test]
    fn borrow_across_leap_february() {
        // Jan 31 + 1 month clamps to Feb 29 in 2000; one more day lands
        // on Mar 1.
        let span = between(date(2000, 1, 31), date(2000, 3, 1)).unwrap();
        assert_eq!((span.years, span.months, span.days), (0, 1, 1));
        assert_eq!(span.total_days, 30);
    }

    #[test]
    fn borrow_across_plain_february() {
        let span = between(date(2001, 1, 31), date(2001, 3, 1)).unwrap();
        assert_eq!((span.years, span.months, span.days), (0, 1, 1));
        assert_eq!(span.total_days, 29);
    }

    #[test]
    fn day_before_the_anniversary() {
        let span = between(date(1990, 6, 15), date(2020, 6, 14)).unwrap();
        assert_eq!((span.years, span.months, span.days), (29, 11, 30));
        assert_eq!(span.total_months, 29 * 12 + 11);
    }

    #[test]
    fn same_day_is_zero() {
        let span = between(date(2024, 2, 29), date(2024, 2, 29)).unwrap();
        assert_eq!((span.years, span.months, span.days), (0, 0, 0));
        assert_eq!(span.total_days, 0);
    }

    #[test]
    fn partial_month_only() {
        let span = between(date(2024, 3, 10), date(2024, 3, 25)).unwrap();
        assert_eq!((span.years, span.months, span.days), (0, 0, 15));
        assert_eq!(span.total_weeks, 2);
    }

    #[test]
    fn future_birth_date_is_rejected() {
        let err = between(date(2024, 1, 2), date(2024, 1, 1)).unwrap_err();
        assert!(matches!(err, ToolError::InvalidInput { field, .. } if field == "birth date"));
    }

    #[test]
    fn month_lengths() {
        assert_eq!(days_in_month(2000, 2), 29); // divisible by 400
        assert_eq!(days_in_month(1900, 2), 28); // divisible by 100 only
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 12), 31);
        assert_eq!(days_in_month(2023, 4), 30);
    }
}
