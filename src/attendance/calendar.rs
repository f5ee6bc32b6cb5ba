use chrono::{Datelike, Duration, Months, NaiveDate};

/// First and last calendar day of the given month, used for API range queries.
pub fn month_bounds(year: i32, month: u32) -> Option<(NaiveDate, NaiveDate)> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next_month = first.checked_add_months(Months::new(1))?;
    let last = next_month.checked_sub_signed(Duration::days(1))?;
    Some((first, last))
}

/// The ordered sequence of calendar dates covering the whole month, day 1 to
/// the last day, leap years included. Pure and deterministic; an invalid
/// month yields an empty sequence (callers only pass 1..=12).
pub fn month_days(year: i32, month: u32) -> Vec<NaiveDate> {
    let Some((first, last)) = month_bounds(year, month) else {
        return Vec::new();
    };
    first
        .iter_days()
        .take_while(|day| *day <= last)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_bounds_returns_expected_range() {
        let (start, end) = month_bounds(2025, 2).unwrap();
        assert_eq!(start, NaiveDate::from_ymd_opt(2025, 2, 1).unwrap());
        assert_eq!(end, NaiveDate::from_ymd_opt(2025, 2, 28).unwrap());
    }

    #[test]
    fn month_days_covers_leap_february() {
        let days = month_days(2024, 2);
        assert_eq!(days.len(), 29);
        assert_eq!(days[0].day(), 1);
        assert_eq!(days[28].day(), 29);
    }

    #[test]
    fn month_days_covers_common_february() {
        assert_eq!(month_days(2023, 2).len(), 28);
    }

    #[test]
    fn month_days_matches_month_lengths() {
        assert_eq!(month_days(2025, 1).len(), 31);
        assert_eq!(month_days(2025, 4).len(), 30);
        assert_eq!(month_days(2025, 12).len(), 31);
    }

    #[test]
    fn month_days_is_strictly_increasing_from_day_one() {
        let days = month_days(2025, 7);
        assert_eq!(days[0].day(), 1);
        for pair in days.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn month_days_invalid_month_is_empty() {
        assert!(month_days(2025, 13).is_empty());
        assert!(month_days(2025, 0).is_empty());
    }
}
