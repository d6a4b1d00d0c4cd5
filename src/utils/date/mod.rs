// Date utility functions
// Month arithmetic shared by the calendar grid and navigation

use chrono::{Datelike, NaiveDate};

/// Number of days in the given month, respecting leap years.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    match (
        NaiveDate::from_ymd_opt(next_year, next_month, 1),
        NaiveDate::from_ymd_opt(year, month, 1),
    ) {
        (Some(first_of_next), Some(first)) => {
            first_of_next.signed_duration_since(first).num_days() as u32
        }
        _ => 0,
    }
}

/// Weekday of the first day of the month, 0 = Sunday .. 6 = Saturday.
pub fn first_weekday_offset(year: i32, month: u32) -> u32 {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|first| first.weekday().num_days_from_sunday())
        .unwrap_or(0)
}

/// Shift a (year, month) pair by `delta_months`, rolling over year boundaries.
pub fn shift_month(year: i32, month: u32, delta_months: i32) -> (i32, u32) {
    let total_months = (year * 12) + (month as i32 - 1) + delta_months;
    let new_year = total_months.div_euclid(12);
    let new_month = total_months.rem_euclid(12) + 1;
    (new_year, new_month as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(2024, 2, 29 ; "leap february")]
    #[test_case(2023, 2, 28 ; "common february")]
    #[test_case(1900, 2, 28 ; "century non leap")]
    #[test_case(2000, 2, 29 ; "quad century leap")]
    #[test_case(2024, 6, 30 ; "june")]
    #[test_case(2024, 12, 31 ; "december")]
    fn test_days_in_month(year: i32, month: u32, expected: u32) {
        assert_eq!(days_in_month(year, month), expected);
    }

    #[test]
    fn test_first_weekday_offset() {
        // 2024-06-01 is a Saturday
        assert_eq!(first_weekday_offset(2024, 6), 6);
        // 2024-09-01 is a Sunday
        assert_eq!(first_weekday_offset(2024, 9), 0);
    }

    #[test_case(2024, 12, 1, (2025, 1))]
    #[test_case(2025, 1, -1, (2024, 12))]
    #[test_case(2024, 6, 1, (2024, 7))]
    #[test_case(2024, 6, -18, (2022, 12))]
    fn test_shift_month(year: i32, month: u32, delta: i32, expected: (i32, u32)) {
        assert_eq!(shift_month(year, month, delta), expected);
    }
}
