// Property-based tests for month navigation and grid layout

use admin_dashboard::services::calendar::{MonthCursor, MonthGrid};
use chrono::NaiveDate;
use proptest::prelude::*;

fn month() -> impl Strategy<Value = MonthCursor> {
    (1900..2200i32, 1..=12u32).prop_map(|(year, month)| MonthCursor::new(year, month).unwrap())
}

proptest! {
    /// next then prev returns to the starting month
    #[test]
    fn prop_next_prev_identity(cursor in month()) {
        prop_assert_eq!(cursor.next().prev(), cursor);
        prop_assert_eq!(cursor.prev().next(), cursor);
    }

    /// Twelve steps forward is the same month a year later
    #[test]
    fn prop_twelve_months_is_a_year(cursor in month()) {
        let later = cursor.shifted(12);
        prop_assert_eq!(later.year(), cursor.year() + 1);
        prop_assert_eq!(later.month(), cursor.month());
    }

    /// Months have 28 to 31 days and the day after the last is in the next month
    #[test]
    fn prop_days_in_month_bounds(cursor in month()) {
        let days = cursor.days_in_month();
        prop_assert!((28..=31).contains(&days));
        let last = cursor.day(days).unwrap();
        prop_assert!(cursor.day(days + 1).is_none());
        prop_assert!(cursor.next().contains(last.succ_opt().unwrap()));
    }

    /// Grid holds offset blanks then exactly one cell per day, within six weeks
    #[test]
    fn prop_grid_shape(cursor in month()) {
        let today = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
        let grid = MonthGrid::build(cursor, &[], today);
        prop_assert_eq!(grid.leading_blanks, cursor.first_weekday_offset());
        prop_assert!(grid.leading_blanks < 7);
        prop_assert_eq!(grid.days.len() as u32, cursor.days_in_month());
        prop_assert_eq!(grid.cells().count() as u32, grid.leading_blanks + cursor.days_in_month());
        prop_assert!((4..=6).contains(&grid.weeks()));
    }

    /// Display and parse agree
    #[test]
    fn prop_month_text_parses_back(cursor in month()) {
        prop_assert_eq!(cursor.to_string().parse::<MonthCursor>().unwrap(), cursor);
    }
}
