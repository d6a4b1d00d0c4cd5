// Test fixtures - reusable test data
// Builds users and events outside the seed set so filters can be exercised

#![allow(dead_code)]

use admin_dashboard::models::calendar_event::{CalendarEvent, EventType};
use admin_dashboard::models::user::{Role, User, UserStatus};
use chrono::NaiveDate;

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Users whose names and emails overlap on purpose.
pub fn overlapping_users() -> Vec<User> {
    vec![
        User::new(1, "Ann Lee", "ann@corp.io", Role::Admin, UserStatus::Active, date(2023, 1, 2), "AL"),
        User::new(2, "Bob Annis", "bob@corp.io", Role::User, UserStatus::Inactive, date(2023, 5, 9), "BA"),
        User::new(3, "Cara Diaz", "cara.ann@corp.io", Role::Editor, UserStatus::Active, date(2022, 11, 30), "CD"),
        User::new(4, "Dan Ng", "dan@corp.io", Role::User, UserStatus::Active, date(2024, 2, 14), "DN"),
    ]
}

/// Five events on the same day, more than a cell shows inline.
pub fn busy_day(day: NaiveDate) -> Vec<CalendarEvent> {
    (1..=5)
        .map(|id| CalendarEvent::new(id, format!("Event {id}"), day, "09:00", EventType::Meeting))
        .collect()
}
