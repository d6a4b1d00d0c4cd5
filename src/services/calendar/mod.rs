//! Month-grid derivation and navigation for the calendar panel.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};

use crate::error::DashboardError;
use crate::models::calendar_event::CalendarEvent;
use crate::utils::date::{days_in_month, first_weekday_offset, shift_month};

/// Events rendered inline in a day cell before the "+N more" counter.
pub const MAX_INLINE_EVENTS: usize = 2;

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

pub const DAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// A calendar month. Always refers to day 1 of that month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthCursor {
    year: i32,
    month: u32,
}

impl MonthCursor {
    pub fn new(year: i32, month: u32) -> Result<Self, DashboardError> {
        if !(1..=12).contains(&month) || NaiveDate::from_ymd_opt(year, month, 1).is_none() {
            return Err(DashboardError::invalid("month", format!("{year}-{month:02}")));
        }
        Ok(Self { year, month })
    }

    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn days_in_month(&self) -> u32 {
        days_in_month(self.year, self.month)
    }

    /// Weekday of day 1, 0 = Sunday .. 6 = Saturday.
    pub fn first_weekday_offset(&self) -> u32 {
        first_weekday_offset(self.year, self.month)
    }

    pub fn day(&self, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, day)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    pub fn shifted(&self, delta_months: i32) -> Self {
        let (year, month) = shift_month(self.year, self.month, delta_months);
        Self { year, month }
    }

    pub fn next(&self) -> Self {
        self.shifted(1)
    }

    pub fn prev(&self) -> Self {
        self.shifted(-1)
    }

    /// Heading text, e.g. "June 2024".
    pub fn label(&self) -> String {
        format!("{} {}", MONTH_NAMES[(self.month - 1) as usize], self.year)
    }
}

impl fmt::Display for MonthCursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for MonthCursor {
    type Err = DashboardError;

    /// Parses `YYYY-MM`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DashboardError::invalid("month", s);
        let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;
        let year = year.parse::<i32>().map_err(|_| invalid())?;
        let month = month.parse::<u32>().map_err(|_| invalid())?;
        Self::new(year, month).map_err(|_| invalid())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Prev,
    Next,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarAction {
    Navigate(Direction),
    /// Jump to the month containing the given (real) current date
    GoToToday(NaiveDate),
    SelectDate(NaiveDate),
    ClearSelection,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarState {
    current_month: MonthCursor,
    selected_date: Option<NaiveDate>,
}

impl CalendarState {
    pub fn new(current_month: MonthCursor) -> Self {
        Self {
            current_month,
            selected_date: None,
        }
    }

    pub fn current_month(&self) -> MonthCursor {
        self.current_month
    }

    pub fn selected_date(&self) -> Option<NaiveDate> {
        self.selected_date
    }

    pub fn apply(&mut self, action: CalendarAction) {
        match action {
            CalendarAction::Navigate(Direction::Prev) => {
                self.current_month = self.current_month.prev();
            }
            CalendarAction::Navigate(Direction::Next) => {
                self.current_month = self.current_month.next();
            }
            CalendarAction::GoToToday(today) => {
                self.current_month = MonthCursor::containing(today);
            }
            CalendarAction::SelectDate(date) => self.selected_date = Some(date),
            CalendarAction::ClearSelection => self.selected_date = None,
        }
        log::debug!("Calendar showing {}", self.current_month);
    }

    pub fn with(mut self, action: CalendarAction) -> Self {
        self.apply(action);
        self
    }

    pub fn grid<'a>(&self, events: &'a [CalendarEvent], today: NaiveDate) -> MonthGrid<'a> {
        MonthGrid::build(self.current_month, events, today)
    }
}

/// One day of the month with the events falling on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCell<'a> {
    pub date: NaiveDate,
    pub events: Vec<&'a CalendarEvent>,
    pub is_today: bool,
}

impl<'a> DayCell<'a> {
    pub fn day(&self) -> u32 {
        self.date.day()
    }

    pub fn visible_events(&self) -> &[&'a CalendarEvent] {
        let shown = self.events.len().min(MAX_INLINE_EVENTS);
        &self.events[..shown]
    }

    pub fn overflow(&self) -> usize {
        self.events.len().saturating_sub(MAX_INLINE_EVENTS)
    }

    pub fn overflow_label(&self) -> Option<String> {
        match self.overflow() {
            0 => None,
            n => Some(format!("+{n} more")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridCell<'a, 'b> {
    Blank,
    Day(&'b DayCell<'a>),
}

/// Sunday-first month layout: leading blanks then one cell per day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid<'a> {
    pub month: MonthCursor,
    pub leading_blanks: u32,
    pub days: Vec<DayCell<'a>>,
}

impl<'a> MonthGrid<'a> {
    pub fn build(month: MonthCursor, events: &'a [CalendarEvent], today: NaiveDate) -> Self {
        let days = (1..=month.days_in_month())
            .filter_map(|day| month.day(day))
            .map(|date| DayCell {
                date,
                events: events_on(events, date),
                is_today: date == today,
            })
            .collect();

        Self {
            month,
            leading_blanks: month.first_weekday_offset(),
            days,
        }
    }

    /// All cells in row-major order, blanks first.
    pub fn cells(&self) -> impl Iterator<Item = GridCell<'a, '_>> {
        (0..self.leading_blanks)
            .map(|_| GridCell::Blank)
            .chain(self.days.iter().map(GridCell::Day))
    }

    pub fn day(&self, day: u32) -> Option<&DayCell<'a>> {
        day.checked_sub(1).and_then(|idx| self.days.get(idx as usize))
    }

    /// Rows needed to show every cell.
    pub fn weeks(&self) -> usize {
        (self.leading_blanks as usize + self.days.len()).div_ceil(7)
    }
}

pub fn events_on(events: &[CalendarEvent], date: NaiveDate) -> Vec<&CalendarEvent> {
    events.iter().filter(|event| event.date == date).collect()
}

pub fn find_event(events: &[CalendarEvent], id: u32) -> Option<&CalendarEvent> {
    events.iter().find(|event| event.id == id)
}

/// Events listed in the side panel, in seed order.
pub fn upcoming_events(events: &[CalendarEvent], limit: usize) -> &[CalendarEvent] {
    &events[..events.len().min(limit)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::calendar_event::EventType;
    use crate::services::seed;

    fn june_2024() -> MonthCursor {
        MonthCursor::new(2024, 6).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_june_2024_shape() {
        let month = june_2024();
        assert_eq!(month.days_in_month(), 30);
        assert_eq!(month.first_weekday_offset(), 6);

        let events = seed::calendar_events();
        let grid = MonthGrid::build(month, &events, date(2024, 1, 1));
        assert_eq!(grid.leading_blanks, 6);
        assert_eq!(grid.days.len(), 30);
        assert_eq!(grid.cells().count(), 36);
        assert_eq!(grid.weeks(), 6);
    }

    #[test]
    fn test_event_lands_only_on_its_day() {
        let events = seed::calendar_events();
        let grid = MonthGrid::build(june_2024(), &events, date(2024, 1, 1));
        for cell in &grid.days {
            let has_team_meeting = cell.events.iter().any(|e| e.title == "Team Meeting");
            assert_eq!(has_team_meeting, cell.day() == 15, "day {}", cell.day());
        }
    }

    #[test]
    fn test_other_months_have_no_seed_events() {
        let events = seed::calendar_events();
        let grid = MonthGrid::build(MonthCursor::new(2024, 7).unwrap(), &events, date(2024, 1, 1));
        assert!(grid.days.iter().all(|cell| cell.events.is_empty()));
    }

    #[test]
    fn test_today_flag() {
        let events = seed::calendar_events();
        let grid = MonthGrid::build(june_2024(), &events, date(2024, 6, 20));
        let today: Vec<u32> = grid.days.iter().filter(|c| c.is_today).map(|c| c.day()).collect();
        assert_eq!(today, vec![20]);

        let grid = MonthGrid::build(june_2024(), &events, date(2025, 6, 20));
        assert!(grid.days.iter().all(|c| !c.is_today));
    }

    #[test]
    fn test_overflow_counter() {
        let busy_day = date(2024, 6, 3);
        let events: Vec<CalendarEvent> = (1..=4)
            .map(|id| CalendarEvent::new(id, format!("Standup {id}"), busy_day, "9:00 AM", EventType::Meeting))
            .collect();
        let grid = MonthGrid::build(june_2024(), &events, date(2024, 1, 1));
        let cell = grid.day(3).unwrap();
        assert_eq!(cell.visible_events().len(), 2);
        assert_eq!(cell.overflow_label().as_deref(), Some("+2 more"));
        assert_eq!(grid.day(4).unwrap().overflow_label(), None);
    }

    #[test]
    fn test_navigation_rolls_over_years() {
        let state = CalendarState::new(june_2024()).with(CalendarAction::Navigate(Direction::Next));
        assert_eq!(state.current_month(), MonthCursor::new(2024, 7).unwrap());

        let state = CalendarState::new(MonthCursor::new(2024, 12).unwrap())
            .with(CalendarAction::Navigate(Direction::Next));
        assert_eq!(state.current_month(), MonthCursor::new(2025, 1).unwrap());

        let state = state
            .with(CalendarAction::Navigate(Direction::Prev))
            .with(CalendarAction::Navigate(Direction::Prev));
        assert_eq!(state.current_month(), MonthCursor::new(2024, 11).unwrap());
    }

    #[test]
    fn test_go_to_today_and_selection() {
        let state = CalendarState::new(june_2024())
            .with(CalendarAction::SelectDate(date(2024, 6, 15)))
            .with(CalendarAction::GoToToday(date(2026, 10, 17)));
        assert_eq!(state.current_month(), MonthCursor::new(2026, 10).unwrap());
        assert_eq!(state.selected_date(), Some(date(2024, 6, 15)));

        let state = state.with(CalendarAction::ClearSelection);
        assert_eq!(state.selected_date(), None);
    }

    #[test]
    fn test_month_cursor_parse_and_label() {
        let month: MonthCursor = "2024-06".parse().unwrap();
        assert_eq!(month, june_2024());
        assert_eq!(month.label(), "June 2024");
        assert_eq!(month.to_string(), "2024-06");
        assert!("2024-13".parse::<MonthCursor>().is_err());
        assert!("June".parse::<MonthCursor>().is_err());
    }

    #[test]
    fn test_lookups() {
        let events = seed::calendar_events();
        assert_eq!(find_event(&events, 2).map(|e| e.title.as_str()), Some("Project Deadline"));
        assert!(find_event(&events, 99).is_none());
        assert!(events_on(&events, date(2024, 6, 16)).is_empty());
        assert_eq!(upcoming_events(&events, 2).len(), 2);
        assert_eq!(upcoming_events(&events, 10).len(), 4);
    }
}
