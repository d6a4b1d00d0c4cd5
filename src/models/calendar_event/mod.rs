//! Calendar event shown in the month grid.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    Meeting,
    Deadline,
    Event,
}

impl EventType {
    pub const ALL: [EventType; 3] = [EventType::Meeting, EventType::Deadline, EventType::Event];

    pub fn as_str(self) -> &'static str {
        match self {
            EventType::Meeting => "meeting",
            EventType::Deadline => "deadline",
            EventType::Event => "event",
        }
    }

    /// Plural label used by the legend
    pub fn legend_label(self) -> &'static str {
        match self {
            EventType::Meeting => "Meetings",
            EventType::Deadline => "Deadlines",
            EventType::Event => "Events",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub id: u32,
    pub title: String,
    pub date: NaiveDate,
    /// Display string such as "10:00 AM"
    pub time: String,
    pub event_type: EventType,
    pub location: Option<String>,
}

impl CalendarEvent {
    pub fn new(
        id: u32,
        title: impl Into<String>,
        date: NaiveDate,
        time: impl Into<String>,
        event_type: EventType,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            date,
            time: time.into(),
            event_type,
            location: None,
        }
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}
