use egui::Color32;

use crate::models::calendar_event::EventType;
use crate::models::task::Priority;
use crate::models::user::{Role, UserStatus};

/// Background/foreground pair for a pill-shaped badge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct BadgeColors {
    pub bg: Color32,
    pub fg: Color32,
}

const fn badge(bg: (u8, u8, u8), fg: (u8, u8, u8)) -> BadgeColors {
    BadgeColors {
        bg: Color32::from_rgb(bg.0, bg.1, bg.2),
        fg: Color32::from_rgb(fg.0, fg.1, fg.2),
    }
}

const PURPLE: BadgeColors = badge((243, 232, 255), (107, 33, 168));
const BLUE: BadgeColors = badge((219, 234, 254), (30, 64, 175));
const GRAY: BadgeColors = badge((243, 244, 246), (31, 41, 55));
const GREEN: BadgeColors = badge((220, 252, 231), (22, 101, 52));
const RED: BadgeColors = badge((254, 226, 226), (153, 27, 27));
const YELLOW: BadgeColors = badge((254, 249, 195), (133, 77, 14));

pub(crate) fn role_colors(role: Role) -> BadgeColors {
    match role {
        Role::Admin => PURPLE,
        Role::Editor => BLUE,
        Role::User => GRAY,
    }
}

pub(crate) fn status_colors(status: UserStatus) -> BadgeColors {
    match status {
        UserStatus::Active => GREEN,
        UserStatus::Inactive => RED,
    }
}

pub(crate) fn event_type_colors(event_type: EventType) -> BadgeColors {
    match event_type {
        EventType::Meeting => BLUE,
        EventType::Deadline => RED,
        EventType::Event => GREEN,
    }
}

/// Solid dot colour for the event legend.
pub(crate) fn event_type_dot(event_type: EventType) -> Color32 {
    match event_type {
        EventType::Meeting => Color32::from_rgb(59, 130, 246),
        EventType::Deadline => Color32::from_rgb(239, 68, 68),
        EventType::Event => Color32::from_rgb(34, 197, 94),
    }
}

pub(crate) fn priority_colors(priority: Priority) -> BadgeColors {
    match priority {
        Priority::Low => GREEN,
        Priority::Medium => YELLOW,
        Priority::High => RED,
    }
}

pub(crate) fn trend_color(up: bool) -> BadgeColors {
    if up {
        GREEN
    } else {
        RED
    }
}
