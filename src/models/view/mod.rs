//! View identifiers and sidebar metadata.
//!
//! Every panel reachable from the sidebar is a `ViewId`. The mapping from an
//! id to its sidebar entry and page heading lives in one exhaustive match so
//! adding a view is a one-place change.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DashboardError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewId {
    #[default]
    Dashboard,
    Tables,
    Charts,
    Calendar,
    Kanban,
    Themes,
    Settings,
}

/// Sidebar entry and page header for a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewDescriptor {
    pub id: ViewId,
    pub label: &'static str,
    pub icon: &'static str,
    pub badge: Option<&'static str>,
    pub title: &'static str,
    pub subtitle: &'static str,
}

impl ViewId {
    /// All views in sidebar order.
    pub const ALL: [ViewId; 7] = [
        ViewId::Dashboard,
        ViewId::Tables,
        ViewId::Charts,
        ViewId::Calendar,
        ViewId::Kanban,
        ViewId::Themes,
        ViewId::Settings,
    ];

    pub fn id(self) -> &'static str {
        match self {
            ViewId::Dashboard => "dashboard",
            ViewId::Tables => "tables",
            ViewId::Charts => "charts",
            ViewId::Calendar => "calendar",
            ViewId::Kanban => "kanban",
            ViewId::Themes => "themes",
            ViewId::Settings => "settings",
        }
    }

    pub fn descriptor(self) -> ViewDescriptor {
        let (label, icon, badge, title, subtitle) = match self {
            ViewId::Dashboard => (
                "Dashboard",
                "🏠",
                None,
                "Dashboard Overview",
                "Welcome back! Here's what's happening with your business today.",
            ),
            ViewId::Tables => (
                "Data Tables",
                "📋",
                Some("12"),
                "Data Tables",
                "Manage and view your data with advanced filtering and sorting.",
            ),
            ViewId::Charts => (
                "Analytics",
                "📊",
                None,
                "Analytics",
                "Track performance and discover insights across your business.",
            ),
            ViewId::Calendar => (
                "Calendar",
                "📅",
                Some("3"),
                "Calendar",
                "Manage your schedule and track important events.",
            ),
            ViewId::Kanban => (
                "Kanban Board",
                "🗂",
                Some("5"),
                "Kanban Board",
                "Organize and track your team's work with the Kanban board.",
            ),
            ViewId::Themes => (
                "Themes",
                "🎨",
                None,
                "Theme Customization",
                "Choose your preferred color scheme to personalize your dashboard experience.",
            ),
            ViewId::Settings => (
                "Settings",
                "⚙",
                None,
                "Settings",
                "Manage your account settings and preferences.",
            ),
        };

        ViewDescriptor {
            id: self,
            label,
            icon,
            badge,
            title,
            subtitle,
        }
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ViewId {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ViewId::ALL
            .into_iter()
            .find(|view| view.id().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| DashboardError::invalid("view", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(ViewId::Tables, Some("12"))]
    #[test_case(ViewId::Calendar, Some("3"))]
    #[test_case(ViewId::Kanban, Some("5"))]
    #[test_case(ViewId::Dashboard, None)]
    #[test_case(ViewId::Settings, None)]
    fn test_sidebar_badges(view: ViewId, badge: Option<&str>) {
        assert_eq!(view.descriptor().badge, badge);
    }

    #[test]
    fn test_descriptor_id_matches_view() {
        for view in ViewId::ALL {
            assert_eq!(view.descriptor().id, view);
            assert_eq!(view.id().parse::<ViewId>().unwrap(), view);
        }
    }

    #[test]
    fn test_unknown_view_is_rejected() {
        assert!("reports".parse::<ViewId>().is_err());
    }

    #[test]
    fn test_default_view_is_dashboard() {
        assert_eq!(ViewId::default(), ViewId::Dashboard);
    }

    #[test]
    fn test_serialized_form_is_the_id() {
        for view in ViewId::ALL {
            let json = serde_json::to_string(&view).unwrap();
            assert_eq!(json, format!("\"{}\"", view.id()));
        }
    }

    #[test]
    fn test_themes_heading() {
        let descriptor = ViewId::Themes.descriptor();
        assert_eq!(descriptor.title, "Theme Customization");
        assert_eq!(
            descriptor.subtitle,
            "Choose your preferred color scheme to personalize your dashboard experience."
        );
    }
}
