//! Hard-coded seed datasets.
//!
//! Each panel operates over one of these fixed datasets. Nothing here is
//! fetched or persisted; every call returns a fresh copy.

use chrono::NaiveDate;

use crate::models::calendar_event::{CalendarEvent, EventType};
use crate::models::metric::{
    Activity, Insight, MetricCard, MonthlyStat, SeriesPoint, SidebarProfile, Slice, Trend,
};
use crate::models::task::{Column, Priority, Task};
use crate::models::user::{Role, User, UserStatus};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid seed date")
}

/// The five users listed in the data table.
pub fn users() -> Vec<User> {
    vec![
        User::new(1, "John Doe", "john@example.com", Role::Admin, UserStatus::Active, date(2024, 1, 15), "JD"),
        User::new(2, "Sarah Wilson", "sarah@example.com", Role::Editor, UserStatus::Active, date(2024, 2, 20), "SW"),
        User::new(3, "Mike Johnson", "mike@example.com", Role::User, UserStatus::Inactive, date(2024, 3, 10), "MJ"),
        User::new(4, "Emma Davis", "emma@example.com", Role::Editor, UserStatus::Active, date(2024, 4, 5), "ED"),
        User::new(5, "Alex Chen", "alex@example.com", Role::User, UserStatus::Active, date(2024, 5, 12), "AC"),
    ]
}

pub fn calendar_events() -> Vec<CalendarEvent> {
    vec![
        CalendarEvent::new(1, "Team Meeting", date(2024, 6, 15), "10:00 AM", EventType::Meeting)
            .with_location("Conference Room A"),
        CalendarEvent::new(2, "Project Deadline", date(2024, 6, 20), "5:00 PM", EventType::Deadline),
        CalendarEvent::new(3, "Client Presentation", date(2024, 6, 25), "2:00 PM", EventType::Meeting)
            .with_location("Client Office"),
        CalendarEvent::new(4, "Product Launch", date(2024, 6, 28), "12:00 PM", EventType::Event)
            .with_location("Main Auditorium"),
    ]
}

/// The four board columns in display order.
pub fn kanban_columns() -> Vec<Column> {
    vec![
        Column::new("todo", "To Do", "#F3F4F6").with_tasks(vec![
            Task::new(
                1,
                "Design System Updates",
                "Update the design system components with new brand guidelines",
                "Sarah Johnson",
                date(2024, 6, 20),
                Priority::High,
                &["Design", "UI/UX"],
            ),
            Task::new(
                2,
                "API Documentation",
                "Complete API documentation for v2.0 release",
                "Mike Chen",
                date(2024, 6, 25),
                Priority::Medium,
                &["Documentation", "API"],
            ),
        ]),
        Column::new("in-progress", "In Progress", "#DBEAFE").with_tasks(vec![
            Task::new(
                3,
                "User Authentication",
                "Implement OAuth 2.0 authentication system",
                "Alex Rodriguez",
                date(2024, 6, 18),
                Priority::High,
                &["Backend", "Security"],
            ),
            Task::new(
                4,
                "Mobile Responsive",
                "Make the dashboard mobile responsive",
                "Emma Davis",
                date(2024, 6, 22),
                Priority::Medium,
                &["Frontend", "Mobile"],
            ),
        ]),
        Column::new("review", "In Review", "#FEF9C3").with_tasks(vec![Task::new(
            5,
            "Performance Optimization",
            "Optimize application performance and loading times",
            "David Wilson",
            date(2024, 6, 15),
            Priority::Medium,
            &["Performance", "Optimization"],
        )]),
        Column::new("done", "Done", "#DCFCE7").with_tasks(vec![
            Task::new(
                6,
                "Dashboard Layout",
                "Complete the main dashboard layout design",
                "Lisa Brown",
                date(2024, 6, 10),
                Priority::High,
                &["Design", "Dashboard"],
            ),
            Task::new(
                7,
                "User Testing",
                "Conduct user testing sessions for new features",
                "Tom Wilson",
                date(2024, 6, 12),
                Priority::Low,
                &["Testing", "UX"],
            ),
        ]),
    ]
}

// Dashboard overview

pub fn dashboard_metrics() -> Vec<MetricCard> {
    vec![
        MetricCard { title: "Total Users", value: "2,845", change: "+12.5%", icon: "👥", trend: Trend::Up },
        MetricCard { title: "Revenue", value: "$45,720", change: "+8.2%", icon: "💲", trend: Trend::Up },
        MetricCard { title: "Orders", value: "1,239", change: "-3.1%", icon: "🛒", trend: Trend::Down },
        MetricCard { title: "Growth", value: "23.5%", change: "+5.4%", icon: "📈", trend: Trend::Up },
    ]
}

pub fn revenue_series() -> Vec<SeriesPoint> {
    [("Jan", 2400.0), ("Feb", 1398.0), ("Mar", 3800.0), ("Apr", 3908.0), ("May", 4800.0), ("Jun", 3800.0)]
        .into_iter()
        .map(|(label, value)| SeriesPoint { label, value })
        .collect()
}

pub fn device_breakdown() -> Vec<Slice> {
    vec![
        Slice { name: "Desktop", value: 45.0, color: "#3B82F6" },
        Slice { name: "Mobile", value: 35.0, color: "#8B5CF6" },
        Slice { name: "Tablet", value: 20.0, color: "#10B981" },
    ]
}

pub fn recent_activity() -> Vec<Activity> {
    vec![
        Activity { user: "Sarah Johnson", action: "completed a purchase", time: "2 minutes ago", avatar: "SJ" },
        Activity { user: "Mike Chen", action: "signed up for premium", time: "15 minutes ago", avatar: "MC" },
        Activity { user: "Emma Davis", action: "left a 5-star review", time: "1 hour ago", avatar: "ED" },
        Activity { user: "Alex Rodriguez", action: "updated their profile", time: "3 hours ago", avatar: "AR" },
    ]
}

// Analytics

pub fn analytics_metrics() -> Vec<MetricCard> {
    vec![
        MetricCard { title: "Total Revenue", value: "$248,000", change: "+12.5%", icon: "💲", trend: Trend::Up },
        MetricCard { title: "Active Users", value: "12,450", change: "+8.2%", icon: "👥", trend: Trend::Up },
        MetricCard { title: "Growth Rate", value: "23.1%", change: "+3.7%", icon: "📈", trend: Trend::Up },
        MetricCard { title: "Conversion", value: "4.2%", change: "+1.1%", icon: "📊", trend: Trend::Up },
    ]
}

pub fn monthly_stats() -> Vec<MonthlyStat> {
    vec![
        MonthlyStat { month: "Jan", users: 1200, revenue: 24000, orders: 450 },
        MonthlyStat { month: "Feb", users: 1100, revenue: 22000, orders: 420 },
        MonthlyStat { month: "Mar", users: 1800, revenue: 36000, orders: 680 },
        MonthlyStat { month: "Apr", users: 1900, revenue: 38000, orders: 720 },
        MonthlyStat { month: "May", users: 2100, revenue: 42000, orders: 800 },
        MonthlyStat { month: "Jun", users: 2400, revenue: 48000, orders: 900 },
    ]
}

pub fn category_sales() -> Vec<Slice> {
    vec![
        Slice { name: "Electronics", value: 4500.0, color: "#3B82F6" },
        Slice { name: "Clothing", value: 3200.0, color: "#8B5CF6" },
        Slice { name: "Home & Garden", value: 2800.0, color: "#10B981" },
        Slice { name: "Sports", value: 2100.0, color: "#F97316" },
        Slice { name: "Books", value: 1500.0, color: "#EF4444" },
    ]
}

pub fn insights() -> Vec<Insight> {
    vec![
        Insight { label: "Best Performing Month", value: "June 2024", subtext: "+15% from May" },
        Insight { label: "Top Category", value: "Electronics", subtext: "$4,500 revenue" },
        Insight { label: "Average Order Value", value: "$89.50", subtext: "+5.2% this month" },
    ]
}

pub fn sidebar_profile() -> SidebarProfile {
    SidebarProfile {
        name: "Aryan Singh",
        title: "Product Manager",
        stats: [("Projects", "24"), ("Tasks", "67"), ("Messages", "12")],
        storage_used_percent: 67,
        storage_label: "8.2 GB of 12 GB used",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_ids_are_unique() {
        let user_ids: HashSet<_> = users().iter().map(|u| u.id).collect();
        assert_eq!(user_ids.len(), 5);

        let event_ids: HashSet<_> = calendar_events().iter().map(|e| e.id).collect();
        assert_eq!(event_ids.len(), 4);

        let task_ids: HashSet<_> = kanban_columns()
            .iter()
            .flat_map(|c| c.tasks.iter().map(|t| t.id))
            .collect();
        assert_eq!(task_ids.len(), 7);
    }

    #[test]
    fn test_device_breakdown_sums_to_hundred() {
        let total: f64 = device_breakdown().iter().map(|s| s.value).sum();
        assert_eq!(total, 100.0);
    }

    #[test]
    fn test_monthly_series_cover_first_half_year() {
        assert_eq!(monthly_stats().len(), 6);
        assert_eq!(revenue_series().len(), 6);
    }

    #[test]
    fn test_sidebar_profile_stats() {
        let profile = sidebar_profile();
        let labels: Vec<_> = profile.stats.iter().map(|(label, _)| *label).collect();
        assert_eq!(labels, vec!["Projects", "Tasks", "Messages"]);
        assert_eq!(profile.stats[1].1, "67");
        assert!(profile.storage_used_percent <= 100);
    }
}
