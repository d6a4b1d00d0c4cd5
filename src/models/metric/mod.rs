//! Static business metrics for the dashboard and analytics panels.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
}

/// Headline number with its change badge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricCard {
    pub title: &'static str,
    pub value: &'static str,
    pub change: &'static str,
    pub icon: &'static str,
    pub trend: Trend,
}

/// One labelled point of a chart series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesPoint {
    pub label: &'static str,
    pub value: f64,
}

/// A named share of a breakdown (pie/bar) with its own colour.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slice {
    pub name: &'static str,
    pub value: f64,
    pub color: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthlyStat {
    pub month: &'static str,
    pub users: u32,
    pub revenue: u32,
    pub orders: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    pub user: &'static str,
    pub action: &'static str,
    pub time: &'static str,
    pub avatar: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Insight {
    pub label: &'static str,
    pub value: &'static str,
    pub subtext: &'static str,
}

/// Signed-in user card shown at the top of the sidebar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarProfile {
    pub name: &'static str,
    pub title: &'static str,
    /// (label, value) pairs in display order
    pub stats: [(&'static str, &'static str); 3],
    pub storage_used_percent: u8,
    pub storage_label: &'static str,
}
