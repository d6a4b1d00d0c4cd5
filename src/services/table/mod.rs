//! Filter/sort engine behind the data table panel.
//!
//! The panel keeps a [`TableState`] and derives the visible rows from the
//! immutable seed on every change: text filter, then role filter, then a
//! stable sort. The seed slice is only ever borrowed.

use std::cmp::Ordering;
use std::str::FromStr;

use crate::error::DashboardError;
use crate::models::user::{Role, User};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RoleFilter {
    #[default]
    All,
    Admin,
    Editor,
    User,
}

impl RoleFilter {
    pub const ALL: [RoleFilter; 4] = [
        RoleFilter::All,
        RoleFilter::Admin,
        RoleFilter::Editor,
        RoleFilter::User,
    ];

    pub fn id(self) -> &'static str {
        match self {
            RoleFilter::All => "all",
            RoleFilter::Admin => "admin",
            RoleFilter::Editor => "editor",
            RoleFilter::User => "user",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RoleFilter::All => "All Roles",
            RoleFilter::Admin => "Admin",
            RoleFilter::Editor => "Editor",
            RoleFilter::User => "User",
        }
    }

    pub fn matches(self, role: Role) -> bool {
        self == RoleFilter::All || role.as_str().eq_ignore_ascii_case(self.id())
    }
}

impl FromStr for RoleFilter {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RoleFilter::ALL
            .into_iter()
            .find(|filter| filter.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DashboardError::invalid("role filter", s))
    }
}

/// Sortable table columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortKey {
    #[default]
    Name,
    Role,
    JoinDate,
}

impl SortKey {
    pub fn label(self) -> &'static str {
        match self {
            SortKey::Name => "User",
            SortKey::Role => "Role",
            SortKey::JoinDate => "Join Date",
        }
    }

    fn compare(self, a: &User, b: &User) -> Ordering {
        match self {
            SortKey::Name => a.name.cmp(&b.name),
            SortKey::Role => a.role.as_str().cmp(b.role.as_str()),
            SortKey::JoinDate => a.join_date.cmp(&b.join_date),
        }
    }
}

impl FromStr for SortKey {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "name" => Ok(SortKey::Name),
            "role" => Ok(SortKey::Role),
            "joinDate" | "join_date" => Ok(SortKey::JoinDate),
            _ => Err(DashboardError::invalid("sort key", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    pub fn arrow(self) -> &'static str {
        match self {
            SortDirection::Asc => "↑",
            SortDirection::Desc => "↓",
        }
    }
}

/// Input events accepted by the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableAction {
    SetSearch(String),
    SetRoleFilter(RoleFilter),
    /// Clicking a column header: flips direction on the active column,
    /// otherwise switches column and resets to ascending.
    SortBy(SortKey),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableState {
    search_term: String,
    role_filter: RoleFilter,
    sort_key: SortKey,
    sort_direction: SortDirection,
}

impl TableState {
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn role_filter(&self) -> RoleFilter {
        self.role_filter
    }

    pub fn sort_key(&self) -> SortKey {
        self.sort_key
    }

    pub fn sort_direction(&self) -> SortDirection {
        self.sort_direction
    }

    pub fn apply(&mut self, action: TableAction) {
        match action {
            TableAction::SetSearch(term) => self.search_term = term,
            TableAction::SetRoleFilter(filter) => self.role_filter = filter,
            TableAction::SortBy(key) if key == self.sort_key => {
                self.sort_direction = self.sort_direction.toggled();
            }
            TableAction::SortBy(key) => {
                self.sort_key = key;
                self.sort_direction = SortDirection::Asc;
            }
        }
        log::debug!(
            "Table state: search='{}' role={} sort={:?} {:?}",
            self.search_term,
            self.role_filter.id(),
            self.sort_key,
            self.sort_direction
        );
    }

    /// Consuming form of [`apply`](Self::apply).
    pub fn with(mut self, action: TableAction) -> Self {
        self.apply(action);
        self
    }

    fn matches_search(&self, user: &User) -> bool {
        if self.search_term.is_empty() {
            return true;
        }
        let needle = self.search_term.to_lowercase();
        user.name.to_lowercase().contains(&needle) || user.email.to_lowercase().contains(&needle)
    }

    /// Derive the visible rows from `users`.
    pub fn view<'a>(&self, users: &'a [User]) -> TableView<'a> {
        let mut rows: Vec<&User> = users
            .iter()
            .filter(|user| self.matches_search(user))
            .filter(|user| self.role_filter.matches(user.role))
            .collect();

        let key = self.sort_key;
        match self.sort_direction {
            SortDirection::Asc => rows.sort_by(|a, b| key.compare(a, b)),
            SortDirection::Desc => rows.sort_by(|a, b| key.compare(b, a)),
        }

        TableView {
            rows,
            total: users.len(),
        }
    }
}

/// Filtered and sorted rows plus the size of the full dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView<'a> {
    pub rows: Vec<&'a User>,
    pub total: usize,
}

impl TableView<'_> {
    pub fn shown(&self) -> usize {
        self.rows.len()
    }

    pub fn summary(&self) -> String {
        format!("Showing {} of {} users", self.shown(), self.total)
    }

    pub fn names(&self) -> Vec<&str> {
        self.rows.iter().map(|user| user.name.as_str()).collect()
    }
}

pub fn find_user(users: &[User], id: u32) -> Option<&User> {
    users.iter().find(|user| user.id == id)
}
