//! Application shell state: the active view, the sidebar flag and the theme.
//!
//! The shell is the only owner of the [`ThemeStore`]. Panels and chrome
//! report selections as [`ShellAction`]s and the shell applies them, so the
//! store has exactly one writer.

use crate::error::DashboardError;
use crate::models::theme::{Theme, ThemeClasses};
use crate::models::view::{ViewDescriptor, ViewId};
use crate::services::config::StartupOptions;
use crate::services::theme::ThemeStore;

pub const SIDEBAR_EXPANDED_WIDTH: f32 = 288.0;
pub const SIDEBAR_COLLAPSED_WIDTH: f32 = 64.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellAction {
    SelectView(ViewId),
    SelectTheme(Theme),
    ToggleSidebar,
    SetSidebarCollapsed(bool),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppShell {
    theme: ThemeStore,
    active_view: ViewId,
    sidebar_collapsed: bool,
}

impl AppShell {
    pub fn new(theme: Theme, active_view: ViewId, sidebar_collapsed: bool) -> Self {
        Self {
            theme: ThemeStore::new(theme),
            active_view,
            sidebar_collapsed,
        }
    }

    pub fn from_options(options: &StartupOptions) -> Self {
        Self::new(options.theme, options.start_view, options.sidebar_collapsed)
    }

    /// Read-only access for consumers of the theme.
    pub fn theme_store(&self) -> &ThemeStore {
        &self.theme
    }

    pub fn theme(&self) -> Theme {
        self.theme.theme()
    }

    pub fn active_view(&self) -> ViewId {
        self.active_view
    }

    pub fn set_active_view(&mut self, view: ViewId) {
        if self.active_view != view {
            log::info!("Switching view: {} -> {}", self.active_view, view);
        }
        self.active_view = view;
    }

    /// Select a view by identifier; unknown ids leave the active view as is.
    pub fn set_active_view_by_id(&mut self, id: &str) -> Result<(), DashboardError> {
        let view = id.parse::<ViewId>()?;
        self.set_active_view(view);
        Ok(())
    }

    pub fn set_theme_by_id(&mut self, id: &str) -> Result<(), DashboardError> {
        self.theme.set_theme_by_id(id).map(|_| ())
    }

    pub fn sidebar_collapsed(&self) -> bool {
        self.sidebar_collapsed
    }

    pub fn set_sidebar_collapsed(&mut self, collapsed: bool) {
        self.sidebar_collapsed = collapsed;
    }

    pub fn apply(&mut self, action: ShellAction) {
        match action {
            ShellAction::SelectView(view) => self.set_active_view(view),
            ShellAction::SelectTheme(theme) => {
                self.theme.set_theme(theme);
            }
            ShellAction::ToggleSidebar => self.sidebar_collapsed = !self.sidebar_collapsed,
            ShellAction::SetSidebarCollapsed(collapsed) => self.sidebar_collapsed = collapsed,
        }
    }

    pub fn layout(&self) -> ShellLayout {
        layout(self.active_view, self.theme(), self.sidebar_collapsed)
    }
}

/// Sidebar entry with its highlight state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub view: ViewDescriptor,
    pub active: bool,
}

/// Everything the chrome needs to draw one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct ShellLayout {
    pub active: ViewDescriptor,
    pub theme: Theme,
    pub classes: ThemeClasses,
    pub sidebar_collapsed: bool,
    pub sidebar_width: f32,
    pub nav: Vec<NavItem>,
}

/// Pure function of (active view, theme, collapsed flag).
pub fn layout(active_view: ViewId, theme: Theme, sidebar_collapsed: bool) -> ShellLayout {
    let nav = ViewId::ALL
        .into_iter()
        .map(|view| NavItem {
            view: view.descriptor(),
            active: view == active_view,
        })
        .collect();

    ShellLayout {
        active: active_view.descriptor(),
        theme,
        classes: theme.classes(),
        sidebar_collapsed,
        sidebar_width: if sidebar_collapsed {
            SIDEBAR_COLLAPSED_WIDTH
        } else {
            SIDEBAR_EXPANDED_WIDTH
        },
        nav,
    }
}
