//! Main-area panels, one per [`ViewId`].

use chrono::NaiveDate;

mod analytics_view;
mod calendar_view;
mod chart;
mod dashboard_view;
mod kanban_view;
mod palette;
mod settings_view;
mod table_view;
mod theme_view;
pub(crate) mod widgets;

use self::analytics_view::AnalyticsView;
use self::calendar_view::CalendarPanel;
use self::dashboard_view::DashboardView;
use self::kanban_view::KanbanView;
use self::settings_view::SettingsView;
use self::table_view::TablePanel;
use self::theme_view::ThemeView;
use self::widgets::page_heading;
use crate::models::theme::Theme;
use crate::models::view::ViewId;
use crate::services::calendar::MonthCursor;
use crate::services::kanban::Board;
use crate::services::seed;
use crate::services::settings::SettingsState;
use crate::services::shell::ShellAction;
use crate::ui_egui::theme::DashboardPalette;

/// Per-panel state that outlives a frame.
pub struct Panels {
    pub table: TablePanel,
    pub calendar: CalendarPanel,
    pub board: Board,
    pub settings: SettingsState,
}

impl Panels {
    pub fn new(start_month: MonthCursor) -> Self {
        Self {
            table: TablePanel::new(seed::users()),
            calendar: CalendarPanel::new(seed::calendar_events(), start_month),
            board: Board::new(seed::kanban_columns()),
            settings: SettingsState::default(),
        }
    }
}

/// Draw the page heading and the panel for `view`.
///
/// Panels never touch the theme themselves; a theme pick comes back as a
/// [`ShellAction`] for the shell to apply.
pub fn render_panel(
    ui: &mut egui::Ui,
    view: ViewId,
    panels: &mut Panels,
    theme: Theme,
    palette: &DashboardPalette,
    today: NaiveDate,
) -> Option<ShellAction> {
    page_heading(ui, &view.descriptor(), palette);

    match view {
        ViewId::Dashboard => DashboardView::show(ui, palette),
        ViewId::Tables => panels.table.show(ui, palette),
        ViewId::Charts => AnalyticsView::show(ui, palette),
        ViewId::Calendar => panels.calendar.show(ui, palette, today),
        ViewId::Kanban => KanbanView::show(ui, &panels.board, palette),
        ViewId::Themes => return ThemeView::show(ui, theme, palette),
        ViewId::Settings => SettingsView::show(ui, &mut panels.settings, palette),
    }

    None
}
