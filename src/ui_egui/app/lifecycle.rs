use super::DashboardApp;
use crate::services::calendar::MonthCursor;
use crate::services::config::StartupOptions;
use crate::services::shell::AppShell;
use crate::ui_egui::theme::DashboardPalette;
use crate::ui_egui::views::Panels;
use chrono::Local;

impl DashboardApp {
    pub fn new(cc: &eframe::CreationContext<'_>, options: StartupOptions) -> Self {
        let shell = AppShell::from_options(&options);
        let start_month = options
            .calendar_month
            .unwrap_or_else(|| MonthCursor::containing(Local::now().date_naive()));

        log::info!(
            "Starting on '{}' with theme '{}', calendar at {}",
            shell.active_view(),
            shell.theme(),
            start_month
        );

        let palette = DashboardPalette::from_theme(shell.theme());
        palette.apply_to_context(&cc.egui_ctx);

        Self {
            shell,
            panels: Panels::new(start_month),
            applied_theme: Some(palette.theme),
            header_search: String::new(),
            sidebar_search: String::new(),
        }
    }
}
