mod header;
mod lifecycle;
mod sidebar;

use crate::models::theme::Theme;
use crate::services::shell::{AppShell, ShellAction};
use crate::ui_egui::theme::DashboardPalette;
use crate::ui_egui::views::{render_panel, Panels};
use chrono::Local;

/// Top-level egui application: sidebar, header and the active panel.
pub struct DashboardApp {
    shell: AppShell,
    panels: Panels,
    /// Theme whose visuals are currently installed in the egui context
    applied_theme: Option<Theme>,
    /// Header search draft, visual only
    header_search: String,
    /// Sidebar search draft, visual only
    sidebar_search: String,
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let layout = self.shell.layout();
        let palette = DashboardPalette::from_theme(layout.theme);
        self.sync_visuals(ctx, &palette);

        let mut actions: Vec<ShellAction> = Vec::new();
        actions.extend(self.render_sidebar(ctx, &layout, &palette));
        actions.extend(self.render_header(ctx, &layout, &palette));

        let today = Local::now().date_naive();
        egui::CentralPanel::default()
            .frame(
                egui::Frame::none()
                    .fill(palette.app_background)
                    .inner_margin(egui::Margin::same(24.0)),
            )
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        actions.extend(render_panel(
                            ui,
                            layout.active.id,
                            &mut self.panels,
                            layout.theme,
                            &palette,
                            today,
                        ));
                    });
            });

        for action in actions {
            self.shell.apply(action);
        }
    }
}

impl DashboardApp {
    /// Install the palette visuals when the theme changed since the last frame.
    fn sync_visuals(&mut self, ctx: &egui::Context, palette: &DashboardPalette) {
        if self.applied_theme != Some(palette.theme) {
            log::debug!("Applying visuals for theme '{}'", palette.theme);
            palette.apply_to_context(ctx);
            self.applied_theme = Some(palette.theme);
        }
    }
}
