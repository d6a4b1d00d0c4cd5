use super::DashboardApp;
use crate::models::theme::Theme;
use crate::services::shell::{ShellAction, ShellLayout};
use crate::ui_egui::theme::DashboardPalette;
use crate::ui_egui::views::widgets::avatar;
use egui::{Align, Layout, Margin, RichText};

const HEADER_HEIGHT: f32 = 64.0;

impl DashboardApp {
    /// Top bar with search, theme picker and the signed-in user.
    pub(super) fn render_header(
        &mut self,
        ctx: &egui::Context,
        layout: &ShellLayout,
        palette: &DashboardPalette,
    ) -> Option<ShellAction> {
        let mut action = None;

        egui::TopBottomPanel::top("header")
            .exact_height(HEADER_HEIGHT)
            .frame(
                egui::Frame::none()
                    .fill(palette.card_background)
                    .inner_margin(Margin::symmetric(24.0, 12.0)),
            )
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    ui.add(
                        egui::TextEdit::singleline(&mut self.header_search)
                            .hint_text("🔍 Search...")
                            .desired_width(320.0),
                    );

                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        avatar(ui, "JD", palette.gradient_mid(), 36.0);
                        ui.label(RichText::new("John Doe").strong());
                        ui.add_space(8.0);
                        let _ = ui.button("🔔").on_hover_text("Notifications");

                        let current = layout.theme;
                        egui::ComboBox::from_id_source("header_theme")
                            .selected_text(format!("🎨 {}", current.display_name()))
                            .show_ui(ui, |ui| {
                                for theme in Theme::ALL {
                                    if ui
                                        .selectable_label(current == theme, theme.display_name())
                                        .clicked()
                                    {
                                        action = Some(ShellAction::SelectTheme(theme));
                                    }
                                }
                            });
                    });
                });
            });

        action
    }
}
