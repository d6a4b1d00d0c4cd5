//! Collapsible navigation sidebar.

use super::DashboardApp;
use crate::models::metric::SidebarProfile;
use crate::services::seed;
use crate::services::shell::{NavItem, ShellAction, ShellLayout};
use crate::ui_egui::theme::{blend, DashboardPalette};
use egui::{Align, Color32, Layout, Margin, RichText, Rounding, Sense, Vec2};

const NAV_ROW_HEIGHT: f32 = 40.0;
/// White at 60% opacity.
const MUTED_TEXT: Color32 = Color32::from_rgba_premultiplied(153, 153, 153, 153);
const ONLINE_DOT: Color32 = Color32::from_rgb(74, 222, 128);
const STORAGE_FILL: Color32 = Color32::from_rgb(74, 222, 128);

impl DashboardApp {
    pub(super) fn render_sidebar(
        &mut self,
        ctx: &egui::Context,
        layout: &ShellLayout,
        palette: &DashboardPalette,
    ) -> Option<ShellAction> {
        let mut action = None;
        let collapsed = layout.sidebar_collapsed;
        let profile = seed::sidebar_profile();

        egui::SidePanel::left("sidebar")
            .exact_width(layout.sidebar_width)
            .resizable(false)
            .frame(
                egui::Frame::none()
                    .fill(palette.sidebar_from)
                    .inner_margin(Margin::same(if collapsed { 8.0 } else { 16.0 })),
            )
            .show(ctx, |ui| {
                ui.visuals_mut().override_text_color = Some(palette.text_on_accent);

                ui.horizontal(|ui| {
                    ui.label(RichText::new("👑").size(22.0).color(Color32::from_rgb(253, 224, 71)));
                    if !collapsed {
                        ui.vertical(|ui| {
                            ui.label(RichText::new("Celebal Admin").size(18.0).strong());
                            ui.label(RichText::new("Professional Dashboard").small().color(MUTED_TEXT));
                        });
                    }
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        let icon = if collapsed { "▶" } else { "◀" };
                        let hover = if collapsed { "Expand sidebar" } else { "Collapse sidebar" };
                        if ui.small_button(icon).on_hover_text(hover).clicked() {
                            action = Some(ShellAction::ToggleSidebar);
                        }
                    });
                });

                if !collapsed {
                    ui.add_space(10.0);
                    ui.add(
                        egui::TextEdit::singleline(&mut self.sidebar_search)
                            .hint_text("🔍 Search anything...")
                            .desired_width(f32::INFINITY),
                    );
                }
                ui.add_space(12.0);
                ui.separator();
                profile_card(ui, &profile, collapsed, palette);
                ui.separator();
                ui.add_space(8.0);

                if !collapsed {
                    ui.label(RichText::new("MAIN MENU").small().strong().color(MUTED_TEXT));
                    ui.add_space(6.0);
                }
                for item in &layout.nav {
                    if nav_row(ui, item, collapsed, palette) {
                        action = Some(ShellAction::SelectView(item.view.id));
                    }
                    ui.add_space(4.0);
                }

                ui.with_layout(Layout::bottom_up(Align::Min), |ui| {
                    let sign_out = if collapsed { "⎋".to_string() } else { "⎋  Sign Out".to_string() };
                    let response = ui.add(egui::Button::new(RichText::new(sign_out)).frame(false));
                    if collapsed {
                        response.on_hover_text("Sign Out");
                    }
                    if !collapsed {
                        ui.add_space(8.0);
                        storage_card(ui, &profile, palette);
                    }
                });
            });

        action
    }
}

fn profile_card(ui: &mut egui::Ui, profile: &SidebarProfile, collapsed: bool, palette: &DashboardPalette) {
    ui.add_space(8.0);
    ui.horizontal(|ui| {
        let (rect, _) = ui.allocate_exact_size(Vec2::splat(36.0), Sense::hover());
        let painter = ui.painter();
        painter.circle_filled(rect.center(), 18.0, blend(palette.sidebar_from, Color32::WHITE, 0.2));
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            "👤",
            egui::FontId::proportional(16.0),
            Color32::WHITE,
        );
        painter.circle_filled(rect.right_top() + Vec2::new(-3.0, 3.0), 5.0, ONLINE_DOT);

        if collapsed {
            return;
        }
        ui.vertical(|ui| {
            ui.label(RichText::new(profile.name).strong());
            ui.label(RichText::new(profile.title).small().color(MUTED_TEXT));
        });
        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            let _ = ui.small_button("🔔").on_hover_text("Notifications");
        });
    });

    if !collapsed {
        ui.add_space(8.0);
        ui.columns(profile.stats.len(), |columns| {
            for (column, (label, value)) in columns.iter_mut().zip(profile.stats) {
                egui::Frame::none()
                    .fill(blend(palette.sidebar_from, Color32::WHITE, 0.05))
                    .rounding(Rounding::same(8.0))
                    .inner_margin(Margin::symmetric(4.0, 6.0))
                    .show(column, |ui| {
                        ui.vertical_centered(|ui| {
                            ui.label(RichText::new(value).strong());
                            ui.label(RichText::new(label).small().color(MUTED_TEXT));
                        });
                    });
            }
        });
    }
    ui.add_space(8.0);
}

/// One navigation entry. Returns true when clicked.
fn nav_row(ui: &mut egui::Ui, item: &NavItem, collapsed: bool, palette: &DashboardPalette) -> bool {
    let fill = if item.active {
        blend(palette.sidebar_from, Color32::WHITE, 0.2)
    } else {
        Color32::TRANSPARENT
    };

    let response = egui::Frame::none()
        .fill(fill)
        .rounding(Rounding::same(10.0))
        .inner_margin(Margin::symmetric(10.0, 8.0))
        .show(ui, |ui| {
            ui.set_min_size(Vec2::new(ui.available_width(), NAV_ROW_HEIGHT - 16.0));
            ui.horizontal(|ui| {
                ui.label(RichText::new(item.view.icon).size(18.0));
                if collapsed {
                    return;
                }
                ui.label(RichText::new(item.view.label).strong());
                if let Some(badge) = item.view.badge {
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        egui::Frame::none()
                            .fill(blend(palette.sidebar_to, Color32::WHITE, 0.3))
                            .rounding(Rounding::same(8.0))
                            .inner_margin(Margin::symmetric(6.0, 1.0))
                            .show(ui, |ui| {
                                ui.label(RichText::new(badge).small().strong());
                            });
                    });
                }
            });
        })
        .response
        .interact(Sense::click());

    let response = if collapsed {
        response.on_hover_text(item.view.label)
    } else {
        response
    };
    response.clicked()
}

fn storage_card(ui: &mut egui::Ui, profile: &SidebarProfile, palette: &DashboardPalette) {
    egui::Frame::none()
        .fill(blend(palette.sidebar_from, Color32::WHITE, 0.1))
        .rounding(Rounding::same(10.0))
        .inner_margin(Margin::same(12.0))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new("Storage Usage").small().color(MUTED_TEXT));
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    ui.label(RichText::new(format!("{}%", profile.storage_used_percent)).small().strong());
                });
            });
            ui.add(
                egui::ProgressBar::new(f32::from(profile.storage_used_percent) / 100.0)
                    .desired_height(6.0)
                    .fill(STORAGE_FILL),
            );
            ui.label(RichText::new(profile.storage_label).small().color(MUTED_TEXT));
        });
}
