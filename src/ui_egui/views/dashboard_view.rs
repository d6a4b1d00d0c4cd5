use egui::RichText;

use super::chart::ChartSurface;
use super::widgets::{avatar, card, column_width, metric_card, section_title};
use crate::services::seed;
use crate::ui_egui::theme::{hex_or_gray, DashboardPalette};

const SPACING: f32 = 16.0;

pub struct DashboardView;

impl DashboardView {
    pub fn show(ui: &mut egui::Ui, palette: &DashboardPalette) {
        let metrics = seed::dashboard_metrics();
        let width = column_width(ui, metrics.len(), SPACING);
        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = SPACING;
            for metric in &metrics {
                metric_card(ui, metric, palette, width);
            }
        });

        ui.add_space(SPACING);

        let half = column_width(ui, 2, SPACING);
        ui.horizontal_top(|ui| {
            ui.spacing_mut().item_spacing.x = SPACING;
            ui.allocate_ui(egui::Vec2::new(half, 320.0), |ui| {
                card(ui, palette, |ui| {
                    section_title(ui, "📊 Revenue Overview", palette);
                    ChartSurface::area(ui, &seed::revenue_series(), palette.accent, 240.0);
                });
            });
            ui.allocate_ui(egui::Vec2::new(half, 320.0), |ui| {
                card(ui, palette, |ui| {
                    section_title(ui, "Traffic Sources", palette);
                    let devices = seed::device_breakdown();
                    ChartSurface::breakdown(ui, &devices, 28.0);
                    ui.add_space(12.0);
                    ui.horizontal(|ui| {
                        for device in &devices {
                            ui.vertical(|ui| {
                                ui.label(RichText::new("●").color(hex_or_gray(device.color)));
                                ui.label(RichText::new(device.name).color(palette.text_secondary));
                                ui.label(RichText::new(format!("{}%", device.value)).strong());
                            });
                            ui.add_space(24.0);
                        }
                    });
                });
            });
        });

        ui.add_space(SPACING);

        card(ui, palette, |ui| {
            ui.set_width(ui.available_width());
            section_title(ui, "Recent Activity", palette);
            for activity in seed::recent_activity() {
                ui.horizontal(|ui| {
                    avatar(ui, activity.avatar, palette.gradient_mid(), 36.0);
                    ui.vertical(|ui| {
                        ui.horizontal(|ui| {
                            ui.label(RichText::new(activity.user).strong());
                            ui.label(activity.action);
                        });
                        ui.label(RichText::new(activity.time).small().color(palette.text_secondary));
                    });
                });
                ui.add_space(6.0);
            }
        });
    }
}
