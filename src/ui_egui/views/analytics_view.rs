use egui::{Color32, RichText};

use super::chart::ChartSurface;
use super::widgets::{card, column_width, metric_card, section_title};
use crate::models::metric::{MonthlyStat, SeriesPoint};
use crate::services::seed;
use crate::ui_egui::theme::DashboardPalette;

const SPACING: f32 = 16.0;
const ORDERS_COLOR: Color32 = Color32::from_rgb(16, 185, 129);

pub struct AnalyticsView;

impl AnalyticsView {
    pub fn show(ui: &mut egui::Ui, palette: &DashboardPalette) {
        let metrics = seed::analytics_metrics();
        let width = column_width(ui, metrics.len(), SPACING);
        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = SPACING;
            for metric in &metrics {
                metric_card(ui, metric, palette, width);
            }
        });

        let monthly = seed::monthly_stats();
        let series = |value: fn(&MonthlyStat) -> u32| -> Vec<SeriesPoint> {
            monthly
                .iter()
                .map(|stat| SeriesPoint {
                    label: stat.month,
                    value: f64::from(value(stat)),
                })
                .collect()
        };

        ui.add_space(SPACING);
        let half = column_width(ui, 2, SPACING);
        ui.horizontal_top(|ui| {
            ui.spacing_mut().item_spacing.x = SPACING;
            ui.allocate_ui(egui::Vec2::new(half, 320.0), |ui| {
                card(ui, palette, |ui| {
                    section_title(ui, "Revenue Trend", palette);
                    ChartSurface::area(ui, &series(|s| s.revenue), palette.accent, 240.0);
                });
            });
            ui.allocate_ui(egui::Vec2::new(half, 320.0), |ui| {
                card(ui, palette, |ui| {
                    section_title(ui, "Users & Orders", palette);
                    ChartSurface::lines(
                        ui,
                        &[
                            (series(|s| s.users), palette.accent),
                            (series(|s| s.orders), ORDERS_COLOR),
                        ],
                        240.0,
                    );
                });
            });
        });

        ui.add_space(SPACING);
        card(ui, palette, |ui| {
            ui.set_width(ui.available_width());
            section_title(ui, "Sales by Category", palette);
            let categories: Vec<SeriesPoint> = seed::category_sales()
                .iter()
                .map(|slice| SeriesPoint {
                    label: slice.name,
                    value: slice.value,
                })
                .collect();
            ChartSurface::bars(ui, &categories, palette.accent, 260.0);
        });

        ui.add_space(SPACING);
        let insights = seed::insights();
        let third = column_width(ui, insights.len(), SPACING);
        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = SPACING;
            for insight in &insights {
                ui.allocate_ui(egui::Vec2::new(third, 100.0), |ui| {
                    card(ui, palette, |ui| {
                        ui.set_width(third - 40.0);
                        ui.label(RichText::new(insight.label).color(palette.text_secondary));
                        ui.label(RichText::new(insight.value).size(20.0).strong());
                        ui.label(RichText::new(insight.subtext).small().color(palette.accent));
                    });
                });
            }
        });
    }
}
