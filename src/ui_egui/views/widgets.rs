//! Small building blocks shared by the panels.

use egui::{Align2, Color32, FontId, Margin, RichText, Rounding, Sense, Stroke, Vec2};

use super::palette::{trend_color, BadgeColors};
use crate::models::metric::{MetricCard, Trend};
use crate::models::view::ViewDescriptor;
use crate::ui_egui::theme::DashboardPalette;

/// White rounded card used for every panel section.
pub(crate) fn card<R>(
    ui: &mut egui::Ui,
    palette: &DashboardPalette,
    add_contents: impl FnOnce(&mut egui::Ui) -> R,
) -> R {
    egui::Frame::none()
        .fill(palette.card_background)
        .rounding(Rounding::same(16.0))
        .stroke(Stroke::new(1.0, palette.card_border))
        .inner_margin(Margin::same(20.0))
        .show(ui, add_contents)
        .inner
}

pub(crate) fn page_heading(ui: &mut egui::Ui, descriptor: &ViewDescriptor, palette: &DashboardPalette) {
    ui.label(
        RichText::new(descriptor.title)
            .size(26.0)
            .strong()
            .color(palette.text_primary),
    );
    ui.label(RichText::new(descriptor.subtitle).color(palette.text_secondary));
    ui.add_space(16.0);
}

pub(crate) fn section_title(ui: &mut egui::Ui, title: &str, palette: &DashboardPalette) {
    ui.label(RichText::new(title).size(16.0).strong().color(palette.text_primary));
    ui.add_space(8.0);
}

pub(crate) fn pill(ui: &mut egui::Ui, text: &str, colors: BadgeColors) {
    egui::Frame::none()
        .fill(colors.bg)
        .rounding(Rounding::same(10.0))
        .inner_margin(Margin::symmetric(8.0, 2.0))
        .show(ui, |ui| {
            ui.label(RichText::new(text).size(12.0).color(colors.fg));
        });
}

/// Round bubble with initials, filled with the theme gradient colour.
pub(crate) fn avatar(ui: &mut egui::Ui, initials: &str, fill: Color32, diameter: f32) {
    let (rect, _response) = ui.allocate_exact_size(Vec2::splat(diameter), Sense::hover());
    let painter = ui.painter();
    painter.circle_filled(rect.center(), diameter / 2.0, fill);
    painter.text(
        rect.center(),
        Align2::CENTER_CENTER,
        initials,
        FontId::proportional(diameter * 0.36),
        Color32::WHITE,
    );
}

/// Filled button in the theme gradient colour.
pub(crate) fn accent_button(ui: &mut egui::Ui, text: &str, palette: &DashboardPalette) -> egui::Response {
    ui.add(
        egui::Button::new(RichText::new(text).color(palette.text_on_accent).strong())
            .fill(palette.gradient_mid())
            .rounding(Rounding::same(10.0))
            .min_size(Vec2::new(0.0, 34.0)),
    )
}

pub(crate) fn metric_card(ui: &mut egui::Ui, metric: &MetricCard, palette: &DashboardPalette, width: f32) {
    ui.allocate_ui(Vec2::new(width, 120.0), |ui| {
        card(ui, palette, |ui| {
            ui.set_width(width - 40.0);
            ui.horizontal(|ui| {
                egui::Frame::none()
                    .fill(palette.gradient_mid())
                    .rounding(Rounding::same(10.0))
                    .inner_margin(Margin::same(8.0))
                    .show(ui, |ui| {
                        ui.label(RichText::new(metric.icon).size(18.0));
                    });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    pill(ui, metric.change, trend_color(metric.trend == Trend::Up));
                });
            });
            ui.add_space(8.0);
            ui.label(RichText::new(metric.title).size(13.0).color(palette.text_secondary));
            ui.label(RichText::new(metric.value).size(22.0).strong().color(palette.text_primary));
        });
    });
}

/// Lay out `count` equally sized cards in one row.
pub(crate) fn column_width(ui: &egui::Ui, count: usize, spacing: f32) -> f32 {
    let count = count.max(1) as f32;
    ((ui.available_width() - spacing * (count - 1.0)) / count).max(120.0)
}
