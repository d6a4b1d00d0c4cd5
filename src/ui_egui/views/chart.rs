//! Minimal painter-based chart surface.
//!
//! Takes a series and draws it into a fixed-height strip. Axes, tooltips
//! and legends beyond a label row are out of scope.

use egui::{pos2, Align2, Color32, FontId, Pos2, Rect, Sense, Shape, Stroke, Vec2};

use crate::models::metric::{SeriesPoint, Slice};
use crate::ui_egui::theme::hex_or_gray;

const LABEL_HEIGHT: f32 = 18.0;
const GRID_COLOR: Color32 = Color32::from_rgb(229, 231, 235);
const LABEL_COLOR: Color32 = Color32::from_rgb(102, 102, 102);

pub struct ChartSurface;

impl ChartSurface {
    fn allocate(ui: &mut egui::Ui, height: f32) -> (Rect, Rect) {
        let (rect, _response) =
            ui.allocate_exact_size(Vec2::new(ui.available_width(), height), Sense::hover());
        let plot = Rect::from_min_max(rect.min, pos2(rect.max.x, rect.max.y - LABEL_HEIGHT));

        let painter = ui.painter();
        for step in 0..=4 {
            let y = plot.top() + plot.height() * step as f32 / 4.0;
            painter.line_segment(
                [pos2(plot.left(), y), pos2(plot.right(), y)],
                Stroke::new(1.0, GRID_COLOR),
            );
        }
        (rect, plot)
    }

    fn max_value(values: impl Iterator<Item = f64>) -> f64 {
        values.fold(0.0_f64, f64::max).max(1.0)
    }

    fn label_row(ui: &egui::Ui, rect: Rect, labels: &[&str]) {
        let slot = rect.width() / labels.len().max(1) as f32;
        for (idx, label) in labels.iter().enumerate() {
            ui.painter().text(
                pos2(rect.left() + slot * (idx as f32 + 0.5), rect.bottom() - LABEL_HEIGHT + 4.0),
                Align2::CENTER_TOP,
                *label,
                FontId::proportional(11.0),
                LABEL_COLOR,
            );
        }
    }

    fn points_for(series: &[SeriesPoint], plot: Rect, max: f64) -> Vec<Pos2> {
        let slot = plot.width() / series.len().max(1) as f32;
        series
            .iter()
            .enumerate()
            .map(|(idx, point)| {
                let x = plot.left() + slot * (idx as f32 + 0.5);
                let y = plot.bottom() - plot.height() * (point.value / max) as f32;
                pos2(x, y)
            })
            .collect()
    }

    /// Vertical bars, one per point.
    pub fn bars(ui: &mut egui::Ui, series: &[SeriesPoint], color: Color32, height: f32) {
        let (rect, plot) = Self::allocate(ui, height);
        let max = Self::max_value(series.iter().map(|p| p.value));
        let slot = plot.width() / series.len().max(1) as f32;

        let half = (slot * 0.3).min(28.0);
        for top in Self::points_for(series, plot, max) {
            let bar = Rect::from_min_max(pos2(top.x - half, top.y), pos2(top.x + half, plot.bottom()));
            ui.painter().rect_filled(bar, 4.0, color);
        }

        let labels: Vec<&str> = series.iter().map(|p| p.label).collect();
        Self::label_row(ui, rect, &labels);
    }

    /// Filled area under a line.
    pub fn area(ui: &mut egui::Ui, series: &[SeriesPoint], color: Color32, height: f32) {
        let (rect, plot) = Self::allocate(ui, height);
        let max = Self::max_value(series.iter().map(|p| p.value));
        let points = Self::points_for(series, plot, max);
        let fill = color.gamma_multiply(0.25);

        let painter = ui.painter();
        for pair in points.windows(2) {
            let quad = vec![
                pair[0],
                pair[1],
                pos2(pair[1].x, plot.bottom()),
                pos2(pair[0].x, plot.bottom()),
            ];
            painter.add(Shape::convex_polygon(quad, fill, Stroke::NONE));
        }
        painter.add(Shape::line(points, Stroke::new(2.5, color)));

        let labels: Vec<&str> = series.iter().map(|p| p.label).collect();
        Self::label_row(ui, rect, &labels);
    }

    /// Several lines sharing one y scale.
    pub fn lines(ui: &mut egui::Ui, series: &[(Vec<SeriesPoint>, Color32)], height: f32) {
        let (rect, plot) = Self::allocate(ui, height);
        let max = Self::max_value(series.iter().flat_map(|(s, _)| s.iter().map(|p| p.value)));

        for (points, color) in series {
            let line = Self::points_for(points, plot, max);
            for point in &line {
                ui.painter().circle_filled(*point, 3.5, *color);
            }
            ui.painter().add(Shape::line(line, Stroke::new(2.5, *color)));
        }

        if let Some((first, _)) = series.first() {
            let labels: Vec<&str> = first.iter().map(|p| p.label).collect();
            Self::label_row(ui, rect, &labels);
        }
    }

    /// Horizontal stacked bar, each slice in its own colour.
    pub fn breakdown(ui: &mut egui::Ui, slices: &[Slice], height: f32) {
        let (rect, _response) =
            ui.allocate_exact_size(Vec2::new(ui.available_width(), height), Sense::hover());
        let total: f64 = slices.iter().map(|s| s.value).sum::<f64>().max(f64::EPSILON);

        let mut left = rect.left();
        for slice in slices {
            let width = rect.width() * (slice.value / total) as f32;
            let segment = Rect::from_min_max(pos2(left, rect.top()), pos2(left + width, rect.bottom()));
            ui.painter().rect_filled(segment, 0.0, hex_or_gray(slice.color));
            left += width;
        }
    }
}
