use egui::{Align, Layout, Margin, RichText, Rounding, Stroke, Vec2};

use super::palette::{priority_colors, BadgeColors};
use super::widgets::{accent_button, avatar, card, column_width, pill};
use crate::models::task::{Column, Task};
use crate::services::kanban::Board;
use crate::ui_egui::theme::{hex_or_gray, DashboardPalette};

const SPACING: f32 = 16.0;
const TAG_COLORS: BadgeColors = BadgeColors {
    bg: egui::Color32::from_rgb(243, 244, 246),
    fg: egui::Color32::from_rgb(75, 85, 99),
};

pub struct KanbanView;

impl KanbanView {
    pub fn show(ui: &mut egui::Ui, board: &Board, palette: &DashboardPalette) {
        ui.horizontal(|ui| {
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                let _ = accent_button(ui, "＋ Add Task", palette);
            });
        });
        ui.add_space(8.0);

        let width = column_width(ui, board.columns().len(), SPACING);
        ui.horizontal_top(|ui| {
            ui.spacing_mut().item_spacing.x = SPACING;
            for column in board.columns() {
                ui.allocate_ui(Vec2::new(width, 0.0), |ui| {
                    ui.vertical(|ui| {
                        ui.set_width(width);
                        column_panel(ui, column, palette);
                    });
                });
            }
        });

        ui.add_space(SPACING);

        let stats = board.stats();
        let tiles = [
            ("Total Tasks", stats.total),
            ("In Progress", stats.in_progress),
            ("In Review", stats.in_review),
            ("Completed", stats.completed),
        ];
        let tile_width = column_width(ui, tiles.len(), SPACING);
        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = SPACING;
            for (label, count) in tiles {
                ui.allocate_ui(Vec2::new(tile_width, 80.0), |ui| {
                    card(ui, palette, |ui| {
                        ui.set_width(tile_width - 40.0);
                        ui.label(RichText::new(label).color(palette.text_secondary));
                        ui.label(RichText::new(count.to_string()).size(22.0).strong());
                    });
                });
            }
        });
    }
}

fn column_panel(ui: &mut egui::Ui, column: &Column, palette: &DashboardPalette) {
    egui::Frame::none()
        .fill(hex_or_gray(&column.color))
        .rounding(Rounding::same(12.0))
        .inner_margin(Margin::same(12.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(RichText::new(&column.title).strong());
                ui.label(
                    RichText::new(column.task_count().to_string())
                        .small()
                        .color(palette.text_secondary),
                );
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    let _ = ui.small_button("＋");
                });
            });
            ui.add_space(8.0);

            for task in &column.tasks {
                task_card(ui, task, palette);
                ui.add_space(8.0);
            }
        });
}

fn task_card(ui: &mut egui::Ui, task: &Task, palette: &DashboardPalette) {
    egui::Frame::none()
        .fill(palette.card_background)
        .stroke(Stroke::new(1.0, palette.card_border))
        .rounding(Rounding::same(10.0))
        .inner_margin(Margin::same(12.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.add(egui::Label::new(RichText::new(&task.title).strong()).wrap());
                ui.with_layout(Layout::right_to_left(Align::Min), |ui| {
                    pill(
                        ui,
                        &format!("{} {}", task.priority.arrow(), task.priority.as_str()),
                        priority_colors(task.priority),
                    );
                });
            });
            ui.label(RichText::new(&task.description).small().color(palette.text_secondary));
            ui.add_space(4.0);

            ui.horizontal_wrapped(|ui| {
                for tag in &task.tags {
                    pill(ui, tag, TAG_COLORS);
                }
            });
            ui.add_space(4.0);

            ui.horizontal(|ui| {
                avatar(ui, &task.assignee_initials(), palette.gradient_mid(), 24.0);
                ui.label(RichText::new(&task.assignee).small());
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    ui.label(
                        RichText::new(format!("📅 {}", task.due_date.format("%b %-d")))
                            .small()
                            .color(palette.text_secondary),
                    );
                });
            });
        });
}
