use chrono::{Datelike, NaiveDate};
use egui::{Align, Layout, Margin, RichText, Rounding, Sense, Stroke, Vec2};

use super::palette::{event_type_colors, event_type_dot};
use super::widgets::{accent_button, card, pill, section_title};
use crate::models::calendar_event::{CalendarEvent, EventType};
use crate::services::calendar::{
    events_on, upcoming_events, CalendarAction, CalendarState, Direction, GridCell, MonthCursor,
    DAY_NAMES, MONTH_NAMES,
};
use crate::ui_egui::theme::{blend, DashboardPalette};

const CELL_HEIGHT: f32 = 92.0;
const SIDE_WIDTH: f32 = 260.0;
const UPCOMING_LIMIT: usize = 4;

pub struct CalendarPanel {
    events: Vec<CalendarEvent>,
    state: CalendarState,
}

impl CalendarPanel {
    pub fn new(events: Vec<CalendarEvent>, start_month: MonthCursor) -> Self {
        Self {
            events,
            state: CalendarState::new(start_month),
        }
    }

    pub fn show(&mut self, ui: &mut egui::Ui, palette: &DashboardPalette, today: NaiveDate) {
        let mut actions = Vec::new();

        ui.horizontal(|ui| {
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                let _ = accent_button(ui, "＋ Add Event", palette);
            });
        });
        ui.add_space(8.0);

        let grid_width = (ui.available_width() - SIDE_WIDTH - 16.0).max(420.0);
        ui.horizontal_top(|ui| {
            ui.allocate_ui(Vec2::new(grid_width, 0.0), |ui| {
                card(ui, palette, |ui| {
                    ui.set_width(grid_width - 40.0);
                    self.render_month(ui, palette, today, &mut actions);
                });
            });
            ui.add_space(16.0);
            ui.allocate_ui(Vec2::new(SIDE_WIDTH, 0.0), |ui| {
                ui.vertical(|ui| self.render_side(ui, palette, today));
            });
        });

        for action in actions {
            self.state.apply(action);
        }
    }

    fn render_month(
        &self,
        ui: &mut egui::Ui,
        palette: &DashboardPalette,
        today: NaiveDate,
        actions: &mut Vec<CalendarAction>,
    ) {
        let month = self.state.current_month();

        ui.horizontal(|ui| {
            ui.label(RichText::new(month.label()).size(20.0).strong());
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                if ui.button("▶").on_hover_text("Next month").clicked() {
                    actions.push(CalendarAction::Navigate(Direction::Next));
                }
                if ui.button("Today").clicked() {
                    actions.push(CalendarAction::GoToToday(today));
                }
                if ui.button("◀").on_hover_text("Previous month").clicked() {
                    actions.push(CalendarAction::Navigate(Direction::Prev));
                }
            });
        });
        ui.add_space(8.0);

        let spacing = 2.0;
        let col_width = (ui.available_width() - spacing * 6.0) / 7.0;
        let grid = self.state.grid(&self.events, today);
        let selected = self.state.selected_date();

        egui::Grid::new("calendar_month_grid")
            .spacing([spacing, spacing])
            .min_col_width(col_width)
            .max_col_width(col_width)
            .show(ui, |ui| {
                for name in DAY_NAMES {
                    ui.vertical_centered(|ui| {
                        ui.label(RichText::new(name).strong().color(palette.text_secondary));
                    });
                }
                ui.end_row();

                for (idx, cell) in grid.cells().enumerate() {
                    match cell {
                        GridCell::Blank => {
                            ui.allocate_exact_size(Vec2::new(col_width, CELL_HEIGHT), Sense::hover());
                        }
                        GridCell::Day(day) => {
                            let is_selected = selected == Some(day.date);
                            let fill = if day.is_today {
                                palette.surface_tint
                            } else if is_selected {
                                blend(palette.card_background, palette.surface_tint, 0.6)
                            } else {
                                palette.card_background
                            };
                            let border = if day.is_today || is_selected {
                                palette.accent
                            } else {
                                palette.card_border
                            };

                            let response = egui::Frame::none()
                                .fill(fill)
                                .stroke(Stroke::new(1.0, border))
                                .rounding(Rounding::same(4.0))
                                .inner_margin(Margin::same(4.0))
                                .show(ui, |ui| {
                                    ui.set_min_size(Vec2::new(col_width - 8.0, CELL_HEIGHT - 8.0));
                                    ui.set_max_width(col_width - 8.0);
                                    let number = RichText::new(day.day().to_string()).strong();
                                    ui.label(if day.is_today {
                                        number.color(palette.accent)
                                    } else {
                                        number
                                    });
                                    for event in day.visible_events() {
                                        let colors = event_type_colors(event.event_type);
                                        egui::Frame::none()
                                            .fill(colors.bg)
                                            .rounding(Rounding::same(4.0))
                                            .inner_margin(Margin::symmetric(4.0, 1.0))
                                            .show(ui, |ui| {
                                                ui.add(
                                                    egui::Label::new(
                                                        RichText::new(&event.title).size(11.0).color(colors.fg),
                                                    )
                                                    .truncate(),
                                                );
                                            });
                                    }
                                    if let Some(more) = day.overflow_label() {
                                        ui.label(RichText::new(more).size(11.0).color(palette.text_secondary));
                                    }
                                })
                                .response
                                .interact(Sense::click());

                            if response.clicked() {
                                actions.push(CalendarAction::SelectDate(day.date));
                            }
                        }
                    }

                    if idx % 7 == 6 {
                        ui.end_row();
                    }
                }
            });

        if let Some(date) = selected {
            ui.add_space(12.0);
            ui.separator();
            ui.horizontal(|ui| {
                ui.label(RichText::new(date.format("%A, %B %-d, %Y").to_string()).strong());
                if ui.small_button("✖").on_hover_text("Clear selection").clicked() {
                    actions.push(CalendarAction::ClearSelection);
                }
            });
            let day_events = events_on(&self.events, date);
            if day_events.is_empty() {
                ui.label(RichText::new("No events scheduled").color(palette.text_secondary));
            }
            for event in day_events {
                ui.label(format!("{} · {}", event.time, event.title));
            }
        }
    }

    fn render_side(&self, ui: &mut egui::Ui, palette: &DashboardPalette, today: NaiveDate) {
        card(ui, palette, |ui| {
            ui.set_width(SIDE_WIDTH - 40.0);
            section_title(ui, "📅 Quick View", palette);
            ui.vertical_centered(|ui| {
                ui.label(RichText::new(today.day().to_string()).size(28.0).strong());
                ui.label(
                    RichText::new(format!("{} {}", MONTH_NAMES[today.month0() as usize], today.year()))
                        .color(palette.text_secondary),
                );
            });
        });

        ui.add_space(12.0);
        card(ui, palette, |ui| {
            ui.set_width(SIDE_WIDTH - 40.0);
            section_title(ui, "Upcoming Events", palette);
            for event in upcoming_events(&self.events, UPCOMING_LIMIT) {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(&event.title).strong());
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        pill(ui, event.event_type.as_str(), event_type_colors(event.event_type));
                    });
                });
                ui.label(RichText::new(format!("🕑 {}", event.time)).small().color(palette.text_secondary));
                if let Some(location) = &event.location {
                    ui.label(RichText::new(format!("📍 {location}")).small().color(palette.text_secondary));
                }
                ui.add_space(6.0);
            }
        });

        ui.add_space(12.0);
        card(ui, palette, |ui| {
            ui.set_width(SIDE_WIDTH - 40.0);
            section_title(ui, "Event Types", palette);
            for event_type in EventType::ALL {
                ui.horizontal(|ui| {
                    ui.label(RichText::new("●").color(event_type_dot(event_type)));
                    ui.label(RichText::new(event_type.legend_label()).color(palette.text_secondary));
                });
            }
        });
    }
}
