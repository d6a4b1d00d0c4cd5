use egui::{Align, Layout, RichText};
use egui_extras::{Column as TableColumn, TableBuilder};

use super::palette::{role_colors, status_colors};
use super::widgets::{accent_button, avatar, card, pill};
use crate::models::user::User;
use crate::services::table::{RoleFilter, SortKey, TableAction, TableState};
use crate::ui_egui::theme::DashboardPalette;

/// Data table panel: owns the filter/sort state and the search draft.
pub struct TablePanel {
    users: Vec<User>,
    state: TableState,
    search_draft: String,
}

impl TablePanel {
    pub fn new(users: Vec<User>) -> Self {
        Self {
            users,
            state: TableState::default(),
            search_draft: String::new(),
        }
    }

    pub fn show(&mut self, ui: &mut egui::Ui, palette: &DashboardPalette) {
        let mut actions = Vec::new();

        ui.horizontal(|ui| {
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                // Visual only: no records are created
                let _ = accent_button(ui, "＋ Add User", palette);
            });
        });
        ui.add_space(8.0);

        card(ui, palette, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                let search = ui.add(
                    egui::TextEdit::singleline(&mut self.search_draft)
                        .hint_text("🔍 Search users...")
                        .desired_width(ui.available_width() - 260.0),
                );
                if search.changed() {
                    actions.push(TableAction::SetSearch(self.search_draft.clone()));
                }

                let current = self.state.role_filter();
                egui::ComboBox::from_id_source("role_filter")
                    .selected_text(current.label())
                    .show_ui(ui, |ui| {
                        for filter in RoleFilter::ALL {
                            if ui.selectable_label(current == filter, filter.label()).clicked() {
                                actions.push(TableAction::SetRoleFilter(filter));
                            }
                        }
                    });

                let _ = ui.button("⬇ Export");
            });
        });

        ui.add_space(12.0);

        let view = self.state.view(&self.users);
        let summary = view.summary();
        let sort_key = self.state.sort_key();
        let sort_arrow = self.state.sort_direction().arrow();

        card(ui, palette, |ui| {
            ui.set_width(ui.available_width());
            let header_label = |key: SortKey| {
                if key == sort_key {
                    format!("{} {}", key.label(), sort_arrow)
                } else {
                    key.label().to_string()
                }
            };

            TableBuilder::new(ui)
                .striped(true)
                .cell_layout(Layout::left_to_right(Align::Center))
                .column(TableColumn::remainder().at_least(220.0))
                .column(TableColumn::initial(110.0))
                .column(TableColumn::initial(110.0))
                .column(TableColumn::initial(120.0))
                .column(TableColumn::initial(110.0))
                .header(32.0, |mut header| {
                    for key in [SortKey::Name, SortKey::Role] {
                        header.col(|ui| {
                            if ui.button(RichText::new(header_label(key)).strong()).clicked() {
                                actions.push(TableAction::SortBy(key));
                            }
                        });
                    }
                    header.col(|ui| {
                        ui.strong("Status");
                    });
                    header.col(|ui| {
                        if ui
                            .button(RichText::new(header_label(SortKey::JoinDate)).strong())
                            .clicked()
                        {
                            actions.push(TableAction::SortBy(SortKey::JoinDate));
                        }
                    });
                    header.col(|ui| {
                        ui.strong("Actions");
                    });
                })
                .body(|mut body| {
                    for user in &view.rows {
                        body.row(52.0, |mut row| {
                            row.col(|ui| {
                                avatar(ui, &user.avatar, palette.gradient_mid(), 36.0);
                                ui.vertical(|ui| {
                                    ui.label(RichText::new(&user.name).strong());
                                    ui.label(RichText::new(&user.email).small().color(palette.text_secondary));
                                });
                            });
                            row.col(|ui| pill(ui, user.role.as_str(), role_colors(user.role)));
                            row.col(|ui| pill(ui, user.status.as_str(), status_colors(user.status)));
                            row.col(|ui| {
                                ui.label(user.join_date.format("%Y-%m-%d").to_string());
                            });
                            row.col(|ui| {
                                let _ = ui.small_button("👁");
                                let _ = ui.small_button("✏");
                                let _ = ui.small_button("🗑");
                            });
                        });
                    }
                });

            ui.add_space(8.0);
            ui.separator();
            ui.horizontal(|ui| {
                ui.label(RichText::new(&summary).color(palette.text_secondary));
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    let _ = ui.button("Next");
                    let _ = ui.button("2");
                    let _ = accent_button(ui, "1", palette);
                    let _ = ui.button("Previous");
                });
            });
        });

        for action in actions {
            self.state.apply(action);
        }
    }
}
