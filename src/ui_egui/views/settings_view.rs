use egui::{RichText, Vec2};

use super::widgets::{accent_button, avatar, card, section_title};
use crate::models::settings::{SettingsSection, DATE_FORMATS, LANGUAGES, TIMEZONES};
use crate::services::settings::{SettingsAction, SettingsState};
use crate::ui_egui::theme::DashboardPalette;

const NAV_WIDTH: f32 = 220.0;

pub struct SettingsView;

impl SettingsView {
    pub fn show(ui: &mut egui::Ui, state: &mut SettingsState, palette: &DashboardPalette) {
        let mut selected = None;

        ui.horizontal_top(|ui| {
            ui.allocate_ui(Vec2::new(NAV_WIDTH, 0.0), |ui| {
                card(ui, palette, |ui| {
                    ui.set_width(NAV_WIDTH - 40.0);
                    for section in SettingsSection::ALL {
                        let text = format!("{}  {}", section.icon(), section.display_name());
                        if ui
                            .selectable_label(state.active_section() == section, text)
                            .clicked()
                        {
                            selected = Some(section);
                        }
                    }
                });
            });
            ui.add_space(16.0);

            ui.vertical(|ui| {
                card(ui, palette, |ui| {
                    ui.set_width(ui.available_width());
                    match state.active_section() {
                        SettingsSection::Profile => profile_section(ui, state, palette),
                        SettingsSection::Notifications => notifications_section(ui, state, palette),
                        SettingsSection::Security => security_section(ui, state, palette),
                        SettingsSection::Data => data_section(ui, palette),
                        SettingsSection::Preferences => preferences_section(ui, state, palette),
                    }
                });
            });
        });

        if let Some(section) = selected {
            state.apply(SettingsAction::Select(section));
        }
    }
}

fn field(ui: &mut egui::Ui, label: &str, value: &mut String, password: bool) {
    ui.label(RichText::new(label).strong());
    ui.add(
        egui::TextEdit::singleline(value)
            .password(password)
            .desired_width(f32::INFINITY),
    );
    ui.add_space(6.0);
}

fn profile_section(ui: &mut egui::Ui, state: &mut SettingsState, palette: &DashboardPalette) {
    section_title(ui, "Profile Information", palette);
    ui.horizontal(|ui| {
        avatar(ui, "JD", palette.gradient_mid(), 64.0);
        ui.vertical(|ui| {
            let _ = ui.button("Change Avatar");
            ui.label(RichText::new("JPG, GIF or PNG. 1MB max.").small().color(palette.text_secondary));
        });
    });
    ui.add_space(12.0);

    let profile = &mut state.profile;
    ui.columns(2, |columns| {
        field(&mut columns[0], "First Name", &mut profile.first_name, false);
        field(&mut columns[1], "Last Name", &mut profile.last_name, false);
    });
    field(ui, "Email", &mut profile.email, false);
    ui.label(RichText::new("Bio").strong());
    ui.add(egui::TextEdit::multiline(&mut profile.bio).desired_rows(3).desired_width(f32::INFINITY));
    ui.add_space(12.0);
    save_row(ui, state, palette);
}

fn notifications_section(ui: &mut egui::Ui, state: &mut SettingsState, palette: &DashboardPalette) {
    section_title(ui, "Notification Preferences", palette);
    for toggle in &mut state.notifications {
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.label(RichText::new(toggle.title).strong());
                ui.label(RichText::new(toggle.description).small().color(palette.text_secondary));
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.checkbox(&mut toggle.enabled, "");
            });
        });
        ui.separator();
    }
}

fn security_section(ui: &mut egui::Ui, state: &mut SettingsState, palette: &DashboardPalette) {
    section_title(ui, "Security Settings", palette);
    let security = &mut state.security;
    field(ui, "Current Password", &mut security.current_password, true);
    field(ui, "New Password", &mut security.new_password, true);
    field(ui, "Confirm Password", &mut security.confirm_password, true);
    let _ = accent_button(ui, "Update Password", palette);

    ui.add_space(16.0);
    ui.separator();
    ui.label(RichText::new("Two-Factor Authentication").strong());
    ui.label(
        RichText::new("Add an extra layer of security to your account")
            .small()
            .color(palette.text_secondary),
    );
    let _ = ui.button("Enable 2FA");
}

fn data_section(ui: &mut egui::Ui, palette: &DashboardPalette) {
    section_title(ui, "Data Management", palette);
    let rows = [
        ("Export Data", "Download a copy of your data", "Export"),
        ("Import Data", "Import data from another service", "Import"),
        ("Delete Account", "Permanently delete your account and data", "Delete"),
    ];
    for (title, description, button) in rows {
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.label(RichText::new(title).strong());
                ui.label(RichText::new(description).small().color(palette.text_secondary));
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let _ = ui.button(button);
            });
        });
        ui.separator();
    }
}

fn preferences_section(ui: &mut egui::Ui, state: &mut SettingsState, palette: &DashboardPalette) {
    section_title(ui, "Preferences", palette);
    let prefs = &mut state.preferences;
    choice(ui, "Language", "pref_language", &LANGUAGES, &mut prefs.language);
    choice(ui, "Timezone", "pref_timezone", &TIMEZONES, &mut prefs.timezone);
    choice(ui, "Date Format", "pref_date_format", &DATE_FORMATS, &mut prefs.date_format);
    ui.add_space(12.0);
    save_row(ui, state, palette);
}

fn choice(ui: &mut egui::Ui, label: &str, id: &str, options: &[&str], selected: &mut usize) {
    ui.label(RichText::new(label).strong());
    let current = options.get(*selected).copied().unwrap_or_default();
    egui::ComboBox::from_id_source(id)
        .selected_text(current)
        .width(260.0)
        .show_ui(ui, |ui| {
            for (idx, option) in options.iter().enumerate() {
                ui.selectable_value(selected, idx, *option);
            }
        });
    ui.add_space(6.0);
}

fn save_row(ui: &mut egui::Ui, state: &mut SettingsState, palette: &DashboardPalette) {
    ui.horizontal(|ui| {
        if accent_button(ui, "Save Changes", palette).clicked() {
            log::info!("Settings saved for this session");
        }
        if ui.button("Cancel").clicked() {
            state.reset_drafts();
        }
    });
}
