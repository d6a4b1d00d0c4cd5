use egui::{Color32, Margin, RichText, Rounding, Sense, Stroke, Vec2};

use super::widgets::{card, column_width, section_title};
use crate::models::theme::Theme;
use crate::services::shell::ShellAction;
use crate::ui_egui::theme::{blend, color_to_hex, DashboardPalette};

const SPACING: f32 = 16.0;
const PREVIEW_HEIGHT: f32 = 96.0;

/// Theme gallery. Clicking a card asks the shell to switch themes.
pub struct ThemeView;

impl ThemeView {
    pub fn show(ui: &mut egui::Ui, current: Theme, palette: &DashboardPalette) -> Option<ShellAction> {
        let mut action = None;
        let width = column_width(ui, 2, SPACING);

        for row in Theme::ALL.chunks(2) {
            ui.horizontal_top(|ui| {
                ui.spacing_mut().item_spacing.x = SPACING;
                for &theme in row {
                    ui.allocate_ui(Vec2::new(width, 0.0), |ui| {
                        if theme_card(ui, theme, theme == current, palette, width) {
                            action = Some(ShellAction::SelectTheme(theme));
                        }
                    });
                }
            });
            ui.add_space(SPACING);
        }

        card(ui, palette, |ui| {
            ui.set_width(ui.available_width());
            section_title(ui, "Current Theme", palette);
            ui.label(format!("{} is active. {}", current.display_name(), current.description()));
        });

        action
    }
}

/// Returns true when the card was clicked.
fn theme_card(ui: &mut egui::Ui, theme: Theme, active: bool, palette: &DashboardPalette, width: f32) -> bool {
    let preview = DashboardPalette::from_theme(theme);
    let border = if active { preview.accent } else { palette.card_border };

    let response = egui::Frame::none()
        .fill(palette.card_background)
        .stroke(Stroke::new(if active { 2.0 } else { 1.0 }, border))
        .rounding(Rounding::same(16.0))
        .inner_margin(Margin::same(16.0))
        .show(ui, |ui| {
            ui.set_width(width - 32.0);
            let (rect, _) = ui.allocate_exact_size(Vec2::new(width - 32.0, PREVIEW_HEIGHT), Sense::hover());
            let painter = ui.painter();
            let steps = 24;
            let step_width = rect.width() / steps as f32;
            for i in 0..steps {
                let t = i as f32 / (steps - 1) as f32;
                let x = rect.left() + i as f32 * step_width;
                let strip = egui::Rect::from_min_size(egui::pos2(x, rect.top()), Vec2::new(step_width + 0.5, rect.height()));
                painter.rect_filled(strip, Rounding::ZERO, blend(preview.gradient_from, preview.gradient_to, t));
            }
            if active {
                painter.text(
                    rect.right_top() + Vec2::new(-12.0, 12.0),
                    egui::Align2::RIGHT_TOP,
                    "✔",
                    egui::FontId::proportional(18.0),
                    Color32::WHITE,
                );
            }

            ui.add_space(8.0);
            ui.label(RichText::new(theme.display_name()).size(16.0).strong());
            ui.label(RichText::new(theme.description()).small().color(palette.text_secondary));
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                for color in [preview.gradient_from, preview.gradient_to, preview.accent, preview.sidebar_from] {
                    let (swatch, response) = ui.allocate_exact_size(Vec2::splat(18.0), Sense::hover());
                    ui.painter().circle_filled(swatch.center(), 9.0, color);
                    response.on_hover_text(color_to_hex(color));
                }
            });
        })
        .response
        .interact(Sense::click());

    response.on_hover_cursor(egui::CursorIcon::PointingHand).clicked()
}
