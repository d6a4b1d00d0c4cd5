//! Theme palette for the egui dashboard.
//!
//! Converts the hex colour table of a [`Theme`] into `egui::Color32` values
//! and applies the matching visuals to the egui context.

use egui::Color32;

use crate::models::theme::{classes_for, Theme};

/// Resolved colours for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashboardPalette {
    pub theme: Theme,
    pub gradient_from: Color32,
    pub gradient_to: Color32,
    pub accent: Color32,
    pub sidebar_from: Color32,
    pub sidebar_to: Color32,
    pub surface_tint: Color32,

    /// Application background colour
    pub app_background: Color32,
    /// Card fill
    pub card_background: Color32,
    /// Card border
    pub card_border: Color32,
    /// Primary text color (headings, values)
    pub text_primary: Color32,
    /// Secondary text color (captions)
    pub text_secondary: Color32,
    /// Text drawn on accent or sidebar fills
    pub text_on_accent: Color32,
}

impl DashboardPalette {
    pub fn from_theme(theme: Theme) -> Self {
        let classes = classes_for(theme);
        Self {
            theme,
            gradient_from: hex_or_gray(classes.gradient_from),
            gradient_to: hex_or_gray(classes.gradient_to),
            accent: hex_or_gray(classes.accent_color),
            sidebar_from: hex_or_gray(classes.sidebar_from),
            sidebar_to: hex_or_gray(classes.sidebar_to),
            surface_tint: hex_or_gray(classes.surface_tint),
            app_background: Color32::from_rgb(249, 250, 251),
            card_background: Color32::WHITE,
            card_border: Color32::from_rgb(243, 244, 246),
            text_primary: Color32::from_rgb(17, 24, 39),
            text_secondary: Color32::from_rgb(75, 85, 99),
            text_on_accent: Color32::WHITE,
        }
    }

    /// Apply this palette to an egui context
    pub fn apply_to_context(&self, ctx: &egui::Context) {
        let mut visuals = egui::Visuals::light();

        visuals.window_fill = self.card_background;
        visuals.panel_fill = self.app_background;
        visuals.extreme_bg_color = self.card_background;
        visuals.faint_bg_color = Color32::from_rgb(249, 250, 251);

        visuals.selection.bg_fill = self.gradient_from;
        visuals.selection.stroke = egui::Stroke::new(1.0, self.text_on_accent);
        visuals.hyperlink_color = self.accent;

        visuals.widgets.hovered.bg_stroke = egui::Stroke::new(1.0, self.accent);
        visuals.widgets.active.bg_fill = self.gradient_to;

        visuals.override_text_color = Some(self.text_primary);

        ctx.set_visuals(visuals);
    }

    /// Midpoint of the button gradient, used where egui needs a single fill.
    pub fn gradient_mid(&self) -> Color32 {
        blend(self.gradient_from, self.gradient_to, 0.5)
    }
}

pub(crate) fn blend(a: Color32, b: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let lerp = |c1: u8, c2: u8| -> u8 { ((c1 as f32 * (1.0 - t)) + (c2 as f32 * t)).round() as u8 };
    Color32::from_rgb(lerp(a.r(), b.r()), lerp(a.g(), b.g()), lerp(a.b(), b.b()))
}

pub(crate) fn hex_or_gray(hex: &str) -> Color32 {
    hex_to_color(hex).unwrap_or_else(|err| {
        log::error!("Bad colour '{}': {}", hex, err);
        Color32::GRAY
    })
}

/// Convert Color32 to hex string for display
pub fn color_to_hex(color: Color32) -> String {
    format!("#{:02X}{:02X}{:02X}", color.r(), color.g(), color.b())
}

/// Parse hex string to Color32
pub fn hex_to_color(hex: &str) -> Result<Color32, String> {
    let hex = hex.trim_start_matches('#');

    if hex.len() != 6 {
        return Err("Hex color must be 6 characters".to_string());
    }

    let r = u8::from_str_radix(&hex[0..2], 16).map_err(|_| "Invalid hex color")?;
    let g = u8::from_str_radix(&hex[2..4], 16).map_err(|_| "Invalid hex color")?;
    let b = u8::from_str_radix(&hex[4..6], 16).map_err(|_| "Invalid hex color")?;

    Ok(Color32::from_rgb(r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_to_hex() {
        let color = Color32::from_rgb(255, 128, 64);
        assert_eq!(color_to_hex(color), "#FF8040");
    }

    #[test]
    fn test_hex_to_color() {
        let result = hex_to_color("#FF8040").unwrap();
        assert_eq!(result, Color32::from_rgb(255, 128, 64));

        let result2 = hex_to_color("FF8040").unwrap();
        assert_eq!(result2, Color32::from_rgb(255, 128, 64));

        assert!(hex_to_color("#FFF").is_err());
        assert!(hex_to_color("#GG0000").is_err());
    }

    #[test]
    fn test_palette_follows_theme_table() {
        for theme in Theme::ALL {
            let palette = DashboardPalette::from_theme(theme);
            let classes = classes_for(theme);
            assert_eq!(color_to_hex(palette.gradient_from), classes.gradient_from);
            assert_eq!(color_to_hex(palette.accent), classes.accent_color);
            assert_eq!(color_to_hex(palette.sidebar_to), classes.sidebar_to);
        }
    }

    #[test]
    fn test_blue_palette() {
        let palette = DashboardPalette::from_theme(Theme::Blue);
        assert_eq!(palette.accent, Color32::from_rgb(0x3B, 0x82, 0xF6));
    }

    #[test]
    fn test_blend_endpoints() {
        let a = Color32::from_rgb(0, 0, 0);
        let b = Color32::from_rgb(200, 100, 50);
        assert_eq!(blend(a, b, 0.0), a);
        assert_eq!(blend(a, b, 1.0), b);
        assert_eq!(blend(a, b, 0.5), Color32::from_rgb(100, 50, 25));
    }
}
