//! Theme model.
//!
//! A theme is one of four fixed colour schemes. Every panel reads the active
//! theme to pick its accent and gradient colours; the colours themselves are
//! a pure lookup table keyed by the theme.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DashboardError;

/// The active colour scheme identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Blue,
    Purple,
    Green,
    Orange,
}

impl Theme {
    /// All themes in selector order.
    pub const ALL: [Theme; 4] = [Theme::Blue, Theme::Purple, Theme::Green, Theme::Orange];

    /// Stable identifier used in config files and selectors.
    pub fn id(self) -> &'static str {
        match self {
            Theme::Blue => "blue",
            Theme::Purple => "purple",
            Theme::Green => "green",
            Theme::Orange => "orange",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Theme::Blue => "Blue Ocean",
            Theme::Purple => "Purple Galaxy",
            Theme::Green => "Green Forest",
            Theme::Orange => "Orange Sunset",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Theme::Blue => "Cool and professional blue tones reminiscent of ocean depths",
            Theme::Purple => "Mysterious and creative purple hues inspired by cosmic beauty",
            Theme::Green => "Natural and calming green shades evoking forest tranquility",
            Theme::Orange => "Warm and energetic orange tones capturing sunset vibes",
        }
    }

    /// Colour lookup for this theme. Total over the enum.
    pub fn classes(self) -> ThemeClasses {
        classes_for(self)
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Theme {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Theme::ALL
            .into_iter()
            .find(|theme| theme.id().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| DashboardError::invalid("theme", s))
    }
}

/// Hex colours (`#RRGGBB`) derived from a theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeClasses {
    /// Start of the button/avatar gradient (500 shade)
    pub gradient_from: &'static str,
    /// End of the button/avatar gradient (600 shade)
    pub gradient_to: &'static str,
    /// Chart series and highlight colour
    pub accent_color: &'static str,
    /// Top of the sidebar gradient
    pub sidebar_from: &'static str,
    /// Bottom of the sidebar gradient
    pub sidebar_to: &'static str,
    /// Light tint used behind the header
    pub surface_tint: &'static str,
}

/// Colour lookup table for every theme.
pub fn classes_for(theme: Theme) -> ThemeClasses {
    match theme {
        Theme::Blue => ThemeClasses {
            gradient_from: "#3B82F6",
            gradient_to: "#2563EB",
            accent_color: "#3B82F6",
            sidebar_from: "#2563EB",
            sidebar_to: "#1E40AF",
            surface_tint: "#EFF6FF",
        },
        Theme::Purple => ThemeClasses {
            gradient_from: "#A855F7",
            gradient_to: "#9333EA",
            accent_color: "#8B5CF6",
            sidebar_from: "#9333EA",
            sidebar_to: "#6B21A8",
            surface_tint: "#FAF5FF",
        },
        Theme::Green => ThemeClasses {
            gradient_from: "#22C55E",
            gradient_to: "#16A34A",
            accent_color: "#10B981",
            sidebar_from: "#16A34A",
            sidebar_to: "#166534",
            surface_tint: "#F0FDF4",
        },
        Theme::Orange => ThemeClasses {
            gradient_from: "#F97316",
            gradient_to: "#EA580C",
            accent_color: "#F97316",
            sidebar_from: "#EA580C",
            sidebar_to: "#9A3412",
            surface_tint: "#FFF7ED",
        },
    }
}
