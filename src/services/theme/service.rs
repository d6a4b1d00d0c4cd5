use crate::error::DashboardError;
use crate::models::theme::{classes_for, Theme, ThemeClasses};

/// Holds the single active theme.
///
/// Consumers receive `&ThemeStore` and read a snapshot each frame; only the
/// shell owns it mutably, so every panel observes a change on its next read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemeStore {
    theme: Theme,
}

impl ThemeStore {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn classes(&self) -> ThemeClasses {
        classes_for(self.theme)
    }

    /// Replace the active theme. Returns true when the value changed.
    pub fn set_theme(&mut self, theme: Theme) -> bool {
        if self.theme == theme {
            return false;
        }
        log::info!("Theme changed: {} -> {}", self.theme, theme);
        self.theme = theme;
        true
    }

    /// Set the theme from an identifier such as `"purple"`.
    ///
    /// Unknown identifiers are rejected and the current theme is kept.
    pub fn set_theme_by_id(&mut self, id: &str) -> Result<bool, DashboardError> {
        let theme = id.parse::<Theme>().map_err(|err| {
            log::warn!("Rejected theme selection '{}'", id);
            err
        })?;
        Ok(self.set_theme(theme))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_store_is_blue() {
        assert_eq!(ThemeStore::default().theme(), Theme::Blue);
    }

    #[test]
    fn test_set_then_get_returns_value() {
        let mut store = ThemeStore::default();
        for theme in Theme::ALL {
            store.set_theme(theme);
            assert_eq!(store.theme(), theme);
            assert_eq!(store.classes(), classes_for(theme));
        }
    }

    #[test]
    fn test_set_same_theme_reports_no_change() {
        let mut store = ThemeStore::new(Theme::Green);
        assert!(!store.set_theme(Theme::Green));
        assert!(store.set_theme(Theme::Orange));
    }

    #[test]
    fn test_invalid_id_leaves_theme_unchanged() {
        let mut store = ThemeStore::new(Theme::Purple);
        let result = store.set_theme_by_id("teal");
        assert!(matches!(
            result,
            Err(DashboardError::InvalidArgument { domain: "theme", .. })
        ));
        assert_eq!(store.theme(), Theme::Purple);
    }

    #[test]
    fn test_valid_id_updates_theme() {
        let mut store = ThemeStore::default();
        assert_eq!(store.set_theme_by_id("orange"), Ok(true));
        assert_eq!(store.theme(), Theme::Orange);
    }
}
