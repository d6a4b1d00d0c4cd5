//! Application configuration.
//!
//! Read once at startup from `config.toml` in the platform config directory
//! (or the file named by `ADMIN_DASHBOARD_CONFIG`). Nothing is written back.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::DashboardError;
use crate::models::theme::Theme;
use crate::models::view::ViewId;
use crate::services::calendar::MonthCursor;

pub const CONFIG_ENV_VAR: &str = "ADMIN_DASHBOARD_CONFIG";
const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub theme: String,
    pub start_view: String,
    pub sidebar_collapsed: bool,
    /// Initial calendar month as `YYYY-MM`; defaults to the current month
    pub calendar_month: Option<String>,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            theme: Theme::default().id().to_string(),
            start_view: ViewId::default().id().to_string(),
            sidebar_collapsed: false,
            calendar_month: None,
            window_width: 1280.0,
            window_height: 820.0,
        }
    }
}

/// Config values after validation against the closed domains.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StartupOptions {
    pub theme: Theme,
    pub start_view: ViewId,
    pub sidebar_collapsed: bool,
    pub calendar_month: Option<MonthCursor>,
    pub window_size: [f32; 2],
}

impl Default for StartupOptions {
    fn default() -> Self {
        AppConfig::default().resolve()
    }
}

impl AppConfig {
    /// Default config location for this platform.
    pub fn default_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            return Some(PathBuf::from(path));
        }
        ProjectDirs::from("com", "AdminDashboard", "AdminDashboard")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents).context("Failed to parse configuration")
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml_str(&contents)
    }

    /// Load the config, falling back to defaults when missing or invalid.
    pub fn load_or_default() -> Self {
        let Some(path) = Self::default_path() else {
            log::warn!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            log::info!("No config at {}, using defaults", path.display());
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => {
                log::info!("Loaded config from {}", path.display());
                config
            }
            Err(err) => {
                log::warn!("{:#}; using defaults", err);
                Self::default()
            }
        }
    }

    /// One message per field that fails its check.
    fn field_errors(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if let Err(err) = self.theme.parse::<Theme>() {
            errors.push(err.to_string());
        }
        if let Err(err) = self.start_view.parse::<ViewId>() {
            errors.push(err.to_string());
        }
        if let Some(Err(err)) = self.calendar_month.as_deref().map(str::parse::<MonthCursor>) {
            errors.push(err.to_string());
        }
        if !valid_window_size(self.window_width, self.window_height) {
            errors.push(format!(
                "window size {}x{} must be finite and positive",
                self.window_width, self.window_height
            ));
        }
        errors
    }

    /// Check every field; the error lists all failing fields.
    pub fn validate(&self) -> Result<(), DashboardError> {
        let errors = self.field_errors();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(DashboardError::InvalidConfig(errors.join("; ")))
        }
    }

    /// Resolve into typed options. Invalid fields fall back to their defaults.
    pub fn resolve(&self) -> StartupOptions {
        for err in self.field_errors() {
            log::warn!("Config {}; using default", err);
        }

        let defaults = Self::default();
        let theme = self.theme.parse().unwrap_or_default();
        let start_view = self.start_view.parse().unwrap_or_default();
        let calendar_month = self
            .calendar_month
            .as_deref()
            .and_then(|month| month.parse().ok());
        let window_size = if valid_window_size(self.window_width, self.window_height) {
            [self.window_width, self.window_height]
        } else {
            [defaults.window_width, defaults.window_height]
        };

        StartupOptions {
            theme,
            start_view,
            sidebar_collapsed: self.sidebar_collapsed,
            calendar_month,
            window_size,
        }
    }
}

fn valid_window_size(width: f32, height: f32) -> bool {
    width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;
    use test_case::test_case;

    #[test]
    fn test_defaults() {
        let options = AppConfig::default().resolve();
        assert_eq!(options.theme, Theme::Blue);
        assert_eq!(options.start_view, ViewId::Dashboard);
        assert!(!options.sidebar_collapsed);
        assert_eq!(options.calendar_month, None);
        assert_eq!(options.window_size, [1280.0, 820.0]);
    }

    #[test]
    fn test_partial_file_uses_defaults_for_missing_keys() {
        let config = AppConfig::from_toml_str("theme = \"green\"\n").unwrap();
        assert_eq!(config.theme, "green");
        assert_eq!(config.start_view, "dashboard");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_full_file() {
        let config = AppConfig::from_toml_str(
            r#"
            theme = "orange"
            start_view = "calendar"
            sidebar_collapsed = true
            calendar_month = "2024-06"
            window_width = 1024.0
            window_height = 768.0
            "#,
        )
        .unwrap();

        let options = config.resolve();
        assert_eq!(options.theme, Theme::Orange);
        assert_eq!(options.start_view, ViewId::Calendar);
        assert!(options.sidebar_collapsed);
        assert_eq!(options.calendar_month, Some(MonthCursor::new(2024, 6).unwrap()));
        assert_eq!(options.window_size, [1024.0, 768.0]);
    }

    #[test]
    fn test_invalid_identifiers_fall_back() {
        let config = AppConfig {
            theme: "red".to_string(),
            start_view: "reports".to_string(),
            calendar_month: Some("2024-13".to_string()),
            ..AppConfig::default()
        };
        assert!(matches!(config.validate(), Err(DashboardError::InvalidConfig(_))));

        let options = config.resolve();
        assert_eq!(options.theme, Theme::Blue);
        assert_eq!(options.start_view, ViewId::Dashboard);
        assert_eq!(options.calendar_month, None);
    }

    #[test]
    fn test_every_bad_field_is_reported() {
        let config = AppConfig {
            theme: "red".to_string(),
            start_view: "reports".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(config.field_errors().len(), 2);

        let Err(DashboardError::InvalidConfig(message)) = config.validate() else {
            panic!("expected an invalid config");
        };
        assert!(message.contains("red"));
        assert!(message.contains("reports"));
    }

    #[test_case(f32::INFINITY, 820.0)]
    #[test_case(1280.0, f32::NAN)]
    #[test_case(0.0, 820.0)]
    #[test_case(1280.0, -1.0)]
    fn test_unusable_window_size_falls_back(width: f32, height: f32) {
        let config = AppConfig {
            window_width: width,
            window_height: height,
            ..AppConfig::default()
        };
        assert!(config.validate().is_err());
        assert_eq!(config.resolve().window_size, [1280.0, 820.0]);
    }

    #[test]
    fn test_infinite_width_in_file_is_rejected() {
        let config = AppConfig::from_toml_str("window_width = inf\n").unwrap();
        assert!(config.validate().is_err());
        assert_eq!(config.resolve().window_size, [1280.0, 820.0]);
    }

    #[test]
    fn test_malformed_toml_is_an_error() {
        assert!(AppConfig::from_toml_str("theme = ").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "start_view = \"kanban\"").unwrap();

        let config = AppConfig::load_from(file.path()).unwrap();
        assert_eq!(config.resolve().start_view, ViewId::Kanban);
    }

    #[test]
    #[serial]
    fn test_env_var_overrides_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(&path, "theme = \"purple\"\n").unwrap();

        std::env::set_var(CONFIG_ENV_VAR, &path);
        let config = AppConfig::load_or_default();
        std::env::remove_var(CONFIG_ENV_VAR);

        assert_eq!(config.theme, "purple");
    }

    #[test]
    #[serial]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::env::set_var(CONFIG_ENV_VAR, dir.path().join("absent.toml"));
        let config = AppConfig::load_or_default();
        std::env::remove_var(CONFIG_ENV_VAR);

        assert_eq!(config, AppConfig::default());
    }

    #[test]
    #[serial]
    fn test_malformed_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "theme = \n[[[").unwrap();

        std::env::set_var(CONFIG_ENV_VAR, &path);
        let config = AppConfig::load_or_default();
        std::env::remove_var(CONFIG_ENV_VAR);

        assert_eq!(config, AppConfig::default());
    }
}
