// Settings panel model
// Section identifiers and the static form seeds shown in each section

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DashboardError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SettingsSection {
    #[default]
    Profile,
    Notifications,
    Security,
    Data,
    Preferences,
}

impl SettingsSection {
    pub const ALL: [SettingsSection; 5] = [
        SettingsSection::Profile,
        SettingsSection::Notifications,
        SettingsSection::Security,
        SettingsSection::Data,
        SettingsSection::Preferences,
    ];

    pub fn id(self) -> &'static str {
        match self {
            SettingsSection::Profile => "profile",
            SettingsSection::Notifications => "notifications",
            SettingsSection::Security => "security",
            SettingsSection::Data => "data",
            SettingsSection::Preferences => "preferences",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            SettingsSection::Profile => "Profile",
            SettingsSection::Notifications => "Notifications",
            SettingsSection::Security => "Security",
            SettingsSection::Data => "Data & Privacy",
            SettingsSection::Preferences => "Preferences",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            SettingsSection::Profile => "👤",
            SettingsSection::Notifications => "🔔",
            SettingsSection::Security => "🛡",
            SettingsSection::Data => "🗄",
            SettingsSection::Preferences => "🌐",
        }
    }
}

impl fmt::Display for SettingsSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for SettingsSection {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SettingsSection::ALL
            .into_iter()
            .find(|section| section.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DashboardError::invalid("settings section", s))
    }
}

/// Editable profile fields. Edits are kept in memory only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub bio: String,
}

impl Default for ProfileForm {
    fn default() -> Self {
        Self {
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            email: "john.doe@example.com".to_string(),
            bio: "Digital product designer and developer with over 5 years of experience \
                  in creating user-centered solutions."
                .to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationToggle {
    pub title: &'static str,
    pub description: &'static str,
    pub enabled: bool,
}

pub fn default_notification_toggles() -> Vec<NotificationToggle> {
    [
        ("Email Notifications", "Receive notifications via email", true),
        ("Push Notifications", "Receive push notifications in browser", false),
        ("SMS Notifications", "Receive notifications via SMS", true),
        ("Weekly Summary", "Get weekly summary reports", true),
        ("Marketing Updates", "Receive product updates and promotions", false),
    ]
    .into_iter()
    .map(|(title, description, enabled)| NotificationToggle {
        title,
        description,
        enabled,
    })
    .collect()
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SecurityForm {
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

pub const LANGUAGES: [&str; 4] = ["English (US)", "Spanish", "French", "German"];
pub const TIMEZONES: [&str; 4] = [
    "UTC-5 (Eastern Time)",
    "UTC-8 (Pacific Time)",
    "UTC+0 (UTC)",
    "UTC+1 (Central European Time)",
];
pub const DATE_FORMATS: [&str; 3] = ["MM/DD/YYYY", "DD/MM/YYYY", "YYYY-MM-DD"];

/// Selected indices into the preference option lists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PreferencesForm {
    pub language: usize,
    pub timezone: usize,
    pub date_format: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_section_is_profile() {
        assert_eq!(SettingsSection::default(), SettingsSection::Profile);
    }

    #[test]
    fn test_section_ids_parse() {
        for section in SettingsSection::ALL {
            assert_eq!(section.id().parse::<SettingsSection>().unwrap(), section);
        }
        assert!("billing".parse::<SettingsSection>().is_err());
    }

    #[test]
    fn test_notification_seed() {
        let toggles = default_notification_toggles();
        assert_eq!(toggles.len(), 5);
        assert_eq!(toggles.iter().filter(|t| t.enabled).count(), 3);
    }
}
