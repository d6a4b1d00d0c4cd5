use crate::models::settings::{
    default_notification_toggles, NotificationToggle, PreferencesForm, ProfileForm, SecurityForm,
    SettingsSection,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsAction {
    Select(SettingsSection),
}

/// Settings panel state: the active section plus in-memory form drafts.
///
/// Drafts are never written anywhere; they reset with the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsState {
    active_section: SettingsSection,
    pub profile: ProfileForm,
    pub notifications: Vec<NotificationToggle>,
    pub security: SecurityForm,
    pub preferences: PreferencesForm,
}

impl Default for SettingsState {
    fn default() -> Self {
        Self {
            active_section: SettingsSection::default(),
            profile: ProfileForm::default(),
            notifications: default_notification_toggles(),
            security: SecurityForm::default(),
            preferences: PreferencesForm::default(),
        }
    }
}

impl SettingsState {
    pub fn active_section(&self) -> SettingsSection {
        self.active_section
    }

    pub fn apply(&mut self, action: SettingsAction) {
        match action {
            SettingsAction::Select(section) => {
                log::debug!("Settings section: {}", section);
                self.active_section = section;
            }
        }
    }

    /// Discard draft edits, keeping the active section.
    pub fn reset_drafts(&mut self) {
        let section = self.active_section;
        *self = Self {
            active_section: section,
            ..Self::default()
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_section() {
        let mut state = SettingsState::default();
        assert_eq!(state.active_section(), SettingsSection::Profile);

        state.apply(SettingsAction::Select(SettingsSection::Security));
        assert_eq!(state.active_section(), SettingsSection::Security);
    }

    #[test]
    fn test_reset_drafts_keeps_section() {
        let mut state = SettingsState::default();
        state.apply(SettingsAction::Select(SettingsSection::Preferences));
        state.profile.first_name = "Jane".to_string();
        state.preferences.language = 2;

        state.reset_drafts();

        assert_eq!(state.active_section(), SettingsSection::Preferences);
        assert_eq!(state.profile, ProfileForm::default());
        assert_eq!(state.preferences, PreferencesForm::default());
    }
}
