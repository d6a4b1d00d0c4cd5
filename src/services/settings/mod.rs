mod service;

pub use service::{SettingsAction, SettingsState};
