//! Error types shared by the dashboard state machines.

use thiserror::Error;

/// Errors raised when an identifier from outside the typed API is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DashboardError {
    /// The value is not a member of the closed set named by `domain`.
    #[error("invalid {domain}: '{value}'")]
    InvalidArgument { domain: &'static str, value: String },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl DashboardError {
    pub fn invalid(domain: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidArgument {
            domain,
            value: value.into(),
        }
    }
}
