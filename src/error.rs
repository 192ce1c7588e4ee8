//! Error types for loading and validating settings.

use thiserror::Error;

/// Errors produced while configuring a world.
#[derive(Debug, Error)]
pub enum Error {
    /// Settings file could not be read or written.
    #[error("settings I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Settings file is not valid JSON for [`crate::Settings`].
    #[error("settings parse failed: {0}")]
    Json(#[from] serde_json::Error),

    /// A setting has a value the simulation cannot run with.
    #[error("invalid setting `{name}`: {reason}")]
    InvalidSetting {
        /// Field name as it appears in the settings file.
        name: &'static str,
        /// What is wrong with it.
        reason: String,
    },
}

impl Error {
    /// Creates an invalid setting error.
    #[must_use]
    pub fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidSetting {
            name,
            reason: reason.into(),
        }
    }
}

/// Result alias for fallible crate operations.
pub type Result<T> = std::result::Result<T, Error>;
