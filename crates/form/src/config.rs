//! Form configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default bound on one submission attempt.
pub const DEFAULT_SUBMIT_TIMEOUT_MS: u64 = 30_000;

/// Per-form settings.
///
/// Every field has a default, so an empty TOML table is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// How long `submit` waits for the submitter, in milliseconds.
    pub submit_timeout_ms: u64,
    /// Texts of the form-level notices.
    pub notices: Notices,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            submit_timeout_ms: DEFAULT_SUBMIT_TIMEOUT_MS,
            notices: Notices::default(),
        }
    }
}

impl FormConfig {
    /// Submission timeout as a [`Duration`].
    #[must_use]
    pub fn submit_timeout(&self) -> Duration {
        Duration::from_millis(self.submit_timeout_ms)
    }

    /// Sets the submission timeout.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_submit_timeout(mut self, timeout: Duration) -> Self {
        self.submit_timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Replaces the notice texts.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_notices(mut self, notices: Notices) -> Self {
        self.notices = notices;
        self
    }
}

/// Form-level messages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Notices {
    /// Shown when a submit attempt finds invalid fields.
    pub invalid: String,
    /// Shown when the submitter accepts.
    pub success: String,
    /// Shown when the submitter fails or times out.
    pub failure: String,
}

impl Default for Notices {
    fn default() -> Self {
        Self {
            invalid: "Please fill in all fields correctly.".into(),
            success: "Your submission has been received. We will get back to you soon.".into(),
            failure: "Something went wrong. Please try again later.".into(),
        }
    }
}
