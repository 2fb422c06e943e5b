//! Field values
//!
//! A form input holds either free text or, for checkbox-like inputs, a
//! boolean `checked` state. Both shapes serialize untagged, so a snapshot
//! reads as plain JSON: `{"fullName": "Ada", "agreeTerms": true}`.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// The current value of a single input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Checkbox-like state.
    Bool(bool),
    /// Free text as typed.
    Text(String),
}

impl Value {
    /// Creates a text value.
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Returns the text view of the value.
    ///
    /// Booleans render as `"true"` / `"false"`, so text rules applied to a
    /// checkbox still see a deterministic string.
    #[must_use]
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            Self::Text(s) => Cow::Borrowed(s),
            Self::Bool(true) => Cow::Borrowed("true"),
            Self::Bool(false) => Cow::Borrowed("false"),
        }
    }

    /// Returns `true` for an empty string or an unchecked box.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(s) => s.is_empty(),
            Self::Bool(b) => !b,
        }
    }
}

impl Default for Value {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_text())
    }
}
