//! Error types for form operations.
//!
//! Nothing here is fatal to a form. [`FormError`] is returned to the caller
//! that tried an illegal mutation, [`SubmitError`] is what a
//! [`Submitter`](crate::Submitter) reports and the form turns into a
//! notice, and the schema/storage errors cover loading and caching.

use std::time::Duration;

/// Error returned by field-level operations on a [`Form`](crate::Form).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    /// No field with this name is bound to the form.
    #[error("unknown field: {0}")]
    UnknownField(String),

    /// A submission is in flight; fields are read-only until it settles.
    #[error("form is locked while submitting")]
    Locked,
}

/// Error reported by a submission collaborator.
///
/// Every variant is recoverable: the form keeps the entered values and
/// returns to idle.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    /// The receiver refused the submission.
    #[error("submission rejected: {0}")]
    Rejected(String),

    /// The submission could not be delivered.
    #[error("transport error: {0}")]
    Transport(String),

    /// No answer arrived within the configured timeout.
    #[error("submission timed out after {0:?}")]
    Timeout(Duration),
}

impl SubmitError {
    /// Convenience constructor for [`SubmitError::Rejected`].
    pub fn rejected(reason: impl Into<String>) -> Self {
        Self::Rejected(reason.into())
    }

    /// Convenience constructor for [`SubmitError::Transport`].
    pub fn transport(reason: impl Into<String>) -> Self {
        Self::Transport(reason.into())
    }

    /// Returns `true` for failures a later retry may fix.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::Timeout(_))
    }
}

/// Error raised while loading a [`FormSchema`](crate::FormSchema).
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// The schema text is not valid TOML or does not match the schema shape.
    #[error("invalid schema: {0}")]
    Parse(#[from] toml::de::Error),

    /// Two fields share a name.
    #[error("duplicate field in schema: {0}")]
    DuplicateField(String),
}

/// Error raised by the [`DraftStore`](crate::DraftStore).
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Reading or writing the backing file failed.
    #[error("storage io error: {0}")]
    Io(#[from] std::io::Error),

    /// The backing file holds malformed JSON.
    #[error("storage serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn display_form_errors() {
        assert_eq!(
            FormError::UnknownField("phone".into()).to_string(),
            "unknown field: phone"
        );
        assert_eq!(FormError::Locked.to_string(), "form is locked while submitting");
    }

    #[test]
    fn display_submit_errors() {
        assert_eq!(
            SubmitError::rejected("duplicate entry").to_string(),
            "submission rejected: duplicate entry"
        );
        assert_eq!(
            SubmitError::Timeout(Duration::from_secs(30)).to_string(),
            "submission timed out after 30s"
        );
    }

    #[test]
    fn retryable_classification() {
        assert!(SubmitError::transport("connection reset").is_retryable());
        assert!(SubmitError::Timeout(Duration::from_millis(1)).is_retryable());
        assert!(!SubmitError::rejected("closed").is_retryable());
    }
}
