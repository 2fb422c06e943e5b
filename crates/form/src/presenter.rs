//! Presentation port.
//!
//! The form never renders anything itself. It reports what the user should
//! see through a [`Presenter`]: form-level notices, per-field error
//! messages, and which inputs are currently editable. Rendering a notice
//! replaces whatever notice was shown before.

use std::time::Duration;

use parking_lot::Mutex;
use reel_validator::ValidationError;
use serde::Serialize;

/// How long a success notice stays up before it dismisses itself.
pub const SUCCESS_DISMISS_AFTER: Duration = Duration::from_secs(5);

/// Tone of a form-level notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    /// Submission accepted.
    Success,
    /// Form invalid or submission failed.
    Error,
}

/// A form-level message for the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    /// Tone.
    pub kind: NoticeKind,
    /// Text to show.
    pub message: String,
    /// Delay after which the notice may be dismissed automatically.
    /// `None` keeps it until it is replaced.
    pub auto_dismiss: Option<Duration>,
}

impl Notice {
    /// A success notice that dismisses itself after [`SUCCESS_DISMISS_AFTER`].
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
            auto_dismiss: Some(SUCCESS_DISMISS_AFTER),
        }
    }

    /// An error notice that stays until replaced.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
            auto_dismiss: None,
        }
    }
}

/// Receiver of presentation effects.
///
/// Every method has a no-op default so implementors only override what
/// their surface can show.
pub trait Presenter: Send + Sync {
    /// Show a form-level notice, replacing the previous one.
    fn notice(&self, notice: &Notice) {
        let _ = notice;
    }

    /// Show (`Some`) or hide (`None`) the error next to a field.
    fn field_error(&self, field: &str, error: Option<&ValidationError>) {
        let _ = (field, error);
    }

    /// Enable or disable editing of a field.
    fn set_field_enabled(&self, field: &str, enabled: bool) {
        let _ = (field, enabled);
    }

    /// Lock or unlock the submit trigger.
    fn set_submit_enabled(&self, enabled: bool) {
        let _ = enabled;
    }
}

/// Presenter that discards every effect.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullPresenter;

impl Presenter for NullPresenter {}

/// One recorded presentation effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// [`Presenter::notice`].
    Notice(Notice),
    /// [`Presenter::field_error`]; `None` hides the message.
    FieldError {
        /// Field name.
        field: String,
        /// Displayed message.
        message: Option<String>,
    },
    /// [`Presenter::set_field_enabled`].
    FieldEnabled {
        /// Field name.
        field: String,
        /// New state.
        enabled: bool,
    },
    /// [`Presenter::set_submit_enabled`].
    SubmitEnabled(bool),
}

/// Presenter that records every effect in order.
///
/// Useful for headless drivers and tests that assert on what a user would
/// have seen.
#[derive(Debug, Default)]
pub struct RecordingPresenter {
    effects: Mutex<Vec<Effect>>,
}

impl RecordingPresenter {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All effects recorded so far.
    #[must_use]
    pub fn effects(&self) -> Vec<Effect> {
        self.effects.lock().clone()
    }

    /// Notices recorded so far.
    #[must_use]
    pub fn notices(&self) -> Vec<Notice> {
        self.effects
            .lock()
            .iter()
            .filter_map(|e| match e {
                Effect::Notice(n) => Some(n.clone()),
                _ => None,
            })
            .collect()
    }

    /// The notice currently on screen.
    #[must_use]
    pub fn last_notice(&self) -> Option<Notice> {
        self.notices().pop()
    }

    /// Drops everything recorded so far.
    pub fn clear(&self) {
        self.effects.lock().clear();
    }

    fn record(&self, effect: Effect) {
        self.effects.lock().push(effect);
    }
}

impl Presenter for RecordingPresenter {
    fn notice(&self, notice: &Notice) {
        self.record(Effect::Notice(notice.clone()));
    }

    fn field_error(&self, field: &str, error: Option<&ValidationError>) {
        self.record(Effect::FieldError {
            field: field.to_owned(),
            message: error.map(|e| e.message.to_string()),
        });
    }

    fn set_field_enabled(&self, field: &str, enabled: bool) {
        self.record(Effect::FieldEnabled {
            field: field.to_owned(),
            enabled,
        });
    }

    fn set_submit_enabled(&self, enabled: bool) {
        self.record(Effect::SubmitEnabled(enabled));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn success_notices_auto_dismiss() {
        assert_eq!(Notice::success("ok").auto_dismiss, Some(SUCCESS_DISMISS_AFTER));
        assert_eq!(Notice::error("bad").auto_dismiss, None);
    }

    #[test]
    fn recorder_keeps_order() {
        let recorder = RecordingPresenter::new();
        recorder.set_submit_enabled(false);
        recorder.notice(&Notice::error("first"));
        recorder.field_error("email", Some(&ValidationError::new("email", "bad email")));
        recorder.notice(&Notice::success("second"));

        assert_eq!(
            recorder.effects(),
            vec![
                Effect::SubmitEnabled(false),
                Effect::Notice(Notice::error("first")),
                Effect::FieldError {
                    field: "email".into(),
                    message: Some("bad email".into()),
                },
                Effect::Notice(Notice::success("second")),
            ]
        );
        assert_eq!(recorder.last_notice(), Some(Notice::success("second")));
    }

    #[test]
    fn null_presenter_accepts_everything() {
        let presenter = NullPresenter;
        presenter.notice(&Notice::error("ignored"));
        presenter.field_error("x", None);
    }
}
