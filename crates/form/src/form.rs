//! The form aggregate and its submission lifecycle.
//!
//! ```text
//!          submit() + all fields valid
//!   Idle ──────────────────────────────▶ Submitting
//!    ▲                                        │
//!    └────────── success | failure | drop ────┘
//! ```
//!
//! While a submission is in flight every field is read-only and a second
//! `submit` returns immediately. The submitter call is the only await point
//! and nothing is locked across it.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use parking_lot::Mutex;
use reel_validator::foundation::ValidationResult;
use reel_validator::{RuleSet, ValidationError, Value};
use tracing::{Instrument, Span, debug, error, info, warn};

use crate::config::FormConfig;
use crate::error::{FormError, SubmitError};
use crate::field::Field;
use crate::input::InputSet;
use crate::presenter::{Notice, NullPresenter, Presenter};
use crate::submitter::{Submission, Submitter};

/// Whether a submission is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SubmissionState {
    /// Fields are editable and `submit` may start.
    #[default]
    Idle,
    /// Waiting for the submitter; fields are locked.
    Submitting,
}

/// Result of one [`Form::submit`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The submitter accepted; fields were cleared.
    Accepted,
    /// At least one field failed validation; nothing was sent.
    Invalid,
    /// The submitter failed; values were kept.
    Failed(SubmitError),
    /// Another submission was already in flight; this call did nothing.
    AlreadySubmitting,
}

impl SubmitOutcome {
    /// Returns `true` for [`SubmitOutcome::Accepted`].
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }
}

type FieldReport = (String, Option<ValidationError>);

#[derive(Debug, Default)]
struct FormInner {
    fields: IndexMap<String, Field>,
    state: SubmissionState,
}

impl FormInner {
    fn validate_all(&mut self) -> Vec<FieldReport> {
        self.fields
            .values_mut()
            .map(|field| {
                let error = field.validate().err();
                (field.name().to_owned(), error)
            })
            .collect()
    }

    fn snapshot(&self) -> Submission {
        self.fields
            .values()
            .map(|field| (field.name().to_owned(), field.value().clone()))
            .collect()
    }

    fn editable_field(&mut self, name: &str) -> Result<&mut Field, FormError> {
        if self.state == SubmissionState::Submitting {
            return Err(FormError::Locked);
        }
        self.fields
            .get_mut(name)
            .ok_or_else(|| FormError::UnknownField(name.to_owned()))
    }
}

/// A set of validated fields bound to declared inputs, plus the
/// single-flight submission state machine.
pub struct Form {
    id: String,
    inputs: InputSet,
    config: FormConfig,
    inner: Mutex<FormInner>,
    submitter: Arc<dyn Submitter>,
    presenter: Arc<dyn Presenter>,
    span: Span,
}

impl fmt::Debug for Form {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.lock();
        f.debug_struct("Form")
            .field("id", &self.id)
            .field("state", &inner.state)
            .field("fields", &inner.fields.keys().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}

impl Form {
    /// Creates an empty form over `inputs`, sending through `submitter`.
    ///
    /// Effects go to a [`NullPresenter`] until one is supplied with
    /// [`with_presenter`](Self::with_presenter).
    pub fn new(id: impl Into<String>, inputs: InputSet, submitter: Arc<dyn Submitter>) -> Self {
        let id = id.into();
        let span = tracing::debug_span!("form", id = %id);
        Self {
            id,
            inputs,
            config: FormConfig::default(),
            inner: Mutex::new(FormInner::default()),
            submitter,
            presenter: Arc::new(NullPresenter),
            span,
        }
    }

    /// Routes presentation effects to `presenter`.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_presenter(mut self, presenter: Arc<dyn Presenter>) -> Self {
        self.presenter = presenter;
        self
    }

    /// Replaces the configuration.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_config(mut self, config: FormConfig) -> Self {
        self.config = config;
        self
    }

    /// Form identifier, also recorded on the form's tracing span.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Active configuration.
    #[must_use]
    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    /// Binds a field to the declared input of the same name.
    ///
    /// A name with no declared input is a configuration error: it is logged
    /// and the field is skipped. Binding a name twice keeps the first
    /// binding.
    pub fn add_field(&mut self, name: impl Into<String>, rules: impl Into<RuleSet>) -> &mut Self {
        let name = name.into();

        let Some(kind) = self.inputs.kind(&name) else {
            error!(parent: &self.span, field = %name, "no input declared for field, skipping");
            return self;
        };

        let span = &self.span;
        let fields = &mut self.inner.get_mut().fields;
        if fields.contains_key(&name) {
            warn!(parent: &self.span, field = %name, "field already bound, keeping the first binding");
            return self;
        }

        debug!(parent: span, field = %name, ?kind, "field bound");
        fields.insert(name.clone(), Field::new(name, kind, rules));
        self
    }

    /// Stores a value as the user typed it.
    ///
    /// Validates only when the field is currently invalid, and shows or
    /// hides its error accordingly.
    ///
    /// # Errors
    ///
    /// [`FormError::Locked`] while submitting, [`FormError::UnknownField`]
    /// when no such field is bound.
    pub fn set_value(&self, name: &str, value: impl Into<Value>) -> Result<(), FormError> {
        let report = {
            let mut inner = self.inner.lock();
            let field = inner.editable_field(name)?;
            field
                .set_value(value)
                .map(|_| field.error().cloned())
        };

        if let Some(error) = report {
            self.presenter.field_error(name, error.as_ref());
        }
        Ok(())
    }

    /// Focus left a field: validates it and shows the verdict.
    ///
    /// # Errors
    ///
    /// Same as [`set_value`](Self::set_value).
    pub fn blur(&self, name: &str) -> Result<ValidationResult<()>, FormError> {
        let verdict = self.inner.lock().editable_field(name)?.blur();
        self.presenter.field_error(name, verdict.as_ref().err());
        Ok(verdict)
    }

    /// Validates every field, without stopping at the first invalid one,
    /// and shows each verdict. Returns `true` when all pass.
    pub fn validate_all(&self) -> bool {
        let reports = self.inner.lock().validate_all();
        self.present_fields(&reports);
        reports.iter().all(|(_, error)| error.is_none())
    }

    /// Current values by field name.
    #[must_use]
    pub fn snapshot(&self) -> Submission {
        self.inner.lock().snapshot()
    }

    /// Applies every value of `values` as typed input.
    ///
    /// # Errors
    ///
    /// Stops at the first value that [`set_value`](Self::set_value) refuses.
    pub fn fill(&self, values: &Submission) -> Result<(), FormError> {
        values
            .iter()
            .try_for_each(|(name, value)| self.set_value(name, value.clone()))
    }

    /// Current submission state.
    #[must_use]
    pub fn state(&self) -> SubmissionState {
        self.inner.lock().state
    }

    /// Copy of a bound field.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<Field> {
        self.inner.lock().fields.get(name).cloned()
    }

    /// Names of the bound fields, in binding order.
    #[must_use]
    pub fn field_names(&self) -> Vec<String> {
        self.inner.lock().fields.keys().cloned().collect()
    }

    /// Runs one submission attempt.
    ///
    /// Never fails: every outcome is reported through the presenter and
    /// returned as a [`SubmitOutcome`]. Dropping the returned future while
    /// the submitter is pending still returns the form to idle.
    pub async fn submit(&self) -> SubmitOutcome {
        self.submit_attempt().instrument(self.span.clone()).await
    }

    async fn submit_attempt(&self) -> SubmitOutcome {
        let (reports, snapshot) = {
            let mut inner = self.inner.lock();
            if inner.state == SubmissionState::Submitting {
                debug!("submission already in flight, ignoring");
                return SubmitOutcome::AlreadySubmitting;
            }

            let reports = inner.validate_all();
            let snapshot = reports.iter().all(|(_, error)| error.is_none()).then(|| {
                inner.state = SubmissionState::Submitting;
                inner.snapshot()
            });
            (reports, snapshot)
        };

        let Some(snapshot) = snapshot else {
            self.present_fields(&reports);
            let invalid = reports.iter().filter(|(_, error)| error.is_some()).count();
            debug!(invalid, "submission blocked by invalid fields");
            self.presenter.notice(&Notice::error(&self.config.notices.invalid));
            return SubmitOutcome::Invalid;
        };

        let guard = SubmittingGuard { form: self };
        self.present_fields(&reports);
        self.set_locked(true);
        debug!(fields = snapshot.len(), "submitting");

        let timeout = self.config.submit_timeout();
        let result = tokio::time::timeout(timeout, self.submitter.submit(&snapshot))
            .await
            .unwrap_or(Err(SubmitError::Timeout(timeout)));

        let outcome = match result {
            Ok(()) => {
                info!("submission accepted");
                self.presenter.notice(&Notice::success(&self.config.notices.success));
                self.clear_fields();
                SubmitOutcome::Accepted
            }
            Err(err) => {
                warn!(error = %err, retryable = err.is_retryable(), "submission failed");
                self.presenter.notice(&Notice::error(&self.config.notices.failure));
                SubmitOutcome::Failed(err)
            }
        };

        drop(guard);
        outcome
    }

    fn clear_fields(&self) {
        let names: Vec<String> = {
            let mut inner = self.inner.lock();
            inner
                .fields
                .values_mut()
                .map(|field| {
                    field.clear();
                    field.reset();
                    field.name().to_owned()
                })
                .collect()
        };
        for name in &names {
            self.presenter.field_error(name, None);
        }
    }

    fn finish_submitting(&self) {
        self.inner.lock().state = SubmissionState::Idle;
        self.set_locked(false);
        debug!(parent: &self.span, "back to idle");
    }

    fn set_locked(&self, locked: bool) {
        for name in self.field_names() {
            self.presenter.set_field_enabled(&name, !locked);
        }
        self.presenter.set_submit_enabled(!locked);
    }

    fn present_fields(&self, reports: &[FieldReport]) {
        for (name, error) in reports {
            self.presenter.field_error(name, error.as_ref());
        }
    }
}

/// Returns the form to idle when the submission settles or is abandoned.
struct SubmittingGuard<'a> {
    form: &'a Form,
}

impl Drop for SubmittingGuard<'_> {
    fn drop(&mut self) {
        self.form.finish_submitting();
    }
}
