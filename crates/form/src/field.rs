//! A single bound input and its validation state.
//!
//! A field re-validates on two triggers, and which one applies depends on
//! its current verdict:
//!
//! | verdict | on input change            | on blur  |
//! |---------|----------------------------|----------|
//! | valid   | store value, no validation | validate |
//! | invalid | store value, validate      | validate |
//!
//! A user typing into a field that has not failed yet is never interrupted
//! by an error; once it has failed, the error tracks every keystroke until
//! it clears.

use reel_validator::{RuleSet, ValidationError, Value};
use reel_validator::foundation::ValidationResult;

use crate::input::InputKind;

/// One named input: current value, ordered rules and last verdict.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    name: String,
    kind: InputKind,
    value: Value,
    rules: RuleSet,
    error: Option<ValidationError>,
}

impl Field {
    /// Creates a field holding the empty value for its kind.
    ///
    /// A new field counts as valid until it is first validated.
    pub fn new(name: impl Into<String>, kind: InputKind, rules: impl Into<RuleSet>) -> Self {
        Self {
            name: name.into(),
            kind,
            value: kind.empty_value(),
            rules: rules.into(),
            error: None,
        }
    }

    /// Field name, unique within its form.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Input kind.
    #[must_use]
    pub fn kind(&self) -> InputKind {
        self.kind
    }

    /// Current value.
    #[must_use]
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Rules in evaluation order.
    #[must_use]
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Verdict of the last validation; `true` before the first one.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.error.is_none()
    }

    /// Error currently displayed for this field, if any.
    #[must_use]
    pub fn error(&self) -> Option<&ValidationError> {
        self.error.as_ref()
    }

    /// Runs the rules against the current value and records the verdict.
    ///
    /// Only the first failing rule is reported.
    pub fn validate(&mut self) -> ValidationResult<()> {
        match self.rules.check(&self.value) {
            Ok(()) => {
                self.error = None;
                Ok(())
            }
            Err(err) => {
                let err = err.with_field(self.name.clone());
                self.error = Some(err.clone());
                Err(err)
            }
        }
    }

    /// Stores a new value as typed by the user, normalized to the field's
    /// [`InputKind`].
    ///
    /// Returns `Some(verdict)` when the change triggered validation, which
    /// happens only while the field is invalid.
    pub fn set_value(&mut self, value: impl Into<Value>) -> Option<ValidationResult<()>> {
        self.value = self.kind.normalize(value.into());
        if self.is_valid() {
            None
        } else {
            Some(self.validate())
        }
    }

    /// Focus left the field: always validates.
    pub fn blur(&mut self) -> ValidationResult<()> {
        self.validate()
    }

    /// Clears the verdict and any displayed error, keeping the value.
    pub fn reset(&mut self) {
        self.error = None;
    }

    /// Empties the value without touching the verdict.
    pub fn clear(&mut self) {
        self.value = self.kind.empty_value();
    }
}
