//! Rules and rule sets
//!
//! A [`Rule`] is a tagged variant naming one built-in predicate, its
//! parameters, and an optional message override. Rules are plain data: they
//! can be declared in code, deserialized from a form schema, compared and
//! cloned. A [`RuleSet`] is the ordered list a field evaluates.
//!
//! ```toml
//! rules = [
//!     { kind = "required", message = "Bu alan zorunludur" },
//!     { kind = "min_length", value = 3 },
//! ]
//! ```

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::foundation::{Validate, ValidationError, ValidationResult};
use crate::validators::{
    Accepted, Email, MaxLength, MinLength, Phone, PhoneRegion, Required, VideoHost, VideoUrl,
};
use crate::value::Value;

// ============================================================================
// CHECK
// ============================================================================

/// The predicate a rule applies, with its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Check {
    /// Trimmed value must be non-empty.
    Required,
    /// `local@domain.tld` shape.
    Email,
    /// Regional mobile number shape.
    Phone {
        /// Numbering plan.
        #[serde(default)]
        region: PhoneRegion,
    },
    /// At least `value` chars (inclusive).
    MinLength {
        /// Lower bound.
        value: usize,
    },
    /// At most `value` chars (inclusive).
    MaxLength {
        /// Upper bound.
        value: usize,
    },
    /// Matches one of a host's accepted link shapes.
    Url {
        /// Host family.
        #[serde(default)]
        host: VideoHost,
    },
    /// Checkbox is checked (`true` or `"on"`).
    Accepted,
}

impl Check {
    fn apply(self, value: &Value) -> ValidationResult<()> {
        let text = value.as_text();
        match self {
            Self::Required => Required.validate(&text),
            Self::Email => Email.validate(&text),
            Self::Phone { region } => Phone::for_region(region).validate(&text),
            Self::MinLength { value: min } => MinLength::new(min).validate(&text),
            Self::MaxLength { value: max } => MaxLength::new(max).validate(&text),
            Self::Url { host } => VideoUrl::new(host).validate(&text),
            Self::Accepted => Accepted.validate(value),
        }
    }
}

// ============================================================================
// RULE
// ============================================================================

/// One validation rule: a predicate plus the message shown when it fails.
///
/// # Examples
///
/// ```rust
/// use reel_validator::{Rule, Value};
///
/// let rule = Rule::min_length(3).with_message("En az 3 karakter olmalıdır");
/// let err = rule.check(&Value::text("ab")).unwrap_err();
/// assert_eq!(err.message, "En az 3 karakter olmalıdır");
/// assert_eq!(err.code, "min_length");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rule {
    #[serde(flatten)]
    check: Check,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

impl Rule {
    /// Creates a rule with the predicate's default message.
    #[must_use]
    pub const fn new(check: Check) -> Self {
        Self {
            check,
            message: None,
        }
    }

    /// Fails when the trimmed value is empty.
    #[must_use]
    pub const fn required() -> Self {
        Self::new(Check::Required)
    }

    /// Fails unless the value looks like `local@domain.tld`.
    #[must_use]
    pub const fn email() -> Self {
        Self::new(Check::Email)
    }

    /// Fails unless the value is a Turkish mobile number.
    #[must_use]
    pub const fn phone() -> Self {
        Self::new(Check::Phone {
            region: PhoneRegion::Tr,
        })
    }

    /// Fails when the value is shorter than `min` chars.
    #[must_use]
    pub const fn min_length(min: usize) -> Self {
        Self::new(Check::MinLength { value: min })
    }

    /// Fails when the value is longer than `max` chars.
    #[must_use]
    pub const fn max_length(max: usize) -> Self {
        Self::new(Check::MaxLength { value: max })
    }

    /// Fails unless the value is a link to the given video host.
    #[must_use]
    pub const fn url(host: VideoHost) -> Self {
        Self::new(Check::Url { host })
    }

    /// Fails unless the value is a YouTube link.
    #[must_use]
    pub const fn youtube_url() -> Self {
        Self::url(VideoHost::YouTube)
    }

    /// Fails unless a checkbox is checked.
    #[must_use]
    pub const fn accepted() -> Self {
        Self::new(Check::Accepted)
    }

    /// Overrides the message reported on failure.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// The predicate this rule applies.
    #[must_use]
    pub const fn kind(&self) -> Check {
        self.check
    }

    /// The message override, if any.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Evaluates the rule against a value.
    pub fn check(&self, value: &Value) -> ValidationResult<()> {
        self.check.apply(value).map_err(|err| match &self.message {
            Some(message) => err.with_message(Cow::Owned(message.clone())),
            None => err,
        })
    }
}

impl From<Check> for Rule {
    fn from(check: Check) -> Self {
        Self::new(check)
    }
}

// ============================================================================
// RULE SET
// ============================================================================

/// An ordered list of rules evaluated with first-failure semantics.
///
/// Rules run in declaration order and evaluation stops at the first rule
/// that fails, so `[required, min_length(3)]` reports "required" for an
/// empty value rather than "too short".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Creates a rule set from rules in evaluation order.
    pub fn new(rules: impl IntoIterator<Item = Rule>) -> Self {
        Self {
            rules: rules.into_iter().collect(),
        }
    }

    /// Appends a rule at the end of the evaluation order.
    pub fn push(&mut self, rule: Rule) -> &mut Self {
        self.rules.push(rule);
        self
    }

    /// Rules in evaluation order.
    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Number of rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns `true` when no rule is declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Returns the first failing rule's error, or `Ok(())` if all pass.
    pub fn check(&self, value: &Value) -> ValidationResult<()> {
        self.rules.iter().try_for_each(|rule| rule.check(value))
    }
}

impl FromIterator<Rule> for RuleSet {
    fn from_iter<I: IntoIterator<Item = Rule>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<const N: usize> From<[Rule; N]> for RuleSet {
    fn from(rules: [Rule; N]) -> Self {
        Self::new(rules)
    }
}

impl From<Vec<Rule>> for RuleSet {
    fn from(rules: Vec<Rule>) -> Self {
        Self { rules }
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

// ============================================================================
// TESTS
// ============================================================================
