//! The failure value produced by every rule.

use std::borrow::Cow;
use std::fmt;

use serde::Serialize;

type Text = Cow<'static, str>;

/// Why a value was rejected.
///
/// `message` is the text shown under the input. `code` names the failed
/// check (`"required"`, `"email"`, ...) and stays stable when a schema swaps
/// the message for a localized one. `params` carry the numbers a translated
/// message may need, in insertion order.
///
/// ```rust
/// use reel_validator::foundation::ValidationError;
///
/// let error = ValidationError::min_length(3, 1).with_field("fullName");
/// assert_eq!(error.code, "min_length");
/// assert_eq!(error.field.as_deref(), Some("fullName"));
/// assert_eq!(error.param("min"), Some("3"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    pub code: Text,
    pub message: Text,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<Text>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<(Text, Text)>,
}

impl ValidationError {
    pub fn new(code: impl Into<Text>, message: impl Into<Text>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            field: None,
            params: Vec::new(),
        }
    }

    /// Blank input.
    #[must_use]
    pub fn required() -> Self {
        Self::new("required", "This field is required")
    }

    /// Fewer than `min` characters.
    #[must_use]
    pub fn min_length(min: usize, actual: usize) -> Self {
        Self::new("min_length", format!("Must be at least {min} characters"))
            .with_param("min", min.to_string())
            .with_param("actual", actual.to_string())
    }

    /// More than `max` characters.
    #[must_use]
    pub fn max_length(max: usize, actual: usize) -> Self {
        Self::new("max_length", format!("Must be at most {max} characters"))
            .with_param("max", max.to_string())
            .with_param("actual", actual.to_string())
    }

    /// A shape mismatch; `expected` describes the accepted shape.
    pub fn invalid_format(
        code: impl Into<Text>,
        message: impl Into<Text>,
        expected: impl Into<Text>,
    ) -> Self {
        Self::new(code, message).with_param("expected", expected)
    }

    #[must_use]
    pub fn with_field(self, field: impl Into<Text>) -> Self {
        Self {
            field: Some(field.into()),
            ..self
        }
    }

    /// Swaps the message; code and params are untouched.
    #[must_use]
    pub fn with_message(self, message: impl Into<Text>) -> Self {
        Self {
            message: message.into(),
            ..self
        }
    }

    #[must_use]
    pub fn with_param(mut self, key: impl Into<Text>, value: impl Into<Text>) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find_map(|(k, v)| (k == key).then_some(v.as_ref()))
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.field {
            Some(field) => write!(f, "{field}: {} ({})", self.message, self.code),
            None => write!(f, "{} ({})", self.message, self.code),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn fresh_error_has_no_field_or_params() {
        let error = ValidationError::new("custom", "Nope");
        assert_eq!(error.field, None);
        assert!(error.params.is_empty());
    }

    #[test]
    fn message_swap_keeps_code_and_params() {
        let error = ValidationError::min_length(3, 1).with_message("En az 3 karakter olmalıdır");
        assert_eq!(error.code, "min_length");
        assert_eq!(error.message, "En az 3 karakter olmalıdır");
        assert_eq!(error.param("actual"), Some("1"));
        assert_eq!(error.param("missing"), None);
    }

    #[test]
    fn display_includes_field_and_code() {
        let error = ValidationError::max_length(2, 3).with_field("title");
        assert_eq!(error.to_string(), "title: Must be at most 2 characters (max_length)");
        assert_eq!(
            ValidationError::required().to_string(),
            "This field is required (required)"
        );
    }

    #[test]
    fn static_text_is_borrowed() {
        let error = ValidationError::required();
        assert!(matches!(error.code, Cow::Borrowed(_)));
        assert!(matches!(error.message, Cow::Borrowed(_)));
    }

    #[test]
    fn serializes_without_empty_parts() {
        let json = serde_json::to_value(ValidationError::required()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "code": "required", "message": "This field is required" })
        );
    }
}
