//! Checkbox validators

use crate::foundation::ValidationError;
use crate::value::Value;

/// Sentinel a checked HTML checkbox submits when it has no explicit value.
pub const CHECKED_SENTINEL: &str = "on";

crate::validator! {
    /// Validates that a checkbox-like value is accepted.
    ///
    /// Passes for boolean `true` and for the string `"on"`.
    pub Accepted for Value;
    rule(input) { matches!(input, Value::Bool(true)) || matches!(input, Value::Text(s) if s == CHECKED_SENTINEL) }
    error(input) { ValidationError::new("accepted", "This box must be checked") }
    fn accepted();
}
