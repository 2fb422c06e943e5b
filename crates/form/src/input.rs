//! Declared inputs
//!
//! An [`InputSet`] stands in for the markup a form is bound to: the names
//! of the inputs that exist and whether each is free text or a checkbox.
//! Binding a field to a name that is not declared here is a configuration
//! error.

use indexmap::IndexMap;
use reel_validator::Value;
use reel_validator::validators::boolean::CHECKED_SENTINEL;
use serde::{Deserialize, Serialize};

/// Shape of an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    /// Text-like input; contributes its string value.
    #[default]
    Text,
    /// Checkbox; contributes its boolean `checked` state.
    Checkbox,
}

impl InputKind {
    /// The value an input of this kind holds when cleared.
    #[must_use]
    pub fn empty_value(self) -> Value {
        match self {
            Self::Text => Value::default(),
            Self::Checkbox => Value::Bool(false),
        }
    }

    /// Brings a value into the shape this kind stores and submits.
    ///
    /// A checkbox keeps booleans and reads text as checked only when it is
    /// the browser sentinel `"on"`. A text input stores booleans as
    /// `"true"` / `"false"`.
    #[must_use]
    pub fn normalize(self, value: Value) -> Value {
        match (self, value) {
            (Self::Checkbox, Value::Text(text)) => Value::Bool(text == CHECKED_SENTINEL),
            (Self::Text, value @ Value::Bool(_)) => Value::text(value.as_text()),
            (_, value) => value,
        }
    }
}

/// The inputs available for binding, by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputSet {
    inputs: IndexMap<String, InputKind>,
}

impl InputSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares an input. A later declaration of the same name replaces the
    /// earlier kind.
    #[must_use = "builder methods must be chained or built"]
    pub fn with(mut self, name: impl Into<String>, kind: InputKind) -> Self {
        self.insert(name, kind);
        self
    }

    /// Declares a text input.
    #[must_use = "builder methods must be chained or built"]
    pub fn text(self, name: impl Into<String>) -> Self {
        self.with(name, InputKind::Text)
    }

    /// Declares a checkbox input.
    #[must_use = "builder methods must be chained or built"]
    pub fn checkbox(self, name: impl Into<String>) -> Self {
        self.with(name, InputKind::Checkbox)
    }

    /// Declares an input in place.
    pub fn insert(&mut self, name: impl Into<String>, kind: InputKind) {
        self.inputs.insert(name.into(), kind);
    }

    /// Looks up the kind of a declared input.
    #[must_use]
    pub fn kind(&self, name: &str) -> Option<InputKind> {
        self.inputs.get(name).copied()
    }

    /// Number of declared inputs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    /// Returns `true` when nothing is declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }

    /// Declared names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.inputs.keys().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<(S, InputKind)> for InputSet {
    fn from_iter<I: IntoIterator<Item = (S, InputKind)>>(iter: I) -> Self {
        let mut set = Self::new();
        for (name, kind) in iter {
            set.insert(name, kind);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_name() {
        let inputs = InputSet::new().text("email").checkbox("agreeTerms");
        assert_eq!(inputs.kind("email"), Some(InputKind::Text));
        assert_eq!(inputs.kind("agreeTerms"), Some(InputKind::Checkbox));
        assert_eq!(inputs.kind("phone"), None);
        assert_eq!(inputs.names().collect::<Vec<_>>(), ["email", "agreeTerms"]);
    }

    #[test]
    fn empty_values_per_kind() {
        assert_eq!(InputKind::Text.empty_value(), Value::text(""));
        assert_eq!(InputKind::Checkbox.empty_value(), Value::Bool(false));
    }

    #[test]
    fn normalize_by_kind() {
        let checkbox = InputKind::Checkbox;
        assert_eq!(checkbox.normalize(Value::text("on")), Value::Bool(true));
        assert_eq!(checkbox.normalize(Value::text("off")), Value::Bool(false));
        assert_eq!(checkbox.normalize(Value::Bool(true)), Value::Bool(true));

        let text = InputKind::Text;
        assert_eq!(text.normalize(Value::Bool(true)), Value::text("true"));
        assert_eq!(text.normalize(Value::text("on")), Value::text("on"));
    }
}
