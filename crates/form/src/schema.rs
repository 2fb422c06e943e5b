//! Declarative form definitions.
//!
//! A schema names a form, configures it and lists its fields in order:
//!
//! ```toml
//! id = "contact"
//!
//! [config]
//! submit_timeout_ms = 10000
//!
//! [[fields]]
//! name = "email"
//! rules = [
//!     { kind = "required" },
//!     { kind = "email", message = "That does not look like an email" },
//! ]
//!
//! [[fields]]
//! name = "agreeTerms"
//! kind = "checkbox"
//! rules = [{ kind = "accepted" }]
//! ```
//!
//! Each field declares its own input, so a schema-built form never hits
//! the unbound-field path.

use std::collections::HashSet;
use std::sync::Arc;

use reel_validator::RuleSet;
use serde::{Deserialize, Serialize};

use crate::config::FormConfig;
use crate::error::SchemaError;
use crate::form::Form;
use crate::input::{InputKind, InputSet};
use crate::presenter::Presenter;
use crate::submitter::Submitter;

/// One field of a [`FormSchema`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Field and input name.
    pub name: String,
    /// Input shape; text unless stated.
    #[serde(default)]
    pub kind: InputKind,
    /// Rules in evaluation order.
    #[serde(default)]
    pub rules: RuleSet,
}

impl FieldSpec {
    /// A text field.
    pub fn text(name: impl Into<String>, rules: impl Into<RuleSet>) -> Self {
        Self {
            name: name.into(),
            kind: InputKind::Text,
            rules: rules.into(),
        }
    }

    /// A checkbox field.
    pub fn checkbox(name: impl Into<String>, rules: impl Into<RuleSet>) -> Self {
        Self {
            name: name.into(),
            kind: InputKind::Checkbox,
            rules: rules.into(),
        }
    }
}

/// Serializable description of a whole form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormSchema {
    /// Form identifier.
    pub id: String,
    /// Form settings.
    #[serde(default)]
    pub config: FormConfig,
    /// Fields in binding order.
    #[serde(default)]
    pub fields: Vec<FieldSpec>,
}

impl FormSchema {
    /// Parses and checks a TOML schema.
    pub fn from_toml_str(source: &str) -> Result<Self, SchemaError> {
        let schema: Self = toml::from_str(source)?;
        schema.check()?;
        Ok(schema)
    }

    /// Rejects schemas that bind a name twice.
    pub fn check(&self) -> Result<(), SchemaError> {
        let mut seen = HashSet::with_capacity(self.fields.len());
        for field in &self.fields {
            if !seen.insert(field.name.as_str()) {
                return Err(SchemaError::DuplicateField(field.name.clone()));
            }
        }
        Ok(())
    }

    /// Inputs declared by the fields.
    #[must_use]
    pub fn inputs(&self) -> InputSet {
        self.fields
            .iter()
            .map(|field| (field.name.clone(), field.kind))
            .collect()
    }

    /// Builds a live form from this schema.
    #[must_use]
    pub fn build(&self, submitter: Arc<dyn Submitter>, presenter: Arc<dyn Presenter>) -> Form {
        let mut form = Form::new(self.id.clone(), self.inputs(), submitter)
            .with_presenter(presenter)
            .with_config(self.config.clone());
        for field in &self.fields {
            form.add_field(field.name.clone(), field.rules.clone());
        }
        form
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presenter::NullPresenter;
    use crate::submitter::MemorySubmitter;
    use pretty_assertions::assert_eq;
    use reel_validator::Rule;
    use std::time::Duration;

    const CONTACT: &str = r#"
        id = "contact"

        [config]
        submit_timeout_ms = 10000

        [[fields]]
        name = "email"
        rules = [
            { kind = "required" },
            { kind = "email", message = "That does not look like an email" },
        ]

        [[fields]]
        name = "agreeTerms"
        kind = "checkbox"
        rules = [{ kind = "accepted" }]
    "#;

    #[test]
    fn parses_fields_in_order() {
        let schema = FormSchema::from_toml_str(CONTACT).unwrap();

        assert_eq!(schema.id, "contact");
        assert_eq!(schema.config.submit_timeout(), Duration::from_secs(10));
        assert_eq!(
            schema.fields,
            vec![
                FieldSpec::text(
                    "email",
                    [
                        Rule::required(),
                        Rule::email().with_message("That does not look like an email"),
                    ]
                ),
                FieldSpec::checkbox("agreeTerms", [Rule::accepted()]),
            ]
        );
    }

    #[test]
    fn rejects_duplicate_fields() {
        let source = r#"
            id = "dup"
            [[fields]]
            name = "email"
            [[fields]]
            name = "email"
        "#;
        let err = FormSchema::from_toml_str(source).unwrap_err();
        assert!(matches!(err, SchemaError::DuplicateField(name) if name == "email"));
    }

    #[test]
    fn rejects_unknown_rule_kind() {
        let source = r#"
            id = "bad"
            [[fields]]
            name = "email"
            rules = [{ kind = "telepathy" }]
        "#;
        assert!(matches!(
            FormSchema::from_toml_str(source),
            Err(SchemaError::Parse(_))
        ));
    }

    #[test]
    fn builds_every_field() {
        let schema = FormSchema::from_toml_str(CONTACT).unwrap();
        let form = schema.build(Arc::new(MemorySubmitter::new()), Arc::new(NullPresenter));

        assert_eq!(form.id(), "contact");
        assert_eq!(form.field_names(), ["email", "agreeTerms"]);
        assert_eq!(
            form.field("agreeTerms").unwrap().kind(),
            InputKind::Checkbox
        );
    }
}
