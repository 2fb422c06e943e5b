//! Integration tests for rules as declared by form schemas.

use pretty_assertions::assert_eq;
use reel_validator::prelude::*;
use rstest::rstest;
use serde::Deserialize;

// ============================================================================
// DOCUMENTED EXAMPLES
// ============================================================================

#[test]
fn empty_value_reports_required_not_too_short() {
    let rules = RuleSet::from([Rule::required(), Rule::min_length(3)]);
    let err = rules.check(&Value::text("")).unwrap_err();
    assert_eq!(err.code, "required");
    assert_eq!(err.message, "This field is required");
}

#[rstest]
#[case("0532 123 45 67", true)]
#[case("1532123456", false)]
fn phone_examples(#[case] input: &str, #[case] ok: bool) {
    assert_eq!(Rule::phone().check(&Value::text(input)).is_ok(), ok);
}

#[rstest]
#[case("a@b.co", true)]
#[case("a@b", false)]
fn email_examples(#[case] input: &str, #[case] ok: bool) {
    assert_eq!(Rule::email().check(&Value::text(input)).is_ok(), ok);
}

#[test]
fn terms_checkbox_accepts_true_or_on() {
    let rule = Rule::accepted().with_message("Şartları kabul etmelisiniz");
    assert!(rule.check(&Value::Bool(true)).is_ok());
    assert!(rule.check(&Value::text("on")).is_ok());

    let err = rule.check(&Value::Bool(false)).unwrap_err();
    assert_eq!(err.message, "Şartları kabul etmelisiniz");
}

// ============================================================================
// TOML SCHEMA FRAGMENTS
// ============================================================================

#[derive(Debug, Deserialize)]
struct FieldFragment {
    name: String,
    rules: RuleSet,
}

#[test]
fn rules_deserialize_from_toml() {
    let fragment: FieldFragment = toml::from_str(
        r#"
        name = "filmTitle"
        rules = [
            { kind = "required", message = "Bu alan zorunludur" },
            { kind = "min_length", value = 2 },
            { kind = "max_length", value = 100, message = "En fazla 100 karakter olabilir" },
        ]
        "#,
    )
    .unwrap();

    assert_eq!(fragment.name, "filmTitle");
    assert_eq!(
        fragment.rules,
        RuleSet::from([
            Rule::required().with_message("Bu alan zorunludur"),
            Rule::min_length(2),
            Rule::max_length(100).with_message("En fazla 100 karakter olabilir"),
        ])
    );

    let err = fragment.rules.check(&Value::text("x")).unwrap_err();
    assert_eq!(err.code, "min_length");
    assert_eq!(err.message, "Must be at least 2 characters");
}

#[test]
fn url_and_phone_parameters_deserialize_from_toml() {
    let fragment: FieldFragment = toml::from_str(
        r#"
        name = "contact"
        rules = [
            { kind = "phone", region = "tr" },
            { kind = "url", host = "youtube" },
        ]
        "#,
    )
    .unwrap();

    assert_eq!(
        fragment.rules.rules(),
        &[Rule::phone(), Rule::youtube_url()]
    );
}
