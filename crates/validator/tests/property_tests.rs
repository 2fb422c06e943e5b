//! Property-based tests for reel-validator.

use reel_validator::prelude::*;
use proptest::prelude::*;

// ============================================================================
// IDEMPOTENCY: validate(x) == validate(x)
// ============================================================================

proptest! {
    #[test]
    fn min_length_idempotent(s in ".*") {
        let v = min_length(3);
        let r1 = v.validate(&*s);
        let r2 = v.validate(&*s);
        prop_assert_eq!(r1, r2);
    }

    #[test]
    fn email_idempotent(s in ".*") {
        let v = email();
        prop_assert_eq!(v.validate(&*s).is_ok(), v.validate(&*s).is_ok());
    }

    #[test]
    fn rule_set_idempotent(s in ".{0,12}") {
        let rules = RuleSet::from([Rule::required(), Rule::min_length(3), Rule::max_length(8)]);
        let value = Value::text(s);
        prop_assert_eq!(rules.check(&value), rules.check(&value));
    }
}

// ============================================================================
// LENGTH BOUNDS ARE INCLUSIVE
// ============================================================================

proptest! {
    #[test]
    fn exact_length_passes_both_bounds(s in ".{0,40}") {
        let n = s.chars().count();
        prop_assert!(min_length(n).validate(&*s).is_ok());
        prop_assert!(max_length(n).validate(&*s).is_ok());
    }

    #[test]
    fn one_past_the_bound_fails(s in ".{1,40}") {
        let n = s.chars().count();
        prop_assert!(min_length(n + 1).validate(&*s).is_err());
        prop_assert!(max_length(n - 1).validate(&*s).is_err());
    }
}

// ============================================================================
// FIRST FAILURE: a rule set reports the earliest failing rule
// ============================================================================

proptest! {
    #[test]
    fn rule_set_reports_earliest_failing_rule(s in "[ a-z]{0,10}") {
        let chain = [Rule::required(), Rule::min_length(3), Rule::max_length(6)];
        let value = Value::text(s);

        let expected = chain.iter().find_map(|r| r.check(&value).err());
        let actual = RuleSet::from(chain.clone()).check(&value).err();
        prop_assert_eq!(actual, expected);
    }
}

// ============================================================================
// PHONE: whitespace is ignored
// ============================================================================

proptest! {
    #[test]
    fn phone_ignores_whitespace(number in "(\\+90|0)?5[0-9]{9}") {
        let spaced: String = number.chars().flat_map(|c| [c, ' ']).collect();
        prop_assert!(phone().validate(&*number).is_ok());
        prop_assert!(phone().validate(&*spaced).is_ok());
    }

    #[test]
    fn formatted_phone_input_is_valid(rest in "[0-9]{9}") {
        let typed = format!("5{rest}");
        prop_assert!(phone().validate(&format_phone_input(&typed)).is_ok());
    }
}
