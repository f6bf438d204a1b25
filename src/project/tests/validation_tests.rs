//! Validator tests, including the exclusive bound semantics.

use crate::project::validation::{FieldRules, FieldValue, Validatable, validate};
use rstest::rstest;

fn check(value: FieldValue, rules: FieldRules) -> bool {
    validate(&Validatable::new("field", value, rules))
}

#[rstest]
fn empty_required_text_fails() {
    assert!(!check(FieldValue::text(""), FieldRules::required()));
}

#[rstest]
fn whitespace_only_required_text_fails() {
    assert!(!check(FieldValue::text("   "), FieldRules::required()));
}

#[rstest]
fn min_length_is_exclusive() {
    let rules = FieldRules::required().with_min_length(5);

    assert!(!check(FieldValue::text("hello"), rules.clone()));
    assert!(check(FieldValue::text("hello!"), rules));
}

#[rstest]
fn max_length_is_exclusive() {
    let rules = FieldRules::default().with_max_length(3);

    assert!(!check(FieldValue::text("abc"), rules.clone()));
    assert!(check(FieldValue::text("ab"), rules));
}

#[rstest]
fn length_ignores_surrounding_whitespace() {
    let rules = FieldRules::default().with_min_length(2);

    assert!(!check(FieldValue::text("  ab  "), rules));
}

#[rstest]
#[case(5.0, true)]
#[case(1.0, false)]
#[case(10.0, false)]
#[case(9.5, true)]
fn numeric_bounds_are_exclusive(#[case] number: f64, #[case] expected: bool) {
    let rules = FieldRules::default().with_min(1.0).with_max(10.0);

    assert_eq!(check(FieldValue::Number(number), rules), expected);
}

#[rstest]
fn max_alone_rejects_its_own_value() {
    assert!(!check(
        FieldValue::Number(10.0),
        FieldRules::default().with_max(10.0)
    ));
}

#[rstest]
fn every_set_constraint_must_hold() {
    let rules = FieldRules::required().with_min_length(2).with_max_length(4);

    assert!(!check(FieldValue::text("a"), rules.clone()));
    assert!(!check(FieldValue::text("abcd"), rules.clone()));
    assert!(check(FieldValue::text("abc"), rules));
}

#[rstest]
fn unconstrained_values_pass() {
    assert!(check(FieldValue::text(""), FieldRules::default()));
    assert!(check(FieldValue::Number(-3.0), FieldRules::default()));
}

#[rstest]
fn length_rules_do_not_apply_to_numbers() {
    let rules = FieldRules::default().with_min_length(5);

    assert!(check(FieldValue::Number(3.0), rules));
}

#[rstest]
fn numeric_rules_do_not_apply_to_text() {
    let rules = FieldRules::default().with_max(1.0);

    assert!(check(FieldValue::text("a long description"), rules));
}

#[rstest]
#[case("", FieldValue::Number(0.0))]
#[case(" 7 ", FieldValue::Number(7.0))]
#[case("2.5", FieldValue::Number(2.5))]
fn number_from_input_coerces_like_a_form(#[case] raw: &str, #[case] expected: FieldValue) {
    assert_eq!(FieldValue::number_from_input(raw), expected);
}

#[rstest]
fn unparsable_number_fails_numeric_bounds() {
    let value = FieldValue::number_from_input("three");

    assert!(matches!(value, FieldValue::Number(number) if number.is_nan()));
    assert!(!check(value, FieldRules::required().with_min(1.0)));
}

#[rstest]
fn blank_number_passes_required_but_fails_minimum() {
    let value = FieldValue::number_from_input("");

    assert!(check(value.clone(), FieldRules::required()));
    assert!(!check(value, FieldRules::required().with_min(1.0)));
}

#[rstest]
fn rules_deserialize_with_defaults() {
    let rules: FieldRules =
        serde_json::from_str(r#"{"required": true, "max": 10}"#).expect("rules parse");

    assert_eq!(rules, FieldRules::required().with_max(10.0));
}

#[rstest]
fn rules_reject_unknown_keys() {
    let parsed = serde_json::from_str::<FieldRules>(r#"{"minimum": 1}"#);

    assert!(parsed.is_err());
}

#[rstest]
fn validatable_exposes_its_parts() {
    let rules = FieldRules::required();
    let validatable = Validatable::new("title", FieldValue::text("Build API"), rules.clone());

    assert_eq!(validatable.label(), "title");
    assert_eq!(validatable.value(), &FieldValue::text("Build API"));
    assert_eq!(validatable.rules(), &rules);
}
