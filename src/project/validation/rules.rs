//! Validation rule implementation.
//!
//! Every bound is exclusive: a text passes `min_length: 5` only with six or
//! more characters, and a number passes `max: 10` only below ten.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Optional constraints applied to one field.
///
/// # Examples
///
/// ```
/// use projboard::project::validation::{FieldRules, FieldValue, Validatable, validate};
///
/// let rules = FieldRules::required().with_min_length(5);
/// assert!(!validate(&Validatable::new("description", FieldValue::text("hello"), rules)));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FieldRules {
    /// Rejects values whose trimmed text form is empty.
    pub required: bool,
    /// Exclusive lower bound on trimmed text length.
    pub min_length: Option<usize>,
    /// Exclusive upper bound on trimmed text length.
    pub max_length: Option<usize>,
    /// Exclusive lower bound on numeric values.
    pub min: Option<f64>,
    /// Exclusive upper bound on numeric values.
    pub max: Option<f64>,
}

impl FieldRules {
    /// Rules with only `required` set.
    #[must_use]
    pub const fn required() -> Self {
        Self {
            required: true,
            min_length: None,
            max_length: None,
            min: None,
            max: None,
        }
    }

    /// Sets the exclusive minimum text length.
    #[must_use]
    pub const fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = Some(min_length);
        self
    }

    /// Sets the exclusive maximum text length.
    #[must_use]
    pub const fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    /// Sets the exclusive numeric minimum.
    #[must_use]
    pub const fn with_min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    /// Sets the exclusive numeric maximum.
    #[must_use]
    pub const fn with_max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }
}

/// A value entered by the user, either textual or numeric.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Free text.
    Text(String),
    /// A number coerced from user input.
    Number(f64),
}

impl FieldValue {
    /// Wraps free text.
    #[must_use]
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Coerces raw input into a number.
    ///
    /// Blank input becomes `0` and unparsable input becomes `NaN`, which
    /// fails every numeric bound.
    #[must_use]
    pub fn number_from_input(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Self::Number(0.0);
        }
        Self::Number(trimmed.parse::<f64>().unwrap_or(f64::NAN))
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Number(number) => write!(f, "{number}"),
        }
    }
}

/// A labelled value together with the rules it must satisfy.
#[derive(Debug, Clone, PartialEq)]
pub struct Validatable {
    label: String,
    value: FieldValue,
    rules: FieldRules,
}

impl Validatable {
    /// Creates a validatable field.
    #[must_use]
    pub fn new(label: impl Into<String>, value: FieldValue, rules: FieldRules) -> Self {
        Self {
            label: label.into(),
            value,
            rules,
        }
    }

    /// Returns the field label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the value under validation.
    #[must_use]
    pub const fn value(&self) -> &FieldValue {
        &self.value
    }

    /// Returns the rules applied to the value.
    #[must_use]
    pub const fn rules(&self) -> &FieldRules {
        &self.rules
    }
}

/// Checks one value against its rules. Never panics.
#[must_use]
pub fn validate(validatable: &Validatable) -> bool {
    let rules = &validatable.rules;
    if rules.required && validatable.value.to_string().trim().is_empty() {
        return false;
    }

    match &validatable.value {
        FieldValue::Text(text) => text_within_bounds(text.trim(), rules),
        FieldValue::Number(number) => number_within_bounds(*number, rules),
    }
}

fn text_within_bounds(text: &str, rules: &FieldRules) -> bool {
    let length = text.chars().count();
    let above_min = rules.min_length.is_none_or(|min| length > min);
    let below_max = rules.max_length.is_none_or(|max| length < max);
    above_min && below_max
}

fn number_within_bounds(number: f64, rules: &FieldRules) -> bool {
    let above_min = rules.min.is_none_or(|min| number > min);
    let below_max = rules.max.is_none_or(|max| number < max);
    above_min && below_max
}
