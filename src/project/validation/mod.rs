//! Field validation for user-entered project data.
//!
//! Validation is a pure predicate over one labelled value and a set of
//! optional constraints. Callers combine several checks with logical AND.

pub mod rules;

pub use rules::{FieldRules, FieldValue, Validatable, validate};
