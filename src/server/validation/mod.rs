//! Declarative request validation.
//!
//! Each request record declares a static rule table (field name -> rules) through the
//! `Validate` trait, and the single `validate` routine evaluates any record against its
//! table. Validation is pure: it never touches the store, so a rejected request produces
//! no writes.

pub mod rule;

use chrono::NaiveDate;
use uuid::Uuid;

use crate::server::error::validation::ValidationError;

pub use rule::Rule;

/// Rules attached to one field of a record.
#[derive(Debug, Clone, Copy)]
pub struct FieldRules {
    /// JSON name of the field, as reported in violations.
    pub field: &'static str,
    pub rules: &'static [Rule],
}

/// One failed rule on one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: &'static str,
    pub rule: &'static str,
    pub message: String,
}

impl FieldViolation {
    fn missing(field: &'static str) -> Self {
        Self {
            field,
            rule: Rule::Required.name(),
            message: format!("{} should not be null or undefined", field),
        }
    }
}

/// A record that can be checked against a static rule table.
pub trait Validate {
    /// Rule table, evaluated in order.
    const RULES: &'static [FieldRules];

    /// Returns the raw value of a field named in `RULES`, or `None` when it is absent.
    fn field(&self, name: &str) -> Option<&str>;
}

/// Validates a record against its rule table.
///
/// # Returns
/// - `Ok(T)` - The record, unchanged, when every rule holds
/// - `Err(ValidationError)` - Every violation, ordered by field then by rule
pub fn validate<T: Validate>(record: T) -> Result<T, ValidationError> {
    let violations: Vec<FieldViolation> = T::RULES
        .iter()
        .flat_map(|field_rules| check_field(field_rules, record.field(field_rules.field)))
        .collect();

    if violations.is_empty() {
        Ok(record)
    } else {
        Err(ValidationError::new(violations))
    }
}

fn check_field(field_rules: &FieldRules, value: Option<&str>) -> Vec<FieldViolation> {
    let field = field_rules.field;

    let Some(value) = value else {
        return if field_rules.rules.contains(&Rule::Required) {
            vec![FieldViolation::missing(field)]
        } else {
            Vec::new()
        };
    };

    field_rules
        .rules
        .iter()
        .filter_map(|rule| {
            rule.check(field, value).err().map(|message| FieldViolation {
                field,
                rule: rule.name(),
                message,
            })
        })
        .collect()
}

/// Takes a required value out of a validated record.
pub fn require(field: &'static str, value: Option<String>) -> Result<String, ValidationError> {
    value.ok_or_else(|| ValidationError::single(FieldViolation::missing(field)))
}

/// Takes a required UUID out of a validated record.
pub fn require_uuid(field: &'static str, value: Option<String>) -> Result<Uuid, ValidationError> {
    let value = require(field, value)?;

    rule::parse_uuid(&value).ok_or_else(|| rejected(field, Rule::Uuid, &value))
}

/// Takes a required date out of a validated record.
pub fn require_date(
    field: &'static str,
    value: Option<String>,
) -> Result<NaiveDate, ValidationError> {
    let value = require(field, value)?;

    rule::parse_date(&value).ok_or_else(|| rejected(field, Rule::Date, &value))
}

fn rejected(field: &'static str, rule: Rule, value: &str) -> ValidationError {
    let message = rule
        .check(field, value)
        .err()
        .unwrap_or_else(|| format!("{} is invalid", field));

    ValidationError::single(FieldViolation {
        field,
        rule: rule.name(),
        message,
    })
}
