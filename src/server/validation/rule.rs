//! Field rules and their predicates.

use chrono::{DateTime, NaiveDate};
use uuid::Uuid;

/// A single constraint on a string field.
///
/// `Required` is checked against presence; every other rule is only evaluated when the
/// field is present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// The field must be present.
    Required,
    /// Non-empty and ASCII letters only.
    Alpha,
    /// Character count within `min..=max`.
    Length { min: usize, max: usize },
    /// A hyphenated or simple UUID.
    Uuid,
    /// A calendar date, `YYYY-MM-DD` or an RFC 3339 timestamp.
    Date,
    Email,
}

impl Rule {
    /// Name reported in violations.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::Alpha => "alpha",
            Self::Length { .. } => "length",
            Self::Uuid => "uuid",
            Self::Date => "date",
            Self::Email => "email",
        }
    }

    /// Checks a present value against this rule.
    ///
    /// # Returns
    /// - `Ok(())` - The value satisfies the rule
    /// - `Err(String)` - Human readable reason the value was rejected
    pub fn check(&self, field: &str, value: &str) -> Result<(), String> {
        match *self {
            Self::Required => Ok(()),
            Self::Alpha => {
                if !value.is_empty() && value.chars().all(|c| c.is_ascii_alphabetic()) {
                    Ok(())
                } else {
                    Err(format!("{} must contain only letters (a-zA-Z)", field))
                }
            }
            Self::Length { min, max } => {
                let len = value.chars().count();
                if (min..=max).contains(&len) {
                    Ok(())
                } else {
                    Err(format!(
                        "{} must be between {} and {} characters long",
                        field, min, max
                    ))
                }
            }
            Self::Uuid => parse_uuid(value)
                .map(|_| ())
                .ok_or_else(|| format!("{} must be a UUID", field)),
            Self::Date => parse_date(value)
                .map(|_| ())
                .ok_or_else(|| format!("{} must be a valid ISO 8601 date string", field)),
            Self::Email => {
                if is_email(value) {
                    Ok(())
                } else {
                    Err(format!("{} must be an email", field))
                }
            }
        }
    }
}

pub fn parse_uuid(value: &str) -> Option<Uuid> {
    Uuid::try_parse(value).ok()
}

/// Parses a date-only string or takes the calendar date of an RFC 3339 timestamp.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(value)
                .ok()
                .map(|timestamp| timestamp.date_naive())
        })
}

fn is_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };

    !local.is_empty()
        && !value.chars().any(char::is_whitespace)
        && domain.contains('.')
        && domain
            .split('.')
            .all(|label| !label.is_empty() && !label.contains('@'))
}
