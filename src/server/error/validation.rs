use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::{FieldViolationDto, ValidationErrorDto},
    server::validation::FieldViolation,
};

/// Request input failed one or more field rules.
///
/// Always holds at least one violation, ordered by the rule table of the validated record.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("Input failed validation with {} violation(s)", .violations.len())]
pub struct ValidationError {
    pub violations: Vec<FieldViolation>,
}

impl ValidationError {
    pub fn new(violations: Vec<FieldViolation>) -> Self {
        Self { violations }
    }

    /// Shorthand for an error with exactly one violation.
    pub fn single(violation: FieldViolation) -> Self {
        Self {
            violations: vec![violation],
        }
    }
}

/// Converts validation errors into 422 responses listing every violation.
impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let violations = self
            .violations
            .into_iter()
            .map(FieldViolation::into_dto)
            .collect();

        (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ValidationErrorDto {
                error: "Validation failed".to_string(),
                violations,
            }),
        )
            .into_response()
    }
}

impl FieldViolation {
    pub fn into_dto(self) -> FieldViolationDto {
        FieldViolationDto {
            field: self.field.to_string(),
            rule: self.rule.to_string(),
            message: self.message,
        }
    }
}
