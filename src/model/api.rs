use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// A single rule a request field failed.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct FieldViolationDto {
    /// JSON name of the offending field.
    pub field: String,
    /// Name of the failed rule, e.g. `required` or `length`.
    pub rule: String,
    pub message: String,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ValidationErrorDto {
    pub error: String,
    pub violations: Vec<FieldViolationDto>,
}
