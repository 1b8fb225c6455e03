//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into HTTP responses. The `AppError` enum serves as the top-level
//! error type that wraps domain-specific errors and implements `IntoResponse` for
//! automatic error handling in API endpoints.
//!
//! Status mapping follows the task board's HTTP contract:
//! - validation and write failures are client-input errors (422)
//! - read failures are reported as 400
//! - everything else is a 500 with a generic body

pub mod config;
pub mod store;
pub mod validation;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        config::ConfigError,
        store::{ReadError, WriteError},
        validation::ValidationError,
    },
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Every variant uses `#[from]` so services and
/// controllers can propagate with `?`.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Request input failed one or more field rules. Nothing was written.
    ///
    /// Delegates to `ValidationError::into_response()` (422 with the violation list).
    #[error(transparent)]
    ValidationErr(#[from] ValidationError),

    /// The store rejected or did not complete a write.
    ///
    /// Results in 422 Unprocessable Entity carrying the error detail. Constraint
    /// violations and infrastructure failures are not told apart at this layer.
    #[error(transparent)]
    WriteErr(#[from] WriteError),

    /// The request body was not valid JSON for the expected DTO.
    ///
    /// Keeps the extractor's status (400, 415 or 422) but answers with an `ErrorDto`
    /// like every other failure.
    #[error(transparent)]
    JsonErr(#[from] JsonRejection),

    /// A non-transactional read failed.
    ///
    /// Results in 400 Bad Request with a generic message; details are logged.
    #[error(transparent)]
    ReadErr(#[from] ReadError),

    /// Database error outside of request handling (connecting, migrating).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Socket error while binding or serving.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `ReadErr`
/// - The extractor's status (400, 415 or 422) - For `JsonErr`
/// - 422 Unprocessable Entity - For `ValidationErr` and `WriteErr`
/// - 500 Internal Server Error - For all other error types
impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        match self {
            Self::ValidationErr(err) => err.into_response(),
            Self::WriteErr(err) => {
                tracing::warn!("Write failed: {}", err);
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    Json(ErrorDto {
                        error: err.to_string(),
                    }),
                )
                    .into_response()
            }
            Self::JsonErr(rejection) => {
                tracing::debug!("Rejected request body: {}", rejection);
                (
                    rejection.status(),
                    Json(ErrorDto {
                        error: rejection.body_text(),
                    }),
                )
                    .into_response()
            }
            Self::ReadErr(err) => {
                tracing::error!("Read failed: {}", err);
                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorDto {
                        error: "Failed to read requested data".to_string(),
                    }),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the
/// client so implementation details do not leak.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
