//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into the JSON error envelope. The `AppError` enum is the single
//! translation point: every handler, extractor and middleware returns it and its
//! `IntoResponse` implementation picks the status code and message.

pub mod config;
pub mod internal;

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

use crate::{
    model::api::{ErrorDto, FieldErrorDto},
    server::error::{config::ConfigError, internal::InternalError},
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Infrastructure errors use `#[from]` and map to
/// 500, while the remaining variants carry their own status code and client message.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] DbErr),

    /// Cron scheduler error.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// Socket or filesystem error while binding or serving.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Unexpected internal inconsistency.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// The persistence gateway has no live connection.
    #[error("Database connection has not been established")]
    DatabaseNotReady,

    /// Request body or parameters failed validation.
    ///
    /// Results in 400 Bad Request with the per-field `errors` list.
    #[error("{message}")]
    Validation {
        message: String,
        errors: Vec<FieldErrorDto>,
    },

    /// Results in 401 Unauthorized.
    #[error("{0}")]
    Unauthorized(String),

    /// Results in 403 Forbidden.
    #[error("{0}")]
    Forbidden(String),

    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),

    /// Results in 409 Conflict, raised from unique-constraint violations.
    #[error("{0}")]
    Conflict(String),

    /// Results in 413 Payload Too Large, raised when the body exceeds `MAX_BODY_BYTES`.
    #[error("Request body is too large")]
    PayloadTooLarge,

    /// Results in 429 Too Many Requests with a `Retry-After` header.
    #[error("{message}")]
    TooManyRequests { message: String, retry_after_secs: u64 },

    /// Internal server error with custom message.
    ///
    /// The provided message is logged but a generic message is returned to the client.
    #[error("{0}")]
    InternalError(String),
}

/// Debug rendering of the error that produced a response.
///
/// Attached to error responses as an extension so the error detail middleware can add
/// it to the body outside production.
#[derive(Debug, Clone)]
pub struct ErrorTrace(pub String);

impl AppError {
    /// Builds a validation error from a list of field errors.
    pub fn validation(message: impl Into<String>, errors: Vec<FieldErrorDto>) -> Self {
        Self::Validation {
            message: message.into(),
            errors,
        }
    }

    /// Builds a validation error for a single field.
    pub fn invalid_field(field: &str, message: impl Into<String>) -> Self {
        let message = message.into();
        Self::validation(
            format!("Invalid value for '{}'", field),
            vec![FieldErrorDto::new(field, message)],
        )
    }

    /// Maps a unique-constraint violation to `Conflict`, passing other errors through.
    ///
    /// # Arguments
    /// - `err` - Error returned by the store
    /// - `message` - Client-facing message used when the error is a conflict
    pub fn conflict_on_unique(err: DbErr, message: impl Into<String>) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => Self::Conflict(message.into()),
            _ => Self::DbErr(err),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            Self::TooManyRequests { .. } => StatusCode::TOO_MANY_REQUESTS,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Converts application errors into the JSON error envelope.
///
/// Client errors echo their message. Server errors are logged with full details and
/// return a generic message to avoid leaking implementation details.
///
/// # Returns
/// - 400 Bad Request - `Validation`, including the field error list
/// - 401 / 403 / 404 / 409 / 413 - Matching variants with their message
/// - 429 Too Many Requests - `TooManyRequests`, with `Retry-After`
/// - 500 Internal Server Error - Everything else
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let trace = ErrorTrace(format!("{:?}", self));
        let retry_after = match &self {
            Self::TooManyRequests {
                retry_after_secs, ..
            } => Some(*retry_after_secs),
            _ => None,
        };

        let (message, errors) = match self {
            Self::Validation { message, errors } => (message, Some(errors)),
            err if status.is_server_error() => {
                tracing::error!("{}", err);
                ("Internal server error".to_string(), None)
            }
            err => (err.to_string(), None),
        };

        let body = ErrorDto {
            status: "error".to_string(),
            status_code: status.as_u16(),
            message,
            errors,
            stack: None,
        };

        let mut response = (status, Json(body.clone())).into_response();
        if let Some(secs) = retry_after {
            response
                .headers_mut()
                .insert(header::RETRY_AFTER, HeaderValue::from(secs));
        }
        response.extensions_mut().insert(body);
        response.extensions_mut().insert(trace);
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_variants_to_status_codes() {
        assert_eq!(
            AppError::validation("bad", vec![]).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Unauthorized("no".into()).status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::Forbidden("no".into()).status_code(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            AppError::Conflict("taken".into()).status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            AppError::PayloadTooLarge.status_code(),
            StatusCode::PAYLOAD_TOO_LARGE
        );
        assert_eq!(
            AppError::DatabaseNotReady.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn server_errors_hide_their_message() {
        let response = AppError::InternalError("secret detail".into()).into_response();
        let body = response.extensions().get::<ErrorDto>().unwrap();

        assert_eq!(body.status_code, 500);
        assert_eq!(body.message, "Internal server error");
        assert!(response
            .extensions()
            .get::<ErrorTrace>()
            .unwrap()
            .0
            .contains("secret detail"));
    }

    #[test]
    fn rate_limit_errors_carry_retry_after() {
        let response = AppError::TooManyRequests {
            message: "slow down".into(),
            retry_after_secs: 42,
        }
        .into_response();

        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(response.headers()[header::RETRY_AFTER], "42");
    }

    #[test]
    fn non_unique_db_errors_stay_internal() {
        let err = AppError::conflict_on_unique(DbErr::Custom("boom".into()), "taken");

        assert!(matches!(err, AppError::DbErr(_)));
    }
}
