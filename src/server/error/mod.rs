//! Error types and HTTP response handling.
//!
//! `AppError` is the top-level error returned by controllers, services and background
//! tasks. It wraps domain-specific errors and implements `IntoResponse`, mapping each
//! variant to a status code and an `{"error": "..."}` body.

pub mod auth;
pub mod config;
pub mod internal;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::SqlErr;
use thiserror::Error;
use validator::ValidationErrors;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError, internal::InternalError},
};

/// Top-level application error type.
///
/// Most variants use `#[from]` for automatic conversion. Domain errors like
/// `AuthError` handle their own response mapping, the message-carrying variants map
/// to fixed client error codes, and everything else becomes a generic 500.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication error.
    ///
    /// Delegates to `AuthError::into_response()` for status code mapping.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Unexpected internal state. Logged, then returned as a generic 500.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Filesystem error while storing or removing uploaded content.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Request body failed field validation. Results in 400 Bad Request.
    #[error(transparent)]
    ValidationErr(#[from] ValidationErrors),

    /// Malformed multipart upload. Results in 400 Bad Request.
    #[error(transparent)]
    MultipartErr(#[from] axum::extract::multipart::MultipartError),

    /// Email template rendering error.
    #[error(transparent)]
    TemplateErr(#[from] askama::Error),

    /// Email message could not be built.
    #[error(transparent)]
    EmailErr(#[from] lettre::error::Error),

    /// Sender or recipient is not a valid mailbox.
    #[error(transparent)]
    AddressErr(#[from] lettre::address::AddressError),

    /// SMTP delivery error.
    #[error(transparent)]
    SmtpErr(#[from] lettre::transport::smtp::Error),

    /// HTTP client request error from reqwest, used by the SMS client.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// JWT encoding error. Decoding failures surface as `AuthError` instead.
    #[error(transparent)]
    JwtErr(#[from] jsonwebtoken::errors::Error),

    /// Cron scheduler error.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// Results in 404 Not Found with the provided message.
    #[error("{0}")]
    NotFound(String),

    /// Results in 400 Bad Request with the provided message.
    #[error("{0}")]
    BadRequest(String),

    /// Results in 409 Conflict with the provided message.
    #[error("{0}")]
    Conflict(String),

    /// Results in 403 Forbidden with the provided message.
    #[error("{0}")]
    Forbidden(String),

    /// Input was understood but rejected by a business rule (age, password
    /// strength, phone format). Results in 406 Not Acceptable.
    #[error("{0}")]
    NotAcceptable(String),

    /// Results in 429 Too Many Requests with the provided message.
    #[error("{0}")]
    TooManyRequests(String),

    /// Internal server error with custom message.
    ///
    /// The message is logged but a generic message is returned to the client.
    #[error("{0}")]
    InternalError(String),
}

impl AppError {
    /// Maps a unique-index violation to `Conflict` with `message`.
    ///
    /// Covers the window between a duplicate check and the insert that follows it,
    /// where a concurrent request may have inserted the same row. Any other error
    /// is returned unchanged.
    pub fn or_conflict(self, message: impl Into<String>) -> Self {
        match &self {
            Self::DbErr(err)
                if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) =>
            {
                Self::Conflict(message.into())
            }
            _ => self,
        }
    }

    fn client_error(status: StatusCode, msg: String) -> Response {
        (status, Json(ErrorDto { error: msg })).into_response()
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest`, `ValidationErr` and `MultipartErr`
/// - 403 Forbidden - For `Forbidden`
/// - 404 Not Found - For `NotFound`
/// - 406 Not Acceptable - For `NotAcceptable`
/// - 409 Conflict - For `Conflict`
/// - 429 Too Many Requests - For `TooManyRequests`
/// - Variable - For `AuthErr`, delegated to `AuthError::into_response()`
/// - 500 Internal Server Error - For everything else
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::NotFound(msg) => Self::client_error(StatusCode::NOT_FOUND, msg),
            Self::BadRequest(msg) => Self::client_error(StatusCode::BAD_REQUEST, msg),
            Self::Conflict(msg) => Self::client_error(StatusCode::CONFLICT, msg),
            Self::Forbidden(msg) => Self::client_error(StatusCode::FORBIDDEN, msg),
            Self::NotAcceptable(msg) => Self::client_error(StatusCode::NOT_ACCEPTABLE, msg),
            Self::TooManyRequests(msg) => Self::client_error(StatusCode::TOO_MANY_REQUESTS, msg),
            Self::ValidationErr(errors) => {
                Self::client_error(StatusCode::BAD_REQUEST, validation_message(&errors))
            }
            Self::MultipartErr(err) => Self::client_error(StatusCode::BAD_REQUEST, err.body_text()),
            Self::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        error: "Internal server error".to_string(),
                    }),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Picks the first field message out of a set of validation errors.
fn validation_message(errors: &ValidationErrors) -> String {
    errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| match &e.message {
                Some(message) => message.to_string(),
                None => format!("Invalid value for {}", field),
            })
        })
        .next()
        .unwrap_or_else(|| "Invalid request".to_string())
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the
/// client to avoid leaking implementation details.
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
