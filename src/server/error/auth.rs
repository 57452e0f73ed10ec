use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Bearer token missing, malformed, expired or signed with the wrong key.
    ///
    /// Results in 401 Unauthorized with a `WWW-Authenticate: Bearer` challenge.
    #[error("Could not validate credentials")]
    InvalidCredentials,

    /// Token is valid but the account it names no longer exists or is inactive.
    #[error("User not found")]
    UserNotFound,

    /// Login attempted with a username that has no active account.
    #[error("No user found with username {0}. Go and register yourself first")]
    UnknownUsername(String),

    /// Login attempted with the wrong password.
    #[error("Incorrect password")]
    IncorrectPassword,

    /// Submitted OTP does not match the one issued.
    #[error("Invalid OTP")]
    InvalidOtp,
}

/// Converts authentication errors into HTTP responses.
///
/// - `InvalidCredentials` → 401 with `WWW-Authenticate: Bearer`
/// - `IncorrectPassword` / `InvalidOtp` → 401
/// - `UserNotFound` / `UnknownUsername` → 404
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let body = Json(ErrorDto {
            error: self.to_string(),
        });

        match self {
            Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                [(header::WWW_AUTHENTICATE, "Bearer")],
                body,
            )
                .into_response(),
            Self::IncorrectPassword | Self::InvalidOtp => {
                (StatusCode::UNAUTHORIZED, body).into_response()
            }
            Self::UserNotFound | Self::UnknownUsername(_) => {
                (StatusCode::NOT_FOUND, body).into_response()
            }
        }
    }
}
