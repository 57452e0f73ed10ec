use axum::http::{header, HeaderMap};
use sea_orm::DatabaseConnection;

use crate::server::{
    error::{auth::AuthError, AppError},
    model::user::User,
    service::{auth::AuthService, token::TokenService},
};

/// Resolves the caller from an `Authorization: Bearer <token>` header.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenService, headers: &'a HeaderMap) -> Self {
        Self {
            db,
            tokens,
            headers,
        }
    }

    /// Requires a valid token for an active account.
    ///
    /// # Returns
    /// - `Ok(User)` - The account the token was issued to
    /// - `Err(AuthError::InvalidCredentials)` - Header missing, malformed, or token rejected
    /// - `Err(AuthError::UserNotFound)` - Token is valid but the account is gone
    pub async fn require(&self) -> Result<User, AppError> {
        let token = bearer_token(self.headers).ok_or(AuthError::InvalidCredentials)?;
        let claims = self.tokens.decode(token)?;

        AuthService::new(self.db).user_for_claims(&claims).await
    }
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;

    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }

    let token = token.trim();
    (!token.is_empty()).then_some(token)
}
