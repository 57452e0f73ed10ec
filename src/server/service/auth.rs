//! Credential checks shared by login, profile and the bearer-token guard.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::User,
    service::token::Claims,
    util::password::verify_password,
};

pub struct AuthService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Checks a username and password pair.
    ///
    /// # Returns
    /// - `Ok(User)` - Credentials belong to an active account
    /// - `Err(AuthError::UnknownUsername)` - No active account with that username
    /// - `Err(AuthError::IncorrectPassword)` - Password does not match
    pub async fn authenticate(&self, username: &str, password: &str) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.find_active_by_username(username).await? else {
            return Err(AuthError::UnknownUsername(username.to_string()).into());
        };

        if !verify_password(user.user_id, password, &user.password_hash)? {
            tracing::debug!(user_id = user.user_id, "Rejected login with wrong password");
            return Err(AuthError::IncorrectPassword.into());
        }

        Ok(user)
    }

    /// Loads the account a verified token was issued to.
    ///
    /// Lookup is by id so a later username change keeps existing tokens valid.
    pub async fn user_for_claims(&self, claims: &Claims) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .find_active_by_id(claims.user_id)
            .await?
            .ok_or_else(|| AuthError::UserNotFound.into())
    }
}
