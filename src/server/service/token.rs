//! JWT issuance and verification.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::server::{
    error::{auth::AuthError, AppError},
    model::user::User,
};

/// Access token claims.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// Username at issue time.
    pub sub: String,
    pub user_id: i32,
    pub iat: i64,
    pub exp: i64,
}

#[derive(Clone)]
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    algorithm: Algorithm,
    lifetime: Duration,
}

impl TokenService {
    pub fn new(secret: &str, algorithm: Algorithm, expiry_minutes: i64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            algorithm,
            lifetime: Duration::minutes(expiry_minutes),
        }
    }

    /// Token lifetime in seconds, reported to clients as `expires_in`.
    pub fn expires_in(&self) -> i64 {
        self.lifetime.num_seconds()
    }

    pub fn issue(&self, user: &User) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = Claims {
            sub: user.username.clone(),
            user_id: user.user_id,
            iat: now.timestamp(),
            exp: (now + self.lifetime).timestamp(),
        };

        Ok(encode(&Header::new(self.algorithm), &claims, &self.encoding)?)
    }

    /// Verifies signature and expiry.
    ///
    /// # Returns
    /// - `Ok(Claims)` - Token is valid
    /// - `Err(AuthError::InvalidCredentials)` - Malformed, tampered or expired token
    pub fn decode(&self, token: &str) -> Result<Claims, AuthError> {
        decode::<Claims>(token, &self.decoding, &Validation::new(self.algorithm))
            .map(|data| data.claims)
            .map_err(|e| {
                tracing::debug!("Rejected bearer token: {}", e);
                AuthError::InvalidCredentials
            })
    }
}
