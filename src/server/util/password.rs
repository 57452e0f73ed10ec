//! Argon2id password hashing.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::server::error::{internal::InternalError, AppError};

/// Hashes a password into a PHC string with a random salt.
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);

    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| InternalError::PasswordHash(e.to_string()))?;

    Ok(hash.to_string())
}

/// Checks a password against a stored PHC hash.
///
/// # Arguments
/// - `user_id` - Owner of the hash, used only for error reporting
/// - `password` - Plaintext password submitted by the client
/// - `hash` - Stored PHC hash
///
/// # Returns
/// - `Ok(true)` / `Ok(false)` - Whether the password matches
/// - `Err(AppError::InternalErr)` - The stored hash could not be parsed
pub fn verify_password(user_id: i32, password: &str, hash: &str) -> Result<bool, AppError> {
    let parsed = PasswordHash::new(hash).map_err(|e| InternalError::MalformedPasswordHash {
        user_id,
        reason: e.to_string(),
    })?;

    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(InternalError::MalformedPasswordHash {
            user_id,
            reason: e.to_string(),
        }
        .into()),
    }
}
