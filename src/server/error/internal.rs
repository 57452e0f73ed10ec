use thiserror::Error;

/// Internal issues indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Argon2 failed to produce a hash.
    #[error("Failed to hash password: {0}")]
    PasswordHash(String),

    /// A stored password hash is not valid PHC format.
    #[error("Stored password hash for user {user_id} is malformed: {reason}")]
    MalformedPasswordHash {
        /// Owner of the bad hash
        user_id: i32,
        /// Parser message
        reason: String,
    },

    /// An active account row has no username.
    #[error("Active registration {0} has no username")]
    MissingUsername(i32),
}
