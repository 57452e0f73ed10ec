//! Application state shared across all request handlers.
//!
//! Built once at startup and cloned into every handler through Axum's state
//! extraction. Every field is cheap to clone: the database handle is a pool, the
//! token service holds reference-counted keys, and the task queue is a channel sender.

use sea_orm::DatabaseConnection;

use crate::server::{
    service::{storage::ContentStorage, token::TokenService},
    task::TaskQueue,
};

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: DatabaseConnection,

    /// Issues and verifies bearer tokens.
    pub tokens: TokenService,

    /// Sender side of the background task queue.
    pub tasks: TaskQueue,

    /// Filesystem location of uploaded content.
    pub storage: ContentStorage,

    /// Lifetime of an issued OTP.
    pub otp_expiration_minutes: i64,

    /// OTP requests allowed per expiry window.
    pub max_retry_attempts: i32,
}
