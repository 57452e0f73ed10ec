//! Service layer for business logic and orchestration.
//!
//! Services sit between the controllers and the repositories. They enforce the
//! business rules, open transactions for multi-table changes and queue background
//! work, returning domain models rather than DTOs or entity rows.

pub mod auth;
pub mod comment;
pub mod content;
pub mod follow;
pub mod likes;
pub mod profile;
pub mod registration;
pub mod search;
pub mod storage;
pub mod token;
pub mod user;

#[cfg(test)]
mod test;
