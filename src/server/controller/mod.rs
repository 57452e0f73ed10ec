//! HTTP handlers.
//!
//! Handlers authenticate the caller, convert DTOs into domain parameters, call the
//! matching service and turn the result back into a DTO.

pub mod auth;
pub mod comment;
pub mod content;
pub mod follow;
pub mod health;
pub mod likes;
pub mod profile;
pub mod search;
pub mod user;

#[cfg(test)]
mod test;
