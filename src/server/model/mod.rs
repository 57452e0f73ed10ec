//! Domain models and operation-specific parameter types.
//!
//! Repositories convert entity rows into these types at the data boundary and
//! controllers convert them into DTOs at the HTTP boundary.

pub mod comment;
pub mod content;
pub mod follow;
pub mod profile;
pub mod search;
pub mod user;
