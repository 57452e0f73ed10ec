//! Request and response DTOs shared by the HTTP layer.

pub mod api;
pub mod auth;
pub mod comment;
pub mod content;
pub mod follow;
pub mod likes;
pub mod profile;
pub mod registration;
pub mod search;
pub mod user;
