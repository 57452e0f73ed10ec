//! SeaORM entity models for the TrendConnect schema.

pub mod prelude;

pub mod comment;
pub mod content;
pub mod follows;
pub mod likes;
pub mod registration;
