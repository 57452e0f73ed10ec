//! TrendConnect Test Utils
//!
//! Shared testing utilities for the TrendConnect backend. Provides a builder for
//! test contexts backed by in-memory SQLite databases plus factories for seeding
//! users, posts, likes, comments and follows.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::Registration;
//!
//! #[tokio::test]
//! async fn test_user_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(Registration)
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
