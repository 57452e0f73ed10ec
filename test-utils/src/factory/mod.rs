//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with a `Factory` builder for
//! customization and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let user = factory::create_user(&db).await?;
//!     let post = factory::create_content(&db, &user).await?;
//!
//!     let (author, other, post) = factory::helpers::create_post_with_audience(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let user = factory::registration::RegistrationFactory::new(&db)
//!     .username("alice")
//!     .password("Secret#123")
//!     .build()
//!     .await?;
//! ```

pub mod comment;
pub mod content;
pub mod follows;
pub mod helpers;
pub mod likes;
pub mod registration;

pub use comment::create_comment;
pub use content::create_content;
pub use follows::create_follow;
pub use likes::create_like;
pub use registration::{create_pending_registration, create_user};
