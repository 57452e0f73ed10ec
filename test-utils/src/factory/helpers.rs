//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates an author with one post plus a second active user.
///
/// Useful for like and comment tests that need someone other than the author
/// to interact with the post.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((author, other, post))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_post_with_audience(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::registration::Model,
        entity::registration::Model,
        entity::content::Model,
    ),
    DbErr,
> {
    let author = crate::factory::registration::create_user(db).await?;
    let other = crate::factory::registration::create_user(db).await?;
    let post = crate::factory::content::create_content(db, &author).await?;

    Ok((author, other, post))
}
