//! Likes factory.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Records a like by `user_id` on `post_id`.
///
/// # Returns
/// - `Ok(entity::likes::Model)` - Created like row
/// - `Err(DbErr)` - Database error during insert
pub async fn create_like(
    db: &DatabaseConnection,
    user_id: i32,
    post_id: i32,
) -> Result<entity::likes::Model, DbErr> {
    entity::likes::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        post_id: ActiveValue::Set(post_id),
        ..Default::default()
    }
    .insert(db)
    .await
}
