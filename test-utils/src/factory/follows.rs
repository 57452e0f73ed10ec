//! Follows factory.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Records `follower_id` following `following_id` as of now.
pub async fn create_follow(
    db: &DatabaseConnection,
    follower_id: i32,
    following_id: i32,
) -> Result<entity::follows::Model, DbErr> {
    create_follow_at(db, follower_id, following_id, Utc::now()).await
}

/// Records a follow with an explicit timestamp.
pub async fn create_follow_at(
    db: &DatabaseConnection,
    follower_id: i32,
    following_id: i32,
    followed_at: DateTime<Utc>,
) -> Result<entity::follows::Model, DbErr> {
    entity::follows::ActiveModel {
        follower_id: ActiveValue::Set(follower_id),
        following_id: ActiveValue::Set(following_id),
        followed_at: ActiveValue::Set(followed_at),
        ..Default::default()
    }
    .insert(db)
    .await
}
