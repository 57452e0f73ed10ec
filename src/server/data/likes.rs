//! Likes data repository.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

pub struct LikesRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> LikesRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn exists(&self, user_id: i32, post_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Likes::find()
            .filter(entity::likes::Column::UserId.eq(user_id))
            .filter(entity::likes::Column::PostId.eq(post_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn create(&self, user_id: i32, post_id: i32) -> Result<(), DbErr> {
        entity::likes::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            post_id: ActiveValue::Set(post_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(())
    }

    /// Removes a user's like from a post.
    ///
    /// # Returns
    /// - `Ok(true)` - A like was removed
    /// - `Ok(false)` - The user had not liked the post
    pub async fn delete(&self, user_id: i32, post_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Likes::delete_many()
            .filter(entity::likes::Column::UserId.eq(user_id))
            .filter(entity::likes::Column::PostId.eq(post_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn count_for_post(&self, post_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Likes::find()
            .filter(entity::likes::Column::PostId.eq(post_id))
            .count(self.db)
            .await
    }

    /// Deletes every like on any of the given posts.
    pub async fn delete_for_posts(&self, post_ids: Vec<i32>) -> Result<u64, DbErr> {
        if post_ids.is_empty() {
            return Ok(0);
        }

        let result = entity::prelude::Likes::delete_many()
            .filter(entity::likes::Column::PostId.is_in(post_ids))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes every like given by a user.
    pub async fn delete_by_user(&self, user_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Likes::delete_many()
            .filter(entity::likes::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
