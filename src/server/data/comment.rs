//! Comment data repository.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

use crate::server::model::comment::Comment;

pub struct CommentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CommentRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        user_id: i32,
        post_id: i32,
        user_comment: String,
    ) -> Result<Comment, DbErr> {
        let entity = entity::comment::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            post_id: ActiveValue::Set(post_id),
            user_comment: ActiveValue::Set(user_comment),
            created_at: ActiveValue::Set(chrono::Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Comment::from_entity(entity))
    }

    /// Comment texts on a post in the order they were written.
    pub async fn texts_for_post(&self, post_id: i32) -> Result<Vec<String>, DbErr> {
        entity::prelude::Comment::find()
            .select_only()
            .column(entity::comment::Column::UserComment)
            .filter(entity::comment::Column::PostId.eq(post_id))
            .order_by_asc(entity::comment::Column::CommentId)
            .into_tuple()
            .all(self.db)
            .await
    }

    pub async fn delete_for_posts(&self, post_ids: Vec<i32>) -> Result<u64, DbErr> {
        if post_ids.is_empty() {
            return Ok(0);
        }

        let result = entity::prelude::Comment::delete_many()
            .filter(entity::comment::Column::PostId.is_in(post_ids))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn delete_by_user(&self, user_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Comment::delete_many()
            .filter(entity::comment::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
