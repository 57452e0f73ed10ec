//! Comment factory for creating test comments.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test comments on a post.
pub struct CommentFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    post_id: i32,
    user_comment: String,
    created_at: DateTime<Utc>,
}

impl<'a> CommentFactory<'a> {
    /// Creates a new factory with text `"Comment {id}"`.
    pub fn new(db: &'a DatabaseConnection, user_id: i32, post_id: i32) -> Self {
        Self {
            db,
            user_id,
            post_id,
            user_comment: format!("Comment {}", next_id()),
            created_at: Utc::now(),
        }
    }

    /// Sets the comment text.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.user_comment = text.into();
        self
    }

    /// Sets the creation timestamp.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the comment.
    pub async fn build(self) -> Result<entity::comment::Model, DbErr> {
        entity::comment::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            post_id: ActiveValue::Set(self.post_id),
            user_comment: ActiveValue::Set(self.user_comment),
            created_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a comment with default text.
pub async fn create_comment(
    db: &DatabaseConnection,
    user_id: i32,
    post_id: i32,
) -> Result<entity::comment::Model, DbErr> {
    CommentFactory::new(db, user_id, post_id).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use crate::factory::helpers::create_post_with_audience;

    #[tokio::test]
    async fn creates_comment_with_custom_text() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_all_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let (_, commenter, post) = create_post_with_audience(db).await?;
        let comment = CommentFactory::new(db, commenter.user_id, post.c_id)
            .text("Nice shot")
            .build()
            .await?;

        assert_eq!(comment.user_comment, "Nice shot");
        assert_eq!(comment.post_id, post.c_id);

        Ok(())
    }
}
