use sea_orm::DatabaseConnection;

use crate::server::{
    data::{comment::CommentRepository, content::ContentRepository, user::UserRepository},
    error::AppError,
    model::{comment::Comment, user::User},
    task::{BackgroundTask, TaskQueue},
};

pub struct CommentService<'a> {
    db: &'a DatabaseConnection,
    tasks: &'a TaskQueue,
}

impl<'a> CommentService<'a> {
    pub fn new(db: &'a DatabaseConnection, tasks: &'a TaskQueue) -> Self {
        Self { db, tasks }
    }

    /// Adds a comment and emails the post owner, unless the owner wrote it.
    ///
    /// # Returns
    /// - `Ok(Comment)` - The stored comment
    /// - `Err(AppError::NotFound)` - Post does not exist
    /// - `Err(AppError::BadRequest)` - Comment is blank
    pub async fn add(&self, actor: &User, post_id: i32, text: String) -> Result<Comment, AppError> {
        let Some(post) = ContentRepository::new(self.db).find_by_id(post_id).await? else {
            return Err(AppError::NotFound("Post not found".to_string()));
        };

        if text.trim().is_empty() {
            return Err(AppError::BadRequest("Comment must not be empty".to_string()));
        }

        let comment = CommentRepository::new(self.db)
            .create(actor.user_id, post_id, text)
            .await?;

        if post.user_id != actor.user_id {
            if let Some(owner) = UserRepository::new(self.db).find_by_id(post.user_id).await? {
                self.tasks.push(BackgroundTask::CommentEmail {
                    email: owner.email,
                    commenter: actor.username.clone(),
                    title: post.title,
                    comment: comment.user_comment.clone(),
                });
            }
        }

        Ok(comment)
    }
}
