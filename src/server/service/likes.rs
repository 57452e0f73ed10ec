use sea_orm::DatabaseConnection;

use crate::server::{
    data::{content::ContentRepository, likes::LikesRepository, user::UserRepository},
    error::AppError,
    model::user::User,
    task::{BackgroundTask, TaskQueue},
};

/// Result of a like request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LikeOutcome {
    Liked,
    Unliked,
}

impl LikeOutcome {
    pub fn message(self) -> &'static str {
        match self {
            Self::Liked => "Post liked successfully",
            Self::Unliked => "Post unliked successfully",
        }
    }
}

pub struct LikesService<'a> {
    db: &'a DatabaseConnection,
    tasks: &'a TaskQueue,
}

impl<'a> LikesService<'a> {
    pub fn new(db: &'a DatabaseConnection, tasks: &'a TaskQueue) -> Self {
        Self { db, tasks }
    }

    /// Likes (`dir = 1`) or unlikes (`dir = 0`) a post.
    ///
    /// The post owner is emailed about new likes unless they liked their own post.
    ///
    /// # Returns
    /// - `Ok(LikeOutcome)` - What changed
    /// - `Err(AppError::BadRequest)` - `dir` is neither 0 nor 1
    /// - `Err(AppError::NotFound)` - Post missing, or unliking a post that was never liked
    /// - `Err(AppError::Conflict)` - Post already liked
    pub async fn vote(&self, actor: &User, post_id: i32, dir: i32) -> Result<LikeOutcome, AppError> {
        if dir != 0 && dir != 1 {
            return Err(AppError::BadRequest(
                "dir must be 1 (like) or 0 (unlike)".to_string(),
            ));
        }

        let Some(post) = ContentRepository::new(self.db).find_by_id(post_id).await? else {
            return Err(AppError::NotFound("No post found".to_string()));
        };

        let likes_repo = LikesRepository::new(self.db);

        if dir == 0 {
            if !likes_repo.delete(actor.user_id, post_id).await? {
                return Err(AppError::NotFound("No like found".to_string()));
            }
            return Ok(LikeOutcome::Unliked);
        }

        if likes_repo.exists(actor.user_id, post_id).await? {
            return Err(AppError::Conflict("Post already liked".to_string()));
        }
        likes_repo
            .create(actor.user_id, post_id)
            .await
            .map_err(|e| AppError::from(e).or_conflict("Post already liked"))?;

        if post.user_id != actor.user_id {
            if let Some(owner) = UserRepository::new(self.db).find_by_id(post.user_id).await? {
                self.tasks.push(BackgroundTask::LikeEmail {
                    email: owner.email,
                    liker: actor.username.clone(),
                    title: post.title,
                    caption: post.caption,
                });
            }
        }

        Ok(LikeOutcome::Liked)
    }
}
