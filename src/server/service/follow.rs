use sea_orm::DatabaseConnection;

use crate::server::{
    data::{follows::FollowRepository, user::UserRepository},
    error::AppError,
    model::user::User,
};

pub struct FollowService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FollowService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// # Returns
    /// - `Err(AppError::BadRequest)` - Caller tried to follow themselves
    /// - `Err(AppError::NotFound)` - Target is missing or not an active account
    /// - `Err(AppError::Conflict)` - Already following
    pub async fn follow(&self, actor: &User, user_id: i32) -> Result<(), AppError> {
        if actor.user_id == user_id {
            return Err(AppError::BadRequest("You cannot follow yourself".to_string()));
        }

        if UserRepository::new(self.db)
            .find_active_by_id(user_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("User to follow not found".to_string()));
        }

        let follow_repo = FollowRepository::new(self.db);
        if follow_repo.exists(actor.user_id, user_id).await? {
            return Err(AppError::Conflict(
                "You are already following this user".to_string(),
            ));
        }

        follow_repo
            .create(actor.user_id, user_id)
            .await
            .map_err(|e| AppError::from(e).or_conflict("You are already following this user"))?;

        Ok(())
    }

    pub async fn unfollow(&self, actor: &User, user_id: i32) -> Result<(), AppError> {
        if !FollowRepository::new(self.db)
            .delete(actor.user_id, user_id)
            .await?
        {
            return Err(AppError::BadRequest(
                "You are not following this user".to_string(),
            ));
        }

        Ok(())
    }
}
