use sea_orm::DatabaseConnection;

use crate::server::{
    data::{content::ContentRepository, follows::FollowRepository, user::UserRepository},
    error::AppError,
    model::{follow::FollowEntry, profile::Profile, user::User},
    service::{auth::AuthService, content::load_details, user::UserService},
    task::TaskQueue,
};

pub struct ProfileService<'a> {
    db: &'a DatabaseConnection,
    tasks: &'a TaskQueue,
}

impl<'a> ProfileService<'a> {
    pub fn new(db: &'a DatabaseConnection, tasks: &'a TaskQueue) -> Self {
        Self { db, tasks }
    }

    /// Checks credentials like login does, then gathers the user's profile.
    pub async fn profile(&self, username: &str, password: &str) -> Result<Profile, AppError> {
        let user = AuthService::new(self.db)
            .authenticate(username, password)
            .await?;

        let posts = ContentRepository::new(self.db)
            .get_all_by_user(user.user_id)
            .await?;
        let content = load_details(self.db, posts).await?;
        let summary = UserService::new(self.db, self.tasks).summarize(user).await?;

        Ok(Profile { summary, content })
    }

    /// Accounts following `username`, oldest follow first.
    ///
    /// # Returns
    /// - `Err(AppError::NotFound)` - Unknown user, or nobody follows them
    pub async fn followers(&self, username: &str) -> Result<Vec<FollowEntry>, AppError> {
        let user = self.find_user(username).await?;

        let followers = FollowRepository::new(self.db)
            .get_followers(user.user_id)
            .await?;
        if followers.is_empty() {
            return Err(AppError::NotFound("No followers found".to_string()));
        }

        Ok(followers)
    }

    /// Accounts `username` follows, oldest follow first.
    pub async fn following(&self, username: &str) -> Result<Vec<FollowEntry>, AppError> {
        let user = self.find_user(username).await?;

        let following = FollowRepository::new(self.db)
            .get_following(user.user_id)
            .await?;
        if following.is_empty() {
            return Err(AppError::NotFound("Not following anyone".to_string()));
        }

        Ok(following)
    }

    async fn find_user(&self, username: &str) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .find_active_by_username(username)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }
}
