//! User service for account listing, lookup, update and deletion.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        comment::CommentRepository, content::ContentRepository, follows::FollowRepository,
        likes::LikesRepository, user::UserRepository,
    },
    error::AppError,
    model::user::{AccountChanges, PaginatedUsers, UpdateUserParam, User, UserSummary},
    task::{BackgroundTask, TaskQueue},
    util::{
        pagination::{Page, USERS_PER_PAGE},
        password::hash_password,
        validation::{validate_age, validate_password, validate_phone},
    },
};

pub struct UserService<'a> {
    pub db: &'a DatabaseConnection,
    pub tasks: &'a TaskQueue,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection, tasks: &'a TaskQueue) -> Self {
        Self { db, tasks }
    }

    /// Lists active users with follow counts, three per page.
    ///
    /// # Arguments
    /// - `page` - One-based page number as received from the client
    ///
    /// # Returns
    /// - `Ok(PaginatedUsers)` - Users on the requested page
    /// - `Err(AppError::BadRequest)` - Page below 1 or past the last page
    pub async fn get_users(&self, page: i64) -> Result<PaginatedUsers, AppError> {
        let page = Page::new(page, USERS_PER_PAGE)?;
        let user_repo = UserRepository::new(self.db);

        let (users, total) = user_repo
            .get_active_paginated(page.index(), page.per_page)
            .await?;
        let total_pages = page.check_in_range(total)?;

        let mut summaries = Vec::with_capacity(users.len());
        for user in users {
            summaries.push(self.summarize(user).await?);
        }

        Ok(PaginatedUsers {
            users: summaries,
            total,
            total_pages,
            page: page.number,
        })
    }

    pub async fn get_user(&self, user_id: i32) -> Result<UserSummary, AppError> {
        let user = UserRepository::new(self.db)
            .find_active_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        self.summarize(user).await
    }

    /// Applies a partial update to the caller's own account.
    ///
    /// Provided fields go through the same rules as registration. A username change
    /// is copied onto the user's posts in the same transaction. The "account updated"
    /// email goes to the previous address when the email was changed.
    ///
    /// # Returns
    /// - `Ok(User)` - The updated account
    /// - `Err(AppError::NotFound)` - No active account with that id
    /// - `Err(AppError::Forbidden)` - Caller is not the account owner
    /// - `Err(AppError::NotAcceptable)` - Age, password or phone rule failed
    /// - `Err(AppError::Conflict)` - Username or email already in use
    pub async fn update(
        &self,
        actor: &User,
        user_id: i32,
        changes: AccountChanges,
    ) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(target) = user_repo.find_active_by_id(user_id).await? else {
            return Err(AppError::NotFound("User not found".to_string()));
        };

        if actor.user_id != target.user_id {
            return Err(AppError::Forbidden(
                "Not authorized to update this user".to_string(),
            ));
        }

        if let Some(dob) = changes.dob {
            validate_age(dob, chrono::Utc::now().date_naive())?;
        }
        if let Some(password) = &changes.password {
            validate_password(password)?;
        }
        if let Some(phone_number) = &changes.phone_number {
            validate_phone(phone_number)?;
        }

        if let Some(username) = &changes.username {
            if user_repo.username_taken(username, Some(user_id)).await? {
                return Err(AppError::Conflict(format!(
                    "Username {} is already taken",
                    username
                )));
            }
        }
        if let Some(email) = &changes.email {
            if user_repo.email_taken(email, Some(user_id)).await? {
                return Err(AppError::Conflict(format!(
                    "User with email {} is already registered",
                    email
                )));
            }
        }

        let password_hash = changes.password.as_deref().map(hash_password).transpose()?;
        let email_changed = changes.email.is_some();

        let txn = self.db.begin().await?;

        let updated = UserRepository::new(&txn)
            .update(
                user_id,
                UpdateUserParam {
                    username: changes.username,
                    email: changes.email,
                    password_hash,
                    phone_number: changes.phone_number,
                    country: changes.country,
                    dob: changes.dob,
                },
            )
            .await
            .map_err(|e| e.or_conflict("Username or email is already in use"))?;

        if updated.username != target.username {
            ContentRepository::new(&txn)
                .rename_owner(user_id, &updated.username)
                .await?;
        }

        txn.commit().await?;

        let notify = if email_changed {
            target.email
        } else {
            updated.email.clone()
        };
        self.tasks.push(BackgroundTask::AccountUpdatedEmail {
            email: notify,
            username: updated.username.clone(),
        });

        tracing::info!(user_id, "Account updated");

        Ok(updated)
    }

    /// Deletes the caller's account together with everything that references it.
    ///
    /// Follows, likes and comments made by the user, their posts, and the likes and
    /// comments on those posts are removed in one transaction. Stored files and the
    /// goodbye email are handled in the background.
    pub async fn delete(&self, actor: &User, user_id: i32) -> Result<(), AppError> {
        let Some(target) = UserRepository::new(self.db)
            .find_active_by_id(user_id)
            .await?
        else {
            return Err(AppError::NotFound("User not found".to_string()));
        };

        if actor.user_id != target.user_id {
            return Err(AppError::Forbidden(
                "Not authorized to delete this user".to_string(),
            ));
        }

        let txn = self.db.begin().await?;

        let content_repo = ContentRepository::new(&txn);
        let posts = content_repo.get_all_by_user(user_id).await?;
        let post_ids: Vec<i32> = posts.iter().map(|p| p.c_id).collect();

        let likes_repo = LikesRepository::new(&txn);
        likes_repo.delete_for_posts(post_ids.clone()).await?;
        likes_repo.delete_by_user(user_id).await?;

        let comment_repo = CommentRepository::new(&txn);
        comment_repo.delete_for_posts(post_ids).await?;
        comment_repo.delete_by_user(user_id).await?;

        FollowRepository::new(&txn).delete_for_user(user_id).await?;
        content_repo.delete_by_user(user_id).await?;
        UserRepository::new(&txn).delete(user_id).await?;

        txn.commit().await?;

        self.tasks.push(BackgroundTask::RemoveFiles {
            paths: posts.into_iter().map(|p| p.file.into()).collect(),
        });
        self.tasks.push(BackgroundTask::RemoveUserFolder { user_id });
        self.tasks.push(BackgroundTask::AccountDeletedEmail {
            email: target.email,
            username: target.username,
        });

        tracing::info!(user_id, "Account deleted");

        Ok(())
    }

    /// Attaches follower and following counts to a user.
    pub async fn summarize(&self, user: User) -> Result<UserSummary, AppError> {
        let follow_repo = FollowRepository::new(self.db);

        Ok(UserSummary {
            followers: follow_repo.count_followers(user.user_id).await?,
            following: follow_repo.count_following(user.user_id).await?,
            username: user.username,
        })
    }
}
