//! Content service: posting, listing and deleting posts.

use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, TransactionTrait};

use crate::server::{
    data::{
        comment::CommentRepository, content::ContentRepository, follows::FollowRepository,
        likes::LikesRepository, user::UserRepository,
    },
    error::AppError,
    model::{
        content::{Content, ContentDetail, CreateContentParam, NewContent, PaginatedContent},
        user::User,
    },
    service::storage::ContentStorage,
    task::{BackgroundTask, TaskQueue},
    util::pagination::{Page, CONTENT_PER_PAGE},
};

pub struct ContentService<'a> {
    db: &'a DatabaseConnection,
    tasks: &'a TaskQueue,
    storage: &'a ContentStorage,
}

impl<'a> ContentService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        tasks: &'a TaskQueue,
        storage: &'a ContentStorage,
    ) -> Self {
        Self { db, tasks, storage }
    }

    /// Stores the upload, creates the post and tells the author's followers.
    ///
    /// If the insert fails the stored file is removed again.
    ///
    /// # Returns
    /// - `Ok(Content)` - The created post
    /// - `Err(AppError::IoErr)` - Upload could not be written
    /// - `Err(AppError::DbErr)` - Insert failed
    pub async fn create(&self, author: &User, new: NewContent) -> Result<Content, AppError> {
        let file = self.storage.store(author.user_id, &new.upload).await?;

        let created = ContentRepository::new(self.db)
            .create(CreateContentParam {
                user_id: author.user_id,
                username: author.username.clone(),
                title: new.title,
                caption: new.caption,
                file: file.clone(),
            })
            .await;

        let content = match created {
            Ok(content) => content,
            Err(e) => {
                if let Err(cleanup) = self.storage.remove_file(&file).await {
                    tracing::warn!("Failed to remove orphaned upload {}: {}", file, cleanup);
                }
                return Err(e.into());
            }
        };

        let follower_ids = FollowRepository::new(self.db)
            .follower_ids(author.user_id)
            .await?;
        let emails = UserRepository::new(self.db)
            .emails_for(follower_ids)
            .await?;

        for email in emails {
            self.tasks.push(BackgroundTask::NewPostEmail {
                email,
                author: author.username.clone(),
                title: content.title.clone(),
                caption: content.caption.clone(),
            });
        }

        tracing::info!(c_id = content.c_id, user_id = author.user_id, "Content created");

        Ok(content)
    }

    /// Lists every post, six per page, with comments and like counts.
    pub async fn get_page(&self, page: i64) -> Result<PaginatedContent, AppError> {
        let page = Page::new(page, CONTENT_PER_PAGE)?;

        let (posts, total) = ContentRepository::new(self.db)
            .get_paginated(page.index(), page.per_page)
            .await?;

        self.paginate(page, posts, total).await
    }

    /// Same as `get_page`, restricted to one author.
    pub async fn get_page_by_username(
        &self,
        username: &str,
        page: i64,
    ) -> Result<PaginatedContent, AppError> {
        let page = Page::new(page, CONTENT_PER_PAGE)?;

        let (posts, total) = ContentRepository::new(self.db)
            .get_by_username_paginated(username, page.index(), page.per_page)
            .await?;

        self.paginate(page, posts, total).await
    }

    /// Deletes one of the caller's posts along with its likes and comments.
    ///
    /// # Returns
    /// - `Ok(())` - Post removed, file removal queued
    /// - `Err(AppError::NotFound)` - No post with that id
    /// - `Err(AppError::Forbidden)` - Caller does not own the post
    pub async fn delete(&self, actor: &User, c_id: i32) -> Result<(), AppError> {
        let Some(post) = ContentRepository::new(self.db).find_by_id(c_id).await? else {
            return Err(AppError::NotFound(format!("No content found with ID {}", c_id)));
        };

        if post.user_id != actor.user_id {
            return Err(AppError::Forbidden(
                "Not authorized to delete this content".to_string(),
            ));
        }

        let txn = self.db.begin().await?;
        LikesRepository::new(&txn).delete_for_posts(vec![c_id]).await?;
        CommentRepository::new(&txn)
            .delete_for_posts(vec![c_id])
            .await?;
        ContentRepository::new(&txn).delete(c_id).await?;
        txn.commit().await?;

        self.tasks.push(BackgroundTask::RemoveFiles {
            paths: vec![post.file.into()],
        });

        tracing::info!(c_id, user_id = actor.user_id, "Content deleted");

        Ok(())
    }

    async fn paginate(
        &self,
        page: Page,
        posts: Vec<Content>,
        total: u64,
    ) -> Result<PaginatedContent, AppError> {
        let total_pages = page.check_in_range(total)?;

        Ok(PaginatedContent {
            content: load_details(self.db, posts).await?,
            total,
            total_pages,
            page: page.number,
        })
    }
}

/// Attaches comment texts and like counts to each post, keeping order.
pub async fn load_details<C: ConnectionTrait>(
    db: &C,
    posts: Vec<Content>,
) -> Result<Vec<ContentDetail>, DbErr> {
    let comment_repo = CommentRepository::new(db);
    let likes_repo = LikesRepository::new(db);

    let mut details = Vec::with_capacity(posts.len());
    for content in posts {
        details.push(ContentDetail {
            comments: comment_repo.texts_for_post(content.c_id).await?,
            total_likes: likes_repo.count_for_post(content.c_id).await?,
            content,
        });
    }

    Ok(details)
}
