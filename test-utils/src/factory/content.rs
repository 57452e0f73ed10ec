//! Content factory for creating test posts.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test posts owned by a given user.
///
/// # Example
///
/// ```rust,ignore
/// let post = ContentFactory::new(&db, &user)
///     .title("Sunset")
///     .caption("Evening at the beach")
///     .build()
///     .await?;
/// ```
pub struct ContentFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    username: String,
    title: String,
    caption: String,
    file: String,
    created_at: DateTime<Utc>,
}

impl<'a> ContentFactory<'a> {
    /// Creates a new factory for a post authored by `owner`.
    ///
    /// Defaults:
    /// - title: `"Post {id}"`
    /// - caption: `"Caption {id}"`
    /// - file: `"uploads/{username}/post_{id}.jpg"`
    pub fn new(db: &'a DatabaseConnection, owner: &entity::registration::Model) -> Self {
        let id = next_id();
        let username = owner.username.clone().unwrap_or_default();
        Self {
            db,
            user_id: owner.user_id,
            file: format!("uploads/{}/post_{}.jpg", username, id),
            username,
            title: format!("Post {}", id),
            caption: format!("Caption {}", id),
            created_at: Utc::now(),
        }
    }

    /// Sets the title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the caption.
    pub fn caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = caption.into();
        self
    }

    /// Sets the stored file path.
    pub fn file(mut self, file: impl Into<String>) -> Self {
        self.file = file.into();
        self
    }

    /// Sets the creation timestamp.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the post.
    pub async fn build(self) -> Result<entity::content::Model, DbErr> {
        entity::content::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            username: ActiveValue::Set(self.username),
            title: ActiveValue::Set(self.title),
            caption: ActiveValue::Set(self.caption),
            file: ActiveValue::Set(self.file),
            created_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a post with default values for `owner`.
pub async fn create_content(
    db: &DatabaseConnection,
    owner: &entity::registration::Model,
) -> Result<entity::content::Model, DbErr> {
    ContentFactory::new(db, owner).build().await
}
