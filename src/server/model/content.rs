//! Content domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::{
    content::{ContentDetailDto, PaginatedContentDto},
    profile::ProfileContentDto,
    search::ContentSearchItemDto,
};

/// Format used for timestamps rendered as plain strings.
pub const DISPLAY_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A stored post.
#[derive(Debug, Clone, PartialEq)]
pub struct Content {
    pub c_id: i32,
    pub user_id: i32,
    pub username: String,
    pub title: String,
    pub caption: String,
    /// Path of the stored upload.
    pub file: String,
    pub created_at: DateTime<Utc>,
}

impl Content {
    pub fn from_entity(entity: entity::content::Model) -> Self {
        Self {
            c_id: entity.c_id,
            user_id: entity.user_id,
            username: entity.username,
            title: entity.title,
            caption: entity.caption,
            file: entity.file,
            created_at: entity.created_at,
        }
    }

    pub fn into_search_dto(self) -> ContentSearchItemDto {
        ContentSearchItemDto {
            c_id: self.c_id,
            title: self.title,
            username: self.username,
            created_at: self.created_at,
        }
    }
}

/// A post with its comment texts and like count.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentDetail {
    pub content: Content,
    pub comments: Vec<String>,
    pub total_likes: u64,
}

impl ContentDetail {
    pub fn into_dto(self) -> ContentDetailDto {
        ContentDetailDto {
            c_id: self.content.c_id,
            username: self.content.username,
            title: self.content.title,
            caption: self.content.caption,
            created_at: self.content.created_at,
            file: self.content.file,
            comments: self.comments,
            total_likes: self.total_likes,
        }
    }

    pub fn into_profile_dto(self) -> ProfileContentDto {
        ProfileContentDto {
            username: self.content.username,
            title: self.content.title,
            caption: self.content.caption,
            created_at: self
                .content
                .created_at
                .format(DISPLAY_TIME_FORMAT)
                .to_string(),
            comments: self.comments,
            total_likes: self.total_likes,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PaginatedContent {
    pub content: Vec<ContentDetail>,
    pub total: u64,
    pub total_pages: u64,
    pub page: u64,
}

impl PaginatedContent {
    pub fn into_dto(self) -> PaginatedContentDto {
        PaginatedContentDto {
            content: self.content.into_iter().map(ContentDetail::into_dto).collect(),
            total_content: self.total,
            total_pages: self.total_pages,
            current_page: self.page,
        }
    }
}

/// Row values for a new post. The upload must already be stored at `file`.
#[derive(Debug, Clone)]
pub struct CreateContentParam {
    pub user_id: i32,
    pub username: String,
    pub title: String,
    pub caption: String,
    pub file: String,
}

/// An uploaded file awaiting storage.
#[derive(Debug, Clone)]
pub struct Upload {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// Multipart fields of a create-content request.
#[derive(Debug, Clone)]
pub struct NewContent {
    pub title: String,
    pub caption: String,
    pub upload: Upload,
}
