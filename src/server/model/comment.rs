use chrono::{DateTime, Utc};

use crate::model::comment::CommentDto;

#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub comment_id: i32,
    pub user_id: i32,
    pub post_id: i32,
    pub user_comment: String,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    pub fn from_entity(entity: entity::comment::Model) -> Self {
        Self {
            comment_id: entity.comment_id,
            user_id: entity.user_id,
            post_id: entity.post_id,
            user_comment: entity.user_comment,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> CommentDto {
        CommentDto {
            comment_id: self.comment_id,
            user_id: self.user_id,
            post_id: self.post_id,
            user_comment: self.user_comment,
        }
    }
}
