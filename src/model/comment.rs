use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Deserialize, Debug, ToSchema)]
pub struct CreateCommentDto {
    pub post_id: i32,
    pub user_comment: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct CommentDto {
    pub comment_id: i32,
    pub user_id: i32,
    pub post_id: i32,
    pub user_comment: String,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct CommentCreatedDto {
    pub message: String,
    pub comment: CommentDto,
}
