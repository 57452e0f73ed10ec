use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Like (`dir = 1`) or unlike (`dir = 0`) a post.
#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct LikeDto {
    pub post_id: i32,
    pub dir: i32,
}
