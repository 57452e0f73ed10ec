use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct FollowDto {
    /// The account to follow or unfollow.
    pub user_id: i32,
}
