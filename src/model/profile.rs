use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct ProfileContentDto {
    pub username: String,
    pub title: String,
    pub caption: String,
    /// Formatted as `%Y-%m-%d %H:%M:%S`.
    pub created_at: String,
    pub comments: Vec<String>,
    pub total_likes: u64,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ProfileDto {
    pub username: String,
    pub followers: u64,
    pub following: u64,
    pub content: Vec<ProfileContentDto>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct FollowEntryDto {
    pub username: String,
    /// Formatted as `%Y-%m-%d %H:%M:%S`.
    pub followed_since: String,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct FollowersDto {
    pub followers: Vec<FollowEntryDto>,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct FollowingDto {
    pub following: Vec<FollowEntryDto>,
}
