use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A post with its comments and like count.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct ContentDetailDto {
    pub c_id: i32,
    pub username: String,
    pub title: String,
    pub caption: String,
    pub created_at: DateTime<Utc>,
    pub file: String,
    pub comments: Vec<String>,
    pub total_likes: u64,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct PaginatedContentDto {
    pub content: Vec<ContentDetailDto>,
    pub total_content: u64,
    pub total_pages: u64,
    pub current_page: u64,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ContentCreatedDto {
    pub message: String,
    pub content_id: i32,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ContentDeletedDto {
    pub message: String,
    pub id: i32,
}

#[derive(Deserialize, Debug, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ContentByUsernameQuery {
    pub username: String,
    #[serde(default = "crate::model::api::default_page")]
    pub page: i64,
}

/// Multipart body of `POST /create_content`, described for the API docs only.
#[derive(ToSchema)]
#[allow(dead_code)]
pub struct CreateContentForm {
    pub title: String,
    pub caption: String,
    #[schema(value_type = String, format = Binary)]
    pub file: Vec<u8>,
    /// Must match the caller when present.
    pub username: Option<String>,
}
