use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::api::default_page;

#[derive(Deserialize, Debug, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct UsernameSearchQuery {
    pub username: String,
    #[serde(default = "default_page")]
    pub page: i64,
}

#[derive(Deserialize, Debug, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TitleSearchQuery {
    /// Title fragment, or a post id when the value is all digits.
    pub title: String,
    #[serde(default = "default_page")]
    pub page: i64,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct UserSearchResultDto {
    pub total_users: u64,
    pub total_pages: u64,
    pub current_page: u64,
    pub users: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct ContentSearchItemDto {
    pub c_id: i32,
    pub title: String,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ContentSearchResultDto {
    pub total_content: u64,
    pub total_pages: u64,
    pub current_page: u64,
    pub content: Vec<ContentSearchItemDto>,
}
