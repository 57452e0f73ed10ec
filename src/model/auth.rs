use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// OAuth2 password-style login form.
#[derive(Deserialize, Debug, ToSchema)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct LoginResponseDto {
    pub message: String,
    pub token: String,
    pub token_type: String,
    pub user_id: i32,
    /// Token lifetime in seconds.
    pub expires_in: i64,
}
