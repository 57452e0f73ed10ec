use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Public view of a user with follow counts.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct UserSummaryDto {
    pub username: String,
    pub followers: u64,
    pub following: u64,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct PaginatedUsersDto {
    pub users: Vec<UserSummaryDto>,
    pub total_users: u64,
    pub total_pages: u64,
    pub current_page: u64,
}

/// Partial account update; omitted fields are left unchanged.
#[derive(Deserialize, Debug, Default, Validate, ToSchema)]
pub struct UpdateUserDto {
    #[validate(length(min = 1, message = "Username must not be empty"))]
    pub username: Option<String>,
    #[validate(email(message = "Invalid email address"))]
    pub email: Option<String>,
    pub password: Option<String>,
    pub phone_number: Option<String>,
    pub country: Option<String>,
    pub dob: Option<NaiveDate>,
}
