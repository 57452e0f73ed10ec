use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Deserialize, Debug, Validate, ToSchema)]
pub struct SendOtpDto {
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    /// When present, the OTP is also sent by SMS.
    pub phone_number: Option<String>,
}

#[derive(Deserialize, Debug, Validate, ToSchema)]
pub struct VerifyOtpDto {
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    pub otp: i32,
}

#[derive(Deserialize, Debug, Validate, ToSchema)]
pub struct CompleteRegistrationDto {
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "Username must not be empty"))]
    pub username: String,
    pub password: String,
    pub phone_number: String,
    pub country: String,
    pub dob: NaiveDate,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct RegistrationResponseDto {
    pub user_id: i32,
    pub username: String,
}
