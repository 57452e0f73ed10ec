//! User domain models and parameters.
//!
//! A row in `registrations` is either a pending registration (OTP issued, no
//! credentials yet) or an active account. `Registration` mirrors the raw row while
//! `User` is only ever built from an active account with credentials set.

use chrono::{DateTime, NaiveDate, Utc};

use crate::{
    model::{
        registration::CompleteRegistrationDto,
        user::{PaginatedUsersDto, UpdateUserDto, UserSummaryDto},
    },
    server::error::{internal::InternalError, AppError},
};

/// Raw registration row in either lifecycle state.
#[derive(Debug, Clone, PartialEq)]
pub struct Registration {
    pub user_id: i32,
    pub username: Option<String>,
    pub email: String,
    pub is_active: bool,
    pub otp: Option<i32>,
    pub otp_expiry: Option<DateTime<Utc>>,
    pub otp_verified: bool,
    pub retry_attempts: i32,
    pub created_at: DateTime<Utc>,
}

impl Registration {
    pub fn from_entity(entity: entity::registration::Model) -> Self {
        Self {
            user_id: entity.user_id,
            username: entity.username,
            email: entity.email,
            is_active: entity.is_active,
            otp: entity.otp,
            otp_expiry: entity.otp_expiry,
            otp_verified: entity.otp_verified,
            retry_attempts: entity.retry_attempts,
            created_at: entity.created_at,
        }
    }

    /// Whether the current OTP is past its expiry. A missing expiry counts as expired.
    pub fn otp_expired(&self, now: DateTime<Utc>) -> bool {
        self.otp_expiry.is_none_or(|expiry| now > expiry)
    }
}

/// An active account.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub user_id: i32,
    pub username: String,
    pub email: String,
    /// Argon2 PHC hash.
    pub password_hash: String,
    pub dob: Option<NaiveDate>,
    pub phone_number: Option<String>,
    pub country: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts an active registration row into a user.
    ///
    /// # Returns
    /// - `Ok(User)` - Row has both username and password set
    /// - `Err(AppError::InternalErr(MissingUsername))` - Active row lacks credentials
    pub fn from_entity(entity: entity::registration::Model) -> Result<Self, AppError> {
        let (Some(username), Some(password_hash)) = (entity.username, entity.password) else {
            return Err(InternalError::MissingUsername(entity.user_id).into());
        };

        Ok(Self {
            user_id: entity.user_id,
            username,
            email: entity.email,
            password_hash,
            dob: entity.dob,
            phone_number: entity.phone_number,
            country: entity.country,
            created_at: entity.created_at,
        })
    }
}

/// Username with follower and following counts.
#[derive(Debug, Clone, PartialEq)]
pub struct UserSummary {
    pub username: String,
    pub followers: u64,
    pub following: u64,
}

impl UserSummary {
    pub fn into_dto(self) -> UserSummaryDto {
        UserSummaryDto {
            username: self.username,
            followers: self.followers,
            following: self.following,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PaginatedUsers {
    pub users: Vec<UserSummary>,
    pub total: u64,
    pub total_pages: u64,
    pub page: u64,
}

impl PaginatedUsers {
    pub fn into_dto(self) -> PaginatedUsersDto {
        PaginatedUsersDto {
            users: self.users.into_iter().map(UserSummary::into_dto).collect(),
            total_users: self.total,
            total_pages: self.total_pages,
            current_page: self.page,
        }
    }
}

/// Parameters for issuing a fresh OTP to an email address.
#[derive(Debug, Clone)]
pub struct IssueOtpParam {
    pub email: String,
    pub otp: i32,
    pub otp_expiry: DateTime<Utc>,
    pub retry_attempts: i32,
}

/// Profile fields written when a pending registration becomes an account.
#[derive(Debug, Clone)]
pub struct CompleteRegistrationParam {
    pub user_id: i32,
    pub username: String,
    pub password_hash: String,
    pub phone_number: String,
    pub country: String,
    pub dob: NaiveDate,
}

/// Partial profile update. `None` leaves the column unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserParam {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password_hash: Option<String>,
    pub phone_number: Option<String>,
    pub country: Option<String>,
    pub dob: Option<NaiveDate>,
}

/// Sign-up details submitted after the OTP has been verified. The password is still
/// plain text here and is hashed by the service once every rule has passed.
#[derive(Debug, Clone)]
pub struct NewAccountParam {
    pub email: String,
    pub username: String,
    pub password: String,
    pub phone_number: String,
    pub country: String,
    pub dob: NaiveDate,
}

impl NewAccountParam {
    pub fn from_dto(dto: CompleteRegistrationDto) -> Self {
        Self {
            email: dto.email,
            username: dto.username,
            password: dto.password,
            phone_number: dto.phone_number,
            country: dto.country,
            dob: dto.dob,
        }
    }
}

/// Requested account changes with a plain-text password.
#[derive(Debug, Clone, Default)]
pub struct AccountChanges {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub phone_number: Option<String>,
    pub country: Option<String>,
    pub dob: Option<NaiveDate>,
}

impl AccountChanges {
    pub fn from_dto(dto: UpdateUserDto) -> Self {
        Self {
            username: dto.username,
            email: dto.email,
            password: dto.password,
            phone_number: dto.phone_number,
            country: dto.country,
            dob: dto.dob,
        }
    }
}
