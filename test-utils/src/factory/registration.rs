//! Registration factory for creating test user rows.
//!
//! By default the factory produces a fully registered, active account. Call
//! `pending()` to get a row in the state left behind by an OTP request.

use crate::factory::helpers::next_id;
use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
    Argon2,
};
use chrono::{DateTime, Duration, NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Password given to factory users unless overridden.
pub const DEFAULT_PASSWORD: &str = "Str0ng#Pass";

/// Factory for creating test registrations with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::registration::RegistrationFactory;
///
/// let user = RegistrationFactory::new(&db)
///     .username("alice")
///     .email("alice@example.com")
///     .build()
///     .await?;
/// ```
pub struct RegistrationFactory<'a> {
    db: &'a DatabaseConnection,
    username: Option<String>,
    password: Option<String>,
    email: String,
    dob: Option<NaiveDate>,
    phone_number: Option<String>,
    country: Option<String>,
    is_active: bool,
    otp: Option<i32>,
    otp_expiry: Option<DateTime<Utc>>,
    otp_verified: bool,
    retry_attempts: i32,
    created_at: DateTime<Utc>,
}

impl<'a> RegistrationFactory<'a> {
    /// Creates a new factory for an active account.
    ///
    /// Defaults:
    /// - username: `"user{id}"` where id is auto-incremented
    /// - email: `"user{id}@example.com"`
    /// - password: [`DEFAULT_PASSWORD`], hashed with Argon2
    /// - dob: 2000-01-01, phone `"9876543210"`, country `"India"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            username: Some(format!("user{}", id)),
            password: Some(DEFAULT_PASSWORD.to_string()),
            email: format!("user{}@example.com", id),
            dob: NaiveDate::from_ymd_opt(2000, 1, 1),
            phone_number: Some("9876543210".to_string()),
            country: Some("India".to_string()),
            is_active: true,
            otp: None,
            otp_expiry: None,
            otp_verified: true,
            retry_attempts: 0,
            created_at: Utc::now(),
        }
    }

    /// Turns the row into a pending registration awaiting OTP verification.
    ///
    /// Clears the profile fields and sets an OTP of `123456` valid for 10 minutes.
    pub fn pending(mut self) -> Self {
        self.username = None;
        self.password = None;
        self.dob = None;
        self.country = None;
        self.phone_number = None;
        self.is_active = false;
        self.otp = Some(123456);
        self.otp_expiry = Some(Utc::now() + Duration::minutes(10));
        self.otp_verified = false;
        self.retry_attempts = 1;
        self
    }

    /// Sets the username.
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Sets the plaintext password, hashed on `build()`.
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Sets the email address.
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the date of birth.
    pub fn dob(mut self, dob: NaiveDate) -> Self {
        self.dob = Some(dob);
        self
    }

    /// Sets the phone number.
    pub fn phone_number(mut self, phone_number: Option<String>) -> Self {
        self.phone_number = phone_number;
        self
    }

    /// Sets whether the account is active.
    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    /// Sets the stored OTP and its expiry.
    pub fn otp(mut self, otp: i32, otp_expiry: DateTime<Utc>) -> Self {
        self.otp = Some(otp);
        self.otp_expiry = Some(otp_expiry);
        self
    }

    /// Sets whether the stored OTP has been verified.
    pub fn otp_verified(mut self, otp_verified: bool) -> Self {
        self.otp_verified = otp_verified;
        self
    }

    /// Sets the OTP retry counter.
    pub fn retry_attempts(mut self, retry_attempts: i32) -> Self {
        self.retry_attempts = retry_attempts;
        self
    }

    /// Sets the creation timestamp.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the registration row.
    ///
    /// # Returns
    /// - `Ok(entity::registration::Model)` - Created row
    /// - `Err(DbErr)` - Password hashing or insert failed
    pub async fn build(self) -> Result<entity::registration::Model, DbErr> {
        let password = match self.password {
            Some(plain) => Some(hash(&plain)?),
            None => None,
        };

        entity::registration::ActiveModel {
            username: ActiveValue::Set(self.username),
            password: ActiveValue::Set(password),
            email: ActiveValue::Set(self.email),
            dob: ActiveValue::Set(self.dob),
            phone_number: ActiveValue::Set(self.phone_number),
            country: ActiveValue::Set(self.country),
            is_active: ActiveValue::Set(self.is_active),
            otp: ActiveValue::Set(self.otp),
            otp_expiry: ActiveValue::Set(self.otp_expiry),
            otp_verified: ActiveValue::Set(self.otp_verified),
            retry_attempts: ActiveValue::Set(self.retry_attempts),
            created_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

fn hash(plain: &str) -> Result<String, DbErr> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(plain.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| DbErr::Custom(format!("Failed to hash test password: {}", e)))
}

/// Creates an active user with default values.
///
/// Shorthand for `RegistrationFactory::new(db).build().await`.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::registration::Model, DbErr> {
    RegistrationFactory::new(db).build().await
}

/// Creates a pending registration for the given email.
///
/// Shorthand for `RegistrationFactory::new(db).pending().email(email).build().await`.
pub async fn create_pending_registration(
    db: &DatabaseConnection,
    email: impl Into<String>,
) -> Result<entity::registration::Model, DbErr> {
    RegistrationFactory::new(db)
        .pending()
        .email(email)
        .build()
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use entity::prelude::*;

    #[tokio::test]
    async fn creates_active_user_with_defaults() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_table(Registration)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let user = create_user(db).await?;

        assert!(user.is_active);
        assert!(user.username.is_some());
        assert!(user.password.as_deref().unwrap().starts_with("$argon2"));
        assert!(user.email.ends_with("@example.com"));

        Ok(())
    }

    #[tokio::test]
    async fn creates_pending_registration() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_table(Registration)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let pending = create_pending_registration(db, "pending@example.com").await?;

        assert!(!pending.is_active);
        assert!(!pending.otp_verified);
        assert_eq!(pending.username, None);
        assert_eq!(pending.password, None);
        assert_eq!(pending.otp, Some(123456));
        assert_eq!(pending.email, "pending@example.com");

        Ok(())
    }

    #[tokio::test]
    async fn creates_multiple_unique_users() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_table(Registration)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let first = create_user(db).await?;
        let second = create_user(db).await?;

        assert_ne!(first.user_id, second.user_id);
        assert_ne!(first.username, second.username);
        assert_ne!(first.email, second.email);

        Ok(())
    }
}
