//! Sign-up flow: OTP issuance, OTP verification and account completion.

use chrono::{Duration, Utc};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{CompleteRegistrationParam, IssueOtpParam, NewAccountParam, User},
    task::{BackgroundTask, TaskQueue},
    util::{
        otp::generate_otp,
        password::hash_password,
        validation::{validate_age, validate_password, validate_phone},
    },
};

pub struct RegistrationService<'a> {
    db: &'a DatabaseConnection,
    tasks: &'a TaskQueue,
    otp_expiration_minutes: i64,
    max_retry_attempts: i32,
}

impl<'a> RegistrationService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        tasks: &'a TaskQueue,
        otp_expiration_minutes: i64,
        max_retry_attempts: i32,
    ) -> Self {
        Self {
            db,
            tasks,
            otp_expiration_minutes,
            max_retry_attempts,
        }
    }

    /// Issues a fresh OTP to `email` and queues its delivery.
    ///
    /// A pending registration may request a new code at most `max_retry_attempts`
    /// times while its current code is still valid. Once that code expires the
    /// counter starts over.
    ///
    /// # Returns
    /// - `Ok(())` - OTP stored and delivery queued
    /// - `Err(AppError::Conflict)` - Email already belongs to an active account
    /// - `Err(AppError::TooManyRequests)` - Retry limit reached for the current window
    pub async fn send_otp(&self, email: &str, phone_number: Option<String>) -> Result<(), AppError> {
        let user_repo = UserRepository::new(self.db);
        let now = Utc::now();

        let otp = generate_otp();
        let otp_expiry = now + Duration::minutes(self.otp_expiration_minutes);

        match user_repo.find_by_email(email).await? {
            Some(registration) if registration.is_active => {
                return Err(AppError::Conflict(format!(
                    "User with email {} is already registered",
                    email
                )));
            }
            Some(registration) => {
                let retry_attempts = if registration.otp_expired(now) {
                    1
                } else if registration.retry_attempts >= self.max_retry_attempts {
                    tracing::info!(
                        user_id = registration.user_id,
                        "OTP retry limit reached"
                    );
                    return Err(AppError::TooManyRequests(
                        "Maximum OTP requests reached. Please wait for the current OTP to expire and try again."
                            .to_string(),
                    ));
                } else {
                    registration.retry_attempts + 1
                };

                user_repo
                    .reissue_otp(
                        registration.user_id,
                        IssueOtpParam {
                            email: email.to_string(),
                            otp,
                            otp_expiry,
                            retry_attempts,
                        },
                    )
                    .await?;
            }
            None => {
                user_repo
                    .create_pending(IssueOtpParam {
                        email: email.to_string(),
                        otp,
                        otp_expiry,
                        retry_attempts: 1,
                    })
                    .await
                    .map_err(|e| {
                        AppError::from(e).or_conflict(format!(
                            "User with email {} is already registered",
                            email
                        ))
                    })?;
            }
        }

        self.tasks.push(BackgroundTask::OtpEmail {
            email: email.to_string(),
            otp,
            expires_in_minutes: self.otp_expiration_minutes,
        });

        if let Some(phone_number) = phone_number.filter(|p| !p.trim().is_empty()) {
            self.tasks.push(BackgroundTask::OtpSms {
                phone_number,
                otp,
                expires_in_minutes: self.otp_expiration_minutes,
            });
        }

        Ok(())
    }

    /// Checks a submitted OTP and marks the registration as verified.
    ///
    /// # Returns
    /// - `Ok(())` - OTP matched and is still valid
    /// - `Err(AppError::NotFound)` - No registration for the email
    /// - `Err(AuthError::InvalidOtp)` - Code does not match
    /// - `Err(AppError::BadRequest)` - Code matched but has expired
    pub async fn verify_otp(&self, email: &str, otp: i32) -> Result<(), AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(registration) = user_repo.find_by_email(email).await? else {
            return Err(AppError::NotFound("Email not found".to_string()));
        };

        if registration.otp != Some(otp) {
            return Err(AuthError::InvalidOtp.into());
        }

        if registration.otp_expired(Utc::now()) {
            return Err(AppError::BadRequest(
                "OTP has expired. Please request a new one.".to_string(),
            ));
        }

        user_repo.mark_otp_verified(registration.user_id).await?;

        Ok(())
    }

    /// Turns a verified pending registration into an active account.
    ///
    /// Rules are checked in order: age, password strength, phone format, then
    /// username uniqueness.
    pub async fn complete(&self, param: NewAccountParam) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(registration) = user_repo.find_by_email(&param.email).await? else {
            return Err(AppError::BadRequest(
                "User does not exist. Please verify your OTP first.".to_string(),
            ));
        };

        if registration.is_active {
            return Err(AppError::Conflict("User is already registered.".to_string()));
        }

        if !registration.otp_verified {
            return Err(AppError::BadRequest(
                "Please verify your OTP first.".to_string(),
            ));
        }

        validate_age(param.dob, Utc::now().date_naive())?;
        validate_password(&param.password)?;
        validate_phone(&param.phone_number)?;

        if user_repo
            .username_taken(&param.username, Some(registration.user_id))
            .await?
        {
            return Err(AppError::Conflict(format!(
                "Username {} is already taken",
                param.username
            )));
        }

        let password_hash = hash_password(&param.password)?;

        let username = param.username.clone();
        let user = user_repo
            .complete_registration(CompleteRegistrationParam {
                user_id: registration.user_id,
                username: param.username,
                password_hash,
                phone_number: param.phone_number,
                country: param.country,
                dob: param.dob,
            })
            .await
            .map_err(|e| e.or_conflict(format!("Username {} is already taken", username)))?;

        tracing::info!(user_id = user.user_id, "Registration completed");

        Ok(user)
    }
}
