//! Account field rules shared by registration and profile updates.

use chrono::NaiveDate;

use crate::server::error::AppError;

/// Youngest age, in whole years, allowed to hold an account.
pub const MINIMUM_AGE_YEARS: u32 = 14;

const PASSWORD_SPECIAL_CHARS: &str = "!@#$%^&*(),.?\":{}|<>";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordStrength {
    Low,
    Medium,
    Strong,
}

impl PasswordStrength {
    fn label(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::Strong => "strong",
        }
    }
}

/// Classifies a password.
///
/// Shorter than 8 characters or containing a space is `Low`. Anything missing
/// one of upper case, lower case, digit or special character is `Medium`.
pub fn password_strength(password: &str) -> PasswordStrength {
    if password.chars().count() < 8 || password.contains(' ') {
        return PasswordStrength::Low;
    }

    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_special = password.chars().any(|c| PASSWORD_SPECIAL_CHARS.contains(c));

    if has_upper && has_lower && has_digit && has_special {
        PasswordStrength::Strong
    } else {
        PasswordStrength::Medium
    }
}

pub fn validate_password(password: &str) -> Result<(), AppError> {
    match password_strength(password) {
        PasswordStrength::Strong => Ok(()),
        weak => Err(AppError::NotAcceptable(format!(
            "Password strength is too {}. Please use a stronger password.",
            weak.label()
        ))),
    }
}

/// A phone number is exactly ten ASCII digits.
pub fn is_valid_phone(phone_number: &str) -> bool {
    phone_number.len() == 10 && phone_number.bytes().all(|b| b.is_ascii_digit())
}

pub fn validate_phone(phone_number: &str) -> Result<(), AppError> {
    if is_valid_phone(phone_number) {
        Ok(())
    } else {
        Err(AppError::NotAcceptable(
            "Invalid phone number. It must be exactly 10 digits.".to_string(),
        ))
    }
}

/// Whole calendar years between `dob` and `today`, or `None` for a future date.
pub fn age_on(dob: NaiveDate, today: NaiveDate) -> Option<u32> {
    today.years_since(dob)
}

pub fn validate_age(dob: NaiveDate, today: NaiveDate) -> Result<(), AppError> {
    match age_on(dob, today) {
        Some(age) if age >= MINIMUM_AGE_YEARS => Ok(()),
        _ => Err(AppError::NotAcceptable(format!(
            "User is too young to register. Must be at least {} years old.",
            MINIMUM_AGE_YEARS
        ))),
    }
}
