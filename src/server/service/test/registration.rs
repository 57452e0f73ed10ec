use chrono::{Duration, NaiveDate, Utc};
use test_utils::{
    builder::TestBuilder,
    factory::{self, registration::RegistrationFactory},
};

use super::drain;
use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::NewAccountParam,
    service::registration::RegistrationService,
    task::{BackgroundTask, TaskQueue},
    util::password::verify_password,
};

fn new_account(email: &str) -> NewAccountParam {
    NewAccountParam {
        email: email.to_string(),
        username: "freshface".to_string(),
        password: "Str0ng#Pass".to_string(),
        phone_number: "9876543210".to_string(),
        country: "India".to_string(),
        dob: NaiveDate::from_ymd_opt(1995, 6, 15).unwrap(),
    }
}

/// Tests requesting an OTP for a brand new email.
///
/// Expected: Ok with a pending row and an OTP email plus SMS queued
#[tokio::test]
async fn send_otp_creates_pending_registration() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (tasks, mut receiver) = TaskQueue::new();

    RegistrationService::new(db, &tasks, 10, 3)
        .send_otp("new@example.com", Some("9876543210".to_string()))
        .await
        .unwrap();

    let registration = UserRepository::new(db)
        .find_by_email("new@example.com")
        .await
        .unwrap()
        .unwrap();
    assert!(!registration.is_active);
    assert_eq!(registration.retry_attempts, 1);
    let otp = registration.otp.unwrap();
    assert!((100_000..=999_999).contains(&otp));

    let queued = drain(&mut receiver);
    assert_eq!(
        queued,
        vec![
            BackgroundTask::OtpEmail {
                email: "new@example.com".to_string(),
                otp,
                expires_in_minutes: 10,
            },
            BackgroundTask::OtpSms {
                phone_number: "9876543210".to_string(),
                otp,
                expires_in_minutes: 10,
            },
        ]
    );
}

/// Tests requesting an OTP for an email that already has an account.
///
/// Expected: Err(Conflict) and nothing queued
#[tokio::test]
async fn send_otp_rejects_registered_email() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (tasks, mut receiver) = TaskQueue::new();

    let user = factory::create_user(db).await.unwrap();

    let result = RegistrationService::new(db, &tasks, 10, 3)
        .send_otp(&user.email, None)
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
    assert!(drain(&mut receiver).is_empty());
}

/// Tests the retry limit while the current OTP is still valid.
///
/// Expected: Err(TooManyRequests)
#[tokio::test]
async fn send_otp_enforces_retry_limit() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (tasks, _receiver) = TaskQueue::new();

    RegistrationFactory::new(db)
        .pending()
        .email("busy@example.com")
        .retry_attempts(3)
        .build()
        .await
        .unwrap();

    let result = RegistrationService::new(db, &tasks, 10, 3)
        .send_otp("busy@example.com", None)
        .await;

    assert!(matches!(result, Err(AppError::TooManyRequests(_))));
}

/// Tests that the retry counter restarts once the previous OTP has expired.
///
/// Expected: Ok with retry_attempts back at 1 and a new unverified OTP
#[tokio::test]
async fn send_otp_resets_counter_after_expiry() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (tasks, _receiver) = TaskQueue::new();

    RegistrationFactory::new(db)
        .pending()
        .email("later@example.com")
        .otp(111111, Utc::now() - Duration::minutes(1))
        .otp_verified(true)
        .retry_attempts(3)
        .build()
        .await
        .unwrap();

    RegistrationService::new(db, &tasks, 10, 3)
        .send_otp("later@example.com", None)
        .await
        .unwrap();

    let registration = UserRepository::new(db)
        .find_by_email("later@example.com")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(registration.retry_attempts, 1);
    assert!(!registration.otp_verified);
    assert!(!registration.otp_expired(Utc::now()));
}

/// Tests OTP verification outcomes.
///
/// Expected: NotFound for unknown email, InvalidOtp for a wrong code, Ok for the right one
#[tokio::test]
async fn verify_otp_checks_code() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (tasks, _receiver) = TaskQueue::new();

    factory::create_pending_registration(db, "verify@example.com")
        .await
        .unwrap();
    let service = RegistrationService::new(db, &tasks, 10, 3);

    assert!(matches!(
        service.verify_otp("missing@example.com", 123456).await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        service.verify_otp("verify@example.com", 654321).await,
        Err(AppError::AuthErr(AuthError::InvalidOtp))
    ));

    service.verify_otp("verify@example.com", 123456).await.unwrap();

    let registration = UserRepository::new(db)
        .find_by_email("verify@example.com")
        .await
        .unwrap()
        .unwrap();
    assert!(registration.otp_verified);
}

/// Tests verifying a correct but expired OTP.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn verify_otp_rejects_expired_code() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (tasks, _receiver) = TaskQueue::new();

    RegistrationFactory::new(db)
        .pending()
        .email("stale@example.com")
        .otp(222222, Utc::now() - Duration::minutes(5))
        .build()
        .await
        .unwrap();

    let result = RegistrationService::new(db, &tasks, 10, 3)
        .verify_otp("stale@example.com", 222222)
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
}

/// Tests completing a verified registration.
///
/// Expected: Ok with an active account whose password hash verifies
#[tokio::test]
async fn complete_activates_verified_registration() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (tasks, _receiver) = TaskQueue::new();

    RegistrationFactory::new(db)
        .pending()
        .email("done@example.com")
        .otp_verified(true)
        .build()
        .await
        .unwrap();

    let user = RegistrationService::new(db, &tasks, 10, 3)
        .complete(new_account("done@example.com"))
        .await
        .unwrap();

    assert_eq!(user.username, "freshface");
    assert!(verify_password(user.user_id, "Str0ng#Pass", &user.password_hash).unwrap());

    let found = UserRepository::new(db)
        .find_active_by_username("freshface")
        .await
        .unwrap();
    assert_eq!(found.map(|u| u.user_id), Some(user.user_id));
}

/// Tests the preconditions and rules of registration completion.
///
/// Expected: each broken rule maps to its own error
#[tokio::test]
async fn complete_enforces_rules() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (tasks, _receiver) = TaskQueue::new();
    let service = RegistrationService::new(db, &tasks, 10, 3);

    assert!(matches!(
        service.complete(new_account("nobody@example.com")).await,
        Err(AppError::BadRequest(_))
    ));

    factory::create_pending_registration(db, "unverified@example.com")
        .await
        .unwrap();
    assert!(matches!(
        service.complete(new_account("unverified@example.com")).await,
        Err(AppError::BadRequest(_))
    ));

    let active = factory::create_user(db).await.unwrap();
    assert!(matches!(
        service.complete(new_account(&active.email)).await,
        Err(AppError::Conflict(_))
    ));

    RegistrationFactory::new(db)
        .pending()
        .email("rules@example.com")
        .otp_verified(true)
        .build()
        .await
        .unwrap();

    let mut young = new_account("rules@example.com");
    young.dob = Utc::now().date_naive() - Duration::days(365 * 10);
    assert!(matches!(
        service.complete(young).await,
        Err(AppError::NotAcceptable(_))
    ));

    let mut weak = new_account("rules@example.com");
    weak.password = "password".to_string();
    assert!(matches!(
        service.complete(weak).await,
        Err(AppError::NotAcceptable(_))
    ));

    let mut bad_phone = new_account("rules@example.com");
    bad_phone.phone_number = "12345".to_string();
    assert!(matches!(
        service.complete(bad_phone).await,
        Err(AppError::NotAcceptable(_))
    ));

    let mut taken = new_account("rules@example.com");
    taken.username = active.username.clone().unwrap();
    assert!(matches!(
        service.complete(taken).await,
        Err(AppError::Conflict(_))
    ));
}
