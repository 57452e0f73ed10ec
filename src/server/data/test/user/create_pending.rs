use super::*;

/// Tests creating a pending registration.
///
/// Verifies that the new row carries the OTP, is inactive and unverified, and can
/// be found again by email.
///
/// Expected: Ok with pending registration retrievable by email
#[tokio::test]
async fn creates_pending_registration() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Registration)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let expiry = Utc::now() + Duration::minutes(10);
    let created = repo
        .create_pending(IssueOtpParam {
            email: "new@example.com".to_string(),
            otp: 424242,
            otp_expiry: expiry,
            retry_attempts: 1,
        })
        .await?;

    assert!(!created.is_active);
    assert!(!created.otp_verified);
    assert_eq!(created.otp, Some(424242));
    assert_eq!(created.retry_attempts, 1);
    assert_eq!(created.username, None);

    let found = repo.find_by_email("new@example.com").await?;
    assert_eq!(found.map(|r| r.user_id), Some(created.user_id));

    Ok(())
}

/// Tests that a second pending row with the same email is rejected.
///
/// Expected: Err from the unique email constraint
#[tokio::test]
async fn fails_for_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Registration)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_pending_registration(db, "dup@example.com").await?;

    let result = UserRepository::new(db)
        .create_pending(IssueOtpParam {
            email: "dup@example.com".to_string(),
            otp: 111111,
            otp_expiry: Utc::now(),
            retry_attempts: 1,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
