use super::*;

/// Tests activating a pending registration.
///
/// Verifies that profile fields are written, the account becomes active and
/// the OTP state is cleared.
///
/// Expected: Ok with active user findable by username
#[tokio::test]
async fn activates_pending_registration() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Registration)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let pending = factory::create_pending_registration(db, "alice@example.com").await?;

    let repo = UserRepository::new(db);
    let user = repo
        .complete_registration(CompleteRegistrationParam {
            user_id: pending.user_id,
            username: "alice".to_string(),
            password_hash: "$argon2id$placeholder".to_string(),
            phone_number: "9876543210".to_string(),
            country: "India".to_string(),
            dob: NaiveDate::from_ymd_opt(2000, 5, 17).unwrap(),
        })
        .await
        .unwrap();

    assert_eq!(user.user_id, pending.user_id);
    assert_eq!(user.username, "alice");
    assert_eq!(user.email, "alice@example.com");

    let row = repo.find_by_id(pending.user_id).await?.unwrap();
    assert!(row.is_active);
    assert_eq!(row.otp, None);
    assert_eq!(row.otp_expiry, None);

    let found = repo.find_active_by_username("alice").await.unwrap();
    assert!(found.is_some());

    Ok(())
}
