use super::*;

/// Tests replacing the OTP on a pending registration.
///
/// Verifies that the code, expiry and retry counter are overwritten and any
/// earlier verification is cleared.
///
/// Expected: Ok with new OTP stored and `otp_verified` reset
#[tokio::test]
async fn replaces_otp_and_resets_verification() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Registration)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let pending = factory::registration::RegistrationFactory::new(db)
        .pending()
        .otp_verified(true)
        .build()
        .await?;

    let repo = UserRepository::new(db);
    repo.reissue_otp(
        pending.user_id,
        IssueOtpParam {
            email: pending.email.clone(),
            otp: 654321,
            otp_expiry: Utc::now() + Duration::minutes(10),
            retry_attempts: 2,
        },
    )
    .await?;

    let updated = repo.find_by_id(pending.user_id).await?.unwrap();
    assert_eq!(updated.otp, Some(654321));
    assert_eq!(updated.retry_attempts, 2);
    assert!(!updated.otp_verified);

    repo.mark_otp_verified(pending.user_id).await?;
    let verified = repo.find_by_id(pending.user_id).await?.unwrap();
    assert!(verified.otp_verified);

    Ok(())
}
