use super::*;

/// Tests purging abandoned registrations.
///
/// Verifies that only inactive rows whose OTP expired before the cutoff are
/// removed; fresh pending rows and active accounts survive.
///
/// Expected: Ok(1) with only the stale row gone
#[tokio::test]
async fn removes_only_stale_pending_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Registration)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let stale = factory::registration::RegistrationFactory::new(db)
        .pending()
        .otp(111111, now - Duration::hours(30))
        .build()
        .await?;
    let fresh = factory::create_pending_registration(db, "fresh@example.com").await?;
    let active = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let removed = repo.delete_stale_pending(now - Duration::hours(24)).await?;

    assert_eq!(removed, 1);
    assert!(repo.find_by_id(stale.user_id).await?.is_none());
    assert!(repo.find_by_id(fresh.user_id).await?.is_some());
    assert!(repo.find_by_id(active.user_id).await?.is_some());

    Ok(())
}
