use super::*;

/// Tests that pending registrations are invisible to active lookups.
///
/// Expected: Ok(None) for a pending row looked up by id
#[tokio::test]
async fn ignores_pending_registrations() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Registration)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let pending = factory::create_pending_registration(db, "p@example.com").await?;

    let found = UserRepository::new(db)
        .find_active_by_id(pending.user_id)
        .await
        .unwrap();

    assert!(found.is_none());

    Ok(())
}

/// Tests finding an active account by exact username.
///
/// Expected: Ok(Some) for the exact name, Ok(None) for a different case
#[tokio::test]
async fn matches_exact_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Registration)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::registration::RegistrationFactory::new(db)
        .username("Bob")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let found = repo.find_active_by_username("Bob").await.unwrap();
    assert_eq!(found.map(|u| u.user_id), Some(user.user_id));

    let missing = repo.find_active_by_username("nobody").await.unwrap();
    assert!(missing.is_none());

    Ok(())
}
