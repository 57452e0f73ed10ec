use super::*;

/// Tests username and email conflict checks.
///
/// Verifies that a user's own row is ignored when passed as `excluding`, while
/// other rows still count as conflicts.
///
/// Expected: Ok(true) for other users' values, Ok(false) for own values
#[tokio::test]
async fn excludes_own_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Registration)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = factory::registration::RegistrationFactory::new(db)
        .username("alice")
        .email("alice@example.com")
        .build()
        .await?;
    let bob = factory::create_user(db).await?;

    let repo = UserRepository::new(db);

    assert!(repo.username_taken("alice", None).await?);
    assert!(repo.username_taken("alice", Some(bob.user_id)).await?);
    assert!(!repo.username_taken("alice", Some(alice.user_id)).await?);
    assert!(!repo.username_taken("carol", None).await?);

    assert!(repo.email_taken("alice@example.com", Some(bob.user_id)).await?);
    assert!(!repo.email_taken("alice@example.com", Some(alice.user_id)).await?);

    Ok(())
}
