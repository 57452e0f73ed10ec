use super::*;

/// Tests pagination over active accounts.
///
/// Verifies that pending registrations are excluded from both the page and
/// the total.
///
/// Expected: Ok with correct page of users and total count
#[tokio::test]
async fn returns_correct_page_of_active_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Registration)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..5 {
        factory::create_user(db).await?;
    }
    factory::create_pending_registration(db, "pending@example.com").await?;

    let repo = UserRepository::new(db);

    let (users, total) = repo.get_active_paginated(0, 3).await.unwrap();
    assert_eq!(users.len(), 3);
    assert_eq!(total, 5);

    let (users, _) = repo.get_active_paginated(1, 3).await.unwrap();
    assert_eq!(users.len(), 2);

    Ok(())
}

/// Tests pagination with an empty table.
///
/// Expected: Ok with empty vector and zero total
#[tokio::test]
async fn returns_empty_for_no_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Registration)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (users, total) = UserRepository::new(db)
        .get_active_paginated(0, 3)
        .await
        .unwrap();

    assert!(users.is_empty());
    assert_eq!(total, 0);

    Ok(())
}

/// Tests a page index far beyond the end of the table.
///
/// Expected: Ok with an empty page and the real total, without overflowing
#[tokio::test]
async fn huge_page_index_returns_empty_page() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Registration)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let repo = UserRepository::new(db);

    let (users, total) = repo.get_active_paginated(u64::MAX - 1, 3).await.unwrap();
    assert!(users.is_empty());
    assert_eq!(total, 0);

    factory::create_user(db).await?;
    let (users, total) = repo.get_active_paginated(u64::MAX - 1, 3).await.unwrap();
    assert!(users.is_empty());
    assert_eq!(total, 1);

    Ok(())
}
