use super::*;

/// Tests paging through all posts.
///
/// Expected: Ok with posts ordered by id and the overall total
#[tokio::test]
async fn returns_posts_in_id_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Registration)
        .with_table(entity::prelude::Content)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let mut ids = Vec::new();
    for _ in 0..7 {
        ids.push(factory::create_content(db, &owner).await?.c_id);
    }

    let repo = ContentRepository::new(db);

    let (first, total) = repo.get_paginated(0, 6).await?;
    assert_eq!(total, 7);
    assert_eq!(
        first.iter().map(|c| c.c_id).collect::<Vec<_>>(),
        ids[..6].to_vec()
    );

    let (second, _) = repo.get_paginated(1, 6).await?;
    assert_eq!(second.len(), 1);
    assert_eq!(second[0].c_id, ids[6]);

    Ok(())
}

/// Tests filtering pages by author username.
///
/// Expected: Ok with only the requested author's posts counted
#[tokio::test]
async fn filters_by_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Registration)
        .with_table(entity::prelude::Content)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = factory::create_user(db).await?;
    let bob = factory::create_user(db).await?;
    factory::create_content(db, &alice).await?;
    factory::create_content(db, &alice).await?;
    factory::create_content(db, &bob).await?;

    let (posts, total) = ContentRepository::new(db)
        .get_by_username_paginated(alice.username.as_deref().unwrap(), 0, 6)
        .await?;

    assert_eq!(total, 2);
    assert!(posts.iter().all(|p| p.user_id == alice.user_id));

    Ok(())
}

/// Tests a page index far beyond the last post.
///
/// Expected: Ok with an empty page and the real total
#[tokio::test]
async fn huge_page_index_returns_empty_page() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Registration)
        .with_table(entity::prelude::Content)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    factory::create_content(db, &owner).await?;

    let repo = ContentRepository::new(db);
    let (posts, total) = repo.get_paginated(u64::MAX - 1, 6).await?;
    assert!(posts.is_empty());
    assert_eq!(total, 1);

    let (posts, total) = repo
        .get_by_username_paginated("nobody", u64::MAX - 1, 6)
        .await?;
    assert!(posts.is_empty());
    assert_eq!(total, 0);

    Ok(())
}
