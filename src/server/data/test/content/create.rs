use super::*;

/// Tests inserting a post.
///
/// Expected: Ok with the post findable by id
#[tokio::test]
async fn creates_content() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Registration)
        .with_table(entity::prelude::Content)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let repo = ContentRepository::new(db);

    let post = repo
        .create(CreateContentParam {
            user_id: owner.user_id,
            username: owner.username.clone().unwrap(),
            title: "Sunset".to_string(),
            caption: "Evening at the beach".to_string(),
            file: "content_database/x/20240101000000_sunset.jpg".to_string(),
        })
        .await?;

    let found = repo.find_by_id(post.c_id).await?;
    assert_eq!(found, Some(post));

    Ok(())
}

/// Tests looking up a post that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_post() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Registration)
        .with_table(entity::prelude::Content)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let found = ContentRepository::new(db).find_by_id(999).await?;

    assert!(found.is_none());

    Ok(())
}
