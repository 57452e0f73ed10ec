use super::*;

/// Tests rewriting the owner username on a user's posts.
///
/// Expected: Ok with only that user's posts renamed
#[tokio::test]
async fn renames_only_owned_posts() -> Result<(), DbErr> {
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
    let bobs = factory::create_content(db, &bob).await?;

    let repo = ContentRepository::new(db);
    repo.rename_owner(alice.user_id, "alice_v2").await?;

    let alices = repo.get_all_by_user(alice.user_id).await?;
    assert!(alices.iter().all(|p| p.username == "alice_v2"));

    let untouched = repo.find_by_id(bobs.c_id).await?.unwrap();
    assert_eq!(untouched.username, bobs.username);

    Ok(())
}
