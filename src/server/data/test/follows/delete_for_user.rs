use super::*;

/// Tests removing every follow a user takes part in.
///
/// Expected: Ok with rows on both sides removed and unrelated rows kept
#[tokio::test]
async fn removes_both_directions() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = factory::create_user(db).await?;
    let bob = factory::create_user(db).await?;
    let carol = factory::create_user(db).await?;

    factory::create_follow(db, alice.user_id, bob.user_id).await?;
    factory::create_follow(db, bob.user_id, alice.user_id).await?;
    factory::create_follow(db, carol.user_id, bob.user_id).await?;

    let repo = FollowRepository::new(db);
    let removed = repo.delete_for_user(alice.user_id).await?;

    assert_eq!(removed, 2);
    assert!(repo.exists(carol.user_id, bob.user_id).await?);

    Ok(())
}
