use super::*;

/// Tests following and counting in both directions.
///
/// Expected: Ok with one follower for the target and one following for the follower
#[tokio::test]
async fn records_follow() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = factory::create_user(db).await?;
    let bob = factory::create_user(db).await?;

    let repo = FollowRepository::new(db);
    repo.create(alice.user_id, bob.user_id).await?;

    assert!(repo.exists(alice.user_id, bob.user_id).await?);
    assert!(!repo.exists(bob.user_id, alice.user_id).await?);
    assert_eq!(repo.count_followers(bob.user_id).await?, 1);
    assert_eq!(repo.count_following(alice.user_id).await?, 1);
    assert_eq!(repo.count_followers(alice.user_id).await?, 0);

    assert!(repo.delete(alice.user_id, bob.user_id).await?);
    assert!(!repo.delete(alice.user_id, bob.user_id).await?);

    Ok(())
}
