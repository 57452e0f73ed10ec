use super::*;

/// Tests listing followers with usernames and follow times.
///
/// Expected: Ok with followers ordered by when they followed
#[tokio::test]
async fn lists_followers_oldest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let star = factory::create_user(db).await?;
    let early = factory::create_user(db).await?;
    let late = factory::create_user(db).await?;

    let now = Utc::now();
    factory::follows::create_follow_at(db, late.user_id, star.user_id, now).await?;
    factory::follows::create_follow_at(db, early.user_id, star.user_id, now - Duration::days(1))
        .await?;

    let repo = FollowRepository::new(db);
    let followers = repo.get_followers(star.user_id).await?;

    let names: Vec<_> = followers.iter().map(|f| Some(f.username.clone())).collect();
    assert_eq!(names, vec![early.username.clone(), late.username.clone()]);

    let following = repo.get_following(early.user_id).await?;
    assert_eq!(following.len(), 1);
    assert_eq!(Some(following[0].username.clone()), star.username);

    assert_eq!(
        repo.follower_ids(star.user_id).await?,
        vec![early.user_id, late.user_id]
    );

    Ok(())
}
