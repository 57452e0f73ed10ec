use super::*;

/// Tests removing a like.
///
/// Expected: Ok(true) the first time, Ok(false) once nothing is left
#[tokio::test]
async fn reports_whether_like_was_removed() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, fan, post) = factory::helpers::create_post_with_audience(db).await?;
    factory::create_like(db, fan.user_id, post.c_id).await?;

    let repo = LikesRepository::new(db);

    assert!(repo.delete(fan.user_id, post.c_id).await?);
    assert!(!repo.delete(fan.user_id, post.c_id).await?);
    assert_eq!(repo.count_for_post(post.c_id).await?, 0);

    Ok(())
}

/// Tests bulk removal of likes on a set of posts.
///
/// Expected: Ok with likes on other posts kept
#[tokio::test]
async fn deletes_likes_for_given_posts_only() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, fan, post) = factory::helpers::create_post_with_audience(db).await?;
    let other_post = factory::create_content(db, &author).await?;
    factory::create_like(db, fan.user_id, post.c_id).await?;
    factory::create_like(db, fan.user_id, other_post.c_id).await?;

    let repo = LikesRepository::new(db);
    let removed = repo.delete_for_posts(vec![post.c_id]).await?;

    assert_eq!(removed, 1);
    assert_eq!(repo.count_for_post(other_post.c_id).await?, 1);
    assert_eq!(repo.delete_for_posts(Vec::new()).await?, 0);

    Ok(())
}
