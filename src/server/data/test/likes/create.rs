use super::*;

/// Tests recording a like and counting it.
///
/// Expected: Ok with the like visible through `exists` and `count_for_post`
#[tokio::test]
async fn records_like() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, fan, post) = factory::helpers::create_post_with_audience(db).await?;
    let repo = LikesRepository::new(db);

    assert!(!repo.exists(fan.user_id, post.c_id).await?);
    repo.create(fan.user_id, post.c_id).await?;

    assert!(repo.exists(fan.user_id, post.c_id).await?);
    assert_eq!(repo.count_for_post(post.c_id).await?, 1);

    Ok(())
}
