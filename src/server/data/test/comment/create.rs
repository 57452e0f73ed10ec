use super::*;

/// Tests inserting a comment.
///
/// Expected: Ok with the stored comment echoing its inputs
#[tokio::test]
async fn creates_comment() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, commenter, post) = factory::helpers::create_post_with_audience(db).await?;

    let comment = CommentRepository::new(db)
        .create(commenter.user_id, post.c_id, "Great photo".to_string())
        .await?;

    assert_eq!(comment.user_id, commenter.user_id);
    assert_eq!(comment.post_id, post.c_id);
    assert_eq!(comment.user_comment, "Great photo");

    Ok(())
}
