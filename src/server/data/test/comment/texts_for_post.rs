use super::*;

/// Tests listing comment texts on a post.
///
/// Expected: Ok with texts in insertion order, excluding other posts
#[tokio::test]
async fn lists_texts_in_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, commenter, post) = factory::helpers::create_post_with_audience(db).await?;
    let other_post = factory::create_content(db, &author).await?;

    let repo = CommentRepository::new(db);
    repo.create(commenter.user_id, post.c_id, "first".to_string())
        .await?;
    repo.create(author.user_id, post.c_id, "second".to_string())
        .await?;
    repo.create(commenter.user_id, other_post.c_id, "elsewhere".to_string())
        .await?;

    let texts = repo.texts_for_post(post.c_id).await?;

    assert_eq!(texts, vec!["first".to_string(), "second".to_string()]);

    Ok(())
}
