use test_utils::{builder::TestBuilder, factory};

use super::{as_user, drain};
use crate::server::{
    error::AppError,
    service::comment::CommentService,
    task::{BackgroundTask, TaskQueue},
};

/// Tests commenting on someone else's post.
///
/// Expected: Ok with the comment stored and the owner emailed
#[tokio::test]
async fn adds_comment_and_notifies_owner() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (tasks, mut receiver) = TaskQueue::new();

    let (author, fan, post) = factory::helpers::create_post_with_audience(db).await.unwrap();
    let fan = as_user(fan);

    let comment = CommentService::new(db, &tasks)
        .add(&fan, post.c_id, "Lovely colours".to_string())
        .await
        .unwrap();

    assert_eq!(comment.user_id, fan.user_id);
    assert_eq!(comment.post_id, post.c_id);
    assert_eq!(
        drain(&mut receiver),
        vec![BackgroundTask::CommentEmail {
            email: author.email,
            commenter: fan.username.clone(),
            title: post.title,
            comment: "Lovely colours".to_string(),
        }]
    );
}

/// Tests rejected comments.
///
/// Expected: NotFound for a missing post, BadRequest for a blank comment
#[tokio::test]
async fn rejects_missing_post_and_blank_text() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (tasks, mut receiver) = TaskQueue::new();

    let (author, _, post) = factory::helpers::create_post_with_audience(db).await.unwrap();
    let author = as_user(author);
    let service = CommentService::new(db, &tasks);

    assert!(matches!(
        service.add(&author, 9999, "hello".to_string()).await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        service.add(&author, post.c_id, "   ".to_string()).await,
        Err(AppError::BadRequest(_))
    ));

    service
        .add(&author, post.c_id, "my own post".to_string())
        .await
        .unwrap();
    assert!(drain(&mut receiver).is_empty());
}
