use super::*;

/// Tests a partial profile update.
///
/// Verifies that only the supplied fields change.
///
/// Expected: Ok with new username and country, email untouched
#[tokio::test]
async fn updates_only_supplied_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Registration)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let updated = UserRepository::new(db)
        .update(
            user.user_id,
            UpdateUserParam {
                username: Some("renamed".to_string()),
                country: Some("Nepal".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.username, "renamed");
    assert_eq!(updated.country.as_deref(), Some("Nepal"));
    assert_eq!(updated.email, user.email);
    assert_eq!(updated.phone_number, user.phone_number);

    Ok(())
}

/// Tests an update with no fields set.
///
/// Expected: Ok with the account unchanged
#[tokio::test]
async fn returns_unchanged_user_for_empty_update() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Registration)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let updated = UserRepository::new(db)
        .update(user.user_id, UpdateUserParam::default())
        .await
        .unwrap();

    assert_eq!(Some(updated.username), user.username);

    Ok(())
}
