use super::*;

/// Tests case-insensitive title search.
///
/// Expected: Ok with every post whose title contains the fragment
#[tokio::test]
async fn matches_title_ignoring_case() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Registration)
        .with_table(entity::prelude::Content)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    factory::content::ContentFactory::new(db, &owner)
        .title("Summer Sunset")
        .build()
        .await?;
    factory::content::ContentFactory::new(db, &owner)
        .title("sunrise over hills")
        .build()
        .await?;
    factory::content::ContentFactory::new(db, &owner)
        .title("Winter")
        .build()
        .await?;

    let found = ContentRepository::new(db).search_by_title("SUN").await?;

    assert_eq!(found.len(), 2);
    assert!(found.iter().all(|c| c.title.to_lowercase().contains("sun")));

    Ok(())
}
