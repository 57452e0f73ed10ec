use super::*;

/// Tests case-insensitive substring search over usernames.
///
/// Expected: Ok with both differently-cased matches and no pending rows
#[tokio::test]
async fn matches_substring_ignoring_case() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Registration)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::registration::RegistrationFactory::new(db)
        .username("TrendSetter")
        .build()
        .await?;
    factory::registration::RegistrationFactory::new(db)
        .username("backtrend")
        .build()
        .await?;
    factory::registration::RegistrationFactory::new(db)
        .username("unrelated")
        .build()
        .await?;

    let mut found = UserRepository::new(db).search_usernames("TREND").await?;
    found.sort();

    assert_eq!(found, vec!["TrendSetter".to_string(), "backtrend".to_string()]);

    Ok(())
}
