use super::*;

/// Tests looking up a user by username.
///
/// Expected: Ok(Some) for an existing username, Ok(None) otherwise
#[tokio::test]
async fn finds_user_by_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::UserFactory::new(db)
        .username("grace")
        .build()
        .await?;

    let repo = UserRepository::new(db);

    let found = repo.find_by_username("grace").await?;
    assert_eq!(found.map(|u| u.id), Some(created.id));

    let missing = repo.find_by_username("nobody").await?;
    assert!(missing.is_none());

    Ok(())
}
