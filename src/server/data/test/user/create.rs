use super::*;

/// Tests creating a user.
///
/// Verifies that the repository inserts the row and returns it with a generated id
/// and creation timestamp.
///
/// Expected: Ok with stored fields
#[tokio::test]
async fn creates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo.create(params("ada")).await?;

    assert!(user.id > 0);
    assert_eq!(user.username, "ada");
    assert_eq!(user.user_type, "startup");
    assert!(user.avatar.is_none());

    let stored = repo.find_by_id(user.id).await?;
    assert_eq!(stored, Some(user));

    Ok(())
}

/// Tests creating two users with the same username.
///
/// Verifies that the unique index on `username` rejects the second insert.
///
/// Expected: Err(DbErr) classified as a unique constraint violation
#[tokio::test]
async fn rejects_duplicate_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(params("ada")).await?;

    let result = repo.create(params("ada")).await;

    assert!(matches!(
        result.as_ref().map_err(|e| e.sql_err()),
        Err(Some(sea_orm::SqlErr::UniqueConstraintViolation(_)))
    ));

    Ok(())
}
