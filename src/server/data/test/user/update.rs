use super::*;

/// Tests a partial update.
///
/// Verifies that only the provided fields change and that the avatar can be cleared.
///
/// Expected: Ok(Some) with the new name and no avatar
#[tokio::test]
async fn updates_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .avatar("https://cdn.example.com/a.png")
        .build()
        .await?;

    let updated = UserRepository::new(db)
        .update(
            user.id,
            UpdateUserParams {
                name: Some("Renamed".to_string()),
                avatar: Some(None),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.name, "Renamed");
    assert!(updated.avatar.is_none());
    assert_eq!(updated.username, user.username);
    assert_eq!(updated.password, user.password);

    Ok(())
}

/// Tests an update carrying no fields.
///
/// Expected: Ok(Some) with the row unchanged
#[tokio::test]
async fn empty_update_returns_existing_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let updated = UserRepository::new(db)
        .update(user.id, UpdateUserParams::default())
        .await?;

    assert_eq!(updated, Some(user));

    Ok(())
}

/// Tests updating a user that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let updated = UserRepository::new(db)
        .update(
            42,
            UpdateUserParams {
                name: Some("Ghost".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert!(updated.is_none());

    Ok(())
}
