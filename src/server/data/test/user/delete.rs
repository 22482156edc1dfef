use super::*;

/// Tests deleting a user.
///
/// Verifies that the first delete removes the row and a repeated delete reports that
/// nothing was removed.
///
/// Expected: Ok(true) then Ok(false)
#[tokio::test]
async fn deletes_user_once() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let repo = UserRepository::new(db);

    assert!(repo.delete(user.id).await?);
    assert!(repo.find_by_id(user.id).await?.is_none());
    assert!(!repo.delete(user.id).await?);

    Ok(())
}
