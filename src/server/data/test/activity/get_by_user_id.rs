use super::*;

/// Tests listing a user's activities.
///
/// Expected: Ok with only that user's entries
#[tokio::test]
async fn lists_only_user_entries() -> Result<(), DbErr> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let own = factory::create_activity(db, user.id).await?;
    factory::create_activity(db, other.id).await?;

    let activities = ActivityRepository::new(db)
        .get_by_user_id(user.id, None)
        .await?;

    assert_eq!(activities.len(), 1);
    assert_eq!(activities[0].id, own.id);

    Ok(())
}
