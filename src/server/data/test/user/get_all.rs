use super::*;
use chrono::{Duration, Utc};

/// Tests listing users newest first.
///
/// Expected: Ok with users ordered by descending creation time
#[tokio::test]
async fn lists_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let older = factory::user::UserFactory::new(db)
        .created_at(now - Duration::hours(2))
        .build()
        .await?;
    let newer = factory::user::UserFactory::new(db)
        .created_at(now)
        .build()
        .await?;

    let users = UserRepository::new(db).get_all(None).await?;

    let ids: Vec<i32> = users.iter().map(|u| u.id).collect();
    assert_eq!(ids, vec![newer.id, older.id]);

    Ok(())
}

/// Tests filtering users by role tag.
///
/// Expected: Ok containing only investors
#[tokio::test]
async fn filters_by_user_type() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .user_type("startup")
        .build()
        .await?;
    let investor = factory::user::UserFactory::new(db)
        .user_type("investor")
        .build()
        .await?;

    let users = UserRepository::new(db)
        .get_all(Some(UserType::Investor))
        .await?;

    assert_eq!(users.len(), 1);
    assert_eq!(users[0].id, investor.id);

    Ok(())
}
