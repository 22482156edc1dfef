use super::*;

/// Tests the recent feed limit and ordering.
///
/// Expected: Ok with the two newest activities, newest first
#[tokio::test]
async fn returns_newest_entries_up_to_limit() -> Result<(), DbErr> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let now = Utc::now();

    let mut created = Vec::new();
    for minutes in [30, 20, 10] {
        let activity = factory::activity::ActivityFactory::new(db, user.id)
            .created_at(now - Duration::minutes(minutes))
            .build()
            .await?;
        created.push(activity.id);
    }

    let recent = ActivityRepository::new(db).get_recent(Some(2)).await?;

    let ids: Vec<i32> = recent.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![created[2], created[1]]);

    Ok(())
}

/// Tests the recent feed without a limit.
///
/// Expected: Ok with every activity
#[tokio::test]
async fn returns_everything_without_limit() -> Result<(), DbErr> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    for _ in 0..3 {
        factory::create_activity(db, user.id).await?;
    }

    let recent = ActivityRepository::new(db).get_recent(None).await?;

    assert_eq!(recent.len(), 3);

    Ok(())
}
