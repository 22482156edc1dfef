use super::*;

/// Tests listing activities related to a document.
///
/// Verifies that entries without a document and entries for other documents are
/// excluded, and that the limit applies.
///
/// Expected: Ok with the newest matching entry
#[tokio::test]
async fn lists_document_entries_with_limit() -> Result<(), DbErr> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();

    let (user, document) = factory::helpers::create_document_with_owner(db).await?;
    let other_document = factory::create_document(db, user.id).await?;
    let now = Utc::now();

    factory::activity::ActivityFactory::new(db, user.id)
        .document_id(document.id)
        .created_at(now - Duration::minutes(5))
        .build()
        .await?;
    let newest = factory::activity::ActivityFactory::new(db, user.id)
        .document_id(document.id)
        .created_at(now)
        .build()
        .await?;
    factory::activity::ActivityFactory::new(db, user.id)
        .document_id(other_document.id)
        .build()
        .await?;
    factory::create_activity(db, user.id).await?;

    let activities = ActivityRepository::new(db)
        .get_by_document_id(document.id, Some(1))
        .await?;

    assert_eq!(activities.len(), 1);
    assert_eq!(activities[0].id, newest.id);

    Ok(())
}
