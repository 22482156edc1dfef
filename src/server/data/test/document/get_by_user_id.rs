use super::*;
use chrono::{Duration, Utc};

/// Tests listing a user's documents.
///
/// Verifies that documents of other users are excluded and results are newest first.
///
/// Expected: Ok with the owner's two documents, newest first
#[tokio::test]
async fn lists_only_owned_documents() -> Result<(), DbErr> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;

    let now = Utc::now();
    let first = factory::document::DocumentFactory::new(db, owner.id)
        .created_at(now - Duration::days(1))
        .build()
        .await?;
    let second = factory::document::DocumentFactory::new(db, owner.id)
        .created_at(now)
        .build()
        .await?;
    factory::create_document(db, other.id).await?;

    let documents = DocumentRepository::new(db).get_by_user_id(owner.id).await?;

    let ids: Vec<i32> = documents.iter().map(|d| d.id).collect();
    assert_eq!(ids, vec![second.id, first.id]);

    Ok(())
}

/// Tests listing documents for a user without any.
///
/// Expected: Ok(empty)
#[tokio::test]
async fn returns_empty_for_user_without_documents() -> Result<(), DbErr> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let documents = DocumentRepository::new(db).get_by_user_id(user.id).await?;

    assert!(documents.is_empty());

    Ok(())
}
