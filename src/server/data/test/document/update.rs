use super::*;

/// Tests a partial document update.
///
/// Verifies that provided fields change, others stay, and `updated_at` moves forward
/// while `created_at` is kept.
///
/// Expected: Ok(Some) with a later `updated_at`
#[tokio::test]
async fn updates_fields_and_refreshes_timestamp() -> Result<(), DbErr> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();

    let (_, document) = factory::helpers::create_document_with_owner(db).await?;

    let updated = DocumentRepository::new(db)
        .update(
            document.id,
            UpdateDocumentParams {
                title: Some("Series A deck".to_string()),
                score: Some(Some(81)),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.title, "Series A deck");
    assert_eq!(updated.score, Some(81));
    assert_eq!(updated.file_type, document.file_type);
    assert_eq!(updated.created_at, document.created_at);
    assert!(updated.updated_at > document.updated_at);

    Ok(())
}

/// Tests that back-to-back updates keep `updated_at` strictly increasing.
///
/// Expected: each update's timestamp is later than the previous one
#[tokio::test]
async fn consecutive_updates_are_strictly_ordered() -> Result<(), DbErr> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();

    let (_, document) = factory::helpers::create_document_with_owner(db).await?;
    let repo = DocumentRepository::new(db);

    let mut previous = document.updated_at;
    for _ in 0..3 {
        let updated = repo
            .update(document.id, UpdateDocumentParams::default())
            .await?
            .unwrap();
        assert!(updated.updated_at > previous);
        previous = updated.updated_at;
    }

    Ok(())
}

/// Tests updating a document that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_document() -> Result<(), DbErr> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();

    let updated = DocumentRepository::new(db)
        .update(7, UpdateDocumentParams::default())
        .await?;

    assert!(updated.is_none());

    Ok(())
}
