use super::*;

/// Tests creating a document.
///
/// Verifies that both timestamps are set to the same instant on insert.
///
/// Expected: Ok with `created_at == updated_at`
#[tokio::test]
async fn creates_document() -> Result<(), DbErr> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let document = DocumentRepository::new(db)
        .create(CreateDocumentParams {
            user_id: user.id,
            title: "Seed deck".to_string(),
            file_type: "pdf".to_string(),
            file_content: "JVBERi0xLjQ=".to_string(),
            page_count: Some(14),
            score: None,
        })
        .await?;

    assert_eq!(document.user_id, user.id);
    assert_eq!(document.page_count, Some(14));
    assert!(document.score.is_none());
    assert_eq!(document.created_at, document.updated_at);

    Ok(())
}

/// Tests creating a document for a user that does not exist.
///
/// Expected: Err(DbErr) from the foreign key on `user_id`
#[tokio::test]
async fn rejects_unknown_owner() -> Result<(), DbErr> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();

    let result = DocumentRepository::new(db)
        .create(CreateDocumentParams {
            user_id: 999,
            title: "Orphan".to_string(),
            file_type: "pdf".to_string(),
            file_content: "JVBERi0xLjQ=".to_string(),
            page_count: None,
            score: None,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
