use super::*;

/// Tests deleting a document.
///
/// Expected: Ok(true) for an existing document, Ok(false) once it is gone
#[tokio::test]
async fn deletes_document_once() -> Result<(), DbErr> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();

    let (_, document) = factory::helpers::create_document_with_owner(db).await?;
    let repo = DocumentRepository::new(db);

    assert!(repo.delete(document.id).await?);
    assert!(!repo.delete(document.id).await?);

    Ok(())
}
