use super::*;
use crate::server::model::analysis::Analysis;

/// Tests creating an analysis.
///
/// Verifies that the JSON payload columns read back into their typed form.
///
/// Expected: Ok with matching improvement areas and comparison data
#[tokio::test]
async fn creates_analysis_with_typed_payloads() -> Result<(), DbErr> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();

    let (_, document) = factory::helpers::create_document_with_owner(db).await?;

    let stored = AnalysisRepository::new(db).create(params(document.id)).await?;
    let analysis = Analysis::from_entity(stored).unwrap();

    assert_eq!(analysis.document_id, document.id);
    assert_eq!(analysis.improvement_areas, params(document.id).improvement_areas);
    assert_eq!(analysis.comparison_data, params(document.id).comparison_data);

    Ok(())
}

/// Tests creating a second analysis for the same document.
///
/// Expected: Err(DbErr) classified as a unique constraint violation
#[tokio::test]
async fn rejects_second_analysis_for_document() -> Result<(), DbErr> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();

    let (_, document) = factory::helpers::create_document_with_owner(db).await?;
    let repo = AnalysisRepository::new(db);
    repo.create(params(document.id)).await?;

    let result = repo.create(params(document.id)).await;

    assert!(matches!(
        result.as_ref().map_err(|e| e.sql_err()),
        Err(Some(sea_orm::SqlErr::UniqueConstraintViolation(_)))
    ));

    Ok(())
}
