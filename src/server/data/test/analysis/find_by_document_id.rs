use super::*;

/// Tests looking up the analysis of a document.
///
/// Expected: Ok(Some) for an analysed document, Ok(None) for one without analysis
#[tokio::test]
async fn finds_analysis_by_document() -> Result<(), DbErr> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();

    let (user, document, analysis) =
        factory::helpers::create_analysis_with_dependencies(db).await?;
    let unanalysed = factory::create_document(db, user.id).await?;

    let repo = AnalysisRepository::new(db);

    let found = repo.find_by_document_id(document.id).await?;
    assert_eq!(found.map(|a| a.id), Some(analysis.id));

    let missing = repo.find_by_document_id(unanalysed.id).await?;
    assert!(missing.is_none());

    Ok(())
}
