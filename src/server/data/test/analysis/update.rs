use super::*;
use crate::server::model::analysis::Analysis;

/// Tests a partial analysis update replacing one score and the comparison data.
///
/// Expected: Ok(Some) with the new values and other scores unchanged
#[tokio::test]
async fn updates_scores_and_payloads() -> Result<(), DbErr> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();

    let (_, _, analysis) = factory::helpers::create_analysis_with_dependencies(db).await?;

    let updated = AnalysisRepository::new(db)
        .update(
            analysis.id,
            UpdateAnalysisParams {
                overall_score: Some(91),
                comparison_data: Some(ComparisonData {
                    industry_average: 60.0,
                    top_performers: 95.5,
                }),
                ..Default::default()
            },
        )
        .await?
        .unwrap();
    let updated = Analysis::from_entity(updated).unwrap();

    assert_eq!(updated.overall_score, 91);
    assert_eq!(updated.feasibility_score, analysis.feasibility_score);
    assert_eq!(updated.comparison_data.top_performers, 95.5);

    Ok(())
}

/// Tests deleting an analysis twice.
///
/// Expected: Ok(true) then Ok(false)
#[tokio::test]
async fn deletes_analysis_once() -> Result<(), DbErr> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();

    let (_, _, analysis) = factory::helpers::create_analysis_with_dependencies(db).await?;
    let repo = AnalysisRepository::new(db);

    assert!(repo.delete(analysis.id).await?);
    assert!(!repo.delete(analysis.id).await?);

    Ok(())
}
