use crate::server::{
    data::analysis::AnalysisRepository,
    model::analysis::{ComparisonData, CreateAnalysisParams, ImprovementArea, UpdateAnalysisParams},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_by_document_id;
mod update;

async fn setup() -> test_utils::context::TestContext {
    TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Document)
        .with_table(entity::prelude::Analysis)
        .build()
        .await
        .unwrap()
}

fn params(document_id: i32) -> CreateAnalysisParams {
    CreateAnalysisParams {
        document_id,
        feasibility_score: 70,
        scalability_score: 65,
        financial_health_score: 58,
        innovation_score: 82,
        market_fit_score: 74,
        overall_score: 70,
        improvement_areas: vec![ImprovementArea {
            area: "Financials".to_string(),
            score: 58,
            suggestion: "Add a 24 month runway projection".to_string(),
        }],
        comparison_data: ComparisonData {
            industry_average: 64.5,
            top_performers: 88.0,
        },
    }
}
