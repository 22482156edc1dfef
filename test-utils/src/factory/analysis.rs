//! Analysis factory for creating test analysis entities.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use serde_json::json;

/// Factory for creating test analyses attached to an existing document.
pub struct AnalysisFactory<'a> {
    db: &'a DatabaseConnection,
    document_id: i32,
    overall_score: i32,
    improvement_areas: serde_json::Value,
    comparison_data: serde_json::Value,
    created_at: DateTime<Utc>,
}

impl<'a> AnalysisFactory<'a> {
    /// Creates a new AnalysisFactory with default values.
    ///
    /// Every sub-score defaults to 70 and the overall score to 72. Improvement areas
    /// hold a single market entry and comparison data uses fixed benchmark values.
    pub fn new(db: &'a DatabaseConnection, document_id: i32) -> Self {
        Self {
            db,
            document_id,
            overall_score: 72,
            improvement_areas: json!([
                {
                    "area": "Market",
                    "score": 60,
                    "suggestion": "Quantify the serviceable market"
                }
            ]),
            comparison_data: json!({
                "industryAverage": 65.0,
                "topPerformers": 88.0
            }),
            created_at: Utc::now(),
        }
    }

    pub fn overall_score(mut self, overall_score: i32) -> Self {
        self.overall_score = overall_score;
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the analysis entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::analysis::Model)` - Created analysis entity
    /// - `Err(DbErr)` - Database error during insert, including a duplicate document
    pub async fn build(self) -> Result<entity::analysis::Model, DbErr> {
        entity::analysis::ActiveModel {
            document_id: ActiveValue::Set(self.document_id),
            feasibility_score: ActiveValue::Set(70),
            scalability_score: ActiveValue::Set(70),
            financial_health_score: ActiveValue::Set(70),
            innovation_score: ActiveValue::Set(70),
            market_fit_score: ActiveValue::Set(70),
            overall_score: ActiveValue::Set(self.overall_score),
            improvement_areas: ActiveValue::Set(self.improvement_areas),
            comparison_data: ActiveValue::Set(self.comparison_data),
            created_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an analysis with default values for the given document.
pub async fn create_analysis(
    db: &DatabaseConnection,
    document_id: i32,
) -> Result<entity::analysis::Model, DbErr> {
    AnalysisFactory::new(db, document_id).build().await
}
