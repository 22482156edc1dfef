//! Analysis data repository for database operations.
//!
//! At most one analysis exists per document, enforced by the unique index on
//! `analyses.document_id`.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::{
    data::now,
    model::analysis::{CreateAnalysisParams, UpdateAnalysisParams},
};

fn to_json<T: serde::Serialize>(value: &T) -> Result<serde_json::Value, DbErr> {
    serde_json::to_value(value).map_err(|e| DbErr::Json(e.to_string()))
}

pub struct AnalysisRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AnalysisRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts an analysis and returns the stored row.
    ///
    /// # Returns
    /// - `Ok(Model)` - The created analysis
    /// - `Err(DbErr)` - Database error, including a unique violation when the document
    ///   already has an analysis
    pub async fn create(
        &self,
        params: CreateAnalysisParams,
    ) -> Result<entity::analysis::Model, DbErr> {
        entity::analysis::ActiveModel {
            document_id: ActiveValue::Set(params.document_id),
            feasibility_score: ActiveValue::Set(params.feasibility_score),
            scalability_score: ActiveValue::Set(params.scalability_score),
            financial_health_score: ActiveValue::Set(params.financial_health_score),
            innovation_score: ActiveValue::Set(params.innovation_score),
            market_fit_score: ActiveValue::Set(params.market_fit_score),
            overall_score: ActiveValue::Set(params.overall_score),
            improvement_areas: ActiveValue::Set(to_json(&params.improvement_areas)?),
            comparison_data: ActiveValue::Set(to_json(&params.comparison_data)?),
            created_at: ActiveValue::Set(now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::analysis::Model>, DbErr> {
        entity::prelude::Analysis::find_by_id(id).one(self.db).await
    }

    pub async fn find_by_document_id(
        &self,
        document_id: i32,
    ) -> Result<Option<entity::analysis::Model>, DbErr> {
        entity::prelude::Analysis::find()
            .filter(entity::analysis::Column::DocumentId.eq(document_id))
            .one(self.db)
            .await
    }

    /// Gets all analyses, newest first.
    pub async fn get_all(&self) -> Result<Vec<entity::analysis::Model>, DbErr> {
        entity::prelude::Analysis::find()
            .order_by_desc(entity::analysis::Column::CreatedAt)
            .order_by_desc(entity::analysis::Column::Id)
            .all(self.db)
            .await
    }

    /// Applies the provided fields to an analysis.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - The updated analysis
    /// - `Ok(None)` - No analysis with that id
    /// - `Err(DbErr)` - Database error
    pub async fn update(
        &self,
        id: i32,
        params: UpdateAnalysisParams,
    ) -> Result<Option<entity::analysis::Model>, DbErr> {
        let Some(existing) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let mut analysis: entity::analysis::ActiveModel = existing.clone().into();

        if let Some(document_id) = params.document_id {
            analysis.document_id = ActiveValue::Set(document_id);
        }
        if let Some(score) = params.feasibility_score {
            analysis.feasibility_score = ActiveValue::Set(score);
        }
        if let Some(score) = params.scalability_score {
            analysis.scalability_score = ActiveValue::Set(score);
        }
        if let Some(score) = params.financial_health_score {
            analysis.financial_health_score = ActiveValue::Set(score);
        }
        if let Some(score) = params.innovation_score {
            analysis.innovation_score = ActiveValue::Set(score);
        }
        if let Some(score) = params.market_fit_score {
            analysis.market_fit_score = ActiveValue::Set(score);
        }
        if let Some(score) = params.overall_score {
            analysis.overall_score = ActiveValue::Set(score);
        }
        if let Some(areas) = params.improvement_areas {
            analysis.improvement_areas = ActiveValue::Set(to_json(&areas)?);
        }
        if let Some(comparison) = params.comparison_data {
            analysis.comparison_data = ActiveValue::Set(to_json(&comparison)?);
        }

        if !analysis.is_changed() {
            return Ok(Some(existing));
        }

        Ok(Some(analysis.update(self.db).await?))
    }

    /// Deletes an analysis, returning whether a row was removed.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Analysis::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
