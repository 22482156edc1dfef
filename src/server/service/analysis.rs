use sea_orm::DatabaseConnection;

use crate::server::{
    data::analysis::AnalysisRepository,
    error::AppError,
    model::analysis::{Analysis, CreateAnalysisParams, UpdateAnalysisParams},
};

const ALREADY_ANALYSED: &str = "An analysis already exists for this document";

pub struct AnalysisService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AnalysisService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates the analysis of a document.
    ///
    /// # Returns
    /// - `Ok(Analysis)` - The created analysis
    /// - `Err(AppError::Conflict)` - The document already has an analysis
    /// - `Err(AppError::DbErr)` - Any other store failure, including an unknown document
    pub async fn create(&self, params: CreateAnalysisParams) -> Result<Analysis, AppError> {
        tracing::debug!(document_id = params.document_id, "Creating analysis");

        let analysis = AnalysisRepository::new(self.db)
            .create(params)
            .await
            .map_err(|e| AppError::conflict_on_unique(e, ALREADY_ANALYSED))
            .inspect_err(|e| tracing::error!("Failed to create analysis: {}", e))?;

        Ok(Analysis::from_entity(analysis)?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Analysis, AppError> {
        tracing::debug!(id, "Fetching analysis");

        let analysis = AnalysisRepository::new(self.db)
            .find_by_id(id)
            .await
            .inspect_err(|e| tracing::error!("Failed to fetch analysis {}: {}", id, e))?
            .ok_or_else(|| analysis_not_found(id))?;

        Ok(Analysis::from_entity(analysis)?)
    }

    /// Gets the analysis of a document; a document without one yields `None`.
    pub async fn get_by_document_id(&self, document_id: i32) -> Result<Option<Analysis>, AppError> {
        tracing::debug!(document_id, "Fetching analysis for document");

        let analysis = AnalysisRepository::new(self.db)
            .find_by_document_id(document_id)
            .await
            .inspect_err(|e| {
                tracing::error!("Failed to fetch analysis for document {}: {}", document_id, e)
            })?;

        Ok(analysis.map(Analysis::from_entity).transpose()?)
    }

    pub async fn list(&self) -> Result<Vec<Analysis>, AppError> {
        tracing::debug!("Listing analyses");

        let analyses = AnalysisRepository::new(self.db)
            .get_all()
            .await
            .inspect_err(|e| tracing::error!("Failed to list analyses: {}", e))?;

        analyses
            .into_iter()
            .map(|a| Analysis::from_entity(a).map_err(Into::into))
            .collect()
    }

    /// Applies a partial update. Moving the analysis onto an already analysed document
    /// is a conflict.
    pub async fn update(&self, id: i32, params: UpdateAnalysisParams) -> Result<Analysis, AppError> {
        tracing::debug!(id, "Updating analysis");

        let analysis = AnalysisRepository::new(self.db)
            .update(id, params)
            .await
            .map_err(|e| AppError::conflict_on_unique(e, ALREADY_ANALYSED))
            .inspect_err(|e| tracing::error!("Failed to update analysis {}: {}", id, e))?
            .ok_or_else(|| analysis_not_found(id))?;

        Ok(Analysis::from_entity(analysis)?)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        tracing::debug!(id, "Deleting analysis");

        let deleted = AnalysisRepository::new(self.db)
            .delete(id)
            .await
            .inspect_err(|e| tracing::error!("Failed to delete analysis {}: {}", id, e))?;

        if !deleted {
            return Err(analysis_not_found(id));
        }

        Ok(())
    }
}

fn analysis_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Analysis with ID {} not found", id))
}
