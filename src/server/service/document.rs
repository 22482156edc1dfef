use sea_orm::DatabaseConnection;

use crate::server::{
    data::document::DocumentRepository,
    error::AppError,
    model::document::{CreateDocumentParams, Document, UpdateDocumentParams},
};

pub struct DocumentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DocumentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a document. An unknown owner surfaces as a store error.
    pub async fn create(&self, params: CreateDocumentParams) -> Result<Document, AppError> {
        tracing::debug!(user_id = params.user_id, title = %params.title, "Creating document");

        let document = DocumentRepository::new(self.db)
            .create(params)
            .await
            .inspect_err(|e| tracing::error!("Failed to create document: {}", e))?;

        Ok(Document::from_entity(document))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Document, AppError> {
        tracing::debug!(id, "Fetching document");

        let document = DocumentRepository::new(self.db)
            .find_by_id(id)
            .await
            .inspect_err(|e| tracing::error!("Failed to fetch document {}: {}", id, e))?
            .ok_or_else(|| document_not_found(id))?;

        Ok(Document::from_entity(document))
    }

    pub async fn list(&self) -> Result<Vec<Document>, AppError> {
        tracing::debug!("Listing documents");

        let documents = DocumentRepository::new(self.db)
            .get_all()
            .await
            .inspect_err(|e| tracing::error!("Failed to list documents: {}", e))?;

        Ok(documents.into_iter().map(Document::from_entity).collect())
    }

    /// Lists a user's documents newest first. An unknown user yields an empty list.
    pub async fn list_by_user(&self, user_id: i32) -> Result<Vec<Document>, AppError> {
        tracing::debug!(user_id, "Listing documents for user");

        let documents = DocumentRepository::new(self.db)
            .get_by_user_id(user_id)
            .await
            .inspect_err(|e| {
                tracing::error!("Failed to list documents for user {}: {}", user_id, e)
            })?;

        Ok(documents.into_iter().map(Document::from_entity).collect())
    }

    pub async fn update(&self, id: i32, params: UpdateDocumentParams) -> Result<Document, AppError> {
        tracing::debug!(id, "Updating document");

        let document = DocumentRepository::new(self.db)
            .update(id, params)
            .await
            .inspect_err(|e| tracing::error!("Failed to update document {}: {}", id, e))?
            .ok_or_else(|| document_not_found(id))?;

        Ok(Document::from_entity(document))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        tracing::debug!(id, "Deleting document");

        let deleted = DocumentRepository::new(self.db)
            .delete(id)
            .await
            .inspect_err(|e| tracing::error!("Failed to delete document {}: {}", id, e))?;

        if !deleted {
            return Err(document_not_found(id));
        }

        Ok(())
    }
}

fn document_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Document with ID {} not found", id))
}
