//! Document domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::document::{CreateDocumentDto, DocumentDto, UpdateDocumentDto};

/// Uploaded pitch document.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: i32,
    /// Owning user.
    pub user_id: i32,
    pub title: String,
    /// Content-type tag such as `pdf` or `pptx`.
    pub file_type: String,
    /// Base64 encoded file body.
    pub file_content: String,
    pub page_count: Option<i32>,
    pub score: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Document {
    pub fn from_entity(entity: entity::document::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            title: entity.title,
            file_type: entity.file_type,
            file_content: entity.file_content,
            page_count: entity.page_count,
            score: entity.score,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> DocumentDto {
        DocumentDto {
            id: self.id,
            user_id: self.user_id,
            title: self.title,
            file_type: self.file_type,
            file_content: self.file_content,
            page_count: self.page_count,
            score: self.score,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateDocumentParams {
    pub user_id: i32,
    pub title: String,
    pub file_type: String,
    pub file_content: String,
    pub page_count: Option<i32>,
    pub score: Option<i32>,
}

impl CreateDocumentParams {
    pub fn from_dto(dto: CreateDocumentDto) -> Self {
        Self {
            user_id: dto.user_id,
            title: dto.title,
            file_type: dto.file_type,
            file_content: dto.file_content,
            page_count: dto.page_count,
            score: dto.score,
        }
    }
}

/// Parameters for a partial document update. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateDocumentParams {
    pub user_id: Option<i32>,
    pub title: Option<String>,
    pub file_type: Option<String>,
    pub file_content: Option<String>,
    pub page_count: Option<Option<i32>>,
    pub score: Option<Option<i32>>,
}

impl UpdateDocumentParams {
    pub fn from_dto(dto: UpdateDocumentDto) -> Self {
        Self {
            user_id: dto.user_id,
            title: dto.title,
            file_type: dto.file_type,
            file_content: dto.file_content,
            page_count: dto.page_count,
            score: dto.score,
        }
    }
}
