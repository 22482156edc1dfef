//! Document factory for creating test document entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test documents owned by an existing user.
pub struct DocumentFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    title: String,
    file_type: String,
    file_content: String,
    page_count: Option<i32>,
    score: Option<i32>,
    created_at: DateTime<Utc>,
}

impl<'a> DocumentFactory<'a> {
    /// Creates a new DocumentFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Pitch Deck {id}"`
    /// - file_type: `"pdf"`
    /// - file_content: base64 of `"%PDF-1.4"`
    /// - page_count: `Some(12)`
    /// - score: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `user_id` - ID of the owning user
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            user_id,
            title: format!("Pitch Deck {}", id),
            file_type: "pdf".to_string(),
            file_content: "JVBERi0xLjQ=".to_string(),
            page_count: Some(12),
            score: None,
            created_at: Utc::now(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn file_type(mut self, file_type: impl Into<String>) -> Self {
        self.file_type = file_type.into();
        self
    }

    pub fn score(mut self, score: i32) -> Self {
        self.score = Some(score);
        self
    }

    /// Overrides the creation timestamp; `updated_at` follows it.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the document entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::document::Model)` - Created document entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::document::Model, DbErr> {
        entity::document::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            title: ActiveValue::Set(self.title),
            file_type: ActiveValue::Set(self.file_type),
            file_content: ActiveValue::Set(self.file_content),
            page_count: ActiveValue::Set(self.page_count),
            score: ActiveValue::Set(self.score),
            created_at: ActiveValue::Set(self.created_at),
            updated_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a document with default values for the given owner.
pub async fn create_document(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::document::Model, DbErr> {
    DocumentFactory::new(db, user_id).build().await
}
