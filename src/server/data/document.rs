//! Document data repository for database operations.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::{
    data::{next_timestamp, now},
    model::document::{CreateDocumentParams, UpdateDocumentParams},
};

pub struct DocumentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DocumentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a document and returns the stored row.
    ///
    /// # Returns
    /// - `Ok(Model)` - The created document with matching `created_at`/`updated_at`
    /// - `Err(DbErr)` - Database error, including a foreign key violation on `user_id`
    pub async fn create(
        &self,
        params: CreateDocumentParams,
    ) -> Result<entity::document::Model, DbErr> {
        let now = now();

        entity::document::ActiveModel {
            user_id: ActiveValue::Set(params.user_id),
            title: ActiveValue::Set(params.title),
            file_type: ActiveValue::Set(params.file_type),
            file_content: ActiveValue::Set(params.file_content),
            page_count: ActiveValue::Set(params.page_count),
            score: ActiveValue::Set(params.score),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::document::Model>, DbErr> {
        entity::prelude::Document::find_by_id(id).one(self.db).await
    }

    /// Gets all documents, newest first.
    pub async fn get_all(&self) -> Result<Vec<entity::document::Model>, DbErr> {
        entity::prelude::Document::find()
            .order_by_desc(entity::document::Column::CreatedAt)
            .order_by_desc(entity::document::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets all documents owned by a user, newest first.
    pub async fn get_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Vec<entity::document::Model>, DbErr> {
        entity::prelude::Document::find()
            .filter(entity::document::Column::UserId.eq(user_id))
            .order_by_desc(entity::document::Column::CreatedAt)
            .order_by_desc(entity::document::Column::Id)
            .all(self.db)
            .await
    }

    /// Applies the provided fields to a document and refreshes `updated_at`.
    ///
    /// `updated_at` always moves strictly forward, even for an empty update.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - The updated document
    /// - `Ok(None)` - No document with that id
    /// - `Err(DbErr)` - Database error
    pub async fn update(
        &self,
        id: i32,
        params: UpdateDocumentParams,
    ) -> Result<Option<entity::document::Model>, DbErr> {
        let Some(existing) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let updated_at = next_timestamp(existing.updated_at);
        let mut document: entity::document::ActiveModel = existing.into();

        if let Some(user_id) = params.user_id {
            document.user_id = ActiveValue::Set(user_id);
        }
        if let Some(title) = params.title {
            document.title = ActiveValue::Set(title);
        }
        if let Some(file_type) = params.file_type {
            document.file_type = ActiveValue::Set(file_type);
        }
        if let Some(file_content) = params.file_content {
            document.file_content = ActiveValue::Set(file_content);
        }
        if let Some(page_count) = params.page_count {
            document.page_count = ActiveValue::Set(page_count);
        }
        if let Some(score) = params.score {
            document.score = ActiveValue::Set(score);
        }
        document.updated_at = ActiveValue::Set(updated_at);

        Ok(Some(document.update(self.db).await?))
    }

    /// Deletes a document, returning whether a row was removed.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Document::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
