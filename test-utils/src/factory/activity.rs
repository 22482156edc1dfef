//! Activity factory for creating test activity entities.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use serde_json::json;

/// Factory for creating test activity log entries.
pub struct ActivityFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    document_id: Option<i32>,
    activity_type: String,
    details: serde_json::Value,
    created_at: DateTime<Utc>,
}

impl<'a> ActivityFactory<'a> {
    /// Creates a new ActivityFactory with default values.
    ///
    /// Defaults to a `document_upload` entry with no related document.
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        Self {
            db,
            user_id,
            document_id: None,
            activity_type: "document_upload".to_string(),
            details: json!({ "fileName": "deck.pdf", "pageCount": 12 }),
            created_at: Utc::now(),
        }
    }

    pub fn document_id(mut self, document_id: i32) -> Self {
        self.document_id = Some(document_id);
        self
    }

    /// Sets the activity kind together with its details payload.
    pub fn kind(mut self, activity_type: impl Into<String>, details: serde_json::Value) -> Self {
        self.activity_type = activity_type.into();
        self.details = details;
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the activity entity into the database.
    pub async fn build(self) -> Result<entity::activity::Model, DbErr> {
        entity::activity::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            document_id: ActiveValue::Set(self.document_id),
            activity_type: ActiveValue::Set(self.activity_type),
            details: ActiveValue::Set(self.details),
            created_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an activity with default values for the given user.
pub async fn create_activity(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::activity::Model, DbErr> {
    ActivityFactory::new(db, user_id).build().await
}
