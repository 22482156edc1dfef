//! Activity data repository for database operations.
//!
//! Activities are append-only: the repository offers no update.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect, Select,
};

use crate::server::{data::now, model::activity::CreateActivityParams};

pub struct ActivityRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ActivityRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts an activity and returns the stored row.
    pub async fn create(
        &self,
        params: CreateActivityParams,
    ) -> Result<entity::activity::Model, DbErr> {
        entity::activity::ActiveModel {
            user_id: ActiveValue::Set(params.user_id),
            document_id: ActiveValue::Set(params.document_id),
            activity_type: ActiveValue::Set(params.event.type_tag().to_string()),
            details: ActiveValue::Set(params.event.details()),
            created_at: ActiveValue::Set(now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::activity::Model>, DbErr> {
        entity::prelude::Activity::find_by_id(id).one(self.db).await
    }

    /// Gets the most recent activities across all users.
    pub async fn get_recent(&self, limit: Option<u64>) -> Result<Vec<entity::activity::Model>, DbErr> {
        newest_first(entity::prelude::Activity::find(), limit)
            .all(self.db)
            .await
    }

    /// Gets a user's activities, newest first.
    pub async fn get_by_user_id(
        &self,
        user_id: i32,
        limit: Option<u64>,
    ) -> Result<Vec<entity::activity::Model>, DbErr> {
        let query = entity::prelude::Activity::find()
            .filter(entity::activity::Column::UserId.eq(user_id));

        newest_first(query, limit).all(self.db).await
    }

    /// Gets activities related to a document, newest first.
    pub async fn get_by_document_id(
        &self,
        document_id: i32,
        limit: Option<u64>,
    ) -> Result<Vec<entity::activity::Model>, DbErr> {
        let query = entity::prelude::Activity::find()
            .filter(entity::activity::Column::DocumentId.eq(document_id));

        newest_first(query, limit).all(self.db).await
    }

    /// Deletes an activity, returning whether a row was removed.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Activity::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}

fn newest_first(
    query: Select<entity::prelude::Activity>,
    limit: Option<u64>,
) -> Select<entity::prelude::Activity> {
    let query = query
        .order_by_desc(entity::activity::Column::CreatedAt)
        .order_by_desc(entity::activity::Column::Id);

    match limit {
        Some(limit) => query.limit(limit),
        None => query,
    }
}
