use sea_orm::DatabaseConnection;

use crate::server::{
    data::activity::ActivityRepository,
    error::AppError,
    model::activity::{Activity, CreateActivityParams},
};

/// Row limit applied to the recent feed when the caller gives none.
pub const DEFAULT_RECENT_LIMIT: u64 = 10;

pub struct ActivityService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ActivityService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Appends an activity to the log.
    pub async fn create(&self, params: CreateActivityParams) -> Result<Activity, AppError> {
        tracing::debug!(
            user_id = params.user_id,
            activity_type = params.event.type_tag(),
            "Recording activity"
        );

        let activity = ActivityRepository::new(self.db)
            .create(params)
            .await
            .inspect_err(|e| tracing::error!("Failed to record activity: {}", e))?;

        Ok(Activity::from_entity(activity)?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Activity, AppError> {
        tracing::debug!(id, "Fetching activity");

        let activity = ActivityRepository::new(self.db)
            .find_by_id(id)
            .await
            .inspect_err(|e| tracing::error!("Failed to fetch activity {}: {}", id, e))?
            .ok_or_else(|| activity_not_found(id))?;

        Ok(Activity::from_entity(activity)?)
    }

    /// Most recent activities across all users, `DEFAULT_RECENT_LIMIT` when unlimited.
    pub async fn recent(&self, limit: Option<u64>) -> Result<Vec<Activity>, AppError> {
        let limit = limit.unwrap_or(DEFAULT_RECENT_LIMIT);
        tracing::debug!(limit, "Listing recent activities");

        let activities = ActivityRepository::new(self.db)
            .get_recent(Some(limit))
            .await
            .inspect_err(|e| tracing::error!("Failed to list recent activities: {}", e))?;

        convert_all(activities)
    }

    pub async fn list_by_user(
        &self,
        user_id: i32,
        limit: Option<u64>,
    ) -> Result<Vec<Activity>, AppError> {
        tracing::debug!(user_id, limit, "Listing activities for user");

        let activities = ActivityRepository::new(self.db)
            .get_by_user_id(user_id, limit)
            .await
            .inspect_err(|e| {
                tracing::error!("Failed to list activities for user {}: {}", user_id, e)
            })?;

        convert_all(activities)
    }

    pub async fn list_by_document(
        &self,
        document_id: i32,
        limit: Option<u64>,
    ) -> Result<Vec<Activity>, AppError> {
        tracing::debug!(document_id, limit, "Listing activities for document");

        let activities = ActivityRepository::new(self.db)
            .get_by_document_id(document_id, limit)
            .await
            .inspect_err(|e| {
                tracing::error!(
                    "Failed to list activities for document {}: {}",
                    document_id,
                    e
                )
            })?;

        convert_all(activities)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        tracing::debug!(id, "Deleting activity");

        let deleted = ActivityRepository::new(self.db)
            .delete(id)
            .await
            .inspect_err(|e| tracing::error!("Failed to delete activity {}: {}", id, e))?;

        if !deleted {
            return Err(activity_not_found(id));
        }

        Ok(())
    }
}

fn convert_all(activities: Vec<entity::activity::Model>) -> Result<Vec<Activity>, AppError> {
    activities
        .into_iter()
        .map(|a| Activity::from_entity(a).map_err(Into::into))
        .collect()
}

fn activity_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Activity with ID {} not found", id))
}
