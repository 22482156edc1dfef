use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Kind of event recorded in the activity log.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ActivityTypeDto {
    DocumentUpload,
    DocumentUpdate,
    InvestorView,
    ScoreImprovement,
    AnalysisComplete,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ActivityDto {
    pub id: i32,
    pub user_id: i32,
    pub document_id: Option<i32>,
    pub activity_type: ActivityTypeDto,
    /// Payload whose shape depends on `activityType`.
    #[schema(value_type = Object)]
    pub details: serde_json::Value,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateActivityDto {
    pub user_id: i32,
    #[serde(default)]
    pub document_id: Option<i32>,
    pub activity_type: ActivityTypeDto,
    #[schema(value_type = Object)]
    pub details: serde_json::Value,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct ActivityResponseDto {
    pub activity: ActivityDto,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct ActivityListResponseDto {
    pub activities: Vec<ActivityDto>,
}
