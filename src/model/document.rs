use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::api::present;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DocumentDto {
    pub id: i32,
    pub user_id: i32,
    pub title: String,
    pub file_type: String,
    /// Base64 encoded file body.
    pub file_content: String,
    pub page_count: Option<i32>,
    pub score: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateDocumentDto {
    pub user_id: i32,
    pub title: String,
    pub file_type: String,
    pub file_content: String,
    #[serde(default)]
    pub page_count: Option<i32>,
    #[serde(default)]
    pub score: Option<i32>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDocumentDto {
    #[serde(default)]
    pub user_id: Option<i32>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub file_type: Option<String>,
    #[serde(default)]
    pub file_content: Option<String>,
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<i32>)]
    pub page_count: Option<Option<i32>>,
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<i32>)]
    pub score: Option<Option<i32>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct DocumentResponseDto {
    pub document: DocumentDto,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct DocumentListResponseDto {
    pub documents: Vec<DocumentDto>,
}
