//! Activity domain models and parameters.
//!
//! Activities form an append-only log of what happened to users and documents. Each
//! entry pairs a kind with a details payload whose shape depends on that kind; the pair
//! is modelled as the tagged [`ActivityEvent`] enum so a mismatched payload is rejected
//! when the request is read rather than stored as free-form JSON.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::{
    model::activity::{ActivityDto, ActivityTypeDto, CreateActivityDto},
    server::error::{internal::InternalError, AppError},
};

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DocumentUploadDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_count: Option<i32>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DocumentUpdateDetails {
    pub changed_fields: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct InvestorViewDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub investor_id: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub investor_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<i64>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ScoreImprovementDetails {
    pub previous_score: i32,
    pub new_score: i32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AnalysisCompleteDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis_id: Option<i32>,
    pub overall_score: i32,
}

/// Activity kind together with its typed details.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "activityType", content = "details", rename_all = "snake_case")]
pub enum ActivityEvent {
    DocumentUpload(DocumentUploadDetails),
    DocumentUpdate(DocumentUpdateDetails),
    InvestorView(InvestorViewDetails),
    ScoreImprovement(ScoreImprovementDetails),
    AnalysisComplete(AnalysisCompleteDetails),
}

impl ActivityEvent {
    /// Builds a typed event from a stored or submitted kind tag and details payload.
    pub fn from_parts(activity_type: &str, details: Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(json!({
            "activityType": activity_type,
            "details": details,
        }))
    }

    pub fn activity_type(&self) -> ActivityTypeDto {
        match self {
            Self::DocumentUpload(_) => ActivityTypeDto::DocumentUpload,
            Self::DocumentUpdate(_) => ActivityTypeDto::DocumentUpdate,
            Self::InvestorView(_) => ActivityTypeDto::InvestorView,
            Self::ScoreImprovement(_) => ActivityTypeDto::ScoreImprovement,
            Self::AnalysisComplete(_) => ActivityTypeDto::AnalysisComplete,
        }
    }

    /// Stored representation of the kind tag.
    pub fn type_tag(&self) -> &'static str {
        activity_type_tag(self.activity_type())
    }

    /// Details payload as JSON, with unset optional fields left out.
    pub fn details(&self) -> Value {
        let mut details = Map::new();

        match self {
            Self::DocumentUpload(d) => {
                insert_some(&mut details, "fileName", d.file_name.clone());
                insert_some(&mut details, "pageCount", d.page_count);
            }
            Self::DocumentUpdate(d) => {
                details.insert(
                    "changedFields".to_string(),
                    Value::from(d.changed_fields.clone()),
                );
                insert_some(&mut details, "note", d.note.clone());
            }
            Self::InvestorView(d) => {
                insert_some(&mut details, "investorId", d.investor_id);
                insert_some(&mut details, "investorName", d.investor_name.clone());
                insert_some(&mut details, "durationSeconds", d.duration_seconds);
            }
            Self::ScoreImprovement(d) => {
                details.insert("previousScore".to_string(), Value::from(d.previous_score));
                details.insert("newScore".to_string(), Value::from(d.new_score));
            }
            Self::AnalysisComplete(d) => {
                insert_some(&mut details, "analysisId", d.analysis_id);
                details.insert("overallScore".to_string(), Value::from(d.overall_score));
            }
        }

        Value::Object(details)
    }
}

fn insert_some<T: Into<Value>>(details: &mut Map<String, Value>, key: &str, value: Option<T>) {
    if let Some(value) = value {
        details.insert(key.to_string(), value.into());
    }
}

pub fn activity_type_tag(activity_type: ActivityTypeDto) -> &'static str {
    match activity_type {
        ActivityTypeDto::DocumentUpload => "document_upload",
        ActivityTypeDto::DocumentUpdate => "document_update",
        ActivityTypeDto::InvestorView => "investor_view",
        ActivityTypeDto::ScoreImprovement => "score_improvement",
        ActivityTypeDto::AnalysisComplete => "analysis_complete",
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Activity {
    pub id: i32,
    pub user_id: i32,
    pub document_id: Option<i32>,
    pub event: ActivityEvent,
    pub created_at: DateTime<Utc>,
}

impl Activity {
    /// Converts an entity model to an activity domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Activity)` - The converted activity with a typed event
    /// - `Err(InternalError::MalformedJsonColumn)` - Stored details do not match the kind
    pub fn from_entity(entity: entity::activity::Model) -> Result<Self, InternalError> {
        let event =
            ActivityEvent::from_parts(&entity.activity_type, entity.details).map_err(|e| {
                InternalError::MalformedJsonColumn {
                    table: "activities",
                    column: "details",
                    id: entity.id,
                    source: e,
                }
            })?;

        Ok(Self {
            id: entity.id,
            user_id: entity.user_id,
            document_id: entity.document_id,
            event,
            created_at: entity.created_at,
        })
    }

    pub fn into_dto(self) -> ActivityDto {
        ActivityDto {
            id: self.id,
            user_id: self.user_id,
            document_id: self.document_id,
            activity_type: self.event.activity_type(),
            details: self.event.details(),
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateActivityParams {
    pub user_id: i32,
    pub document_id: Option<i32>,
    pub event: ActivityEvent,
}

impl CreateActivityParams {
    /// Types the submitted details against the submitted kind.
    ///
    /// # Returns
    /// - `Ok(CreateActivityParams)` - Details match the kind
    /// - `Err(AppError::Validation)` - Details do not fit the kind, reported on `details`
    pub fn from_dto(dto: CreateActivityDto) -> Result<Self, AppError> {
        let event = ActivityEvent::from_parts(activity_type_tag(dto.activity_type), dto.details)
            .map_err(|e| AppError::invalid_field("details", e.to_string()))?;

        Ok(Self {
            user_id: dto.user_id,
            document_id: dto.document_id,
            event,
        })
    }
}
