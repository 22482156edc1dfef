//! OpenAPI document generated from the handler annotations.

use axum::Json;
use utoipa::OpenApi;

use crate::server::controller::{activity, analysis, document, health, user};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "VentureLens API",
        description = "Users, pitch documents, document analyses and the activity log"
    ),
    paths(
        health::health,
        user::create_user,
        user::get_users,
        user::get_user_by_id,
        user::get_user_by_username,
        user::update_user,
        user::delete_user,
        document::create_document,
        document::get_documents,
        document::get_document_by_id,
        document::get_documents_by_user,
        document::update_document,
        document::delete_document,
        analysis::create_analysis,
        analysis::get_analyses,
        analysis::get_analysis_by_id,
        analysis::get_analysis_by_document,
        analysis::update_analysis,
        analysis::delete_analysis,
        activity::create_activity,
        activity::get_recent_activities,
        activity::get_activity_by_id,
        activity::get_activities_by_user,
        activity::get_activities_by_document,
        activity::delete_activity,
    ),
    tags(
        (name = "health", description = "Service liveness"),
        (name = "user", description = "User accounts"),
        (name = "document", description = "Pitch documents"),
        (name = "analysis", description = "Document analyses"),
        (name = "activity", description = "Append-only activity log"),
    )
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
