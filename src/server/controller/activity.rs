use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
};

use crate::{
    model::{
        activity::{ActivityListResponseDto, ActivityResponseDto, CreateActivityDto},
        api::ErrorDto,
    },
    server::{
        controller::{
            param::LimitParam,
            response::{created, no_content, ok},
        },
        error::AppError,
        model::activity::{Activity, CreateActivityParams},
        schema::Validated,
        service::activity::ActivityService,
        state::AppState,
        util::parse::parse_id,
    },
};

pub static ACTIVITY_TAG: &str = "activity";

fn list_response(activities: Vec<Activity>) -> ActivityListResponseDto {
    ActivityListResponseDto {
        activities: activities.into_iter().map(|a| a.into_dto()).collect(),
    }
}

/// Appends an entry to the activity log. `details` must match `activityType`.
#[utoipa::path(
    post,
    path = "/api/activities",
    tag = ACTIVITY_TAG,
    request_body = CreateActivityDto,
    responses(
        (status = 201, description = "Activity recorded", body = ActivityResponseDto),
        (status = 400, description = "Invalid activity payload", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_activity(
    State(state): State<AppState>,
    Validated(payload): Validated<CreateActivityDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateActivityParams::from_dto(payload)?;
    let db = state.gateway.connection().await?;

    let activity = ActivityService::new(&db).create(params).await?;

    Ok(created(ActivityResponseDto {
        activity: activity.into_dto(),
    }))
}

#[utoipa::path(
    get,
    path = "/api/activities/recent",
    tag = ACTIVITY_TAG,
    params(
        ("limit" = Option<u64>, Query, description = "Maximum entries (default: 10)")
    ),
    responses(
        (status = 200, description = "Most recent activities", body = ActivityListResponseDto),
        (status = 400, description = "Invalid limit", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_recent_activities(
    State(state): State<AppState>,
    Query(param): Query<LimitParam>,
) -> Result<impl IntoResponse, AppError> {
    let limit = param.limit()?;
    let db = state.gateway.connection().await?;

    let activities = ActivityService::new(&db).recent(limit).await?;

    Ok(ok(list_response(activities)))
}

#[utoipa::path(
    get,
    path = "/api/activities/{id}",
    tag = ACTIVITY_TAG,
    params(
        ("id" = i32, Path, description = "Activity ID")
    ),
    responses(
        (status = 200, description = "Activity found", body = ActivityResponseDto),
        (status = 400, description = "Invalid activity ID", body = ErrorDto),
        (status = 404, description = "Activity not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_activity_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id("id", &id)?;
    let db = state.gateway.connection().await?;

    let activity = ActivityService::new(&db).get_by_id(id).await?;

    Ok(ok(ActivityResponseDto {
        activity: activity.into_dto(),
    }))
}

#[utoipa::path(
    get,
    path = "/api/activities/user/{userId}",
    tag = ACTIVITY_TAG,
    params(
        ("userId" = i32, Path, description = "User ID"),
        ("limit" = Option<u64>, Query, description = "Maximum entries")
    ),
    responses(
        (status = 200, description = "The user's activities, newest first", body = ActivityListResponseDto),
        (status = 400, description = "Invalid user ID or limit", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_activities_by_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Query(param): Query<LimitParam>,
) -> Result<impl IntoResponse, AppError> {
    let user_id = parse_id("userId", &user_id)?;
    let limit = param.limit()?;
    let db = state.gateway.connection().await?;

    let activities = ActivityService::new(&db)
        .list_by_user(user_id, limit)
        .await?;

    Ok(ok(list_response(activities)))
}

#[utoipa::path(
    get,
    path = "/api/activities/document/{documentId}",
    tag = ACTIVITY_TAG,
    params(
        ("documentId" = i32, Path, description = "Document ID"),
        ("limit" = Option<u64>, Query, description = "Maximum entries")
    ),
    responses(
        (status = 200, description = "The document's activities, newest first", body = ActivityListResponseDto),
        (status = 400, description = "Invalid document ID or limit", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_activities_by_document(
    State(state): State<AppState>,
    Path(document_id): Path<String>,
    Query(param): Query<LimitParam>,
) -> Result<impl IntoResponse, AppError> {
    let document_id = parse_id("documentId", &document_id)?;
    let limit = param.limit()?;
    let db = state.gateway.connection().await?;

    let activities = ActivityService::new(&db)
        .list_by_document(document_id, limit)
        .await?;

    Ok(ok(list_response(activities)))
}

#[utoipa::path(
    delete,
    path = "/api/activities/{id}",
    tag = ACTIVITY_TAG,
    params(
        ("id" = i32, Path, description = "Activity ID")
    ),
    responses(
        (status = 204, description = "Activity deleted"),
        (status = 400, description = "Invalid activity ID", body = ErrorDto),
        (status = 404, description = "Activity not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_activity(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id("id", &id)?;
    let db = state.gateway.connection().await?;

    ActivityService::new(&db).delete(id).await?;

    Ok(no_content())
}
