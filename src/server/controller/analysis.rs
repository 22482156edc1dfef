use axum::{
    extract::{Path, State},
    response::IntoResponse,
};

use crate::{
    model::{
        analysis::{
            AnalysisListResponseDto, AnalysisResponseDto, CreateAnalysisDto,
            OptionalAnalysisResponseDto, UpdateAnalysisDto,
        },
        api::ErrorDto,
    },
    server::{
        controller::response::{created, no_content, ok},
        error::AppError,
        model::analysis::{CreateAnalysisParams, UpdateAnalysisParams},
        schema::Validated,
        service::analysis::AnalysisService,
        state::AppState,
        util::parse::parse_id,
    },
};

pub static ANALYSIS_TAG: &str = "analysis";

#[utoipa::path(
    post,
    path = "/api/analyses",
    tag = ANALYSIS_TAG,
    request_body = CreateAnalysisDto,
    responses(
        (status = 201, description = "Analysis created", body = AnalysisResponseDto),
        (status = 400, description = "Invalid analysis payload", body = ErrorDto),
        (status = 409, description = "Document already has an analysis", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_analysis(
    State(state): State<AppState>,
    Validated(payload): Validated<CreateAnalysisDto>,
) -> Result<impl IntoResponse, AppError> {
    let db = state.gateway.connection().await?;

    let analysis = AnalysisService::new(&db)
        .create(CreateAnalysisParams::from_dto(payload))
        .await?;

    Ok(created(AnalysisResponseDto {
        analysis: analysis.into_dto(),
    }))
}

#[utoipa::path(
    get,
    path = "/api/analyses",
    tag = ANALYSIS_TAG,
    responses(
        (status = 200, description = "Analyses, newest first", body = AnalysisListResponseDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_analyses(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let db = state.gateway.connection().await?;

    let analyses = AnalysisService::new(&db).list().await?;

    Ok(ok(AnalysisListResponseDto {
        analyses: analyses.into_iter().map(|a| a.into_dto()).collect(),
    }))
}

#[utoipa::path(
    get,
    path = "/api/analyses/{id}",
    tag = ANALYSIS_TAG,
    params(
        ("id" = i32, Path, description = "Analysis ID")
    ),
    responses(
        (status = 200, description = "Analysis found", body = AnalysisResponseDto),
        (status = 400, description = "Invalid analysis ID", body = ErrorDto),
        (status = 404, description = "Analysis not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_analysis_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id("id", &id)?;
    let db = state.gateway.connection().await?;

    let analysis = AnalysisService::new(&db).get_by_id(id).await?;

    Ok(ok(AnalysisResponseDto {
        analysis: analysis.into_dto(),
    }))
}

/// A document without analysis answers 200 with `analysis: null`.
#[utoipa::path(
    get,
    path = "/api/analyses/document/{documentId}",
    tag = ANALYSIS_TAG,
    params(
        ("documentId" = i32, Path, description = "Analysed document ID")
    ),
    responses(
        (status = 200, description = "The document's analysis, or null", body = OptionalAnalysisResponseDto),
        (status = 400, description = "Invalid document ID", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_analysis_by_document(
    State(state): State<AppState>,
    Path(document_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let document_id = parse_id("documentId", &document_id)?;
    let db = state.gateway.connection().await?;

    let analysis = AnalysisService::new(&db)
        .get_by_document_id(document_id)
        .await?;

    Ok(ok(OptionalAnalysisResponseDto {
        analysis: analysis.map(|a| a.into_dto()),
    }))
}

#[utoipa::path(
    put,
    path = "/api/analyses/{id}",
    tag = ANALYSIS_TAG,
    params(
        ("id" = i32, Path, description = "Analysis ID")
    ),
    request_body = UpdateAnalysisDto,
    responses(
        (status = 200, description = "Analysis updated", body = AnalysisResponseDto),
        (status = 400, description = "Invalid analysis payload or ID", body = ErrorDto),
        (status = 404, description = "Analysis not found", body = ErrorDto),
        (status = 409, description = "Target document already has an analysis", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_analysis(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Validated(payload): Validated<UpdateAnalysisDto>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id("id", &id)?;
    let db = state.gateway.connection().await?;

    let analysis = AnalysisService::new(&db)
        .update(id, UpdateAnalysisParams::from_dto(payload))
        .await?;

    Ok(ok(AnalysisResponseDto {
        analysis: analysis.into_dto(),
    }))
}

#[utoipa::path(
    delete,
    path = "/api/analyses/{id}",
    tag = ANALYSIS_TAG,
    params(
        ("id" = i32, Path, description = "Analysis ID")
    ),
    responses(
        (status = 204, description = "Analysis deleted"),
        (status = 400, description = "Invalid analysis ID", body = ErrorDto),
        (status = 404, description = "Analysis not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_analysis(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id("id", &id)?;
    let db = state.gateway.connection().await?;

    AnalysisService::new(&db).delete(id).await?;

    Ok(no_content())
}
