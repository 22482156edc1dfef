use axum::{
    extract::{Path, State},
    response::IntoResponse,
};

use crate::{
    model::{
        api::ErrorDto,
        document::{
            CreateDocumentDto, DocumentListResponseDto, DocumentResponseDto, UpdateDocumentDto,
        },
    },
    server::{
        controller::response::{created, no_content, ok},
        error::AppError,
        model::document::{CreateDocumentParams, UpdateDocumentParams},
        schema::Validated,
        service::document::DocumentService,
        state::AppState,
        util::parse::parse_id,
    },
};

pub static DOCUMENT_TAG: &str = "document";

#[utoipa::path(
    post,
    path = "/api/documents",
    tag = DOCUMENT_TAG,
    request_body = CreateDocumentDto,
    responses(
        (status = 201, description = "Document created", body = DocumentResponseDto),
        (status = 400, description = "Invalid document payload", body = ErrorDto),
        (status = 500, description = "Internal server error, including an unknown owner", body = ErrorDto)
    ),
)]
pub async fn create_document(
    State(state): State<AppState>,
    Validated(payload): Validated<CreateDocumentDto>,
) -> Result<impl IntoResponse, AppError> {
    let db = state.gateway.connection().await?;

    let document = DocumentService::new(&db)
        .create(CreateDocumentParams::from_dto(payload))
        .await?;

    Ok(created(DocumentResponseDto {
        document: document.into_dto(),
    }))
}

#[utoipa::path(
    get,
    path = "/api/documents",
    tag = DOCUMENT_TAG,
    responses(
        (status = 200, description = "Documents, newest first", body = DocumentListResponseDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_documents(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let db = state.gateway.connection().await?;

    let documents = DocumentService::new(&db).list().await?;

    Ok(ok(DocumentListResponseDto {
        documents: documents.into_iter().map(|d| d.into_dto()).collect(),
    }))
}

#[utoipa::path(
    get,
    path = "/api/documents/{id}",
    tag = DOCUMENT_TAG,
    params(
        ("id" = i32, Path, description = "Document ID")
    ),
    responses(
        (status = 200, description = "Document found", body = DocumentResponseDto),
        (status = 400, description = "Invalid document ID", body = ErrorDto),
        (status = 404, description = "Document not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_document_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id("id", &id)?;
    let db = state.gateway.connection().await?;

    let document = DocumentService::new(&db).get_by_id(id).await?;

    Ok(ok(DocumentResponseDto {
        document: document.into_dto(),
    }))
}

#[utoipa::path(
    get,
    path = "/api/documents/user/{userId}",
    tag = DOCUMENT_TAG,
    params(
        ("userId" = i32, Path, description = "Owning user ID")
    ),
    responses(
        (status = 200, description = "The user's documents, newest first", body = DocumentListResponseDto),
        (status = 400, description = "Invalid user ID", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_documents_by_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user_id = parse_id("userId", &user_id)?;
    let db = state.gateway.connection().await?;

    let documents = DocumentService::new(&db).list_by_user(user_id).await?;

    Ok(ok(DocumentListResponseDto {
        documents: documents.into_iter().map(|d| d.into_dto()).collect(),
    }))
}

#[utoipa::path(
    put,
    path = "/api/documents/{id}",
    tag = DOCUMENT_TAG,
    params(
        ("id" = i32, Path, description = "Document ID")
    ),
    request_body = UpdateDocumentDto,
    responses(
        (status = 200, description = "Document updated", body = DocumentResponseDto),
        (status = 400, description = "Invalid document payload or ID", body = ErrorDto),
        (status = 404, description = "Document not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_document(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Validated(payload): Validated<UpdateDocumentDto>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id("id", &id)?;
    let db = state.gateway.connection().await?;

    let document = DocumentService::new(&db)
        .update(id, UpdateDocumentParams::from_dto(payload))
        .await?;

    Ok(ok(DocumentResponseDto {
        document: document.into_dto(),
    }))
}

#[utoipa::path(
    delete,
    path = "/api/documents/{id}",
    tag = DOCUMENT_TAG,
    params(
        ("id" = i32, Path, description = "Document ID")
    ),
    responses(
        (status = 204, description = "Document deleted"),
        (status = 400, description = "Invalid document ID", body = ErrorDto),
        (status = 404, description = "Document not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_document(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id("id", &id)?;
    let db = state.gateway.connection().await?;

    DocumentService::new(&db).delete(id).await?;

    Ok(no_content())
}
