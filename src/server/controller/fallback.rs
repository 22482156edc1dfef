use axum::{extract::OriginalUri, http::Method};

use crate::server::error::AppError;

/// Answers unmatched API routes with 404 naming the method and path.
pub async fn not_found(method: Method, OriginalUri(uri): OriginalUri) -> AppError {
    AppError::NotFound(format!("Route {} {} not found", method, uri.path()))
}
