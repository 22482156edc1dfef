use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;

use crate::model::api::SuccessDto;

/// 201 Created with the success envelope.
pub fn created<T: Serialize>(data: T) -> impl IntoResponse {
    (StatusCode::CREATED, Json(SuccessDto::new(data)))
}

/// 200 OK with the success envelope.
pub fn ok<T: Serialize>(data: T) -> impl IntoResponse {
    (StatusCode::OK, Json(SuccessDto::new(data)))
}

/// 204 No Content with an empty body.
pub fn no_content() -> impl IntoResponse {
    StatusCode::NO_CONTENT
}
