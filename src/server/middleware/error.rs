//! Error envelope completion.

use axum::{
    extract::{Request, State},
    http::{header, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};

use crate::{
    model::api::ErrorDto,
    server::{
        config::Environment,
        error::{AppError, ErrorTrace},
    },
};

/// Finishes error envelopes on their way out.
///
/// A 413 from the body limit layer carries no envelope and is rebuilt as
/// `AppError::PayloadTooLarge`. Outside production, the error's debug chain is then added
/// as `stack`, using the `ErrorDto` and `ErrorTrace` extensions that `AppError` attaches
/// to its responses. Other responses pass through unchanged.
pub async fn error_detail(
    State(environment): State<Environment>,
    request: Request,
    next: Next,
) -> Response {
    let mut response = next.run(request).await;

    if response.status() == StatusCode::PAYLOAD_TOO_LARGE
        && response.extensions().get::<ErrorDto>().is_none()
    {
        response = AppError::PayloadTooLarge.into_response();
    }

    if environment.is_production() {
        return response;
    }

    let extensions = response.extensions();
    let (Some(body), Some(ErrorTrace(trace))) = (
        extensions.get::<ErrorDto>().cloned(),
        extensions.get::<ErrorTrace>().cloned(),
    ) else {
        return response;
    };

    let (mut parts, _) = response.into_parts();
    parts.headers.remove(header::CONTENT_LENGTH);

    let body = ErrorDto {
        stack: Some(trace),
        ..body
    };

    Response::from_parts(parts, Json(body).into_response().into_body())
}
