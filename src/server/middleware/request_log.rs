//! Request logging.

use std::time::Instant;

use axum::{extract::Request, http::header, middleware::Next, response::Response};

use crate::server::util::request::{client_address, original_path};

/// Logs every request on arrival and on completion.
///
/// Completed requests with a 4xx or 5xx status are logged at `error`, the rest at `info`.
pub async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = original_path(&request);
    let query = request.uri().query().map(str::to_string);
    let client = client_address(&request);
    let user_agent = request
        .headers()
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    tracing::info!(
        %method,
        %path,
        query = query.as_deref(),
        %client,
        user_agent = user_agent.as_deref(),
        "Incoming request"
    );

    let started = Instant::now();
    let response = next.run(request).await;
    let status = response.status().as_u16();
    let duration_ms = started.elapsed().as_millis() as u64;

    if response.status().is_client_error() || response.status().is_server_error() {
        tracing::error!(%method, %path, status, duration_ms, "Request failed");
    } else {
        tracing::info!(%method, %path, status, duration_ms, "Request completed");
    }

    response
}
