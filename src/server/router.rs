//! Route table and middleware stack.
//!
//! API routers are mounted under `/api/<resource>`, each behind its own rate limiter.
//! Paths outside `/api` serve the built client bundle when one exists, falling back to
//! `index.html` for client-side routes.

use axum::{
    extract::DefaultBodyLimit,
    middleware::{from_fn, from_fn_with_state},
    routing::{get, post},
    Router,
};
use tower_http::{
    limit::RequestBodyLimitLayer,
    services::{ServeDir, ServeFile},
};

use crate::server::{
    controller::{
        activity::{
            create_activity, delete_activity, get_activities_by_document, get_activities_by_user,
            get_activity_by_id, get_recent_activities,
        },
        analysis::{
            create_analysis, delete_analysis, get_analyses, get_analysis_by_document,
            get_analysis_by_id, update_analysis,
        },
        document::{
            create_document, delete_document, get_document_by_id, get_documents,
            get_documents_by_user, update_document,
        },
        fallback::not_found,
        health::health,
        user::{
            create_user, delete_user, get_user_by_id, get_user_by_username, get_users,
            update_user,
        },
    },
    docs::openapi_json,
    error::AppError,
    middleware::{
        cors::cors_layer,
        error::error_detail,
        rate_limit::{rate_limit, RateLimiter},
        request_log::log_requests,
        security::security_headers,
    },
    state::AppState,
};

fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_users).post(create_user))
        .route("/username/{username}", get(get_user_by_username))
        .route(
            "/{id}",
            get(get_user_by_id).put(update_user).delete(delete_user),
        )
}

fn document_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_documents).post(create_document))
        .route("/user/{user_id}", get(get_documents_by_user))
        .route(
            "/{id}",
            get(get_document_by_id)
                .put(update_document)
                .delete(delete_document),
        )
}

fn analysis_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_analyses).post(create_analysis))
        .route("/document/{document_id}", get(get_analysis_by_document))
        .route(
            "/{id}",
            get(get_analysis_by_id)
                .put(update_analysis)
                .delete(delete_analysis),
        )
}

fn activity_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_activity))
        .route("/recent", get(get_recent_activities))
        .route("/user/{user_id}", get(get_activities_by_user))
        .route("/document/{document_id}", get(get_activities_by_document))
        .route("/{id}", get(get_activity_by_id).delete(delete_activity))
}

/// Puts a resource router behind its rate limiter. Unsupported methods on known paths
/// answer like unknown routes.
fn limited(routes: Router<AppState>, limiter: &RateLimiter) -> Router<AppState> {
    routes
        .method_not_allowed_fallback(not_found)
        .layer(from_fn_with_state(limiter.clone(), rate_limit))
}

fn api_router(state: &AppState) -> Router<AppState> {
    let limits = &state.rate_limits;

    Router::new()
        .nest("/users", limited(user_routes(), &limits.users))
        .nest("/documents", limited(document_routes(), &limits.documents))
        .nest("/analyses", limited(analysis_routes(), &limits.analyses))
        .nest("/activities", limited(activity_routes(), &limits.activities))
        .route("/docs/openapi.json", get(openapi_json))
        .method_not_allowed_fallback(not_found)
        .fallback(not_found)
}

/// Builds the complete application.
///
/// Middleware order, outermost first: security headers, CORS, request logging, error
/// envelope completion, body limit.
///
/// # Returns
/// - `Ok(Router)` - Application ready to serve
/// - `Err(AppError::ConfigErr)` - CORS origins cannot be turned into header values
pub fn router(state: AppState) -> Result<Router, AppError> {
    let config = state.config.clone();

    let mut app = Router::new()
        .route("/health", get(health))
        .method_not_allowed_fallback(not_found)
        .nest("/api", api_router(&state));

    let index = config.client_dist_dir.join("index.html");
    if index.is_file() {
        tracing::info!(dir = %config.client_dist_dir.display(), "Serving client bundle");
        let bundle = ServeDir::new(&config.client_dist_dir).fallback(ServeFile::new(index));
        app = app.fallback_service(bundle);
    } else {
        app = app.fallback(not_found);
    }

    Ok(app
        .layer(RequestBodyLimitLayer::new(config.max_body_bytes))
        .layer(DefaultBodyLimit::disable())
        .layer(from_fn_with_state(config.environment, error_detail))
        .layer(from_fn(log_requests))
        .layer(cors_layer(&config)?)
        .layer(from_fn(security_headers))
        .with_state(state))
}
