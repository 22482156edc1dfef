use axum::{extract::State, Json};
use chrono::Utc;

use crate::{model::health::HealthDto, server::state::AppState};

pub static HEALTH_TAG: &str = "health";

/// Liveness probe reporting whether the database gateway is connected.
#[utoipa::path(
    get,
    path = "/health",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "Service is running", body = HealthDto)
    ),
)]
pub async fn health(State(state): State<AppState>) -> Json<HealthDto> {
    let database = if state.gateway.is_ready().await {
        "connected"
    } else {
        "disconnected"
    };

    Json(HealthDto {
        status: "ok".to_string(),
        timestamp: Utc::now(),
        environment: state.config.environment.to_string(),
        database: database.to_string(),
    })
}
