//! Health check endpoints

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
struct HealthResponse {
    status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    mongodb: Option<bool>,
}

/// Liveness and readiness routes
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(liveness_check))
        .route("/ready", get(readiness_check))
        .with_state(state)
}

async fn liveness_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        mongodb: None,
    })
}

/// Readiness check - verifies the MongoDB connection
async fn readiness_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let mongodb_healthy = database::mongodb::check_health(&state.mongo_client).await;

    Json(HealthResponse {
        status: if mongodb_healthy { "ready" } else { "unhealthy" }.to_string(),
        mongodb: Some(mongodb_healthy),
    })
}
