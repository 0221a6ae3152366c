use crate::openapi::HEALTH_TAG;
use crate::state::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Basic health check response
#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct Health {
    status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    database: Option<String>,
}

impl Health {
    fn respond(self, status_code: StatusCode) -> Response {
        (status_code, Json(self)).into_response()
    }
}

/// Liveness: the process is up and serving requests
#[utoipa::path(
    get,
    path = "/health",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "Service is healthy", body = Health)
    )
)]
pub(crate) async fn health_check() -> Response {
    Health {
        status: "ok".to_string(),
        database: None,
    }
    .respond(StatusCode::OK)
}

/// Readiness check handler
#[utoipa::path(
    get,
    path = "/ready",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "Service is ready", body = Health),
        (status = 503, description = "Database is unreachable", body = Health)
    )
)]
pub(crate) async fn ready_check(State(state): State<AppState>) -> Response {
    if state.health_check().await {
        Health {
            status: "ok".to_string(),
            database: Some("healthy".to_string()),
        }
        .respond(StatusCode::OK)
    } else {
        Health {
            status: "error".to_string(),
            database: Some("unavailable".to_string()),
        }
        .respond(StatusCode::SERVICE_UNAVAILABLE)
    }
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .route("/ready", get(ready_check))
}
