use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use utoipa::ToSchema;

use crate::app_state::AppState;
use crate::catalog::CATALOG_VERSION;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub storage: String,
    pub catalog_version: String,
    pub sources: usize,
}

#[utoipa::path(
    get,
    path = "/healthz",
    tag = "health",
    responses(
        (status = 200, description = "Health check successful", body = HealthResponse),
        (status = 503, description = "Service unavailable")
    )
)]
pub async fn health_check(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, StatusCode> {
    match state.saved_courses.health().await {
        Ok(()) => {
            info!("Health check passed");
            Ok(Json(HealthResponse {
                status: "OK".to_string(),
                storage: "healthy".to_string(),
                catalog_version: CATALOG_VERSION.to_string(),
                sources: state.aggregator.registry().len(),
            }))
        }
        Err(err) => {
            error!(error = %err, "Storage health check failed");
            Err(StatusCode::SERVICE_UNAVAILABLE)
        }
    }
}
