use axum::debug_handler;
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::api_response::*;

#[derive(Serialize, ToSchema)]
#[schema(example = json!({"status": "ok"}))]
pub struct HealthcheckResponse {
    pub status: String,
}

/// GET /health
/// Return simple healthcheck response
#[utoipa::path(
    get,
    path = "/health",
    tag = "service",
    responses((status = 200, description = "Service is alive", body = HealthcheckResponse))
)]
#[debug_handler]
pub async fn handle() -> Result<ApiResponse<HealthcheckResponse>, ApiResponse<()>> {
    Ok(ok_response(HealthcheckResponse {
        status: "ok".to_string(),
    }))
}
