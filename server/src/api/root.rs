use axum::debug_handler;
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::api_response::*;

#[derive(Serialize, ToSchema)]
#[schema(example = json!({"message": "HR Jobsite backend is running!"}))]
pub struct RootResponse {
    pub message: String,
}

/// GET /
#[utoipa::path(
    get,
    path = "/",
    tag = "service",
    responses((status = 200, description = "Service banner", body = RootResponse))
)]
#[debug_handler]
pub async fn handle() -> Result<ApiResponse<RootResponse>, ApiResponse<()>> {
    Ok(ok_response(RootResponse {
        message: "HR Jobsite backend is running!".to_string(),
    }))
}
